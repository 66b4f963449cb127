use super::{Formatter, Params, ToSql};

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// Period delimited
pub(super) struct Period<L>(pub(super) L);

/// Delimited by an arbitrary separator
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

/// A fragment preceded by fixed text, e.g. `" WHERE "` and a condition.
pub(super) struct Prefixed<S>(pub(super) &'static str, pub(super) S);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        Delimited(self.0, ", ").to_sql(f);
    }
}

impl<L, I> ToSql for Period<L>
where
    L: IntoIterator<Item = I>,
    I: ToSql,
{
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        Delimited(self.0, ".").to_sql(f);
    }
}

impl<L> ToSql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = self.1;
        }
    }
}

impl<S: ToSql> ToSql for Prefixed<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, self.0 self.1);
    }
}
