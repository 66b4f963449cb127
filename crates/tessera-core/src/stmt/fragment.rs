use super::Value;
use crate::{Error, Result};

/// A caller-supplied SQL fragment such as a condition or SET assignment list.
///
/// The text is inserted verbatim and is trusted; it is neither parsed nor
/// escaped. Values attached with [`bind`](Fragment::bind) replace `?` markers
/// in the text, in order, and are sent as bound parameters. Markers inside
/// quoted literals and identifiers (`'...'`, `"..."`, `` `...` ``) are left
/// alone. A fragment with no bound values is
/// copied as-is, including any `?` it contains.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    pub sql: String,
    pub params: Vec<Value>,
}

/// A piece of a fragment's text: either raw SQL or a parameter marker.
#[derive(Debug, PartialEq)]
pub enum Piece<'a> {
    Sql(&'a str),
    Param(&'a Value),
}

impl Fragment {
    pub fn new(sql: impl Into<String>) -> Fragment {
        Fragment {
            sql: sql.into(),
            params: vec![],
        }
    }

    pub fn bind(mut self, value: impl Into<Value>) -> Fragment {
        self.params.push(value.into());
        self
    }

    /// True when the text is blank and no values are bound.
    ///
    /// A blank fragment that still carries values is not empty; it fails
    /// [`validate`](Fragment::validate) instead of being dropped.
    pub fn is_empty(&self) -> bool {
        self.sql.trim().is_empty() && self.params.is_empty()
    }

    /// Byte offsets of every `?` marker outside quoted literals and identifiers.
    fn markers(&self) -> Vec<usize> {
        let mut ret = vec![];
        let mut quote = None;

        for (pos, ch) in self.sql.char_indices() {
            match (ch, quote) {
                ('\'' | '"' | '`', None) => quote = Some(ch),
                (ch, Some(open)) if ch == open => quote = None,
                ('?', None) => ret.push(pos),
                _ => {}
            }
        }

        ret
    }

    pub fn validate(&self) -> Result<()> {
        if self.params.is_empty() {
            return Ok(());
        }

        let markers = self.markers().len();
        if markers != self.params.len() {
            return Err(Error::invalid_statement(format!(
                "fragment `{}` has {} markers but {} bound values",
                self.sql,
                markers,
                self.params.len()
            )));
        }

        Ok(())
    }

    /// Splits the text at its markers, pairing each with its bound value.
    pub fn pieces(&self) -> Vec<Piece<'_>> {
        if self.params.is_empty() {
            return vec![Piece::Sql(&self.sql)];
        }

        let mut ret = vec![];
        let mut start = 0;

        for (pos, param) in self.markers().into_iter().zip(&self.params) {
            ret.push(Piece::Sql(&self.sql[start..pos]));
            ret.push(Piece::Param(param));
            start = pos + 1;
        }

        ret.push(Piece::Sql(&self.sql[start..]));
        ret
    }
}

impl From<&str> for Fragment {
    fn from(value: &str) -> Fragment {
        Fragment::new(value)
    }
}

impl From<String> for Fragment {
    fn from(value: String) -> Fragment {
        Fragment::new(value)
    }
}
