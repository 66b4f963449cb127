use super::Db;
use crate::Result;

use tessera_core::driver::operation::Transaction as TransactionOp;

use std::ops::{Deref, DerefMut};

/// An open transaction on a [`Db`].
///
/// Statements run through the guard (it dereferences to `Db`). Dropping the
/// guard without calling [`commit`](Transaction::commit) rolls the
/// transaction back.
#[derive(Debug)]
pub struct Transaction<'a> {
    db: &'a mut Db,
    finished: bool,
}

impl<'a> Transaction<'a> {
    pub(super) async fn start(db: &'a mut Db) -> Result<Transaction<'a>> {
        db.connection.exec(TransactionOp::Start.into()).await?;
        tracing::debug!("transaction started");

        Ok(Transaction {
            db,
            finished: false,
        })
    }

    pub async fn commit(mut self) -> Result<()> {
        self.finish(TransactionOp::Commit).await
    }

    pub async fn rollback(mut self) -> Result<()> {
        self.finish(TransactionOp::Rollback).await
    }

    async fn finish(&mut self, op: TransactionOp) -> Result<()> {
        self.db.connection.exec(op.into()).await?;
        self.finished = true;
        tracing::debug!(?op, "transaction finished");
        Ok(())
    }
}

impl Deref for Transaction<'_> {
    type Target = Db;

    fn deref(&self) -> &Db {
        self.db
    }
}

impl DerefMut for Transaction<'_> {
    fn deref_mut(&mut self) -> &mut Db {
        self.db
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::warn!("transaction dropped without commit; rolling back");
            self.db.connection.start_rollback();
        }
    }
}
