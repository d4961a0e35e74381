//! An in-memory implementation of the transaction store.

use std::sync::{Arc, Mutex};

use time::OffsetDateTime;

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{Transaction, TransactionDraft, TransactionId},
};

/// A transaction store that keeps transactions in memory.
///
/// Clones share the same underlying storage, so the store can be
/// handed to the router state and still be inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransactionStore {
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl MemoryTransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn create(&mut self, draft: TransactionDraft) -> Result<Transaction, Error> {
        let mut transactions = self.transactions.lock().map_err(|_| Error::StoreLockError)?;

        // IDs are sequential and start at 1. Nothing is ever removed
        // from this store, so the length is enough to derive them.
        let id = transactions.len() as TransactionId + 1;

        let transaction = Transaction {
            id,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            transaction_type: draft.transaction_type,
            created_at: OffsetDateTime::now_utc(),
        };

        transactions.push(transaction.clone());

        Ok(transaction)
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        let transactions = self.transactions.lock().map_err(|_| Error::StoreLockError)?;

        transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn count(&self) -> Result<u32, Error> {
        let transactions = self.transactions.lock().map_err(|_| Error::StoreLockError)?;

        Ok(transactions.len() as u32)
    }
}
