//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::stores::TransactionStore;

/// The state of the REST server.
///
/// The transaction store is injected here rather than looked up
/// through any shared global, so tests can swap in a fake.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The store that persists transactions for the rest of the app.
    pub transaction_store: T,
}

impl<T> AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState] with the given transaction store.
    pub fn new(transaction_store: T) -> Self {
        Self { transaction_store }
    }
}

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct TransactionState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The store for managing user transactions.
    pub transaction_store: T,
}

impl<T> FromRef<AppState<T>> for TransactionState<T>
where
    T: TransactionStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<T>) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}
