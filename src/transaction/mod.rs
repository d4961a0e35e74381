//! Transaction management for the app.
//!
//! This module contains everything related to creating transactions:
//! - The transaction models and the form schema that validates input
//! - The view handlers for the transactions page and the new
//!   transaction dialog
//! - The endpoint that hands validated drafts to the transaction store

mod core;
mod create_endpoint;
mod new_transaction_dialog;
mod schema;
mod transactions_page;

pub use core::{Transaction, TransactionDraft, TransactionId, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use new_transaction_dialog::get_new_transaction_dialog;
pub use schema::NewTransactionForm;
pub use transactions_page::get_transactions_page;
