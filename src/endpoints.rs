//! The API endpoint URIs.

/// The root route which redirects to the transactions page.
pub const ROOT: &str = "/";
/// The page that hosts the new transaction dialog.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The transactions page with the new transaction dialog open.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
