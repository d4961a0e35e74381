//! The schema for the new transaction form.
//!
//! Browsers submit every field as text. This module owns the boundary
//! where that text becomes a typed [TransactionDraft], so the create
//! endpoint never sees raw form values.

use serde::Deserialize;

use crate::{
    Error,
    transaction::core::{TransactionDraft, TransactionType},
};

/// The form data for creating a transaction, as submitted by the browser.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTransactionForm {
    /// Text detailing the transaction.
    pub description: String,
    /// The price as entered in the number input.
    pub price: String,
    /// The category as entered.
    pub category: String,
    /// The selected transaction type, "income" or "outcome".
    #[serde(rename = "type")]
    pub transaction_type: String,
}

impl NewTransactionForm {
    /// Validate the raw form values and produce a [TransactionDraft].
    ///
    /// The price must parse as a number and the type must be one of
    /// the two known values. Description and category are taken as
    /// given; the form marks them as required and nothing more is
    /// enforced here, so empty strings pass.
    ///
    /// # Errors
    /// Returns [Error::InvalidPrice] if the price is not numeric, or
    /// [Error::InvalidTransactionType] if the type is unknown.
    pub fn validate(self) -> Result<TransactionDraft, Error> {
        let price: f64 = match self.price.trim().parse() {
            Ok(price) => price,
            Err(_) => return Err(Error::InvalidPrice(self.price)),
        };

        let transaction_type: TransactionType = self.transaction_type.parse()?;

        Ok(TransactionDraft {
            description: self.description,
            price,
            category: self.category,
            transaction_type,
        })
    }
}
