//! Defines the core data models for transactions.

use std::{fmt, str::FromStr};

use time::OffsetDateTime;

use crate::Error;

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// Whether a transaction brings money in or takes money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Money coming in, e.g. a salary payment.
    Income,
    /// Money going out, e.g. a purchase or a bill.
    Outcome,
}

impl TransactionType {
    /// The value used for this type in forms and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Outcome => "outcome",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    /// Parse a transaction type from its wire value.
    ///
    /// Only the exact strings "income" and "outcome" are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "outcome" => Ok(Self::Outcome),
            other => Err(Error::InvalidTransactionType(other.to_owned())),
        }
    }
}

/// A validated transaction produced by the new transaction form.
///
/// A draft exists only between form validation and the call to the
/// transaction store; nothing in the app holds on to one afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// Text detailing the transaction.
    pub description: String,
    /// The value of the transaction. Zero and negative values are
    /// accepted; the form does not enforce a sign or range.
    pub price: f64,
    /// The category the transaction belongs to.
    pub category: String,
    /// Whether the transaction is income or outcome.
    pub transaction_type: TransactionType,
}

/// A transaction that has been accepted by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Text detailing the transaction.
    pub description: String,
    /// The value of the transaction.
    pub price: f64,
    /// The category the transaction belongs to.
    pub category: String,
    /// Whether the transaction is income or outcome.
    pub transaction_type: TransactionType,
    /// When the transaction was recorded.
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod transaction_type_tests {
    use super::TransactionType;
    use crate::Error;

    #[test]
    fn parses_the_two_wire_values() {
        assert_eq!("income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!("outcome".parse::<TransactionType>(), Ok(TransactionType::Outcome));
    }

    #[test]
    fn rejects_anything_else() {
        let cases = ["", "Income", "OUTCOME", "transfer", "income "];

        for case in cases {
            assert_eq!(
                case.parse::<TransactionType>(),
                Err(Error::InvalidTransactionType(case.to_owned())),
                "want {case:?} to be rejected"
            );
        }
    }

    #[test]
    fn round_trips_through_as_str() {
        for transaction_type in [TransactionType::Income, TransactionType::Outcome] {
            assert_eq!(
                transaction_type.as_str().parse::<TransactionType>(),
                Ok(transaction_type)
            );
        }
    }
}
