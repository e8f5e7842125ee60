use serde::{Deserialize, Serialize};

/// Whether a record is money going out or coming in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    /// Sign applied to the (always positive) amount when displaying a record.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            TransactionKind::Expense => -1.0,
            TransactionKind::Income => 1.0,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Expense => write!(f, "Expense"),
            TransactionKind::Income => write!(f, "Income"),
        }
    }
}

/// A single expense or income entry as stored by the backend.
///
/// Expenses and incomes share this shape; which one a record is depends on
/// the endpoint it came from, not on a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Always positive; the sign comes from `TransactionKind`
    pub amount: f64,

    pub description: String,

    /// Timestamp as sent by the backend, normally `YYYY-MM-DDTHH:MM:SS`
    pub date: String,

    /// Id of the `Category` this record belongs to
    #[serde(rename = "category")]
    pub category_id: String,
}

impl TransactionRecord {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        date: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            date: date.into(),
            category_id: category_id.into(),
        }
    }
}
