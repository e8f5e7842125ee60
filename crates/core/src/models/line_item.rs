use serde::{Deserialize, Serialize};

use crate::services::formatter::format_signed_amount;

/// A record turned into display-ready fields for one row of a list.
///
/// Built fresh from a `TransactionRecord` on every render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,

    /// Key into the navigation icon table (see `category_resolver`)
    pub icon_key: String,

    /// Negative for expenses, positive for incomes
    pub signed_amount: f64,

    /// `DD/MM/YYYY`, or the raw date when it could not be parsed
    pub display_date: String,
}

impl LineItem {
    /// `+$12.50` / `-$45.00`
    #[must_use]
    pub fn amount_text(&self) -> String {
        format_signed_amount(self.signed_amount)
    }

    /// True for money coming in (drawn in the income colour).
    #[must_use]
    pub fn is_credit(&self) -> bool {
        self.signed_amount >= 0.0
    }
}
