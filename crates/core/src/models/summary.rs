use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use super::transaction::TransactionRecord;
use crate::services::aggregator::aggregate;

/// Income and expense totals over one fetched batch of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    /// Sum of all income amounts
    pub total_income: f64,

    /// Sum of all expense amounts
    pub total_expense: f64,
}

impl SummaryTotals {
    pub fn new(total_income: f64, total_expense: f64) -> Self {
        Self {
            total_income,
            total_expense,
        }
    }

    /// Aggregate both record sets.
    pub fn from_records(expenses: &[TransactionRecord], incomes: &[TransactionRecord]) -> Self {
        Self {
            total_income: aggregate(incomes),
            total_expense: aggregate(expenses),
        }
    }

    /// Income minus expense. Negative when overspent.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.total_income - self.total_expense
    }

    /// Expense divided by income, uncapped.
    ///
    /// With no income the ratio is `1.0`: everything counts as spent.
    #[must_use]
    pub fn spending_ratio(&self) -> f64 {
        if self.total_income > 0.0 {
            self.total_expense / self.total_income
        } else {
            1.0
        }
    }

    /// Ratio clamped to `1.0`, for sizing a progress bar.
    #[must_use]
    pub fn capped_spending_ratio(&self) -> f64 {
        self.spending_ratio().min(1.0)
    }

    #[must_use]
    pub fn exceeds_income(&self) -> bool {
        self.spending_ratio() > 1.0
    }
}

/// Everything the home screen shows, computed from one fetch cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeDashboard {
    pub totals: SummaryTotals,

    /// First `recent_limit` expenses, as line items
    pub recent_expenses: Vec<LineItem>,

    /// First `recent_limit` incomes, as line items
    pub recent_incomes: Vec<LineItem>,

    /// Full expense list, for the "View All" screen
    pub expenses: Vec<TransactionRecord>,

    /// Full income list, for the "View All" screen
    pub incomes: Vec<TransactionRecord>,
}
