use crate::api::traits::SmartSpendApi;
use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::summary::{HomeDashboard, SummaryTotals};
use crate::models::transaction::{TransactionKind, TransactionRecord};
use crate::services::formatter::to_line_items;

/// Builds the home screen from one fetch cycle.
///
/// Fetch failures never reach the caller: a failed endpoint contributes an
/// empty list, so the summary is always computed over finished batches.
pub struct DashboardService {
    recent_limit: usize,
}

impl DashboardService {
    pub fn new(recent_limit: usize) -> Self {
        Self { recent_limit }
    }

    /// Fetch categories, incomes and expenses, then summarize.
    pub async fn load(&self, api: &dyn SmartSpendApi, token: &str) -> HomeDashboard {
        let categories = or_empty("categories", api.get_categories().await);
        let incomes = or_empty(
            "incomes",
            api.get_records(token, TransactionKind::Income).await,
        );
        let expenses = or_empty(
            "expenses",
            api.get_records(token, TransactionKind::Expense).await,
        );
        tracing::info!(
            categories = categories.len(),
            expenses = expenses.len(),
            incomes = incomes.len(),
            "dashboard data loaded"
        );
        self.summarize(&categories, expenses, incomes)
    }

    /// Pure part of [`DashboardService::load`]: totals plus the first
    /// `recent_limit` records of each kind as line items.
    #[must_use]
    pub fn summarize(
        &self,
        categories: &[Category],
        expenses: Vec<TransactionRecord>,
        incomes: Vec<TransactionRecord>,
    ) -> HomeDashboard {
        let totals = SummaryTotals::from_records(&expenses, &incomes);
        let recent = |records: &[TransactionRecord], kind| {
            let end = records.len().min(self.recent_limit);
            to_line_items(&records[..end], categories, kind)
        };
        HomeDashboard {
            totals,
            recent_expenses: recent(&expenses, TransactionKind::Expense),
            recent_incomes: recent(&incomes, TransactionKind::Income),
            expenses,
            incomes,
        }
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Log a failed fetch and carry on with nothing.
pub(crate) fn or_empty<T>(what: &str, result: Result<Vec<T>, CoreError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to fetch {what}; showing none");
        Vec::new()
    })
}
