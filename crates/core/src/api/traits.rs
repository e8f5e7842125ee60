use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::transaction::{TransactionKind, TransactionRecord};

/// The SmartSpend backend, as seen by the client.
///
/// `RestApiClient` talks to the real server; tests plug in in-memory
/// implementations. Every call is a one-shot request with no retry.
#[async_trait]
pub trait SmartSpendApi: Send + Sync {
    /// All categories, used to label dashboard rows.
    async fn get_categories(&self) -> Result<Vec<Category>, CoreError>;

    async fn get_expense_categories(&self) -> Result<Vec<Category>, CoreError>;

    async fn get_income_categories(&self) -> Result<Vec<Category>, CoreError>;

    async fn get_expenses(&self, token: &str) -> Result<Vec<TransactionRecord>, CoreError>;

    async fn get_incomes(&self, token: &str) -> Result<Vec<TransactionRecord>, CoreError>;

    /// Returns the record as stored by the backend.
    async fn add_expense(
        &self,
        token: &str,
        record: &TransactionRecord,
    ) -> Result<TransactionRecord, CoreError>;

    async fn add_income(
        &self,
        token: &str,
        record: &TransactionRecord,
    ) -> Result<TransactionRecord, CoreError>;

    /// Categories offered for a given kind of record.
    async fn get_categories_for(&self, kind: TransactionKind) -> Result<Vec<Category>, CoreError> {
        match kind {
            TransactionKind::Expense => self.get_expense_categories().await,
            TransactionKind::Income => self.get_income_categories().await,
        }
    }

    /// Records of a given kind.
    async fn get_records(
        &self,
        token: &str,
        kind: TransactionKind,
    ) -> Result<Vec<TransactionRecord>, CoreError> {
        match kind {
            TransactionKind::Expense => self.get_expenses(token).await,
            TransactionKind::Income => self.get_incomes(token).await,
        }
    }

    /// Submit a record to the endpoint matching its kind.
    async fn add_record(
        &self,
        token: &str,
        kind: TransactionKind,
        record: &TransactionRecord,
    ) -> Result<TransactionRecord, CoreError> {
        match kind {
            TransactionKind::Expense => self.add_expense(token, record).await,
            TransactionKind::Income => self.add_income(token, record).await,
        }
    }
}
