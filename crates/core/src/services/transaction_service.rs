use crate::api::traits::SmartSpendApi;
use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::form::{FormAction, TransactionForm};
use crate::models::transaction::{TransactionKind, TransactionRecord};
use crate::services::dashboard_service::or_empty;

/// Submits the Add Transaction form and loads its category lists.
pub struct TransactionService;

impl TransactionService {
    pub fn new() -> Self {
        Self
    }

    /// Categories offered for `kind`. A failed fetch gives an empty list.
    pub async fn load_categories(
        &self,
        api: &dyn SmartSpendApi,
        kind: TransactionKind,
    ) -> Vec<Category> {
        or_empty("categories", api.get_categories_for(kind).await)
    }

    /// Load the form's categories and fold them into its state.
    pub async fn refresh_form_categories(
        &self,
        api: &dyn SmartSpendApi,
        form: TransactionForm,
    ) -> TransactionForm {
        let kind = form.kind;
        let categories = self.load_categories(api, kind).await;
        form.reduce(FormAction::CategoriesLoaded(kind, categories))
    }

    /// Validate and submit the form.
    ///
    /// Always returns the next form state; the `Result` says whether the
    /// backend stored the record.
    pub async fn save(
        &self,
        api: &dyn SmartSpendApi,
        token: &str,
        form: TransactionForm,
    ) -> (TransactionForm, Result<TransactionRecord, CoreError>) {
        let (kind, record) = match form.to_record() {
            Ok(parts) => parts,
            Err(e) => {
                tracing::debug!(error = %e, "form rejected");
                return (form.reduce(FormAction::SubmitRejected), Err(e.into()));
            }
        };

        match api.add_record(token, kind, &record).await {
            Ok(saved) => {
                tracing::info!(%kind, amount = saved.amount, "transaction saved");
                (form.reduce(FormAction::SaveSucceeded), Ok(saved))
            }
            Err(e) => {
                tracing::warn!(%kind, error = %e, "failed to save transaction");
                (form.reduce(FormAction::SaveFailed), Err(e))
            }
        }
    }
}

impl Default for TransactionService {
    fn default() -> Self {
        Self::new()
    }
}
