pub mod api;
pub mod errors;
pub mod models;
pub mod services;

use api::rest_client::RestApiClient;
use api::traits::SmartSpendApi;
use errors::CoreError;
use models::{
    category::Category,
    form::{FormAction, TransactionForm},
    settings::Settings,
    summary::HomeDashboard,
    transaction::{TransactionKind, TransactionRecord},
};
use services::{dashboard_service::DashboardService, transaction_service::TransactionService};

/// Main entry point for the SmartSpend core library.
/// Holds the client settings, the backend API and the services that use it.
#[must_use]
pub struct SmartSpend {
    settings: Settings,
    api: Box<dyn SmartSpendApi>,
    dashboard_service: DashboardService,
    transaction_service: TransactionService,
}

impl std::fmt::Debug for SmartSpend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartSpend")
            .field("api_base_url", &self.settings.api_base_url)
            .field("has_token", &self.settings.token.is_some())
            .field("recent_limit", &self.settings.recent_limit)
            .finish()
    }
}

impl SmartSpend {
    /// Connect to the REST backend described by `settings`.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        let api = RestApiClient::new(&settings)?;
        Ok(Self::with_api(settings, Box::new(api)))
    }

    /// Use any backend implementation (tests, offline fixtures).
    pub fn with_api(settings: Settings, api: Box<dyn SmartSpendApi>) -> Self {
        let dashboard_service = DashboardService::new(settings.recent_limit);
        Self {
            settings,
            api,
            dashboard_service,
            transaction_service: TransactionService::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the session token (e.g., after logging in again).
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.settings.token = Some(token.into());
    }

    fn token(&self, operation: &str) -> Result<&str, CoreError> {
        self.settings
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| CoreError::MissingToken(operation.to_string()))
    }

    // ── Home ────────────────────────────────────────────────────────

    /// Fetch everything and build the home screen.
    ///
    /// Only a missing token is an error; endpoint failures show up as
    /// empty sections.
    pub async fn load_home(&self) -> Result<HomeDashboard, CoreError> {
        let token = self.token("load_home")?;
        Ok(self.dashboard_service.load(self.api.as_ref(), token).await)
    }

    // ── Add Transaction ─────────────────────────────────────────────

    /// Categories offered for `kind`; empty when the fetch fails.
    pub async fn load_categories(&self, kind: TransactionKind) -> Vec<Category> {
        self.transaction_service
            .load_categories(self.api.as_ref(), kind)
            .await
    }

    /// Fill the form's category list for its current kind.
    pub async fn load_form_categories(&self, form: TransactionForm) -> TransactionForm {
        self.transaction_service
            .refresh_form_categories(self.api.as_ref(), form)
            .await
    }

    /// Validate and submit the form. See [`TransactionService::save`].
    pub async fn save_transaction(
        &self,
        form: TransactionForm,
    ) -> (TransactionForm, Result<TransactionRecord, CoreError>) {
        let token = match self.token("save_transaction") {
            Ok(token) => token,
            Err(e) => return (form.reduce(FormAction::SaveFailed), Err(e)),
        };
        self.transaction_service
            .save(self.api.as_ref(), token, form)
            .await
    }
}
