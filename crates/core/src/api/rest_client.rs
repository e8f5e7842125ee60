use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::traits::SmartSpendApi;
use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::settings::Settings;
use crate::models::transaction::TransactionRecord;

pub const CATEGORIES_PATH: &str = "/categories";
pub const EXPENSE_CATEGORIES_PATH: &str = "/categories/expense";
pub const INCOME_CATEGORIES_PATH: &str = "/categories/income";
pub const EXPENSES_PATH: &str = "/expenses";
pub const INCOMES_PATH: &str = "/incomes";

/// Longest slice of an error body kept in `CoreError::Api`.
const ERROR_BODY_LIMIT: usize = 200;

/// JSON-over-HTTP client for the SmartSpend backend.
///
/// - **Auth**: per-user endpoints take the session token as
///   `Authorization: Bearer <token>`; category endpoints are public.
/// - **Errors**: non-2xx → `CoreError::Api`, transport → `CoreError::Network`,
///   unreadable body → `CoreError::Deserialization`.
/// - A `null` list body is read as an empty list.
pub struct RestApiClient {
    client: Client,
    base_url: String,
}

impl RestApiClient {
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| CoreError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: settings.base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as [`EXPENSES_PATH`].
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<Vec<T>, CoreError> {
        let url = self.endpoint_url(path);
        tracing::debug!(%path, "GET");
        let request = with_token(self.client.get(&url), token);
        let resp = check_status(path, request.send().await?).await?;
        let body: Option<Vec<T>> = resp.json().await.map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse response from {path}: {e}"))
        })?;
        let items = body.unwrap_or_default();
        tracing::debug!(%path, count = items.len(), "fetched");
        Ok(items)
    }

    async fn post_record(
        &self,
        path: &str,
        token: &str,
        record: &TransactionRecord,
    ) -> Result<TransactionRecord, CoreError> {
        let url = self.endpoint_url(path);
        tracing::debug!(%path, amount = record.amount, "POST");
        let request = with_token(self.client.post(&url), Some(token)).json(record);
        let resp = check_status(path, request.send().await?).await?;
        resp.json().await.map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse response from {path}: {e}"))
        })
    }
}

fn with_token(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

async fn check_status(path: &str, resp: Response) -> Result<Response, CoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message: String = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.chars().take(ERROR_BODY_LIMIT).collect()
    };
    tracing::warn!(%path, status = status.as_u16(), "request rejected");
    Err(CoreError::Api {
        endpoint: path.to_string(),
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl SmartSpendApi for RestApiClient {
    async fn get_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.fetch_list(CATEGORIES_PATH, None).await
    }

    async fn get_expense_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.fetch_list(EXPENSE_CATEGORIES_PATH, None).await
    }

    async fn get_income_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.fetch_list(INCOME_CATEGORIES_PATH, None).await
    }

    async fn get_expenses(&self, token: &str) -> Result<Vec<TransactionRecord>, CoreError> {
        self.fetch_list(EXPENSES_PATH, Some(token)).await
    }

    async fn get_incomes(&self, token: &str) -> Result<Vec<TransactionRecord>, CoreError> {
        self.fetch_list(INCOMES_PATH, Some(token)).await
    }

    async fn add_expense(
        &self,
        token: &str,
        record: &TransactionRecord,
    ) -> Result<TransactionRecord, CoreError> {
        self.post_record(EXPENSES_PATH, token, record).await
    }

    async fn add_income(
        &self,
        token: &str,
        record: &TransactionRecord,
    ) -> Result<TransactionRecord, CoreError> {
        self.post_record(INCOMES_PATH, token, record).await
    }
}
