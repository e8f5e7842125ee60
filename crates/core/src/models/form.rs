use serde::Serialize;
use thiserror::Error;

use super::category::Category;
use super::transaction::{TransactionKind, TransactionRecord};
use crate::errors::CoreError;
use crate::services::category_resolver::picker_icon_key;
use crate::services::date_normalizer::current_input_date;

/// Why a form could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("description, amount and category are required")]
    MissingFields,

    #[error("'{0}' is not a valid positive amount")]
    InvalidAmount(String),
}

impl From<FormError> for CoreError {
    fn from(e: FormError) -> Self {
        CoreError::ValidationError(e.to_string())
    }
}

/// Everything that can happen to the Add Transaction form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Switch between expense and income. Clears the category choice,
    /// since each kind has its own category list.
    SetKind(TransactionKind),
    SetDescription(String),
    SetAmount(String),
    SetDate(String),
    ToggleCategoryDropdown,
    SelectCategory(Category),
    /// A category fetch finished. Results for a kind the form is no longer
    /// showing are dropped.
    CategoriesLoaded(TransactionKind, Vec<Category>),
    /// Save pressed on an invalid form.
    SubmitRejected,
    SaveSucceeded,
    SaveFailed,
}

/// A category as shown in the picker dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOption {
    pub category: Category,
    pub icon_key: &'static str,
}

/// State of the Add Transaction form.
///
/// The form is a plain value: every change goes through [`TransactionForm::reduce`],
/// which consumes the old state and returns the new one.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub kind: TransactionKind,
    pub description: String,
    /// Raw text as typed; parsed only on save
    pub amount: String,
    pub date: String,
    pub category: Option<Category>,
    /// Categories available for `kind`
    pub categories: Vec<Category>,
    pub show_category_dropdown: bool,
    pub is_loading: bool,
    pub show_error: bool,
    /// Set once the backend accepted the record
    pub saved: bool,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionForm {
    /// A blank expense form dated now, waiting for its categories.
    pub fn new() -> Self {
        Self::with_date(current_input_date())
    }

    pub fn with_date(date: impl Into<String>) -> Self {
        Self {
            kind: TransactionKind::Expense,
            description: String::new(),
            amount: String::new(),
            date: date.into(),
            category: None,
            categories: Vec::new(),
            show_category_dropdown: false,
            is_loading: true,
            show_error: false,
            saved: false,
        }
    }

    #[must_use]
    pub fn reduce(self, action: FormAction) -> Self {
        match action {
            FormAction::SetKind(kind) if kind == self.kind => self,
            FormAction::SetKind(kind) => Self {
                kind,
                category: None,
                categories: Vec::new(),
                show_category_dropdown: false,
                is_loading: true,
                ..self
            },
            FormAction::SetDescription(description) => Self { description, ..self },
            FormAction::SetAmount(amount) => Self { amount, ..self },
            FormAction::SetDate(date) => Self { date, ..self },
            FormAction::ToggleCategoryDropdown => Self {
                show_category_dropdown: !self.show_category_dropdown,
                ..self
            },
            FormAction::SelectCategory(category) => Self {
                category: Some(category),
                show_category_dropdown: false,
                ..self
            },
            FormAction::CategoriesLoaded(kind, _) if kind != self.kind => self,
            FormAction::CategoriesLoaded(_, categories) => Self {
                categories,
                is_loading: false,
                ..self
            },
            FormAction::SubmitRejected | FormAction::SaveFailed => Self {
                show_error: true,
                ..self
            },
            FormAction::SaveSucceeded => Self {
                show_error: false,
                saved: true,
                ..self
            },
        }
    }

    /// Description and amount filled in and a category picked.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.description.trim().is_empty()
            && !self.amount.trim().is_empty()
            && self.category.is_some()
    }

    /// Build the record to submit.
    pub fn to_record(&self) -> Result<(TransactionKind, TransactionRecord), FormError> {
        let category = match (&self.category, self.is_valid()) {
            (Some(category), true) => category,
            _ => return Err(FormError::MissingFields),
        };

        let raw = self.amount.trim();
        let amount = raw
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or_else(|| FormError::InvalidAmount(raw.to_string()))?;

        let record = TransactionRecord::new(
            amount,
            self.description.clone(),
            self.date.clone(),
            category.id.clone(),
        );
        Ok((self.kind, record))
    }

    #[must_use]
    pub fn amount_hint(&self) -> Option<&'static str> {
        (self.show_error && self.amount.trim().is_empty()).then_some("Amount is required")
    }

    #[must_use]
    pub fn description_hint(&self) -> Option<&'static str> {
        (self.show_error && self.description.trim().is_empty())
            .then_some("Description is required")
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.show_error
            .then_some("Please fill in all fields correctly")
    }

    /// Categories for the picker, each with its dropdown icon.
    #[must_use]
    pub fn category_options(&self) -> Vec<CategoryOption> {
        self.categories
            .iter()
            .map(|c| CategoryOption {
                category: c.clone(),
                icon_key: picker_icon_key(&c.name),
            })
            .collect()
    }
}
