use serde::{Deserialize, Serialize};

/// A named classification for transactions (e.g., "Groceries", "Salary").
///
/// Categories are owned by the backend; the client only reads them.
/// The backend identifies them by a Mongo-style `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Backend identifier, referenced by `TransactionRecord::category_id`
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name, also the key into the icon tables
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
