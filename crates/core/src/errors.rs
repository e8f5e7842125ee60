use thiserror::Error;

/// Unified error type for the smartspend-core library.
///
/// The summary functions (category resolution, aggregation, formatting,
/// date normalization) never return it: they are total. Only the API
/// client, settings loading and form validation produce errors.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({endpoint}): HTTP {status}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Missing auth token for {0}")]
    MissingToken(String),

    // ── Decoding ───────────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Configuration / File ────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Transaction validation failed: {0}")]
    ValidationError(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return CoreError::Deserialization(sanitize_url_text(&e.to_string()));
        }
        CoreError::Network(sanitize_url_text(&e.to_string()))
    }
}

/// Strip everything after the first `?` so query parameters never reach logs.
pub(crate) fn sanitize_url_text(msg: &str) -> String {
    match msg.find('?') {
        Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
        None => msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_query() {
        assert_eq!(
            sanitize_url_text("error sending request for url (http://x/expenses?t=abc)"),
            "error sending request for url (http://x/expenses?<query redacted>"
        );
    }

    #[test]
    fn sanitize_keeps_plain_message() {
        assert_eq!(sanitize_url_text("connection refused"), "connection refused");
    }
}
