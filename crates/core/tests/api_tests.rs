// ═══════════════════════════════════════════════════════════════════
// API Tests — RestApiClient construction, URLs, transport errors, HTTP contract
// ═══════════════════════════════════════════════════════════════════

use smartspend_core::api::rest_client::{
    RestApiClient, CATEGORIES_PATH, EXPENSES_PATH, EXPENSE_CATEGORIES_PATH, INCOMES_PATH,
    INCOME_CATEGORIES_PATH,
};
use smartspend_core::api::traits::SmartSpendApi;
use smartspend_core::errors::CoreError;
use smartspend_core::models::settings::Settings;
use smartspend_core::models::transaction::{TransactionKind, TransactionRecord};
use smartspend_core::SmartSpend;

fn settings(url: &str) -> Settings {
    Settings {
        api_base_url: url.into(),
        ..Settings::default()
    }
}

mod construction {
    use super::*;

    #[test]
    fn builds_from_default_settings() {
        let client = RestApiClient::new(&Settings::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = RestApiClient::new(&settings("https://api.smartspend.test/")).unwrap();
        assert_eq!(client.base_url(), "https://api.smartspend.test");
    }

    #[test]
    fn rejects_invalid_settings() {
        let err = RestApiClient::new(&settings("localhost:3000")).err().unwrap();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn facade_rejects_invalid_settings() {
        let err = SmartSpend::new(settings("not a url")).err().unwrap();
        assert!(matches!(err, CoreError::Config(_)));
    }
}

mod endpoints {
    use super::*;

    #[test]
    fn endpoint_urls() {
        let client = RestApiClient::new(&settings("https://api.smartspend.test")).unwrap();
        assert_eq!(
            client.endpoint_url(CATEGORIES_PATH),
            "https://api.smartspend.test/categories"
        );
        assert_eq!(
            client.endpoint_url(EXPENSE_CATEGORIES_PATH),
            "https://api.smartspend.test/categories/expense"
        );
        assert_eq!(
            client.endpoint_url(INCOME_CATEGORIES_PATH),
            "https://api.smartspend.test/categories/income"
        );
        assert_eq!(
            client.endpoint_url(EXPENSES_PATH),
            "https://api.smartspend.test/expenses"
        );
        assert_eq!(
            client.endpoint_url(INCOMES_PATH),
            "https://api.smartspend.test/incomes"
        );
    }
}

// Port 1 on loopback is reserved and refuses connections.
mod transport_errors {
    use super::*;

    fn unreachable() -> RestApiClient {
        let s = Settings {
            api_base_url: "http://127.0.0.1:1".into(),
            request_timeout_secs: 5,
            ..Settings::default()
        };
        RestApiClient::new(&s).unwrap()
    }

    #[tokio::test]
    async fn fetch_reports_network_error() {
        let err = unreachable().get_categories().await.unwrap_err();
        assert!(matches!(err, CoreError::Network(_)), "{err:?}");
    }

    #[tokio::test]
    async fn post_reports_network_error() {
        let record = TransactionRecord::new(1.0, "x", "2024-01-01T00:00:00", "c1");
        let err = unreachable()
            .add_record("tok", TransactionKind::Income, &record)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Network(_)), "{err:?}");
    }

    #[tokio::test]
    async fn dashboard_degrades_to_empty() {
        let s = Settings {
            api_base_url: "http://127.0.0.1:1".into(),
            token: Some("tok".into()),
            request_timeout_secs: 5,
            ..Settings::default()
        };
        let home = SmartSpend::new(s).unwrap().load_home().await.unwrap();
        assert!(home.recent_expenses.is_empty());
        assert!(home.recent_incomes.is_empty());
        assert_eq!(home.totals.total_income, 0.0);
    }
}

// ── HTTP contract against a canned local server ─────────────────────

mod http_contract {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned response and hand back the raw request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });
        (url, handle)
    }

    /// Read headers plus a `Content-Length` body.
    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    fn client(url: &str) -> RestApiClient {
        let s = Settings {
            api_base_url: url.into(),
            request_timeout_secs: 5,
            ..Settings::default()
        };
        RestApiClient::new(&s).unwrap()
    }

    #[tokio::test]
    async fn token_sent_as_bearer() {
        let (url, server) = serve_once("200 OK", "[]").await;
        let records = client(&url).get_expenses("tok").await.unwrap();
        assert!(records.is_empty());

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /expenses "), "{request}");
        assert!(request.contains("authorization: bearer tok"), "{request}");
    }

    #[tokio::test]
    async fn category_fetch_is_unauthenticated() {
        let (url, server) = serve_once(
            "200 OK",
            r#"[{"_id":"c1","name":"Groceries"},{"_id":"c7","name":"Salary"}]"#,
        )
        .await;
        let categories = client(&url).get_categories().await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].id, "c7");

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /categories "), "{request}");
        assert!(!request.contains("authorization:"), "{request}");
    }

    #[tokio::test]
    async fn null_list_is_empty() {
        let (url, server) = serve_once("200 OK", "null").await;
        let records = client(&url).get_incomes("tok").await.unwrap();
        assert!(records.is_empty());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn rejected_status_without_body_uses_reason() {
        let (url, server) = serve_once("401 Unauthorized", "").await;
        let err = client(&url).get_incomes("tok").await.unwrap_err();
        match err {
            CoreError::Api {
                endpoint,
                status,
                message,
            } => {
                assert_eq!(endpoint, "/incomes");
                assert_eq!(status, 401);
                assert_eq!(message, "Unauthorized");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn rejected_status_keeps_body() {
        let (url, server) = serve_once("500 Internal Server Error", "database down").await;
        let err = client(&url).get_expense_categories().await.unwrap_err();
        assert!(
            matches!(
                err,
                CoreError::Api { ref endpoint, status: 500, ref message }
                    if endpoint == "/categories/expense" && message == "database down"
            ),
            "{err:?}"
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreadable_body_is_deserialization_error() {
        let (url, server) = serve_once("200 OK", "{not json").await;
        let err = client(&url).get_categories().await.unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)), "{err:?}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn post_sends_record_with_token() {
        let (url, server) = serve_once(
            "201 Created",
            r#"{"amount":12.5,"description":"Lunch","date":"2024-06-01T12:00:00","category":"c1"}"#,
        )
        .await;
        let record = TransactionRecord::new(12.5, "Lunch", "2024-06-01T12:00:00", "c1");
        let saved = client(&url)
            .add_record("tok", TransactionKind::Expense, &record)
            .await
            .unwrap();
        assert_eq!(saved, record);

        let request = server.await.unwrap();
        let lower = request.to_lowercase();
        assert!(lower.starts_with("post /expenses "), "{request}");
        assert!(lower.contains("authorization: bearer tok"), "{request}");
        assert!(request.contains(r#""category":"c1""#), "{request}");
    }
}
