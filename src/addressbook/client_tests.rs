//! Tests for `ReqwestClient`.
//!
//! These cover construction only; requests against a live server are
//! not part of the unit tests.

use std::time::Duration;

use super::*;

mod reqwest_client {
    use super::*;

    #[test]
    fn with_timeout_creates_client() {
        let client = ReqwestClient::with_timeout(Duration::from_secs(5)).unwrap();
        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::with_timeout(Duration::from_secs(10)).unwrap();
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();

        let result = client.request(HttpRequest::get(url)).await;

        // A proxy may answer with an error status instead of failing the connection.
        match result {
            Err(HttpError::Connection(_) | HttpError::Timeout) => {}
            Ok(resp) if !resp.is_success() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
