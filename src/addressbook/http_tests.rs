//! Tests for HTTP request/response types.

use super::{HttpError, HttpRequest, HttpResponse};

mod http_request {
    use super::*;

    #[test]
    fn get_creates_get_request_without_headers() {
        let url = url::Url::parse("https://example.com/book/?export").unwrap();
        let req = HttpRequest::get(url.clone());

        assert_eq!(req.method, http::Method::GET);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
    }

    #[test]
    fn with_basic_auth_encodes_credentials() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::get(url)
            .with_basic_auth("Aladdin", "open sesame")
            .unwrap();

        assert_eq!(
            req.headers.get(http::header::AUTHORIZATION).unwrap(),
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
    }

    #[test]
    fn with_basic_auth_replaces_existing_authorization() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::get(url)
            .with_basic_auth("a", "1")
            .unwrap()
            .with_basic_auth("b", "2")
            .unwrap();

        assert_eq!(
            req.headers
                .get_all(http::header::AUTHORIZATION)
                .iter()
                .count(),
            1
        );
    }

    #[test]
    fn basic_auth_is_redacted_in_debug_output() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::get(url).with_basic_auth("user", "pw").unwrap();
        let debug = format!("{req:?}");

        assert!(debug.contains("HttpRequest"));
        assert!(!debug.contains("dXNlcjpwdw=="));
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_success_for_2xx() {
        let resp = HttpResponse::new(http::StatusCode::OK, vec![]);
        assert!(resp.is_success());

        let resp = HttpResponse::new(http::StatusCode::NO_CONTENT, vec![]);
        assert!(resp.is_success());
    }

    #[test]
    fn is_not_success_for_errors() {
        let resp = HttpResponse::new(
            http::StatusCode::UNAUTHORIZED,
            vec![],
        );
        assert!(!resp.is_success());
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            "BEGIN:VCARD".as_bytes().to_vec(),
        );
        assert_eq!(resp.body_text(), Some("BEGIN:VCARD"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            vec![0xff, 0xfe, 0x00],
        );
        assert!(resp.body_text().is_none());
    }
}

mod http_error {
    use super::*;

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn connection_displays_source() {
        let err = HttpError::Connection(Box::new(std::io::Error::other("refused")));
        assert!(err.to_string().contains("refused"));
    }
}
