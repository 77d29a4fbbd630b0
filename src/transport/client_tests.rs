//! Tests for `ReqwestClient`.

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

mod construction {
    use super::*;

    #[test]
    fn new_uses_default_timeout() {
        let client = ReqwestClient::new();
        assert_eq!(client.timeout(), ReqwestClient::DEFAULT_TIMEOUT);
    }

    #[test]
    fn with_timeout_overrides_default() {
        let client = ReqwestClient::default().with_timeout(Duration::from_secs(3));
        assert_eq!(client.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn debug_format_is_readable() {
        let client = ReqwestClient::new();
        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }
}

mod requests {
    use super::*;

    #[tokio::test]
    async fn returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ip"))
            .respond_with(ResponseTemplate::new(200).set_body_string("203.0.113.7\n"))
            .mount(&server)
            .await;

        let url = url::Url::parse(&format!("{}/ip", server.uri())).unwrap();
        let response = ReqwestClient::new()
            .request(HttpRequest::get(url))
            .await
            .unwrap();

        assert!(response.is_ok());
        assert_eq!(response.body_text(), "203.0.113.7\n");
    }

    #[tokio::test]
    async fn non_success_status_is_a_response_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Invalid Password"))
            .mount(&server)
            .await;

        let url = url::Url::parse(&server.uri()).unwrap();
        let response = ReqwestClient::new()
            .request(HttpRequest::get(url))
            .await
            .unwrap();

        assert_eq!(response.status, http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body_text(), "Invalid Password");
    }

    #[tokio::test]
    async fn query_string_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("host", "www"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let url = url::Url::parse_with_params(&server.uri(), &[("host", "www")]).unwrap();
        let response = ReqwestClient::new()
            .request(HttpRequest::get(url))
            .await
            .unwrap();

        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let url = url::Url::parse(&server.uri()).unwrap();
        let result = ReqwestClient::new()
            .with_timeout(Duration::from_millis(100))
            .request(HttpRequest::get(url))
            .await;

        assert!(matches!(result, Err(HttpError::Timeout)), "got {result:?}");
    }

    #[tokio::test]
    async fn invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();

        let result = client.request(HttpRequest::get(url)).await;

        // Behind a proxy the failure may surface as an error response instead.
        match result {
            Err(HttpError::Connection(_) | HttpError::Timeout) => {}
            Ok(resp) if !resp.is_success() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
