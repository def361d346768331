//! Mock tests for the predict endpoint
//!
//! These tests use WireMock to simulate the detection backend and verify
//! that the client speaks the /predict contract correctly.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::{DetectorApi, DetectorClient, Submission};
    use crate::error::ClientError;

    /// Sets up a mock detection backend
    async fn setup_mock_server() -> MockServer {
        MockServer::start().await
    }

    /// Creates a test client configured to use the mock server
    fn create_test_client(mock_server: &MockServer) -> DetectorClient {
        DetectorClient::builder()
            .base_url(mock_server.uri())
            .timeout(5)
            .build()
            .expect("Failed to build detector client")
    }

    #[tokio::test]
    async fn test_predict_success() {
        let mock_server = setup_mock_server().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "message": "detection pending implementation"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let response = client
            .predict(Submission::news_text("a suspicious article"))
            .await
            .unwrap();

        assert_eq!(response.status.as_deref(), Some("success"));
        assert_eq!(response.message.as_deref(), Some("detection pending implementation"));
    }

    #[tokio::test]
    async fn test_predict_empty_submission_still_posts() {
        let mock_server = setup_mock_server().await;

        // An empty form is a legal submission and must still produce
        // exactly one request
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let response = client.predict(Submission::new()).await.unwrap();

        assert!(response.status.is_none());
        assert!(response.message.is_none());
    }

    #[tokio::test]
    async fn test_predict_sends_multipart_form_fields() {
        let mock_server = setup_mock_server().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        client
            .predict(Submission::news_text("multipart check"))
            .await
            .unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);

        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("news_text"));
        assert!(body.contains("multipart check"));
    }

    #[tokio::test]
    async fn test_predict_non_json_response() {
        let mock_server = setup_mock_server().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let error = client
            .predict(Submission::news_text("whatever"))
            .await
            .unwrap_err();

        match error {
            ClientError::Parsing(msg) => assert!(msg.contains("predict")),
            ClientError::WithContext { inner, .. } => {
                assert!(matches!(*inner, ClientError::Parsing(_)))
            }
            _ => panic!("Expected Parsing error, got: {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_predict_server_error() {
        let mock_server = setup_mock_server().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "model unavailable"})),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let error = client
            .predict(Submission::news_text("whatever"))
            .await
            .unwrap_err();

        assert_eq!(error.status_code(), Some(500));
        assert!(error.to_string().contains("model unavailable"));
    }

    #[tokio::test]
    async fn test_predict_connection_refused() {
        // Nothing listens on this port
        let client = DetectorClient::builder()
            .base_url("http://127.0.0.1:9")
            .timeout(2)
            .build()
            .expect("Failed to build detector client");

        let error = client
            .predict(Submission::news_text("unreachable"))
            .await
            .unwrap_err();

        assert!(error.is_retryable());
        assert!(!error.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_predict_timeout() {
        let mock_server = setup_mock_server().await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "success"}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let client = DetectorClient::builder()
            .base_url(mock_server.uri())
            .timeout(1)
            .build()
            .expect("Failed to build detector client");

        let error = client
            .predict(Submission::news_text("slow backend"))
            .await
            .unwrap_err();

        assert!(error.is_timeout());
    }
}
