//! Mock tests for the confirm_guide endpoint
//!
//! These tests verify the /confirm_guide contract: a body-less POST whose
//! JSON response carries a status sentinel.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::{ConfirmStatus, DetectorApi, DetectorClient};
    use crate::error::ClientError;

    async fn setup_mock_server() -> MockServer {
        MockServer::start().await
    }

    fn create_test_client(mock_server: &MockServer) -> DetectorClient {
        DetectorClient::builder()
            .base_url(mock_server.uri())
            .timeout(5)
            .build()
            .expect("Failed to build detector client")
    }

    #[tokio::test]
    async fn test_confirm_guide_success_sentinel() {
        let mock_server = setup_mock_server().await;

        Mock::given(method("POST"))
            .and(path("/confirm_guide"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let response = client.confirm_guide().await.unwrap();

        assert_eq!(response.status, ConfirmStatus::Success);
        assert!(response.status.is_success());
    }

    #[tokio::test]
    async fn test_confirm_guide_other_status() {
        let mock_server = setup_mock_server().await;

        Mock::given(method("POST"))
            .and(path("/confirm_guide"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending"})))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let response = client.confirm_guide().await.unwrap();

        assert_eq!(response.status, ConfirmStatus::Other("pending".to_string()));
        assert!(!response.status.is_success());
    }

    #[tokio::test]
    async fn test_confirm_guide_sends_empty_body() {
        let mock_server = setup_mock_server().await;

        Mock::given(method("POST"))
            .and(path("/confirm_guide"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        client.confirm_guide().await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_confirm_guide_missing_status_is_parse_error() {
        let mock_server = setup_mock_server().await;

        // A response without the declared status field is a malformed
        // shape, not a silent no-op
        Mock::given(method("POST"))
            .and(path("/confirm_guide"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let error = client.confirm_guide().await.unwrap_err();

        match error {
            ClientError::Parsing(msg) => assert!(msg.contains("confirm_guide")),
            ClientError::WithContext { inner, .. } => {
                assert!(matches!(*inner, ClientError::Parsing(_)))
            }
            _ => panic!("Expected Parsing error, got: {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_confirm_guide_server_error() {
        let mock_server = setup_mock_server().await;

        Mock::given(method("POST"))
            .and(path("/confirm_guide"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let error = client.confirm_guide().await.unwrap_err();

        assert_eq!(error.status_code(), Some(500));
        assert!(error.to_string().contains("Internal Server Error"));
    }
}
