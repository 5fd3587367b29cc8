//! Tests for the user service client library.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real server connection.

use serde_json::json;
use user_client::{ClientConfig, ClientError, PageParams, UserServiceClient};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> UserServiceClient {
    UserServiceClient::new(ClientConfig::new(server.uri())).unwrap()
}

fn user_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "email": "a@b.com",
        "first_name": "A",
        "last_name": "B",
        "avatar": null,
    })
}

// =============================================================================
// Probe Tests
// =============================================================================

mod probes {
    use super::*;

    #[tokio::test]
    async fn test_health_ok() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        assert_eq!(client.health().await.unwrap().status, "ok");
    }

    #[tokio::test]
    async fn test_status_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(json!({ "error": "Database unavailable" })),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let err = client.status().await.unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert!(err.is_server_error());
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = UserServiceClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();

        match client.health().await.unwrap_err() {
            ClientError::ServerUnreachable(_) | ClientError::Request(_) => {}
            e => panic!("Expected ServerUnreachable or Request error, got: {:?}", e),
        }
    }
}

// =============================================================================
// CRUD Tests
// =============================================================================

mod crud {
    use super::*;

    #[tokio::test]
    async fn test_create_user_sends_payload_and_expects_201() {
        let mock_server = MockServer::start().await;
        let payload = json!({ "email": "a@b.com", "first_name": "A", "last_name": "B" });

        Mock::given(method("POST"))
            .and(path("/api/users/"))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(201).set_body_json(user_json(1)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let user = client.users().create_user(&payload).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a@b.com");
        assert!(user.avatar.is_none());
    }

    #[tokio::test]
    async fn test_create_user_with_200_is_unexpected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json(1)))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let err = client
            .users()
            .create_user(&json!({ "email": "a@b.com" }))
            .await
            .unwrap_err();

        match err {
            ClientError::UnexpectedStatus {
                status, expected, ..
            } => {
                assert_eq!(status, 200);
                assert_eq!(expected, 201);
            }
            e => panic!("Expected UnexpectedStatus, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_create_user_validation_failure_exposes_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "error": "Validation failed",
                "fields": [{ "field": "email", "message": "value is not a valid email address" }],
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let err = client
            .users()
            .create_user(&json!({
                "email": "invalid-email",
                "first_name": "Invalid",
                "last_name": "Email",
            }))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(!err.is_not_found());

        let fields = err.field_errors();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "email");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/99999"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "error": "User not found" })),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let err = client.users().get_user(99999).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(err.field_errors().is_empty());
        assert!(err.to_string().contains("User not found"));
    }

    #[tokio::test]
    async fn test_get_user_rejects_wrong_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "one",
                "email": "a@b.com",
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        match client.users().get_user(1).await.unwrap_err() {
            ClientError::ParseError(_) => {}
            e => panic!("Expected ParseError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_list_users_sends_page_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/"))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 2,
                "per_page": 1,
                "total": 2,
                "total_pages": 2,
                "data": [user_json(2)],
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let page = client
            .users()
            .list_users(PageParams::new(2, 1))
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data[0].id, 2);
    }

    #[tokio::test]
    async fn test_update_user_uses_patch() {
        let mock_server = MockServer::start().await;

        let mut updated = user_json(1);
        updated["first_name"] = json!("C");

        Mock::given(method("PATCH"))
            .and(path("/api/users/1"))
            .and(body_json(json!({ "first_name": "C" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(updated))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let user = client
            .users()
            .update_user(1, &json!({ "first_name": "C" }))
            .await
            .unwrap();

        assert_eq!(user.first_name, "C");
        assert_eq!(user.last_name, "B");
    }

    #[tokio::test]
    async fn test_delete_user_expects_204() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/users/1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        client.users().delete_user(1).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/users/99999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let err = client.users().delete_user(99999).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_server_error_is_infrastructure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let err = client.users().get_user(1).await.unwrap_err();

        assert!(err.is_server_error());
        assert!(!err.is_validation());
        assert!(!err.is_not_found());
    }
}
