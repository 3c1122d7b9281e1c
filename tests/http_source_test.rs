mod common;

use common::mock_backend::{closed_port_url, MockBackend, TWO_USERS};
use profile_manager::source::{HttpUserSource, SourceError, UserSource};

#[tokio::test]
async fn test_fetch_maps_users_and_derives_avatars() {
    let backend = MockBackend::json(TWO_USERS).await;
    let source = HttpUserSource::with_endpoint(backend.url()).unwrap();

    let users = source.fetch_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].avatar_url, "https://picsum.photos/seed/1/80/80");
    assert_eq!(users[0].address.city, "Gwenborough");
    assert_eq!(users[0].company.catch_phrase, "Multi-layered client-server neural-net");
    assert_eq!(users[1].avatar_url, "https://picsum.photos/seed/2/80/80");
    assert!(users[1].address.street.is_empty());
    assert_eq!(backend.hits(), 1);
}

#[tokio::test]
async fn test_record_without_avatar_gets_derived_url() {
    let body = r#"[{"id": 7, "name": "Seven", "username": "s", "email": "s@x.io"}]"#;
    let backend = MockBackend::json(body).await;
    let source = HttpUserSource::with_endpoint(backend.url()).unwrap();

    let users = source.fetch_users().await.unwrap();
    assert_eq!(users[0].avatar_url, "https://picsum.photos/seed/7/80/80");
}

#[tokio::test]
async fn test_non_success_status_has_fixed_message() {
    let backend = MockBackend::start(500, r#"{"error": "boom"}"#).await;
    let source = HttpUserSource::with_endpoint(backend.url()).unwrap();

    let err = source.fetch_users().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 500 }));
    assert_eq!(err.to_string(), "Failed to get user list");
}

#[tokio::test]
async fn test_not_found_status_has_fixed_message() {
    let backend = MockBackend::start(404, "null").await;
    let source = HttpUserSource::with_endpoint(backend.url()).unwrap();

    assert_eq!(
        source.fetch_users().await.unwrap_err().to_string(),
        "Failed to get user list"
    );
}

#[tokio::test]
async fn test_connection_failure_keeps_transport_message() {
    let source = HttpUserSource::with_endpoint(closed_port_url().await).unwrap();

    let err = source.fetch_users().await.unwrap_err();
    assert!(matches!(err, SourceError::Transport(_)));
    assert_ne!(err.to_string(), "Failed to get user list");
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let backend = MockBackend::json("not json").await;
    let source = HttpUserSource::with_endpoint(backend.url()).unwrap();

    let err = source.fetch_users().await.unwrap_err();
    assert!(matches!(err, SourceError::Decode(_)));
}
