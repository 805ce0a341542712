//! Feed client tests against a mock posts API.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pack::error::ClientError;
use pack::models::{Channel, NewPost};
use pack::services::FeedClient;

#[tokio::test]
async fn fetch_posts_parses_the_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "p1",
                "content": "first post",
                "user": "raiyan",
                "tags": ["timeline"],
                "timestamp": "2026-08-01T09:00:00Z"
            },
            {
                "id": "p2",
                "content": "with extras",
                "user": "zarin",
                "tags": ["docs", "timeline"],
                "timestamp": "2026-08-01T10:00:00Z",
                "readers": ["raiyan"],
                "image": "data:image/jpeg;base64,AAAA"
            }
        ])))
        .mount(&server)
        .await;

    let client = FeedClient::new(server.uri());
    let posts = client.fetch_posts().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].user, "raiyan");
    assert!(posts[1].in_channel(Channel::Docs));
    assert_eq!(posts[1].readers, vec!["raiyan".to_string()]);
}

#[tokio::test]
async fn fetch_posts_rejects_a_non_array_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "rate limited"})),
        )
        .mount(&server)
        .await;

    let client = FeedClient::new(server.uri());
    let err = client.fetch_posts().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn fetch_posts_surfaces_http_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = FeedClient::new(server.uri());
    let err = client.fetch_posts().await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn create_post_sends_the_wire_shape_and_returns_the_stored_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(body_partial_json(json!({
            "content": "hello pack",
            "user": "jeba",
            "tags": ["discussion"],
            "parent_id": "p0"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p42",
            "content": "hello pack",
            "user": "jeba",
            "tags": ["discussion"],
            "timestamp": "2026-08-06T12:00:00Z",
            "parent_id": "p0"
        })))
        .mount(&server)
        .await;

    let client = FeedClient::new(server.uri());
    let post = NewPost::new("hello pack", "jeba", Channel::Discussion)
        .with_parent("p0".to_string());
    let stored = client.create_post(&post).await.unwrap();

    assert_eq!(stored.id, "p42");
    assert_eq!(stored.parent_id.as_deref(), Some("p0"));
}

#[tokio::test]
async fn create_post_omits_image_field_when_absent() {
    let server = MockServer::start().await;

    // Matcher asserts the exact body: no image, no extra keys beyond
    // the composed fields
    Mock::given(method("POST"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p1",
            "content": "text only",
            "user": "inan",
            "tags": ["timeline"],
            "timestamp": "2026-08-06T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = FeedClient::new(server.uri());
    let post = NewPost::new("text only", "inan", Channel::Timeline);
    client.create_post(&post).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("image").is_none());
    assert!(body.get("parent_id").is_none());
}

#[tokio::test]
async fn create_post_surfaces_server_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let client = FeedClient::new(server.uri());
    let post = NewPost::new("x", "inan", Channel::Timeline);
    let err = client.create_post(&post).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}
