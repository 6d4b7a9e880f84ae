use portfolio_site::{
    Error,
    client::{HttpSiteClient, SiteClient},
    config::{ClientConfig, FailurePolicy},
    dom::{Document, Element},
    renderer::{ListRenderer, RenderOutcome},
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{comments_json, logged_in_json, logged_out_json};

fn client_for(server: &MockServer) -> HttpSiteClient {
    HttpSiteClient::new(ClientConfig {
        base_url: server.uri(),
    })
}

#[tokio::test]
async fn test_fetch_comments_sends_num_and_post() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data"))
        .and(query_param("num", "2"))
        .and(query_param("post", "road"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(comments_json(&[("Pacific Coast Highway", "kim"), ("Route 66", "lee")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let comments = client_for(&server).fetch_comments("road", 2).await.unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].text, "Pacific Coast Highway");
    assert_eq!(comments[1].nickname, "lee");
}

#[tokio::test]
async fn test_login_status_logged_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(logged_out_json()))
        .mount(&server)
        .await;

    let session = client_for(&server).login_status().await.unwrap();

    assert!(session.is_anonymous());
    assert!(session.login_url.is_some());
}

#[tokio::test]
async fn test_login_status_logged_in() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(logged_in_json("42", Some("sam"))))
        .mount(&server)
        .await;

    let session = client_for(&server).login_status().await.unwrap();

    assert_eq!(session.id.as_deref(), Some("42"));
    assert_eq!(session.nickname.as_deref(), Some("sam"));
    assert!(session.login_url.is_none());
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"text\": "))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_comments("skiing", 10).await.unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_comments("skiing", 10).await.unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_unreachable_server_renders_nothing() {
    // Nothing listens on the discard port.
    let client = Arc::new(HttpSiteClient::new(ClientConfig {
        base_url: "http://127.0.0.1:9".to_string(),
    }));
    let renderer = ListRenderer::new(client, FailurePolicy::KeepPrevious);
    let mut doc = Document::new().with(Element::new("skiing-data-container").items(["kept by me"]));

    let outcome = renderer.fetch_and_render(&mut doc, "skiing", 10).await;

    assert!(matches!(outcome, RenderOutcome::Failed { error: Error::Network(_) }));
    assert_eq!(
        doc.get("skiing-data-container").unwrap().items,
        vec!["kept by me".to_string()]
    );
}
