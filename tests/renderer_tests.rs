use portfolio_site::{
    Error,
    config::FailurePolicy,
    dom::{Document, Element},
    renderer::{FieldMapping, ListRenderer, ListSource, RenderOutcome},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

mod common;
use common::{MockReply, MockSiteClient, comments_json};

fn skiing_document() -> Document {
    Document::new().with(
        Element::new("skiing-data-container").items(["Old comment by someone"]),
    )
}

fn make_renderer(
    client: MockSiteClient,
    policy: FailurePolicy,
) -> (Arc<MockSiteClient>, ListRenderer<MockSiteClient>) {
    let client = Arc::new(client);
    (Arc::clone(&client), ListRenderer::new(client, policy))
}

#[tokio::test]
async fn test_renders_one_item_per_record() {
    let client = MockSiteClient::new().with_reply(
        "/data",
        MockReply::Json(comments_json(&[
            ("Fresh powder at Big Sky", "sam"),
            ("Mammoth was icy", "jo"),
            ("Killington lines!", "alex"),
        ])),
    );
    let (client, renderer) = make_renderer(client, FailurePolicy::KeepPrevious);
    let mut doc = skiing_document();

    let outcome = renderer.fetch_and_render(&mut doc, "skiing", 3).await;

    assert_eq!(outcome.items(), Some(3));
    let items = &doc.get("skiing-data-container").unwrap().items;
    assert_eq!(
        items,
        &vec![
            "Fresh powder at Big Sky by sam".to_string(),
            "Mammoth was icy by jo".to_string(),
            "Killington lines! by alex".to_string(),
        ]
    );
    assert_eq!(client.query_values("num"), vec!["3"]);
    assert_eq!(client.query_values("post"), vec!["skiing"]);
}

#[tokio::test]
async fn test_item_count_matches_response_length() {
    for n in [0usize, 1, 7, 25] {
        let pairs: Vec<(String, String)> = (0..n)
            .map(|i| (format!("comment {}", i), format!("user{}", i)))
            .collect();
        let refs: Vec<(&str, &str)> = pairs.iter().map(|(t, u)| (t.as_str(), u.as_str())).collect();
        let client = MockSiteClient::new().with_reply("/data", MockReply::Json(comments_json(&refs)));
        let (_, renderer) = make_renderer(client, FailurePolicy::KeepPrevious);
        let mut doc = skiing_document();

        renderer.fetch_and_render(&mut doc, "skiing", 50).await;

        let items = &doc.get("skiing-data-container").unwrap().items;
        assert_eq!(items.len(), n);
        for (item, (text, nickname)) in items.iter().zip(&pairs) {
            assert!(item.contains(text.as_str()));
            assert!(item.contains(nickname.as_str()));
        }
    }
}

#[tokio::test]
async fn test_empty_response_clears_container() {
    let client = MockSiteClient::new().with_reply("/data", MockReply::Json(json!([])));
    let (_, renderer) = make_renderer(client, FailurePolicy::KeepPrevious);
    let mut doc = skiing_document();

    let outcome = renderer.fetch_and_render(&mut doc, "skiing", 10).await;

    assert_eq!(outcome.items(), Some(0));
    assert!(doc.get("skiing-data-container").unwrap().items.is_empty());
}

#[tokio::test]
async fn test_malformed_json_keeps_previous_items() {
    let client = MockSiteClient::new().with_reply("/data", MockReply::Body("<html>oops".to_string()));
    let (_, renderer) = make_renderer(client, FailurePolicy::KeepPrevious);
    let mut doc = skiing_document();

    let outcome = renderer.fetch_and_render(&mut doc, "skiing", 10).await;

    assert!(matches!(outcome, RenderOutcome::Failed { error: Error::Parse(_) }));
    assert_eq!(
        doc.get("skiing-data-container").unwrap().items,
        vec!["Old comment by someone".to_string()]
    );
}

#[tokio::test]
async fn test_failure_with_clear_policy_empties_container() {
    let client = MockSiteClient::new().with_reply("/data", MockReply::Fail(Error::malformed("boom")));
    let (_, renderer) = make_renderer(client, FailurePolicy::Clear);
    let mut doc = skiing_document();

    let outcome = renderer.fetch_and_render(&mut doc, "skiing", 10).await;

    assert!(!outcome.is_rendered());
    assert!(doc.get("skiing-data-container").unwrap().items.is_empty());
}

#[tokio::test]
async fn test_non_array_response_is_malformed() {
    let client = MockSiteClient::new().with_reply("/data", MockReply::Json(json!({"text": "x"})));
    let (_, renderer) = make_renderer(client, FailurePolicy::KeepPrevious);
    let mut doc = skiing_document();

    let outcome = renderer.fetch_and_render(&mut doc, "skiing", 10).await;

    assert!(matches!(
        outcome,
        RenderOutcome::Failed { error: Error::MalformedResponse(_) }
    ));
}

#[tokio::test]
async fn test_bad_record_does_not_half_render() {
    let client = MockSiteClient::new().with_reply(
        "/data",
        MockReply::Json(json!([
            {"text": "fine", "nickname": "a"},
            {"text": "no author"}
        ])),
    );
    let (_, renderer) = make_renderer(client, FailurePolicy::KeepPrevious);
    let mut doc = skiing_document();

    let outcome = renderer.fetch_and_render(&mut doc, "skiing", 10).await;

    assert!(!outcome.is_rendered());
    assert_eq!(
        doc.get("skiing-data-container").unwrap().items,
        vec!["Old comment by someone".to_string()]
    );
}

#[tokio::test]
async fn test_missing_container_skips_request() {
    let client = MockSiteClient::new().with_reply("/data", MockReply::Json(json!([])));
    let (client, renderer) = make_renderer(client, FailurePolicy::KeepPrevious);
    let mut doc = Document::new();

    let outcome = renderer.fetch_and_render(&mut doc, "road", 10).await;

    assert!(matches!(
        outcome,
        RenderOutcome::Failed { error: Error::MissingElement { ref id } } if id == "road-data-container"
    ));
    assert!(client.get_requests().is_empty());
}

#[tokio::test]
async fn test_generic_source_with_custom_mapping() {
    let client = MockSiteClient::new().with_reply(
        "/guestbook",
        MockReply::Json(json!([{"message": "Hello", "author": "Visitor"}])),
    );
    let (client, renderer) = make_renderer(client, FailurePolicy::KeepPrevious);
    let mut doc = Document::new().with(Element::new("guestbook-list"));
    let source = ListSource {
        endpoint: "/guestbook".to_string(),
        query: vec![("page".to_string(), "1".to_string())],
        container_id: "guestbook-list".to_string(),
        mapping: FieldMapping::new("message", "author"),
    };

    let outcome = renderer.render(&mut doc, &source).await;

    assert_eq!(outcome.items(), Some(1));
    assert_eq!(
        doc.get("guestbook-list").unwrap().items,
        vec!["Hello by Visitor".to_string()]
    );
    assert_eq!(client.query_values("page"), vec!["1"]);
}
