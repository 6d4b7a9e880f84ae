//! Fetch-and-render for list containers.
//!
//! Every list on the site follows the same shape: GET a JSON array, wipe the
//! container, append one item per record. [`ListRenderer::render`] does that
//! for any endpoint given a [`ListSource`].

use crate::{
    Error, Result,
    client::{DATA_ENDPOINT, SiteClient, comment_query},
    config::FailurePolicy,
    dom::Document,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Which record fields make up a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub text: String,
    pub attribution: String,
}

impl FieldMapping {
    pub fn new(text: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attribution: attribution.into(),
        }
    }

    pub fn comments() -> Self {
        Self::new("text", "nickname")
    }

    /// Builds the item text for one record, `"{text} by {attribution}"`.
    pub fn item_text(&self, index: usize, record: &Value) -> Result<String> {
        let text = self.field(index, record, &self.text)?;
        let attribution = self.field(index, record, &self.attribution)?;
        Ok(format!("{} by {}", text, attribution))
    }

    fn field<'a>(&self, index: usize, record: &'a Value, name: &str) -> Result<&'a str> {
        record.get(name).and_then(Value::as_str).ok_or_else(|| {
            Error::malformed(format!("record {} has no string field '{}'", index, name))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSource {
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub container_id: String,
    pub mapping: FieldMapping,
}

impl ListSource {
    /// Comments for one blog category, rendered into `{category}-data-container`.
    pub fn comments(category: &str, count: u32) -> Self {
        Self {
            endpoint: DATA_ENDPOINT.to_string(),
            query: comment_query(category, count),
            container_id: container_id(category),
            mapping: FieldMapping::comments(),
        }
    }
}

pub fn container_id(category: &str) -> String {
    format!("{}-data-container", category)
}

#[derive(Debug, Clone)]
pub enum RenderOutcome {
    Rendered { items: usize },
    Failed { error: Error },
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }

    pub fn items(&self) -> Option<usize> {
        match self {
            Self::Rendered { items } => Some(*items),
            Self::Failed { .. } => None,
        }
    }
}

pub struct ListRenderer<C: ?Sized> {
    client: Arc<C>,
    on_failure: FailurePolicy,
}

impl<C: SiteClient + ?Sized> ListRenderer<C> {
    pub fn new(client: Arc<C>, on_failure: FailurePolicy) -> Self {
        Self { client, on_failure }
    }

    pub async fn fetch_and_render(
        &self,
        document: &mut Document,
        category: &str,
        count: u32,
    ) -> RenderOutcome {
        self.render(document, &ListSource::comments(category, count)).await
    }

    /// Fetches `source` and replaces the container's items. Failures never
    /// propagate; the container is kept or emptied per the failure policy.
    pub async fn render(&self, document: &mut Document, source: &ListSource) -> RenderOutcome {
        match self.try_render(document, source).await {
            Ok(items) => {
                debug!("Rendered {} items into #{}", items, source.container_id);
                RenderOutcome::Rendered { items }
            }
            Err(error) => {
                warn!(
                    "Failed to render #{} from {}: {}",
                    source.container_id, source.endpoint, error
                );
                if self.on_failure == FailurePolicy::Clear {
                    if let Some(container) = document.get_mut(&source.container_id) {
                        container.clear();
                    }
                }
                RenderOutcome::Failed { error }
            }
        }
    }

    async fn try_render(&self, document: &mut Document, source: &ListSource) -> Result<usize> {
        // Check the container before spending a request on it.
        document.require(&source.container_id)?;

        let value = self.client.get_json(&source.endpoint, &source.query).await?;
        let records = value
            .as_array()
            .ok_or_else(|| Error::malformed(format!("{} did not return an array", source.endpoint)))?;

        // Build every item before touching the container so a bad record
        // cannot leave a half-rendered list.
        let items = records
            .iter()
            .enumerate()
            .map(|(index, record)| source.mapping.item_text(index, record))
            .collect::<Result<Vec<_>>>()?;

        let container = document.require(&source.container_id)?;
        container.clear();
        for item in &items {
            container.append(item.as_str());
        }
        Ok(items.len())
    }
}
