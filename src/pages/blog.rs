use crate::{
    Result,
    client::SiteClient,
    config::SiteConfig,
    dom::{Document, Element},
    gate::{GateDecision, SessionGate},
    renderer::{ListRenderer, RenderOutcome, container_id},
    slideshow::{IMAGE_CONTAINER_ID, Slideshow},
};
use std::sync::Arc;
use tracing::{info, warn};

/// The `<select>` holding how many comments to show.
pub const COUNT_SELECT_ID: &str = "mySelect";

/// Controller for `blog.html`: comment lists per category, the session gate
/// and the trip slideshow.
pub struct BlogPage<C: ?Sized> {
    renderer: ListRenderer<C>,
    gate: SessionGate<C>,
    categories: Vec<String>,
    default_count: u32,
    slideshow: Slideshow,
}

impl<C: SiteClient + ?Sized> BlogPage<C> {
    pub fn new(client: Arc<C>, config: &SiteConfig) -> Self {
        Self {
            renderer: ListRenderer::new(Arc::clone(&client), config.on_render_failure),
            gate: SessionGate::new(client, config.admin_id.clone()),
            categories: config.categories.clone(),
            default_count: config.default_comment_count,
            slideshow: Slideshow::new(config.slideshow.clone()),
        }
    }

    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    /// Initial page load: default-sized lists for every category, then the
    /// session gate.
    pub async fn load(&self, document: &mut Document) -> Result<GateDecision> {
        self.render_all(document, self.default_count).await;
        self.display_comments(document).await
    }

    /// Runs the session gate and, for identified visitors, re-renders every
    /// category with the count picked in the selector.
    pub async fn display_comments(&self, document: &mut Document) -> Result<GateDecision> {
        let decision = self.gate.refresh_session_view(document).await?;
        if decision.logged_in {
            let count = self.selected_count(document);
            self.render_all(document, count).await;
        }
        Ok(decision)
    }

    pub async fn render_all(&self, document: &mut Document, count: u32) -> Vec<RenderOutcome> {
        let mut outcomes = Vec::with_capacity(self.categories.len());
        for category in &self.categories {
            outcomes.push(self.renderer.fetch_and_render(document, category, count).await);
        }
        let rendered = outcomes.iter().filter(|o| o.is_rendered()).count();
        info!(
            "Rendered {}/{} comment lists with count {}",
            rendered,
            outcomes.len(),
            count
        );
        outcomes
    }

    /// Falls back to the default count when the selector is missing or holds
    /// anything but a positive integer.
    pub fn selected_count(&self, document: &Document) -> u32 {
        let Some(value) = document.get(COUNT_SELECT_ID).and_then(|e| e.value.as_deref()) else {
            return self.default_count;
        };
        match value.trim().parse::<u32>() {
            Ok(count) if count > 0 => count,
            _ => {
                warn!("Ignoring comment count selection '{}'", value);
                self.default_count
            }
        }
    }

    pub fn change_slide(&mut self, document: &mut Document, delta: i32) -> Result<u32> {
        let index = self.slideshow.advance(delta);
        self.slideshow.show(document)?;
        Ok(index)
    }
}

/// Builds the element set `blog.html` exposes for the given categories.
pub fn blog_document(categories: &[String]) -> Document {
    let mut document = Document::new()
        .with(Element::new("num-comments"))
        .with(Element::new(COUNT_SELECT_ID).value("10"))
        .with(Element::new("delete-comments"))
        .with(Element::new(IMAGE_CONTAINER_ID));
    for category in categories {
        document.insert(Element::new(format!("{}-comments", category)).class("comments"));
        document.insert(Element::new(container_id(category)));
    }
    document
}
