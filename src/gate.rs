//! Shows or hides identity-gated parts of a page from the `/login` status.
//!
//! Display only. The server checks identity again on every write.

use crate::{
    Result,
    client::{Session, SiteClient},
    dom::{Display, Document},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Element handles the gate toggles. Handles missing from a page are skipped.
#[derive(Debug, Clone)]
pub struct GateElements {
    pub gated_class: String,
    pub gated_ids: Vec<String>,
    pub admin_ids: Vec<String>,
    pub logged_in_ids: Vec<String>,
    pub logged_out_ids: Vec<String>,
}

impl Default for GateElements {
    fn default() -> Self {
        Self {
            gated_class: "comments".to_string(),
            gated_ids: vec!["num-comments".to_string()],
            admin_ids: vec!["delete-comments".to_string()],
            logged_in_ids: vec!["user".to_string()],
            logged_out_ids: vec!["no-user".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    pub logged_in: bool,
    pub admin: bool,
}

impl GateDecision {
    /// A response carrying a login URL is logged out. Admin requires a
    /// configured identifier that matches the session id exactly.
    pub fn evaluate(session: &Session, admin_id: Option<&str>) -> Self {
        let logged_in = session.login_url.is_none();
        let admin = logged_in
            && matches!((session.id.as_deref(), admin_id), (Some(id), Some(admin)) if id == admin);
        Self { logged_in, admin }
    }

    pub fn hidden() -> Self {
        Self {
            logged_in: false,
            admin: false,
        }
    }
}

pub struct SessionGate<C: ?Sized> {
    client: Arc<C>,
    admin_id: Option<String>,
    elements: GateElements,
}

impl<C: SiteClient + ?Sized> SessionGate<C> {
    pub fn new(client: Arc<C>, admin_id: Option<String>) -> Self {
        Self {
            client,
            admin_id,
            elements: GateElements::default(),
        }
    }

    pub fn with_elements(mut self, elements: GateElements) -> Self {
        self.elements = elements;
        self
    }

    /// Hides every gated element, asks the server who the visitor is, then
    /// reveals what that identity may see. On failure everything stays hidden.
    pub async fn refresh_session_view(&self, document: &mut Document) -> Result<GateDecision> {
        self.apply(document, GateDecision::hidden(), false);

        let session = match self.client.login_status().await {
            Ok(session) => session,
            Err(e) => {
                warn!("Login status unavailable, keeping gated elements hidden: {}", e);
                return Err(e);
            }
        };

        let decision = GateDecision::evaluate(&session, self.admin_id.as_deref());
        self.apply(document, decision, true);

        if decision.admin {
            info!("Administrator session, showing admin controls");
        }
        debug!(
            "Session view refreshed: logged_in={}, admin={}",
            decision.logged_in, decision.admin
        );
        Ok(decision)
    }

    /// `resolved` is false while the status request is in flight; the
    /// logged-in/logged-out panels are left alone until then.
    fn apply(&self, document: &mut Document, decision: GateDecision, resolved: bool) {
        let gated = display_for(decision.logged_in);
        document.set_class_display(&self.elements.gated_class, gated);
        for id in &self.elements.gated_ids {
            document.set_display(id, gated);
        }
        for id in &self.elements.admin_ids {
            document.set_display(id, display_for(decision.admin));
        }

        if resolved {
            for id in &self.elements.logged_in_ids {
                document.set_display(id, display_for(decision.logged_in));
            }
            for id in &self.elements.logged_out_ids {
                document.set_display(id, display_for(!decision.logged_in));
            }
        }
    }
}

fn display_for(visible: bool) -> Display {
    if visible { Display::Block } else { Display::None }
}
