use crate::{
    Error, Result,
    client::{Session, SiteClient},
    dom::{Display, Document, Element},
};
use std::sync::Arc;
use tracing::debug;

const LOGIN_LINK_ID: &str = "login";
const LOGOUT_LINK_ID: &str = "logout";
const NO_USER_ID: &str = "no-user";
const USER_ID: &str = "user";
const WELCOME_ID: &str = "welcome";

/// Controller for `account.html`.
pub struct AccountPage<C: ?Sized> {
    client: Arc<C>,
}

impl<C: SiteClient + ?Sized> AccountPage<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Fills the account panel from the login status: a login link for
    /// anonymous visitors, a nickname prompt for new users, and a greeting
    /// with a logout link otherwise.
    pub async fn get_account(&self, document: &mut Document) -> Result<Session> {
        let session = self.client.login_status().await?;

        let link_id = match session.login_url {
            Some(_) => LOGIN_LINK_ID,
            None => LOGOUT_LINK_ID,
        };
        for id in [NO_USER_ID, USER_ID, WELCOME_ID, link_id] {
            if document.get(id).is_none() {
                return Err(Error::missing_element(id));
            }
        }

        match session.login_url.as_deref() {
            Some(login_url) => {
                document.require(NO_USER_ID)?.display = Display::Block;
                document.require(USER_ID)?.display = Display::None;
                document.require(LOGIN_LINK_ID)?.href = Some(login_url.to_string());
                document.require(WELCOME_ID)?.text = "Welcome!".to_string();
            }
            None => {
                document.require(NO_USER_ID)?.display = Display::None;
                document.require(USER_ID)?.display = Display::Block;
                match session.nickname.as_deref() {
                    None => {
                        document.require(LOGOUT_LINK_ID)?.display = Display::None;
                        document.require(WELCOME_ID)?.text = "Set nickname below".to_string();
                    }
                    Some(nickname) => {
                        let logout = document.require(LOGOUT_LINK_ID)?;
                        logout.display = Display::Inline;
                        logout.href = session.logout_url.clone();
                        document.require(WELCOME_ID)?.text = format!("Welcome {}!", nickname);
                    }
                }
            }
        }

        debug!("Account view updated, anonymous={}", session.is_anonymous());
        Ok(session)
    }
}

/// Builds the element set `account.html` exposes.
pub fn account_document() -> Document {
    Document::new()
        .with(Element::new(LOGIN_LINK_ID))
        .with(Element::new(LOGOUT_LINK_ID))
        .with(Element::new(NO_USER_ID).hidden())
        .with(Element::new(USER_ID).hidden())
        .with(Element::new(WELCOME_ID))
}
