use crate::map::MapConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// How the server learns who the visitor is. Credentials are checked by the
/// auth proxy in front of the site; the server only reads the forwarded id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_identity_header")]
    pub identity_header: String,
    #[serde(default = "default_login_url")]
    pub login_url: String,
    #[serde(default = "default_logout_url")]
    pub logout_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Identity allowed to see and use the delete-comments control.
    #[serde(default)]
    pub admin_id: Option<String>,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default = "default_comment_count")]
    pub default_comment_count: u32,
    #[serde(default = "default_blog_path")]
    pub blog_path: String,
    #[serde(default = "default_account_path")]
    pub account_path: String,
    #[serde(default)]
    pub on_render_failure: FailurePolicy,
    #[serde(default)]
    pub slideshow: SlideshowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowConfig {
    #[serde(default = "default_image_count")]
    pub image_count: u32,
    #[serde(default = "default_image_prefix")]
    pub image_prefix: String,
    #[serde(default = "default_image_extension")]
    pub image_extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// What a list container shows after a fetch or decode failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    #[default]
    KeepPrevious,
    Clear,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
            database_path: default_database_path(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            identity_header: default_identity_header(),
            login_url: default_login_url(),
            logout_url: default_logout_url(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            admin_id: None,
            categories: default_categories(),
            default_comment_count: default_comment_count(),
            blog_path: default_blog_path(),
            account_path: default_account_path(),
            on_render_failure: FailurePolicy::default(),
            slideshow: SlideshowConfig::default(),
        }
    }
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            image_count: default_image_count(),
            image_prefix: default_image_prefix(),
            image_extension: default_image_extension(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_database_path() -> String {
    "portfolio.db".to_string()
}

fn default_static_dir() -> String {
    "webapp".to_string()
}

fn default_identity_header() -> String {
    "x-portfolio-user".to_string()
}

fn default_login_url() -> String {
    "/_auth/login?continue=/account.html".to_string()
}

fn default_logout_url() -> String {
    "/_auth/logout?continue=/account.html".to_string()
}

fn default_categories() -> Vec<String> {
    vec!["skiing".to_string(), "road".to_string()]
}

fn default_comment_count() -> u32 {
    10
}

fn default_blog_path() -> String {
    "/blog.html".to_string()
}

fn default_account_path() -> String {
    "/account.html".to_string()
}

fn default_image_count() -> u32 {
    18
}

fn default_image_prefix() -> String {
    "/images/Trip-".to_string()
}

fn default_image_extension() -> String {
    "jpg".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}
