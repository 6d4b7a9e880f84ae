use portfolio_site::{
    config::{AuthConfig, ClientConfig, Config, LogsConfig, ServerConfig, SiteConfig},
    map::MapConfig,
};
use serde_json::{Value, json};

pub const ADMIN_ID: &str = "112865514776630612047";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
            database_path: ":memory:".to_string(),
            static_dir: "webapp".to_string(),
        },
        auth: AuthConfig::default(),
        site: SiteConfig {
            admin_id: Some(ADMIN_ID.to_string()),
            ..SiteConfig::default()
        },
        client: ClientConfig::default(),
        map: MapConfig::default(),
    }
}

/// `/data` payload with one record per (text, nickname) pair.
pub fn comments_json(pairs: &[(&str, &str)]) -> Value {
    Value::Array(
        pairs
            .iter()
            .enumerate()
            .map(|(i, (text, nickname))| {
                json!({
                    "id": i as i64 + 1,
                    "text": text,
                    "post": "skiing",
                    "timestamp": 1_593_000_000_000_i64 - i as i64,
                    "nickname": nickname
                })
            })
            .collect(),
    )
}

pub fn logged_out_json() -> Value {
    json!({"loginUrl": "/_auth/login?continue=/account.html"})
}

pub fn logged_in_json(id: &str, nickname: Option<&str>) -> Value {
    match nickname {
        Some(nickname) => json!({"id": id, "nickname": nickname, "logoutUrl": "/_auth/logout"}),
        None => json!({"id": id, "logoutUrl": "/_auth/logout"}),
    }
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  database_path: ":memory:"
  logs:
    level: "debug"

auth:
  identity_header: "x-goog-user"

site:
  admin_id: "112865514776630612047"
  categories: ["skiing", "road", "hiking"]
  default_comment_count: 5
  on_render_failure: clear
  slideshow:
    image_count: 12
"#;

/// Only the required section
pub const MINIMAL_CONFIG_YAML: &str = r#"
server:
  port: 8081
"#;
