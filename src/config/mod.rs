mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.site.slideshow.image_count == 0 {
        return Err(Error::config("site.slideshow.image_count must be at least 1"));
    }
    if config.site.default_comment_count == 0 {
        return Err(Error::config("site.default_comment_count must be at least 1"));
    }
    if config.auth.identity_header.trim().is_empty() {
        return Err(Error::config("auth.identity_header must not be empty"));
    }
    Ok(())
}
