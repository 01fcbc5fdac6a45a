use std::sync::LazyLock;

use common::config::SiteConfig;
use tracing::error;

const SITE_TOML: &str = include_str!("../site.toml");

// parsed once, on first use
//
// a broken site.toml should not take the whole site down, so we log and fall back
// to the built-in defaults instead
pub static SITE_CONFIG: LazyLock<SiteConfig> =
    LazyLock::new(|| match SiteConfig::from_toml(SITE_TOML) {
        Ok(config) => config,
        Err(err) => {
            error!("invalid site.toml, using defaults: {err}");
            SiteConfig::default()
        }
    });
