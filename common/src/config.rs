use anyhow::Result;
use serde::Deserialize;

// site configuration
//
// every field has a default, so an empty (or partial) toml document is a valid
// configuration.  the webapp embeds its copy at compile time; see webapp/site.toml
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    // localStorage key holding the persisted display mode
    pub theme_storage_key: String,

    // route that owns the in-page sections (about, projects, contact)
    pub home_route: String,

    // on the home route, the nav bar appears once scrollY passes this
    // fraction of the viewport height
    pub nav_reveal_ratio: f64,

    // height of the fixed header; section scrolls stop this far below the top
    pub nav_offset_px: f64,

    // how long a toast stays on screen
    pub toast_duration_ms: u32,

    pub loader: LoaderConfig,

    pub clock: ClockConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            theme_storage_key: String::from("akd-theme"),
            home_route: String::from("/"),
            nav_reveal_ratio: 0.85,
            nav_offset_px: 80.0,
            toast_duration_ms: 4000,
            loader: LoaderConfig::default(),
            clock: ClockConfig::default(),
        }
    }
}

// timings for the intro overlay
//
// exit_after_ms and done_after_ms are both measured from the moment the sequence
// is armed, not from the previous edge
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoaderConfig {
    pub glyphs: String,
    pub exit_after_ms: u32,
    pub done_after_ms: u32,

    pub enter_delay_ms: u32,
    pub enter_stagger_ms: u32,
    pub enter_duration_ms: u32,

    pub exit_delay_ms: u32,
    pub exit_stagger_ms: u32,
    pub exit_duration_ms: u32,

    pub overlay_fade_delay_ms: u32,
    pub overlay_fade_ms: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            glyphs: String::from("AKD"),
            exit_after_ms: 1650,
            done_after_ms: 2850,
            enter_delay_ms: 120,
            enter_stagger_ms: 280,
            enter_duration_ms: 620,
            exit_delay_ms: 100,
            exit_stagger_ms: 180,
            exit_duration_ms: 420,
            overlay_fade_delay_ms: 580,
            overlay_fade_ms: 450,
        }
    }
}

// the local-time readout in the nav bar
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    // IANA zone name, handed to Intl.DateTimeFormat as is
    pub time_zone: String,
    pub locale: String,
    // shown under the time
    pub place: String,
    pub tick_ms: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            time_zone: String::from("America/Vancouver"),
            locale: String::from("en-CA"),
            place: String::from("Vancouver, BC"),
            tick_ms: 1000,
        }
    }
}

impl SiteConfig {
    pub fn from_toml(doc: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(doc)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.loader.glyphs.trim().is_empty() {
            return Err(anyhow::Error::msg("loader.glyphs must not be empty"));
        }

        if self.loader.done_after_ms <= self.loader.exit_after_ms {
            return Err(anyhow::Error::msg(format!(
                "loader.done_after_ms ({}) must be later than loader.exit_after_ms ({})",
                self.loader.done_after_ms, self.loader.exit_after_ms
            )));
        }

        if !(self.nav_reveal_ratio > 0.0) {
            return Err(anyhow::Error::msg("nav_reveal_ratio must be positive"));
        }

        if self.clock.tick_ms == 0 {
            return Err(anyhow::Error::msg("clock.tick_ms must be positive"));
        }

        if self.clock.time_zone.trim().is_empty() {
            return Err(anyhow::Error::msg("clock.time_zone must not be empty"));
        }

        if self.theme_storage_key.is_empty() {
            return Err(anyhow::Error::msg("theme_storage_key must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SiteConfig::from_toml("").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.theme_storage_key, "akd-theme");
        assert_eq!(config.loader.exit_after_ms, 1650);
        assert_eq!(config.loader.done_after_ms, 2850);
    }

    #[test]
    fn partial_document_overrides_only_named_keys() {
        let config = SiteConfig::from_toml(
            r#"
            nav_offset_px = 64.0

            [loader]
            glyphs = "XY"
            "#,
        )
        .unwrap();

        assert_eq!(config.nav_offset_px, 64.0);
        assert_eq!(config.nav_reveal_ratio, 0.85);
        assert_eq!(config.loader.glyphs, "XY");
        assert_eq!(config.loader.enter_stagger_ms, 280);
    }

    #[test]
    fn done_must_follow_exit() {
        let err = SiteConfig::from_toml(
            r#"
            [loader]
            exit_after_ms = 2000
            done_after_ms = 1500
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("done_after_ms"));
    }

    #[test]
    fn rejects_blank_glyphs_and_bad_ratio() {
        assert!(SiteConfig::from_toml("[loader]\nglyphs = \"  \"").is_err());
        assert!(SiteConfig::from_toml("nav_reveal_ratio = 0.0").is_err());
    }

    #[test]
    fn clock_defaults_to_vancouver_and_rejects_a_zero_tick() {
        let config = SiteConfig::default();
        assert_eq!(config.clock.time_zone, "America/Vancouver");
        assert_eq!(config.clock.tick_ms, 1000);

        let config = SiteConfig::from_toml("[clock]\nplace = \"Home\"").unwrap();
        assert_eq!(config.clock.place, "Home");
        assert_eq!(config.clock.locale, "en-CA");

        assert!(SiteConfig::from_toml("[clock]\ntick_ms = 0").is_err());
        assert!(SiteConfig::from_toml("[clock]\ntime_zone = \"\"").is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(SiteConfig::from_toml("nav_offset_px = [").is_err());
    }
}
