//! Page configuration.
//!
//! Every threshold and timing the components use is a field here, defaulting
//! to the constants in [`crate::consts`]. A page may override any subset by
//! embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "nav": { "hide_offset_px": 320 }, "log_level": "debug" }
//! </script>
//! ```
//!
//! Sections and fields that are left out keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::contact::ContactConfig;
use crate::easter_egg::EasterEggConfig;
use crate::glow::GlowConfig;
use crate::loader::LoaderConfig;
use crate::nav::NavConfig;
use crate::reveal::RevealConfig;
use crate::typewriter::TypewriterConfig;

/// Error returned by [`Config::from_json`] and [`Config::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
    #[error("typewriter phrase {0} is empty")]
    EmptyPhrase(usize),
    #[error("reveal threshold must be within [0, 1], got {0}")]
    Threshold(f64),
    #[error("easter egg key sequence is empty")]
    EmptySequence,
    #[error("easter egg needs at least one particle glyph")]
    NoGlyphs,
    #[error("glow smoothing must be within (0, 1], got {0}")]
    Smoothing(f64),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Console log level: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// Print the console banner at startup.
    pub greeting: bool,
    pub loader: LoaderConfig,
    pub nav: NavConfig,
    pub typewriter: TypewriterConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
    pub easter_egg: EasterEggConfig,
    pub glow: GlowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            greeting: true,
            loader: LoaderConfig::default(),
            nav: NavConfig::default(),
            typewriter: TypewriterConfig::default(),
            reveal: RevealConfig::default(),
            contact: ContactConfig::default(),
            easter_egg: EasterEggConfig::default(),
            glow: GlowConfig::default(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON config block.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level()?;
        if self.typewriter.phrases.is_empty() {
            return Err(ConfigError::NoPhrases);
        }
        if let Some(index) = self.typewriter.phrases.iter().position(String::is_empty) {
            return Err(ConfigError::EmptyPhrase(index));
        }
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Threshold(threshold));
        }
        if self.easter_egg.sequence.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        if self.easter_egg.glyphs.is_empty() {
            return Err(ConfigError::NoGlyphs);
        }
        let smoothing = self.glow.smoothing;
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            return Err(ConfigError::Smoothing(smoothing));
        }
        Ok(())
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level.parse().map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

/// Read the page's config block. No block means defaults.
#[cfg(feature = "hydrate")]
pub fn load() -> Result<Config, crate::error::Error> {
    use crate::consts::CONFIG_ID;

    let raw = crate::dom::document()?
        .get_element_by_id(CONFIG_ID)
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) => Ok(Config::from_json(&raw)?),
        None => Ok(Config::default()),
    }
}
