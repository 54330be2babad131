//! Site configuration: navigation lists and external links shared by the
//! landing view and the navbar.
//!
//! The default configuration is compiled in from `assets/site.json`. Native
//! builds may override it with `<config dir>/site.json`. Once installed the
//! configuration is never mutated; components receive it as `Arc<SiteConfig>`
//! through context (see [`shared`]).

use std::collections::HashSet;
use std::sync::Arc;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::try_use_context;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

const EMBEDDED_SITE_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/site.json"
));

/// Rendered in place of a missing or blank `href`.
pub const FALLBACK_HREF: &str = "#";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate navigation href `{0}`")]
    DuplicateHref(String),
    #[error("couldn't read site config override: {0}")]
    Io(#[from] std::io::Error),
}

/// Visual weight of a mobile menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    #[default]
    Default,
    Primary,
    Danger,
}

impl Emphasis {
    /// Modifier suffix used by `navbar__menu-link--*`.
    pub fn color(self) -> &'static str {
        match self {
            Emphasis::Default => "foreground",
            Emphasis::Primary => "primary",
            Emphasis::Danger => "danger",
        }
    }
}

/// Desktop navigation entry. `href` doubles as the rendering key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    #[serde(default)]
    pub href: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn href(&self) -> &str {
        non_blank_or_fallback(&self.href)
    }
}

/// Mobile menu entry. Keyed by position since `href` may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            emphasis: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = Some(emphasis);
        self
    }

    pub fn href(&self) -> &str {
        self.href
            .as_deref()
            .map(non_blank_or_fallback)
            .unwrap_or(FALLBACK_HREF)
    }

    /// Explicit emphasis wins; otherwise the third entry is primary and the
    /// last entry is danger.
    pub fn resolved_emphasis(&self, index: usize, len: usize) -> Emphasis {
        if let Some(explicit) = self.emphasis {
            return explicit;
        }
        positional_emphasis(index, len)
    }
}

pub fn positional_emphasis(index: usize, len: usize) -> Emphasis {
    if index == 2 {
        Emphasis::Primary
    } else if len > 0 && index == len - 1 {
        Emphasis::Danger
    } else {
        Emphasis::Default
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteLinks {
    #[serde(default)]
    pub github: String,
}

impl SiteLinks {
    /// Repository URL, or `#` when the config leaves it blank.
    pub fn github(&self) -> &str {
        non_blank_or_fallback(&self.github)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nav_items: Vec<NavItem>,
    #[serde(default)]
    pub nav_menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub links: SiteLinks,
}

impl SiteConfig {
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects two desktop entries pointing at the same real href. Blank
    /// hrefs are not compared; they render as `#` individually.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for href in self.nav_items.iter().map(|item| item.href.trim()) {
            if !href.is_empty() && !seen.insert(href) {
                return Err(ConfigError::DuplicateHref(href.to_string()));
            }
        }
        Ok(())
    }

    /// Override file (native only) → embedded → empty default. Never fails.
    pub fn load() -> Self {
        match load_override() {
            Ok(Some(config)) => {
                debug!("[config] using site config override");
                return config;
            }
            Ok(None) => {}
            Err(err) => warn!("[config] ignoring site config override ({err})"),
        }

        Self::embedded().unwrap_or_else(|err| {
            warn!("[config] embedded site config unusable ({err}); rendering empty navigation");
            Self::default()
        })
    }
}

fn non_blank_or_fallback(href: &str) -> &str {
    if href.trim().is_empty() {
        FALLBACK_HREF
    } else {
        href
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_override() -> Result<Option<SiteConfig>, ConfigError> {
    let Some(dir) = crate::core::storage::config_dir() else {
        return Ok(None);
    };
    let path = dir.join("site.json");
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)?;
    SiteConfig::from_json(&raw).map(Some)
}

#[cfg(target_arch = "wasm32")]
fn load_override() -> Result<Option<SiteConfig>, ConfigError> {
    Ok(None)
}

static SITE: OnceCell<Arc<SiteConfig>> = OnceCell::new();

/// Install the process-wide configuration. Only the first call wins.
pub fn install(config: SiteConfig) -> Arc<SiteConfig> {
    SITE.get_or_init(|| Arc::new(config)).clone()
}

/// The process-wide configuration, loading it on first use.
pub fn shared() -> Arc<SiteConfig> {
    SITE.get_or_init(|| Arc::new(SiteConfig::load())).clone()
}

/// Configuration from the nearest `SiteShell` (or a test harness), falling
/// back to the process-wide instance.
pub fn use_site_config() -> Arc<SiteConfig> {
    try_use_context::<Arc<SiteConfig>>().unwrap_or_else(shared)
}
