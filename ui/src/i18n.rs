//! Localized strings for the site.
//!
//! Russian (`ru-RU`) is the authored language and the fallback for every
//! lookup; other locales under `i18n/<tag>/ingibcontrol-ui.ftl` are embedded
//! at compile time. Views call [`init`] (idempotent) and read strings through
//! [`t!`](crate::t).
use std::sync::Once;

use dioxus::logger::tracing::{debug, info, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

#[doc(hidden)]
pub use i18n_embed_fl::fl;

/// Looks up a message in the shared loader: `t!("hero-subtitle")`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Basename of every `.ftl` file; `i18n.toml` must declare the same domain.
const DOMAIN: &str = "ingibcontrol-ui";

pub const FALLBACK_LANGUAGE: &str = "ru-RU";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("`{0}` is not a language tag")]
    InvalidTag(String),
    #[error("no embedded translation for `{0}`")]
    Unavailable(String),
    #[error(transparent)]
    Load(#[from] I18nEmbedError),
}

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

/// Embedded locale tags, sorted.
static EMBEDDED: Lazy<Vec<String>> = Lazy::new(|| {
    let mut tags: Vec<String> = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    tags.sort();
    tags.dedup();
    tags
});

static INIT: Once = Once::new();

/// Selects the best embedded locale for the user's preferences. Only the first
/// call does any work.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(_) => info!(
                "[i18n] requested {:?}, using {}",
                requested.iter().map(ToString::to_string).collect::<Vec<_>>(),
                current_language()
            ),
            Err(err) => warn!("[i18n] language selection failed ({err}); using {FALLBACK_LANGUAGE}"),
        }
    });
}

/// Switches lookups to `tag`. Tags without an embedded translation are refused
/// and leave the current language in place.
pub fn set_language(tag: &str) -> Result<(), I18nError> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| I18nError::InvalidTag(tag.to_string()))?;
    let canonical = lang.to_string();
    if !EMBEDDED.iter().any(|embedded| *embedded == canonical) {
        warn!("[i18n] refusing to switch to {canonical}: not embedded");
        return Err(I18nError::Unavailable(canonical));
    }

    debug!("[i18n] switching language to {canonical}");
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    Ok(())
}

pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Tags offered by the navbar's language picker.
pub fn available_languages() -> Vec<String> {
    EMBEDDED.clone()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
