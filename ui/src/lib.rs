//! Shared UI crate for ИнгибитКонтроль. The landing page, the navbar and
//! everything they read (site config, i18n, theme, viewport) live here;
//! platform crates only add routing and window glue.

use dioxus::prelude::*;

pub mod config;
pub mod core;
pub mod i18n;
pub mod navbar;
pub mod search;
pub mod views;

pub mod components {
    // Localized, responsive navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod icons;

    mod search_input;
    pub use search_input::SearchInput;

    mod theme_switch;
    pub use theme_switch::ThemeSwitch;

    mod site_shell;
    pub use site_shell::SiteShell;
}

/// Shared theme stylesheet. Web links it; desktop inlines the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
