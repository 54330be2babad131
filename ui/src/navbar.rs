//! Navbar layout as a pure function of configuration, viewport band and menu
//! state. `components::app_navbar` only renders what this module decides.

use crate::config::{Emphasis, SiteConfig, FALLBACK_HREF};
use crate::core::viewport::ViewportBand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Unique within the list: the href itself, or `#-{index}` for fallbacks.
    pub key: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub key: String,
    pub label: String,
    pub href: String,
    pub emphasis: Emphasis,
}

impl MenuLink {
    pub fn class(&self) -> String {
        format!("navbar__menu-link navbar__menu-link--{}", self.emphasis.color())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarLayout {
    pub band: ViewportBand,
    pub show_desktop_links: bool,
    pub desktop_links: Vec<NavLink>,
    pub show_theme_switch: bool,
    pub show_search_inline: bool,
    pub show_shortcut_hint: bool,
    pub show_mobile_controls: bool,
    pub menu_open: bool,
    /// `Some` only while the mobile menu is open.
    pub menu: Option<Vec<MenuLink>>,
}

impl NavbarLayout {
    pub fn build(config: &SiteConfig, band: ViewportBand, menu_open: bool) -> Self {
        let desktop = band == ViewportBand::Desktop;
        let mobile = band == ViewportBand::Mobile;

        let desktop_links = if desktop {
            config
                .nav_items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let href = item.href().to_string();
                    let key = if href == FALLBACK_HREF {
                        format!("{href}-{index}")
                    } else {
                        href.clone()
                    };
                    NavLink {
                        key,
                        label: item.label.clone(),
                        href,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        // Menu state survives a resize to a wider band but the menu is only shown on mobile.
        let menu_open = mobile && menu_open;
        let menu = menu_open.then(|| menu_links(config));

        Self {
            band,
            show_desktop_links: desktop,
            desktop_links,
            show_theme_switch: true,
            show_search_inline: desktop,
            show_shortcut_hint: desktop,
            show_mobile_controls: mobile,
            menu_open,
            menu,
        }
    }
}

pub fn menu_links(config: &SiteConfig) -> Vec<MenuLink> {
    let len = config.nav_menu_items.len();
    config
        .nav_menu_items
        .iter()
        .enumerate()
        .map(|(index, item)| MenuLink {
            key: format!("{}-{index}", item.label),
            label: item.label.clone(),
            href: item.href().to_string(),
            emphasis: item.resolved_emphasis(index, len),
        })
        .collect()
}
