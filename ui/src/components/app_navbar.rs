use crate::components::icons::{GithubIcon, Logo, MenuIcon};
use crate::components::{SearchInput, ThemeSwitch};
use crate::config::use_site_config;
use crate::core::viewport::use_viewport_band;
use crate::i18n;
use crate::navbar::NavbarLayout;
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (inlined as well in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms can register a `NavBuilder` that turns internal hrefs into router
/// `Link`s, so `ui` never needs to know each platform's `Route` enum.
///
/// Without a registered builder internal links render as plain anchors.
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
///
/// fn nav_link(href: &str, class: &str, children: Element) -> Element {
///     match href.parse::<Route>() {
///         Ok(route) => rsx!(Link { class: "{class}", to: route, {children} }),
///         Err(_) => rsx!(a { class: "{class}", href: "{href}", {children} }),
///     }
/// }
///
/// register_nav(NavBuilder { link: nav_link });
/// ```
pub struct NavBuilder {
    /// Receives the target href, the CSS class and the link content.
    pub link: fn(href: &str, class: &str, children: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Internal (same-site) link through the registered builder.
pub(crate) fn internal_link(href: &str, class: &str, children: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(href, class, children),
        None => rsx! {
            a { class: "{class}", href: "{href}", {children} }
        },
    }
}

#[component]
pub fn AppNavbar(
    /// Initial state of the mobile menu.
    #[props(default)]
    start_open: bool,
) -> Element {
    i18n::init();

    let config = use_site_config();
    let band = use_viewport_band();
    let mut menu_open = use_signal(|| start_open);

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let layout = NavbarLayout::build(&config, band, menu_open());
    debug!(
        "[navbar] render band={} menu_open={} links={}",
        layout.band.as_str(),
        layout.menu_open,
        layout.desktop_links.len()
    );

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => debug!("[navbar] language picker ignored ({err})"),
        }
    };

    let brand = internal_link(
        "/",
        "navbar__brand-link",
        rsx! {
            Logo { class: "navbar__logo" }
            span { class: "navbar__brand-mark", "{config.name}" }
        },
    );

    let toggle_label = if layout.menu_open {
        t!("nav-menu-close")
    } else {
        t!("nav-menu-open")
    };
    let github = config.links.github().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar navbar--{layout.band.as_str()}",
            // Hidden marker keeps a reactive dependency on the global language signal.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__start",
                    div { class: "navbar__brand", aria_label: t!("nav-brand-home"), {brand} }

                    if layout.show_desktop_links {
                        ul { class: "navbar__links", aria_label: t!("nav-desktop-label"),
                            for link in layout.desktop_links.iter() {
                                li { key: "{link.key}", class: "navbar__item",
                                    {internal_link(&link.href, "navbar__link", rsx! { "{link.label}" })}
                                }
                            }
                        }
                    }
                }

                div { class: "navbar__end",
                    if layout.show_search_inline {
                        SearchInput { show_shortcut: layout.show_shortcut_hint }
                    }

                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                for code in langs().iter() {
                                    option { key: "{code}", value: "{code}", "{code}" }
                                }
                            }
                        }
                    }

                    if layout.show_mobile_controls {
                        a {
                            class: "navbar__github",
                            href: "{github}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: t!("nav-github-label"),
                            GithubIcon {}
                        }
                    }

                    if layout.show_theme_switch {
                        ThemeSwitch {}
                    }

                    if layout.show_mobile_controls {
                        button {
                            r#type: "button",
                            class: "navbar__toggle",
                            aria_controls: "navbar-menu",
                            aria_expanded: "{layout.menu_open}",
                            aria_label: "{toggle_label}",
                            onclick: move |_| menu_open.with_mut(|open| *open = !*open),
                            MenuIcon { open: layout.menu_open }
                        }
                    }
                }
            }

            if let Some(items) = layout.menu {
                nav { id: "navbar-menu", class: "navbar__menu",
                    SearchInput { show_shortcut: false }
                    ul { class: "navbar__menu-items",
                        for item in items {
                            li {
                                key: "{item.key}",
                                class: "navbar__menu-item",
                                onclick: move |_| menu_open.set(false),
                                {internal_link(&item.href, &item.class(), rsx! { "{item.label}" })}
                            }
                        }
                    }
                }
            }
        }
    }
}
