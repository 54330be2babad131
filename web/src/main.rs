use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, SiteShell};
use ui::core::viewport::ViewportBand;
use ui::views::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

/// Internal hrefs become router links; anything the router can't parse stays a plain anchor.
fn nav_link(href: &str, class: &str, children: Element) -> Element {
    match href.parse::<Route>() {
        Ok(route) => rsx!(Link { class: "{class}", to: route, {children} }),
        Err(_) => rsx!(a { class: "{class}", href: "{href}", {children} }),
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder { link: nav_link });
    }

    let site = use_hook(|| {
        let site = ui::config::shared();
        info!(
            "[web] starting {} ({} nav items, {} menu items)",
            site.name,
            site.nav_items.len(),
            site.nav_menu_items.len()
        );
        site
    });

    // Global reactive language code; AppNavbar updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    let viewport = viewport_band();
    use_context_provider(|| viewport);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Title { "{site.name}" }
        document::Meta { name: "description", content: "{site.description}" }

        SiteShell {
            Router::<Route> {}
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn viewport_band() -> Signal<ViewportBand> {
    ui::core::viewport::use_browser_viewport()
}

// Server-side renders assume the widest layout; the client corrects it on hydration.
#[cfg(not(target_arch = "wasm32"))]
fn viewport_band() -> Signal<ViewportBand> {
    use_signal(ViewportBand::default)
}

/// A web-specific Router around the shared navbar
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
