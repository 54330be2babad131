#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config, LogicalSize};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, SiteShell};
use ui::core::viewport::ViewportBand;
use ui::views::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

// Shared theme, embedded so the desktop build needs no separate /assets.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();
    let site = ui::config::shared();
    info!("[desktop] starting {} v{}", site.name, env!("CARGO_PKG_VERSION"));

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("{} – v{}", site.name, env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1280.0, 820.0))
                        .with_min_inner_size(LogicalSize::new(360.0, 480.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link(href: &str, class: &str, children: Element) -> Element {
    match href.parse::<Route>() {
        Ok(route) => rsx!(Link { class: "{class}", to: route, {children} }),
        Err(_) => rsx!(a { class: "{class}", href: "{href}", {children} }),
    }
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Provide global reactive language code signal (mirrors web approach)
    // AppNavbar (shared) will update this via context on language selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    let viewport = use_window_viewport();
    use_context_provider(|| viewport);

    register_nav(NavBuilder { link: nav_link });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper div to force full remount on language change.
        div {
            key: "{lang_code()}",
            SiteShell {
                Router::<Route> {}
            }
        }
    }
}

/// Band signal driven by the native window's logical width.
#[cfg(feature = "desktop")]
fn use_window_viewport() -> Signal<ViewportBand> {
    use dioxus::desktop::tao::event::{Event, WindowEvent};

    let window = dioxus::desktop::use_window();
    let mut band = use_signal(|| {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        ViewportBand::from_width(size.width)
    });

    dioxus::desktop::use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let logical = size.to_logical::<f64>(window.scale_factor());
            let next = ViewportBand::from_width(logical.width);
            if *band.peek() != next {
                info!("[desktop] viewport band -> {}", next.as_str());
                band.set(next);
            }
        }
    });

    band
}

#[cfg(not(feature = "desktop"))]
fn use_window_viewport() -> Signal<ViewportBand> {
    use_signal(ViewportBand::default)
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific Router around the shared navbar
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {}

        Outlet::<Route> {}
    }
}
