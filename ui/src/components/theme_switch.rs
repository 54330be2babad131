use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::icons::{MoonIcon, SunIcon};
use crate::core::storage;
use crate::core::theme::Theme;
use crate::t;

/// Light/dark toggle. Writes the shared `Signal<Theme>` from `SiteShell` when
/// present and persists the choice.
#[component]
pub fn ThemeSwitch() -> Element {
    let local = use_signal(Theme::default);
    let mut theme = try_use_context::<Signal<Theme>>().unwrap_or(local);

    let current = theme();
    let pressed = current == Theme::Dark;
    let label = match current {
        Theme::Light => t!("theme-switch-to-dark"),
        Theme::Dark => t!("theme-switch-to-light"),
    };

    let on_click = move |_: MouseEvent| {
        let next = theme().toggle();
        theme.set(next);
        if let Err(err) = storage::save_theme(next) {
            warn!("[theme] couldn't persist theme preference ({err})");
        }
    };

    rsx! {
        button {
            r#type: "button",
            class: "theme-switch theme-switch--{current}",
            aria_label: "{label}",
            aria_pressed: "{pressed}",
            onclick: on_click,
            if current == Theme::Dark {
                SunIcon {}
            } else {
                MoonIcon {}
            }
        }
    }
}
