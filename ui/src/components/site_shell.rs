use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::config;
use crate::core::storage;
use crate::core::viewport::use_viewport_band;

/// Root wrapper mounted by each platform shell. Provides the site config and
/// theme contexts and applies the theme class.
///
/// The viewport band is provided by the platform (`Signal<ViewportBand>`
/// context) since only it knows how to observe the window.
#[component]
pub fn SiteShell(children: Element) -> Element {
    let site = use_context_provider(config::shared);
    let theme = use_signal(|| storage::load_theme().unwrap_or_default());
    use_context_provider(|| theme);
    let band = use_viewport_band();

    debug!(
        "[shell] render site={} band={} theme={}",
        site.name,
        band.as_str(),
        theme()
    );

    rsx! {
        div {
            class: "site {theme().css_class()}",
            "data-band": "{band.as_str()}",
            {children}
        }
    }
}
