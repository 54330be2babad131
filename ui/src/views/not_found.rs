use dioxus::prelude::*;

use crate::components::app_navbar::internal_link;
use crate::t;

/// Fallback for routes the site doesn't serve (yet).
#[component]
pub fn NotFound(#[props(default)] segments: Vec<String>) -> Element {
    crate::i18n::init();
    dioxus::logger::tracing::debug!("[router] no page for `/{}`", segments.join("/"));

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body")} }
            {internal_link("/", "button button--bordered button--round", rsx! { {t!("not-found-home")} })}
        }
    }
}
