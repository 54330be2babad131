use dioxus::prelude::*;

use crate::components::app_navbar::internal_link;
use crate::components::icons::SearchIcon;
use crate::config::use_site_config;
use crate::search::search;
use crate::t;

/// Search box with a suggestion list of matching navigation entries.
#[component]
pub fn SearchInput(#[props(default)] show_shortcut: bool) -> Element {
    let config = use_site_config();
    let mut query = use_signal(String::new);

    let active = !query.read().trim().is_empty();
    let hits = search(&config, &query.read());

    rsx! {
        div { class: "search", role: "search",
            label { class: "visually-hidden", r#for: "navbar-search", {t!("nav-search-label")} }
            span { class: "search__icon", SearchIcon {} }
            input {
                id: "navbar-search",
                class: "search__input",
                r#type: "search",
                autocomplete: "off",
                aria_label: t!("nav-search-label"),
                placeholder: t!("nav-search-placeholder"),
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            if show_shortcut {
                kbd { class: "search__kbd", "⌘ K" }
            }

            if active {
                ul { class: "search__results", role: "listbox",
                    if hits.is_empty() {
                        li { class: "search__empty", {t!("nav-search-empty")} }
                    }
                    for hit in hits {
                        li {
                            key: "{hit.href}",
                            class: "search__result",
                            role: "option",
                            onclick: move |_| query.set(String::new()),
                            {internal_link(&hit.href, "search__link", rsx! { "{hit.label}" })}
                        }
                    }
                }
            }
        }
    }
}
