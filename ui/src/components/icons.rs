//! Inline SVG icons used by the navbar and the landing page.

use dioxus::prelude::*;

#[component]
pub fn Logo(#[props(default)] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "icon icon--logo {class}",
            width: "36",
            height: "36",
            view_box: "0 0 32 32",
            fill: "none",
            "aria-hidden": "true",
            path {
                fill: "currentColor",
                d: "M16 3c-4.4 0-8 3.3-8 7.5 0 1.6.5 3 1.4 4.2C7.4 15.6 6 17.6 6 20c0 3.3 2.7 6 6 6h1v3h6v-3h1c3.3 0 6-2.7 6-6 0-2.4-1.4-4.4-3.4-5.3.9-1.2 1.4-2.6 1.4-4.2C24 6.3 20.4 3 16 3zm0 3c2.8 0 5 2 5 4.5S18.8 15 16 15s-5-2-5-4.5S13.2 6 16 6z",
            }
        }
    }
}

#[component]
pub fn GithubIcon(#[props(default)] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "icon icon--github {class}",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            path {
                fill: "currentColor",
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: "M12 2C6.5 2 2 6.6 2 12.2c0 4.5 2.9 8.3 6.8 9.7.5.1.7-.2.7-.5v-1.7c-2.8.6-3.4-1.4-3.4-1.4-.5-1.2-1.1-1.5-1.1-1.5-.9-.6.1-.6.1-.6 1 .1 1.5 1 1.5 1 .9 1.6 2.4 1.1 2.9.8.1-.7.4-1.1.6-1.3-2.2-.3-4.6-1.1-4.6-5 0-1.1.4-2 1-2.7-.1-.3-.4-1.3.1-2.7 0 0 .8-.3 2.8 1a9.4 9.4 0 0 1 5 0c1.9-1.3 2.8-1 2.8-1 .5 1.4.2 2.4.1 2.7.6.7 1 1.6 1 2.7 0 3.9-2.4 4.7-4.6 5 .4.3.7.9.7 1.9v2.8c0 .3.2.6.7.5A10.2 10.2 0 0 0 22 12.2C22 6.6 17.5 2 12 2z",
            }
        }
    }
}

#[component]
pub fn SearchIcon(#[props(default)] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "icon icon--search {class}",
            width: "18",
            height: "18",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            circle { cx: "11", cy: "11", r: "7" }
            path { d: "M20 20l-3.5-3.5" }
        }
    }
}

#[component]
pub fn SunIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon--sun",
            width: "22",
            height: "22",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            "aria-hidden": "true",
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4" }
        }
    }
}

#[component]
pub fn MoonIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon--moon",
            width: "22",
            height: "22",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            path {
                fill: "currentColor",
                d: "M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z",
            }
        }
    }
}

#[component]
pub fn MenuIcon(open: bool) -> Element {
    let d = if open {
        "M6 6l12 12M18 6L6 18"
    } else {
        "M4 7h16M4 12h16M4 17h16"
    };
    rsx! {
        svg {
            class: "icon icon--menu",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            "aria-hidden": "true",
            path { d: "{d}" }
        }
    }
}

#[component]
pub fn ExternalIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon--external",
            width: "14",
            height: "14",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M14 4h6v6M20 4l-9 9M18 14v5a1 1 0 0 1-1 1H5a1 1 0 0 1-1-1V7a1 1 0 0 1 1-1h5" }
        }
    }
}
