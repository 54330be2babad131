//! Shared SSR harness: mounts a component under the same contexts
//! `SiteShell` would provide and renders it to HTML.

#![allow(dead_code)]

use std::any::Any;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::dioxus_core::{ElementId, Mutation, Mutations};
use dioxus::prelude::*;
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use ui::components::AppNavbar;
use ui::config::{MenuItem, NavItem, SiteConfig, SiteLinks};
use ui::core::viewport::ViewportBand;
use ui::views::Home;

pub const GITHUB: &str = "https://github.com/axon-lab/ingibcontrol";

pub fn site(nav: usize, menu: usize) -> SiteConfig {
    SiteConfig {
        name: "ИнгибитКонтроль".into(),
        description: "Тренажёр ингибиторного контроля".into(),
        nav_items: (0..nav)
            .map(|i| NavItem::new(format!("Пункт {i}"), format!("/p{i}")))
            .collect(),
        nav_menu_items: (0..menu)
            .map(|i| MenuItem::new(format!("Меню {i}")).with_href(format!("/m{i}")))
            .collect(),
        links: SiteLinks {
            github: GITHUB.into(),
        },
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum Page {
    Navbar { start_open: bool },
    Home,
}

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    config: SiteConfig,
    band: ViewportBand,
    page: Page,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    let config = props.config.clone();
    use_context_provider(move || Arc::new(config));
    let band = use_signal(|| props.band);
    use_context_provider(|| band);

    match props.page {
        Page::Navbar { start_open } => rsx! {
            AppNavbar { start_open: start_open }
        },
        Page::Home => rsx! {
            Home {}
        },
    }
}

pub fn render(config: SiteConfig, band: ViewportBand, page: Page) -> String {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { config, band, page });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// A mounted harness that records mutations so tests can dispatch clicks.
pub struct Session {
    dom: VirtualDom,
    pub last_edits: Mutations,
}

impl Session {
    pub fn mount(config: SiteConfig, band: ViewportBand, page: Page) -> Self {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { config, band, page });
        let last_edits = dom.rebuild_to_vec();
        Self { dom, last_edits }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Element carrying attribute `name` in the last batch of edits.
    pub fn element_with_attribute(&self, name: &str) -> Option<ElementId> {
        self.last_edits.edits.iter().find_map(|edit| match edit {
            Mutation::SetAttribute { name: attr, id, .. } if *attr == name => Some(*id),
            _ => None,
        })
    }

    /// Elements that gained a click listener in the last batch of edits.
    pub fn new_click_targets(&self) -> Vec<ElementId> {
        self.last_edits
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn click(&mut self, target: ElementId) {
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        let event = dioxus::dioxus_core::Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event("click", event, target);
        self.last_edits = self.dom.render_immediate_to_vec();
    }
}
