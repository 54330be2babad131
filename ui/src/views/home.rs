use dioxus::prelude::*;

use crate::components::icons::{ExternalIcon, GithubIcon};
use crate::config::use_site_config;
use crate::t;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");
const FEATURE_ICON: Asset = asset!("/assets/images/axon-mark.svg");

/// One card of the "about the trainer" grid.
#[derive(Debug, Clone)]
pub struct FeatureCard {
    pub icon: Asset,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub cta_label: String,
}

/// The three fixed cards, in display order.
pub fn feature_cards() -> [FeatureCard; 3] {
    [
        FeatureCard {
            icon: FEATURE_ICON,
            title: t!("feature-inhibition-title"),
            subtitle: t!("feature-inhibition-subtitle"),
            body: t!("feature-inhibition-body"),
            cta_label: t!("feature-inhibition-cta"),
        },
        FeatureCard {
            icon: FEATURE_ICON,
            title: t!("feature-benefits-title"),
            subtitle: t!("feature-benefits-subtitle"),
            body: t!("feature-benefits-body"),
            cta_label: t!("feature-benefits-cta"),
        },
        FeatureCard {
            icon: FEATURE_ICON,
            title: t!("feature-start-title"),
            subtitle: t!("feature-start-subtitle"),
            body: t!("feature-start-body"),
            cta_label: t!("feature-start-cta"),
        },
    ]
}

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    dioxus::logger::tracing::debug!("[i18n] Home render (lang_marker={lang})");
}

#[component]
pub fn Home() -> Element {
    crate::i18n::init();

    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(crate::i18n::current_language);

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    let config = use_site_config();
    let github = config.links.github().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }

        div { class: "page page-home",
            section { class: "hero",
                div { class: "hero__heading",
                    span { class: "title", {t!("hero-title-lead")} " " }
                    span { class: "title", {t!("hero-title-middle")} " " }
                    span { class: "title title--violet", {t!("hero-title-accent")} }
                    br {}
                    div { class: "subtitle hero__subtitle", {t!("hero-subtitle")} }
                }
                div { class: "hero__actions",
                    a {
                        class: "hero__cta button button--primary button--shadow button--round",
                        href: "{github}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!("hero-cta-train")}
                    }
                    a {
                        class: "hero__cta button button--bordered button--round",
                        href: "{github}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        GithubIcon { class: "hero__github-icon" }
                        {t!("hero-cta-github")}
                    }
                }
            }

            section { class: "about",
                h2 { class: "about__title", {t!("about-title")} }
                div { class: "feature-grid",
                    for card in feature_cards() {
                        {render_feature_card(card, &github)}
                    }
                }
            }
        }
    }
}

fn render_feature_card(card: FeatureCard, href: &str) -> Element {
    let FeatureCard {
        icon,
        title,
        subtitle,
        body,
        cta_label,
    } = card;
    let alt = t!("feature-icon-alt");

    rsx! {
        article { class: "feature-card",
            header { class: "feature-card__header",
                img {
                    class: "feature-card__icon",
                    src: icon,
                    alt: "{alt}",
                    width: "40",
                    height: "40",
                }
                div { class: "feature-card__heading",
                    p { class: "feature-card__title", "{title}" }
                    p { class: "feature-card__subtitle", "{subtitle}" }
                }
            }
            div { class: "feature-card__body",
                p { "{body}" }
            }
            footer { class: "feature-card__footer",
                a {
                    class: "feature-card__cta",
                    href: "{href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{cta_label}"
                    ExternalIcon {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_cards_with_content() {
        crate::i18n::init();
        let cards = feature_cards();
        assert_eq!(cards.len(), 3);
        for card in &cards {
            assert!(!card.title.is_empty());
            assert!(!card.subtitle.is_empty());
            assert!(!card.body.is_empty());
            assert!(!card.cta_label.is_empty());
        }
    }
}
