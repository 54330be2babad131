//! Label search over the configured navigation.

use std::collections::HashSet;

use crate::config::SiteConfig;

pub const MAX_HITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub label: String,
    pub href: String,
}

/// Case-insensitive substring match on labels, nav items before menu items,
/// one hit per href.
pub fn search(config: &SiteConfig, query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let candidates = config
        .nav_items
        .iter()
        .map(|item| (item.label.as_str(), item.href()))
        .chain(
            config
                .nav_menu_items
                .iter()
                .map(|item| (item.label.as_str(), item.href())),
        );

    let mut seen = HashSet::new();
    candidates
        .filter(|(label, _)| label.to_lowercase().contains(&needle))
        .filter(|(_, href)| seen.insert(*href))
        .take(MAX_HITS)
        .map(|(label, href)| SearchHit {
            label: label.to_string(),
            href: href.to_string(),
        })
        .collect()
}
