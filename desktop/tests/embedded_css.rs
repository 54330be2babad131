#![cfg(test)]
//! Ensures the embedded desktop CSS (shared unified theme) remains present & non‑trivial.
//!
//! The desktop build inlines `ui/assets/theme/main.css`; a truncated file or
//! broken path would only show up at runtime as an unstyled window.
//!
//! If you intentionally rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_is_not_trivially_small() {
    let non_ws_len = EMBEDDED_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn light_and_dark_tokens_are_both_defined() {
    let (light, dark) = EMBEDDED_CSS
        .split_once(".theme-dark")
        .expect("dark theme block present");
    for token in ["--color-bg", "--color-surface", "--color-text", "--color-border"] {
        assert!(light.contains(token), "light theme missing `{token}`");
        assert!(dark.contains(token), "dark theme missing `{token}`");
    }
}
