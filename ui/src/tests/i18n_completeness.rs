use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::FALLBACK_LANGUAGE;

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "ingibcontrol-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Any line of the form `<id> = ...`
/// counts; comments, terms (`-id`), attributes and continuations are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(['#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every literal first argument of `t!("...")` under `src_root`.
///
/// Dynamically built IDs and direct `fl!` calls are not seen; the views only
/// use literal `t!` lookups.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            found.extend(keys_in_source(&content));
        }
    }

    found
}

/// Literal keys of standalone `t!("...")` calls. `assert!("..")` and other
/// macros ending in `t` are not lookups.
fn keys_in_source(content: &str) -> BTreeSet<String> {
    const CALL: &str = "t!(\"";
    let mut found = BTreeSet::new();

    for (pos, _) in content.match_indices(CALL) {
        let standalone = content[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
        if !standalone {
            continue;
        }
        let rest = &content[pos + CALL.len()..];
        let Some(end) = rest.find('"') else { continue };
        let key = &rest[..end];
        if !key.is_empty() && key.chars().all(valid_key_char) {
            found.insert(key.to_string());
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

fn locale_keys(i18n_root: &Path, locale: &str) -> BTreeSet<String> {
    let path = i18n_root.join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("Failed to read {}: {err}", path.display()));
    parse_ftl_keys(&content)
}

#[test]
fn parser_skips_comments_terms_and_attributes() {
    let keys = parse_ftl_keys(
        "# comment\n-brand = Аксон\nhero-title = Привет\n    .title = attr\nhero-body =\n    multi\n",
    );
    let expected: BTreeSet<String> = ["hero-body", "hero-title"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(keys, expected);
}

#[test]
fn scanner_only_reads_standalone_lookups() {
    let keys = keys_in_source(
        "let a = t!(\"hero-subtitle\");\nassert!(\"sepia\".is_empty());\n{t!(\"about-title\")}\ncrate::t!(\"nav-search-label\")",
    );
    let expected: BTreeSet<String> = ["about-title", "hero-subtitle", "nav-search-label"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(keys, expected);
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_keys = locale_keys(&i18n_root, FALLBACK_LANGUAGE);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback locale {FALLBACK_LANGUAGE}"
    );

    // Every key used in the sources must exist in the fallback bundle.
    let referenced = referenced_keys(&crate_root.join("src"));
    let missing_in_fallback: Vec<_> = referenced.difference(&fallback_keys).cloned().collect();
    assert!(
        missing_in_fallback.is_empty(),
        "Referenced translation keys missing in {FALLBACK_LANGUAGE}:\n{}",
        missing_in_fallback.join("\n")
    );

    // The landing page is static content, so stale keys are a bug too.
    let unused: Vec<_> = fallback_keys.difference(&referenced).cloned().collect();
    assert!(
        unused.is_empty(),
        "Fallback keys not referenced by any t!() call:\n{}",
        unused.join("\n")
    );

    // Every other locale must translate every fallback key.
    let per_locale_missing: BTreeMap<String, Vec<String>> = locale_dirs(&i18n_root)
        .into_iter()
        .filter(|locale| locale != FALLBACK_LANGUAGE)
        .filter_map(|locale| {
            let keys = locale_keys(&i18n_root, &locale);
            let missing: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
            (!missing.is_empty()).then_some((locale, missing))
        })
        .collect();

    if !per_locale_missing.is_empty() {
        let mut report = String::from("Locales with missing translations relative to fallback:\n");
        for (locale, missing) in &per_locale_missing {
            report.push_str(&format!("  {locale} ({} missing)\n", missing.len()));
            for key in missing {
                report.push_str(&format!("    {key}\n"));
            }
        }
        panic!("{report}");
    }
}
