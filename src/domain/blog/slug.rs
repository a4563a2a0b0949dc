// src/domain/blog/slug.rs
use chrono::{DateTime, Utc};

use super::value_objects::{BlogSlug, SLUG_MAX_CHARS};

/// Turn arbitrary text into a slug.
///
/// Every maximal run of characters outside `[a-z0-9]` (after lowercasing) becomes a single
/// hyphen and hyphens at either end are dropped. When nothing usable remains the slug falls
/// back to `blog-<epoch millis of now>`, so the result is never empty.
pub fn normalize(input: &str, now: DateTime<Utc>) -> BlogSlug {
    let slug = kebab_case(input);
    if slug.is_empty() {
        BlogSlug::from_normalized(fallback(now))
    } else {
        BlogSlug::from_normalized(slug)
    }
}

fn kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.trim().chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if out.len() > SLUG_MAX_CHARS {
        out.truncate(SLUG_MAX_CHARS);
        while out.ends_with('-') {
            out.pop();
        }
    }

    out
}

fn fallback(now: DateTime<Utc>) -> String {
    format!("blog-{}", now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(millis).unwrap()
    }

    fn assert_well_formed(slug: &str) {
        assert!(!slug.is_empty());
        assert!(!slug.starts_with('-'), "{slug}");
        assert!(!slug.ends_with('-'), "{slug}");
        assert!(!slug.contains("--"), "{slug}");
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "{slug}"
        );
    }

    #[test]
    fn punctuation_collapses_to_single_hyphen() {
        assert_eq!(normalize("Hello, World!", Utc::now()).as_str(), "hello-world");
    }

    #[test]
    fn surrounding_whitespace_and_symbols_are_stripped() {
        assert_eq!(
            normalize("  --Rust & Axum: 2024 edition!!  ", Utc::now()).as_str(),
            "rust-axum-2024-edition"
        );
    }

    #[test]
    fn non_ascii_letters_act_as_separators() {
        assert_eq!(normalize("Café au lait", Utc::now()).as_str(), "caf-au-lait");
    }

    #[test]
    fn symbol_only_input_falls_back_to_timestamp() {
        let first = normalize("   ***   ", at(1_700_000_000_000));
        let second = normalize("   ***   ", at(1_700_000_000_000) + Duration::milliseconds(5));
        assert_eq!(first.as_str(), "blog-1700000000000");
        assert_ne!(first, second);
        assert_well_formed(first.as_str());
    }

    #[test]
    fn empty_input_falls_back_to_timestamp() {
        assert!(normalize("", at(42)).as_str().starts_with("blog-"));
    }

    #[test]
    fn long_input_is_truncated_without_trailing_hyphen() {
        let input = format!("{} tail", "a".repeat(219));
        let slug = normalize(&input, Utc::now());
        assert!(slug.as_str().len() <= SLUG_MAX_CHARS);
        assert_well_formed(slug.as_str());
    }

    #[test]
    fn output_is_always_well_formed() {
        let samples = [
            "Hello, World!",
            "---",
            "a--b",
            "ÀÉÎ õü",
            "tabs\tand\nnewlines",
            "MiXeD CaSe 123",
            "  ",
            "emoji 🚀 launch",
            "already-a-slug",
        ];
        for sample in samples {
            assert_well_formed(normalize(sample, at(1)).as_str());
        }
    }
}
