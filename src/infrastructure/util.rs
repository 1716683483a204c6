// src/infrastructure/util.rs
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::util::SlugGenerator;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

static UNSLUGGABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\p{Han}\s-]").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid regex"));

static LAST_FALLBACK: AtomicI64 = AtomicI64::new(0);

/// URL-safe identifier for `title`: lowercase letters, digits and single
/// hyphens, never starting or ending with a hyphen. Titles with nothing
/// usable yield a timestamp token that is strictly increasing per process.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let stripped = UNSLUGGABLE.replace_all(&lowered, "");
    let hyphenated = WHITESPACE.replace_all(&stripped, "-");

    // `\w` admits `_` and combining marks; keep only letters, digits and hyphens.
    let filtered: String = hyphenated
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect();
    let collapsed = HYPHENS.replace_all(&filtered, "-");
    let slug = collapsed.trim_matches('-');

    if slug.is_empty() {
        fallback_token()
    } else {
        slug.to_string()
    }
}

fn fallback_token() -> String {
    let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
    let mut last = LAST_FALLBACK.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_FALLBACK.compare_exchange_weak(
            last,
            next,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return next.to_string(),
            Err(actual) => last = actual,
        }
    }
}

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_slug(input)
    }
}
