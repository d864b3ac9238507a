// ABOUTME: Pre-compiled CSS selector cache shared by every DOM query.
// ABOUTME: Selectors are parsed once per process; invalid ones are cached as None.

//! Selector caching for repeated DOM queries.
//!
//! Every row runs the same three field selectors, so parsing them per row
//! would dominate the scan. This cache compiles each selector string once.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use scraper::Selector;

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `None` if the selector does not parse.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    {
        let cache = SELECTOR_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    if compiled.is_none() {
        tracing::debug!(selector = css, "selector failed to parse");
    }
    let mut cache = SELECTOR_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    // Another thread may have inserted while we compiled.
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Compiles a batch of selectors, returning the first one that is invalid.
pub fn precompile_selectors<I, S>(selectors: I) -> Result<(), String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for css in selectors {
        let css = css.as_ref();
        if get_or_compile(css).is_none() {
            return Err(css.to_string());
        }
    }
    Ok(())
}
