//! Canonical URL construction with pagination normalization.
//!
//! Search engines should index exactly one URL per logical page. The
//! canonical for a category page is its base link with the `page` query
//! parameter present iff the current page is past the first one; every
//! other query parameter round-trips untouched.

use url::Url;

use super::CatalogError;

/// Build the canonical URL for `base_url` at `current_page`.
///
/// The existing query string is parsed into a key/value list where the last
/// occurrence of a duplicated key wins. `page` is then overwritten with
/// `current_page` when it is greater than 1, and removed otherwise, so the
/// result never carries a `page` parameter with a value of 0 or 1. Key order
/// is preserved from the input, with `page` (re-)appended last; for a fixed
/// input the output is deterministic.
///
/// # Errors
///
/// Returns [`CatalogError::MalformedUrl`] when `base_url` cannot be parsed.
/// Callers are expected to treat this as non-fatal and omit the canonical
/// rather than failing the page.
pub fn build(base_url: &str, current_page: u32) -> Result<String, CatalogError> {
    let mut url = Url::parse(base_url).map_err(|source| CatalogError::MalformedUrl {
        url: base_url.to_string(),
        source,
    })?;

    // Last occurrence wins, first-occurrence position kept.
    let mut params: Vec<(String, String)> = Vec::new();
    for (key, value) in url.query_pairs() {
        let (key, value) = (key.into_owned(), value.into_owned());
        match params.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => params.push((key, value)),
        }
    }

    params.retain(|(key, _)| key != "page");
    if current_page > 1 {
        params.push(("page".to_string(), current_page.to_string()));
    }

    if params.is_empty() {
        url.set_query(None);
    } else {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &params {
            pairs.append_pair(key, value);
        }
        drop(pairs);
    }

    Ok(url.into())
}
