//! Lookup URL construction: dictionary base path + word.

use anyhow::{Context, Result};
use url::Url;

/// Builds the dictionary entry URL for `word` by joining it onto `base`.
///
/// The base must end with `/` (e.g. `https://en.wiktionary.org/wiki/`) or the
/// last path segment would be replaced rather than extended. Non-ASCII words
/// are percent-encoded; Wiktionary resolves either form.
pub fn entry_url(base: &Url, word: &str) -> Result<Url> {
    base.join(word)
        .with_context(|| format!("cannot build lookup URL for {word:?}"))
}
