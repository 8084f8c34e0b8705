//! i18n pack loader
//!
//! The public site fetches one JSON blob per language and re-renders static
//! sections from it. Lookups use dotted paths ("nav.home") and fall back to
//! the key itself so a missing translation never blanks the page.

use serde_json::Value;

use crate::endpoints;
use crate::error::ClientResult;
use crate::http::HttpClient;

/// One language's translations
#[derive(Debug, Clone)]
pub struct LanguagePack {
    lang: String,
    root: Value,
}

impl LanguagePack {
    pub fn new(lang: impl Into<String>, root: Value) -> Self {
        Self {
            lang: lang.into(),
            root,
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Translation for a dotted key, or the key itself when missing
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        let mut node = &self.root;
        for part in key.split('.') {
            match node.get(part) {
                Some(next) => node = next,
                None => return key,
            }
        }
        node.as_str().unwrap_or(key)
    }
}

impl HttpClient {
    /// Fetch the translation blob for a language
    pub async fn fetch_language_pack(&self, lang: &str) -> ClientResult<LanguagePack> {
        let root: Value = self.get(&endpoints::language_pack(lang)).await?;
        Ok(LanguagePack::new(lang, root))
    }
}
