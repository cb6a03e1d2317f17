//! Lightweight JSON-backed translations with per-locale bundles.

use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// French.
    Fr,
}

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Fr]
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Map a browser language tag (`fr-CA`, `en`) to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all().into_iter().find(|locale| locale.code() == base)
    }
}

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Missing keys degrade to English, then to the caller's default.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Fr => include_str!("../../i18n/fr.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn missing_locale_key_falls_back_to_english() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("login.to_register", ""), "Need an account?");
        assert_eq!(bundle.text("nav.login", ""), "Connexion");
    }

    #[test]
    fn every_route_has_a_label_in_every_locale() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            for route in Route::all() {
                let key = route.view().label_key();
                assert!(resolve(&bundle.tree, key).is_some(), "{key} in {locale:?}");
            }
        }
    }

    #[test]
    fn lang_tags_map_to_locales() {
        assert_eq!(LocaleCode::from_lang_tag("fr-CA"), Some(LocaleCode::Fr));
        assert_eq!(LocaleCode::from_lang_tag("EN_gb"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("de"), None);
    }
}
