// User-facing message catalogs.

use crate::config::Localization;
use std::collections::HashMap;

/// A translatable message: catalog key plus the source-language text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub key: &'static str,
    pub text: &'static str,
}

pub const SEARCH_DATA_UNAVAILABLE: Message = Message {
    key: "search_data_unavailable",
    text: "<p class=\"resultStatusMessage\">Could not retrieve search data.</p>",
};

pub struct Localizer {
    default_locale: String,
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl Localizer {
    pub fn new(settings: &Localization) -> Self {
        let catalogs = settings
            .catalogs
            .iter()
            .map(|(locale, entries)| (normalize(locale), entries.clone()))
            .collect();
        Self {
            default_locale: normalize(&settings.default_locale),
            catalogs,
        }
    }

    /// Translate `message` for `locale`, falling back to the primary language, then the
    /// default locale, then the source text.
    pub fn translate(&self, locale: Option<&str>, message: &Message) -> String {
        let requested = locale.map(normalize);
        requested
            .iter()
            .chain(std::iter::once(&self.default_locale))
            .find_map(|locale| self.lookup(locale, message.key))
            .unwrap_or(message.text)
            .to_string()
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        let exact = self.catalogs.get(locale).and_then(|c| c.get(key));
        let primary = || {
            let language = locale.split('-').next()?;
            self.catalogs.get(language).and_then(|c| c.get(key))
        };
        exact.or_else(primary).map(String::as_str)
    }
}

/// Preferred locale from an `Accept-Language` header value (first listed tag).
pub fn negotiate_locale(accept_language: &str) -> Option<String> {
    let tag = accept_language.split(',').next()?.split(';').next()?.trim();
    if tag.is_empty() || tag == "*" {
        None
    } else {
        Some(tag.to_string())
    }
}

fn normalize(locale: &str) -> String {
    locale.trim().replace('_', "-").to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn localizer(default_locale: &str) -> Localizer {
        let mut catalogs = HashMap::new();
        catalogs.insert(
            "fr".to_string(),
            HashMap::from([(
                "search_data_unavailable".to_string(),
                "donnees indisponibles".to_string(),
            )]),
        );
        catalogs.insert(
            "de-AT".to_string(),
            HashMap::from([(
                "search_data_unavailable".to_string(),
                "Suchdaten fehlen".to_string(),
            )]),
        );
        Localizer::new(&Localization {
            default_locale: default_locale.to_string(),
            catalogs,
        })
    }

    #[test]
    fn given_no_locale_and_untranslated_default_when_translated_should_return_source_text() {
        let text = localizer("en-US").translate(None, &SEARCH_DATA_UNAVAILABLE);
        assert_eq!(
            text,
            "<p class=\"resultStatusMessage\">Could not retrieve search data.</p>"
        );
    }

    #[test]
    fn given_regional_locale_when_translated_should_fall_back_to_language() {
        let text = localizer("en-US").translate(Some("fr-CA"), &SEARCH_DATA_UNAVAILABLE);
        assert_eq!(text, "donnees indisponibles");
    }

    #[test]
    fn given_underscore_locale_when_translated_should_match_case_insensitively() {
        let text = localizer("en-US").translate(Some("de_at"), &SEARCH_DATA_UNAVAILABLE);
        assert_eq!(text, "Suchdaten fehlen");
    }

    #[test]
    fn given_unknown_locale_when_translated_should_use_default_locale() {
        let text = localizer("fr-FR").translate(Some("ja-JP"), &SEARCH_DATA_UNAVAILABLE);
        assert_eq!(text, "donnees indisponibles");
    }

    #[test]
    fn given_accept_language_when_negotiated_should_pick_first_tag() {
        assert_eq!(
            negotiate_locale("fr-CH, fr;q=0.9, en;q=0.8"),
            Some("fr-CH".to_string())
        );
        assert_eq!(negotiate_locale("de;q=0.7"), Some("de".to_string()));
        assert_eq!(negotiate_locale("*"), None);
        assert_eq!(negotiate_locale(""), None);
    }
}
