//! The locale environment: template translation, locale-map resolution,
//! and locale-aware string comparison.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt::Display;
use std::path::Path;

use crate::core::catalog::CatalogError;
use crate::schema::locale::{LocaleId, LocaleMap};

/// The capability bundle every renderer receives: an active locale, an
/// optional fallback locale, and a translation table.
///
/// Translation keys are the English template strings themselves, so an
/// empty table renders English: a key missing from the table is used
/// verbatim as the template. Templates substitute positional parameters
/// written as `{0}`, `{1}`, ….
#[derive(Debug, Clone, Default)]
pub struct LocaleEnvironment {
    id: LocaleId,
    fallback: Option<LocaleId>,
    table: FxHashMap<String, String>,
}

impl LocaleEnvironment {
    /// An environment for the given locale with an empty translation table
    /// (renders the built-in English templates).
    pub fn new(id: impl Into<LocaleId>) -> Self {
        LocaleEnvironment {
            id: id.into(),
            fallback: None,
            table: FxHashMap::default(),
        }
    }

    /// Sets the translation table.
    pub fn with_table(mut self, table: FxHashMap<String, String>) -> Self {
        self.table = table;
        self
    }

    /// Sets a fallback locale for [`Self::translate_map`].
    pub fn with_fallback(mut self, fallback: impl Into<LocaleId>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Loads a translation table from a RON file mapping template keys to
    /// localized templates.
    pub fn load_table_from_ron(path: &Path) -> Result<FxHashMap<String, String>, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }

    /// The active locale id.
    pub fn id(&self) -> &LocaleId {
        &self.id
    }

    /// Translates a template key without parameters.
    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, &[])
    }

    /// Translates a template key, substituting `{0}`, `{1}`, … with the
    /// given parameters. An index without a parameter is left in place.
    pub fn translate_with(&self, key: &str, params: &[&dyn Display]) -> String {
        let template = self.table.get(key).map(String::as_str).unwrap_or(key);
        insert_params(template, params)
    }

    /// Selects the value for the active locale from a locale-keyed map,
    /// trying the fallback locale if the active one is absent.
    pub fn translate_map<'a, T>(&self, map: &'a LocaleMap<T>) -> Option<&'a T> {
        map.get(&self.id)
            .or_else(|| self.fallback.as_ref().and_then(|id| map.get(id)))
    }

    /// Compares two strings for locale-aware sorting. Case-insensitive
    /// first, with the raw comparison as a tie-breaker for stability.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let folded = a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase));
        folded.then_with(|| a.cmp(b))
    }
}

/// Substitutes `{N}` placeholders with positional parameters.
fn insert_params(template: &str, params: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) if after[..close].chars().all(|c| c.is_ascii_digit()) && close > 0 => {
                let index: usize = after[..close].parse().unwrap_or(usize::MAX);
                match params.get(index) {
                    Some(param) => out.push_str(&param.to_string()),
                    None => {
                        // Keep unknown indices visible instead of eating them.
                        out.push('{');
                        out.push_str(&after[..close]);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_echoes_template() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(locale.translate("Permanent"), "Permanent");
        assert_eq!(locale.translate_with("{0} actions", &[&3]), "3 actions");
    }

    #[test]
    fn table_lookup_takes_precedence() {
        let mut table = FxHashMap::default();
        table.insert("{0} actions".to_string(), "{0} Aktionen".to_string());
        let locale = LocaleEnvironment::new("de-DE").with_table(table);
        assert_eq!(locale.translate_with("{0} actions", &[&3]), "3 Aktionen");
    }

    #[test]
    fn params_substitute_by_index() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(
            locale.translate_with("{1} before {0}", &[&"a", &"b"]),
            "b before a"
        );
    }

    #[test]
    fn unmatched_index_is_kept() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(locale.translate_with("{0} and {1}", &[&"x"]), "x and {1}");
    }

    #[test]
    fn non_placeholder_braces_pass_through() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(locale.translate("{not a placeholder}"), "{not a placeholder}");
        assert_eq!(locale.translate("{}"), "{}");
    }

    #[test]
    fn translate_map_uses_active_then_fallback() {
        let mut map = LocaleMap::default();
        map.insert(LocaleId::new("en-US"), "english");
        map.insert(LocaleId::new("de-DE"), "deutsch");

        let de = LocaleEnvironment::new("de-DE");
        assert_eq!(de.translate_map(&map), Some(&"deutsch"));

        let fr = LocaleEnvironment::new("fr-FR");
        assert_eq!(fr.translate_map(&map), None);

        let fr_with_fallback = LocaleEnvironment::new("fr-FR").with_fallback("en-US");
        assert_eq!(fr_with_fallback.translate_map(&map), Some(&"english"));
    }

    #[test]
    fn compare_is_case_insensitive_first() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(locale.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale.compare("same", "same"), Ordering::Equal);
    }
}
