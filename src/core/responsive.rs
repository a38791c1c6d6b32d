//! Responsive text selection: every computed parameter text exists in a
//! verbose form for the full library entry view and an abbreviated form for
//! the character sheet.

use crate::core::entry::append_in_parens_if_not_empty;
use crate::core::locale::LocaleEnvironment;
use crate::schema::locale::LocaleMap;
use crate::schema::parameters::{ResponsiveText, ResponsiveTextOptional, TextOverrides};

/// The placeholder rendered when a cross-reference or translation a value
/// depends on cannot be resolved.
pub const MISSING_VALUE: &str = "?";

/// The display context a text is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsiveTextSize {
    /// A full library entry view.
    Full,
    /// A compressed display such as a character sheet.
    Compressed,
}

/// Evaluates one of two alternatives depending on the text size.
pub fn responsive<T>(
    size: ResponsiveTextSize,
    full: impl FnOnce() -> T,
    compressed: impl FnOnce() -> T,
) -> T {
    match size {
        ResponsiveTextSize::Full => full(),
        ResponsiveTextSize::Compressed => compressed(),
    }
}

/// Selects the form of a responsive text for the given size.
pub fn responsive_text(value: &ResponsiveText, size: ResponsiveTextSize) -> &str {
    match size {
        ResponsiveTextSize::Full => &value.full,
        ResponsiveTextSize::Compressed => &value.compressed,
    }
}

/// Selects the form of a responsive text whose compressed form may be
/// absent.
pub fn responsive_text_optional(
    value: &ResponsiveTextOptional,
    size: ResponsiveTextSize,
) -> Option<&str> {
    match size {
        ResponsiveTextSize::Full => Some(&value.full),
        ResponsiveTextSize::Compressed => value.compressed.as_deref(),
    }
}

/// Applies a translator-requested replacement to a computed text. The
/// replacement's `$1` marker is substituted with the computed value.
pub fn replace_text_if_requested(
    overrides: &LocaleMap<TextOverrides>,
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    computed: String,
) -> String {
    match locale
        .translate_map(overrides)
        .and_then(|o| o.replacement.as_ref())
    {
        Some(replacement) => responsive_text(replacement, size).replace("$1", &computed),
        None => computed,
    }
}

/// Appends a translator-requested note in parentheses to a computed text.
pub fn append_note_if_requested(
    overrides: &LocaleMap<TextOverrides>,
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    computed: String,
) -> String {
    match locale.translate_map(overrides).and_then(|o| o.note.as_ref()) {
        Some(note) => append_in_parens_if_not_empty(
            responsive_text_optional(note, size).unwrap_or(""),
            computed,
        ),
        None => computed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::locale::LocaleId;

    fn text(full: &str, compressed: &str) -> ResponsiveText {
        ResponsiveText { full: full.to_string(), compressed: compressed.to_string() }
    }

    #[test]
    fn dispatches_by_size() {
        assert_eq!(responsive(ResponsiveTextSize::Full, || "a", || "b"), "a");
        assert_eq!(responsive(ResponsiveTextSize::Compressed, || "a", || "b"), "b");

        let value = text("8 arcane energy", "8 AE");
        assert_eq!(responsive_text(&value, ResponsiveTextSize::Full), "8 arcane energy");
        assert_eq!(responsive_text(&value, ResponsiveTextSize::Compressed), "8 AE");
    }

    #[test]
    fn optional_compressed_form_may_be_absent() {
        let value = ResponsiveTextOptional { full: "verbose".to_string(), compressed: None };
        assert_eq!(responsive_text_optional(&value, ResponsiveTextSize::Full), Some("verbose"));
        assert_eq!(responsive_text_optional(&value, ResponsiveTextSize::Compressed), None);
    }

    #[test]
    fn replacement_substitutes_marker() {
        let mut overrides = LocaleMap::default();
        overrides.insert(
            LocaleId::new("en-US"),
            TextOverrides {
                replacement: Some(text("exactly $1, no more", "$1!")),
                note: None,
            },
        );
        let locale = LocaleEnvironment::new("en-US");

        assert_eq!(
            replace_text_if_requested(
                &overrides,
                &locale,
                ResponsiveTextSize::Full,
                "8 AE".to_string()
            ),
            "exactly 8 AE, no more"
        );
    }

    #[test]
    fn no_override_returns_computed_text() {
        let overrides = LocaleMap::default();
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(
            replace_text_if_requested(
                &overrides,
                &locale,
                ResponsiveTextSize::Full,
                "8 AE".to_string()
            ),
            "8 AE"
        );
        assert_eq!(
            append_note_if_requested(
                &overrides,
                &locale,
                ResponsiveTextSize::Full,
                "8 AE".to_string()
            ),
            "8 AE"
        );
    }

    #[test]
    fn note_is_appended_in_parens() {
        let mut overrides = LocaleMap::default();
        overrides.insert(
            LocaleId::new("en-US"),
            TextOverrides {
                replacement: None,
                note: Some(ResponsiveTextOptional {
                    full: "only at night".to_string(),
                    compressed: None,
                }),
            },
        );
        let locale = LocaleEnvironment::new("en-US");

        assert_eq!(
            append_note_if_requested(
                &overrides,
                &locale,
                ResponsiveTextSize::Full,
                "Touch".to_string()
            ),
            "Touch (only at night)"
        );
        // No compressed note form, so nothing is appended.
        assert_eq!(
            append_note_if_requested(
                &overrides,
                &locale,
                ResponsiveTextSize::Compressed,
                "Touch".to_string()
            ),
            "Touch"
        );
    }
}
