//! The rendered library entry shape and small text combinators shared by
//! all renderers.

use serde::Serialize;

use crate::core::locale::LocaleEnvironment;
use crate::core::responsive::{responsive, ResponsiveTextSize};

/// One block of a library entry body, usually a labeled line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl ContentBlock {
    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        ContentBlock { label: Some(label.into()), value: value.into(), class_name: None }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        ContentBlock { label: None, value: value.into(), class_name: None }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// The rendered rules text of an entity, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryEntry {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub class_name: String,
    pub content: Vec<ContentBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
}

/// Collects content blocks, dropping the absent ones.
pub fn collect_content(blocks: impl IntoIterator<Item = Option<ContentBlock>>) -> Vec<ContentBlock> {
    blocks.into_iter().flatten().collect()
}

/// Wraps a text in parentheses with a leading space, or returns an empty
/// string when there is nothing to wrap.
pub fn parens_if(text: Option<&str>) -> String {
    match text {
        None | Some("") => String::new(),
        Some(text) => format!(" ({text})"),
    }
}

/// Appends a text in parentheses if it is not empty.
pub fn append_in_parens_if_not_empty(to_append: &str, text: String) -> String {
    if to_append.is_empty() {
        text
    } else {
        format!("{text} ({to_append})")
    }
}

/// Wraps a value text in the phrasing for a minimum value.
pub fn wrap_as_minimum(locale: &LocaleEnvironment, size: ResponsiveTextSize, text: &str) -> String {
    responsive(
        size,
        || locale.translate_with("at least {0}", &[&text]),
        || locale.translate_with("min. {0}", &[&text]),
    )
}

/// Wraps a value text as a minimum if the flag is set, otherwise returns
/// it unchanged.
pub fn wrap_if_minimum(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    is_minimum: bool,
    text: String,
) -> String {
    if is_minimum {
        wrap_as_minimum(locale, size, &text)
    } else {
        text
    }
}

/// Wraps a value text in the phrasing for a maximum value.
pub fn wrap_as_maximum(locale: &LocaleEnvironment, size: ResponsiveTextSize, text: &str) -> String {
    responsive(
        size,
        || locale.translate_with("no more than {0}", &[&text]),
        || locale.translate_with("max. {0}", &[&text]),
    )
}

/// Wraps a value text as a maximum if the flag is set, otherwise returns
/// it unchanged.
pub fn wrap_if_maximum(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    is_maximum: bool,
    text: String,
) -> String {
    if is_maximum {
        wrap_as_maximum(locale, size, &text)
    } else {
        text
    }
}

/// Combines a computed parameter text with the authored rules text. When
/// they differ, the computed value is emphasized and the authored text kept
/// in parentheses for comparison.
pub fn emphasize_if_differs(computed: String, authored: &str) -> String {
    if computed == authored {
        computed
    } else {
        format!("***{computed}*** ({authored})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parens_wrapping() {
        assert_eq!(parens_if(None), "");
        assert_eq!(parens_if(Some("")), "");
        assert_eq!(parens_if(Some("note")), " (note)");

        assert_eq!(append_in_parens_if_not_empty("", "Touch".to_string()), "Touch");
        assert_eq!(
            append_in_parens_if_not_empty("only once", "Touch".to_string()),
            "Touch (only once)"
        );
    }

    #[test]
    fn minimum_and_maximum_wrapping() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(
            wrap_if_minimum(&locale, ResponsiveTextSize::Full, true, "8 AE".to_string()),
            "at least 8 AE"
        );
        assert_eq!(
            wrap_if_minimum(&locale, ResponsiveTextSize::Compressed, true, "8 AE".to_string()),
            "min. 8 AE"
        );
        assert_eq!(
            wrap_if_minimum(&locale, ResponsiveTextSize::Full, false, "8 AE".to_string()),
            "8 AE"
        );
        assert_eq!(
            wrap_if_maximum(&locale, ResponsiveTextSize::Full, true, "5 minutes".to_string()),
            "no more than 5 minutes"
        );
        assert_eq!(
            wrap_if_maximum(&locale, ResponsiveTextSize::Compressed, true, "5 min".to_string()),
            "max. 5 min"
        );
    }

    #[test]
    fn computed_value_is_emphasized_when_texts_differ() {
        assert_eq!(emphasize_if_differs("Touch".to_string(), "Touch"), "Touch");
        assert_eq!(
            emphasize_if_differs("2 actions".to_string(), "2 actions (only at night)"),
            "***2 actions*** (2 actions (only at night))"
        );
    }

    #[test]
    fn content_collection_drops_absent_blocks() {
        let blocks = collect_content([
            Some(ContentBlock::labeled("Check", "COU/SGC/INT")),
            None,
            Some(ContentBlock::plain("afterwards").with_class("effect-after")),
        ]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].class_name.as_deref(), Some("effect-after"));
    }
}
