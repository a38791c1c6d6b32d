//! Renderers for experience levels, focus rules, and optional rules.

use crate::core::catalog::{Catalog, Registry};
use crate::core::entry::{ContentBlock, LibraryEntry};
use crate::core::locale::LocaleEnvironment;
use crate::render::activatable::references_section;
use crate::schema::entities::{ExperienceLevel, FocusRule, OptionalRule};
use crate::schema::ids::{PublicationId, SubjectId};
use crate::schema::static_data::{Publication, Subject};

/// Renders the library entry of an experience level.
pub fn render_experience_level(
    entry: &ExperienceLevel,
    locale: &LocaleEnvironment,
) -> Option<LibraryEntry> {
    let translation = locale.translate_map(&entry.translations)?;

    let content = vec![
        ContentBlock::labeled(
            locale.translate("Adventure Points"),
            entry.adventure_points.to_string(),
        ),
        ContentBlock::labeled(
            locale.translate("Maximum Attribute Value"),
            entry.max_attribute_value.to_string(),
        ),
        ContentBlock::labeled(
            locale.translate("Maximum Skill Value"),
            entry.max_skill_rating.to_string(),
        ),
        ContentBlock::labeled(
            locale.translate("Maximum Combat Technique"),
            entry.max_combat_technique_rating.to_string(),
        ),
        ContentBlock::labeled(
            locale.translate("Maximum Attribute Total"),
            entry.max_attribute_total.to_string(),
        ),
        ContentBlock::labeled(
            locale.translate("Number of Spells/Liturgical Chants"),
            entry.max_number_of_spells_liturgical_chants.to_string(),
        ),
        ContentBlock::labeled(
            locale.translate("Number from other Traditions"),
            entry.max_number_of_unfamiliar_spells.to_string(),
        ),
    ];

    Some(LibraryEntry {
        title: translation.name.clone(),
        subtitle: None,
        class_name: "experience-level".to_string(),
        content,
        references: None,
    })
}

/// Converts a focus rule level to a roman numeral.
fn romanize(mut value: u32) -> String {
    const NUMERALS: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut result = String::new();
    for (divisor, numeral) in NUMERALS {
        while value >= divisor {
            result.push_str(numeral);
            value -= divisor;
        }
    }
    result
}

/// Cross-reference lookups needed to render focus rules.
#[derive(Debug, Clone, Copy)]
pub struct FocusRuleDeps<'a> {
    pub subjects: &'a Registry<SubjectId, Subject>,
    pub publications: &'a Registry<PublicationId, Publication>,
}

impl<'a> FocusRuleDeps<'a> {
    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        FocusRuleDeps {
            subjects: &catalog.subjects,
            publications: &catalog.publications,
        }
    }
}

/// Renders the library entry of a focus rule. The level becomes a roman
/// numeral after the name, the subject the subtitle.
pub fn render_focus_rule(
    entry: &FocusRule,
    deps: &FocusRuleDeps<'_>,
    locale: &LocaleEnvironment,
) -> Option<LibraryEntry> {
    let translation = locale.translate_map(&entry.translations)?;

    let subtitle = deps
        .subjects
        .get(&entry.subject)
        .and_then(|subject| locale.translate_map(&subject.translations))
        .map(|t| t.name.clone());

    Some(LibraryEntry {
        title: format!("{} ({})", translation.name, romanize(entry.level)),
        subtitle,
        class_name: "focus-rule".to_string(),
        content: vec![ContentBlock::plain(&translation.description)],
        references: references_section(deps.publications, locale, &entry.src),
    })
}

/// Renders the library entry of an optional rule.
pub fn render_optional_rule(
    entry: &OptionalRule,
    publications: &Registry<PublicationId, Publication>,
    locale: &LocaleEnvironment,
) -> Option<LibraryEntry> {
    let translation = locale.translate_map(&entry.translations)?;

    Some(LibraryEntry {
        title: translation.name.clone(),
        subtitle: None,
        class_name: "optional-rule".to_string(),
        content: vec![ContentBlock::plain(&translation.description)],
        references: references_section(publications, locale, &entry.src),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::entities::RuleTranslation;
    use crate::schema::locale::LocaleMap;
    use crate::schema::static_data::NameTranslation;

    const EN: &str = "en-US";

    #[test]
    fn romanize_handles_subtractive_forms() {
        assert_eq!(romanize(1), "I");
        assert_eq!(romanize(4), "IV");
        assert_eq!(romanize(9), "IX");
        assert_eq!(romanize(14), "XIV");
        assert_eq!(romanize(1987), "MCMLXXXVII");
    }

    #[test]
    fn experience_level_lists_all_limits() {
        let locale = LocaleEnvironment::new(EN);
        let entry = ExperienceLevel {
            adventure_points: 1100,
            max_attribute_value: 13,
            max_skill_rating: 10,
            max_combat_technique_rating: 12,
            max_attribute_total: 98,
            max_number_of_spells_liturgical_chants: 3,
            max_number_of_unfamiliar_spells: 0,
            translations: LocaleMap::from_iter([(
                EN.into(),
                NameTranslation { name: "Experienced".to_string() },
            )]),
        };

        let rendered = render_experience_level(&entry, &locale).unwrap();
        assert_eq!(rendered.title, "Experienced");
        assert_eq!(rendered.content.len(), 7);
        assert_eq!(rendered.content[0].label.as_deref(), Some("Adventure Points"));
        assert_eq!(rendered.content[0].value, "1100");
        assert_eq!(rendered.content[6].value, "0");
    }

    #[test]
    fn focus_rule_title_carries_roman_level() {
        let locale = LocaleEnvironment::new(EN);
        let subjects: Registry<SubjectId, Subject> = [(
            SubjectId(2),
            Subject {
                translations: LocaleMap::from_iter([(
                    EN.into(),
                    NameTranslation { name: "Combat".to_string() },
                )]),
            },
        )]
        .into_iter()
        .collect();
        let publications = Registry::default();
        let deps = FocusRuleDeps { subjects: &subjects, publications: &publications };

        let entry = FocusRule {
            level: 3,
            subject: SubjectId(2),
            src: vec![],
            translations: LocaleMap::from_iter([(
                EN.into(),
                RuleTranslation {
                    name: "Hit Locations".to_string(),
                    description: "Wounds apply to body parts.".to_string(),
                },
            )]),
        };

        let rendered = render_focus_rule(&entry, &deps, &locale).unwrap();
        assert_eq!(rendered.title, "Hit Locations (III)");
        assert_eq!(rendered.subtitle.as_deref(), Some("Combat"));
        assert_eq!(rendered.content[0].label, None);
    }

    #[test]
    fn optional_rule_without_translation_is_skipped() {
        let locale = LocaleEnvironment::new("de-DE");
        let publications = Registry::default();
        let entry = OptionalRule {
            src: vec![],
            translations: LocaleMap::from_iter([(
                EN.into(),
                RuleTranslation {
                    name: "Higher Defense".to_string(),
                    description: "Doubles base defense.".to_string(),
                },
            )]),
        };

        assert!(render_optional_rule(&entry, &publications, &locale).is_none());
    }
}
