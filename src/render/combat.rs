//! Renderers for close and ranged combat techniques.

use crate::core::catalog::{Catalog, Registry};
use crate::core::entry::{collect_content, ContentBlock, LibraryEntry};
use crate::core::locale::LocaleEnvironment;
use crate::render::activatable::{improvement_cost_section, references_section};
use crate::schema::entities::CombatTechnique;
use crate::schema::ids::{AttributeId, PublicationId};
use crate::schema::static_data::{Attribute, Publication};

/// Cross-reference lookups needed to render combat techniques.
#[derive(Debug, Clone, Copy)]
pub struct CombatTechniqueDeps<'a> {
    pub attributes: &'a Registry<AttributeId, Attribute>,
    pub publications: &'a Registry<PublicationId, Publication>,
}

impl<'a> CombatTechniqueDeps<'a> {
    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        CombatTechniqueDeps {
            attributes: &catalog.attributes,
            publications: &catalog.publications,
        }
    }
}

fn primary_attribute_text(
    attributes: &Registry<AttributeId, Attribute>,
    locale: &LocaleEnvironment,
    primary: &[AttributeId],
) -> String {
    primary
        .iter()
        .map(|id| {
            attributes
                .get(id)
                .and_then(|attribute| locale.translate_map(&attribute.translations))
                .map(|t| t.name.as_str())
                .unwrap_or("??")
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn render_combat_technique(
    entry: &CombatTechnique,
    deps: &CombatTechniqueDeps<'_>,
    locale: &LocaleEnvironment,
    class_name: &str,
) -> Option<LibraryEntry> {
    let translation = locale.translate_map(&entry.translations)?;

    let content = collect_content([
        translation
            .special
            .as_ref()
            .map(|special| ContentBlock::labeled(locale.translate("Special"), special)),
        Some(ContentBlock::labeled(
            locale.translate("Primary Attribute"),
            primary_attribute_text(deps.attributes, locale, &entry.primary_attribute),
        )),
        Some(improvement_cost_section(locale, entry.improvement_cost)),
    ]);

    Some(LibraryEntry {
        title: translation.name.clone(),
        subtitle: None,
        class_name: class_name.to_string(),
        content,
        references: references_section(deps.publications, locale, &entry.src),
    })
}

/// Renders the library entry of a close combat technique.
pub fn render_close_combat_technique(
    entry: &CombatTechnique,
    deps: &CombatTechniqueDeps<'_>,
    locale: &LocaleEnvironment,
) -> Option<LibraryEntry> {
    render_combat_technique(entry, deps, locale, "combat-technique close-combat-technique")
}

/// Renders the library entry of a ranged combat technique.
pub fn render_ranged_combat_technique(
    entry: &CombatTechnique,
    deps: &CombatTechniqueDeps<'_>,
    locale: &LocaleEnvironment,
) -> Option<LibraryEntry> {
    render_combat_technique(entry, deps, locale, "combat-technique ranged-combat-technique")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::entities::{CombatTechniqueTranslation, ImprovementCost};
    use crate::schema::locale::LocaleMap;
    use crate::schema::static_data::AbbreviatedNameTranslation;

    const EN: &str = "en-US";

    fn attributes() -> Registry<AttributeId, Attribute> {
        [
            (
                AttributeId(6),
                Attribute {
                    translations: LocaleMap::from_iter([(
                        EN.into(),
                        AbbreviatedNameTranslation {
                            name: "Agility".to_string(),
                            abbreviation: "AGI".to_string(),
                        },
                    )]),
                },
            ),
            (
                AttributeId(8),
                Attribute {
                    translations: LocaleMap::from_iter([(
                        EN.into(),
                        AbbreviatedNameTranslation {
                            name: "Strength".to_string(),
                            abbreviation: "STR".to_string(),
                        },
                    )]),
                },
            ),
        ]
        .into_iter()
        .collect()
    }

    fn technique(primary: Vec<AttributeId>) -> CombatTechnique {
        CombatTechnique {
            primary_attribute: primary,
            improvement_cost: ImprovementCost::B,
            src: vec![],
            translations: LocaleMap::from_iter([(
                EN.into(),
                CombatTechniqueTranslation {
                    name: "Swords".to_string(),
                    special: Some("Parry is possible.".to_string()),
                },
            )]),
        }
    }

    #[test]
    fn joins_primary_attribute_names() {
        let attributes = attributes();
        let publications = Registry::default();
        let deps = CombatTechniqueDeps { attributes: &attributes, publications: &publications };
        let locale = LocaleEnvironment::new(EN);

        let entry = render_close_combat_technique(
            &technique(vec![AttributeId(6), AttributeId(8)]),
            &deps,
            &locale,
        )
        .unwrap();

        assert_eq!(entry.class_name, "combat-technique close-combat-technique");
        assert_eq!(entry.content[0].label.as_deref(), Some("Special"));
        assert_eq!(entry.content[1].value, "Agility/Strength");
        assert_eq!(entry.content[2].value, "B");
    }

    #[test]
    fn unknown_primary_attribute_becomes_placeholder() {
        let attributes = attributes();
        let publications = Registry::default();
        let deps = CombatTechniqueDeps { attributes: &attributes, publications: &publications };
        let locale = LocaleEnvironment::new(EN);

        let entry =
            render_ranged_combat_technique(&technique(vec![AttributeId(99)]), &deps, &locale)
                .unwrap();

        assert_eq!(entry.class_name, "combat-technique ranged-combat-technique");
        assert_eq!(entry.content[1].value, "??");
    }
}
