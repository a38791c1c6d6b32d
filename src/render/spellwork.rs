//! Renderers for spells, rituals, and cantrips.

use crate::core::catalog::{Catalog, Registry};
use crate::core::check::{check_section, PenaltyCharacteristics};
use crate::core::duration::cantrip_duration;
use crate::core::entry::{collect_content, emphasize_if_differs, parens_if, ContentBlock, LibraryEntry};
use crate::core::kind::EntityKind;
use crate::core::locale::LocaleEnvironment;
use crate::core::range::tiny_range_text;
use crate::core::responsive::{responsive_text, ResponsiveTextSize};
use crate::core::target::target_category_section;
use crate::render::activatable::{
    effect_sections, fast_parameter_texts, improvement_cost_section, references_section,
    slow_parameter_texts, PerformanceTexts,
};
use crate::schema::entities::{Cantrip, Ritual, Spell, Spellwork, Traditions};
use crate::schema::ids::{
    AttributeId, CurriculumId, MagicalTraditionId, PropertyId, PublicationId,
    SkillModificationLevelId, TargetCategoryId,
};
use crate::schema::parameters::{AcademyOrTradition, CantripNote, TraditionNoteRef};
use crate::schema::static_data::{
    Attribute, Curriculum, DerivedCharacteristic, MagicalTradition, Property, Publication,
    SkillModificationLevel, TargetCategoryRecord,
};

/// Cross-reference lookups needed to render spells and rituals.
#[derive(Debug, Clone, Copy)]
pub struct SpellworkDeps<'a> {
    pub attributes: &'a Registry<AttributeId, Attribute>,
    pub skill_modification_levels: &'a Registry<SkillModificationLevelId, SkillModificationLevel>,
    pub target_categories: &'a Registry<TargetCategoryId, TargetCategoryRecord>,
    pub properties: &'a Registry<PropertyId, Property>,
    pub magical_traditions: &'a Registry<MagicalTraditionId, MagicalTradition>,
    pub publications: &'a Registry<PublicationId, Publication>,
    pub spirit: Option<&'a DerivedCharacteristic>,
    pub toughness: Option<&'a DerivedCharacteristic>,
}

impl<'a> SpellworkDeps<'a> {
    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        SpellworkDeps {
            attributes: &catalog.attributes,
            skill_modification_levels: &catalog.skill_modification_levels,
            target_categories: &catalog.target_categories,
            properties: &catalog.properties,
            magical_traditions: &catalog.magical_traditions,
            publications: &catalog.publications,
            spirit: catalog.spirit.as_ref(),
            toughness: catalog.toughness.as_ref(),
        }
    }
}

fn property_section(
    properties: &Registry<PropertyId, Property>,
    locale: &LocaleEnvironment,
    property: PropertyId,
) -> ContentBlock {
    let name = properties
        .get(&property)
        .and_then(|record| locale.translate_map(&record.translations))
        .map(|t| t.name.clone())
        .unwrap_or_default();
    ContentBlock::labeled(locale.translate("Property"), name)
}

fn traditions_section(
    magical_traditions: &Registry<MagicalTraditionId, MagicalTradition>,
    locale: &LocaleEnvironment,
    traditions: &Traditions,
) -> ContentBlock {
    let text = match traditions {
        Traditions::General => locale.translate("General"),
        Traditions::Specific(ids) => {
            let mut names: Vec<&str> = ids
                .iter()
                .filter_map(|id| {
                    let translation = locale.translate_map(
                        &magical_traditions.get(id)?.translations,
                    )?;
                    Some(
                        translation
                            .name_for_arcane_spellworks
                            .as_deref()
                            .unwrap_or(&translation.name),
                    )
                })
                .collect();
            names.sort_by(|a, b| locale.compare(a, b));
            names.join(", ")
        }
    };
    ContentBlock::labeled(locale.translate("Traditions"), text)
}

fn render_spellwork<C>(
    entry: &Spellwork<C>,
    deps: &SpellworkDeps<'_>,
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    class_name: &str,
    casting_time_label: &str,
    texts: PerformanceTexts,
) -> Option<LibraryEntry> {
    let translation = locale.translate_map(&entry.translations)?;

    let check = check_section(
        deps.attributes,
        locale,
        &entry.check,
        entry.check_penalty,
        size,
        &PenaltyCharacteristics { spirit: deps.spirit, toughness: deps.toughness },
    );

    let mut content = vec![check];
    content.extend(effect_sections(locale, &translation.effect));
    content.push(ContentBlock::labeled(
        locale.translate(casting_time_label),
        emphasize_if_differs(
            texts.casting_time,
            responsive_text(&translation.casting_time, size),
        ),
    ));
    content.push(ContentBlock::labeled(
        locale.translate("AE Cost"),
        emphasize_if_differs(texts.cost, responsive_text(&translation.cost, size)),
    ));
    content.push(ContentBlock::labeled(
        locale.translate("Range"),
        emphasize_if_differs(texts.range, responsive_text(&translation.range, size)),
    ));
    content.push(ContentBlock::labeled(
        locale.translate("Duration"),
        emphasize_if_differs(texts.duration, responsive_text(&translation.duration, size)),
    ));
    content.push(target_category_section(deps.target_categories, locale, &entry.target));
    content.push(property_section(deps.properties, locale, entry.property));
    content.push(traditions_section(deps.magical_traditions, locale, &entry.traditions));
    content.push(improvement_cost_section(locale, entry.improvement_cost));

    Some(LibraryEntry {
        title: translation.name.clone(),
        subtitle: None,
        class_name: class_name.to_string(),
        content,
        references: references_section(deps.publications, locale, &entry.src),
    })
}

/// Renders the library entry of a spell.
pub fn render_spell(
    entry: &Spell,
    deps: &SpellworkDeps<'_>,
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
) -> Option<LibraryEntry> {
    let texts = fast_parameter_texts(
        deps.skill_modification_levels,
        locale,
        EntityKind::Spell,
        size,
        &entry.parameters,
    );
    render_spellwork(entry, deps, locale, size, "spell", "Casting Time", texts)
}

/// Renders the library entry of a ritual.
pub fn render_ritual(
    entry: &Ritual,
    deps: &SpellworkDeps<'_>,
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
) -> Option<LibraryEntry> {
    let texts = slow_parameter_texts(
        deps.skill_modification_levels,
        locale,
        EntityKind::Ritual,
        size,
        &entry.parameters,
    );
    render_spellwork(entry, deps, locale, size, "ritual", "Ritual Time", texts)
}

/// Cross-reference lookups needed to render cantrips.
#[derive(Debug, Clone, Copy)]
pub struct CantripDeps<'a> {
    pub target_categories: &'a Registry<TargetCategoryId, TargetCategoryRecord>,
    pub properties: &'a Registry<PropertyId, Property>,
    pub magical_traditions: &'a Registry<MagicalTraditionId, MagicalTradition>,
    pub curricula: &'a Registry<CurriculumId, Curriculum>,
    pub publications: &'a Registry<PublicationId, Publication>,
}

impl<'a> CantripDeps<'a> {
    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        CantripDeps {
            target_categories: &catalog.target_categories,
            properties: &catalog.properties,
            magical_traditions: &catalog.magical_traditions,
            curricula: &catalog.curricula,
            publications: &catalog.publications,
        }
    }
}

fn arcane_tradition_name<'a>(
    magical_traditions: &'a Registry<MagicalTraditionId, MagicalTradition>,
    locale: &LocaleEnvironment,
    reference: &TraditionNoteRef,
) -> Option<&'a str> {
    let translation =
        locale.translate_map(&magical_traditions.get(&reference.id)?.translations)?;
    Some(
        translation
            .name_for_arcane_spellworks
            .as_deref()
            .unwrap_or(&translation.name),
    )
}

fn cantrip_note_section(
    deps: &CantripDeps<'_>,
    locale: &LocaleEnvironment,
    note: &CantripNote,
) -> ContentBlock {
    let value = match note {
        CantripNote::Common { list } => {
            let mut names: Vec<String> = list
                .iter()
                .filter_map(|entry| match entry {
                    AcademyOrTradition::Academy(id) => Some(
                        locale
                            .translate_map(&deps.curricula.get(id)?.translations)?
                            .name
                            .clone(),
                    ),
                    AcademyOrTradition::Tradition(reference) => {
                        let name =
                            arcane_tradition_name(deps.magical_traditions, locale, reference)?;
                        let note = locale
                            .translate_map(&reference.translations)
                            .and_then(|t| t.note.as_deref());
                        Some(format!("{name}{}", parens_if(note)))
                    }
                })
                .collect();
            names.sort_by(|a, b| locale.compare(a, b));
            names.join(", ")
        }
        CantripNote::Exclusive { traditions } => {
            let mut names: Vec<&str> = traditions
                .iter()
                .filter_map(|reference| {
                    arcane_tradition_name(deps.magical_traditions, locale, reference)
                })
                .collect();
            names.sort_by(|a, b| locale.compare(a, b));
            names.join(", ")
        }
    };

    ContentBlock::labeled(locale.translate("Note"), value)
}

/// Renders the library entry of a cantrip.
pub fn render_cantrip(
    entry: &Cantrip,
    deps: &CantripDeps<'_>,
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
) -> Option<LibraryEntry> {
    let translation = locale.translate_map(&entry.translations)?;

    let range = tiny_range_text(locale, size, EntityKind::Cantrip, &entry.parameters.range);
    let duration = cantrip_duration(locale, size, &entry.parameters.duration);

    let content = collect_content([
        Some(ContentBlock::labeled(locale.translate("Effect"), &translation.effect)),
        Some(ContentBlock::labeled(
            locale.translate("Range"),
            emphasize_if_differs(range, &translation.range),
        )),
        Some(ContentBlock::labeled(
            locale.translate("Duration"),
            emphasize_if_differs(duration, &translation.duration),
        )),
        Some(target_category_section(deps.target_categories, locale, &entry.target)),
        Some(property_section(deps.properties, locale, entry.property)),
        entry
            .note
            .as_ref()
            .map(|note| cantrip_note_section(deps, locale, note)),
    ]);

    Some(LibraryEntry {
        title: translation.name.clone(),
        subtitle: None,
        class_name: "cantrip".to_string(),
        content,
        references: references_section(deps.publications, locale, &entry.src),
    })
}
