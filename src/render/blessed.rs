//! Renderers for liturgical chants, ceremonies, and blessings.

use crate::core::catalog::{Catalog, Registry};
use crate::core::check::{check_section, PenaltyCharacteristics};
use crate::core::duration::blessing_duration;
use crate::core::entry::{emphasize_if_differs, ContentBlock, LibraryEntry};
use crate::core::kind::EntityKind;
use crate::core::locale::LocaleEnvironment;
use crate::core::range::tiny_range_text;
use crate::core::responsive::{responsive_text, ResponsiveTextSize};
use crate::core::target::target_category_section;
use crate::render::activatable::{
    effect_sections, fast_parameter_texts, improvement_cost_section, references_section,
    slow_parameter_texts, PerformanceTexts,
};
use crate::schema::entities::{Blessing, Ceremony, LiturgicalChant, Liturgy, SkillTradition};
use crate::schema::ids::{
    AspectId, AttributeId, BlessedTraditionId, PublicationId, SkillModificationLevelId,
    TargetCategoryId,
};
use crate::schema::static_data::{
    Aspect, Attribute, BlessedTradition, DerivedCharacteristic, Publication,
    SkillModificationLevel, TargetCategoryRecord,
};

/// Cross-reference lookups needed to render liturgical chants and
/// ceremonies.
#[derive(Debug, Clone, Copy)]
pub struct LiturgyDeps<'a> {
    pub attributes: &'a Registry<AttributeId, Attribute>,
    pub skill_modification_levels: &'a Registry<SkillModificationLevelId, SkillModificationLevel>,
    pub target_categories: &'a Registry<TargetCategoryId, TargetCategoryRecord>,
    pub blessed_traditions: &'a Registry<BlessedTraditionId, BlessedTradition>,
    pub aspects: &'a Registry<AspectId, Aspect>,
    pub publications: &'a Registry<PublicationId, Publication>,
    pub spirit: Option<&'a DerivedCharacteristic>,
    pub toughness: Option<&'a DerivedCharacteristic>,
}

impl<'a> LiturgyDeps<'a> {
    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        LiturgyDeps {
            attributes: &catalog.attributes,
            skill_modification_levels: &catalog.skill_modification_levels,
            target_categories: &catalog.target_categories,
            blessed_traditions: &catalog.blessed_traditions,
            aspects: &catalog.aspects,
            publications: &catalog.publications,
            spirit: catalog.spirit.as_ref(),
            toughness: catalog.toughness.as_ref(),
        }
    }
}

fn aspect_name<'a>(
    aspects: &'a Registry<AspectId, Aspect>,
    locale: &LocaleEnvironment,
    id: AspectId,
) -> Option<&'a str> {
    locale
        .translate_map(&aspects.get(&id)?.translations)
        .map(|t| t.name.as_str())
}

fn traditions_section(
    deps: &LiturgyDeps<'_>,
    locale: &LocaleEnvironment,
    traditions: &[SkillTradition],
) -> ContentBlock {
    let text = traditions
        .iter()
        .filter_map(|tradition| match tradition {
            SkillTradition::GeneralAspect(aspect) => {
                aspect_name(deps.aspects, locale, *aspect).map(str::to_string)
            }
            SkillTradition::Tradition { tradition, aspects } => {
                let translation = locale
                    .translate_map(&deps.blessed_traditions.get(tradition)?.translations)?;
                let name = translation
                    .name_compressed
                    .as_deref()
                    .unwrap_or(&translation.name);

                let mut aspect_names: Vec<&str> = aspects
                    .iter()
                    .flatten()
                    .filter_map(|id| aspect_name(deps.aspects, locale, *id))
                    .collect();
                aspect_names.sort_by(|a, b| locale.compare(a, b));

                if aspect_names.is_empty() {
                    Some(name.to_string())
                } else {
                    Some(format!("{name} ({})", aspect_names.join(" and ")))
                }
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    ContentBlock::labeled(locale.translate("Traditions"), text)
}

fn render_liturgy<C>(
    entry: &Liturgy<C>,
    deps: &LiturgyDeps<'_>,
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
        locale.translate("KP Cost"),
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
    content.push(traditions_section(deps, locale, &entry.traditions));
    content.push(improvement_cost_section(locale, entry.improvement_cost));

    Some(LibraryEntry {
        title: translation.name.clone(),
        subtitle: None,
        class_name: class_name.to_string(),
        content,
        references: references_section(deps.publications, locale, &entry.src),
    })
}

/// Renders the library entry of a liturgical chant.
pub fn render_liturgical_chant(
    entry: &LiturgicalChant,
    deps: &LiturgyDeps<'_>,
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
) -> Option<LibraryEntry> {
    let texts = fast_parameter_texts(
        deps.skill_modification_levels,
        locale,
        EntityKind::LiturgicalChant,
        size,
        &entry.parameters,
    );
    render_liturgy(entry, deps, locale, size, "liturgical-chant", "Liturgical Time", texts)
}

/// Renders the library entry of a ceremony.
pub fn render_ceremony(
    entry: &Ceremony,
    deps: &LiturgyDeps<'_>,
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
) -> Option<LibraryEntry> {
    let texts = slow_parameter_texts(
        deps.skill_modification_levels,
        locale,
        EntityKind::Ceremony,
        size,
        &entry.parameters,
    );
    render_liturgy(entry, deps, locale, size, "ceremony", "Ceremonial Time", texts)
}

/// Cross-reference lookups needed to render blessings.
#[derive(Debug, Clone, Copy)]
pub struct BlessingDeps<'a> {
    pub target_categories: &'a Registry<TargetCategoryId, TargetCategoryRecord>,
    pub publications: &'a Registry<PublicationId, Publication>,
}

impl<'a> BlessingDeps<'a> {
    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        BlessingDeps {
            target_categories: &catalog.target_categories,
            publications: &catalog.publications,
        }
    }
}

/// Renders the library entry of a blessing.
pub fn render_blessing(
    entry: &Blessing,
    deps: &BlessingDeps<'_>,
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
) -> Option<LibraryEntry> {
    let translation = locale.translate_map(&entry.translations)?;

    let range = tiny_range_text(locale, size, EntityKind::Blessing, &entry.parameters.range);
    let duration = blessing_duration(locale, size, &entry.parameters.duration);

    let content = vec![
        ContentBlock::labeled(locale.translate("Effect"), &translation.effect),
        ContentBlock::labeled(
            locale.translate("Range"),
            emphasize_if_differs(range, &translation.range),
        ),
        ContentBlock::labeled(
            locale.translate("Duration"),
            emphasize_if_differs(duration, &translation.duration),
        ),
        target_category_section(deps.target_categories, locale, &entry.target),
    ];

    Some(LibraryEntry {
        title: translation.name.clone(),
        subtitle: None,
        class_name: "blessing".to_string(),
        content,
        references: references_section(deps.publications, locale, &entry.src),
    })
}
