//! Renderer for mundane skills.

use crate::core::catalog::Registry;
use crate::core::check::{check_section, PenaltyCharacteristics};
use crate::core::entry::{collect_content, ContentBlock, LibraryEntry};
use crate::core::locale::LocaleEnvironment;
use crate::core::responsive::ResponsiveTextSize;
use crate::render::activatable::improvement_cost_section;
use crate::schema::entities::{DerivedApplications, Skill, SkillApplications};
use crate::schema::ids::{AttributeId, BlessedTraditionId, DiseaseId, RegionId};
use crate::schema::locale::LocaleMap;
use crate::schema::static_data::{
    Attribute, BlessedTradition, Disease, NameTranslation, Region,
};

/// Cross-reference lookups needed to render skills, plus the new
/// applications and uses that character options have added to the skill.
#[derive(Debug, Clone, Copy)]
pub struct SkillDeps<'a> {
    pub attributes: &'a Registry<AttributeId, Attribute>,
    pub blessed_traditions: &'a Registry<BlessedTraditionId, BlessedTradition>,
    pub diseases: &'a Registry<DiseaseId, Disease>,
    pub regions: &'a Registry<RegionId, Region>,
    /// Applications added by advantages or special abilities.
    pub new_applications: &'a [LocaleMap<NameTranslation>],
    /// Uses added by advantages or special abilities.
    pub uses: &'a [LocaleMap<NameTranslation>],
}

impl<'a> SkillDeps<'a> {
    pub fn from_catalog(
        catalog: &'a crate::core::catalog::Catalog,
        new_applications: &'a [LocaleMap<NameTranslation>],
        uses: &'a [LocaleMap<NameTranslation>],
    ) -> Self {
        SkillDeps {
            attributes: &catalog.attributes,
            blessed_traditions: &catalog.blessed_traditions,
            diseases: &catalog.diseases,
            regions: &catalog.regions,
            new_applications,
            uses,
        }
    }
}

fn sorted_names(
    locale: &LocaleEnvironment,
    names: impl Iterator<Item = String>,
) -> Vec<String> {
    let mut names: Vec<String> = names.collect();
    names.sort_by(|a, b| locale.compare(a, b));
    names
}

fn translated_names<'a>(
    locale: &LocaleEnvironment,
    translations: impl Iterator<Item = &'a LocaleMap<NameTranslation>>,
) -> Vec<String> {
    sorted_names(
        locale,
        translations.filter_map(|map| locale.translate_map(map).map(|t| t.name.clone())),
    )
}

fn applications_text(
    deps: &SkillDeps<'_>,
    locale: &LocaleEnvironment,
    applications: &SkillApplications,
) -> String {
    let names = match applications {
        SkillApplications::Derived(derived) => match derived {
            DerivedApplications::BlessedTraditions => sorted_names(
                locale,
                deps.blessed_traditions.values().filter_map(|tradition| {
                    locale
                        .translate_map(&tradition.translations)
                        .map(|t| t.name.clone())
                }),
            ),
            DerivedApplications::Diseases => translated_names(
                locale,
                deps.diseases.values().map(|disease| &disease.translations),
            ),
            DerivedApplications::Regions => translated_names(
                locale,
                deps.regions.values().map(|region| &region.translations),
            ),
        },
        SkillApplications::Explicit(applications) => translated_names(
            locale,
            applications.iter().map(|application| &application.translations),
        ),
    };
    names.join(", ")
}

/// Renders the library entry of a skill.
pub fn render_skill(
    entry: &Skill,
    deps: &SkillDeps<'_>,
    locale: &LocaleEnvironment,
) -> Option<LibraryEntry> {
    let translation = locale.translate_map(&entry.translations)?;

    let new_applications =
        translated_names(locale, deps.new_applications.iter());
    let uses = translated_names(locale, deps.uses.iter());

    let encumbrance = match entry.encumbrance {
        crate::schema::entities::Encumbrance::True => locale.translate("Yes"),
        crate::schema::entities::Encumbrance::False => locale.translate("No"),
        crate::schema::entities::Encumbrance::Maybe => translation
            .encumbrance_description
            .clone()
            .unwrap_or_else(|| locale.translate("Maybe")),
    };

    let content = collect_content([
        (!new_applications.is_empty()).then(|| {
            ContentBlock::labeled(locale.translate("New Applications"), new_applications.join(", "))
        }),
        (!uses.is_empty())
            .then(|| ContentBlock::labeled(locale.translate("Uses"), uses.join(", "))),
        Some(check_section(
            deps.attributes,
            locale,
            &entry.check,
            None,
            ResponsiveTextSize::Full,
            &PenaltyCharacteristics::default(),
        )),
        Some(ContentBlock::labeled(
            locale.translate("Applications"),
            applications_text(deps, locale, &entry.applications),
        )),
        Some(ContentBlock::labeled(locale.translate("Encumbrance"), encumbrance)),
        translation
            .tools
            .as_ref()
            .map(|tools| ContentBlock::labeled(locale.translate("Tools"), tools)),
        Some(ContentBlock::labeled(locale.translate("Quality"), &translation.quality)),
        Some(ContentBlock::labeled(locale.translate("Failed Check"), &translation.failed)),
        Some(ContentBlock::labeled(locale.translate("Critical Success"), &translation.critical)),
        Some(ContentBlock::labeled(locale.translate("Botch"), &translation.botch)),
        Some(improvement_cost_section(locale, entry.improvement_cost)),
    ]);

    Some(LibraryEntry {
        title: translation.name.clone(),
        subtitle: None,
        class_name: "skill".to_string(),
        content,
        references: None,
    })
}
