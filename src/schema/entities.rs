//! Entity records: one type per rules-entity kind, each carrying its
//! mechanical parameters, cross-references into static data, publication
//! references, and per-locale translation records.

use serde::{Deserialize, Serialize};

use super::ids::{AspectId, AttributeId, BlessedTraditionId, MagicalTraditionId, PropertyId, SubjectId};
use super::locale::LocaleMap;
use super::parameters::{
    ActivatableParameters, BlessingDuration, CantripDuration, CantripNote, CheckPenalty, Effect,
    FastCastingTime, ResponsiveText, SlowCastingTime, TargetCategoryEntry, TinyRange,
};
use super::source::PublicationRef;

/// How costly it is to improve a rated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImprovementCost {
    A,
    B,
    C,
    D,
}

impl ImprovementCost {
    pub fn as_str(self) -> &'static str {
        match self {
            ImprovementCost::A => "A",
            ImprovementCost::B => "B",
            ImprovementCost::C => "C",
            ImprovementCost::D => "D",
        }
    }
}

/// Translation record of a spellwork or liturgy: name plus the authored
/// ("flavor") parameter texts the computed values are compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellworkTranslation {
    pub name: String,
    pub effect: Effect,
    pub casting_time: ResponsiveText,
    pub cost: ResponsiveText,
    pub range: ResponsiveText,
    pub duration: ResponsiveText,
}

/// The magical traditions a spellwork belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Traditions {
    /// Usable by all magical traditions.
    General,
    /// Usable by the listed traditions only.
    Specific(Vec<MagicalTraditionId>),
}

/// A spell or ritual. `C` is the casting time schedule: fast for spells,
/// slow for rituals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spellwork<C> {
    pub check: Vec<AttributeId>,
    #[serde(default)]
    pub check_penalty: Option<CheckPenalty>,
    pub parameters: ActivatableParameters<C>,
    pub target: Vec<TargetCategoryEntry>,
    pub property: PropertyId,
    pub traditions: Traditions,
    pub improvement_cost: ImprovementCost,
    pub src: Vec<PublicationRef>,
    pub translations: LocaleMap<SpellworkTranslation>,
}

/// A spell (fast casting time).
pub type Spell = Spellwork<FastCastingTime>;

/// A ritual (slow casting time).
pub type Ritual = Spellwork<SlowCastingTime>;

/// Translation record of a cantrip or blessing; all parameter texts are
/// authored prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TinyActivatableTranslation {
    pub name: String,
    pub effect: String,
    pub range: String,
    pub duration: String,
}

/// The parameters of a cantrip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CantripParameters {
    pub range: TinyRange,
    pub duration: CantripDuration,
}

/// A cantrip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cantrip {
    pub parameters: CantripParameters,
    pub target: Vec<TargetCategoryEntry>,
    pub property: PropertyId,
    #[serde(default)]
    pub note: Option<CantripNote>,
    pub src: Vec<PublicationRef>,
    pub translations: LocaleMap<TinyActivatableTranslation>,
}

/// The parameters of a blessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlessingParameters {
    pub range: TinyRange,
    pub duration: BlessingDuration,
}

/// A blessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blessing {
    pub parameters: BlessingParameters,
    pub target: Vec<TargetCategoryEntry>,
    pub src: Vec<PublicationRef>,
    pub translations: LocaleMap<TinyActivatableTranslation>,
}

/// The blessed tradition(s) a liturgy belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillTradition {
    /// Belongs to an aspect shared by all traditions.
    GeneralAspect(AspectId),
    /// Belongs to a specific tradition, optionally narrowed to aspects.
    Tradition {
        tradition: BlessedTraditionId,
        #[serde(default)]
        aspects: Option<Vec<AspectId>>,
    },
}

/// A liturgical chant or ceremony. `C` is the casting time schedule: fast
/// for chants, slow for ceremonies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liturgy<C> {
    pub check: Vec<AttributeId>,
    #[serde(default)]
    pub check_penalty: Option<CheckPenalty>,
    pub parameters: ActivatableParameters<C>,
    pub target: Vec<TargetCategoryEntry>,
    pub traditions: Vec<SkillTradition>,
    pub improvement_cost: ImprovementCost,
    pub src: Vec<PublicationRef>,
    pub translations: LocaleMap<SpellworkTranslation>,
}

/// A liturgical chant (fast).
pub type LiturgicalChant = Liturgy<FastCastingTime>;

/// A ceremony (slow).
pub type Ceremony = Liturgy<SlowCastingTime>;

/// An explicit skill application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub translations: LocaleMap<super::static_data::NameTranslation>,
}

/// The static-data table a derived application list is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DerivedApplications {
    BlessedTraditions,
    Diseases,
    Regions,
}

/// The applications of a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillApplications {
    Derived(DerivedApplications),
    Explicit(Vec<Application>),
}

/// Whether encumbrance applies to a skill's checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encumbrance {
    True,
    False,
    Maybe,
}

/// Translation record of a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTranslation {
    pub name: String,
    #[serde(default)]
    pub encumbrance_description: Option<String>,
    #[serde(default)]
    pub tools: Option<String>,
    pub quality: String,
    pub failed: String,
    pub critical: String,
    pub botch: String,
}

/// A mundane skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub check: Vec<AttributeId>,
    pub applications: SkillApplications,
    pub encumbrance: Encumbrance,
    pub improvement_cost: ImprovementCost,
    pub translations: LocaleMap<SkillTranslation>,
}

/// Translation record of a combat technique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatTechniqueTranslation {
    pub name: String,
    #[serde(default)]
    pub special: Option<String>,
}

/// A close or ranged combat technique; the renderer decides the flavor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatTechnique {
    pub primary_attribute: Vec<AttributeId>,
    pub improvement_cost: ImprovementCost,
    pub src: Vec<PublicationRef>,
    pub translations: LocaleMap<CombatTechniqueTranslation>,
}

/// An experience level with its character creation limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceLevel {
    pub adventure_points: u32,
    pub max_attribute_value: u32,
    pub max_skill_rating: u32,
    pub max_combat_technique_rating: u32,
    pub max_attribute_total: u32,
    pub max_number_of_spells_liturgical_chants: u32,
    pub max_number_of_unfamiliar_spells: u32,
    pub translations: LocaleMap<super::static_data::NameTranslation>,
}

/// Translation record of a focus or optional rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTranslation {
    pub name: String,
    pub description: String,
}

/// A focus rule, leveled and grouped by subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusRule {
    pub level: u32,
    pub subject: SubjectId,
    pub src: Vec<PublicationRef>,
    pub translations: LocaleMap<RuleTranslation>,
}

/// An optional rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalRule {
    pub src: Vec<PublicationRef>,
    pub translations: LocaleMap<RuleTranslation>,
}
