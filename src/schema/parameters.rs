//! Tagged unions describing the rules parameters of activatable skills:
//! casting time, cost, duration, range, target category, and the
//! check-result-based values they share.
//!
//! Every union here is closed; the dispatchers in [`crate::core`] match
//! exhaustively, so a data shape the renderer does not know cannot get past
//! deserialization.

use serde::{Deserialize, Serialize};

use super::ids::{CurriculumId, MagicalTraditionId, SkillModificationLevelId, TargetCategoryId};
use super::locale::LocaleMap;

/// A value with two phrasings: verbose and abbreviated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiveText {
    pub full: String,
    pub compressed: String,
}

/// A responsive text whose compressed form may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiveTextOptional {
    pub full: String,
    #[serde(default)]
    pub compressed: Option<String>,
}

/// Translator-supplied adjustments to a computed parameter text.
///
/// `replacement` substitutes the whole text (`$1` is replaced by the
/// computed value); `note` is appended in parentheses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextOverrides {
    #[serde(default)]
    pub replacement: Option<ResponsiveText>,
    #[serde(default)]
    pub note: Option<ResponsiveTextOptional>,
}

/// A quantity with a time span unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpanValue {
    pub unit: TimeSpanUnit,
    pub value: u32,
}

/// Units for durations, casting times, and cost intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSpanUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
    Centuries,
    Actions,
    CombatRounds,
    SeductionActions,
    Rounds,
}

/// Units for ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Steps,
    Miles,
}

/// The base value a check-result-based parameter scales with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckResultValue {
    QualityLevels,
    SkillPoints,
}

/// The operation of a check-result modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckResultArithmetic {
    Divide,
    Multiply,
}

/// An arithmetic adjustment to a check-result-based value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResultModifier {
    pub arithmetic: CheckResultArithmetic,
    pub value: u32,
}

/// A parameter value derived from the check result (quality levels or
/// skill points), optionally scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResultBased {
    pub base: CheckResultValue,
    #[serde(default)]
    pub modifier: Option<CheckResultModifier>,
}

/// The penalty applied to a skill check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckPenalty {
    Spirit,
    HalfOfSpirit,
    Toughness,
    HigherOfSpiritAndToughness,
    SummoningDifficulty,
    CreationDifficulty,
}

// --- Casting time ---

/// A casting time that starts at a skill modification level and may be
/// adjusted by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifiableCastingTime {
    pub initial_modification_level: SkillModificationLevelId,
}

/// The casting time of an activatable skill. `N` is the non-modifiable
/// shape, which differs between fast and slow skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastingTime<N> {
    Modifiable(ModifiableCastingTime),
    NonModifiable(N),
}

/// The non-modifiable casting time of a fast skill, counted in actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastNonModifiableCastingTime {
    pub actions: u32,
}

/// A casting time schedule: the default casting time, an alternative
/// casting time during lovemaking, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastingTimeSchedule<N> {
    #[serde(default = "Option::default")]
    pub default: Option<CastingTime<N>>,
    #[serde(default)]
    pub during_lovemaking: Option<TimeSpanValue>,
}

/// Casting time of a fast activatable skill (spells, liturgical chants).
pub type FastCastingTime = CastingTimeSchedule<FastNonModifiableCastingTime>;

/// Casting time of a slow activatable skill (rituals, ceremonies).
pub type SlowCastingTime = CastingTimeSchedule<TimeSpanValue>;

// --- Cost ---

/// The name of the thing a per-countable cost is counted by, e.g. "per
/// person" / "/person".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountableName {
    pub countable: ResponsiveText,
}

/// A cost component paid once per countable entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostPerCountable {
    #[serde(default)]
    pub minimum_total: Option<u32>,
    pub translations: LocaleMap<CountableName>,
}

/// A cost that starts at a skill modification level and may be adjusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifiableOneTimeCost {
    pub initial_modification_level: SkillModificationLevelId,
    #[serde(default)]
    pub translations: LocaleMap<TextOverrides>,
}

/// A fixed one-time cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonModifiableOneTimeCost {
    pub value: u32,
    #[serde(default)]
    pub is_minimum: bool,
    #[serde(default)]
    pub permanent_value: Option<u32>,
    #[serde(default)]
    pub per: Option<CostPerCountable>,
    #[serde(default)]
    pub translations: LocaleMap<TextOverrides>,
}

/// A textual description for a one-time cost that cannot be expressed as a
/// number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndefiniteDescription {
    pub description: ResponsiveText,
}

/// A one-time cost without a defined numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndefiniteOneTimeCost {
    pub translations: LocaleMap<IndefiniteDescription>,
}

/// A single one-time cost component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SingleOneTimeCost {
    Modifiable(ModifiableOneTimeCost),
    NonModifiable(NonModifiableOneTimeCost),
    Indefinite(IndefiniteOneTimeCost),
}

/// The label of one cost map option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostMapOptionLabel {
    pub label: String,
}

/// One selectable option in a cost map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostMapOption {
    pub value: u32,
    #[serde(default)]
    pub permanent_value: Option<u32>,
    pub translations: LocaleMap<CostMapOptionLabel>,
}

/// Wording adjustments for a rendered cost map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostMapWording {
    #[serde(default)]
    pub replacement: Option<String>,
    #[serde(default)]
    pub list_prepend: Option<String>,
    #[serde(default)]
    pub list_append: Option<String>,
}

/// A cost depending on a selectable option ("4/8/12 AE for …").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostMap {
    pub options: Vec<CostMapOption>,
    #[serde(default)]
    pub translations: LocaleMap<CostMapWording>,
}

/// The cost of a one-time activatable skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OneTimeCost {
    Single(SingleOneTimeCost),
    Conjunction(Vec<SingleOneTimeCost>),
    Disjunction(Vec<SingleOneTimeCost>),
    Map(CostMap),
}

/// A sustained cost that starts at a skill modification level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifiableSustainedCost {
    pub initial_modification_level: SkillModificationLevelId,
    pub interval: TimeSpanValue,
}

/// A fixed sustained cost paid per interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonModifiableSustainedCost {
    pub value: u32,
    #[serde(default)]
    pub is_minimum: bool,
    #[serde(default)]
    pub per: Option<CostPerCountable>,
    pub interval: TimeSpanValue,
}

/// The cost of a sustained activatable skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SustainedCost {
    Modifiable(ModifiableSustainedCost),
    NonModifiable(NonModifiableSustainedCost),
}

// --- Duration ---

/// A duration that ends immediately, possibly after a short maximum span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmediateDuration {
    #[serde(default)]
    pub maximum: Option<TimeSpanValue>,
    #[serde(default)]
    pub translations: LocaleMap<TextOverrides>,
}

/// A permanent duration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermanentDuration {
    #[serde(default)]
    pub translations: LocaleMap<TextOverrides>,
}

/// A fixed duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDuration {
    pub unit: TimeSpanUnit,
    pub value: u32,
    #[serde(default)]
    pub is_maximum: bool,
    #[serde(default)]
    pub translations: LocaleMap<TextOverrides>,
}

/// A duration scaling with the check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResultBasedDuration {
    pub check_result: CheckResultBased,
    pub unit: TimeSpanUnit,
    #[serde(default)]
    pub is_maximum: bool,
}

/// A duration that only a prose description can capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndefiniteDuration {
    pub translations: LocaleMap<IndefiniteDescription>,
}

/// The duration of a one-time activatable skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationForOneTime {
    Immediate(ImmediateDuration),
    Permanent(PermanentDuration),
    Fixed(FixedDuration),
    CheckResultBased(CheckResultBasedDuration),
    Indefinite(IndefiniteDuration),
}

/// The maximum duration a sustained skill can be kept up. Absence means
/// it is sustained without limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationForSustained {
    pub maximum: TimeSpanValue,
}

/// The duration of a cantrip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CantripDuration {
    Immediate(ImmediateDuration),
    Fixed(FixedDuration),
    Indefinite(IndefiniteDuration),
    DuringLovemaking(TimeSpanValue),
}

/// The duration of a blessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlessingDuration {
    Immediate(ImmediateDuration),
    Fixed(FixedDuration),
    Indefinite(IndefiniteDuration),
}

// --- Range ---

/// A range that starts at a skill modification level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifiableRange {
    pub initial_modification_level: SkillModificationLevelId,
}

/// A fixed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedRange {
    pub unit: LengthUnit,
    pub value: u32,
}

/// A range scaling with the check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResultBasedRange {
    pub check_result: CheckResultBased,
    pub unit: LengthUnit,
    #[serde(default)]
    pub is_maximum: bool,
    #[serde(default)]
    pub is_radius: bool,
}

/// The range value of an activatable skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeValue {
    Modifiable(ModifiableRange),
    Sight,
    #[serde(rename = "Self")]
    Caster,
    Global,
    Touch,
    Fixed(FixedRange),
    CheckResultBased(CheckResultBasedRange),
}

/// The range of an activatable skill, with optional wording overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub value: RangeValue,
    #[serde(default)]
    pub translations: LocaleMap<TextOverrides>,
}

/// The reduced range set of cantrips and blessings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TinyRange {
    #[serde(rename = "Self")]
    Caster,
    Touch,
    Fixed(FixedRange),
}

// --- Target category ---

/// An optional note attached to a target category entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TargetCategoryNote {
    #[serde(default)]
    pub note: Option<String>,
}

/// What an activatable skill can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetCategoryIdentifier {
    #[serde(rename = "Self")]
    Caster,
    Zone,
    LiturgicalChantsAndCeremonies,
    Cantrips,
    Predefined(TargetCategoryId),
}

/// One entry of an entity's target category list. An empty list means
/// "all" targets are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetCategoryEntry {
    pub id: TargetCategoryIdentifier,
    #[serde(default)]
    pub translations: LocaleMap<TargetCategoryNote>,
}

// --- Effect ---

/// An effect text valid regardless of quality levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainEffect {
    pub text: String,
}

/// An effect with per-quality-level paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityLevelEffect {
    pub text_before: String,
    pub quality_levels: Vec<String>,
    #[serde(default)]
    pub text_after: Option<String>,
}

/// The effect text of an activatable skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Plain(PlainEffect),
    ForEachQualityLevel(QualityLevelEffect),
    ForEachTwoQualityLevels(QualityLevelEffect),
}

// --- Performance parameter bundles ---

/// All rules parameters of a one-time activatable skill. `C` is the
/// casting time schedule (fast or slow).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeParameters<C> {
    pub casting_time: C,
    pub cost: OneTimeCost,
    pub range: Range,
    pub duration: DurationForOneTime,
}

/// All rules parameters of a sustained activatable skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SustainedParameters<C> {
    pub casting_time: C,
    pub cost: SustainedCost,
    pub range: Range,
    #[serde(default)]
    pub duration: Option<DurationForSustained>,
}

/// The performance parameters of an activatable skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivatableParameters<C> {
    OneTime(OneTimeParameters<C>),
    Sustained(SustainedParameters<C>),
}

// --- Cantrip notes ---

/// An optional note attached to a tradition reference in a cantrip note.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraditionNote {
    #[serde(default)]
    pub note: Option<String>,
}

/// A tradition reference inside a cantrip note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraditionNoteRef {
    pub id: MagicalTraditionId,
    #[serde(default)]
    pub translations: LocaleMap<TraditionNote>,
}

/// An academy or tradition a cantrip is commonly taught by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademyOrTradition {
    Academy(CurriculumId),
    Tradition(TraditionNoteRef),
}

/// A note listing where a cantrip is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CantripNote {
    /// Commonly taught by the listed academies and traditions.
    Common { list: Vec<AcademyOrTradition> },
    /// Known exclusively to the listed traditions.
    Exclusive { traditions: Vec<TraditionNoteRef> },
}
