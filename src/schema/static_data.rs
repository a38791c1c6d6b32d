//! Cross-referenced static-data records. These are loaded once into a
//! [`crate::core::catalog::Catalog`] and treated as read-only afterwards.

use serde::{Deserialize, Serialize};

use super::locale::LocaleMap;
use super::parameters::TimeSpanValue;

/// A translation carrying only a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTranslation {
    pub name: String,
}

/// A translation carrying a name and its abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbbreviatedNameTranslation {
    pub name: String,
    pub abbreviation: String,
}

/// A publication (rulebook, supplement) entities can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub translations: LocaleMap<NameTranslation>,
}

/// An attribute, displayed by its abbreviation in skill checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub translations: LocaleMap<AbbreviatedNameTranslation>,
}

/// A derived characteristic such as Spirit or Toughness, used for check
/// penalty phrasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedCharacteristic {
    pub translations: LocaleMap<AbbreviatedNameTranslation>,
}

/// A magical property spells belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub translations: LocaleMap<NameTranslation>,
}

/// A predefined target category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetCategoryRecord {
    pub translations: LocaleMap<NameTranslation>,
}

/// Translation of a magical tradition, with an optional variant name used
/// for arcane spellworks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicalTraditionTranslation {
    pub name: String,
    #[serde(default)]
    pub name_for_arcane_spellworks: Option<String>,
}

/// A magical tradition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicalTradition {
    pub translations: LocaleMap<MagicalTraditionTranslation>,
}

/// Translation of a blessed tradition, with an optional short form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlessedTraditionTranslation {
    pub name: String,
    #[serde(default)]
    pub name_compressed: Option<String>,
}

/// A blessed tradition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlessedTradition {
    pub translations: LocaleMap<BlessedTraditionTranslation>,
}

/// An aspect of a blessed tradition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aspect {
    pub translations: LocaleMap<NameTranslation>,
}

/// An academy curriculum, referenced from cantrip notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    pub translations: LocaleMap<NameTranslation>,
}

/// A focus rule subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub translations: LocaleMap<NameTranslation>,
}

/// A disease, used for derived skill applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    pub translations: LocaleMap<NameTranslation>,
}

/// A region, used for derived skill applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub translations: LocaleMap<NameTranslation>,
}

/// Modification level values for fast skills. Casting time is counted in
/// actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastModificationConfig {
    pub casting_time: u32,
    pub cost: u32,
    pub range: u32,
}

/// Modification level values for slow skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlowModificationConfig {
    pub casting_time: TimeSpanValue,
    pub cost: u32,
    pub range: u32,
}

/// One skill modification level, with separate configs for fast and slow
/// skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillModificationLevel {
    pub fast: FastModificationConfig,
    pub slow: SlowModificationConfig,
}
