//! Entity kinds and the wording that depends on them: energy pools, speed
//! dispatch for skill modification levels, and the suffix explaining that a
//! fixed parameter cannot be modified.

use crate::core::locale::LocaleEnvironment;
use crate::core::responsive::{responsive, ResponsiveTextSize};
use crate::schema::static_data::{
    FastModificationConfig, SkillModificationLevel, SlowModificationConfig,
};

/// The kind of activatable entity a parameter text is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Spell,
    Ritual,
    LiturgicalChant,
    Ceremony,
    Cantrip,
    Blessing,
}

/// The speed class of an activatable skill. It selects which half of a
/// skill modification level applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Fast,
    Slow,
}

/// The parameters a player may modify via skill modification levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifiableParameter {
    CastingTime,
    Cost,
    Range,
}

/// Projects a value out of a skill modification level depending on speed.
pub fn modifiable_by_speed<T>(
    fast: impl FnOnce(&FastModificationConfig) -> T,
    slow: impl FnOnce(&SlowModificationConfig) -> T,
    speed: Speed,
    level: &SkillModificationLevel,
) -> T {
    match speed {
        Speed::Fast => fast(&level.fast),
        Speed::Slow => slow(&level.slow),
    }
}

/// The suffix appended to a non-modifiable parameter text. Spellworks and
/// liturgies carry an explanation; cantrips and blessings are never
/// modifiable, so no suffix applies.
pub fn non_modifiable_suffix(
    locale: &LocaleEnvironment,
    kind: EntityKind,
    param: ModifiableParameter,
    size: ResponsiveTextSize,
) -> String {
    responsive(
        size,
        || {
            let key = match (kind, param) {
                (EntityKind::Spell, ModifiableParameter::CastingTime) => {
                    " (you cannot use a modification on this spell’s casting time)"
                }
                (EntityKind::Spell, ModifiableParameter::Cost) => {
                    " (you cannot use a modification on this spell’s cost)"
                }
                (EntityKind::Spell, ModifiableParameter::Range) => {
                    " (you cannot use a modification on this spell’s range)"
                }
                (EntityKind::Ritual, ModifiableParameter::CastingTime) => {
                    " (you cannot use a modification on this ritual’s ritual time)"
                }
                (EntityKind::Ritual, ModifiableParameter::Cost) => {
                    " (you cannot use a modification on this ritual’s cost)"
                }
                (EntityKind::Ritual, ModifiableParameter::Range) => {
                    " (you cannot use a modification on this ritual’s range)"
                }
                (EntityKind::LiturgicalChant, ModifiableParameter::CastingTime) => {
                    " (you cannot use a modification on this chant’s liturgical time)"
                }
                (EntityKind::LiturgicalChant, ModifiableParameter::Cost) => {
                    " (you cannot use a modification on this chant’s cost)"
                }
                (EntityKind::LiturgicalChant, ModifiableParameter::Range) => {
                    " (you cannot use a modification on this chant’s range)"
                }
                (EntityKind::Ceremony, ModifiableParameter::CastingTime) => {
                    " (you cannot use a modification on this ceremony’s ceremonial time)"
                }
                (EntityKind::Ceremony, ModifiableParameter::Cost) => {
                    " (you cannot use a modification on this ceremony’s cost)"
                }
                (EntityKind::Ceremony, ModifiableParameter::Range) => {
                    " (you cannot use a modification on this ceremony’s range)"
                }
                (EntityKind::Cantrip | EntityKind::Blessing, _) => return String::new(),
            };
            locale.translate(key)
        },
        || match kind {
            EntityKind::Spell
            | EntityKind::Ritual
            | EntityKind::LiturgicalChant
            | EntityKind::Ceremony => locale.translate(" (cannot modify)"),
            EntityKind::Cantrip | EntityKind::Blessing => String::new(),
        },
    )
}
