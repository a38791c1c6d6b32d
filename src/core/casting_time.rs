//! Casting time rendering for fast and slow activatable skills.

use crate::core::catalog::Registry;
use crate::core::kind::{modifiable_by_speed, non_modifiable_suffix, EntityKind, ModifiableParameter, Speed};
use crate::core::locale::LocaleEnvironment;
use crate::core::responsive::{ResponsiveTextSize, MISSING_VALUE};
use crate::core::units::format_time_span;
use crate::schema::ids::SkillModificationLevelId;
use crate::schema::parameters::{
    CastingTime, CastingTimeSchedule, FastCastingTime, FastNonModifiableCastingTime,
    ModifiableCastingTime, SlowCastingTime, TimeSpanUnit, TimeSpanValue,
};
use crate::schema::static_data::SkillModificationLevel;

type Levels = Registry<SkillModificationLevelId, SkillModificationLevel>;

fn modifiable_casting_time(
    levels: &Levels,
    locale: &LocaleEnvironment,
    speed: Speed,
    size: ResponsiveTextSize,
    value: &ModifiableCastingTime,
) -> String {
    match levels.get(&value.initial_modification_level) {
        Some(level) => modifiable_by_speed(
            |fast| format_time_span(locale, size, TimeSpanUnit::Actions, fast.casting_time),
            |slow| format_time_span(locale, size, slow.casting_time.unit, slow.casting_time.value),
            speed,
            level,
        ),
        None => MISSING_VALUE.to_string(),
    }
}

fn casting_time_text<N>(
    non_modifiable_text: impl Fn(&N) -> String,
    levels: &Levels,
    locale: &LocaleEnvironment,
    speed: Speed,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &CastingTime<N>,
) -> String {
    match value {
        CastingTime::Modifiable(modifiable) => {
            modifiable_casting_time(levels, locale, speed, size, modifiable)
        }
        CastingTime::NonModifiable(non_modifiable) => {
            non_modifiable_text(non_modifiable)
                + &non_modifiable_suffix(locale, kind, ModifiableParameter::CastingTime, size)
        }
    }
}

fn schedule_text<N>(
    non_modifiable_text: impl Fn(&N) -> String,
    levels: &Levels,
    locale: &LocaleEnvironment,
    speed: Speed,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &CastingTimeSchedule<N>,
) -> String {
    let default = value.default.as_ref().map(|casting_time| {
        casting_time_text(&non_modifiable_text, levels, locale, speed, kind, size, casting_time)
    });
    let during_lovemaking = value
        .during_lovemaking
        .map(|span| format_time_span(locale, size, span.unit, span.value));

    [default, during_lovemaking]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Renders the casting time of a fast activatable skill (spells,
/// liturgical chants). Non-modifiable fast casting times are counted in
/// actions.
pub fn fast_casting_time(
    levels: &Levels,
    locale: &LocaleEnvironment,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &FastCastingTime,
) -> String {
    schedule_text(
        |non_modifiable: &FastNonModifiableCastingTime| {
            format_time_span(locale, size, TimeSpanUnit::Actions, non_modifiable.actions)
        },
        levels,
        locale,
        Speed::Fast,
        kind,
        size,
        value,
    )
}

/// Renders the casting time of a slow activatable skill (rituals,
/// ceremonies).
pub fn slow_casting_time(
    levels: &Levels,
    locale: &LocaleEnvironment,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &SlowCastingTime,
) -> String {
    schedule_text(
        |non_modifiable: &TimeSpanValue| {
            format_time_span(locale, size, non_modifiable.unit, non_modifiable.value)
        },
        levels,
        locale,
        Speed::Slow,
        kind,
        size,
        value,
    )
}
