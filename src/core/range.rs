//! Range rendering for activatable skills, cantrips, and blessings.

use crate::core::catalog::Registry;
use crate::core::check::check_result_based_text;
use crate::core::entry::wrap_if_maximum;
use crate::core::kind::{modifiable_by_speed, non_modifiable_suffix, EntityKind, ModifiableParameter, Speed};
use crate::core::locale::LocaleEnvironment;
use crate::core::responsive::{
    append_note_if_requested, replace_text_if_requested, ResponsiveTextSize, MISSING_VALUE,
};
use crate::core::units::format_length;
use crate::schema::ids::SkillModificationLevelId;
use crate::schema::parameters::{
    CheckResultBasedRange, FixedRange, LengthUnit, ModifiableRange, Range, RangeValue, TinyRange,
};
use crate::schema::static_data::SkillModificationLevel;

type Levels = Registry<SkillModificationLevelId, SkillModificationLevel>;

fn modifiable_range(
    levels: &Levels,
    locale: &LocaleEnvironment,
    speed: Speed,
    size: ResponsiveTextSize,
    value: &ModifiableRange,
) -> String {
    match levels.get(&value.initial_modification_level) {
        Some(level) => {
            let range = modifiable_by_speed(|fast| fast.range, |slow| slow.range, speed, level);
            // The lowest modification level has a range of one yard, which
            // reads as touch range.
            if range == 1 {
                locale.translate("Touch")
            } else {
                format_length(locale, size, LengthUnit::Steps, range)
            }
        }
        None => MISSING_VALUE.to_string(),
    }
}

fn touch_range(locale: &LocaleEnvironment, kind: EntityKind, size: ResponsiveTextSize) -> String {
    locale.translate("Touch")
        + &non_modifiable_suffix(locale, kind, ModifiableParameter::Range, size)
}

fn fixed_range(
    locale: &LocaleEnvironment,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &FixedRange,
) -> String {
    format_length(locale, size, value.unit, value.value)
        + &non_modifiable_suffix(locale, kind, ModifiableParameter::Range, size)
}

fn check_result_based_range(
    locale: &LocaleEnvironment,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &CheckResultBasedRange,
) -> String {
    let range = format_length(
        locale,
        size,
        value.unit,
        check_result_based_text(locale, &value.check_result),
    );

    let wrapped_radius = if value.is_radius {
        format!("{range} {}", locale.translate("Radius"))
    } else {
        range
    };

    wrap_if_maximum(locale, size, value.is_maximum, wrapped_radius)
        + &non_modifiable_suffix(locale, kind, ModifiableParameter::Range, size)
}

fn range_value_text(
    levels: &Levels,
    locale: &LocaleEnvironment,
    speed: Speed,
    size: ResponsiveTextSize,
    kind: EntityKind,
    value: &RangeValue,
) -> String {
    match value {
        RangeValue::Modifiable(modifiable) => {
            modifiable_range(levels, locale, speed, size, modifiable)
        }
        RangeValue::Sight => locale.translate("Sight"),
        RangeValue::Caster => locale.translate("Self"),
        RangeValue::Global => locale.translate("Global"),
        RangeValue::Touch => touch_range(locale, kind, size),
        RangeValue::Fixed(fixed) => fixed_range(locale, kind, size, fixed),
        RangeValue::CheckResultBased(check_result_based) => {
            check_result_based_range(locale, kind, size, check_result_based)
        }
    }
}

/// Renders the range of an activatable skill, applying translator wording
/// overrides.
pub fn range_text(
    levels: &Levels,
    locale: &LocaleEnvironment,
    speed: Speed,
    size: ResponsiveTextSize,
    kind: EntityKind,
    value: &Range,
) -> String {
    let text = range_value_text(levels, locale, speed, size, kind, &value.value);
    let replaced = replace_text_if_requested(&value.translations, locale, size, text);
    append_note_if_requested(&value.translations, locale, size, replaced)
}

/// Renders the reduced range of a cantrip or blessing.
pub fn tiny_range_text(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    kind: EntityKind,
    value: &TinyRange,
) -> String {
    match value {
        TinyRange::Caster => locale.translate("Self"),
        TinyRange::Touch => touch_range(locale, kind, size),
        TinyRange::Fixed(fixed) => fixed_range(locale, kind, size, fixed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::locale::LocaleMap;
    use crate::schema::parameters::{
        CheckResultBased, CheckResultValue, TimeSpanUnit, TimeSpanValue,
    };
    use crate::schema::static_data::{FastModificationConfig, SlowModificationConfig};

    const EN: &str = "en-US";

    fn levels() -> Levels {
        [
            (
                SkillModificationLevelId(1),
                SkillModificationLevel {
                    fast: FastModificationConfig { casting_time: 1, cost: 1, range: 1 },
                    slow: SlowModificationConfig {
                        casting_time: TimeSpanValue { unit: TimeSpanUnit::Minutes, value: 5 },
                        cost: 2,
                        range: 1,
                    },
                },
            ),
            (
                SkillModificationLevelId(3),
                SkillModificationLevel {
                    fast: FastModificationConfig { casting_time: 4, cost: 8, range: 16 },
                    slow: SlowModificationConfig {
                        casting_time: TimeSpanValue { unit: TimeSpanUnit::Hours, value: 2 },
                        cost: 16,
                        range: 16,
                    },
                },
            ),
        ]
        .into_iter()
        .collect()
    }

    fn plain_range(value: RangeValue) -> Range {
        Range { value, translations: LocaleMap::default() }
    }

    #[test]
    fn modifiable_range_of_one_reads_as_touch() {
        let locale = LocaleEnvironment::new(EN);
        let value = plain_range(RangeValue::Modifiable(ModifiableRange {
            initial_modification_level: SkillModificationLevelId(1),
        }));
        assert_eq!(
            range_text(&levels(), &locale, Speed::Fast, ResponsiveTextSize::Full, EntityKind::Spell, &value),
            "Touch"
        );
    }

    #[test]
    fn modifiable_range_formats_yards() {
        let locale = LocaleEnvironment::new(EN);
        let value = plain_range(RangeValue::Modifiable(ModifiableRange {
            initial_modification_level: SkillModificationLevelId(3),
        }));
        assert_eq!(
            range_text(&levels(), &locale, Speed::Fast, ResponsiveTextSize::Full, EntityKind::Spell, &value),
            "16 yards"
        );
        assert_eq!(
            range_text(&levels(), &locale, Speed::Fast, ResponsiveTextSize::Compressed, EntityKind::Spell, &value),
            "16 yd"
        );
    }

    #[test]
    fn named_ranges() {
        let locale = LocaleEnvironment::new(EN);
        for (value, expected) in [
            (RangeValue::Sight, "Sight"),
            (RangeValue::Caster, "Self"),
            (RangeValue::Global, "Global"),
        ] {
            assert_eq!(
                range_text(
                    &levels(),
                    &locale,
                    Speed::Fast,
                    ResponsiveTextSize::Full,
                    EntityKind::Spell,
                    &plain_range(value)
                ),
                expected
            );
        }
    }

    #[test]
    fn touch_range_is_not_modifiable() {
        let locale = LocaleEnvironment::new(EN);
        assert_eq!(
            range_text(
                &levels(),
                &locale,
                Speed::Fast,
                ResponsiveTextSize::Full,
                EntityKind::Ritual,
                &plain_range(RangeValue::Touch)
            ),
            "Touch (you cannot use a modification on this ritual’s range)"
        );
    }

    #[test]
    fn check_result_based_radius_range() {
        let locale = LocaleEnvironment::new(EN);
        let value = plain_range(RangeValue::CheckResultBased(CheckResultBasedRange {
            check_result: CheckResultBased {
                base: CheckResultValue::QualityLevels,
                modifier: None,
            },
            unit: LengthUnit::Steps,
            is_maximum: true,
            is_radius: true,
        }));
        assert_eq!(
            range_text(&levels(), &locale, Speed::Fast, ResponsiveTextSize::Full, EntityKind::Spell, &value),
            "no more than QL yards Radius (you cannot use a modification on this spell’s range)"
        );
    }

    #[test]
    fn tiny_ranges_have_no_suffix() {
        let locale = LocaleEnvironment::new(EN);
        assert_eq!(
            tiny_range_text(&locale, ResponsiveTextSize::Full, EntityKind::Cantrip, &TinyRange::Caster),
            "Self"
        );
        assert_eq!(
            tiny_range_text(&locale, ResponsiveTextSize::Full, EntityKind::Cantrip, &TinyRange::Touch),
            "Touch"
        );
        assert_eq!(
            tiny_range_text(
                &locale,
                ResponsiveTextSize::Full,
                EntityKind::Blessing,
                &TinyRange::Fixed(FixedRange { unit: LengthUnit::Miles, value: 1 })
            ),
            "1 miles"
        );
    }
}
