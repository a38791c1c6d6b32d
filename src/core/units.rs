//! Unit formatters for time spans, lengths, and energy pools. Each unit
//! maps to a pair of templates, one per text size.

use std::fmt::Display;

use crate::core::kind::EntityKind;
use crate::core::locale::LocaleEnvironment;
use crate::core::responsive::{responsive, ResponsiveTextSize};
use crate::schema::parameters::{LengthUnit, TimeSpanUnit};

fn time_span_keys(unit: TimeSpanUnit) -> (&'static str, &'static str) {
    match unit {
        TimeSpanUnit::Seconds => ("{0} seconds", "{0} s"),
        TimeSpanUnit::Minutes => ("{0} minutes", "{0} min"),
        TimeSpanUnit::Hours => ("{0} hours", "{0} h"),
        TimeSpanUnit::Days => ("{0} days", "{0} d"),
        TimeSpanUnit::Weeks => ("{0} weeks", "{0} wks."),
        TimeSpanUnit::Months => ("{0} months", "{0} mos."),
        TimeSpanUnit::Years => ("{0} years", "{0} yrs."),
        TimeSpanUnit::Centuries => ("{0} centuries", "{0} cent."),
        TimeSpanUnit::Actions => ("{0} actions", "{0} act"),
        TimeSpanUnit::CombatRounds => ("{0} combat rounds", "{0} CR"),
        TimeSpanUnit::SeductionActions => ("{0} seduction actions", "{0} SA"),
        TimeSpanUnit::Rounds => ("{0} rounds", "{0} rnds"),
    }
}

/// Formats a value with a time span unit. The value may be a number or an
/// already-rendered expression such as `"QL / 2"`.
pub fn format_time_span(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    unit: TimeSpanUnit,
    value: impl Display,
) -> String {
    let (full_key, compressed_key) = time_span_keys(unit);
    responsive(
        size,
        || locale.translate_with(full_key, &[&value]),
        || locale.translate_with(compressed_key, &[&value]),
    )
}

fn length_keys(unit: LengthUnit) -> (&'static str, &'static str) {
    match unit {
        LengthUnit::Steps => ("{0} yards", "{0} yd"),
        LengthUnit::Miles => ("{0} miles", "{0} mi."),
    }
}

/// Formats a value with a length unit.
pub fn format_length(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    unit: LengthUnit,
    value: impl Display,
) -> String {
    let (full_key, compressed_key) = length_keys(unit);
    responsive(
        size,
        || locale.translate_with(full_key, &[&value]),
        || locale.translate_with(compressed_key, &[&value]),
    )
}

/// The energy pool an activatable skill draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    ArcaneEnergy,
    KarmaPoints,
}

/// Formats a value with an energy unit.
pub fn format_energy(locale: &LocaleEnvironment, unit: EnergyUnit, value: impl Display) -> String {
    let key = match unit {
        EnergyUnit::ArcaneEnergy => "{0} AE",
        EnergyUnit::KarmaPoints => "{0} KP",
    };
    locale.translate_with(key, &[&value])
}

/// Formats a value with the energy unit of the given entity kind: arcane
/// energy for magic, karma points for liturgies.
pub fn format_energy_by_kind(
    locale: &LocaleEnvironment,
    kind: EntityKind,
    value: impl Display,
) -> String {
    let unit = match kind {
        EntityKind::Cantrip | EntityKind::Spell | EntityKind::Ritual => EnergyUnit::ArcaneEnergy,
        EntityKind::Blessing | EntityKind::LiturgicalChant | EntityKind::Ceremony => {
            EnergyUnit::KarmaPoints
        }
    };
    format_energy(locale, unit, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_spans_abbreviate_when_compressed() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(
            format_time_span(&locale, ResponsiveTextSize::Full, TimeSpanUnit::CombatRounds, 5),
            "5 combat rounds"
        );
        assert_eq!(
            format_time_span(
                &locale,
                ResponsiveTextSize::Compressed,
                TimeSpanUnit::CombatRounds,
                5
            ),
            "5 CR"
        );
        assert_eq!(
            format_time_span(&locale, ResponsiveTextSize::Full, TimeSpanUnit::Actions, 2),
            "2 actions"
        );
    }

    #[test]
    fn time_span_accepts_rendered_expressions() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(
            format_time_span(&locale, ResponsiveTextSize::Full, TimeSpanUnit::Minutes, "QL / 2"),
            "QL / 2 minutes"
        );
    }

    #[test]
    fn lengths() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(
            format_length(&locale, ResponsiveTextSize::Full, LengthUnit::Steps, 16),
            "16 yards"
        );
        assert_eq!(
            format_length(&locale, ResponsiveTextSize::Compressed, LengthUnit::Miles, 2),
            "2 mi."
        );
    }

    #[test]
    fn energy_follows_entity_kind() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(format_energy_by_kind(&locale, EntityKind::Spell, 8), "8 AE");
        assert_eq!(format_energy_by_kind(&locale, EntityKind::Ceremony, 8), "8 KP");
    }
}
