//! Duration rendering for one-time, sustained, cantrip, and blessing
//! durations.

use crate::core::entry::{append_in_parens_if_not_empty, wrap_as_maximum, wrap_if_maximum};
use crate::core::locale::LocaleEnvironment;
use crate::core::responsive::{
    replace_text_if_requested, responsive, responsive_text, ResponsiveTextSize, MISSING_VALUE,
};
use crate::core::check::check_result_based_text;
use crate::core::units::format_time_span;
use crate::schema::parameters::{
    BlessingDuration, CantripDuration, CheckResultBasedDuration, DurationForOneTime,
    DurationForSustained, FixedDuration, ImmediateDuration, IndefiniteDuration, PermanentDuration,
    TimeSpanValue,
};

fn immediate_duration(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    value: &ImmediateDuration,
) -> String {
    let maximum = value
        .maximum
        .map(|max| {
            let max_text = format_time_span(locale, size, max.unit, max.value);
            responsive(
                size,
                || locale.translate_with("no more than {0}", &[&max_text]),
                || locale.translate_with("max. {0}", &[&max_text]),
            )
        })
        .unwrap_or_default();

    let text = append_in_parens_if_not_empty(&maximum, locale.translate("Immediate"));
    replace_text_if_requested(&value.translations, locale, size, text)
}

fn permanent_duration(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    value: &PermanentDuration,
) -> String {
    replace_text_if_requested(&value.translations, locale, size, locale.translate("Permanent"))
}

fn fixed_duration(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    value: &FixedDuration,
) -> String {
    let duration = format_time_span(locale, size, value.unit, value.value);
    let wrapped = wrap_if_maximum(locale, size, value.is_maximum, duration);
    replace_text_if_requested(&value.translations, locale, size, wrapped)
}

fn check_result_based_duration(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    value: &CheckResultBasedDuration,
) -> String {
    let duration = format_time_span(
        locale,
        size,
        value.unit,
        check_result_based_text(locale, &value.check_result),
    );
    wrap_if_maximum(locale, size, value.is_maximum, duration)
}

fn indefinite_duration(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    value: &IndefiniteDuration,
) -> String {
    locale
        .translate_map(&value.translations)
        .map(|t| responsive_text(&t.description, size).to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Renders the duration of a one-time activatable skill.
pub fn one_time_duration(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    value: &DurationForOneTime,
) -> String {
    match value {
        DurationForOneTime::Immediate(immediate) => immediate_duration(locale, size, immediate),
        DurationForOneTime::Permanent(permanent) => permanent_duration(locale, size, permanent),
        DurationForOneTime::Fixed(fixed) => fixed_duration(locale, size, fixed),
        DurationForOneTime::CheckResultBased(check_result_based) => {
            check_result_based_duration(locale, size, check_result_based)
        }
        DurationForOneTime::Indefinite(indefinite) => {
            indefinite_duration(locale, size, indefinite)
        }
    }
}

/// Renders the duration of a sustained activatable skill. Without a
/// maximum it is just marked as sustained.
pub fn sustained_duration(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    value: Option<&DurationForSustained>,
) -> String {
    match value {
        None => responsive(
            size,
            || locale.translate("Sustained"),
            || locale.translate("(S)"),
        ),
        Some(value) => {
            let maximum =
                format_time_span(locale, size, value.maximum.unit, value.maximum.value);
            wrap_as_maximum(locale, size, &maximum)
        }
    }
}

fn lovemaking_duration(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    value: &TimeSpanValue,
) -> String {
    format_time_span(locale, size, value.unit, value.value)
}

/// Renders the duration of a cantrip.
pub fn cantrip_duration(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    value: &CantripDuration,
) -> String {
    match value {
        CantripDuration::Immediate(immediate) => immediate_duration(locale, size, immediate),
        CantripDuration::Fixed(fixed) => fixed_duration(locale, size, fixed),
        CantripDuration::Indefinite(indefinite) => indefinite_duration(locale, size, indefinite),
        CantripDuration::DuringLovemaking(span) => lovemaking_duration(locale, size, span),
    }
}

/// Renders the duration of a blessing.
pub fn blessing_duration(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    value: &BlessingDuration,
) -> String {
    match value {
        BlessingDuration::Immediate(immediate) => immediate_duration(locale, size, immediate),
        BlessingDuration::Fixed(fixed) => fixed_duration(locale, size, fixed),
        BlessingDuration::Indefinite(indefinite) => indefinite_duration(locale, size, indefinite),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::locale::LocaleMap;
    use crate::schema::parameters::{
        CheckResultArithmetic, CheckResultBased, CheckResultModifier, CheckResultValue,
        TimeSpanUnit,
    };

    const EN: &str = "en-US";

    #[test]
    fn immediate_duration_with_maximum() {
        let locale = LocaleEnvironment::new(EN);
        let value = DurationForOneTime::Immediate(ImmediateDuration {
            maximum: Some(TimeSpanValue { unit: TimeSpanUnit::Rounds, value: 2 }),
            translations: LocaleMap::default(),
        });
        assert_eq!(
            one_time_duration(&locale, ResponsiveTextSize::Full, &value),
            "Immediate (no more than 2 rounds)"
        );
        assert_eq!(
            one_time_duration(&locale, ResponsiveTextSize::Compressed, &value),
            "Immediate (max. 2 rnds)"
        );
    }

    #[test]
    fn permanent_duration_text() {
        let locale = LocaleEnvironment::new(EN);
        let value =
            DurationForOneTime::Permanent(PermanentDuration { translations: LocaleMap::default() });
        assert_eq!(one_time_duration(&locale, ResponsiveTextSize::Full, &value), "Permanent");
    }

    #[test]
    fn fixed_maximum_duration_wraps() {
        let locale = LocaleEnvironment::new(EN);
        let value = DurationForOneTime::Fixed(FixedDuration {
            unit: TimeSpanUnit::Minutes,
            value: 5,
            is_maximum: true,
            translations: LocaleMap::default(),
        });
        assert_eq!(
            one_time_duration(&locale, ResponsiveTextSize::Full, &value),
            "no more than 5 minutes"
        );
    }

    #[test]
    fn check_result_based_duration_embeds_expression() {
        let locale = LocaleEnvironment::new(EN);
        let value = DurationForOneTime::CheckResultBased(CheckResultBasedDuration {
            check_result: CheckResultBased {
                base: CheckResultValue::QualityLevels,
                modifier: Some(CheckResultModifier {
                    arithmetic: CheckResultArithmetic::Multiply,
                    value: 2,
                }),
            },
            unit: TimeSpanUnit::Days,
            is_maximum: false,
        });
        assert_eq!(
            one_time_duration(&locale, ResponsiveTextSize::Full, &value),
            "QL × 2 days"
        );
    }

    #[test]
    fn sustained_without_maximum() {
        let locale = LocaleEnvironment::new(EN);
        assert_eq!(sustained_duration(&locale, ResponsiveTextSize::Full, None), "Sustained");
        assert_eq!(sustained_duration(&locale, ResponsiveTextSize::Compressed, None), "(S)");
    }

    #[test]
    fn sustained_with_maximum() {
        let locale = LocaleEnvironment::new(EN);
        let value = DurationForSustained {
            maximum: TimeSpanValue { unit: TimeSpanUnit::Hours, value: 12 },
        };
        assert_eq!(
            sustained_duration(&locale, ResponsiveTextSize::Full, Some(&value)),
            "no more than 12 hours"
        );
    }

    #[test]
    fn cantrip_lovemaking_duration() {
        let locale = LocaleEnvironment::new(EN);
        let value = CantripDuration::DuringLovemaking(TimeSpanValue {
            unit: TimeSpanUnit::SeductionActions,
            value: 3,
        });
        assert_eq!(
            cantrip_duration(&locale, ResponsiveTextSize::Full, &value),
            "3 seduction actions"
        );
    }
}
