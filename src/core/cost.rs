//! Cost rendering for one-time and sustained activatable skills.

use crate::core::catalog::Registry;
use crate::core::entry::wrap_if_minimum;
use crate::core::kind::{modifiable_by_speed, non_modifiable_suffix, EntityKind, ModifiableParameter, Speed};
use crate::core::locale::LocaleEnvironment;
use crate::core::responsive::{
    append_note_if_requested, replace_text_if_requested, responsive, responsive_text,
    ResponsiveTextSize, MISSING_VALUE,
};
use crate::core::units::{format_energy_by_kind, format_time_span};
use crate::schema::ids::SkillModificationLevelId;
use crate::schema::parameters::{
    CostMap, CostPerCountable, IndefiniteOneTimeCost, ModifiableOneTimeCost,
    ModifiableSustainedCost, NonModifiableOneTimeCost, NonModifiableSustainedCost, OneTimeCost,
    SingleOneTimeCost, SustainedCost,
};
use crate::schema::static_data::SkillModificationLevel;

type Levels = Registry<SkillModificationLevelId, SkillModificationLevel>;

fn modifiable_one_time_cost(
    levels: &Levels,
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    kind: EntityKind,
    speed: Speed,
    value: &ModifiableOneTimeCost,
) -> String {
    match levels.get(&value.initial_modification_level) {
        Some(level) => {
            let cost = modifiable_by_speed(|fast| fast.cost, |slow| slow.cost, speed, level);
            replace_text_if_requested(
                &value.translations,
                locale,
                size,
                format_energy_by_kind(locale, kind, cost),
            )
        }
        None => MISSING_VALUE.to_string(),
    }
}

/// The per-countable suffix pieces: the " per person" part and the
/// ", minimum of 8 AE" part. They are inserted at different positions
/// depending on the cost shape.
fn per_countable_parts(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    kind: EntityKind,
    per: Option<&CostPerCountable>,
) -> (String, String) {
    match per {
        None => (String::new(), String::new()),
        Some(per) => {
            let name = locale
                .translate_map(&per.translations)
                .map(|t| responsive_text(&t.countable, size))
                .unwrap_or(MISSING_VALUE);

            let countable = responsive(
                size,
                || locale.translate_with(" per {0}", &[&name]),
                || locale.translate_with("/{0}", &[&name]),
            );

            let minimum_total = per
                .minimum_total
                .map(|minimum| {
                    locale.translate_with(
                        ", minimum of {0}",
                        &[&format_energy_by_kind(locale, kind, minimum)],
                    )
                })
                .unwrap_or_default();

            (countable, minimum_total)
        }
    }
}

fn permanent_value_text(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    permanent_value: Option<u32>,
) -> String {
    match permanent_value {
        None => String::new(),
        Some(permanent) => responsive(
            size,
            || locale.translate_with(", {0} of which are permanent", &[&permanent]),
            || locale.translate_with(" ({0} perm.)", &[&permanent]),
        ),
    }
}

fn non_modifiable_one_time_cost(
    locale: &LocaleEnvironment,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &NonModifiableOneTimeCost,
) -> String {
    let (countable, minimum_total) = per_countable_parts(locale, size, kind, value.per.as_ref());
    let permanent = permanent_value_text(locale, size, value.permanent_value);

    let cost = format_energy_by_kind(locale, kind, value.value)
        + &countable
        + &minimum_total
        + &permanent;

    let wrapped = wrap_if_minimum(locale, size, value.is_minimum, cost);
    let with_note = append_note_if_requested(&value.translations, locale, size, wrapped);

    with_note + &non_modifiable_suffix(locale, kind, ModifiableParameter::Cost, size)
}

fn indefinite_one_time_cost(
    locale: &LocaleEnvironment,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &IndefiniteOneTimeCost,
) -> String {
    let description = locale
        .translate_map(&value.translations)
        .map(|t| responsive_text(&t.description, size).to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string());

    description + &non_modifiable_suffix(locale, kind, ModifiableParameter::Cost, size)
}

fn single_one_time_cost(
    levels: &Levels,
    locale: &LocaleEnvironment,
    speed: Speed,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &SingleOneTimeCost,
) -> String {
    match value {
        SingleOneTimeCost::Modifiable(modifiable) => {
            modifiable_one_time_cost(levels, locale, size, kind, speed, modifiable)
        }
        SingleOneTimeCost::NonModifiable(non_modifiable) => {
            non_modifiable_one_time_cost(locale, kind, size, non_modifiable)
        }
        SingleOneTimeCost::Indefinite(indefinite) => {
            indefinite_one_time_cost(locale, kind, size, indefinite)
        }
    }
}

enum Junction {
    Conjunction,
    Disjunction,
}

fn multiple_one_time_costs(
    junction: Junction,
    levels: &Levels,
    locale: &LocaleEnvironment,
    speed: Speed,
    kind: EntityKind,
    size: ResponsiveTextSize,
    parts: &[SingleOneTimeCost],
) -> String {
    // One shared suffix at the end, but only if any part is fixed.
    let suffix = if parts
        .iter()
        .all(|part| matches!(part, SingleOneTimeCost::Modifiable(_)))
    {
        String::new()
    } else {
        non_modifiable_suffix(locale, kind, ModifiableParameter::Cost, size)
    };

    let separator = match junction {
        Junction::Conjunction => responsive(
            size,
            || locale.translate(" and "),
            || locale.translate(" + "),
        ),
        Junction::Disjunction => responsive(
            size,
            || locale.translate(" or "),
            || locale.translate(" / "),
        ),
    };

    parts
        .iter()
        .map(|part| single_one_time_cost(levels, locale, speed, kind, size, part))
        .collect::<Vec<_>>()
        .join(&separator)
        + &suffix
}

fn cost_map_text(
    locale: &LocaleEnvironment,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &CostMap,
) -> String {
    let wording = locale.translate_map(&value.translations);

    if !value.translations.is_empty() && wording.is_none() {
        return MISSING_VALUE.to_string();
    }

    if let Some(replacement) = wording.and_then(|w| w.replacement.as_deref()) {
        return replacement.to_string();
    }

    let labels = value
        .options
        .iter()
        .map(|option| {
            locale
                .translate_map(&option.translations)
                .map(|t| t.label.as_str())
                .unwrap_or(MISSING_VALUE)
        })
        .collect::<Vec<_>>()
        .join("/");

    let costs = value
        .options
        .iter()
        .map(|option| option.value.to_string())
        .collect::<Vec<_>>()
        .join("/");

    let permanent_costs = value
        .options
        .iter()
        .map(|option| option.permanent_value)
        .collect::<Option<Vec<u32>>>()
        .map(|values| {
            values
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join("/")
        });

    let list_prepend = wording
        .and_then(|w| w.list_prepend.as_deref())
        .map(|prepend| format!("{prepend} "))
        .unwrap_or_default();
    let list_append = wording
        .and_then(|w| w.list_append.as_deref())
        .unwrap_or_default();

    let permanent = permanent_costs
        .map(|permanent| {
            locale.translate_with(
                ", {0} of which are permanent",
                &[&format_energy_by_kind(locale, kind, permanent)],
            )
        })
        .unwrap_or_default();

    format_energy_by_kind(locale, kind, costs)
        + &locale.translate(" for ")
        + &list_prepend
        + &labels
        + list_append
        + &permanent
        + &non_modifiable_suffix(locale, kind, ModifiableParameter::Cost, size)
}

/// Renders the cost of a one-time activatable skill.
pub fn one_time_cost(
    levels: &Levels,
    locale: &LocaleEnvironment,
    speed: Speed,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &OneTimeCost,
) -> String {
    match value {
        OneTimeCost::Single(single) => {
            single_one_time_cost(levels, locale, speed, kind, size, single)
        }
        OneTimeCost::Conjunction(parts) => multiple_one_time_costs(
            Junction::Conjunction,
            levels,
            locale,
            speed,
            kind,
            size,
            parts,
        ),
        OneTimeCost::Disjunction(parts) => multiple_one_time_costs(
            Junction::Disjunction,
            levels,
            locale,
            speed,
            kind,
            size,
            parts,
        ),
        OneTimeCost::Map(map) => cost_map_text(locale, kind, size, map),
    }
}

/// Halves a casting cost for the sustaining interval. Odd values keep
/// their fractional half.
fn halved(value: u32) -> String {
    if value % 2 == 0 {
        (value / 2).to_string()
    } else {
        format!("{}.5", value / 2)
    }
}

fn modifiable_sustained_cost(
    levels: &Levels,
    locale: &LocaleEnvironment,
    speed: Speed,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &ModifiableSustainedCost,
) -> String {
    match levels.get(&value.initial_modification_level) {
        Some(level) => {
            let cost = modifiable_by_speed(|fast| fast.cost, |slow| slow.cost, speed, level);
            let interval =
                format_time_span(locale, size, value.interval.unit, value.interval.value);

            responsive(
                size,
                || {
                    format!(
                        "{}{} + {}{}",
                        format_energy_by_kind(locale, kind, cost),
                        locale.translate(" (casting)"),
                        format_energy_by_kind(locale, kind, halved(cost)),
                        locale.translate_with(" per {0}", &[&interval]),
                    )
                },
                || {
                    format!(
                        "{} + {}{}",
                        format_energy_by_kind(locale, kind, cost),
                        format_energy_by_kind(locale, kind, halved(cost)),
                        locale.translate_with("/{0}", &[&interval]),
                    )
                },
            )
        }
        None => MISSING_VALUE.to_string(),
    }
}

fn non_modifiable_sustained_cost(
    locale: &LocaleEnvironment,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &NonModifiableSustainedCost,
) -> String {
    let (countable, minimum_total) = per_countable_parts(locale, size, kind, value.per.as_ref());
    let interval = format_time_span(locale, size, value.interval.unit, value.interval.value);

    let cost = responsive(
        size,
        || {
            let sustaining = if value.is_minimum {
                locale.translate("half of the activation cost")
            } else {
                format_energy_by_kind(locale, kind, halved(value.value))
            };
            format!(
                "{}{} + {}{}{}",
                format_energy_by_kind(locale, kind, value.value),
                locale.translate(" (casting)"),
                sustaining,
                countable,
                locale.translate_with(" per {0}", &[&interval]),
            )
        },
        || {
            let sustaining = if value.is_minimum {
                "50%".to_string()
            } else {
                format_energy_by_kind(locale, kind, halved(value.value))
            };
            format!(
                "{} + {}{}{}",
                format_energy_by_kind(locale, kind, value.value),
                sustaining,
                countable,
                locale.translate_with("/{0}", &[&interval]),
            )
        },
    ) + &minimum_total;

    wrap_if_minimum(locale, size, value.is_minimum, cost)
        + &non_modifiable_suffix(locale, kind, ModifiableParameter::Cost, size)
}

/// Renders the cost of a sustained activatable skill.
pub fn sustained_cost(
    levels: &Levels,
    locale: &LocaleEnvironment,
    speed: Speed,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &SustainedCost,
) -> String {
    match value {
        SustainedCost::Modifiable(modifiable) => {
            modifiable_sustained_cost(levels, locale, speed, kind, size, modifiable)
        }
        SustainedCost::NonModifiable(non_modifiable) => {
            non_modifiable_sustained_cost(locale, kind, size, non_modifiable)
        }
    }
}
