//! Shared pieces of the activatable-skill renderers: performance parameter
//! texts, effect sections, and the improvement cost line.

use crate::core::casting_time::{fast_casting_time, slow_casting_time};
use crate::core::catalog::Registry;
use crate::core::cost::{one_time_cost, sustained_cost};
use crate::core::duration::{one_time_duration, sustained_duration};
use crate::core::entry::ContentBlock;
use crate::core::kind::{EntityKind, Speed};
use crate::core::locale::LocaleEnvironment;
use crate::core::range::range_text;
use crate::core::references::render_references;
use crate::core::responsive::ResponsiveTextSize;
use crate::schema::entities::ImprovementCost;
use crate::schema::ids::{PublicationId, SkillModificationLevelId};
use crate::schema::parameters::{
    ActivatableParameters, Effect, FastCastingTime, QualityLevelEffect, SlowCastingTime,
};
use crate::schema::source::PublicationRef;
use crate::schema::static_data::{Publication, SkillModificationLevel};

type Levels = Registry<SkillModificationLevelId, SkillModificationLevel>;

/// The computed texts for the four performance parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceTexts {
    pub casting_time: String,
    pub cost: String,
    pub range: String,
    pub duration: String,
}

/// Renders the performance parameters of a fast activatable skill.
pub fn fast_parameter_texts(
    levels: &Levels,
    locale: &LocaleEnvironment,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &ActivatableParameters<FastCastingTime>,
) -> PerformanceTexts {
    match value {
        ActivatableParameters::OneTime(parameters) => PerformanceTexts {
            casting_time: fast_casting_time(levels, locale, kind, size, &parameters.casting_time),
            cost: one_time_cost(levels, locale, Speed::Fast, kind, size, &parameters.cost),
            range: range_text(levels, locale, Speed::Fast, size, kind, &parameters.range),
            duration: one_time_duration(locale, size, &parameters.duration),
        },
        ActivatableParameters::Sustained(parameters) => PerformanceTexts {
            casting_time: fast_casting_time(levels, locale, kind, size, &parameters.casting_time),
            cost: sustained_cost(levels, locale, Speed::Fast, kind, size, &parameters.cost),
            range: range_text(levels, locale, Speed::Fast, size, kind, &parameters.range),
            duration: sustained_duration(locale, size, parameters.duration.as_ref()),
        },
    }
}

/// Renders the performance parameters of a slow activatable skill.
pub fn slow_parameter_texts(
    levels: &Levels,
    locale: &LocaleEnvironment,
    kind: EntityKind,
    size: ResponsiveTextSize,
    value: &ActivatableParameters<SlowCastingTime>,
) -> PerformanceTexts {
    match value {
        ActivatableParameters::OneTime(parameters) => PerformanceTexts {
            casting_time: slow_casting_time(levels, locale, kind, size, &parameters.casting_time),
            cost: one_time_cost(levels, locale, Speed::Slow, kind, size, &parameters.cost),
            range: range_text(levels, locale, Speed::Slow, size, kind, &parameters.range),
            duration: one_time_duration(locale, size, &parameters.duration),
        },
        ActivatableParameters::Sustained(parameters) => PerformanceTexts {
            casting_time: slow_casting_time(levels, locale, kind, size, &parameters.casting_time),
            cost: sustained_cost(levels, locale, Speed::Slow, kind, size, &parameters.cost),
            range: range_text(levels, locale, Speed::Slow, size, kind, &parameters.range),
            duration: sustained_duration(locale, size, parameters.duration.as_ref()),
        },
    }
}

fn quality_level_sections(
    label_for: impl Fn(usize) -> String,
    locale: &LocaleEnvironment,
    effect: &QualityLevelEffect,
) -> Vec<ContentBlock> {
    let mut blocks =
        vec![ContentBlock::labeled(locale.translate("Effect"), &effect.text_before)];

    blocks.extend(effect.quality_levels.iter().enumerate().map(|(index, text)| {
        ContentBlock::labeled(locale.translate_with("QL {0}", &[&label_for(index)]), text)
    }));

    if let Some(text_after) = &effect.text_after {
        blocks.push(ContentBlock::plain(text_after).with_class("effect-after"));
    }

    blocks
}

/// Renders the effect of an activatable skill as one or more content
/// blocks: one per quality level tier where applicable.
pub fn effect_sections(locale: &LocaleEnvironment, effect: &Effect) -> Vec<ContentBlock> {
    match effect {
        Effect::Plain(plain) => {
            vec![ContentBlock::labeled(locale.translate("Effect"), &plain.text)]
        }
        Effect::ForEachQualityLevel(effect) => {
            quality_level_sections(|index| (index + 1).to_string(), locale, effect)
        }
        Effect::ForEachTwoQualityLevels(effect) => quality_level_sections(
            |index| format!("{}–{}", index * 2 + 1, index * 2 + 2),
            locale,
            effect,
        ),
    }
}

/// The improvement cost line.
pub fn improvement_cost_section(
    locale: &LocaleEnvironment,
    improvement_cost: ImprovementCost,
) -> ContentBlock {
    ContentBlock::labeled(locale.translate("Improvement Cost"), improvement_cost.as_str())
}

/// Renders publication references, or `None` when nothing resolves.
pub fn references_section(
    publications: &Registry<PublicationId, Publication>,
    locale: &LocaleEnvironment,
    src: &[PublicationRef],
) -> Option<String> {
    let text = render_references(publications, locale, src);
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parameters::PlainEffect;

    const EN: &str = "en-US";

    #[test]
    fn plain_effect_is_one_block() {
        let locale = LocaleEnvironment::new(EN);
        let effect = Effect::Plain(PlainEffect { text: "Things happen.".to_string() });
        let sections = effect_sections(&locale, &effect);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label.as_deref(), Some("Effect"));
        assert_eq!(sections[0].value, "Things happen.");
    }

    #[test]
    fn quality_level_effect_labels_each_tier() {
        let locale = LocaleEnvironment::new(EN);
        let effect = Effect::ForEachQualityLevel(QualityLevelEffect {
            text_before: "Depending on the check:".to_string(),
            quality_levels: vec!["one".to_string(), "two".to_string(), "three".to_string()],
            text_after: Some("In any case.".to_string()),
        });
        let sections = effect_sections(&locale, &effect);
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[1].label.as_deref(), Some("QL 1"));
        assert_eq!(sections[3].label.as_deref(), Some("QL 3"));
        assert_eq!(sections[4].label, None);
        assert_eq!(sections[4].class_name.as_deref(), Some("effect-after"));
    }

    #[test]
    fn two_quality_level_effect_labels_tier_pairs() {
        let locale = LocaleEnvironment::new(EN);
        let effect = Effect::ForEachTwoQualityLevels(QualityLevelEffect {
            text_before: "Scaling:".to_string(),
            quality_levels: vec!["low".to_string(), "high".to_string()],
            text_after: None,
        });
        let sections = effect_sections(&locale, &effect);
        assert_eq!(sections[1].label.as_deref(), Some("QL 1–2"));
        assert_eq!(sections[2].label.as_deref(), Some("QL 3–4"));
    }
}
