//! Skill check rendering: attribute abbreviations, check penalties, and
//! check-result-based value expressions.

use crate::core::catalog::Registry;
use crate::core::entry::ContentBlock;
use crate::core::locale::LocaleEnvironment;
use crate::core::responsive::{responsive, ResponsiveTextSize};
use crate::schema::ids::AttributeId;
use crate::schema::parameters::{
    CheckPenalty, CheckResultArithmetic, CheckResultBased, CheckResultValue,
};
use crate::schema::static_data::{AbbreviatedNameTranslation, Attribute, DerivedCharacteristic};

/// Renders a check-result-based value expression such as `QL` or `SP × 3`.
pub fn check_result_based_text(locale: &LocaleEnvironment, value: &CheckResultBased) -> String {
    let base = match value.base {
        CheckResultValue::QualityLevels => locale.translate("QL"),
        CheckResultValue::SkillPoints => locale.translate("SP"),
    };

    match &value.modifier {
        None => base,
        Some(modifier) => {
            let symbol = match modifier.arithmetic {
                CheckResultArithmetic::Divide => " / ",
                CheckResultArithmetic::Multiply => " × ",
            };
            format!("{base}{symbol}{}", modifier.value)
        }
    }
}

/// The derived characteristics a check penalty may refer to.
#[derive(Debug, Clone, Copy, Default)]
pub struct PenaltyCharacteristics<'a> {
    pub spirit: Option<&'a DerivedCharacteristic>,
    pub toughness: Option<&'a DerivedCharacteristic>,
}

impl<'a> PenaltyCharacteristics<'a> {
    fn spirit_translation(
        &self,
        locale: &LocaleEnvironment,
    ) -> Option<&'a AbbreviatedNameTranslation> {
        self.spirit.and_then(|c| locale.translate_map(&c.translations))
    }

    fn toughness_translation(
        &self,
        locale: &LocaleEnvironment,
    ) -> Option<&'a AbbreviatedNameTranslation> {
        self.toughness.and_then(|c| locale.translate_map(&c.translations))
    }
}

fn penalty_text(
    locale: &LocaleEnvironment,
    size: ResponsiveTextSize,
    penalty: CheckPenalty,
    characteristics: &PenaltyCharacteristics<'_>,
) -> String {
    match penalty {
        CheckPenalty::Spirit => characteristics
            .spirit_translation(locale)
            .map(|t| responsive(size, || t.name.clone(), || t.abbreviation.clone()))
            .unwrap_or_default(),
        CheckPenalty::HalfOfSpirit => characteristics
            .spirit_translation(locale)
            .map(|t| {
                responsive(
                    size,
                    || format!("{}/2", t.name),
                    || format!("{}/2", t.abbreviation),
                )
            })
            .unwrap_or_default(),
        CheckPenalty::Toughness => characteristics
            .toughness_translation(locale)
            .map(|t| responsive(size, || t.name.clone(), || t.abbreviation.clone()))
            .unwrap_or_default(),
        CheckPenalty::HigherOfSpiritAndToughness => {
            match (
                characteristics.spirit_translation(locale),
                characteristics.toughness_translation(locale),
            ) {
                (Some(spirit), Some(toughness)) => responsive(
                    size,
                    || {
                        locale.translate_with(
                            "{0} or {1}, depending on which value is higher",
                            &[&spirit.abbreviation, &toughness.abbreviation],
                        )
                    },
                    || format!("{}/{}", spirit.abbreviation, toughness.abbreviation),
                ),
                _ => String::new(),
            }
        }
        CheckPenalty::SummoningDifficulty => responsive(
            size,
            || locale.translate("Invocation Difficulty"),
            || locale.translate("ID"),
        ),
        CheckPenalty::CreationDifficulty => responsive(
            size,
            || locale.translate("Creation Difficulty"),
            || locale.translate("CD"),
        ),
    }
}

/// Renders the check line of a library entry: attribute abbreviations
/// joined by slashes, with the check penalty appended when present.
pub fn check_section(
    attributes: &Registry<AttributeId, Attribute>,
    locale: &LocaleEnvironment,
    check: &[AttributeId],
    penalty: Option<CheckPenalty>,
    size: ResponsiveTextSize,
    characteristics: &PenaltyCharacteristics<'_>,
) -> ContentBlock {
    let attributes_text = check
        .iter()
        .map(|id| {
            attributes
                .get(id)
                .and_then(|attribute| locale.translate_map(&attribute.translations))
                .map(|t| t.abbreviation.as_str())
                .unwrap_or("??")
        })
        .collect::<Vec<_>>()
        .join("/");

    let penalty_suffix = match penalty {
        None => String::new(),
        Some(penalty) => {
            let text = penalty_text(locale, size, penalty, characteristics);
            responsive(
                size,
                || locale.translate_with(" (modified by {0})", &[&text]),
                || locale.translate_with(" (− {0})", &[&text]),
            )
        }
    };

    ContentBlock::labeled(locale.translate("Check"), attributes_text + &penalty_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::locale::{LocaleId, LocaleMap};
    use crate::schema::parameters::CheckResultModifier;

    const EN: &str = "en-US";

    fn attribute(name: &str, abbreviation: &str) -> Attribute {
        let mut translations = LocaleMap::default();
        translations.insert(
            LocaleId::new(EN),
            AbbreviatedNameTranslation {
                name: name.to_string(),
                abbreviation: abbreviation.to_string(),
            },
        );
        Attribute { translations }
    }

    fn characteristic(name: &str, abbreviation: &str) -> DerivedCharacteristic {
        let mut translations = LocaleMap::default();
        translations.insert(
            LocaleId::new(EN),
            AbbreviatedNameTranslation {
                name: name.to_string(),
                abbreviation: abbreviation.to_string(),
            },
        );
        DerivedCharacteristic { translations }
    }

    fn attributes() -> Registry<AttributeId, Attribute> {
        [
            (AttributeId(1), attribute("Courage", "COU")),
            (AttributeId(2), attribute("Sagacity", "SGC")),
            (AttributeId(3), attribute("Intuition", "INT")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn check_result_expressions() {
        let locale = LocaleEnvironment::new(EN);
        let plain = CheckResultBased { base: CheckResultValue::QualityLevels, modifier: None };
        assert_eq!(check_result_based_text(&locale, &plain), "QL");

        let divided = CheckResultBased {
            base: CheckResultValue::QualityLevels,
            modifier: Some(CheckResultModifier {
                arithmetic: CheckResultArithmetic::Divide,
                value: 2,
            }),
        };
        assert_eq!(check_result_based_text(&locale, &divided), "QL / 2");

        let multiplied = CheckResultBased {
            base: CheckResultValue::SkillPoints,
            modifier: Some(CheckResultModifier {
                arithmetic: CheckResultArithmetic::Multiply,
                value: 3,
            }),
        };
        assert_eq!(check_result_based_text(&locale, &multiplied), "SP × 3");
    }

    #[test]
    fn check_line_joins_abbreviations() {
        let locale = LocaleEnvironment::new(EN);
        let section = check_section(
            &attributes(),
            &locale,
            &[AttributeId(1), AttributeId(2), AttributeId(3)],
            None,
            ResponsiveTextSize::Full,
            &PenaltyCharacteristics::default(),
        );
        assert_eq!(section.label.as_deref(), Some("Check"));
        assert_eq!(section.value, "COU/SGC/INT");
    }

    #[test]
    fn unknown_attribute_renders_placeholder() {
        let locale = LocaleEnvironment::new(EN);
        let section = check_section(
            &attributes(),
            &locale,
            &[AttributeId(1), AttributeId(99)],
            None,
            ResponsiveTextSize::Full,
            &PenaltyCharacteristics::default(),
        );
        assert_eq!(section.value, "COU/??");
    }

    #[test]
    fn spirit_penalty_is_appended() {
        let locale = LocaleEnvironment::new(EN);
        let spirit = characteristic("Spirit", "SPI");
        let characteristics =
            PenaltyCharacteristics { spirit: Some(&spirit), toughness: None };

        let full = check_section(
            &attributes(),
            &locale,
            &[AttributeId(1)],
            Some(CheckPenalty::Spirit),
            ResponsiveTextSize::Full,
            &characteristics,
        );
        assert_eq!(full.value, "COU (modified by Spirit)");

        let compressed = check_section(
            &attributes(),
            &locale,
            &[AttributeId(1)],
            Some(CheckPenalty::HalfOfSpirit),
            ResponsiveTextSize::Compressed,
            &characteristics,
        );
        assert_eq!(compressed.value, "COU (− SPI/2)");
    }

    #[test]
    fn higher_of_spirit_and_toughness() {
        let locale = LocaleEnvironment::new(EN);
        let spirit = characteristic("Spirit", "SPI");
        let toughness = characteristic("Toughness", "TOU");
        let characteristics =
            PenaltyCharacteristics { spirit: Some(&spirit), toughness: Some(&toughness) };

        let full = check_section(
            &attributes(),
            &locale,
            &[AttributeId(1)],
            Some(CheckPenalty::HigherOfSpiritAndToughness),
            ResponsiveTextSize::Full,
            &characteristics,
        );
        assert_eq!(
            full.value,
            "COU (modified by SPI or TOU, depending on which value is higher)"
        );

        let compressed = check_section(
            &attributes(),
            &locale,
            &[AttributeId(1)],
            Some(CheckPenalty::HigherOfSpiritAndToughness),
            ResponsiveTextSize::Compressed,
            &characteristics,
        );
        assert_eq!(compressed.value, "COU (− SPI/TOU)");
    }

    #[test]
    fn summoning_difficulty_penalty() {
        let locale = LocaleEnvironment::new(EN);
        let section = check_section(
            &attributes(),
            &locale,
            &[AttributeId(1)],
            Some(CheckPenalty::SummoningDifficulty),
            ResponsiveTextSize::Full,
            &PenaltyCharacteristics::default(),
        );
        assert_eq!(section.value, "COU (modified by Invocation Difficulty)");
    }
}
