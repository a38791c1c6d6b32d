//! Target category rendering.

use crate::core::catalog::Registry;
use crate::core::entry::{append_in_parens_if_not_empty, ContentBlock};
use crate::core::locale::LocaleEnvironment;
use crate::core::responsive::MISSING_VALUE;
use crate::schema::ids::TargetCategoryId;
use crate::schema::parameters::{TargetCategoryEntry, TargetCategoryIdentifier};
use crate::schema::static_data::TargetCategoryRecord;

fn target_category_name(
    target_categories: &Registry<TargetCategoryId, TargetCategoryRecord>,
    locale: &LocaleEnvironment,
    id: TargetCategoryIdentifier,
) -> String {
    match id {
        TargetCategoryIdentifier::Caster => locale.translate("Self"),
        TargetCategoryIdentifier::Zone => locale.translate("Zone"),
        TargetCategoryIdentifier::LiturgicalChantsAndCeremonies => {
            locale.translate("Liturgical Chants and Ceremonies")
        }
        TargetCategoryIdentifier::Cantrips => locale.translate("Cantrips"),
        TargetCategoryIdentifier::Predefined(id) => target_categories
            .get(&id)
            .and_then(|record| locale.translate_map(&record.translations))
            .map(|t| t.name.clone())
            .unwrap_or_else(|| MISSING_VALUE.to_string()),
    }
}

/// Renders the target category line. An empty list means the entity may
/// target anything.
pub fn target_category_section(
    target_categories: &Registry<TargetCategoryId, TargetCategoryRecord>,
    locale: &LocaleEnvironment,
    values: &[TargetCategoryEntry],
) -> ContentBlock {
    let value = if values.is_empty() {
        locale.translate("all")
    } else {
        values
            .iter()
            .map(|entry| {
                let name = target_category_name(target_categories, locale, entry.id);
                let note = locale
                    .translate_map(&entry.translations)
                    .and_then(|t| t.note.as_deref())
                    .unwrap_or("");
                append_in_parens_if_not_empty(note, name)
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    ContentBlock::labeled(locale.translate("Target Category"), value)
}
