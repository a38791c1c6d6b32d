//! Rendering of publication references into a single display string.

use crate::core::catalog::Registry;
use crate::core::locale::LocaleEnvironment;
use crate::core::page::{normalize_page_ranges, print_page_range, print_page_ranges};
use crate::schema::ids::PublicationId;
use crate::schema::source::{Occurrence, PageRange, PublicationRef, Revision};
use crate::schema::static_data::Publication;

fn print_initial(
    locale: &LocaleEnvironment,
    printing: Option<u32>,
    pages: &[PageRange],
) -> String {
    let ranges = print_page_ranges(locale, &normalize_page_ranges(pages));
    match printing {
        None => ranges,
        Some(printing) => format!(
            "{ranges} ({})",
            locale.translate_with("since the {0}. printing", &[&printing])
        ),
    }
}

fn print_revision(locale: &LocaleEnvironment, revision: &Revision) -> String {
    match revision {
        Revision::Since { printing, pages } => format!(
            "{} ({})",
            print_page_ranges(locale, &normalize_page_ranges(pages)),
            locale.translate_with("since the {0}. printing", &[printing])
        ),
        Revision::Deprecated { printing } => {
            locale.translate_with("removed in {0}. printing", &[printing])
        }
    }
}

/// Renders a list of publication references, separated by semicolons. A
/// reference whose publication or occurrences cannot be resolved for the
/// locale is dropped silently.
pub fn render_references(
    publications: &Registry<PublicationId, Publication>,
    locale: &LocaleEnvironment,
    references: &[PublicationRef],
) -> String {
    references
        .iter()
        .filter_map(|reference| {
            let publication = publications.get(&reference.id)?;
            let name = &locale.translate_map(&publication.translations)?.name;
            let occurrence = locale.translate_map(&reference.occurrences)?;

            let pages = match occurrence {
                Occurrence::Simple(simple) => {
                    print_page_range(locale, &PageRange::from(*simple))
                }
                Occurrence::List(list) => {
                    let ranges: Vec<PageRange> =
                        list.iter().copied().map(PageRange::from).collect();
                    print_page_ranges(locale, &normalize_page_ranges(&ranges))
                }
                Occurrence::Versioned(versioned) => {
                    let initial = print_initial(
                        locale,
                        versioned.initial.printing,
                        &versioned.initial.pages,
                    );
                    let mut parts = vec![initial];
                    parts.extend(
                        versioned
                            .revisions
                            .iter()
                            .map(|revision| print_revision(locale, revision)),
                    );
                    parts.join("; ")
                }
            };

            Some(format!("{name} {pages}"))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::locale::{LocaleId, LocaleMap};
    use crate::schema::source::{InitialOccurrence, SimpleOccurrence, VersionedOccurrence};
    use crate::schema::static_data::NameTranslation;

    const EN: &str = "en-US";

    fn publications() -> Registry<PublicationId, Publication> {
        let mut translations = LocaleMap::default();
        translations.insert(
            LocaleId::new(EN),
            NameTranslation { name: "Core Rules".to_string() },
        );
        [(PublicationId(1), Publication { translations })].into_iter().collect()
    }

    fn simple_ref(id: u64, first: u32, last: Option<u32>) -> PublicationRef {
        let mut occurrences = LocaleMap::default();
        occurrences.insert(
            LocaleId::new(EN),
            Occurrence::Simple(SimpleOccurrence { first_page: first, last_page: last }),
        );
        PublicationRef { id: PublicationId(id), occurrences }
    }

    #[test]
    fn simple_occurrence_renders_name_and_pages() {
        let locale = LocaleEnvironment::new(EN);
        assert_eq!(
            render_references(&publications(), &locale, &[simple_ref(1, 12, Some(15))]),
            "Core Rules 12–15"
        );
    }

    #[test]
    fn unresolvable_references_are_dropped() {
        let locale = LocaleEnvironment::new(EN);
        // Publication 2 is not in the registry.
        assert_eq!(
            render_references(
                &publications(),
                &locale,
                &[simple_ref(2, 3, None), simple_ref(1, 7, None)]
            ),
            "Core Rules 7"
        );
    }

    #[test]
    fn occurrence_missing_for_locale_drops_reference() {
        let locale = LocaleEnvironment::new("de-DE");
        assert_eq!(
            render_references(&publications(), &locale, &[simple_ref(1, 12, Some(15))]),
            ""
        );
    }

    #[test]
    fn list_occurrences_are_normalized() {
        let mut occurrences = LocaleMap::default();
        occurrences.insert(
            LocaleId::new(EN),
            Occurrence::List(vec![
                SimpleOccurrence { first_page: 1, last_page: Some(3) },
                SimpleOccurrence { first_page: 4, last_page: None },
                SimpleOccurrence { first_page: 7, last_page: Some(8) },
            ]),
        );
        let reference = PublicationRef { id: PublicationId(1), occurrences };

        let locale = LocaleEnvironment::new(EN);
        assert_eq!(
            render_references(&publications(), &locale, &[reference]),
            "Core Rules 1–4, 7–8"
        );
    }

    #[test]
    fn versioned_occurrence_lists_printings() {
        let mut occurrences = LocaleMap::default();
        occurrences.insert(
            LocaleId::new(EN),
            Occurrence::Versioned(VersionedOccurrence {
                initial: InitialOccurrence {
                    printing: None,
                    pages: vec![PageRange::single(crate::schema::source::Page::Numbered(21))],
                },
                revisions: vec![
                    Revision::Since {
                        printing: 3,
                        pages: vec![PageRange::single(crate::schema::source::Page::Numbered(24))],
                    },
                    Revision::Deprecated { printing: 5 },
                ],
            }),
        );
        let reference = PublicationRef { id: PublicationId(1), occurrences };

        let locale = LocaleEnvironment::new(EN);
        assert_eq!(
            render_references(&publications(), &locale, &[reference]),
            "Core Rules 21; 24 (since the 3. printing); removed in 5. printing"
        );
    }

    #[test]
    fn multiple_references_join_with_semicolons() {
        let mut registry = publications();
        let mut translations = LocaleMap::default();
        translations.insert(
            LocaleId::new(EN),
            NameTranslation { name: "Magic I".to_string() },
        );
        registry.insert(PublicationId(2), Publication { translations });

        let locale = LocaleEnvironment::new(EN);
        assert_eq!(
            render_references(
                &registry,
                &locale,
                &[simple_ref(1, 12, Some(15)), simple_ref(2, 100, None)]
            ),
            "Core Rules 12–15; Magic I 100"
        );
    }
}
