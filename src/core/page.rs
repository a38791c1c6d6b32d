//! Page-range printing and normalization.

use crate::core::locale::LocaleEnvironment;
use crate::schema::source::{Page, PageRange};

/// Prints a single page.
pub fn print_page(locale: &LocaleEnvironment, page: Page) -> String {
    match page {
        Page::InsideCoverFront => locale.translate("Front Cover Inside"),
        Page::InsideCoverBack => locale.translate("Back Cover Inside"),
        Page::Numbered(n) => n.to_string(),
    }
}

/// Prints a page range, joining first and last page with an en dash.
pub fn print_page_range(locale: &LocaleEnvironment, range: &PageRange) -> String {
    match range.last {
        None => print_page(locale, range.first),
        Some(last) => format!("{}–{}", print_page(locale, range.first), print_page(locale, last)),
    }
}

/// Prints a list of page ranges separated by commas.
pub fn print_page_ranges(locale: &LocaleEnvironment, ranges: &[PageRange]) -> String {
    ranges
        .iter()
        .map(|range| print_page_range(locale, range))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sorts and merges page ranges, removing duplicates. Numbered ranges are
/// expanded into their pages, so overlapping and adjacent ranges collapse
/// into one.
pub fn normalize_page_ranges(ranges: &[PageRange]) -> Vec<PageRange> {
    let mut pages: Vec<Page> = Vec::new();
    for range in ranges {
        let first = range.first;
        let last = range.last.unwrap_or(first);
        match (first, last) {
            (Page::Numbered(a), Page::Numbered(b)) => {
                pages.extend((a..=b).map(Page::Numbered));
            }
            _ => {
                pages.push(first);
                pages.push(last);
            }
        }
    }

    pages.sort_unstable();
    pages.dedup();

    let mut merged: Vec<PageRange> = Vec::new();
    for page in pages {
        match merged.last_mut() {
            Some(range) if range.last.unwrap_or(range.first).succ() == Some(page) => {
                range.last = Some(page);
            }
            _ => merged.push(PageRange::single(page)),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(first: u32, last: u32) -> PageRange {
        PageRange::new(Page::Numbered(first), Page::Numbered(last))
    }

    fn single(page: u32) -> PageRange {
        PageRange::single(Page::Numbered(page))
    }

    #[test]
    fn prints_numbered_range_with_en_dash() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(print_page_range(&locale, &numbered(12, 15)), "12–15");
        assert_eq!(print_page_range(&locale, &single(7)), "7");
    }

    #[test]
    fn prints_cover_pages_by_name() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(print_page(&locale, Page::InsideCoverFront), "Front Cover Inside");
        assert_eq!(print_page(&locale, Page::InsideCoverBack), "Back Cover Inside");
    }

    #[test]
    fn prints_multiple_ranges_comma_separated() {
        let locale = LocaleEnvironment::new("en-US");
        assert_eq!(
            print_page_ranges(&locale, &[numbered(1, 4), single(7)]),
            "1–4, 7"
        );
    }

    #[test]
    fn adjacent_ranges_merge() {
        assert_eq!(
            normalize_page_ranges(&[numbered(1, 3), single(4), numbered(7, 8)]),
            vec![numbered(1, 4), numbered(7, 8)]
        );
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(normalize_page_ranges(&[single(5), single(5)]), vec![single(5)]);
    }

    #[test]
    fn overlapping_ranges_merge() {
        assert_eq!(
            normalize_page_ranges(&[numbered(2, 6), numbered(4, 9)]),
            vec![numbered(2, 9)]
        );
    }

    #[test]
    fn unsorted_input_is_sorted() {
        assert_eq!(
            normalize_page_ranges(&[single(9), numbered(1, 2), single(4)]),
            vec![numbered(1, 2), single(4), single(9)]
        );
    }

    #[test]
    fn empty_input_normalizes_to_empty() {
        assert_eq!(normalize_page_ranges(&[]), vec![]);
    }

    #[test]
    fn normalizing_twice_is_a_no_op() {
        let once = normalize_page_ranges(&[single(9), numbered(1, 2), single(4)]);
        assert_eq!(normalize_page_ranges(&once), once);
    }

    #[test]
    fn cover_pages_stay_separate_ranges() {
        let ranges = normalize_page_ranges(&[
            PageRange::single(Page::InsideCoverBack),
            PageRange::single(Page::InsideCoverFront),
            numbered(3, 4),
        ]);
        assert_eq!(
            ranges,
            vec![
                PageRange::single(Page::InsideCoverFront),
                numbered(3, 4),
                PageRange::single(Page::InsideCoverBack),
            ]
        );
    }

    #[test]
    fn front_cover_merges_with_page_one() {
        assert_eq!(
            normalize_page_ranges(&[PageRange::single(Page::InsideCoverFront), numbered(1, 2)]),
            vec![PageRange::new(Page::InsideCoverFront, Page::Numbered(2))]
        );
    }
}
