//! Publication references: pages, page ranges, and occurrences.

use serde::{Deserialize, Serialize};

use super::ids::PublicationId;
use super::locale::LocaleMap;

/// A location in a publication.
///
/// The derived order is the total page order: the front inside cover
/// precedes every numbered page, the back inside cover follows every
/// numbered page, and numbered pages order by their number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Page {
    InsideCoverFront,
    Numbered(u32),
    InsideCoverBack,
}

impl Page {
    /// The page directly after this one. The back inside cover is the last
    /// page of a publication and has no successor.
    pub fn succ(self) -> Option<Page> {
        match self {
            Page::InsideCoverFront => Some(Page::Numbered(1)),
            Page::Numbered(n) => Some(Page::Numbered(n + 1)),
            Page::InsideCoverBack => None,
        }
    }
}

/// A range of pages. `last` is absent for a single-page range.
///
/// Invariant: if present, `last` does not precede `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub first: Page,
    #[serde(default)]
    pub last: Option<Page>,
}

impl PageRange {
    pub fn single(page: Page) -> Self {
        PageRange { first: page, last: None }
    }

    pub fn new(first: Page, last: Page) -> Self {
        PageRange { first, last: Some(last) }
    }
}

/// A contiguous range of numbered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleOccurrence {
    pub first_page: u32,
    #[serde(default)]
    pub last_page: Option<u32>,
}

impl From<SimpleOccurrence> for PageRange {
    fn from(occurrence: SimpleOccurrence) -> Self {
        PageRange {
            first: Page::Numbered(occurrence.first_page),
            last: occurrence.last_page.map(Page::Numbered),
        }
    }
}

/// Where an entity's rules text appears within one publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occurrence {
    /// A single contiguous page range.
    Simple(SimpleOccurrence),
    /// Multiple alternate instances.
    List(Vec<SimpleOccurrence>),
    /// Pages varying by print-run revision.
    Versioned(VersionedOccurrence),
}

/// An occurrence whose pages changed across printings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedOccurrence {
    pub initial: InitialOccurrence,
    #[serde(default)]
    pub revisions: Vec<Revision>,
}

/// The pages of the first occurrence, optionally tied to a specific printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialOccurrence {
    #[serde(default)]
    pub printing: Option<u32>,
    pub pages: Vec<PageRange>,
}

/// A change to an occurrence in a later printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Revision {
    /// The text appears at new pages since the given printing.
    Since { printing: u32, pages: Vec<PageRange> },
    /// The text was removed as of the given printing.
    Deprecated { printing: u32 },
}

/// A reference into a publication, with occurrences per locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRef {
    pub id: PublicationId,
    pub occurrences: LocaleMap<Occurrence>,
}
