//! Static-data storage: typed id-keyed registries and the catalog bundle
//! renderers resolve cross-references against.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use std::path::Path;
use thiserror::Error;

use crate::schema::ids::{
    AspectId, AttributeId, BlessedTraditionId, CurriculumId, DiseaseId, MagicalTraditionId,
    PropertyId, PublicationId, RegionId, SkillModificationLevelId, SubjectId, TargetCategoryId,
};
use crate::schema::static_data::{
    Aspect, Attribute, BlessedTradition, Curriculum, DerivedCharacteristic, Disease,
    MagicalTradition, Property, Publication, Region, SkillModificationLevel, Subject,
    TargetCategoryRecord,
};

/// Errors produced while loading a catalog or translation table.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// An id-keyed collection of static-data records.
///
/// Lookups return `None` for unknown ids; renderers substitute a
/// placeholder instead of failing, so a stale cross-reference degrades a
/// single value rather than the whole entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry<Id: Eq + Hash, T> {
    entries: FxHashMap<Id, T>,
}

impl<Id: Eq + Hash, T> Registry<Id, T> {
    pub fn get(&self, id: &Id) -> Option<&T> {
        self.entries.get(id)
    }

    pub fn insert(&mut self, id: Id, value: T) -> Option<T> {
        self.entries.insert(id, value)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<Id: Eq + Hash, T> Default for Registry<Id, T> {
    fn default() -> Self {
        Registry { entries: FxHashMap::default() }
    }
}

impl<Id: Eq + Hash, T> FromIterator<(Id, T)> for Registry<Id, T> {
    fn from_iter<I: IntoIterator<Item = (Id, T)>>(iter: I) -> Self {
        Registry { entries: iter.into_iter().collect() }
    }
}

/// All static data the renderers resolve cross-references against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub publications: Registry<PublicationId, Publication>,
    #[serde(default)]
    pub attributes: Registry<AttributeId, Attribute>,
    #[serde(default)]
    pub properties: Registry<PropertyId, Property>,
    #[serde(default)]
    pub target_categories: Registry<TargetCategoryId, TargetCategoryRecord>,
    #[serde(default)]
    pub magical_traditions: Registry<MagicalTraditionId, MagicalTradition>,
    #[serde(default)]
    pub blessed_traditions: Registry<BlessedTraditionId, BlessedTradition>,
    #[serde(default)]
    pub aspects: Registry<AspectId, Aspect>,
    #[serde(default)]
    pub curricula: Registry<CurriculumId, Curriculum>,
    #[serde(default)]
    pub subjects: Registry<SubjectId, Subject>,
    #[serde(default)]
    pub skill_modification_levels: Registry<SkillModificationLevelId, SkillModificationLevel>,
    #[serde(default)]
    pub diseases: Registry<DiseaseId, Disease>,
    #[serde(default)]
    pub regions: Registry<RegionId, Region>,
    /// The Spirit derived characteristic, used for check penalty phrasing.
    #[serde(default)]
    pub spirit: Option<DerivedCharacteristic>,
    /// The Toughness derived characteristic, used for check penalty phrasing.
    #[serde(default)]
    pub toughness: Option<DerivedCharacteristic>,
}

impl Catalog {
    /// Loads a catalog from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Catalog, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Catalog::parse_ron(&contents)
    }

    /// Parses a catalog from a RON string.
    pub fn parse_ron(contents: &str) -> Result<Catalog, CatalogError> {
        Ok(ron::from_str(contents)?)
    }
}
