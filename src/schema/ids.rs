//! Newtype wrappers for static-data record ids.
//!
//! Each cross-referenced table gets its own id type so a publication id
//! cannot be handed to an attribute lookup by accident.

use serde::{Deserialize, Serialize};

/// Newtype wrapper for publication ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicationId(pub u64);

/// Newtype wrapper for attribute ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeId(pub u64);

/// Newtype wrapper for property ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub u64);

/// Newtype wrapper for target category ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetCategoryId(pub u64);

/// Newtype wrapper for magical tradition ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MagicalTraditionId(pub u64);

/// Newtype wrapper for blessed tradition ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlessedTraditionId(pub u64);

/// Newtype wrapper for aspect ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectId(pub u64);

/// Newtype wrapper for curriculum ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurriculumId(pub u64);

/// Newtype wrapper for focus rule subject ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(pub u64);

/// Newtype wrapper for skill modification level ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillModificationLevelId(pub u64);

/// Newtype wrapper for disease ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiseaseId(pub u64);

/// Newtype wrapper for region ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u64);
