//! Data types consumed by the renderers. All types here are plain,
//! immutable records with serde derives; no logic beyond small accessors.

pub mod entities;
pub mod ids;
pub mod locale;
pub mod parameters;
pub mod source;
pub mod static_data;
