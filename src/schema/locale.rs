//! Locale identifiers and locale-keyed maps.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// An IETF-style locale identifier, e.g. `"en-US"` or `"de-DE"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleId(pub String);

impl LocaleId {
    pub fn new(id: impl Into<String>) -> Self {
        LocaleId(id.into())
    }
}

impl Default for LocaleId {
    fn default() -> Self {
        LocaleId::new("en-US")
    }
}

impl From<&str> for LocaleId {
    fn from(id: &str) -> Self {
        LocaleId(id.to_string())
    }
}

/// A value keyed by locale. Resolution (including fallback policy) is done
/// by [`crate::core::locale::LocaleEnvironment::translate_map`].
pub type LocaleMap<T> = FxHashMap<LocaleId, T>;
