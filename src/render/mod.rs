//! Per-entity-kind renderers. Every renderer resolves an entity's
//! translations and cross-references into a [`crate::core::entry::LibraryEntry`],
//! returning `None` when the entity has no translation for the locale.

pub mod activatable;
pub mod blessed;
pub mod combat;
pub mod rules;
pub mod skill;
pub mod spellwork;

pub use blessed::{render_blessing, render_ceremony, render_liturgical_chant};
pub use combat::{render_close_combat_technique, render_ranged_combat_technique};
pub use rules::{render_experience_level, render_focus_rule, render_optional_rule};
pub use skill::render_skill;
pub use spellwork::{render_cantrip, render_ritual, render_spell};
