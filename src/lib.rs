//! Codex Engine — rules-text rendering for tabletop RPGs.
//!
//! Turns structured entity records (spells, rituals, skills, combat
//! techniques, rules, …) into labeled, locale-aware library entries:
//! title, body sections, and printed source citations with normalized
//! page ranges. Every renderer is a pure, synchronous function from
//! `(entity, dependencies, locale)` to an optional [`core::entry::LibraryEntry`].

pub mod core;
pub mod render;
pub mod schema;
