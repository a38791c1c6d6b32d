//! The formatting runtime: locale environment, responsive-text dispatch,
//! unit formatters, page-range normalization, reference rendering, and the
//! tagged-union dispatchers for rules parameters.

pub mod casting_time;
pub mod catalog;
pub mod check;
pub mod cost;
pub mod duration;
pub mod entry;
pub mod kind;
pub mod locale;
pub mod page;
pub mod range;
pub mod references;
pub mod responsive;
pub mod target;
pub mod units;
