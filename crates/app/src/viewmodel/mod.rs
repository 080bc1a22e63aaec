//! View models
//!
//! Pure builders that turn store snapshots into display rows. All the
//! derived UI state (badges, call-to-action, countdowns) comes from the
//! core's shared functions, so every screen agrees.

mod cards;
mod detail;
mod plans;

pub use cards::*;
pub use detail::*;
pub use plans::*;
