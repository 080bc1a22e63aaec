//! Huddle Core Library
//!
//! The hangout participation model: hangouts, join requests, capacity
//! bookkeeping, and the pure view logic (viewer state, countdowns, feeds)
//! every screen shares.

pub mod error;
pub mod feed;
pub mod invariants;
pub mod models;
pub mod schedule;
pub mod seed;
pub mod store;
pub mod viewer;

pub use error::{Error, Result};
pub use feed::{discovery_feed, my_plans, PlanEntry, PlanTab, TimeFilter};
pub use models::*;
pub use schedule::{countdown_label, phase, Phase};
pub use seed::{seed_demo, SeedData};
pub use store::{HangoutRepository, Store};
pub use viewer::{call_to_action, derive_viewer_state, CallToAction, ViewerState};
