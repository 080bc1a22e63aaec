//! Demo seed data
//!
//! In-memory fixtures for the demo app and scenario tests. This is what a
//! backend would eventually provide; the profiles and hangouts mirror the
//! prototype's mock catalogue.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{HangoutKind, NewHangout, UserProfile, Visibility};
use crate::store::Store;

/// Handles into the seeded store
pub struct SeedData {
    /// The signed-in profile the demo drives
    pub you: UserProfile,
    pub hosts: Vec<UserProfile>,
    pub hangout_ids: Vec<Uuid>,
}

/// Populate a store with a plausible evening of hangouts around `now`.
pub fn seed_demo(store: &mut Store, now: DateTime<Utc>) -> Result<SeedData> {
    let you = UserProfile::new("Alex Chen")
        .with_bio("Coffee enthusiast, runner, always down for good conversations")
        .with_interests(vec![
            "Coffee".into(),
            "Running".into(),
            "Tech".into(),
            "Photography".into(),
            "Books".into(),
        ])
        .with_vibe(vec!["Chill".into(), "Curious".into(), "Active".into()])
        .with_languages(vec!["English".into(), "Mandarin".into()]);

    let sarah = UserProfile::new("Sarah Chen")
        .with_bio("Coffee enthusiast & conversation starter");
    let maya = UserProfile::new("Maya Patel").with_bio("Weekend explorer, amateur photographer");
    let jordan = UserProfile::new("Jordan Lee").with_bio("Board game collector, bad loser");

    let coffee = store.create_hangout(
        &sarah,
        NewHangout::new("Coffee & Deep Convos", now + Duration::hours(3), 6)
            .with_description(
                "Let's grab coffee and have meaningful conversations. No small talk.",
            )
            .with_vibe(vec!["Deep Talks".into(), "Chill".into(), "Authentic".into()])
            .with_location("Blue Bottle Coffee", "66 Mint St, San Francisco")
            .with_plan(vec!["Meet up".into(), "Order".into(), "Talk".into()]),
    )?;

    let run = store.create_hangout(
        &maya,
        NewHangout::new("Sunset Run Club", now + Duration::days(1), 5)
            .with_description("Easy 5k along the water, all paces welcome.")
            .with_vibe(vec!["Active".into(), "Social".into()])
            .with_location("Marina Green", "Marina Blvd, San Francisco"),
    )?;

    let games = store.create_hangout(
        &jordan,
        NewHangout::new("Board Game Night", now + Duration::hours(6), 4)
            .with_description("Catan, Wingspan, and whatever else fits on the table.")
            .with_vibe(vec!["Cozy".into(), "Competitive".into()])
            .with_visibility(Visibility::InviteOnly)
            .with_location("Jordan's place", "Shared after approval"),
    )?;

    let gallery = store.create_hangout(
        &maya,
        NewHangout::new("Gallery Walk", now + Duration::days(3), 8)
            .with_kind(HangoutKind::EventLinked)
            .with_description("First-Thursday open galleries, then tacos.")
            .with_vibe(vec!["Artsy".into(), "Chill".into()]),
    )?;

    Ok(SeedData {
        you,
        hosts: vec![sarah, maya, jordan],
        hangout_ids: vec![coffee.id, run.id, games.id, gallery.id],
    })
}
