//! Huddle - hangout discovery prototype
//!
//! A scripted walkthrough of the participation model: seed a store, browse
//! the discovery feed, request to join, approve as the host, and show the
//! plans screen. The real UI is a thin layer over exactly these calls.

use chrono::Utc;
use huddle_core::{discovery_feed, seed_demo, PlanTab};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod state;
mod viewmodel;

use state::AppState;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Huddle");

    let now = Utc::now();
    let app = AppState::new();

    let seed = match app.with_store(|store| seed_demo(store, now)) {
        Ok(seed) => seed,
        Err(e) => {
            tracing::error!("Failed to seed demo data: {}", e);
            std::process::exit(1);
        }
    };

    let you = seed.you.clone();
    app.set_current_user(Some(you.clone()));
    tracing::info!(user = %you.name, "signed in");

    println!("== Discovery ==");
    {
        let store = app.store.lock().unwrap();
        for hangout in discovery_feed(&store, Some(you.id), now) {
            let card = viewmodel::hangout_card(hangout, you.id, now);
            println!(
                "  {:<22} {} · {} · {} · {:?}",
                card.title, card.host_name, card.time_badge, card.spots_badge, card.cta
            );
        }
    }

    // Ask to join the coffee hangout
    let coffee_id = seed.hangout_ids[0];
    let request = match app.with_store(|store| store.request_to_join(coffee_id, &you)) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("Join request failed: {}", e);
            std::process::exit(1);
        }
    };

    // Sarah reviews her requests and approves
    let sarah = &seed.hosts[0];
    {
        let store = app.store.lock().unwrap();
        let hosts_view = viewmodel::hangout_detail(&store, coffee_id, sarah.id, now)
            .expect("seeded hangout exists");
        println!(
            "\n== {}'s view: {} pending request(s) ==",
            sarah.name,
            hosts_view.pending_requests.len()
        );
        for row in &hosts_view.pending_requests {
            println!("  {} wants to join", row.user_name);
        }
    }

    if let Err(e) = app.with_store(|store| store.approve_request(coffee_id, sarah.id, request.id)) {
        tracing::error!("Approval failed: {}", e);
        std::process::exit(1);
    }

    // Approved: location unlocks, chat opens
    {
        let store = app.store.lock().unwrap();
        let view = viewmodel::hangout_detail(&store, coffee_id, you.id, now)
            .expect("seeded hangout exists");
        println!("\n== You're in: {} ==", view.title);
        println!("  Starts {} at {}", view.countdown, view.location_name.as_deref().unwrap_or("TBD"));
        println!("  Going: {} ({})", view.attendees.len(), view.occupancy);
    }

    println!("\n== Your plans ==");
    {
        let store = app.store.lock().unwrap();
        for row in viewmodel::plans_tab(&store, you.id, PlanTab::Upcoming, now) {
            println!("  {:<22} {} · {}", row.title, row.time_badge, row.status_label);
        }
    }
}
