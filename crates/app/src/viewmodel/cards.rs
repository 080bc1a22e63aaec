//! Hangout card view model

use chrono::{DateTime, Utc};
use huddle_core::{call_to_action, countdown_label, CallToAction, Hangout};
use uuid::Uuid;

/// Badge text for remaining capacity
pub fn spots_badge(hangout: &Hangout) -> String {
    match hangout.spots_left {
        0 => "Full".to_string(),
        1 => "1 spot left".to_string(),
        n => format!("{n} spots left"),
    }
}

/// One card on the discovery feed
#[derive(Debug, Clone)]
pub struct HangoutCardView {
    pub hangout_id: Uuid,
    pub title: String,
    pub host_name: String,
    pub vibe: Vec<String>,
    pub time_badge: String,
    pub spots_badge: String,
    pub location_line: Option<String>,
    pub cta: CallToAction,
}

pub fn hangout_card(hangout: &Hangout, viewer_id: Uuid, now: DateTime<Utc>) -> HangoutCardView {
    let location_line = hangout.location.as_ref().map(|_| {
        hangout
            .location_for(viewer_id)
            .map(|l| l.name.clone())
            .unwrap_or_else(|| "Location revealed after approval".to_string())
    });

    HangoutCardView {
        hangout_id: hangout.id,
        title: hangout.title.clone(),
        host_name: hangout.host_name.clone(),
        vibe: hangout.vibe.clone(),
        time_badge: countdown_label(hangout.time, now),
        spots_badge: spots_badge(hangout),
        location_line,
        cta: call_to_action(hangout, viewer_id, now),
    }
}
