//! Hangout detail view model

use chrono::{DateTime, Utc};
use huddle_core::{call_to_action, countdown_label, CallToAction, Result, Store};
use uuid::Uuid;

use super::spots_badge;

/// A confirmed attendee row ("Who's going")
#[derive(Debug, Clone)]
pub struct AttendeeView {
    pub user_id: Uuid,
    pub name: String,
    pub role_label: String,
}

/// A pending request row, shown to the host only
#[derive(Debug, Clone)]
pub struct RequestRow {
    pub request_id: Uuid,
    pub user_name: String,
    pub requested_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DetailView {
    pub hangout_id: Uuid,
    pub title: String,
    pub description: String,
    pub vibe: Vec<String>,
    pub host_name: String,
    pub countdown: String,
    /// "4/6" style occupancy
    pub occupancy: String,
    pub spots_badge: String,
    pub attendees: Vec<AttendeeView>,
    /// Empty unless the viewer is the host
    pub pending_requests: Vec<RequestRow>,
    pub location_name: Option<String>,
    pub location_address: Option<String>,
    pub cta: CallToAction,
}

pub fn hangout_detail(
    store: &Store,
    hangout_id: Uuid,
    viewer_id: Uuid,
    now: DateTime<Utc>,
) -> Result<DetailView> {
    let hangout = store.hangout(hangout_id)?;

    let attendees = hangout
        .participants
        .iter()
        .filter(|p| p.role.occupies_spot())
        .map(|p| AttendeeView {
            user_id: p.user_id,
            name: p.display_name.clone(),
            role_label: p.role.display_name().to_string(),
        })
        .collect();

    let pending_requests = if hangout.host_id == viewer_id {
        store
            .pending_requests(hangout_id)
            .into_iter()
            .map(|r| RequestRow {
                request_id: r.id,
                user_name: r.user_name.clone(),
                requested_at: r.created_at,
            })
            .collect()
    } else {
        Vec::new()
    };

    let location = hangout.location_for(viewer_id);

    Ok(DetailView {
        hangout_id,
        title: hangout.title.clone(),
        description: hangout.description.clone(),
        vibe: hangout.vibe.clone(),
        host_name: hangout.host_name.clone(),
        countdown: countdown_label(hangout.time, now),
        occupancy: format!("{}/{}", hangout.occupied(), hangout.capacity),
        spots_badge: spots_badge(hangout),
        attendees,
        pending_requests,
        location_name: location.map(|l| l.name.clone()),
        location_address: location.map(|l| l.address.clone()),
        cta: call_to_action(hangout, viewer_id, now),
    })
}
