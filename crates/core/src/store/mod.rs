//! In-memory store for hangouts and join requests
//!
//! The store is the single source of truth; every mutation goes through the
//! participation operations rather than ad-hoc field writes. Callers that
//! share a store across threads wrap it in `Arc<Mutex<Store>>`, which
//! serializes all mutations and keeps the spots-left bookkeeping race-free.

mod participation;
mod traits;

use std::collections::HashMap;

use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::invariants;
use crate::models::{Hangout, JoinRequest, NewHangout, RequestStatus, UserProfile};

pub use traits::HangoutRepository;

/// Process-wide collection of hangouts and their join requests
#[derive(Debug, Default)]
pub struct Store {
    hangouts: HashMap<Uuid, Hangout>,
    requests: HashMap<Uuid, JoinRequest>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hangout hosted by `host`.
    ///
    /// The host occupies the first spot, so `capacity` must leave room for
    /// at least one guest. Past times are accepted; scheduling policy is the
    /// caller's concern.
    pub fn create_hangout(&mut self, host: &UserProfile, draft: NewHangout) -> Result<Hangout> {
        if draft.capacity < 2 {
            return Err(Error::validation(
                "capacity",
                "must allow at least one guest beyond the host",
            ));
        }
        if draft.title.trim().is_empty() {
            return Err(Error::validation("title", "must not be empty"));
        }

        let hangout = Hangout::from_draft(host, draft);
        invariants::assert_hangout_invariants(&hangout);

        info!(hangout_id = %hangout.id, host = %host.name, title = %hangout.title, "hangout created");

        self.hangouts.insert(hangout.id, hangout.clone());
        Ok(hangout)
    }

    /// Look up a hangout by id
    pub fn hangout(&self, id: Uuid) -> Result<&Hangout> {
        self.hangouts.get(&id).ok_or(Error::HangoutNotFound)
    }

    /// All hangouts, newest first
    pub fn hangouts(&self) -> Vec<&Hangout> {
        let mut all: Vec<&Hangout> = self.hangouts.values().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    /// Look up a join request by id
    pub fn request(&self, id: Uuid) -> Result<&JoinRequest> {
        self.requests.get(&id).ok_or(Error::RequestNotFound)
    }

    /// All requests against a hangout, oldest first
    pub fn requests_for(&self, hangout_id: Uuid) -> Vec<&JoinRequest> {
        let mut matching: Vec<&JoinRequest> = self
            .requests
            .values()
            .filter(|r| r.hangout_id == hangout_id)
            .collect();
        matching.sort_by_key(|r| r.created_at);
        matching
    }

    /// Requests still awaiting host action, oldest first
    pub fn pending_requests(&self, hangout_id: Uuid) -> Vec<&JoinRequest> {
        self.requests_for(hangout_id)
            .into_iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .collect()
    }

    /// The viewer's open (pending or approved) request for a hangout, if any
    pub fn open_request(&self, hangout_id: Uuid, user_id: Uuid) -> Option<&JoinRequest> {
        self.requests
            .values()
            .find(|r| r.hangout_id == hangout_id && r.user_id == user_id && r.is_open())
    }

    /// Read-only JSON snapshot of everything the store holds, for the
    /// presentation layer and debugging dumps.
    pub fn snapshot_json(&self) -> serde_json::Value {
        let mut requests: Vec<&JoinRequest> = self.requests.values().collect();
        requests.sort_by_key(|r| r.created_at);
        serde_json::json!({
            "hangouts": self.hangouts(),
            "requests": requests,
        })
    }

    fn hangout_mut(&mut self, id: Uuid) -> Result<&mut Hangout> {
        self.hangouts.get_mut(&id).ok_or(Error::HangoutNotFound)
    }
}
