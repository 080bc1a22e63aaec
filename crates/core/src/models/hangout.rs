//! Hangout model - the core gathering unit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Participant, ParticipantRole, UserProfile};

/// Where a hangout came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HangoutKind {
    /// Free-form, user-initiated
    Community,
    /// Attached to a venue offer
    Offer,
    /// Attached to a public event
    EventLinked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HangoutStatus {
    Active,
    Full,
    /// Terminal; set by explicit host action, never by capacity
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    InviteOnly,
}

/// A concrete meeting place, revealed per-viewer once approved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
}

/// A user-created gathering with a fixed time, capacity, and host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hangout {
    pub id: Uuid,
    pub kind: HangoutKind,
    pub title: String,
    pub description: String,
    pub vibe: Vec<String>,
    pub time: DateTime<Utc>,
    /// Maximum participants including the host
    pub capacity: u32,
    /// Maintained alongside participants; always equals
    /// `capacity - |{Host, Approved}|`
    pub spots_left: u32,
    pub host_id: Uuid,
    pub host_name: String,
    pub location: Option<Location>,
    /// When true, only the host and approved participants see the location
    pub location_locked: bool,
    pub visibility: Visibility,
    pub plan: Vec<String>,
    pub group_tags: Vec<String>,
    pub languages: Vec<String>,
    pub participants: Vec<Participant>,
    pub status: HangoutStatus,
    pub created_at: DateTime<Utc>,
}

/// Host-supplied fields for creating a hangout
#[derive(Debug, Clone)]
pub struct NewHangout {
    pub kind: HangoutKind,
    pub title: String,
    pub description: String,
    pub vibe: Vec<String>,
    pub time: DateTime<Utc>,
    pub capacity: u32,
    pub visibility: Visibility,
    pub location: Option<Location>,
    pub location_locked: bool,
    pub plan: Vec<String>,
    pub group_tags: Vec<String>,
    pub languages: Vec<String>,
}

impl NewHangout {
    pub fn new(title: impl Into<String>, time: DateTime<Utc>, capacity: u32) -> Self {
        Self {
            kind: HangoutKind::Community,
            title: title.into(),
            description: String::new(),
            vibe: Vec::new(),
            time,
            capacity,
            visibility: Visibility::Public,
            location: None,
            location_locked: true,
            plan: Vec::new(),
            group_tags: Vec::new(),
            languages: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_vibe(mut self, vibe: Vec<String>) -> Self {
        self.vibe = vibe;
        self
    }

    pub fn with_location(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.location = Some(Location {
            name: name.into(),
            address: address.into(),
        });
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_kind(mut self, kind: HangoutKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_plan(mut self, plan: Vec<String>) -> Self {
        self.plan = plan;
        self
    }
}

impl Hangout {
    /// Construct from an already-validated draft. Validation lives in
    /// `Store::create_hangout`, which is the only caller outside tests.
    pub(crate) fn from_draft(host: &UserProfile, draft: NewHangout) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: draft.kind,
            title: draft.title,
            description: draft.description,
            vibe: draft.vibe,
            time: draft.time,
            capacity: draft.capacity,
            spots_left: draft.capacity - 1,
            host_id: host.id,
            host_name: host.name.clone(),
            location: draft.location,
            location_locked: draft.location_locked,
            visibility: draft.visibility,
            plan: draft.plan,
            group_tags: draft.group_tags,
            languages: draft.languages,
            participants: vec![Participant::new(host.id, host.name.clone(), ParticipantRole::Host)],
            status: HangoutStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn participant(&self, user_id: Uuid) -> Option<&Participant> {
        self.participants.iter().find(|p| p.user_id == user_id)
    }

    pub(crate) fn participant_mut(&mut self, user_id: Uuid) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.user_id == user_id)
    }

    /// Number of occupied spots (host + approved)
    pub fn occupied(&self) -> u32 {
        self.participants
            .iter()
            .filter(|p| p.role.occupies_spot())
            .count() as u32
    }

    pub fn is_full(&self) -> bool {
        self.status == HangoutStatus::Full
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == HangoutStatus::Cancelled
    }

    /// The location as seen by `viewer_id`.
    ///
    /// A locked location is revealed only to the host and approved
    /// participants; pending requesters and outsiders see nothing.
    pub fn location_for(&self, viewer_id: Uuid) -> Option<&Location> {
        if !self.location_locked {
            return self.location.as_ref();
        }

        match self.participant(viewer_id) {
            Some(p) if p.role.occupies_spot() => self.location.as_ref(),
            _ => None,
        }
    }
}
