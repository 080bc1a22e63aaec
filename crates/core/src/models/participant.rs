//! Participant and role models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's role within a single hangout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantRole {
    /// The creator; implicitly approved, never re-assigned
    Host,
    /// Request approved by the host
    Approved,
    /// Requested to join, awaiting host action
    Pending,
}

impl ParticipantRole {
    /// Only Host and Approved occupy a spot; Pending does not
    pub fn occupies_spot(&self) -> bool {
        matches!(self, ParticipantRole::Host | ParticipantRole::Approved)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ParticipantRole::Host => "Host",
            ParticipantRole::Approved => "Going",
            ParticipantRole::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A user's entry in a hangout's participant list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: Uuid,
    pub display_name: String,
    pub role: ParticipantRole,
}

impl Participant {
    pub fn new(user_id: Uuid, display_name: impl Into<String>, role: ParticipantRole) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            role,
        }
    }
}
