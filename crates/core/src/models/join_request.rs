//! Join request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// A user's request to join a hangout, subject to host approval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequest {
    pub id: Uuid,
    pub hangout_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl JoinRequest {
    pub fn new(hangout_id: Uuid, user_id: Uuid, user_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            hangout_id,
            user_id,
            user_name: user_name.into(),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Pending and Approved requests block a duplicate request by the same
    /// user; a Rejected one does not.
    pub fn is_open(&self) -> bool {
        matches!(self.status, RequestStatus::Pending | RequestStatus::Approved)
    }
}
