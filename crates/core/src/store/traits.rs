//! Store repository trait
//!
//! Defines the participation interface, allowing for different
//! implementations (in-memory today, a persistence-backed store later)
//! without touching call sites.

use uuid::Uuid;

use crate::error::Result;
use crate::models::{Hangout, JoinRequest, NewHangout, UserProfile};

use super::Store;

/// Hangout repository operations
pub trait HangoutRepository {
    /// Create a new hangout hosted by `host`
    fn create_hangout(&mut self, host: &UserProfile, draft: NewHangout) -> Result<Hangout>;

    /// Find a hangout by id
    fn find_hangout(&self, id: Uuid) -> Result<Hangout>;

    /// List all hangouts, newest first
    fn list_hangouts(&self) -> Vec<Hangout>;

    /// Ask to join a hangout
    fn request_to_join(&mut self, hangout_id: Uuid, user: &UserProfile) -> Result<JoinRequest>;

    /// Approve a pending request (host only)
    fn approve_request(&mut self, hangout_id: Uuid, caller_id: Uuid, request_id: Uuid)
        -> Result<()>;

    /// Decline a pending request (host only)
    fn decline_request(&mut self, hangout_id: Uuid, caller_id: Uuid, request_id: Uuid)
        -> Result<()>;

    /// Withdraw one's own pending request
    fn cancel_request(&mut self, hangout_id: Uuid, user_id: Uuid) -> Result<()>;

    /// Leave a hangout as an approved participant
    fn leave_hangout(&mut self, hangout_id: Uuid, user_id: Uuid) -> Result<()>;

    /// Cancel a hangout (host only, terminal)
    fn cancel_hangout(&mut self, hangout_id: Uuid, caller_id: Uuid) -> Result<()>;

    /// List requests still awaiting host action, oldest first
    fn list_pending_requests(&self, hangout_id: Uuid) -> Vec<JoinRequest>;
}

impl HangoutRepository for Store {
    fn create_hangout(&mut self, host: &UserProfile, draft: NewHangout) -> Result<Hangout> {
        Store::create_hangout(self, host, draft)
    }

    fn find_hangout(&self, id: Uuid) -> Result<Hangout> {
        self.hangout(id).cloned()
    }

    fn list_hangouts(&self) -> Vec<Hangout> {
        self.hangouts().into_iter().cloned().collect()
    }

    fn request_to_join(&mut self, hangout_id: Uuid, user: &UserProfile) -> Result<JoinRequest> {
        Store::request_to_join(self, hangout_id, user)
    }

    fn approve_request(
        &mut self,
        hangout_id: Uuid,
        caller_id: Uuid,
        request_id: Uuid,
    ) -> Result<()> {
        Store::approve_request(self, hangout_id, caller_id, request_id)
    }

    fn decline_request(
        &mut self,
        hangout_id: Uuid,
        caller_id: Uuid,
        request_id: Uuid,
    ) -> Result<()> {
        Store::decline_request(self, hangout_id, caller_id, request_id)
    }

    fn cancel_request(&mut self, hangout_id: Uuid, user_id: Uuid) -> Result<()> {
        Store::cancel_request(self, hangout_id, user_id)
    }

    fn leave_hangout(&mut self, hangout_id: Uuid, user_id: Uuid) -> Result<()> {
        Store::leave_hangout(self, hangout_id, user_id)
    }

    fn cancel_hangout(&mut self, hangout_id: Uuid, caller_id: Uuid) -> Result<()> {
        Store::cancel_hangout(self, hangout_id, caller_id)
    }

    fn list_pending_requests(&self, hangout_id: Uuid) -> Vec<JoinRequest> {
        self.pending_requests(hangout_id)
            .into_iter()
            .cloned()
            .collect()
    }
}
