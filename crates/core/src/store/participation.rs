//! Participation operations: request, approve, decline, withdraw, leave,
//! cancel
//!
//! Each operation validates completely before touching state, so a failure
//! leaves the store unchanged. Capacity is taken at approval time only; a
//! pending request never reserves a spot.

use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::invariants;
use crate::models::{
    HangoutStatus, JoinRequest, Participant, ParticipantRole, RequestStatus, UserProfile,
};

use super::Store;

impl Store {
    /// Ask to join a hangout.
    ///
    /// Adds a Pending request and a Pending participant entry together.
    /// `spots_left` is untouched; it only moves on approval.
    pub fn request_to_join(&mut self, hangout_id: Uuid, user: &UserProfile) -> Result<JoinRequest> {
        let hangout = self.hangout(hangout_id)?;

        if hangout.is_cancelled() {
            return Err(Error::HangoutClosed);
        }
        if hangout.host_id == user.id {
            return Err(Error::validation(
                "user",
                "host cannot request to join their own hangout",
            ));
        }
        if self.open_request(hangout_id, user.id).is_some() {
            return Err(Error::AlreadyRequested);
        }
        if hangout.is_full() || hangout.spots_left == 0 {
            return Err(Error::HangoutFull);
        }

        let request = JoinRequest::new(hangout_id, user.id, &user.name);

        let hangout = self.hangout_mut(hangout_id)?;
        hangout
            .participants
            .push(Participant::new(user.id, &user.name, ParticipantRole::Pending));
        invariants::assert_hangout_invariants(hangout);

        info!(%hangout_id, user = %user.name, request_id = %request.id, "join requested");

        self.requests.insert(request.id, request.clone());

        #[cfg(debug_assertions)]
        invariants::assert_request_invariants(self.hangout(hangout_id)?, &self.requests_for(hangout_id));

        Ok(request)
    }

    /// Approve a pending request (host only).
    ///
    /// The capacity re-check and the decrement happen inside the same
    /// `&mut self` call, so two approvals can never both take the last
    /// spot. On `HangoutFull` the request stays Pending for the host to
    /// decline or retry after someone leaves.
    pub fn approve_request(
        &mut self,
        hangout_id: Uuid,
        caller_id: Uuid,
        request_id: Uuid,
    ) -> Result<()> {
        let hangout = self.hangout(hangout_id)?;

        if hangout.is_cancelled() {
            return Err(Error::HangoutClosed);
        }
        if hangout.host_id != caller_id {
            return Err(Error::NotHost);
        }

        let user_id = match self.requests.get(&request_id) {
            Some(r) if r.hangout_id == hangout_id && r.status == RequestStatus::Pending => r.user_id,
            _ => return Err(Error::RequestNotFound),
        };

        if hangout.spots_left == 0 {
            return Err(Error::HangoutFull);
        }

        if let Some(request) = self.requests.get_mut(&request_id) {
            request.status = RequestStatus::Approved;
        }

        let hangout = self.hangout_mut(hangout_id)?;
        if let Some(participant) = hangout.participant_mut(user_id) {
            participant.role = ParticipantRole::Approved;
        }
        hangout.spots_left -= 1;
        if hangout.spots_left == 0 {
            hangout.status = HangoutStatus::Full;
        }
        invariants::assert_hangout_invariants(hangout);

        info!(%hangout_id, %request_id, spots_left = hangout.spots_left, "request approved");
        Ok(())
    }

    /// Decline a pending request (host only).
    ///
    /// The request stays in the store as Rejected, so the user may request
    /// again later; their Pending participant entry is removed. Declining
    /// an already-settled request fails with `RequestNotFound`.
    pub fn decline_request(
        &mut self,
        hangout_id: Uuid,
        caller_id: Uuid,
        request_id: Uuid,
    ) -> Result<()> {
        let hangout = self.hangout(hangout_id)?;

        if hangout.is_cancelled() {
            return Err(Error::HangoutClosed);
        }
        if hangout.host_id != caller_id {
            return Err(Error::NotHost);
        }

        let user_id = match self.requests.get(&request_id) {
            Some(r) if r.hangout_id == hangout_id && r.status == RequestStatus::Pending => r.user_id,
            _ => return Err(Error::RequestNotFound),
        };

        if let Some(request) = self.requests.get_mut(&request_id) {
            request.status = RequestStatus::Rejected;
        }

        let hangout = self.hangout_mut(hangout_id)?;
        hangout.participants.retain(|p| p.user_id != user_id);
        invariants::assert_hangout_invariants(hangout);

        info!(%hangout_id, %request_id, "request declined");
        Ok(())
    }

    /// Withdraw one's own pending request.
    ///
    /// The request is removed entirely, so a later request by the same user
    /// starts fresh.
    pub fn cancel_request(&mut self, hangout_id: Uuid, user_id: Uuid) -> Result<()> {
        let hangout = self.hangout(hangout_id)?;
        if hangout.is_cancelled() {
            return Err(Error::HangoutClosed);
        }

        let request_id = self
            .requests
            .values()
            .find(|r| {
                r.hangout_id == hangout_id
                    && r.user_id == user_id
                    && r.status == RequestStatus::Pending
            })
            .map(|r| r.id)
            .ok_or(Error::RequestNotFound)?;

        self.requests.remove(&request_id);

        let hangout = self.hangout_mut(hangout_id)?;
        hangout.participants.retain(|p| p.user_id != user_id);
        invariants::assert_hangout_invariants(hangout);

        info!(%hangout_id, %request_id, "request withdrawn");
        Ok(())
    }

    /// Leave a hangout as an approved participant.
    ///
    /// Frees the spot, reopening a Full hangout. The host cannot leave
    /// their own hangout.
    pub fn leave_hangout(&mut self, hangout_id: Uuid, user_id: Uuid) -> Result<()> {
        let hangout = self.hangout(hangout_id)?;

        if hangout.is_cancelled() {
            return Err(Error::HangoutClosed);
        }
        if hangout.host_id == user_id {
            return Err(Error::validation("user", "host cannot leave their own hangout"));
        }
        match hangout.participant(user_id) {
            Some(p) if p.role == ParticipantRole::Approved => {}
            _ => return Err(Error::NotParticipant),
        }

        // Drop the approved request too, so the user can request again.
        let request_id = self
            .requests
            .values()
            .find(|r| r.hangout_id == hangout_id && r.user_id == user_id && r.is_open())
            .map(|r| r.id);
        if let Some(id) = request_id {
            self.requests.remove(&id);
        }

        let hangout = self.hangout_mut(hangout_id)?;
        hangout.participants.retain(|p| p.user_id != user_id);
        hangout.spots_left += 1;
        if hangout.status == HangoutStatus::Full {
            hangout.status = HangoutStatus::Active;
        }
        invariants::assert_hangout_invariants(hangout);

        info!(%hangout_id, %user_id, spots_left = hangout.spots_left, "participant left");
        Ok(())
    }

    /// Cancel a hangout (host only). Terminal: every later mutation fails
    /// with `HangoutClosed`.
    pub fn cancel_hangout(&mut self, hangout_id: Uuid, caller_id: Uuid) -> Result<()> {
        let hangout = self.hangout(hangout_id)?;

        if hangout.is_cancelled() {
            return Err(Error::HangoutClosed);
        }
        if hangout.host_id != caller_id {
            return Err(Error::NotHost);
        }

        let hangout = self.hangout_mut(hangout_id)?;
        hangout.status = HangoutStatus::Cancelled;

        info!(%hangout_id, "hangout cancelled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::NewHangout;

    fn setup(capacity: u32) -> (Store, UserProfile, Uuid) {
        let mut store = Store::new();
        let host = UserProfile::new("Sarah Chen");
        let hangout = store
            .create_hangout(&host, NewHangout::new("Coffee & Deep Convos", Utc::now(), capacity))
            .unwrap();
        (store, host, hangout.id)
    }

    #[test]
    fn test_request_adds_pending_participant_without_taking_spot() {
        let (mut store, _host, hangout_id) = setup(4);
        let alex = UserProfile::new("Alex Johnson");

        let request = store.request_to_join(hangout_id, &alex).unwrap();

        let hangout = store.hangout(hangout_id).unwrap();
        assert_eq!(hangout.spots_left, 3);
        assert_eq!(
            hangout.participant(alex.id).unwrap().role,
            ParticipantRole::Pending
        );
        assert_eq!(request.status, RequestStatus::Pending);
    }

    #[test]
    fn test_duplicate_request_rejected() {
        let (mut store, _host, hangout_id) = setup(4);
        let alex = UserProfile::new("Alex Johnson");

        store.request_to_join(hangout_id, &alex).unwrap();
        let err = store.request_to_join(hangout_id, &alex).unwrap_err();

        assert_eq!(err, Error::AlreadyRequested);
        let hangout = store.hangout(hangout_id).unwrap();
        assert_eq!(hangout.participants.len(), 2);
    }

    #[test]
    fn test_host_cannot_request_own_hangout() {
        let (mut store, host, hangout_id) = setup(4);

        let err = store.request_to_join(hangout_id, &host).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "user", .. }));
    }

    #[test]
    fn test_approve_takes_spot_and_promotes() {
        let (mut store, host, hangout_id) = setup(4);
        let alex = UserProfile::new("Alex Johnson");
        let request = store.request_to_join(hangout_id, &alex).unwrap();

        store.approve_request(hangout_id, host.id, request.id).unwrap();

        let hangout = store.hangout(hangout_id).unwrap();
        assert_eq!(hangout.spots_left, 2);
        assert_eq!(
            hangout.participant(alex.id).unwrap().role,
            ParticipantRole::Approved
        );
        assert_eq!(
            store.request(request.id).unwrap().status,
            RequestStatus::Approved
        );
    }

    #[test]
    fn test_approve_requires_host() {
        let (mut store, _host, hangout_id) = setup(4);
        let alex = UserProfile::new("Alex Johnson");
        let emma = UserProfile::new("Emma Davis");
        let request = store.request_to_join(hangout_id, &alex).unwrap();

        let err = store
            .approve_request(hangout_id, emma.id, request.id)
            .unwrap_err();
        assert_eq!(err, Error::NotHost);
    }

    #[test]
    fn test_last_approval_flips_status_to_full() {
        let (mut store, host, hangout_id) = setup(2);
        let alex = UserProfile::new("Alex Johnson");
        let request = store.request_to_join(hangout_id, &alex).unwrap();

        store.approve_request(hangout_id, host.id, request.id).unwrap();

        let hangout = store.hangout(hangout_id).unwrap();
        assert_eq!(hangout.spots_left, 0);
        assert_eq!(hangout.status, HangoutStatus::Full);

        let tom = UserProfile::new("Tom Wilson");
        assert_eq!(
            store.request_to_join(hangout_id, &tom).unwrap_err(),
            Error::HangoutFull
        );
    }

    #[test]
    fn test_approve_on_full_hangout_leaves_request_pending() {
        let (mut store, host, hangout_id) = setup(2);
        let alex = UserProfile::new("Alex Johnson");
        let emma = UserProfile::new("Emma Davis");

        let first = store.request_to_join(hangout_id, &alex).unwrap();
        let second = store.request_to_join(hangout_id, &emma).unwrap();

        store.approve_request(hangout_id, host.id, first.id).unwrap();
        let err = store
            .approve_request(hangout_id, host.id, second.id)
            .unwrap_err();

        assert_eq!(err, Error::HangoutFull);
        assert_eq!(
            store.request(second.id).unwrap().status,
            RequestStatus::Pending
        );
        assert_eq!(store.hangout(hangout_id).unwrap().spots_left, 0);
    }

    #[test]
    fn test_decline_removes_participant_keeps_spots() {
        let (mut store, host, hangout_id) = setup(4);
        let alex = UserProfile::new("Alex Johnson");
        let request = store.request_to_join(hangout_id, &alex).unwrap();

        store.decline_request(hangout_id, host.id, request.id).unwrap();

        let hangout = store.hangout(hangout_id).unwrap();
        assert_eq!(hangout.spots_left, 3);
        assert!(hangout.participant(alex.id).is_none());
        assert_eq!(
            store.request(request.id).unwrap().status,
            RequestStatus::Rejected
        );
    }

    #[test]
    fn test_decline_twice_fails_with_request_not_found() {
        let (mut store, host, hangout_id) = setup(4);
        let alex = UserProfile::new("Alex Johnson");
        let request = store.request_to_join(hangout_id, &alex).unwrap();

        store.decline_request(hangout_id, host.id, request.id).unwrap();
        let err = store
            .decline_request(hangout_id, host.id, request.id)
            .unwrap_err();

        assert_eq!(err, Error::RequestNotFound);
    }

    #[test]
    fn test_rejected_user_may_request_again() {
        let (mut store, host, hangout_id) = setup(4);
        let alex = UserProfile::new("Alex Johnson");
        let first = store.request_to_join(hangout_id, &alex).unwrap();

        store.decline_request(hangout_id, host.id, first.id).unwrap();
        let second = store.request_to_join(hangout_id, &alex).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(second.status, RequestStatus::Pending);
    }

    #[test]
    fn test_cancel_request_round_trip() {
        let (mut store, _host, hangout_id) = setup(4);
        let alex = UserProfile::new("Alex Johnson");
        let request = store.request_to_join(hangout_id, &alex).unwrap();

        store.cancel_request(hangout_id, alex.id).unwrap();

        assert_eq!(store.request(request.id).unwrap_err(), Error::RequestNotFound);
        assert!(store.hangout(hangout_id).unwrap().participant(alex.id).is_none());

        // Withdrawn users start fresh
        assert!(store.request_to_join(hangout_id, &alex).is_ok());
    }

    #[test]
    fn test_cancel_request_without_pending_fails() {
        let (mut store, _host, hangout_id) = setup(4);
        let alex = UserProfile::new("Alex Johnson");

        assert_eq!(
            store.cancel_request(hangout_id, alex.id).unwrap_err(),
            Error::RequestNotFound
        );
    }

    #[test]
    fn test_leave_restores_capacity_and_reopens_full_hangout() {
        let (mut store, host, hangout_id) = setup(2);
        let alex = UserProfile::new("Alex Johnson");
        let request = store.request_to_join(hangout_id, &alex).unwrap();
        store.approve_request(hangout_id, host.id, request.id).unwrap();
        assert_eq!(store.hangout(hangout_id).unwrap().status, HangoutStatus::Full);

        store.leave_hangout(hangout_id, alex.id).unwrap();

        let hangout = store.hangout(hangout_id).unwrap();
        assert_eq!(hangout.spots_left, 1);
        assert_eq!(hangout.status, HangoutStatus::Active);
        assert!(hangout.participant(alex.id).is_none());

        // The freed spot is requestable again, including by the same user
        assert!(store.request_to_join(hangout_id, &alex).is_ok());
    }

    #[test]
    fn test_pending_requester_cannot_leave() {
        let (mut store, _host, hangout_id) = setup(4);
        let alex = UserProfile::new("Alex Johnson");
        store.request_to_join(hangout_id, &alex).unwrap();

        assert_eq!(
            store.leave_hangout(hangout_id, alex.id).unwrap_err(),
            Error::NotParticipant
        );
    }

    #[test]
    fn test_host_cannot_leave() {
        let (mut store, host, hangout_id) = setup(4);

        assert!(matches!(
            store.leave_hangout(hangout_id, host.id).unwrap_err(),
            Error::Validation { field: "user", .. }
        ));
    }

    #[test]
    fn test_cancelled_hangout_refuses_all_mutations() {
        let (mut store, host, hangout_id) = setup(4);
        let alex = UserProfile::new("Alex Johnson");
        let request = store.request_to_join(hangout_id, &alex).unwrap();

        store.cancel_hangout(hangout_id, host.id).unwrap();

        assert_eq!(
            store.request_to_join(hangout_id, &UserProfile::new("Emma Davis")).unwrap_err(),
            Error::HangoutClosed
        );
        assert_eq!(
            store.approve_request(hangout_id, host.id, request.id).unwrap_err(),
            Error::HangoutClosed
        );
        assert_eq!(
            store.decline_request(hangout_id, host.id, request.id).unwrap_err(),
            Error::HangoutClosed
        );
        assert_eq!(
            store.cancel_hangout(hangout_id, host.id).unwrap_err(),
            Error::HangoutClosed
        );
    }

    #[test]
    fn test_cancel_hangout_requires_host() {
        let (mut store, _host, hangout_id) = setup(4);
        let alex = UserProfile::new("Alex Johnson");

        assert_eq!(
            store.cancel_hangout(hangout_id, alex.id).unwrap_err(),
            Error::NotHost
        );
    }

    #[test]
    fn test_unknown_hangout_fails() {
        let mut store = Store::new();
        let alex = UserProfile::new("Alex Johnson");

        assert_eq!(
            store.request_to_join(Uuid::new_v4(), &alex).unwrap_err(),
            Error::HangoutNotFound
        );
    }
}
