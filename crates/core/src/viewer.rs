//! Viewer state derivation
//!
//! The one place that maps a user's relationship to a hangout onto the
//! call-to-action the presentation layer should show. Every view calls
//! these instead of re-deriving the relationship ad hoc.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Hangout, ParticipantRole};
use crate::schedule::{self, Phase};

/// The calling user's relationship to a hangout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    /// No participant entry and no open request
    Outsider,
    /// Requested to join, awaiting host action
    PendingRequester,
    /// Request approved by the host
    ApprovedParticipant,
    /// Created the hangout
    Host,
}

/// Pure function over the participant list; no side effects.
pub fn derive_viewer_state(hangout: &Hangout, viewer_id: Uuid) -> ViewerState {
    match hangout.participant(viewer_id).map(|p| p.role) {
        Some(ParticipantRole::Host) => ViewerState::Host,
        Some(ParticipantRole::Approved) => ViewerState::ApprovedParticipant,
        Some(ParticipantRole::Pending) => ViewerState::PendingRequester,
        None => ViewerState::Outsider,
    }
}

/// Primary affordance for the detail screen's bottom bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallToAction {
    RequestToJoin,
    CancelRequest,
    OpenChat,
    ManageRequests,
    Full,
    Ended,
    Closed,
}

/// Pick the call-to-action from viewer state, status, and time.
///
/// Participants keep chat access after the hangout starts; only outsiders
/// see Ended/Full dead-ends.
pub fn call_to_action(hangout: &Hangout, viewer_id: Uuid, now: DateTime<Utc>) -> CallToAction {
    if hangout.is_cancelled() {
        return CallToAction::Closed;
    }

    match derive_viewer_state(hangout, viewer_id) {
        ViewerState::Host => CallToAction::ManageRequests,
        ViewerState::ApprovedParticipant => CallToAction::OpenChat,
        ViewerState::PendingRequester => CallToAction::CancelRequest,
        ViewerState::Outsider => {
            if schedule::phase(hangout.time, now) == Phase::Past {
                CallToAction::Ended
            } else if hangout.is_full() {
                CallToAction::Full
            } else {
                CallToAction::RequestToJoin
            }
        }
    }
}
