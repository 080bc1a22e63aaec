//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use uuid::Uuid;

use crate::models::{Hangout, JoinRequest, ParticipantRole};

/// Validate that a hangout's state is internally consistent
pub fn assert_hangout_invariants(hangout: &Hangout) {
    // Spots-left bookkeeping must track the participant list exactly
    debug_assert!(
        hangout.spots_left == hangout.capacity - hangout.occupied(),
        "Hangout {} has spots_left {} but capacity {} - occupied {}",
        hangout.id,
        hangout.spots_left,
        hangout.capacity,
        hangout.occupied()
    );

    // Exactly one host, and it is the creator
    let hosts: Vec<&Uuid> = hangout
        .participants
        .iter()
        .filter(|p| p.role == ParticipantRole::Host)
        .map(|p| &p.user_id)
        .collect();
    debug_assert!(
        hosts.len() == 1,
        "Hangout {} has {} hosts, expected exactly 1",
        hangout.id,
        hosts.len()
    );
    debug_assert!(
        hosts.first().map_or(false, |id| **id == hangout.host_id),
        "Hangout {} host participant does not match host_id {}",
        hangout.id,
        hangout.host_id
    );

    // Participant list unique by user id
    for (i, p) in hangout.participants.iter().enumerate() {
        debug_assert!(
            !hangout.participants[i + 1..]
                .iter()
                .any(|q| q.user_id == p.user_id),
            "Hangout {} has duplicate participant {}",
            hangout.id,
            p.user_id
        );
    }

    // Title must not be empty
    debug_assert!(
        !hangout.title.trim().is_empty(),
        "Hangout {} has empty title",
        hangout.id
    );
}

/// Validate that a request list is consistent for one hangout: at most one
/// non-rejected request per user
pub fn assert_request_invariants(hangout: &Hangout, requests: &[&JoinRequest]) {
    let open: Vec<&&JoinRequest> = requests
        .iter()
        .filter(|r| r.hangout_id == hangout.id && r.is_open())
        .collect();

    for (i, r) in open.iter().enumerate() {
        debug_assert!(
            !open[i + 1..].iter().any(|q| q.user_id == r.user_id),
            "Hangout {} has multiple open requests for user {}",
            hangout.id,
            r.user_id
        );
    }
}
