//! Discovery and plans read models
//!
//! The reference screens each re-filtered the hangout list with slightly
//! different rules; these functions are the single shared version. All of
//! them are pure reads over store snapshots.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc, Weekday};
use uuid::Uuid;

use crate::models::{Hangout, Visibility};
use crate::schedule::{self, Phase};
use crate::store::Store;
use crate::viewer::{self, ViewerState};

/// Quick filters on the discovery screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    /// Happening or starting within the next three hours
    Now,
    /// Later today, evening onwards
    Tonight,
    /// Any Saturday or Sunday
    Weekend,
}

const TONIGHT_STARTS_AT_HOUR: u32 = 18;

/// Whether discovery should show `hangout` to `viewer` at all.
///
/// Public hangouts are visible to everyone, including anonymous browsing.
/// Invite-only hangouts are visible only to users who already have a
/// relationship with them (host, approved, or pending).
pub fn visible_to(hangout: &Hangout, viewer: Option<Uuid>) -> bool {
    match hangout.visibility {
        Visibility::Public => true,
        Visibility::InviteOnly => viewer
            .map(|id| viewer::derive_viewer_state(hangout, id) != ViewerState::Outsider)
            .unwrap_or(false),
    }
}

/// Discoverable hangouts for a viewer: visible, not cancelled, not already
/// over. Sorted soonest first.
pub fn discovery_feed<'a>(
    store: &'a Store,
    viewer: Option<Uuid>,
    now: DateTime<Utc>,
) -> Vec<&'a Hangout> {
    let mut feed: Vec<&Hangout> = store
        .hangouts()
        .into_iter()
        .filter(|h| !h.is_cancelled())
        .filter(|h| schedule::phase(h.time, now) != Phase::Past)
        .filter(|h| visible_to(h, viewer))
        .collect();
    feed.sort_by_key(|h| h.time);
    feed
}

/// The discovery date picker: hangouts on one calendar day
pub fn on_day<'a>(feed: &[&'a Hangout], day: NaiveDate) -> Vec<&'a Hangout> {
    feed.iter()
        .filter(|h| h.time.date_naive() == day)
        .copied()
        .collect()
}

pub fn matches_time_filter(hangout: &Hangout, filter: TimeFilter, now: DateTime<Utc>) -> bool {
    match filter {
        TimeFilter::Now => {
            schedule::phase(hangout.time, now) == Phase::Happening
                || (hangout.time > now && hangout.time - now <= Duration::hours(3))
        }
        TimeFilter::Tonight => {
            hangout.time.date_naive() == now.date_naive()
                && hangout.time.hour() >= TONIGHT_STARTS_AT_HOUR
        }
        TimeFilter::Weekend => {
            matches!(hangout.time.weekday(), Weekday::Sat | Weekday::Sun)
        }
    }
}

/// Tabs on the plans screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanTab {
    Upcoming,
    Past,
    Hosting,
}

/// One row on the plans screen
#[derive(Debug, Clone, Copy)]
pub struct PlanEntry<'a> {
    pub hangout: &'a Hangout,
    pub viewer_state: ViewerState,
    pub phase: Phase,
}

impl PlanEntry<'_> {
    /// Tab membership. Hosting is a subset of Upcoming; cancelled hangouts
    /// land on the Past tab regardless of time.
    pub fn in_tab(&self, tab: PlanTab) -> bool {
        let over = self.phase == Phase::Past || self.hangout.is_cancelled();
        match tab {
            PlanTab::Past => over,
            PlanTab::Upcoming => !over,
            PlanTab::Hosting => !over && self.viewer_state == ViewerState::Host,
        }
    }
}

/// Every hangout the user has a relationship with, soonest first
pub fn my_plans(store: &Store, user_id: Uuid, now: DateTime<Utc>) -> Vec<PlanEntry<'_>> {
    let mut plans: Vec<PlanEntry> = store
        .hangouts()
        .into_iter()
        .filter_map(|h| {
            let state = viewer::derive_viewer_state(h, user_id);
            (state != ViewerState::Outsider).then(|| PlanEntry {
                hangout: h,
                viewer_state: state,
                phase: schedule::phase(h.time, now),
            })
        })
        .collect();
    plans.sort_by_key(|p| p.hangout.time);
    plans
}
