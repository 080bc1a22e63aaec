//! Plans screen view model

use chrono::{DateTime, Utc};
use huddle_core::{countdown_label, my_plans, Phase, PlanTab, Store, ViewerState};
use uuid::Uuid;

/// One row on a plans tab
#[derive(Debug, Clone)]
pub struct PlanRow {
    pub hangout_id: Uuid,
    pub title: String,
    pub time_badge: String,
    pub status_label: String,
}

fn status_label(state: ViewerState, phase: Phase, cancelled: bool) -> &'static str {
    if cancelled {
        return "Cancelled";
    }
    if phase == Phase::Happening {
        return "Happening now";
    }
    match state {
        ViewerState::Host => "Hosting",
        ViewerState::ApprovedParticipant => "Going",
        ViewerState::PendingRequester => "Pending approval",
        // my_plans never yields outsiders; placate the exhaustiveness check
        ViewerState::Outsider => "",
    }
}

/// Rows for one tab of the plans screen, soonest first
pub fn plans_tab(store: &Store, user_id: Uuid, tab: PlanTab, now: DateTime<Utc>) -> Vec<PlanRow> {
    my_plans(store, user_id, now)
        .into_iter()
        .filter(|entry| entry.in_tab(tab))
        .map(|entry| PlanRow {
            hangout_id: entry.hangout.id,
            title: entry.hangout.title.clone(),
            time_badge: countdown_label(entry.hangout.time, now),
            status_label: status_label(
                entry.viewer_state,
                entry.phase,
                entry.hangout.is_cancelled(),
            )
            .to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use huddle_core::{NewHangout, UserProfile};

    use super::*;

    #[test]
    fn test_plan_rows_labelled_by_relationship() {
        let mut store = Store::new();
        let host = UserProfile::new("Sarah Chen");
        let alex = UserProfile::new("Alex Chen");
        let now = Utc::now();

        let own = store
            .create_hangout(&host, NewHangout::new("My dinner", now + Duration::hours(5), 4))
            .unwrap();
        let pending = store
            .create_hangout(&alex, NewHangout::new("Run club", now + Duration::hours(2), 4))
            .unwrap();
        store.request_to_join(pending.id, &host).unwrap();

        let rows = plans_tab(&store, host.id, PlanTab::Upcoming, now);
        assert_eq!(rows.len(), 2);
        // Soonest first: the run club before the dinner
        assert_eq!(rows[0].hangout_id, pending.id);
        assert_eq!(rows[0].status_label, "Pending approval");
        assert_eq!(rows[1].hangout_id, own.id);
        assert_eq!(rows[1].status_label, "Hosting");

        let hosting = plans_tab(&store, host.id, PlanTab::Hosting, now);
        assert_eq!(hosting.len(), 1);
        assert_eq!(hosting[0].hangout_id, own.id);
    }

    #[test]
    fn test_happening_label_overrides_role() {
        let mut store = Store::new();
        let host = UserProfile::new("Sarah Chen");
        let now = Utc::now();

        store
            .create_hangout(&host, NewHangout::new("Started", now - Duration::hours(1), 4))
            .unwrap();

        let rows = plans_tab(&store, host.id, PlanTab::Upcoming, now);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status_label, "Happening now");
        assert_eq!(rows[0].time_badge, "Started");
    }
}
