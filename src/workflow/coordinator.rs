use chrono::{DateTime, Utc};

use super::catalog::Status;
use super::types::{CallRecord, Lead, ProposedUpdate, UserId};
use super::validator::{self, TransitionError};

/// Apply a proposed status transition to a lead.
///
/// The single mutation entry point: validates, appends a new call record,
/// advances the current status, and recomputes the pending-followup pointer.
/// On any validation failure nothing changes (the lead is untouched).
///
/// Returns the created record so the caller can build the backend PATCH
/// payload from it. Persisting the lead is the caller's concern, as is
/// serializing concurrent transitions on the same lead.
pub fn apply_transition(
    lead: &mut Lead,
    proposed: &ProposedUpdate,
    actor: &UserId,
) -> Result<CallRecord, TransitionError> {
    apply_transition_at(lead, proposed, actor, Utc::now())
}

/// Clock-explicit variant of [`apply_transition`].
pub fn apply_transition_at(
    lead: &mut Lead,
    proposed: &ProposedUpdate,
    actor: &UserId,
    now: DateTime<Utc>,
) -> Result<CallRecord, TransitionError> {
    // Nothing below this call may fail; validation is the only abort point.
    let normalized = validator::validate(lead.status, proposed).map_err(|e| {
        tracing::warn!(
            lead = %lead.id,
            current = %lead.status,
            error = %e,
            "transition rejected"
        );
        e
    })?;

    let record = CallRecord {
        status: normalized.status,
        notes: normalized.notes,
        called_at: Some(now),
        called_by: Some(actor.clone()),
        callback_time: normalized.callback_time,
        next_followup: normalized.next_followup,
    };

    lead.history.push(record.clone());
    lead.status = normalized.status;
    lead.next_followup = next_pending_followup(&lead.history, now);
    lead.updated_at = Some(now);

    tracing::info!(
        lead = %lead.id,
        status = %lead.status,
        by = %actor,
        next_followup = ?lead.next_followup,
        "lead transition applied"
    );

    Ok(record)
}

/// Log a new callback schedule on a lead that is already in `Call Back`.
///
/// Recorded as a fresh self-transition so the old schedule stays in the
/// history; the rank rules reject it on leads that have moved past
/// `Call Back`.
pub fn reschedule_callback(
    lead: &mut Lead,
    callback_time: DateTime<Utc>,
    notes: Option<String>,
    actor: &UserId,
) -> Result<CallRecord, TransitionError> {
    let mut proposed = ProposedUpdate::to(Status::CallBack).with_callback(callback_time);
    proposed.notes = notes;
    apply_transition(lead, &proposed, actor)
}

/// Earliest scheduled callback or follow-up at or after `now`, scanning the
/// whole history. `None` when nothing is pending.
pub fn next_pending_followup(
    history: &[CallRecord],
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    history
        .iter()
        .flat_map(|record| [record.callback_time, record.next_followup])
        .flatten()
        .filter(|t| *t >= now)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    fn actor() -> UserId {
        UserId::from("cc-07")
    }

    #[test]
    fn test_accepted_transition_appends_record_and_advances_status() {
        let mut lead = Lead::new("Asha Nair", "9876543210");
        let proposed = ProposedUpdate::to(Status::Contacted).with_notes("picked up");

        let record = apply_transition_at(&mut lead, &proposed, &actor(), now()).unwrap();

        assert_eq!(lead.status, Status::Contacted);
        assert_eq!(lead.history.len(), 1);
        assert_eq!(record.status, Status::Contacted);
        assert_eq!(record.called_at, Some(now()));
        assert_eq!(record.called_by, Some(actor()));
        assert_eq!(lead.last_call(), Some(&record));
    }

    #[test]
    fn test_rejected_transition_leaves_lead_untouched() {
        let mut lead = Lead::new("Asha Nair", "9876543210");
        apply_transition_at(&mut lead, &ProposedUpdate::to(Status::Closed), &actor(), now())
            .unwrap();
        let snapshot = lead.clone();

        let err =
            apply_transition_at(&mut lead, &ProposedUpdate::to(Status::New), &actor(), now())
                .unwrap_err();

        assert_eq!(
            err,
            TransitionError::BackwardTransition {
                from: Status::Closed,
                to: Status::New,
            }
        );
        assert_eq!(lead, snapshot, "failed transitions must not mutate the lead");
    }

    #[test]
    fn test_status_always_matches_last_record() {
        let mut lead = Lead::new("Asha Nair", "9876543210");
        let steps = [Status::Contacted, Status::Interested, Status::FollowUp];

        for (i, status) in steps.iter().enumerate() {
            let at = now() + Duration::minutes(i as i64);
            apply_transition_at(&mut lead, &ProposedUpdate::to(*status), &actor(), at).unwrap();
            assert_eq!(lead.status, lead.last_call().unwrap().status);
        }
        assert_eq!(lead.history.len(), steps.len());
    }

    #[test]
    fn test_call_back_sets_next_followup_pointer() {
        let mut lead = Lead::new("Asha Nair", "9876543210");
        let callback = now() + Duration::days(1);
        let proposed = ProposedUpdate::to(Status::CallBack).with_callback(callback);

        apply_transition_at(&mut lead, &proposed, &actor(), now()).unwrap();

        assert_eq!(lead.next_followup, Some(callback));
    }

    #[test]
    fn test_next_followup_picks_earliest_pending_across_history() {
        let mut lead = Lead::new("Asha Nair", "9876543210");
        let far = now() + Duration::days(5);
        let near = now() + Duration::days(2);

        apply_transition_at(
            &mut lead,
            &ProposedUpdate::to(Status::Contacted).with_followup(far),
            &actor(),
            now(),
        )
        .unwrap();
        apply_transition_at(
            &mut lead,
            &ProposedUpdate::to(Status::CallBack).with_callback(near),
            &actor(),
            now() + Duration::hours(1),
        )
        .unwrap();

        assert_eq!(lead.next_followup, Some(near));
    }

    #[test]
    fn test_past_schedules_do_not_count_as_pending() {
        let mut lead = Lead::new("Asha Nair", "9876543210");
        let soon = now() + Duration::hours(2);

        apply_transition_at(
            &mut lead,
            &ProposedUpdate::to(Status::CallBack).with_callback(soon),
            &actor(),
            now(),
        )
        .unwrap();
        // The next transition happens after the callback came and went.
        apply_transition_at(
            &mut lead,
            &ProposedUpdate::to(Status::FollowUp),
            &actor(),
            now() + Duration::days(1),
        )
        .unwrap();

        assert_eq!(lead.next_followup, None);
    }

    #[test]
    fn test_reschedule_callback_logs_a_self_transition() {
        let mut lead = Lead::new("Asha Nair", "9876543210");
        apply_transition_at(
            &mut lead,
            &ProposedUpdate::to(Status::CallBack).with_callback(now() + Duration::days(1)),
            &actor(),
            now(),
        )
        .unwrap();

        let moved = now() + Duration::days(3);
        let record =
            reschedule_callback(&mut lead, moved, Some("asked to push it".into()), &actor())
                .unwrap();

        assert_eq!(lead.status, Status::CallBack);
        assert_eq!(lead.history.len(), 2);
        assert_eq!(record.callback_time, Some(moved));
    }

    #[test]
    fn test_reschedule_rejected_once_lead_moved_past_call_back() {
        let mut lead = Lead::new("Asha Nair", "9876543210");
        apply_transition_at(&mut lead, &ProposedUpdate::to(Status::FollowUp), &actor(), now())
            .unwrap();

        let err = reschedule_callback(&mut lead, now() + Duration::days(1), None, &actor())
            .unwrap_err();
        assert!(matches!(err, TransitionError::BackwardTransition { .. }));
    }

    #[test]
    fn test_closed_is_not_a_hard_terminal_state() {
        let mut lead = Lead::new("Asha Nair", "9876543210");
        apply_transition_at(&mut lead, &ProposedUpdate::to(Status::Closed), &actor(), now())
            .unwrap();

        // Self-logging on a closed lead stays legal (e.g. closing notes).
        let result = apply_transition_at(
            &mut lead,
            &ProposedUpdate::to(Status::Closed).with_notes("final summary"),
            &actor(),
            now() + Duration::hours(1),
        );
        assert!(result.is_ok());
        assert_eq!(lead.history.len(), 2);
    }
}
