use chrono::{DateTime, Utc};
use thiserror::Error;

use super::catalog::Status;
use super::types::ProposedUpdate;

/// Why a proposed transition was rejected. All variants are recoverable by
/// the caller (fix the payload and retry); none abort the process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("unknown status label {label:?}")]
    UnknownStatus { label: String },
    #[error("no status supplied for the update")]
    MissingStatus,
    #[error("cannot move lead back from {from} to {to}")]
    BackwardTransition { from: Status, to: Status },
    #[error("Call Back requires a callback time or a next follow-up")]
    MissingSchedule,
}

/// A proposal that passed validation, with every absent optional collapsed to
/// `None` so downstream serialization omits the field instead of overwriting
/// stored values with null or empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedUpdate {
    pub status: Status,
    pub notes: Option<String>,
    pub callback_time: Option<DateTime<Utc>>,
    pub next_followup: Option<DateTime<Utc>>,
}

/// Decide whether `proposed` is a legal transition out of `current`.
///
/// Pure function: no clock access, no mutation. Normalization rules carried
/// over from the status-update form:
/// - notes are trimmed, empty notes dropped;
/// - a callback time is only meaningful on `Call Back`;
/// - login statuses clear any pending follow-up.
pub fn validate(
    current: Status,
    proposed: &ProposedUpdate,
) -> Result<NormalizedUpdate, TransitionError> {
    let status = proposed.status.ok_or(TransitionError::MissingStatus)?;

    if !current.is_forward_or_sibling(status) {
        return Err(TransitionError::BackwardTransition {
            from: current,
            to: status,
        });
    }

    if status == Status::CallBack
        && proposed.callback_time.is_none()
        && proposed.next_followup.is_none()
    {
        return Err(TransitionError::MissingSchedule);
    }

    let notes = proposed
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from);

    let callback_time = if status == Status::CallBack {
        proposed.callback_time
    } else {
        None
    };

    let next_followup = match status {
        Status::CustomerLogin | Status::DealerLogin => None,
        _ => proposed.next_followup,
    };

    Ok(NormalizedUpdate {
        status,
        notes,
        callback_time,
        next_followup,
    })
}
