use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::str::FromStr;

use super::types::CallRecord;

/// Column a call-history view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CalledAt,
    NextFollowup,
    Status,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "called_at" | "called-at" => Ok(SortKey::CalledAt),
            "next_followup" | "next-followup" => Ok(SortKey::NextFollowup),
            "status" => Ok(SortKey::Status),
            other => Err(format!(
                "unknown sort key {other:?} (expected called-at, next-followup, or status)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction {other:?} (expected asc or desc)")),
        }
    }
}

/// Produce an ordered copy of a lead's call history.
///
/// Never mutates the input, and the sort is stable: records comparing equal
/// under the key keep their insertion order.
///
/// Null handling:
/// - `next_followup`: a missing value sorts as +infinity, so unscheduled
///   records land after every scheduled one ascending and before them
///   descending, regardless of how far out the scheduled values are;
/// - `called_at`: a missing value sorts as time zero (earliest);
/// - `status`: catalog rank order; sibling statuses compare equal.
pub fn sort(history: &[CallRecord], key: SortKey, direction: SortDirection) -> Vec<CallRecord> {
    let mut view: Vec<CallRecord> = history.to_vec();
    view.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    view
}

fn compare(a: &CallRecord, b: &CallRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::CalledAt => called_at_or_epoch(a).cmp(&called_at_or_epoch(b)),
        SortKey::NextFollowup => followup_or_max(a).cmp(&followup_or_max(b)),
        SortKey::Status => a.status.rank().cmp(&b.status.rank()),
    }
}

fn called_at_or_epoch(record: &CallRecord) -> DateTime<Utc> {
    record.called_at.unwrap_or(DateTime::UNIX_EPOCH)
}

fn followup_or_max(record: &CallRecord) -> DateTime<Utc> {
    record.next_followup.unwrap_or(DateTime::<Utc>::MAX_UTC)
}
