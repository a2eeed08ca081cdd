//! Follow-up Schedule Module
//!
//! Gives callers visibility into pending callbacks: which leads are due
//! today, which are upcoming, and which slipped past their scheduled time
//! without a logged call.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::workflow::catalog::Status;
use crate::workflow::types::Lead;

/// Where a lead's pending follow-up sits relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowupStatus {
    /// Scheduled time has passed without a newer call being logged
    Overdue,
    /// Due on the current (UTC) day
    DueToday,
    /// Scheduled for a later day
    Scheduled,
}

/// A lead's follow-up position, computed from its snapshot.
#[derive(Debug, Clone)]
pub struct FollowupSchedule {
    /// When the lead should next be contacted
    pub due_at: DateTime<Utc>,
    /// Minutes until due (negative when overdue)
    pub minutes_until_due: i64,
    pub status: FollowupStatus,
}

impl FollowupSchedule {
    /// Compute the schedule for one lead, or `None` when nothing is
    /// scheduled. Prefers the cached `next_followup` pointer; falls back to
    /// the last call record's schedule so a lapsed callback still surfaces
    /// as overdue until a newer call is logged.
    pub fn for_lead(lead: &Lead, now: DateTime<Utc>) -> Option<Self> {
        let due_at = lead.next_followup.or_else(|| {
            lead.last_call().and_then(|record| {
                match (record.callback_time, record.next_followup) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                }
            })
        })?;

        let minutes_until_due = (due_at - now).num_minutes();
        let status = if due_at < now {
            FollowupStatus::Overdue
        } else if due_at.date_naive() == now.date_naive() {
            FollowupStatus::DueToday
        } else {
            FollowupStatus::Scheduled
        };

        Some(FollowupSchedule {
            due_at,
            minutes_until_due,
            status,
        })
    }
}

/// Query window for the callback queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackWindow {
    /// Due on the current UTC day, including already-lapsed slots
    Today,
    /// Due now or later, any day
    Upcoming,
    /// Scheduled time already passed
    Overdue,
}

impl FromStr for CallbackWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(CallbackWindow::Today),
            "upcoming" => Ok(CallbackWindow::Upcoming),
            "overdue" => Ok(CallbackWindow::Overdue),
            other => Err(format!(
                "unknown callback window {other:?} (expected today, upcoming, or overdue)"
            )),
        }
    }
}

/// One entry in the callback queue.
#[derive(Debug, Clone)]
pub struct CallbackEntry {
    pub lead_id: String,
    pub name: String,
    pub phone: String,
    pub status: Status,
    pub due_at: DateTime<Utc>,
    pub minutes_until_due: i64,
}

/// Leads with a follow-up in the given window, soonest first. Ties break on
/// lead id so the queue order is deterministic.
pub fn callbacks_due(leads: &[Lead], window: CallbackWindow, now: DateTime<Utc>) -> Vec<CallbackEntry> {
    let mut entries: Vec<CallbackEntry> = leads
        .iter()
        .filter_map(|lead| FollowupSchedule::for_lead(lead, now).map(|s| (lead, s)))
        .filter(|(_, schedule)| match window {
            CallbackWindow::Today => schedule.due_at.date_naive() == now.date_naive(),
            CallbackWindow::Upcoming => schedule.due_at >= now,
            CallbackWindow::Overdue => schedule.status == FollowupStatus::Overdue,
        })
        .map(|(lead, schedule)| CallbackEntry {
            lead_id: lead.id.clone(),
            name: lead.name.clone(),
            phone: lead.phone.clone(),
            status: lead.status,
            due_at: schedule.due_at,
            minutes_until_due: schedule.minutes_until_due,
        })
        .collect();

    entries.sort_by(|a, b| a.due_at.cmp(&b.due_at).then_with(|| a.lead_id.cmp(&b.lead_id)));
    entries
}

/// Format the callback queue for terminal display.
pub fn format_callback_display(
    entries: &[CallbackEntry],
    window: CallbackWindow,
    now: DateTime<Utc>,
) -> String {
    let mut output = String::new();

    let heading = match window {
        CallbackWindow::Today => "today",
        CallbackWindow::Upcoming => "upcoming",
        CallbackWindow::Overdue => "overdue",
    };
    output.push_str(&format!("📞 CALLBACK QUEUE ({heading}):\n"));
    output.push_str("─────────────────────────\n");

    if entries.is_empty() {
        output.push_str("   Nothing scheduled\n");
        return output;
    }

    for entry in entries {
        let time_str = entry.due_at.format("%Y-%m-%d %H:%M").to_string();
        let marker = if entry.due_at < now { "🔴" } else { "🟢" };
        output.push_str(&format!(
            "{} {} — {} ({}) [{}]\n",
            marker, time_str, entry.name, entry.phone, entry.status
        ));
    }
    output.push_str(&format!("   {} lead(s) in queue\n", entries.len()));

    output
}
