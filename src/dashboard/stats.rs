use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::followups::{callbacks_due, CallbackWindow};
use crate::workflow::catalog::Status;
use crate::workflow::types::{Lead, UserId};

/// Count of leads in one status. Kept as a list rather than a map so the
/// dashboard renders statuses in catalog order with zero-filled rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub count: usize,
}

/// Aggregate numbers the dashboard renders for a set of leads.
#[derive(Debug, Clone, Serialize)]
pub struct LeadStats {
    pub total: usize,
    pub by_status: Vec<StatusCount>,
    pub assigned: usize,
    pub unassigned: usize,
    pub callbacks_today: usize,
    pub overdue_followups: usize,
}

/// Compute dashboard statistics over a set of lead snapshots.
pub fn compute(leads: &[Lead], now: DateTime<Utc>) -> LeadStats {
    let by_status = Status::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            count: leads.iter().filter(|l| l.status == status).count(),
        })
        .collect();

    let assigned = leads.iter().filter(|l| l.is_assigned()).count();

    LeadStats {
        total: leads.len(),
        by_status,
        assigned,
        unassigned: leads.len() - assigned,
        callbacks_today: callbacks_due(leads, CallbackWindow::Today, now).len(),
        overdue_followups: callbacks_due(leads, CallbackWindow::Overdue, now).len(),
    }
}

/// Restrict a lead set to one customer-care member's book, the way the
/// member-scoped dashboard endpoint does.
pub fn for_member<'a>(leads: &'a [Lead], member: &UserId) -> Vec<&'a Lead> {
    leads
        .iter()
        .filter(|l| l.assigned_member.as_ref() == Some(member))
        .collect()
}

/// Newest leads first, capped at `limit`. Leads without a creation timestamp
/// sort last.
pub fn recent_leads(leads: &[Lead], limit: usize) -> Vec<&Lead> {
    let mut ordered: Vec<&Lead> = leads.iter().collect();
    ordered.sort_by(|a, b| {
        b.created_at
            .unwrap_or(DateTime::UNIX_EPOCH)
            .cmp(&a.created_at.unwrap_or(DateTime::UNIX_EPOCH))
    });
    ordered.truncate(limit);
    ordered
}

/// Render stats as a plain-text summary for the terminal.
pub fn format_stats_display(stats: &LeadStats) -> String {
    let mut output = String::new();

    output.push_str("📊 LEAD OVERVIEW:\n");
    output.push_str("─────────────────\n");
    output.push_str(&format!(
        "   Total: {}  (assigned {}, unassigned {})\n",
        stats.total, stats.assigned, stats.unassigned
    ));
    output.push_str(&format!(
        "   Callbacks today: {}  Overdue: {}\n",
        stats.callbacks_today, stats.overdue_followups
    ));
    output.push('\n');
    for row in &stats.by_status {
        output.push_str(&format!("   {:<15} {}\n", row.status.label(), row.count));
    }

    output
}
