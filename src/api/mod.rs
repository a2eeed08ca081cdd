//! Backend wire boundary.
//!
//! The REST backend owns persistence; this module only defines the payload
//! shapes it accepts and the envelope it answers with, so an accepted
//! transition maps onto a PATCH body without hand-assembled JSON. Absent
//! optional fields are omitted entirely (not sent as null), which is what
//! keeps a partial update from clobbering stored values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflow::catalog::Status;
use crate::workflow::types::{CallRecord, UserId};

/// Body of `PATCH /Lead/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_followup: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub called_by: Option<UserId>,
}

impl StatusUpdateRequest {
    /// Build the PATCH body from the record an accepted transition produced.
    pub fn from_record(record: &CallRecord) -> Self {
        StatusUpdateRequest {
            status: record.status,
            notes: record.notes.clone(),
            callback_time: record.callback_time,
            next_followup: record.next_followup,
            called_by: record.called_by.clone(),
        }
    }
}

/// Body of `PATCH /Lead/{id}/assign`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignMemberRequest {
    #[serde(rename = "Assign_member")]
    pub assign_member: UserId,
}

/// Body of `PATCH /Lead/{id}/reschedule`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescheduleRequest {
    pub callback_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Response envelope every backend endpoint wraps its payload in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Endpoint paths, one helper per backend route this tool talks about.
pub mod paths {
    pub fn leads() -> String {
        "/Lead".to_string()
    }

    pub fn lead(id: &str) -> String {
        format!("/Lead/{id}")
    }

    pub fn lead_status(id: &str) -> String {
        format!("/Lead/{id}/status")
    }

    pub fn lead_assign(id: &str) -> String {
        format!("/Lead/{id}/assign")
    }

    pub fn lead_reschedule(id: &str) -> String {
        format!("/Lead/{id}/reschedule")
    }

    pub fn callbacks() -> String {
        "/Lead/callbacks".to_string()
    }

    pub fn member_callbacks(member_id: &str) -> String {
        format!("/Lead/callbacks/{member_id}")
    }

    pub fn dashboard() -> String {
        "/Lead/dashboard".to_string()
    }

    pub fn member_dashboard(member_id: &str) -> String {
        format!("/Lead/dashboard/{member_id}")
    }

    pub fn login() -> String {
        "/customer-care/login".to_string()
    }
}
