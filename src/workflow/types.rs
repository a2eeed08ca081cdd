// Core types for the lead status workflow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::catalog::Status;

/// Opaque backend id of a customer-care user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}

/// One logged status-change event on a lead.
///
/// Created exactly once per accepted transition and never mutated afterwards.
/// `called_at`/`called_by` are always filled in by the coordinator; they stay
/// optional because snapshots that predate the engine may lack them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub called_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub called_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_followup: Option<DateTime<Utc>>,
}

/// Aggregate root: a sales/support contact tracked through the status
/// lifecycle. Field spellings mirror the backend wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-facing lead reference shown in list views.
    #[serde(rename = "Lead_Id", default, skip_serializing_if = "Option::is_none")]
    pub lead_ref: Option<String>,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Place", default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Current status. Mutated only through the workflow coordinator.
    pub status: Status,
    /// Append-only call history. Insertion order is canonical.
    #[serde(rename = "call_history", default)]
    pub history: Vec<CallRecord>,
    #[serde(
        rename = "Assign_member",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_member: Option<UserId>,
    /// Cached pointer to the soonest pending follow-up. Recomputed on each
    /// accepted transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_followup: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Lead {
    /// Create a fresh local lead snapshot in the `New` status.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        let now = Utc::now();
        Lead {
            id: Uuid::new_v4().to_string(),
            lead_ref: None,
            name: name.into(),
            phone: phone.into(),
            email: None,
            place: None,
            source: None,
            status: Status::New,
            history: Vec::new(),
            assigned_member: None,
            next_followup: None,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Most recently appended call record, if any.
    pub fn last_call(&self) -> Option<&CallRecord> {
        self.history.last()
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_member.is_some()
    }
}

/// A status update as proposed by a caller, before validation.
///
/// Every field except `status` is genuinely optional; the validator collapses
/// all "absent" spellings (missing, null, empty string) to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposedUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_followup: Option<DateTime<Utc>>,
}

impl ProposedUpdate {
    pub fn to(status: Status) -> Self {
        ProposedUpdate {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_callback(mut self, at: DateTime<Utc>) -> Self {
        self.callback_time = Some(at);
        self
    }

    pub fn with_followup(mut self, at: DateTime<Utc>) -> Self {
        self.next_followup = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lead_starts_in_new_with_empty_history() {
        let lead = Lead::new("Asha Nair", "9876543210");
        assert_eq!(lead.status, Status::New);
        assert!(lead.history.is_empty());
        assert!(lead.next_followup.is_none());
        assert!(!lead.is_assigned());
    }

    #[test]
    fn test_lead_round_trips_backend_field_names() {
        let mut lead = Lead::new("Asha Nair", "9876543210");
        lead.lead_ref = Some("LD-1042".to_string());
        lead.place = Some("Kochi".to_string());
        lead.assigned_member = Some(UserId::from("cc-17"));

        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["Lead_Id"], "LD-1042");
        assert_eq!(json["Place"], "Kochi");
        assert_eq!(json["Assign_member"], "cc-17");
        assert!(json.get("email").is_none(), "absent options must be omitted");

        let back: Lead = serde_json::from_value(json).unwrap();
        assert_eq!(back, lead);
    }

    #[test]
    fn test_call_record_tolerates_missing_optional_fields() {
        let record: CallRecord = serde_json::from_str(r#"{"status": "Contacted"}"#).unwrap();
        assert_eq!(record.status, Status::Contacted);
        assert!(record.called_at.is_none());
        assert!(record.called_by.is_none());
    }
}
