// Leaddesk Library - Lead Status Workflow Engine
// This exposes the core components for testing and integration

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod followups;
pub mod leads;
pub mod session;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use api::{ApiEnvelope, AssignMemberRequest, RescheduleRequest, StatusUpdateRequest};
pub use config::LeaddeskConfig;
pub use dashboard::{LeadStats, StatusCount};
pub use followups::{CallbackEntry, CallbackWindow, FollowupSchedule, FollowupStatus};
pub use leads::FieldError;
pub use session::{Session, SessionStore, UserProfile, UserRole};
pub use telemetry::{generate_correlation_id, init_telemetry};
pub use workflow::{
    apply_transition, apply_transition_at, next_pending_followup, reschedule_callback, validate,
    CallRecord, Lead, NormalizedUpdate, ProposedUpdate, SortDirection, SortKey, Status,
    TransitionError, UserId,
};
