// Lead Status Workflow - validation, append-only history, follow-up tracking
//
// This module owns the status lifecycle: the catalog partial order, the
// transition validator, the history sorter, and the coordinator that turns an
// accepted proposal into a durable state change on the Lead aggregate.

pub mod catalog;
pub mod coordinator;
pub mod sorter;
pub mod types;
pub mod validator;

pub use catalog::Status;
pub use coordinator::{apply_transition, apply_transition_at, next_pending_followup, reschedule_callback};
pub use sorter::{sort, SortDirection, SortKey};
pub use types::{CallRecord, Lead, ProposedUpdate, UserId};
pub use validator::{validate, NormalizedUpdate, TransitionError};
