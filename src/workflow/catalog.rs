use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validator::TransitionError;

/// Lead statuses in catalog order.
///
/// The catalog is a partial order: `Interested`/`Not Interested` share a rank,
/// as do `Customer Login`/`Dealer Login`. A lead may move to any status whose
/// rank is greater than or equal to its current rank, never to a lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    New,
    Contacted,
    Interested,
    #[serde(rename = "Not Interested")]
    NotInterested,
    #[serde(rename = "Call Back")]
    CallBack,
    #[serde(rename = "Customer Login")]
    CustomerLogin,
    #[serde(rename = "Dealer Login")]
    DealerLogin,
    #[serde(rename = "Follow-up")]
    FollowUp,
    Closed,
}

impl Status {
    /// Every status, in rank order. Siblings are adjacent.
    pub const ALL: [Status; 9] = [
        Status::New,
        Status::Contacted,
        Status::Interested,
        Status::NotInterested,
        Status::CallBack,
        Status::CustomerLogin,
        Status::DealerLogin,
        Status::FollowUp,
        Status::Closed,
    ];

    /// Position in the partial order. Siblings share a rank.
    pub fn rank(self) -> u8 {
        match self {
            Status::New => 0,
            Status::Contacted => 1,
            Status::Interested | Status::NotInterested => 2,
            Status::CallBack => 3,
            Status::CustomerLogin | Status::DealerLogin => 4,
            Status::FollowUp => 5,
            Status::Closed => 6,
        }
    }

    /// True iff moving from `self` to `to` does not lower the rank.
    /// Self-transitions and sibling moves are always allowed.
    pub fn is_forward_or_sibling(self, to: Status) -> bool {
        to.rank() >= self.rank()
    }

    /// The wire label, exactly as the backend spells it.
    pub fn label(self) -> &'static str {
        match self {
            Status::New => "New",
            Status::Contacted => "Contacted",
            Status::Interested => "Interested",
            Status::NotInterested => "Not Interested",
            Status::CallBack => "Call Back",
            Status::CustomerLogin => "Customer Login",
            Status::DealerLogin => "Dealer Login",
            Status::FollowUp => "Follow-up",
            Status::Closed => "Closed",
        }
    }

    /// Badge color name used by list and detail views.
    pub fn badge_color(self) -> &'static str {
        match self {
            Status::New => "primary",
            Status::Contacted => "info",
            Status::Interested => "success",
            Status::NotInterested => "error",
            Status::CallBack => "warning",
            Status::CustomerLogin | Status::DealerLogin => "secondary",
            Status::FollowUp => "info",
            Status::Closed => "default",
        }
    }

    /// One-line description shown next to the status picker.
    pub fn description(self) -> &'static str {
        match self {
            Status::New => "Lead has been created but not contacted yet",
            Status::Contacted => "Initial contact made with the lead",
            Status::Interested => "Lead has shown interest in the product/service",
            Status::NotInterested => "Lead is not interested at this time",
            Status::CallBack => "Scheduled for a follow-up call",
            Status::CustomerLogin => "Customer has logged into the system",
            Status::DealerLogin => "Dealer has logged into the system",
            Status::FollowUp => "Requires additional follow-up",
            Status::Closed => "Lead has been closed (converted or lost)",
        }
    }

    /// Parse a wire label. This is the single place an unknown status can
    /// surface; once parsed, rank lookups are total.
    pub fn from_label(label: &str) -> Result<Status, TransitionError> {
        Status::ALL
            .iter()
            .copied()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| TransitionError::UnknownStatus {
                label: label.to_string(),
            })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Status {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::from_label(s)
    }
}
