// Dashboard aggregation - pure statistics over lead snapshots

pub mod stats;

pub use stats::{compute, for_member, format_stats_display, recent_leads, LeadStats, StatusCount};
