use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "leaddesk")]
#[command(about = "Lead-management workflow console for customer-care teams")]
#[command(long_about = "Leaddesk applies status transitions to lead snapshots, keeps the \
                       append-only call history honest, and answers the questions a care team \
                       asks all day: who is due for a callback, and how is the pipeline doing.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a lead snapshot with its sorted call history
    Show {
        /// Path to the lead snapshot (JSON)
        lead: PathBuf,
        /// Column to sort the call history by
        #[arg(long, default_value = "called-at", help = "called-at, next-followup, or status")]
        sort_by: String,
        /// Sort direction
        #[arg(long, default_value = "asc", help = "asc or desc")]
        direction: String,
    },
    /// Apply a status transition to a lead snapshot
    Update {
        /// Path to the lead snapshot (JSON)
        lead: PathBuf,
        /// New status label, e.g. "Call Back"
        #[arg(long)]
        status: String,
        /// Free-text notes for the call record
        #[arg(long)]
        notes: Option<String>,
        /// Scheduled callback time (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        callback_time: Option<String>,
        /// Next follow-up reminder (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        next_followup: Option<String>,
        /// Acting user id; defaults to the logged-in session user
        #[arg(long)]
        actor: Option<String>,
        /// Validate and report without writing the snapshot back
        #[arg(long, help = "Show what would change without modifying the snapshot")]
        dry_run: bool,
        /// Print the backend PATCH body for the accepted transition
        #[arg(long, help = "Emit the PATCH /Lead/{id}/status request body as JSON")]
        emit_patch: bool,
    },
    /// List callbacks due across lead snapshots
    Callbacks {
        /// Lead snapshot files (each a JSON lead or array of leads)
        leads: Vec<PathBuf>,
        /// Query window
        #[arg(long, default_value = "today", help = "today, upcoming, or overdue")]
        window: String,
    },
    /// Print aggregate statistics across lead snapshots
    Stats {
        /// Lead snapshot files (each a JSON lead or array of leads)
        leads: Vec<PathBuf>,
        /// Restrict to leads assigned to this member id
        #[arg(long)]
        member: Option<String>,
        /// Emit machine-readable JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Store a session (user profile + token) for subsequent updates
    Login {
        /// Backend id of the user
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Role label: admin or customer_care
        #[arg(long, default_value = "customer_care")]
        role: String,
        /// Opaque API token issued by the backend
        #[arg(long)]
        token: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Clear the stored session
    Logout,
}
