use anyhow::{Context, Result};
use std::path::Path;

use crate::api::StatusUpdateRequest;
use crate::config::LeaddeskConfig;
use crate::session::SessionStore;
use crate::telemetry::{create_transition_span, generate_correlation_id};
use crate::workflow::catalog::Status;
use crate::workflow::types::{ProposedUpdate, UserId};
use crate::workflow::{coordinator, validator};

use super::{format_time, load_lead, parse_timestamp, save_lead};

#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &LeaddeskConfig,
    path: &Path,
    status: &str,
    notes: Option<String>,
    callback_time: Option<String>,
    next_followup: Option<String>,
    actor: Option<String>,
    dry_run: bool,
    emit_patch: bool,
) -> Result<()> {
    let correlation_id = generate_correlation_id();
    let mut lead = load_lead(path)?;
    let span = create_transition_span(&lead.id, &correlation_id);
    let _guard = span.enter();

    let status = Status::from_label(status)?;
    let proposed = ProposedUpdate {
        status: Some(status),
        notes,
        callback_time: callback_time.as_deref().map(parse_timestamp).transpose()?,
        next_followup: next_followup.as_deref().map(parse_timestamp).transpose()?,
    };

    let actor = resolve_actor(config, actor)?;

    if dry_run {
        validator::validate(lead.status, &proposed)?;
        println!(
            "✅ {} -> {} would be accepted (dry run, snapshot unchanged)",
            lead.status, status
        );
        return Ok(());
    }

    let from = lead.status;
    let record = coordinator::apply_transition(&mut lead, &proposed, &actor)?;
    save_lead(path, &lead)?;

    println!("✅ {} moved {} -> {}", lead.name, from, lead.status);
    println!("   Logged by:      {actor}");
    println!("   History length: {}", lead.history.len());
    println!("   Next follow-up: {}", format_time(lead.next_followup));

    if emit_patch {
        let body = StatusUpdateRequest::from_record(&record);
        println!("{}", serde_json::to_string_pretty(&body)?);
    }

    Ok(())
}

/// The acting user: an explicit --actor wins, otherwise the stored session.
fn resolve_actor(config: &LeaddeskConfig, actor: Option<String>) -> Result<UserId> {
    if let Some(actor) = actor {
        return Ok(UserId::new(actor));
    }
    let store = SessionStore::new(&config.session.store_path);
    let session = store
        .load()
        .context("no --actor given and no active session")?;
    Ok(session.actor().clone())
}
