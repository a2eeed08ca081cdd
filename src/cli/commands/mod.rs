use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use std::path::Path;

use crate::workflow::types::Lead;

pub mod callbacks;
pub mod session;
pub mod show;
pub mod stats;
pub mod update;

/// Read one lead snapshot from disk.
pub fn load_lead(path: &Path) -> Result<Lead> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read lead snapshot {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid lead snapshot", path.display()))
}

/// Write a lead snapshot back to disk, pretty-printed.
pub fn save_lead(path: &Path, lead: &Lead) -> Result<()> {
    let raw = serde_json::to_string_pretty(lead)?;
    std::fs::write(path, raw)
        .with_context(|| format!("failed to write lead snapshot {}", path.display()))?;
    Ok(())
}

/// Read every lead from a list of snapshot files. Each file holds either a
/// single lead object or an array of leads.
pub fn load_all_leads(paths: &[impl AsRef<Path>]) -> Result<Vec<Lead>> {
    let mut leads = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read lead snapshot {}", path.display()))?;
        match serde_json::from_str::<Vec<Lead>>(&raw) {
            Ok(mut batch) => leads.append(&mut batch),
            Err(_) => {
                let lead: Lead = serde_json::from_str(&raw)
                    .with_context(|| format!("{} is not a valid lead snapshot", path.display()))?;
                leads.push(lead);
            }
        }
    }
    Ok(leads)
}

/// Parse a user-supplied timestamp: RFC 3339, or a bare date taken as
/// midnight UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is valid");
        return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }
    anyhow::bail!("could not parse {raw:?} as a timestamp (use RFC 3339 or YYYY-MM-DD)")
}

/// Display helper for optional timestamps.
pub fn format_time(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => "—".to_string(),
    }
}
