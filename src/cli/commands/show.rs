use anyhow::Result;
use std::path::Path;

use crate::leads::fields::format_phone;
use crate::workflow::sorter::{self, SortDirection, SortKey};

use super::{format_time, load_lead};

pub fn run(path: &Path, sort_by: &str, direction: &str) -> Result<()> {
    let key: SortKey = sort_by.parse().map_err(anyhow::Error::msg)?;
    let dir: SortDirection = direction.parse().map_err(anyhow::Error::msg)?;

    let lead = load_lead(path)?;

    println!("👤 {} [{}]", lead.name, lead.status);
    if let Some(lead_ref) = &lead.lead_ref {
        println!("   Ref:      {lead_ref}");
    }
    println!("   Phone:    {}", format_phone(&lead.phone));
    if let Some(email) = &lead.email {
        println!("   Email:    {email}");
    }
    if let Some(place) = &lead.place {
        println!("   Place:    {place}");
    }
    if let Some(source) = &lead.source {
        println!("   Source:   {source}");
    }
    match &lead.assigned_member {
        Some(member) => println!("   Assigned: {member}"),
        None => println!("   Assigned: unassigned"),
    }
    println!("   Next follow-up: {}", format_time(lead.next_followup));

    if lead.history.is_empty() {
        println!("\n📋 No calls logged yet");
        return Ok(());
    }

    println!("\n📋 CALL HISTORY ({} entries):", lead.history.len());
    println!(
        "   {:<16} {:<17} {:<17} {:<10} NOTES",
        "STATUS", "CALLED AT", "NEXT FOLLOW-UP", "BY"
    );
    for record in sorter::sort(&lead.history, key, dir) {
        println!(
            "   {:<16} {:<17} {:<17} {:<10} {}",
            record.status.label(),
            format_time(record.called_at),
            format_time(record.next_followup),
            record
                .called_by
                .as_ref()
                .map(|u| u.0.as_str())
                .unwrap_or("unknown"),
            record.notes.as_deref().unwrap_or("—"),
        );
    }

    Ok(())
}
