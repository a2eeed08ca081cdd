use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

use crate::dashboard;
use crate::workflow::types::UserId;

use super::load_all_leads;

pub fn run(paths: &[PathBuf], member: Option<String>, json: bool) -> Result<()> {
    let leads = load_all_leads(paths)?;
    let now = Utc::now();

    let stats = match member {
        Some(member) => {
            let member = UserId::new(member);
            let scoped: Vec<_> = dashboard::for_member(&leads, &member)
                .into_iter()
                .cloned()
                .collect();
            dashboard::compute(&scoped, now)
        }
        None => dashboard::compute(&leads, now),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", dashboard::format_stats_display(&stats));
    }

    Ok(())
}
