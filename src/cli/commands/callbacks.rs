use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

use crate::followups::{self, CallbackWindow};

use super::load_all_leads;

pub fn run(paths: &[PathBuf], window: &str) -> Result<()> {
    let window: CallbackWindow = window.parse().map_err(anyhow::Error::msg)?;
    let leads = load_all_leads(paths)?;
    let now = Utc::now();

    let entries = followups::callbacks_due(&leads, window, now);
    print!("{}", followups::format_callback_display(&entries, window, now));

    Ok(())
}
