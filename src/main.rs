use anyhow::Result;
use clap::Parser;

use leaddesk::cli::{commands, Cli, Commands};
use leaddesk::config::LeaddeskConfig;
use leaddesk::telemetry::init_telemetry;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = LeaddeskConfig::load()?;
    init_telemetry(&config.observability)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Show {
            lead,
            sort_by,
            direction,
        } => commands::show::run(&lead, &sort_by, &direction),
        Commands::Update {
            lead,
            status,
            notes,
            callback_time,
            next_followup,
            actor,
            dry_run,
            emit_patch,
        } => commands::update::run(
            &config,
            &lead,
            &status,
            notes,
            callback_time,
            next_followup,
            actor,
            dry_run,
            emit_patch,
        ),
        Commands::Callbacks { leads, window } => commands::callbacks::run(&leads, &window),
        Commands::Stats {
            leads,
            member,
            json,
        } => commands::stats::run(&leads, member, json),
        Commands::Login {
            id,
            name,
            email,
            role,
            token,
            phone,
        } => commands::session::login(&config, id, name, email, &role, token, phone),
        Commands::Logout => commands::session::logout(&config),
    }
}
