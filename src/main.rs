//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use aafl_federation::{
    cli::{Commands, Federation},
    commands::{
        init::handle_init,
        players::{build_player, handle_add_player},
        teams::{handle_add_team, handle_list_teams, handle_show_team},
    },
    ConnectionManager,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("aafl_federation={},warn", default_level))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Federation::parse();
    init_tracing(app.verbose);

    let manager = ConnectionManager::from_config(app.config);

    let result = match app.command {
        Commands::Init => handle_init(&manager).await,
        Commands::AddTeam { team } => handle_add_team(&manager, team).await,
        Commands::AddPlayer {
            first_name,
            surname,
            position,
            team_id,
            ratings,
        } => {
            let player = build_player(first_name, surname, position, team_id, ratings);
            handle_add_player(&manager, player).await
        }
        Commands::ListTeams { json } => handle_list_teams(&manager, json).await,
        Commands::ShowTeam { id, json } => handle_show_team(&manager, &id, json).await,
    };

    manager.close().await;
    result?;

    Ok(())
}
