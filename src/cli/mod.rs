//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::RatingArg;

#[derive(Debug, Parser)]
#[clap(name = "aafl-federation", about = "AAFL federation team and player store")]
pub struct Federation {
    /// Path to the TOML config file (or set `AAFL_CONFIG`).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (`RUST_LOG` takes precedence).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Descriptive team fields.
#[derive(Debug, Args)]
pub struct TeamArgs {
    #[clap(long)]
    pub team_name: String,

    #[clap(long = "country")]
    pub country_name: String,

    /// Federation representative.
    #[clap(long = "fed-rep")]
    pub fed_rep_name: String,

    #[clap(long = "manager")]
    pub manager_name: String,

    #[clap(long = "captain")]
    pub captain_name: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Connect, create collections and indexes if missing, and report.
    Init,

    /// Insert a team and print its id.
    AddTeam {
        #[clap(flatten)]
        team: TeamArgs,
    },

    /// Insert a player and print its id.
    AddPlayer {
        #[clap(long)]
        first_name: String,

        #[clap(long)]
        surname: String,

        /// Natural position, e.g. GK, DF, MD, AT.
        #[clap(long)]
        position: String,

        /// Id of the owning team. Not checked for existence.
        #[clap(long)]
        team_id: Option<String>,

        /// Rating (repeatable): `-r GK=40 -r AT=85`.
        #[clap(long = "rating", short = 'r')]
        ratings: Vec<RatingArg>,
    },

    /// List all teams ordered by name.
    ListTeams {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one team with its players and country rating.
    ShowTeam {
        /// Team id.
        id: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
