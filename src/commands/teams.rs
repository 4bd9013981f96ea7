//! Team command implementations

use super::{format_team_details, format_team_line};
use crate::{
    cli::TeamArgs,
    storage::{ConnectionManager, Team},
    Result,
};

impl From<TeamArgs> for Team {
    fn from(args: TeamArgs) -> Self {
        Team::new(
            args.team_name,
            args.country_name,
            args.fed_rep_name,
            args.manager_name,
            args.captain_name,
        )
    }
}

pub async fn handle_add_team(manager: &ConnectionManager, args: TeamArgs) -> Result<()> {
    let db = manager.get_instance().await?;
    let team = Team::from(args);
    let id = db.insert_team(&team).await?;
    println!("{}", id);
    Ok(())
}

pub async fn handle_list_teams(manager: &ConnectionManager, as_json: bool) -> Result<()> {
    let db = manager.get_instance().await?;
    let teams = db.list_teams().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?); // tarpaulin::skip
    } else if teams.is_empty() {
        println!("No teams registered");
    } else {
        for team in &teams {
            println!("{}", format_team_line(team));
        }
    }
    Ok(())
}

pub async fn handle_show_team(manager: &ConnectionManager, id: &str, as_json: bool) -> Result<()> {
    let db = manager.get_instance().await?;

    match db.team_with_players(id).await? {
        Some(team) if as_json => {
            println!("{}", serde_json::to_string_pretty(&team)?); // tarpaulin::skip
        }
        Some(team) => println!("{}", format_team_details(&team)),
        None => println!("No team with id {}", id),
    }
    Ok(())
}
