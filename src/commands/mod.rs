//! Command implementations for the federation CLI

pub mod init;
pub mod players;
pub mod teams;

#[cfg(test)]
mod tests;

use crate::storage::{Player, Team};

/// One-line summary of a team.
pub fn format_team_line(team: &Team) -> String {
    format!(
        "{}  {} ({}) - manager: {}, captain: {}",
        team.id.as_deref().unwrap_or("-"),
        team.team_name,
        team.country_name,
        team.manager_name,
        team.captain_name
    )
}

/// One-line summary of a player with ratings sorted by attribute.
pub fn format_player_line(player: &Player) -> String {
    let mut ratings: Vec<(&String, &i32)> = player.ratings.iter().collect();
    ratings.sort();
    let ratings = ratings
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} {} [{}] {}",
        player.first_name, player.surname, player.position, ratings
    )
}

/// Multi-line view of a team with its loaded players.
pub fn format_team_details(team: &Team) -> String {
    let mut out = team.team_name.clone();
    out.push_str(&format!("\n  Country: {}", team.country_name));
    out.push_str(&format!("\n  Federation representative: {}", team.fed_rep_name));
    out.push_str(&format!("\n  Manager: {}", team.manager_name));
    out.push_str(&format!("\n  Captain: {}", team.captain_name));
    out.push_str(&format!("\n  Country rating: {:.1}", team.country_rating()));
    out.push_str(&format!("\n  Players ({}):", team.players.len()));
    for player in &team.players {
        out.push_str("\n    ");
        out.push_str(&format_player_line(player));
    }
    out
}
