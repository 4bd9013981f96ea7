//! Unit tests for command helpers

use super::init::format_bootstrap_report;
use super::players::build_player;
use super::*;
use crate::cli::{types::RatingArg, TeamArgs};
use crate::storage::{BootstrapReport, SkippedStep};

fn rating(s: &str) -> RatingArg {
    s.parse().unwrap()
}

#[test]
fn test_team_from_args() {
    let team = Team::from(TeamArgs {
        team_name: "Super Eagles".to_string(),
        country_name: "Nigeria".to_string(),
        fed_rep_name: "Ibrahim Gusau".to_string(),
        manager_name: "Eric Chelle".to_string(),
        captain_name: "William Troost-Ekong".to_string(),
    });

    assert_eq!(team.team_name, "Super Eagles");
    assert_eq!(team.country_name, "Nigeria");
    assert_eq!(team.fed_rep_name, "Ibrahim Gusau");
    assert_eq!(team.manager_name, "Eric Chelle");
    assert_eq!(team.captain_name, "William Troost-Ekong");
    assert!(team.id.is_none());
}

#[test]
fn test_build_player() {
    let player = build_player(
        "Victor".to_string(),
        "Osimhen".to_string(),
        "AT".to_string(),
        Some("abc123".to_string()),
        vec![rating("AT=92"), rating("MD=70")],
    );

    assert_eq!(player.first_name, "Victor");
    assert_eq!(player.team_id.as_deref(), Some("abc123"));
    assert_eq!(player.ratings.len(), 2);
    assert_eq!(player.primary_rating(), Some(92));
}

#[test]
fn test_build_player_last_rating_wins() {
    let player = build_player(
        "Ademola".to_string(),
        "Lookman".to_string(),
        "AT".to_string(),
        None,
        vec![rating("AT=80"), rating("AT=88")],
    );

    assert_eq!(player.ratings.get("AT"), Some(&88));
    assert!(player.team_id.is_none());
}

#[test]
fn test_format_team_line() {
    let team = Team::new("Super Eagles", "Nigeria", "Rep", "Coach", "Captain").with_id("t1");
    assert_eq!(
        format_team_line(&team),
        "t1  Super Eagles (Nigeria) - manager: Coach, captain: Captain"
    );

    let unsaved = Team::new("X", "Y", "Rep", "Coach", "Captain");
    assert!(format_team_line(&unsaved).starts_with("-  X (Y)"));
}

#[test]
fn test_format_player_line_sorts_ratings() {
    let player = Player::new("Alex", "Iwobi", "MD")
        .with_rating("MD", 81)
        .with_rating("AT", 74)
        .with_rating("DF", 60);

    assert_eq!(
        format_player_line(&player),
        "Alex Iwobi [MD] AT=74, DF=60, MD=81"
    );
}

#[test]
fn test_format_team_details() {
    let team = Team::new("Super Eagles", "Nigeria", "Rep", "Coach", "Captain").with_players(vec![
        Player::new("Stanley", "Nwabali", "GK").with_rating("GK", 78),
        Player::new("Calvin", "Bassey", "DF").with_rating("DF", 77),
    ]);

    let details = format_team_details(&team);

    assert!(details.starts_with("Super Eagles\n"));
    assert!(details.contains("Country rating: 77.5"));
    assert!(details.contains("Players (2):"));
    assert!(details.contains("Stanley Nwabali [GK] GK=78"));
    assert!(details.contains("Calvin Bassey [DF] DF=77"));
}

#[test]
fn test_format_bootstrap_report_shows_skip_reason() {
    let report = BootstrapReport {
        completed: vec!["create index teams.teamName".to_string()],
        skipped: vec![SkippedStep {
            step: "create collection teams".to_string(),
            reason: "not authorized on aafl to execute command".to_string(),
        }],
    };

    let lines = format_bootstrap_report(&report);

    assert_eq!(
        lines,
        vec![
            "  created: create index teams.teamName".to_string(),
            "  skipped: create collection teams (not authorized on aafl to execute command)"
                .to_string(),
        ]
    );
    assert!(lines.iter().all(|l| !l.contains("already present")));
}

#[test]
fn test_format_bootstrap_report_empty() {
    assert!(format_bootstrap_report(&BootstrapReport::default()).is_empty());
}
