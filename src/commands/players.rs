//! Player command implementations

use crate::{
    cli::types::RatingArg,
    storage::{ConnectionManager, Player},
    Result,
};

/// Build a player from command-line values. Later ratings for the same
/// attribute replace earlier ones.
pub fn build_player(
    first_name: String,
    surname: String,
    position: String,
    team_id: Option<String>,
    ratings: Vec<RatingArg>,
) -> Player {
    let mut player = Player::new(first_name, surname, position);
    player.team_id = team_id;
    for rating in ratings {
        player.ratings.insert(rating.attribute, rating.score);
    }
    player
}

pub async fn handle_add_player(manager: &ConnectionManager, player: Player) -> Result<()> {
    let db = manager.get_instance().await?;
    let id = db.insert_player(&player).await?;
    println!("{}", id);
    Ok(())
}
