//! Basic database query operations

use super::{models::*, schema::FederationDatabase};
use crate::error::{FederationError, Result};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use tracing::debug;

impl FederationDatabase {
    /// Insert a team and return its new id. The team's `players` are not
    /// written.
    pub async fn insert_team(&self, team: &Team) -> Result<String> {
        self.ensure_open()?;
        let result = self.teams_collection().insert_one(team.to_document()).await?;
        let id = id_to_string(&result.inserted_id)?;
        debug!(team_id = %id, team_name = %team.team_name, "inserted team");
        Ok(id)
    }

    /// Insert a player and return its new id. `team_id` is stored as given,
    /// whether or not the team exists.
    pub async fn insert_player(&self, player: &Player) -> Result<String> {
        self.ensure_open()?;
        let result = self
            .players_collection()
            .insert_one(player.to_document())
            .await?;
        let id = id_to_string(&result.inserted_id)?;
        debug!(player_id = %id, team_id = ?player.team_id, "inserted player");
        Ok(id)
    }

    pub async fn find_team(&self, id: &str) -> Result<Option<Team>> {
        self.ensure_open()?;
        let oid = parse_object_id(id)?;
        let doc = self.teams_collection().find_one(doc! { "_id": oid }).await?;
        doc.as_ref().map(Team::from_document).transpose()
    }

    /// First team with the given name. Names are not unique.
    pub async fn find_team_by_name(&self, team_name: &str) -> Result<Option<Team>> {
        self.ensure_open()?;
        let doc = self
            .teams_collection()
            .find_one(doc! { TEAM_NAME_FIELD: team_name })
            .await?;
        doc.as_ref().map(Team::from_document).transpose()
    }

    /// All teams ordered by name.
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        self.ensure_open()?;
        let docs: Vec<Document> = self
            .teams_collection()
            .find(doc! {})
            .sort(doc! { TEAM_NAME_FIELD: 1 })
            .await?
            .try_collect()
            .await?;
        debug!(count = docs.len(), "listed teams");
        docs.iter().map(Team::from_document).collect()
    }

    /// Players whose `teamId` equals `team_id`, ordered by surname.
    pub async fn players_for_team(&self, team_id: &str) -> Result<Vec<Player>> {
        self.ensure_open()?;
        let docs: Vec<Document> = self
            .players_collection()
            .find(doc! { TEAM_ID_FIELD: team_id })
            .sort(doc! { "surname": 1, "firstName": 1 })
            .await?
            .try_collect()
            .await?;
        docs.iter().map(Player::from_document).collect()
    }

    /// Team with its `players` populated from the players collection.
    pub async fn team_with_players(&self, id: &str) -> Result<Option<Team>> {
        let Some(team) = self.find_team(id).await? else {
            return Ok(None);
        };
        let players = self.players_for_team(id).await?;
        Ok(Some(team.with_players(players)))
    }
}

fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| FederationError::InvalidId { id: id.to_string() })
}

fn id_to_string(id: &Bson) -> Result<String> {
    match id {
        Bson::ObjectId(oid) => Ok(oid.to_hex()),
        Bson::String(s) => Ok(s.clone()),
        other => Err(FederationError::invalid_document(
            "_id",
            format!("unsupported id type {:?}", other.element_type()),
        )),
    }
}
