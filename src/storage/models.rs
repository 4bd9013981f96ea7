//! Data models for the storage layer

use crate::error::{FederationError, Result};
use mongodb::bson::{doc, Bson, Document};
use serde::Serialize;
use std::collections::HashMap;

pub const TEAM_NAME_FIELD: &str = "teamName";
pub const TEAM_ID_FIELD: &str = "teamId";

/// A national team. `players` is populated in memory only and never persisted
/// with the team document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Option<String>,
    pub fed_rep_name: String,
    pub country_name: String,
    pub team_name: String,
    pub manager_name: String,
    pub captain_name: String,
    pub players: Vec<Player>,
}

/// A player belonging (weakly, by `team_id`) to a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Option<String>,
    pub first_name: String,
    pub surname: String,
    pub position: String,
    pub ratings: HashMap<String, i32>,
    pub team_id: Option<String>,
}

impl Team {
    pub fn new(
        team_name: impl Into<String>,
        country_name: impl Into<String>,
        fed_rep_name: impl Into<String>,
        manager_name: impl Into<String>,
        captain_name: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            fed_rep_name: fed_rep_name.into(),
            country_name: country_name.into(),
            team_name: team_name.into(),
            manager_name: manager_name.into(),
            captain_name: captain_name.into(),
            players: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    /// Document written to the `teams` collection: the five descriptive
    /// fields only.
    pub fn to_document(&self) -> Document {
        doc! {
            "fedRepName": self.fed_rep_name.as_str(),
            "countryName": self.country_name.as_str(),
            "teamName": self.team_name.as_str(),
            "managerName": self.manager_name.as_str(),
            "captainName": self.captain_name.as_str(),
        }
    }

    /// Inverse of [`Team::to_document`]. Missing or null fields default to
    /// empty strings; `players` is left empty.
    pub fn from_document(doc: &Document) -> Result<Self> {
        Ok(Self {
            id: read_id(doc)?,
            fed_rep_name: read_string(doc, "fedRepName")?,
            country_name: read_string(doc, "countryName")?,
            team_name: read_string(doc, TEAM_NAME_FIELD)?,
            manager_name: read_string(doc, "managerName")?,
            captain_name: read_string(doc, "captainName")?,
            players: Vec::new(),
        })
    }

    /// Average primary rating of the loaded players, rounded to one decimal.
    ///
    /// Players without a rating for their own position are ignored. Returns
    /// 0.0 when no player contributes.
    pub fn country_rating(&self) -> f64 {
        let ratings: Vec<i32> = self
            .players
            .iter()
            .filter_map(Player::primary_rating)
            .collect();

        if ratings.is_empty() {
            return 0.0;
        }

        let total: i64 = ratings.iter().map(|&r| r as i64).sum();
        let average = total as f64 / ratings.len() as f64;
        (average * 10.0).round() / 10.0
    }
}

impl Player {
    pub fn new(
        first_name: impl Into<String>,
        surname: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
            position: position.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    pub fn with_rating(mut self, attribute: impl Into<String>, score: i32) -> Self {
        self.ratings.insert(attribute.into(), score);
        self
    }

    pub fn with_ratings(mut self, ratings: HashMap<String, i32>) -> Self {
        self.ratings = ratings;
        self
    }

    /// Rating stored under the player's own position, if any.
    pub fn primary_rating(&self) -> Option<i32> {
        self.ratings.get(&self.position).copied()
    }

    /// Document written to the `players` collection. `teamId` is always
    /// present, as null when unset.
    pub fn to_document(&self) -> Document {
        let ratings: Document = self
            .ratings
            .iter()
            .map(|(k, v)| (k.clone(), Bson::Int32(*v)))
            .collect();

        let team_id = match &self.team_id {
            Some(id) => Bson::String(id.clone()),
            None => Bson::Null,
        };

        doc! {
            "firstName": self.first_name.as_str(),
            "surname": self.surname.as_str(),
            "position": self.position.as_str(),
            "ratings": ratings,
            "teamId": team_id,
        }
    }

    /// Inverse of [`Player::to_document`].
    pub fn from_document(doc: &Document) -> Result<Self> {
        Ok(Self {
            id: read_id(doc)?,
            first_name: read_string(doc, "firstName")?,
            surname: read_string(doc, "surname")?,
            position: read_string(doc, "position")?,
            ratings: read_ratings(doc)?,
            team_id: read_optional_string(doc, TEAM_ID_FIELD)?,
        })
    }
}

/// `_id` as a string: ObjectIds become their hex form.
fn read_id(doc: &Document) -> Result<Option<String>> {
    match doc.get("_id") {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::ObjectId(oid)) => Ok(Some(oid.to_hex())),
        Some(Bson::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(FederationError::invalid_document(
            "_id",
            format!("unsupported id type {:?}", other.element_type()),
        )),
    }
}

fn read_optional_string(doc: &Document, field: &str) -> Result<Option<String>> {
    match doc.get(field) {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::String(s)) => Ok(Some(s.clone())),
        Some(Bson::ObjectId(oid)) => Ok(Some(oid.to_hex())),
        Some(other) => Err(FederationError::invalid_document(
            field,
            format!("expected a string, found {:?}", other.element_type()),
        )),
    }
}

fn read_string(doc: &Document, field: &str) -> Result<String> {
    match doc.get(field) {
        None | Some(Bson::Null) => Ok(String::new()),
        Some(Bson::String(s)) => Ok(s.clone()),
        Some(other) => Err(FederationError::invalid_document(
            field,
            format!("expected a string, found {:?}", other.element_type()),
        )),
    }
}

fn read_ratings(doc: &Document) -> Result<HashMap<String, i32>> {
    let ratings = match doc.get("ratings") {
        None | Some(Bson::Null) => return Ok(HashMap::new()),
        Some(Bson::Document(d)) => d,
        Some(other) => {
            return Err(FederationError::invalid_document(
                "ratings",
                format!("expected a document, found {:?}", other.element_type()),
            ))
        }
    };

    ratings
        .iter()
        .map(|(key, value)| {
            let score = match value {
                Bson::Int32(v) => *v,
                Bson::Int64(v) => i32::try_from(*v).map_err(|_| {
                    FederationError::invalid_document(
                        format!("ratings.{}", key),
                        format!("{} does not fit in a 32-bit integer", v),
                    )
                })?,
                other => {
                    return Err(FederationError::invalid_document(
                        format!("ratings.{}", key),
                        format!("expected an integer, found {:?}", other.element_type()),
                    ))
                }
            };
            Ok((key.clone(), score))
        })
        .collect()
}
