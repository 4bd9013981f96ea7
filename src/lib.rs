//! AAFL Federation Store Library
//!
//! Persistence for national teams and their players in MongoDB.
//!
//! ## Features
//!
//! - **Shared Connection**: One lazily established client per `ConnectionManager`
//! - **Idempotent Bootstrap**: `teams` and `players` collections with lookup indexes
//! - **Document Mapping**: `Team` and `Player` to and from BSON documents
//! - **Queries**: Insert, lookup and listing of teams and their players
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aafl_federation::{storage::*, MongoSettings};
//!
//! # async fn example() -> aafl_federation::Result<()> {
//! let settings = MongoSettings::new("mongodb://localhost:27017", "aafl")?;
//! let manager = ConnectionManager::new(settings);
//!
//! let db = manager.get_instance().await?;
//! let team_id = db
//!     .insert_team(&Team::new("Bafana Bafana", "South Africa", "Rep", "Manager", "Captain"))
//!     .await?;
//! db.insert_player(&Player::new("Percy", "Tau", "AT").with_rating("AT", 84).with_team_id(team_id))
//!     .await?;
//!
//! manager.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Settings come from `~/.config/aafl-federation/config.toml` (or the file
//! named by `AAFL_CONFIG`) and can be overridden per value:
//! ```bash
//! export AAFL_MONGODB_URI=mongodb://localhost:27017
//! export AAFL_MONGODB_DATABASE=aafl
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use config::MongoSettings;
pub use error::{FederationError, Result};
pub use storage::{ConnectionManager, FederationDatabase, Player, Team};
