//! Storage layer for the federation store
//!
//! This module wraps the MongoDB database, organized into logical components:
//! - `models`: Team and Player records and their document mapping
//! - `schema`: Client ownership, collection and index bootstrap
//! - `manager`: Lazily established, shared database handle
//! - `queries`: Basic CRUD operations

pub mod manager;
pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use manager::ConnectionManager;
pub use models::*;
pub use schema::{
    BootstrapPolicy, BootstrapReport, FederationDatabase, SkippedStep, PLAYERS_COLLECTION,
    TEAMS_COLLECTION,
};
