//! Database connection and schema management

use crate::config::MongoSettings;
use crate::error::{FederationError, Result};
use mongodb::{
    bson::{doc, Document},
    error::ErrorKind,
    options::ClientOptions,
    Client, Collection, Database, IndexModel,
};
use std::future::IntoFuture;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

use super::models::{TEAM_ID_FIELD, TEAM_NAME_FIELD};

pub const TEAMS_COLLECTION: &str = "teams";
pub const PLAYERS_COLLECTION: &str = "players";

/// Server error code for "namespace already exists".
const NAMESPACE_EXISTS: i32 = 48;

/// How bootstrap failures are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootstrapPolicy {
    /// Every failure is logged and ignored.
    #[default]
    Lenient,
    /// Only "already exists" is ignored; anything else is returned.
    Strict,
}

/// A bootstrap step whose failure was tolerated, with the server's reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedStep {
    pub step: String,
    pub reason: String,
}

/// Outcome of the collection and index setup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub completed: Vec<String>,
    pub skipped: Vec<SkippedStep>,
}

impl BootstrapReport {
    pub fn is_fresh(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn was_skipped(&self, step: &str) -> bool {
        self.skipped.iter().any(|s| s.step == step)
    }
}

/// Owns the MongoDB client for the federation database.
pub struct FederationDatabase {
    client: Client,
    pub(crate) db: Database,
    closed: AtomicBool,
    bootstrap_report: BootstrapReport,
}

impl FederationDatabase {
    /// Connect, verify the deployment is reachable, and ensure collections
    /// and indexes exist.
    pub async fn connect(settings: &MongoSettings) -> Result<Self> {
        let options = ClientOptions::parse(&settings.uri)
            .await
            .map_err(|source| FederationError::Connection { source })?;
        let client =
            Client::with_options(options).map_err(|source| FederationError::Connection { source })?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| FederationError::Connection { source })?;

        info!(database = %settings.database, "connected to MongoDB");

        let mut database = Self {
            db: client.database(&settings.database),
            client,
            closed: AtomicBool::new(false),
            bootstrap_report: BootstrapReport::default(),
        };
        database.bootstrap_report = database.bootstrap(settings.bootstrap_policy()).await?;
        Ok(database)
    }

    /// Create the `teams` and `players` collections and their lookup indexes.
    ///
    /// Each step runs independently so a pre-existing collection does not
    /// prevent the index steps from running.
    pub async fn bootstrap(&self, policy: BootstrapPolicy) -> Result<BootstrapReport> {
        let mut report = BootstrapReport::default();

        run_step(
            policy,
            &mut report,
            "create collection teams",
            self.db.create_collection(TEAMS_COLLECTION),
        )
        .await?;

        run_step(
            policy,
            &mut report,
            "create collection players",
            self.db.create_collection(PLAYERS_COLLECTION),
        )
        .await?;

        let teams = self.teams_collection();
        run_step(
            policy,
            &mut report,
            "create index teams.teamName",
            async move {
                teams
                    .create_index(ascending_index(TEAM_NAME_FIELD))
                    .await
                    .map(|_| ())
            },
        )
        .await?;

        let players = self.players_collection();
        run_step(
            policy,
            &mut report,
            "create index players.teamId",
            async move {
                players
                    .create_index(ascending_index(TEAM_ID_FIELD))
                    .await
                    .map(|_| ())
            },
        )
        .await?;

        Ok(report)
    }

    /// Report from the bootstrap that ran during [`FederationDatabase::connect`].
    pub fn bootstrap_report(&self) -> &BootstrapReport {
        &self.bootstrap_report
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    pub fn teams_collection(&self) -> Collection<Document> {
        self.db.collection(TEAMS_COLLECTION)
    }

    pub fn players_collection(&self) -> Collection<Document> {
        self.db.collection(PLAYERS_COLLECTION)
    }

    /// Shut down the client and its pool. Safe to call more than once.
    pub async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            debug!("MongoDB connection already closed");
            return;
        }
        self.client.clone().shutdown().await;
        info!(database = %self.db.name(), "MongoDB connection closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub(crate) fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(FederationError::Closed);
        }
        Ok(())
    }
}

fn ascending_index(field: &str) -> IndexModel {
    let mut keys = Document::new();
    keys.insert(field, 1);
    IndexModel::builder().keys(keys).build()
}

pub(crate) fn is_already_exists(err: &mongodb::error::Error) -> bool {
    matches!(*err.kind, ErrorKind::Command(ref cmd) if cmd.code == NAMESPACE_EXISTS)
}

async fn run_step<F>(
    policy: BootstrapPolicy,
    report: &mut BootstrapReport,
    step: &str,
    fut: F,
) -> Result<()>
where
    F: IntoFuture<Output = mongodb::error::Result<()>>,
{
    match fut.await {
        Ok(()) => {
            debug!(step, "bootstrap step completed");
            report.completed.push(step.to_string());
            Ok(())
        }
        Err(e) if policy == BootstrapPolicy::Lenient || is_already_exists(&e) => {
            info!(step, error = %e, "bootstrap step skipped, target may already exist");
            report.skipped.push(SkippedStep {
                step: step.to_string(),
                reason: e.to_string(),
            });
            Ok(())
        }
        Err(source) => {
            warn!(step, error = %source, "bootstrap step failed");
            Err(FederationError::Bootstrap {
                step: step.to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn driver_error() -> mongodb::error::Error {
        ClientOptions::parse("not-a-mongodb-uri").await.unwrap_err()
    }

    #[tokio::test]
    async fn test_lenient_step_records_failure_reason() {
        let err = driver_error().await;
        let expected = err.to_string();
        let mut report = BootstrapReport::default();

        let result = run_step(
            BootstrapPolicy::Lenient,
            &mut report,
            "create collection teams",
            async move { Err(err) },
        )
        .await;

        assert!(result.is_ok());
        assert!(!report.is_fresh());
        assert!(report.was_skipped("create collection teams"));
        assert_eq!(report.skipped[0].reason, expected);
    }

    #[tokio::test]
    async fn test_strict_step_returns_other_failures() {
        let err = driver_error().await;
        let mut report = BootstrapReport::default();

        let result = run_step(
            BootstrapPolicy::Strict,
            &mut report,
            "create index teams.teamName",
            async move { Err(err) },
        )
        .await;

        match result.unwrap_err() {
            FederationError::Bootstrap { step, .. } => {
                assert_eq!(step, "create index teams.teamName")
            }
            other => panic!("Expected Bootstrap error, got {:?}", other),
        }
        assert!(report.skipped.is_empty());
        assert!(report.completed.is_empty());
    }

    #[tokio::test]
    async fn test_successful_step_is_completed() {
        let mut report = BootstrapReport::default();

        run_step(
            BootstrapPolicy::Strict,
            &mut report,
            "create collection players",
            async { Ok(()) },
        )
        .await
        .unwrap();

        assert_eq!(report.completed, vec!["create collection players".to_string()]);
        assert!(report.is_fresh());
    }
}
