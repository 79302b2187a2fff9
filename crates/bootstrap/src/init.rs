//! One-shot initialization pipeline: wait, provision, import.

use std::path::PathBuf;

use db::ConnectConfig;
use tracing::{info, instrument};

use crate::cancel::CancelToken;
use crate::error::BootstrapError;
use crate::provision::{self, Provisioned};
use crate::schema;
use crate::wait::{self, WaitConfig};

/// Everything the pipeline needs, assembled by the caller.
#[derive(Debug, Clone)]
pub struct InitConfig {
    pub connect: ConnectConfig,
    pub schema_path: PathBuf,
    pub wait: WaitConfig,
}

/// What the schema step did on this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaOutcome {
    Applied,
    /// The target database already had tables, so the import was skipped
    /// rather than replayed against live data.
    SkippedAlreadyPresent,
}

/// What a successful run did, step by step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    pub database: Provisioned,
    pub schema: SchemaOutcome,
}

/// Sequences server wait, database provisioning and schema import.
///
/// Steps run strictly in order and the first failure aborts the rest;
/// only the wait step retries internally. Errors identify the step they
/// came from via [`BootstrapError::step`].
pub struct Initializer {
    config: InitConfig,
}

impl Initializer {
    pub fn new(config: InitConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline once.
    ///
    /// Concurrent runs from other processes are not coordinated here
    /// beyond the provisioner's tolerance for create races.
    #[instrument(skip_all, fields(database = %self.config.connect.database))]
    pub async fn run(&self, cancel: &CancelToken) -> Result<InitReport, BootstrapError> {
        let server = self.config.connect.server_options();
        let target = self.config.connect.database_options();

        info!("waiting for the database server");
        wait::wait_for_server(&server, &self.config.wait, cancel).await?;

        info!("ensuring the database exists");
        let database = provision::ensure_database(&server, &self.config.connect.database).await?;

        info!(path = %self.config.schema_path.display(), "importing the schema");
        let schema = if schema::schema_present(&target).await? {
            info!("schema already present, skipping the import");
            SchemaOutcome::SkippedAlreadyPresent
        } else {
            schema::apply_schema(&target, &self.config.schema_path).await?;
            SchemaOutcome::Applied
        };

        info!(
            database_outcome = ?database,
            schema_outcome = ?schema,
            "database initialization complete"
        );
        Ok(InitReport { database, schema })
    }
}
