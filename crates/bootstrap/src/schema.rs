//! Schema import: load a SQL file and apply it to the target database.

use std::io::ErrorKind;
use std::path::Path;

use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};
use tracing::info;

use crate::error::BootstrapError;

/// Apply the schema file to the target database as a single batch.
///
/// The file is read before any connection is opened, so a bad path
/// fails without touching the network. The batch runs over the simple
/// query protocol and is not wrapped in a transaction; if a statement
/// mid-batch fails, earlier statements remain applied and the error
/// says so.
pub async fn apply_schema(database: &PgConnectOptions, path: &Path) -> Result<(), BootstrapError> {
    let sql = read_schema(path).await?;
    let db_name = target_name(database);

    let apply_err = |source| BootstrapError::SchemaApply {
        database: target_name(database),
        source,
    };

    let mut conn = PgConnection::connect_with(database).await.map_err(apply_err)?;
    let applied = sqlx::raw_sql(&sql).execute(&mut conn).await;
    let _ = conn.close().await;
    applied.map_err(apply_err)?;

    info!(database = %db_name, path = %path.display(), "schema applied");
    Ok(())
}

/// True when the target database already has at least one table in the
/// `public` schema. Used to make re-runs skip the import.
pub async fn schema_present(database: &PgConnectOptions) -> Result<bool, BootstrapError> {
    let apply_err = |source| BootstrapError::SchemaApply {
        database: target_name(database),
        source,
    };

    let mut conn = PgConnection::connect_with(database).await.map_err(apply_err)?;
    let present: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_schema = 'public')",
    )
    .fetch_one(&mut conn)
    .await
    .map_err(apply_err)?;
    let _ = conn.close().await;

    Ok(present)
}

async fn read_schema(path: &Path) -> Result<String, BootstrapError> {
    match tokio::fs::read_to_string(path).await {
        Ok(sql) => Ok(sql),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(BootstrapError::SchemaMissing {
            path: path.to_path_buf(),
        }),
        Err(err) => Err(BootstrapError::SchemaRead {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

fn target_name(database: &PgConnectOptions) -> String {
    database.get_database().unwrap_or_default().to_string()
}
