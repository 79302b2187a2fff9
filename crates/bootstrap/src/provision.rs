//! Idempotent creation of the target database.

use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};
use tracing::{debug, info};

use crate::error::BootstrapError;

/// Whether [`ensure_database`] had to do anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    AlreadyExists,
}

/// Make sure a database with the given name exists on the server.
///
/// The name is matched exactly, case sensitive, against the catalog.
/// A concurrent creation losing the race to another process is reported
/// as [`Provisioned::AlreadyExists`], not as an error, so repeated and
/// parallel runs converge on the same state.
pub async fn ensure_database(
    server: &PgConnectOptions,
    name: &str,
) -> Result<Provisioned, BootstrapError> {
    let provision_err = |source| BootstrapError::Provision {
        name: name.to_string(),
        source,
    };

    let mut conn = PgConnection::connect_with(server).await.map_err(provision_err)?;

    let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM pg_database WHERE datname = $1")
        .bind(name)
        .fetch_optional(&mut conn)
        .await
        .map_err(provision_err)?;

    if exists.is_some() {
        debug!(database = name, "database already exists");
        let _ = conn.close().await;
        return Ok(Provisioned::AlreadyExists);
    }

    // CREATE DATABASE takes no bind parameters, so the name is spliced
    // in as a quoted identifier.
    let create = format!("CREATE DATABASE {}", quote_ident(name));
    let created = sqlx::raw_sql(&create).execute(&mut conn).await;
    let _ = conn.close().await;

    match created {
        Ok(_) => {
            info!(database = name, "database created");
            Ok(Provisioned::Created)
        }
        Err(err) if is_duplicate_database(&err) => {
            debug!(database = name, "database appeared concurrently");
            Ok(Provisioned::AlreadyExists)
        }
        Err(err) => Err(provision_err(err)),
    }
}

/// Quote a SQL identifier: wrap in double quotes, doubling any embedded
/// double quote. Keeps hostile names inert inside the statement.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// A create that lost a race surfaces as duplicate_database (42P04), or
/// as a unique violation on the catalog row under some server versions.
fn is_duplicate_database(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.code().as_deref() == Some("42P04") || db_err.is_unique_violation())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_wrapped_in_double_quotes() {
        assert_eq!(quote_ident("staff"), "\"staff\"");
        assert_eq!(quote_ident("Staff_DB"), "\"Staff_DB\"");
    }

    #[test]
    fn embedded_double_quotes_are_doubled() {
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
        assert_eq!(quote_ident("\""), "\"\"\"\"");
    }

    #[test]
    fn statement_metacharacters_stay_inert_inside_the_quotes() {
        let quoted = quote_ident("x\"; DROP DATABASE staff; --");
        assert_eq!(quoted, "\"x\"\"; DROP DATABASE staff; --\"");
        // Still a single identifier token: the embedded quote is
        // doubled, so the closing quote is the final character.
        assert!(quoted.ends_with("--\""));
    }

    #[test]
    fn provisioned_outcomes_are_comparable() {
        assert_eq!(Provisioned::Created, Provisioned::Created);
        assert_ne!(Provisioned::Created, Provisioned::AlreadyExists);
    }
}
