//! `staffdb` CLI entry-point.
//!
//! Available sub-commands:
//! - `init-db`      — wait for the server, create the database, apply the schema.
//! - `set-employee` — insert one employee row.
//! - `get-employee` — look up an employee by id.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;

use bootstrap::{CancelToken, InitConfig, Initializer, WaitConfig};
use db::{ConnectConfig, DbPool};
use employees::{EmployeeService, PgEmployeeStore};

#[derive(Parser)]
#[command(
    name = "staffdb",
    about = "Bootstrap a PostgreSQL employee database and query it",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Wait for the server, create the database if needed, apply the schema.
    InitDb {
        /// Path to the schema SQL file.
        #[arg(long, env = "STAFFDB_SCHEMA", default_value = "schema/employees.sql")]
        schema: PathBuf,
        /// Seconds to keep retrying the first connection.
        #[arg(long, env = "STAFFDB_WAIT_TIMEOUT_SECS", default_value_t = 30)]
        wait_timeout_secs: u64,
        /// Milliseconds between connection attempts.
        #[arg(long, env = "STAFFDB_WAIT_POLL_MS", default_value_t = 1000)]
        wait_poll_ms: u64,
    },
    /// Insert one employee row.
    SetEmployee {
        #[arg(long = "employeeId")]
        employee_id: i32,
        #[arg(long = "employeeName")]
        employee_name: String,
        #[arg(long = "employeeSalary")]
        employee_salary: Decimal,
    },
    /// Look up an employee by id.
    GetEmployee {
        #[arg(long = "employeeId")]
        employee_id: i32,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match ConnectConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Bad database configuration: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::InitDb {
            schema,
            wait_timeout_secs,
            wait_poll_ms,
        } => {
            let cancel = CancelToken::new();
            tokio::spawn({
                let cancel = cancel.clone();
                async move {
                    if tokio::signal::ctrl_c().await.is_ok() {
                        info!("interrupt received, cancelling");
                        cancel.cancel();
                    }
                }
            });

            let initializer = Initializer::new(InitConfig {
                connect: config,
                schema_path: schema,
                wait: WaitConfig {
                    timeout: Duration::from_secs(wait_timeout_secs),
                    poll_interval: Duration::from_millis(wait_poll_ms),
                },
            });

            match initializer.run(&cancel).await {
                Ok(report) => {
                    println!(
                        "✅ Database initialized ({:?}, schema {:?})",
                        report.database, report.schema
                    );
                }
                Err(e) => {
                    eprintln!("❌ Initialization failed at {}: {e}", e.step());
                    std::process::exit(1);
                }
            }
        }
        Command::SetEmployee {
            employee_id,
            employee_name,
            employee_salary,
        } => {
            let pool = connect(&config).await;
            let service = EmployeeService::new(PgEmployeeStore::new(pool.clone()));

            match service
                .add_employee(employee_id, employee_name, employee_salary)
                .await
            {
                Ok(saved) => println!("{saved}"),
                Err(e) => {
                    eprintln!("❌ Could not save employee {employee_id}: {e}");
                    std::process::exit(1);
                }
            }
            pool.close().await;
        }
        Command::GetEmployee { employee_id } => {
            let pool = connect(&config).await;
            let service = EmployeeService::new(PgEmployeeStore::new(pool.clone()));

            match service.get_employee(employee_id).await {
                Ok(Some(employee)) => println!("{employee}"),
                Ok(None) => println!("Employee not found"),
                Err(e) => {
                    eprintln!("❌ Could not look up employee {employee_id}: {e}");
                    std::process::exit(1);
                }
            }
            pool.close().await;
        }
    }
}

async fn connect(config: &ConnectConfig) -> DbPool {
    db::pool::create_pool(config.database_options(), 2)
        .await
        .unwrap_or_else(|e| {
            eprintln!("❌ Could not connect to database {:?}: {e}", config.database);
            std::process::exit(1);
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn the_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn employee_flags_use_the_camel_case_names() {
        let cli = Cli::try_parse_from([
            "staffdb",
            "set-employee",
            "--employeeId",
            "1",
            "--employeeName",
            "Jane",
            "--employeeSalary",
            "50000",
        ])
        .expect("the documented flags must parse");

        match cli.command {
            Command::SetEmployee {
                employee_id,
                employee_name,
                employee_salary,
            } => {
                assert_eq!(employee_id, 1);
                assert_eq!(employee_name, "Jane");
                assert_eq!(employee_salary, Decimal::from(50_000));
            }
            _ => panic!("expected the set-employee command"),
        }
    }

    #[test]
    fn init_db_defaults_match_the_documented_values() {
        for var in [
            "STAFFDB_SCHEMA",
            "STAFFDB_WAIT_TIMEOUT_SECS",
            "STAFFDB_WAIT_POLL_MS",
        ] {
            std::env::remove_var(var);
        }

        let cli = Cli::try_parse_from(["staffdb", "init-db"]).expect("no flags are required");

        match cli.command {
            Command::InitDb {
                schema,
                wait_timeout_secs,
                wait_poll_ms,
            } => {
                assert_eq!(schema, PathBuf::from("schema/employees.sql"));
                assert_eq!(wait_timeout_secs, 30);
                assert_eq!(wait_poll_ms, 1000);
            }
            _ => panic!("expected the init-db command"),
        }
    }

    #[test]
    fn a_non_numeric_salary_is_rejected_at_parse_time() {
        let parsed = Cli::try_parse_from([
            "staffdb",
            "set-employee",
            "--employeeId",
            "1",
            "--employeeName",
            "Jane",
            "--employeeSalary",
            "lots",
        ]);
        assert!(parsed.is_err());
    }
}
