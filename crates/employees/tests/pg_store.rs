//! Integration tests for the Postgres-backed store.
//!
//! Ignored by default. They need a server initialized with the
//! employees schema and reachable through the `STAFFDB_*` environment
//! variables:
//!
//! ```sh
//! STAFFDB_DATABASE=staff cargo test -p employees -- --ignored
//! ```

use db::{ConnectConfig, DbPool, Employee};
use employees::{EmployeeService, EmployeeStore, PgEmployeeStore};
use rust_decimal::Decimal;

async fn live_pool() -> DbPool {
    let config = ConnectConfig::from_env().expect("STAFFDB_* variables must be set");
    db::pool::create_pool(config.database_options(), 2)
        .await
        .expect("the target database must accept connections")
}

/// Remove a fixture row so reruns start clean.
async fn clear(pool: &DbPool, id: i32) {
    sqlx::query("DELETE FROM employees WHERE employeeid = $1")
        .bind(id)
        .execute(pool)
        .await
        .expect("fixture cleanup must succeed");
}

fn salary(raw: &str) -> Decimal {
    raw.parse().expect("test salaries are valid decimals")
}

#[tokio::test]
#[ignore = "needs an initialized PostgreSQL database configured via STAFFDB_*"]
async fn a_row_survives_the_postgres_round_trip() {
    let pool = live_pool().await;
    clear(&pool, 910_001).await;
    let store = PgEmployeeStore::new(pool.clone());

    let jane = Employee::new(910_001, "Jane", salary("50000"));
    store.add(&jane).await.expect("insert must succeed");

    let fetched = store
        .get(910_001)
        .await
        .expect("lookup must succeed")
        .expect("the row was just inserted");
    assert_eq!(fetched, jane);
    assert_eq!(fetched.to_string(), "Id=910001, Name=Jane, Salary=50000");

    clear(&pool, 910_001).await;
}

#[tokio::test]
#[ignore = "needs an initialized PostgreSQL database configured via STAFFDB_*"]
async fn salary_scale_is_preserved_by_the_numeric_column() {
    let pool = live_pool().await;
    clear(&pool, 910_002).await;
    let store = PgEmployeeStore::new(pool.clone());

    let precise = Employee::new(910_002, "Cent", salary("1234.56"));
    store.add(&precise).await.expect("insert must succeed");

    let fetched = store
        .get(910_002)
        .await
        .expect("lookup must succeed")
        .expect("the row was just inserted");
    assert_eq!(fetched.salary, salary("1234.56"));

    clear(&pool, 910_002).await;
}

#[tokio::test]
#[ignore = "needs an initialized PostgreSQL database configured via STAFFDB_*"]
async fn reinserting_an_id_reports_a_duplicate() {
    let pool = live_pool().await;
    clear(&pool, 910_003).await;
    let service = EmployeeService::new(PgEmployeeStore::new(pool.clone()));

    service
        .add_employee(910_003, "First", salary("100"))
        .await
        .expect("first insert must succeed");
    let err = service
        .add_employee(910_003, "Second", salary("200"))
        .await
        .expect_err("the primary key must reject the second insert");
    assert!(err.is_duplicate(), "expected a duplicate id error, got {err:?}");

    // The original row is untouched.
    let kept = service
        .get_employee(910_003)
        .await
        .expect("lookup must succeed")
        .expect("the first row must survive");
    assert_eq!(kept.name, "First");

    clear(&pool, 910_003).await;
}

#[tokio::test]
#[ignore = "needs an initialized PostgreSQL database configured via STAFFDB_*"]
async fn absent_ids_come_back_as_none() {
    let pool = live_pool().await;
    let store = PgEmployeeStore::new(pool);

    let absent = store
        .get(910_999)
        .await
        .expect("lookup of an absent id must not error");
    assert!(absent.is_none());
}
