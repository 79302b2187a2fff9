//! Employee persistence operations.
//!
//! Insert and lookup only — the entity is never updated or deleted through
//! this layer.  Statements are parameterized and run through the runtime
//! query API, so no live database is needed at build time.

use sqlx::PgPool;

use crate::{DbError, Employee};

/// Insert a new employee row.
///
/// The id is caller-assigned; inserting an id that already exists fails
/// with [`DbError::DuplicateId`] and leaves the stored row unchanged.
/// Returns the row as stored.
pub async fn insert_employee(pool: &PgPool, employee: &Employee) -> Result<Employee, DbError> {
    let row = sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (employeeid, employeename, employeesalary)
        VALUES ($1, $2, $3)
        RETURNING employeeid, employeename, employeesalary
        "#,
    )
    .bind(employee.id)
    .bind(&employee.name)
    .bind(employee.salary)
    .fetch_one(pool)
    .await
    .map_err(|err| DbError::from_insert(err, employee.id))?;

    Ok(row)
}

/// Fetch a single employee by primary key.
///
/// Absence is a normal outcome, not an error: returns `Ok(None)`.
pub async fn fetch_employee(pool: &PgPool, id: i32) -> Result<Option<Employee>, DbError> {
    let row = sqlx::query_as::<_, Employee>(
        r#"
        SELECT employeeid, employeename, employeesalary
        FROM employees
        WHERE employeeid = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
