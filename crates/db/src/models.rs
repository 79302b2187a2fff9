//! The employee row struct, mapping 1-to-1 onto the `employees` table.
//!
//! The column identifiers (`employeeid`, `employeename`, `employeesalary`)
//! are an external contract shared with existing stores; the struct keeps
//! idiomatic field names and carries the mapping in `#[sqlx(rename)]`
//! attributes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The sole persisted entity.  The id is caller-assigned, never generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    #[sqlx(rename = "employeeid")]
    pub id: i32,
    #[sqlx(rename = "employeename")]
    pub name: String,
    /// Stored as Postgres `numeric`; never passes through a binary float.
    #[sqlx(rename = "employeesalary")]
    pub salary: Decimal,
}

impl Employee {
    /// Convenience constructor.
    pub fn new(id: i32, name: impl Into<String>, salary: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
        }
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Id={}, Name={}, Salary={}", self.id, self.name, self.salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_the_console_contract() {
        let salary: Decimal = "50000".parse().expect("valid decimal");
        let employee = Employee::new(1, "Jane", salary);
        assert_eq!(employee.to_string(), "Id=1, Name=Jane, Salary=50000");
    }

    #[test]
    fn salary_keeps_its_scale() {
        let salary: Decimal = "50000.10".parse().expect("valid decimal");
        let employee = Employee::new(2, "Joe", salary);
        assert_eq!(employee.salary.to_string(), "50000.10");
    }
}
