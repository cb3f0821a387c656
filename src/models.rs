//! Employee row and wire types

use serde::{Deserialize, Serialize};

/// Persisted employee row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmployeeRecord {
    pub employee_id: i64,
    pub full_name: String,
    pub title: String,
    /// None marks a top-level manager
    pub manager_employee_id: Option<i64>,
}

/// Employee with their recursively expanded reports.
///
/// Built fresh on every read and owned by the response it is embedded in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeNode {
    pub employee_id: i64,
    pub full_name: String,
    pub title: String,
    pub managed_employees: Vec<EmployeeNode>,
}

impl EmployeeNode {
    pub fn from_record(record: EmployeeRecord, managed_employees: Vec<EmployeeNode>) -> Self {
        Self {
            employee_id: record.employee_id,
            full_name: record.full_name,
            title: record.title,
            managed_employees,
        }
    }
}

/// Create/update payload; `employee_id` 0 (or absent) creates, positive
/// updates that row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpsert {
    #[serde(default)]
    pub employee_id: i64,
    pub full_name: String,
    pub title: String,
    #[serde(default)]
    pub manager_employee_id: Option<i64>,
}
