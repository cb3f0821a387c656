//! Employee store: raw row access against the employees table
//!
//! No tree logic lives here; the assembler composes rows into trees.
//! Child and top-level queries order by employee_id so sibling order is
//! deterministic per query.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::HierarchyError;
use crate::models::EmployeeRecord;

type StoreResult<T> = Result<T, HierarchyError>;

/// Raw CRUD over the employees table.
///
/// Object-safe so the service can run against PostgreSQL in production and
/// an in-memory store in tests.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Single-row lookup by primary key
    async fn fetch_by_id(&self, id: i64) -> StoreResult<Option<EmployeeRecord>>;

    /// Rows with no manager (top-level managers)
    async fn fetch_top_level(&self) -> StoreResult<Vec<EmployeeRecord>>;

    /// Direct reports of one manager
    async fn fetch_children(&self, manager_id: i64) -> StoreResult<Vec<EmployeeRecord>>;

    /// Existence probe used before accepting a manager reference
    async fn manager_exists(&self, id: i64) -> StoreResult<bool>;

    /// Create a row; the store assigns the id
    async fn insert(
        &self,
        full_name: &str,
        title: &str,
        manager_employee_id: Option<i64>,
    ) -> StoreResult<i64>;

    /// Overwrite all mutable columns of one row; returns rows affected
    async fn update(
        &self,
        id: i64,
        full_name: &str,
        title: &str,
        manager_employee_id: Option<i64>,
    ) -> StoreResult<u64>;

    /// Rewire the target's direct reports to the target's own manager, then
    /// delete the target, atomically. Returns rows affected by the delete;
    /// 0 means the id did not exist (the rewire matches zero rows then).
    async fn delete_with_reassignment(&self, id: i64) -> StoreResult<u64>;
}

/// PostgreSQL-backed store. Each call checks a connection out of the pool
/// for its own duration only.
#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn fetch_by_id(&self, id: i64) -> StoreResult<Option<EmployeeRecord>> {
        let row = sqlx::query_as(
            r#"
            SELECT employee_id, full_name, title, manager_employee_id
            FROM employees
            WHERE employee_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn fetch_top_level(&self) -> StoreResult<Vec<EmployeeRecord>> {
        let rows = sqlx::query_as(
            r#"
            SELECT employee_id, full_name, title, manager_employee_id
            FROM employees
            WHERE manager_employee_id IS NULL
            ORDER BY employee_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn fetch_children(&self, manager_id: i64) -> StoreResult<Vec<EmployeeRecord>> {
        let rows = sqlx::query_as(
            r#"
            SELECT employee_id, full_name, title, manager_employee_id
            FROM employees
            WHERE manager_employee_id = $1
            ORDER BY employee_id
            "#,
        )
        .bind(manager_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn manager_exists(&self, id: i64) -> StoreResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn insert(
        &self,
        full_name: &str,
        title: &str,
        manager_employee_id: Option<i64>,
    ) -> StoreResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO employees (full_name, title, manager_employee_id)
            VALUES ($1, $2, $3)
            RETURNING employee_id
            "#,
        )
        .bind(full_name)
        .bind(title)
        .bind(manager_employee_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(
        &self,
        id: i64,
        full_name: &str,
        title: &str,
        manager_employee_id: Option<i64>,
    ) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET full_name = $1, title = $2, manager_employee_id = $3
            WHERE employee_id = $4
            "#,
        )
        .bind(full_name)
        .bind(title)
        .bind(manager_employee_id)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_with_reassignment(&self, id: i64) -> StoreResult<u64> {
        let mut tx = self.pool.begin().await?;

        // Rewire direct reports to the target's own manager, read live.
        sqlx::query(
            r#"
            UPDATE employees
            SET manager_employee_id =
                (SELECT manager_employee_id FROM employees WHERE employee_id = $1)
            WHERE manager_employee_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let deleted = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(deleted)
    }
}
