//! In-memory `EmployeeStore` backing the behavioral test suites.
#![allow(dead_code)] // shared between test binaries

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use orgchart_server::db::EmployeeStore;
use orgchart_server::error::HierarchyError;
use orgchart_server::models::EmployeeRecord;

/// Rows keyed by id in a BTreeMap, so iteration matches the Postgres
/// store's ORDER BY employee_id.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, EmployeeRecord>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed rows as (id, full_name, title, manager_employee_id).
    pub fn seeded(rows: &[(i64, &str, &str, Option<i64>)]) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().unwrap();
            for &(id, full_name, title, manager_employee_id) in rows {
                inner.rows.insert(
                    id,
                    EmployeeRecord {
                        employee_id: id,
                        full_name: full_name.into(),
                        title: title.into(),
                        manager_employee_id,
                    },
                );
                inner.next_id = inner.next_id.max(id);
            }
        }
        store
    }

    pub fn row(&self, id: i64) -> Option<EmployeeRecord> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn fetch_by_id(&self, id: i64) -> Result<Option<EmployeeRecord>, HierarchyError> {
        Ok(self.row(id))
    }

    async fn fetch_top_level(&self) -> Result<Vec<EmployeeRecord>, HierarchyError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .values()
            .filter(|r| r.manager_employee_id.is_none())
            .cloned()
            .collect())
    }

    async fn fetch_children(&self, manager_id: i64) -> Result<Vec<EmployeeRecord>, HierarchyError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .values()
            .filter(|r| r.manager_employee_id == Some(manager_id))
            .cloned()
            .collect())
    }

    async fn manager_exists(&self, id: i64) -> Result<bool, HierarchyError> {
        Ok(self.inner.lock().unwrap().rows.contains_key(&id))
    }

    async fn insert(
        &self,
        full_name: &str,
        title: &str,
        manager_employee_id: Option<i64>,
    ) -> Result<i64, HierarchyError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(
            id,
            EmployeeRecord {
                employee_id: id,
                full_name: full_name.into(),
                title: title.into(),
                manager_employee_id,
            },
        );
        Ok(id)
    }

    async fn update(
        &self,
        id: i64,
        full_name: &str,
        title: &str,
        manager_employee_id: Option<i64>,
    ) -> Result<u64, HierarchyError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&id) {
            Some(row) => {
                row.full_name = full_name.into();
                row.title = title.into();
                row.manager_employee_id = manager_employee_id;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_with_reassignment(&self, id: i64) -> Result<u64, HierarchyError> {
        let mut inner = self.inner.lock().unwrap();
        let new_manager = match inner.rows.get(&id) {
            Some(row) => row.manager_employee_id,
            None => return Ok(0),
        };
        for row in inner.rows.values_mut() {
            if row.manager_employee_id == Some(id) {
                row.manager_employee_id = new_manager;
            }
        }
        inner.rows.remove(&id);
        Ok(1)
    }
}
