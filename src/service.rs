//! Hierarchy service: the public operations over the employee directory
//!
//! Composes the store and the assembler, and enforces the one nontrivial
//! write invariant: a non-null manager reference must exist at upsert time.

use std::sync::Arc;

use crate::db::EmployeeStore;
use crate::error::HierarchyError;
use crate::hierarchy;
use crate::models::{EmployeeNode, EmployeeUpsert};

/// Public operations over the employee hierarchy. Cheap to clone; one
/// instance is shared through the router state.
#[derive(Clone)]
pub struct HierarchyService {
    store: Arc<dyn EmployeeStore>,
}

impl HierarchyService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Fetch one employee together with their full reporting subtree
    pub async fn employee_by_id(&self, id: i64) -> Result<EmployeeNode, HierarchyError> {
        let record = self
            .store
            .fetch_by_id(id)
            .await?
            .ok_or(HierarchyError::NotFound(id))?;
        hierarchy::build_forest(self.store.as_ref(), vec![record])
            .await?
            .pop()
            .ok_or(HierarchyError::NotFound(id))
    }

    /// List every top-level manager with their subtree; empty when the
    /// directory has no top-level rows
    pub async fn top_level_managers(&self) -> Result<Vec<EmployeeNode>, HierarchyError> {
        let roots = self.store.fetch_top_level().await?;
        hierarchy::build_forest(self.store.as_ref(), roots).await
    }

    /// Create (id 0 or absent) or update (positive id) an employee.
    /// Returns the id written.
    pub async fn upsert_employee(&self, request: EmployeeUpsert) -> Result<i64, HierarchyError> {
        if request.full_name.trim().is_empty() {
            return Err(HierarchyError::Validation(
                "full_name must not be empty".into(),
            ));
        }
        if request.title.trim().is_empty() {
            return Err(HierarchyError::Validation("title must not be empty".into()));
        }

        // Manager must exist before any write happens.
        if let Some(manager_id) = request.manager_employee_id {
            if !self.store.manager_exists(manager_id).await? {
                return Err(HierarchyError::InvalidReference(manager_id));
            }
        }

        if request.employee_id == 0 {
            self.store
                .insert(
                    &request.full_name,
                    &request.title,
                    request.manager_employee_id,
                )
                .await
        } else {
            let affected = self
                .store
                .update(
                    request.employee_id,
                    &request.full_name,
                    &request.title,
                    request.manager_employee_id,
                )
                .await?;
            if affected == 0 {
                return Err(HierarchyError::NotFound(request.employee_id));
            }
            Ok(request.employee_id)
        }
    }

    /// Delete an employee; their direct reports are rewired to the deleted
    /// employee's own manager (null included) in the same transaction
    pub async fn delete_employee(&self, id: i64) -> Result<(), HierarchyError> {
        let affected = self.store.delete_with_reassignment(id).await?;
        if affected == 0 {
            return Err(HierarchyError::NotFound(id));
        }
        Ok(())
    }
}
