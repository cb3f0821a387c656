//! Hierarchy assembler: composes flat employee rows into report trees
//!
//! Discovery is an iterative breadth-first walk over `fetch_children` with an
//! explicit visited set, so a manager graph that is not a forest surfaces as
//! `CycleDetected` instead of unbounded recursion. Assembly then links nodes
//! bottom-up over the discovery order without recursing.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::db::EmployeeStore;
use crate::error::HierarchyError;
use crate::models::{EmployeeNode, EmployeeRecord};

/// Expand each seed record into a node carrying its full subtree.
///
/// Returns one node per seed, in seed order. Sibling order within a node
/// follows the store's child query order.
pub async fn build_forest(
    store: &dyn EmployeeStore,
    roots: Vec<EmployeeRecord>,
) -> Result<Vec<EmployeeNode>, HierarchyError> {
    let mut visited: HashSet<i64> = roots.iter().map(|r| r.employee_id).collect();
    let mut queue: VecDeque<i64> = roots.iter().map(|r| r.employee_id).collect();
    // (manager id, child record) in breadth-first discovery order; a record's
    // manager always precedes it.
    let mut order: Vec<(i64, EmployeeRecord)> = Vec::new();

    while let Some(manager_id) = queue.pop_front() {
        for child in store.fetch_children(manager_id).await? {
            if !visited.insert(child.employee_id) {
                return Err(HierarchyError::CycleDetected(child.employee_id));
            }
            queue.push_back(child.employee_id);
            order.push((manager_id, child));
        }
    }

    // Walking the discovery order backwards guarantees every employee's
    // reports are assembled before the employee itself. Sibling lists
    // accumulate reversed and are flipped when claimed by their manager.
    let mut assembled: HashMap<i64, Vec<EmployeeNode>> = HashMap::new();
    for (manager_id, record) in order.into_iter().rev() {
        let mut managed = assembled.remove(&record.employee_id).unwrap_or_default();
        managed.reverse();
        let node = EmployeeNode::from_record(record, managed);
        assembled.entry(manager_id).or_default().push(node);
    }

    Ok(roots
        .into_iter()
        .map(|root| {
            let mut managed = assembled.remove(&root.employee_id).unwrap_or_default();
            managed.reverse();
            EmployeeNode::from_record(root, managed)
        })
        .collect())
}
