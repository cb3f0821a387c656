//! orgchart-server: company hierarchy directory service
//!
//! HTTP service over a PostgreSQL `employees` table linked by a
//! self-referential manager column:
//! - Reads compose flat rows into report trees (one node per employee,
//!   carrying its direct reports recursively)
//! - Upserts guard the manager reference before writing
//! - Deletes rewire the removed employee's reports to that employee's own
//!   manager, keeping the forest connected

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod hierarchy;
pub mod models;
pub mod service;
pub mod state;
