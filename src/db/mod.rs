//! Database access layer

pub mod employee;

pub use employee::{EmployeeStore, PgEmployeeStore};
