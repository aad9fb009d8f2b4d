//! Roster record and draft models.

mod draft;
mod employee;

pub use draft::{DraftError, EmployeeDraft};
pub use employee::Employee;
