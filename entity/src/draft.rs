use thiserror::Error;

use crate::Employee;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("required field {0} is empty")]
    MissingRequired(&'static str),
}

/// The in-progress form buffer: a record's fields before they are committed,
/// either as a new entry or over an existing one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub last_name: String,
    pub position: String,
    pub dni: String,
    pub age: Option<u32>,
    pub description: String,
}

impl EmployeeDraft {
    /// A draft only commits when both `name` and `last_name` carry something
    /// other than whitespace.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingRequired("name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(DraftError::MissingRequired("last_name"));
        }
        Ok(())
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(record: &Employee) -> Self {
        Self {
            name: record.name.clone(),
            last_name: record.last_name.clone(),
            position: record.position.clone(),
            dni: record.dni.clone(),
            age: record.age,
            description: record.description.clone(),
        }
    }
}
