use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EmployeeDraft;

/// One stored roster entry.
///
/// The serde attributes keep older persisted blobs loadable: records written
/// before stable ids existed get a fresh id on load, and the drifted field
/// name `address` is accepted for `description`. Writes always use the
/// canonical field names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub dni: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default, alias = "address")]
    pub description: String,
}

impl Employee {
    /// Build a new record from a validated draft, minting a fresh id.
    pub fn from_draft(draft: EmployeeDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            last_name: draft.last_name,
            position: draft.position,
            dni: draft.dni,
            age: draft.age,
            description: draft.description,
        }
    }

    /// Replace every field from the draft, keeping the record's id.
    pub fn apply_draft(&mut self, draft: EmployeeDraft) {
        self.name = draft.name;
        self.last_name = draft.last_name;
        self.position = draft.position;
        self.dni = draft.dni;
        self.age = draft.age;
        self.description = draft.description;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}
