use std::path::Path;

use entity::Employee;
use platform_store::{Slot, StoreResult};

/// Name of the durable slot holding the serialized record sequence.
pub const EMPLOYEES_SLOT: &str = "employees";

/// The record store: loads the full sequence once, rewrites it whole after
/// every mutation. Injected into the service so persistence is swappable.
pub trait RecordStore {
    fn load(&mut self) -> Vec<Employee>;
    fn persist(&mut self, records: &[Employee]) -> StoreResult<()>;
}

/// Production store over a filesystem slot.
pub struct SlotStore {
    slot: Slot,
}

impl SlotStore {
    pub fn new(slot: Slot) -> Self {
        Self { slot }
    }

    pub fn path(&self) -> &Path {
        self.slot.path()
    }
}

impl RecordStore for SlotStore {
    fn load(&mut self) -> Vec<Employee> {
        // One legacy variant seeds the slot with null placeholders; decode
        // through Option and keep only the actual records.
        self.slot
            .read::<Vec<Option<Employee>>>()
            .map(|rows| rows.into_iter().flatten().collect())
            .unwrap_or_default()
    }

    fn persist(&mut self, records: &[Employee]) -> StoreResult<()> {
        self.slot.write(&records)
    }
}

/// In-memory store for tests: remembers what was last persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    seed: Vec<Employee>,
    persisted: Option<Vec<Employee>>,
}

impl MemoryStore {
    pub fn with_seed(seed: Vec<Employee>) -> Self {
        Self {
            seed,
            persisted: None,
        }
    }

    pub fn last_persisted(&self) -> Option<&[Employee]> {
        self.persisted.as_deref()
    }
}

impl RecordStore for MemoryStore {
    fn load(&mut self) -> Vec<Employee> {
        self.seed.clone()
    }

    fn persist(&mut self, records: &[Employee]) -> StoreResult<()> {
        self.persisted = Some(records.to_vec());
        Ok(())
    }
}
