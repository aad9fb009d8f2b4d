//! Roster service: the ordered employee sequence, its durable mirror, and
//! the transient edit/selection session.

mod repo;
mod search;
mod service;
mod session;

pub use repo::{EMPLOYEES_SLOT, MemoryStore, RecordStore, SlotStore};
pub use search::matches;
pub use service::Roster;
pub use session::SessionState;

use entity::DraftError;
use platform_store::StoreError;
use thiserror::Error;

/// Shared roster result type.
pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error("no record at position {index} (roster holds {len})")]
    OutOfBounds { index: usize, len: usize },
    #[error("no edit in progress")]
    NoActiveEdit,
    #[error(transparent)]
    Store(#[from] StoreError),
}
