//! The persistence seam for player progress.
//!
//! Platform backends implement [`ProgressStore`]; defaulting, validation and
//! self-healing live in the tracker so every backend behaves the same.
use crate::progress::PlayerProgress;
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

/// Read/write/clear access to the single stored progress record.
pub trait ProgressStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the stored record.
    ///
    /// Returns `Ok(None)` when nothing is stored or the stored payload does
    /// not parse as a record; the caller substitutes defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be reached.
    fn load(&self) -> Result<Option<PlayerProgress>, Self::Error>;

    /// Persist the record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the record cannot be written (quota, storage
    /// unavailable). Callers swallow this: a broken save must never crash
    /// the game.
    fn save(&self, progress: &PlayerProgress) -> Result<(), Self::Error>;

    /// Remove the stored record entirely.
    ///
    /// # Errors
    ///
    /// Returns an error when the record cannot be removed.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// In-memory store for tests and non-browser contexts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<PlayerProgress>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    type Error = Infallible;

    fn load(&self) -> Result<Option<PlayerProgress>, Self::Error> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, progress: &PlayerProgress) -> Result<(), Self::Error> {
        *self.slot.borrow_mut() = Some(progress.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}
