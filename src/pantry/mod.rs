//! The user's pantry: ingredient name to quantity on hand.
//!
//! Keys are lower-cased on insert so they line up with catalog ingredient
//! names. Repeated inserts of the same ingredient overwrite rather than
//! accumulate (last write wins). State is transient per process run.

use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur when recording pantry contents.
#[derive(Error, Debug)]
pub enum PantryError {
    #[error("Invalid amount, expected an integer: {0}")]
    InvalidAmount(String),
}

/// Mapping of ingredient name to quantity owned.
///
/// Amounts are not validated: zero and negative values are stored as-is,
/// matching the original planner's behavior.
#[derive(Debug, Clone, Default)]
pub struct Pantry {
    entries: HashMap<String, i32>,
}

impl Pantry {
    pub fn new() -> Self {
        Pantry::default()
    }

    /// Record an ingredient from raw form input.
    ///
    /// The name is lower-cased; the amount string must parse as an integer.
    /// On parse failure the pantry is left untouched and
    /// [`PantryError::InvalidAmount`] is returned.
    pub fn add_ingredient(&mut self, name: &str, amount: &str) -> Result<(), PantryError> {
        let amount: i32 = amount
            .parse()
            .map_err(|_| PantryError::InvalidAmount(amount.to_string()))?;
        self.set(name, amount);
        Ok(())
    }

    /// Record an already-parsed amount, overwriting any previous entry.
    pub fn set(&mut self, name: &str, amount: i32) {
        self.entries.insert(name.to_lowercase(), amount);
    }

    /// Look up the owned amount by normalized ingredient name.
    ///
    /// The lookup is exact on the stored key; callers pass lower-cased
    /// names (catalog requirements already are).
    pub fn lookup(&self, name: &str) -> Option<i32> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
