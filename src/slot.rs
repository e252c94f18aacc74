//! Lazily-set value slots for the expected and actual test values.
//!
//! A slot is an explicit unset-or-set sum type, not a flag next to a field:
//! reading an unset slot is an error, never a silent default. Arrange/Act may
//! re-arm a slot any number of times; the last write wins.

use crate::error::ParamError;

/// A single named, lazily-set value.
#[derive(Debug, Clone)]
pub struct ValueSlot<T> {
    name: &'static str,
    value: Option<T>,
}

impl<T> ValueSlot<T> {
    /// Creates an unset slot. `name` appears in the uninitialized-read error.
    pub fn new(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Arms (or re-arms) the slot.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Reads the slot; fails while unset.
    pub fn get(&self) -> Result<&T, ParamError> {
        self.value
            .as_ref()
            .ok_or(ParamError::Uninitialized { slot: self.name })
    }
}
