//! Once-set type slot.
//!
//! Two write paths:
//! - `set`: the normal path, `Unset → Set`, allowed exactly once
//! - `overwrite`: the rewrite path, allowed at any time, used when a later
//!   pass replaces an inferred type (typically with `Idx::ERROR`)

use tern_types::Idx;

/// Error from writing a type slot on the normal path.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TypeSlotError {
    /// The slot already holds a type; use the overwrite path to replace it.
    #[error("type already set to {existing:?}")]
    AlreadySet { existing: Idx },
}

/// A type that starts absent and is filled in by a later pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TypeSlot(Option<Idx>);

impl TypeSlot {
    /// An empty slot.
    pub const UNSET: TypeSlot = TypeSlot(None);

    /// A slot the parser filled from an explicit annotation.
    pub const fn with(ty: Option<Idx>) -> Self {
        TypeSlot(ty)
    }

    /// Whether a type has been written.
    #[inline]
    pub const fn is_set(self) -> bool {
        self.0.is_some()
    }

    /// The stored type, if any.
    #[inline]
    pub const fn get(self) -> Option<Idx> {
        self.0
    }

    /// Set the type for the first time.
    pub fn try_set(&mut self, ty: Idx) -> Result<(), TypeSlotError> {
        match self.0 {
            Some(existing) => Err(TypeSlotError::AlreadySet { existing }),
            None => {
                self.0 = Some(ty);
                Ok(())
            }
        }
    }

    /// Set the type for the first time.
    ///
    /// # Panics
    /// Panics if the slot is already set.
    #[track_caller]
    pub fn set(&mut self, ty: Idx) {
        self.try_set(ty).unwrap_or_else(|e| panic!("{}", e));
    }

    /// Replace the type regardless of its current state.
    pub fn overwrite(&mut self, ty: Idx) {
        self.0 = Some(ty);
    }
}
