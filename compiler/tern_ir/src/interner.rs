//! String interner for identifiers.
//!
//! Provides O(1) interning and lookup. Operator spellings are classified once
//! here and the result is packed into the returned [`Name`].

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// The string table outgrew the 31-bit index space of [`Name`].
    #[error("interner exceeded capacity: {count} strings, max is {}", Name::MAX_INDEX)]
    Overflow { count: usize },
}

/// Characters that may start an operator identifier.
const OPERATOR_CHARS: &[char] = &[
    '/', '=', '-', '+', '*', '%', '<', '>', '!', '&', '|', '^', '~', '.', '?',
];

/// Whether `text` spells an operator rather than an ordinary identifier.
pub(crate) fn is_operator_spelling(text: &str) -> bool {
    text.chars().next().is_some_and(|c| OPERATOR_CHARS.contains(&c))
}

struct InternTable {
    /// Map from string content to its interned name.
    map: FxHashMap<&'static str, Name>,
    /// Storage for string contents, indexed by `Name::index`.
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        let mut map = FxHashMap::default();
        map.insert("", Name::EMPTY);
        InternTable {
            map,
            strings: vec![""],
        }
    }
}

/// String interner.
///
/// # Thread Safety
/// A single `RwLock` guards the table; lookups take the read lock only.
/// Wrap in [`SharedInterner`] to share between compilation units.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create an interner holding only the empty string.
    pub fn new() -> Self {
        StringInterner {
            table: RwLock::new(InternTable::with_empty()),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.table.read().map.get(s) {
            return Ok(name);
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&name) = guard.map.get(s) {
            return Ok(name);
        }

        let count = guard.strings.len();
        let index = u32::try_from(count)
            .ok()
            .filter(|&i| i <= Name::MAX_INDEX)
            .ok_or(InternError::Overflow { count })?;

        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::new(index, is_operator_spelling(leaked));
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        Ok(name)
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity. Use `try_intern` for
    /// fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    #[track_caller]
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table.read().strings[name.index()]
    }

    /// Number of interned strings, including the pre-interned empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Whether only the empty string has been interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared interner handle for use across compilation units.
///
/// Each compilation unit owns its own declaration arena, but names must
/// compare equal across units, so the interner is the one piece of state
/// they share.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a fresh interner behind an `Arc`.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SharedInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedInterner")
            .field("len", &self.0.len())
            .finish()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
