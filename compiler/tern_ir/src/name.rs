//! Interned identifier handle.
//!
//! Provides a compact 32-bit identifier whose operator-ness is decided once,
//! at intern time, and packed into the handle itself.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Interned identifier.
///
/// Layout: 32 bits split into flag (1 bit) + index (31 bits)
/// - Bit 31: set when the spelling is an operator (`+`, `<=`, `&&`, ...)
/// - Bits 30-0: index into the interner's string table
///
/// Because the flag travels with the handle, `is_operator` is a pure function
/// of the `Name` and never needs the interner.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Maximum string-table index.
    pub const MAX_INDEX: u32 = 0x7FFF_FFFF;

    const OPERATOR_BIT: u32 = 1 << 31;

    /// Create from a string-table index and the operator flag.
    #[inline]
    pub const fn new(index: u32, is_operator: bool) -> Self {
        debug_assert!(index <= Self::MAX_INDEX);
        if is_operator {
            Name(index | Self::OPERATOR_BIT)
        } else {
            Name(index)
        }
    }

    /// Index into the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 & Self::MAX_INDEX) as usize
    }

    /// Whether the spelling of this name is an operator.
    #[inline]
    pub const fn is_operator(self) -> bool {
        self.0 & Self::OPERATOR_BIT != 0
    }

    /// Whether this is the empty identifier.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }
}

impl Hash for Name {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_operator() {
            write!(f, "Name(op {})", self.index())
        } else {
            write!(f, "Name({})", self.index())
        }
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
