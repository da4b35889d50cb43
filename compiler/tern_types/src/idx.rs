//! Type handle.
//!
//! All types are stored in one [`Pool`](crate::Pool) and referenced by a
//! 32-bit index. Primitive types have fixed indices so they can be named
//! without a pool.

use std::fmt;

/// A 32-bit index into the type pool.
///
/// Types are compared by index equality (O(1)), not structural comparison.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Pre-interned types (indices 0-8) ===

    /// The `int` type.
    pub const INT: Self = Self(0);
    /// The `float` type.
    pub const FLOAT: Self = Self(1);
    /// The `bool` type.
    pub const BOOL: Self = Self(2);
    /// The `str` type.
    pub const STR: Self = Self(3);
    /// The `char` type.
    pub const CHAR: Self = Self(4);
    /// The unit type `()`, also the empty tuple.
    pub const UNIT: Self = Self(5);
    /// The never type (no values).
    pub const NEVER: Self = Self(6);
    /// Error marker. Later passes overwrite a broken declaration's type
    /// with this so that follow-on errors stay quiet.
    pub const ERROR: Self = Self(7);
    /// Placeholder for a type that depends on inference still in progress.
    pub const DEPENDENT: Self = Self(8);

    /// Number of pre-interned types.
    pub const PRIMITIVE_COUNT: u32 = 9;

    /// First index for dynamically interned types.
    pub const FIRST_DYNAMIC: u32 = Self::PRIMITIVE_COUNT;

    /// Rebuild an index from its raw value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position in the pool's item array.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a pre-interned type.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }

    /// Whether this is the error type.
    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 == Self::ERROR.0
    }

    /// Whether this is the "not inferred yet" marker.
    #[inline]
    pub const fn is_dependent(self) -> bool {
        self.0 == Self::DEPENDENT.0
    }

    /// Spelling of pre-interned types; `None` for anything needing a pool.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("int"),
            1 => Some("float"),
            2 => Some("bool"),
            3 => Some("str"),
            4 => Some("char"),
            5 => Some("()"),
            6 => Some("never"),
            7 => Some("<error>"),
            8 => Some("<dependent>"),
            _ => None,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Idx::{name}"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}
