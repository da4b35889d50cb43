//! Type kind tag for tag-driven dispatch.
//!
//! Each type in the pool has a `Tag` that identifies its kind and decides how
//! the item's `data` field is read.
//!
//! # Tag Categories
//!
//! - 0-15: Primitives (data unused)
//! - 48-79: Complex types (data = extra index, length-prefixed)
//! - 80-95: Named types (data = name, or extra index)
//! - 96-111: Type variables (data = var id)
//! - 240-255: Special markers

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    // === Primitives (0-15) ===
    Int = 0,
    Float = 1,
    Bool = 2,
    Str = 3,
    Char = 4,
    /// Unit type `()`.
    Unit = 5,
    /// Never type (bottom, no values).
    Never = 6,
    /// Error placeholder (propagates silently).
    Error = 7,

    // === Complex Types (48-79) ===
    /// Function type `(P1, P2, ...) -> R`.
    /// Extra layout: `[param_count, p0, p1, ..., ret]`.
    Function = 48,
    /// Tuple type `(T1, T2, ...)`.
    /// Extra layout: `[elem_count, e0, e1, ...]`.
    Tuple = 49,

    // === Named Types (80-95) ===
    /// Nominal type reference. Data: `Name::raw()`.
    Named = 80,
    /// Sugared alias of another type.
    /// Extra layout: `[name, target]`.
    Alias = 81,

    // === Type Variables (96-111) ===
    /// Inference variable. Data: index into the pool's variable states.
    Var = 96,

    // === Special (240-255) ===
    /// Type that depends on inference still in progress.
    Dependent = 254,
}

impl Tag {
    /// Check if this tag uses the extra array for data.
    #[inline]
    pub const fn uses_extra(self) -> bool {
        matches!(self, Self::Function | Self::Tuple | Self::Alias)
    }

    /// Whether this tag is one of the pre-interned primitives.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        (self as u8) < 16
    }

    /// Tags whose payload is an ordered list of component types.
    #[inline]
    pub const fn is_complex(self) -> bool {
        let v = self as u8;
        v >= 48 && v < 80
    }

    /// Whether this tag is a nominal or alias type.
    #[inline]
    pub const fn is_named(self) -> bool {
        let v = self as u8;
        v >= 80 && v < 96
    }

    /// Tags that stand for "not known yet" rather than for a type.
    #[inline]
    pub const fn is_unresolved(self) -> bool {
        matches!(self, Self::Var | Self::Dependent)
    }

    /// Lowercase name, used by `Display`.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::Char => "char",
            Self::Unit => "()",
            Self::Never => "never",
            Self::Error => "<error>",
            Self::Function => "function",
            Self::Tuple => "tuple",
            Self::Named => "named",
            Self::Alias => "alias",
            Self::Var => "var",
            Self::Dependent => "dependent",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
