//! Pre-computed type metadata flags.
//!
//! `TypeFlags` are computed once at interning time and cached, so questions
//! like "does this type still contain inference holes?" need no traversal.

use bitflags::bitflags;

bitflags! {
    /// Pre-computed type properties for O(1) queries.
    ///
    /// Presence flags describe the type at interning time. Binding an
    /// inference variable later does not clear `HAS_VAR` on the types that
    /// mention it; resolve through the pool when the answer must be current.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u32 {
        // === Presence Flags (bits 0-7) ===

        /// Contains inference variables.
        const HAS_VAR = 1 << 0;
        /// Contains the Error type.
        const HAS_ERROR = 1 << 1;
        /// Contains the dependent placeholder.
        const HAS_DEPENDENT = 1 << 2;

        // === Category Flags (bits 8-15) ===

        const IS_PRIMITIVE = 1 << 8;
        const IS_FUNCTION = 1 << 9;
        /// Tuple or other aggregate with indexable components.
        const IS_COMPOSITE = 1 << 10;
        /// Nominal or alias type.
        const IS_NAMED = 1 << 11;

        // === Optimization Flags (bits 16-23) ===

        /// No variables and no dependent placeholders anywhere inside.
        const IS_RESOLVED = 1 << 16;
    }
}

impl TypeFlags {
    /// Flags inherited by a compound type from its children.
    pub const PROPAGATE_MASK: Self = Self::from_bits_truncate(
        Self::HAS_VAR.bits() | Self::HAS_ERROR.bits() | Self::HAS_DEPENDENT.bits(),
    );

    /// Whether inference variables occur inside.
    #[inline]
    pub const fn has_vars(self) -> bool {
        self.contains(Self::HAS_VAR)
    }

    /// Whether the error type occurs inside.
    #[inline]
    pub const fn has_errors(self) -> bool {
        self.contains(Self::HAS_ERROR)
    }

    /// Whether the type has any hole left for inference to fill.
    #[inline]
    pub const fn has_holes(self) -> bool {
        self.intersects(Self::HAS_VAR.union(Self::HAS_DEPENDENT))
    }

    /// Combine children's presence flags with a category flag, deriving
    /// `IS_RESOLVED` from the result.
    #[must_use]
    pub fn from_children(category: Self, children: impl IntoIterator<Item = Self>) -> Self {
        let mut flags = category;
        for child in children {
            flags |= child & Self::PROPAGATE_MASK;
        }
        if !flags.has_holes() {
            flags |= Self::IS_RESOLVED;
        }
        flags
    }
}
