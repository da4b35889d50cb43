//! Attributes written in `[...]` before a declaration.

use tern_ir::Span;

use crate::Fixity;

/// Attributes that may be applied to a named declaration.
///
/// `brackets` covers the `[` ... `]` of the attribute specifier and is
/// `Span::DUMMY` when the declaration had none.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DeclAttributes {
    pub brackets: Span,
    pub infix: Fixity,
}

impl DeclAttributes {
    /// Attributes declaring an infix operator.
    pub const fn with_infix(brackets: Span, infix: Fixity) -> Self {
        DeclAttributes { brackets, infix }
    }

    /// Whether an `infix` attribute was given.
    #[inline]
    pub const fn is_infix(&self) -> bool {
        self.infix.is_valid()
    }

    /// The infix descriptor; check `is_infix` first.
    #[inline]
    pub const fn infix_data(&self) -> Fixity {
        self.infix
    }

    /// Whether no attribute was written at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_infix()
    }
}
