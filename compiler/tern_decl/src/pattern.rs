//! Destructuring patterns for `var` declarations.
//!
//! `var ((a, b), c) = ...` parses into a tuple pattern whose first element
//! is itself a tuple. Nested elements live in the arena's flat pattern list
//! and are referred to by [`PatternId`](crate::PatternId).

use tern_ir::{Name, Span};

use crate::SliceRange;

/// One node of a destructuring pattern.
#[derive(Debug)]
pub enum VarPattern {
    /// A single identifier.
    Simple { name: Name, span: Span },
    /// A parenthesized list of nested patterns.
    Tuple {
        lparen: Span,
        elements: SliceRange,
        rparen: Span,
    },
}

impl VarPattern {
    /// Whether this is a single identifier.
    #[inline]
    pub fn is_simple(&self) -> bool {
        matches!(self, VarPattern::Simple { .. })
    }

    /// The identifier of a simple pattern.
    ///
    /// # Panics
    /// Panics on a tuple pattern.
    #[track_caller]
    pub fn identifier(&self) -> Name {
        match self {
            VarPattern::Simple { name, .. } => *name,
            VarPattern::Tuple { .. } => panic!("identifier() called on a tuple pattern"),
        }
    }

    /// Where the pattern starts: the identifier, or the `(`.
    pub fn location(&self) -> Span {
        match self {
            VarPattern::Simple { span, .. } => *span,
            VarPattern::Tuple { lparen, .. } => *lparen,
        }
    }

    /// Source extent of the whole pattern.
    pub fn source_range(&self) -> Span {
        let (start, end) = self.bracket_spans();
        start.merge(end)
    }

    /// `(lparen, rparen)` for a tuple, `(span, span)` for a simple pattern.
    ///
    /// The two spans are equal exactly when the pattern is simple.
    pub fn bracket_spans(&self) -> (Span, Span) {
        match self {
            VarPattern::Simple { span, .. } => (*span, *span),
            VarPattern::Tuple { lparen, rparen, .. } => (*lparen, *rparen),
        }
    }
}
