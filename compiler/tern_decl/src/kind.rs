//! Declaration kind tags and the tier table.
//!
//! Every concrete declaration carries a `DeclKind`. Abstraction tiers
//! (every declaration, named declarations, value declarations) are closed
//! intervals of the discriminant, so a tier test is one range comparison.
//!
//! # Ordering
//!
//! Kinds are declared tier-grouped:
//!
//! ```text
//! 0 Import        ┐
//! 1 TypeAlias     │        ┐
//! 2 Var           │ Decl   │        ┐
//! 3 Func          │        │ Named  │
//! 4 OneOfElement  │        │        │ Value
//! 5 Param         │        │        │
//! 6 ElementRef    ┘        ┘        ┘
//! ```
//!
//! A new kind goes *inside* the range of the innermost tier it belongs to.
//! Reordering silently breaks every tier test; `tests.rs` checks the table
//! against an explicit membership list.

use std::fmt;

/// Concrete declaration kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum DeclKind {
    /// `import swift.int`
    Import = 0,
    /// `typealias foo : int`
    TypeAlias = 1,
    /// `var x = ...` or `var (a, b) = ...`
    Var = 2,
    /// `func f(...)`
    Func = 3,
    /// One case of a `oneof` declaration.
    OneOfElement = 4,
    /// A named function parameter.
    Param = 5,
    /// A name bound to one element of a destructured `var`.
    ElementRef = 6,
}

impl DeclKind {
    /// Every kind, in discriminant order.
    pub const ALL: [DeclKind; 7] = [
        DeclKind::Import,
        DeclKind::TypeAlias,
        DeclKind::Var,
        DeclKind::Func,
        DeclKind::OneOfElement,
        DeclKind::Param,
        DeclKind::ElementRef,
    ];

    /// Whether this kind belongs to `tier`.
    #[inline]
    pub const fn is_in(self, tier: DeclTier) -> bool {
        let v = self as u8;
        v >= tier.first() as u8 && v <= tier.last() as u8
    }

    /// Declarations with a name and attributes.
    #[inline]
    pub const fn is_named(self) -> bool {
        self.is_in(DeclTier::Named)
    }

    /// Declarations with a type slot and an optional initializer.
    #[inline]
    pub const fn is_value(self) -> bool {
        self.is_in(DeclTier::Value)
    }

    /// Whether the parser or a later pass may attach an initializer.
    #[inline]
    pub const fn allows_initializer(self) -> bool {
        matches!(self, DeclKind::Var | DeclKind::Func)
    }

    /// Source spelling of the kind, used in messages.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            DeclKind::Import => "import",
            DeclKind::TypeAlias => "typealias",
            DeclKind::Var => "var",
            DeclKind::Func => "func",
            DeclKind::OneOfElement => "oneof element",
            DeclKind::Param => "parameter",
            DeclKind::ElementRef => "element reference",
        }
    }
}

impl fmt::Debug for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclKind::{}", self.name())
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Abstraction tier of the declaration hierarchy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DeclTier {
    /// Every declaration.
    Decl,
    /// Declarations carrying a name and attributes.
    Named,
    /// Named declarations carrying a type slot and initializer.
    Value,
}

impl DeclTier {
    /// Every tier, outermost first.
    pub const ALL: [DeclTier; 3] = [DeclTier::Decl, DeclTier::Named, DeclTier::Value];

    /// First kind of the tier's range.
    #[inline]
    pub const fn first(self) -> DeclKind {
        match self {
            DeclTier::Decl => DeclKind::Import,
            DeclTier::Named => DeclKind::TypeAlias,
            DeclTier::Value => DeclKind::Var,
        }
    }

    /// Last kind of the tier's range (inclusive).
    #[inline]
    pub const fn last(self) -> DeclKind {
        match self {
            DeclTier::Decl | DeclTier::Named | DeclTier::Value => DeclKind::ElementRef,
        }
    }
}

const _: () = assert!(std::mem::size_of::<DeclKind>() == 1);

#[cfg(test)]
mod tests;
