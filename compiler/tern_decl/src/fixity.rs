//! Operator fixity: precedence plus associativity in two bytes.

use std::fmt;

/// The associativity of a binary operator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Associativity {
    /// Non-associative operators cannot be written next to other operators
    /// of the same precedence. Relational operators are typically
    /// non-associative.
    None = 0,
    /// Groups to the left when chained with operators of equal precedence.
    Left = 1,
    /// Groups to the right when chained with operators of equal precedence.
    Right = 2,
}

/// Precedence and associativity of an infix operator.
///
/// Layout: 2 bytes
/// - precedence: u8
/// - `assoc_plus_one`: 0 when the descriptor is unset, otherwise the
///   associativity discriminant plus one
///
/// An unset descriptor carries no meaning; check [`Fixity::is_valid`] (or
/// use [`Fixity::get`]) before reading it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Fixity {
    precedence: u8,
    assoc_plus_one: u8,
}

impl Fixity {
    /// The unset descriptor.
    pub const UNSET: Fixity = Fixity {
        precedence: 0,
        assoc_plus_one: 0,
    };

    /// A valid descriptor for an infix operator.
    pub const fn new(precedence: u8, associativity: Associativity) -> Self {
        Fixity {
            precedence,
            assoc_plus_one: associativity as u8 + 1,
        }
    }

    /// Whether the descriptor was set; every other query requires it.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.assoc_plus_one != 0
    }

    /// # Panics
    /// Panics if the descriptor is unset.
    #[inline]
    #[track_caller]
    pub fn associativity(self) -> Associativity {
        match self.assoc_plus_one {
            1 => Associativity::None,
            2 => Associativity::Left,
            3 => Associativity::Right,
            _ => panic!("reading associativity of an unset fixity"),
        }
    }

    /// # Panics
    /// Panics if the descriptor is unset.
    #[inline]
    #[track_caller]
    pub fn precedence(self) -> u8 {
        assert!(self.is_valid(), "reading precedence of an unset fixity");
        self.precedence
    }

    /// `a op b op c` groups as `(a op b) op c`.
    #[track_caller]
    pub fn is_left_associative(self) -> bool {
        self.associativity() == Associativity::Left
    }

    /// `a op b op c` groups as `a op (b op c)`.
    #[track_caller]
    pub fn is_right_associative(self) -> bool {
        self.associativity() == Associativity::Right
    }

    /// `a op b op c` is rejected.
    #[track_caller]
    pub fn is_non_associative(self) -> bool {
        self.associativity() == Associativity::None
    }

    /// Precedence and associativity, or `None` when unset.
    pub fn get(self) -> Option<(u8, Associativity)> {
        self.is_valid().then(|| (self.precedence, self.associativity()))
    }
}

impl fmt::Debug for Fixity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some((precedence, assoc)) => write!(f, "Fixity({precedence}, {assoc:?})"),
            None => f.write_str("Fixity(unset)"),
        }
    }
}

#[cfg(test)]
mod tests;
