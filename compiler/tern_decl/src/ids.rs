//! Handles into a [`DeclArena`](crate::DeclArena).
//!
//! Handles are only meaningful for the arena that produced them. Each
//! compilation unit owns its own arena; never carry a handle across.

use std::fmt;

/// Index of a declaration in its arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DeclId(u32);

impl DeclId {
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        DeclId(index)
    }

    /// Index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclId({})", self.0)
    }
}

/// Index of a destructuring pattern in its arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct PatternId(u32);

impl PatternId {
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        PatternId(index)
    }

    /// Index into the arena's pattern table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternId({})", self.0)
    }
}

/// The lexical scope a declaration belongs to.
///
/// Scopes are owned by the name-binding pass; the declaration only keeps
/// this non-owning handle, which that pass may rebind when it restructures
/// scopes.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct DeclContextId(u32);

impl DeclContextId {
    /// The top-level scope of a compilation unit.
    pub const TOP_LEVEL: DeclContextId = DeclContextId(0);

    /// A scope handle issued by the name-binding pass.
    #[inline]
    pub const fn new(index: u32) -> Self {
        DeclContextId(index)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for DeclContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclContextId({})", self.0)
    }
}

/// Range into one of the arena's flat side buffers.
///
/// Opaque outside this crate: resolve it through the arena accessor that
/// handed it out. Fixed at allocation; nothing ever appends to or removes
/// from a range.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct SliceRange {
    pub(crate) start: u32,
    pub(crate) len: u32,
}

impl SliceRange {
    /// Number of elements in the range.
    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) const fn as_range(self) -> std::ops::Range<usize> {
        self.start as usize..(self.start as usize + self.len as usize)
    }
}
