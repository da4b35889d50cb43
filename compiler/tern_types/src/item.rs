//! Compact type item storage.

use crate::Tag;

/// A single type item in the pool.
///
/// - `tag`: Identifies the type kind (see [`Tag`])
/// - `data`: Meaning depends on tag (name, extra index, or var id)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct Item {
    pub tag: Tag,
    pub data: u32,
}

impl Item {
    /// Item with a tag-specific payload.
    #[inline]
    pub const fn new(tag: Tag, data: u32) -> Self {
        Self { tag, data }
    }

    /// Item for a primitive, which has no payload.
    #[inline]
    pub const fn primitive(tag: Tag) -> Self {
        Self { tag, data: 0 }
    }

    /// Get the extra array index for complex types.
    ///
    /// Only meaningful when `tag.uses_extra()` returns true.
    #[inline]
    pub const fn extra_idx(self) -> usize {
        self.data as usize
    }

    /// Get the variable id for `Tag::Var` items.
    #[inline]
    pub const fn var_id(self) -> usize {
        self.data as usize
    }
}
