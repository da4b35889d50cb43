//! Type pool for the Tern declaration model.
//!
//! Declarations only ever hold an [`Idx`]; everything about the type lives in
//! the [`Pool`]. The pool is deliberately small: it knows the primitive
//! types, tuples, functions, nominal and alias types, inference variables,
//! and the [`Idx::DEPENDENT`] marker for "not inferred yet".
//!
//! # Design (from Zig's `InternPool`)
//!
//! - Types are `Item { tag, data }` pairs in one flat vector
//! - Variable-length payloads (tuple elements, function parameters) live in
//!   a shared `extra` array
//! - Structural types are interned, so equality is index equality

mod flags;
mod idx;
mod item;
mod pool;
mod tag;

pub use flags::TypeFlags;
pub use idx::Idx;
pub use item::Item;
pub use pool::{Pool, VarState};
pub use tag::Tag;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    tern_ir::static_assert_size!(super::Idx, 4);
    tern_ir::static_assert_size!(super::Tag, 1);
    tern_ir::static_assert_size!(super::Item, 8);
}
