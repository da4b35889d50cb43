//! Tern IR - shared vocabulary for the declaration model.
//!
//! This crate holds the small, `Copy` handles every other Tern crate speaks:
//! - Spans for source positions
//! - Names for interned identifiers
//! - `ExprId` handles for expressions owned by another arena
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32)
//! - **Handles, not pointers**: anything owned elsewhere is referred to by a
//!   32-bit index, never by reference

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod expr_id;
mod interner;
mod name;
mod span;

pub use expr_id::ExprId;
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
