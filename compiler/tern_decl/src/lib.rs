//! Tern declaration model.
//!
//! Every declaration a program can make (imports, type aliases, vars,
//! funcs, `oneof` cases, parameters and destructured element bindings) is a
//! node in a [`DeclArena`], addressed by a [`DeclId`].
//!
//! # Tiers
//!
//! The hierarchy has three tiers, each a contiguous range of [`DeclKind`]:
//!
//! - every declaration: kind and enclosing scope
//! - named declarations: [`NamedDecl`], a name plus [`DeclAttributes`]
//! - value declarations: [`ValueDecl`], adding a [`TypeSlot`] and an
//!   optional initializer
//!
//! # Lifecycle
//!
//! The parser allocates nodes through the `alloc_*` factories with every
//! field in final form except the type slots. Later passes fill those in
//! exactly once through `set_type` and may replace them through
//! `overwrite_type`. Nodes are never freed individually.

mod arena;
mod attrs;
mod binding;
mod decl;
mod element_path;
mod fixity;
mod ids;
mod kind;
mod pattern;
mod tracing_setup;
mod type_slot;

pub use arena::{DeclArena, DeclRef};
pub use attrs::DeclAttributes;
pub use decl::{
    AccessPathElement, ElementRefDecl, FuncDecl, ImportDecl, NamedDecl, OneOfElementDecl,
    ParamDecl, TypeAliasDecl, TypeJudgement, ValueDecl, ValueKind, VarDecl,
};
pub use element_path::{type_for_path, PathType};
pub use fixity::{Associativity, Fixity};
pub use ids::{DeclContextId, DeclId, PatternId, SliceRange};
pub use kind::{DeclKind, DeclTier};
pub use pattern::VarPattern;
pub use tracing_setup::init_tracing;
pub use type_slot::{TypeSlot, TypeSlotError};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    tern_ir::static_assert_size!(super::Fixity, 2);
    tern_ir::static_assert_size!(super::DeclAttributes, 12);
    tern_ir::static_assert_size!(super::TypeSlot, 8);
}
