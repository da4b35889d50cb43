//! Declaration layers and concrete declaration nodes.
//!
//! The tiers of the hierarchy are plain structs embedded by composition:
//! every value declaration contains a [`ValueDecl`], which contains a
//! [`NamedDecl`]. The root tier (kind and enclosing context) lives in the
//! arena's parallel arrays, so it is not repeated here.
//!
//! None of these types implement `Clone` and none can be built outside this
//! crate: the only way to obtain one is through a
//! [`DeclArena`](crate::DeclArena) factory, and the only way to drop one is
//! to drop the arena.

use std::cell::Cell;

use tern_ir::{ExprId, Name, Span};
use tern_types::{Idx, Pool};

use crate::{DeclAttributes, DeclId, PatternId, SliceRange, TypeSlot, TypeSlotError};

/// Name and attributes shared by every named declaration.
#[derive(Debug)]
pub struct NamedDecl {
    name: Name,
    attrs: DeclAttributes,
}

impl NamedDecl {
    pub(crate) fn new(name: Name, attrs: DeclAttributes) -> Self {
        NamedDecl { name, attrs }
    }

    /// The declared identifier; empty for a destructured var.
    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    /// Whether the declared name spells an operator.
    #[inline]
    pub fn is_operator(&self) -> bool {
        self.name.is_operator()
    }

    /// Attributes written before the declaration.
    #[inline]
    pub fn attrs(&self) -> &DeclAttributes {
        &self.attrs
    }

    /// Attributes, for passes that fill in operator fixity.
    #[inline]
    pub fn attrs_mut(&mut self) -> &mut DeclAttributes {
        &mut self.attrs
    }
}

/// Type slot and initializer shared by every value declaration.
#[derive(Debug)]
pub struct ValueDecl {
    named: NamedDecl,
    ty: TypeSlot,
    init: Option<ExprId>,
}

impl ValueDecl {
    pub(crate) fn new(named: NamedDecl, ty: Option<Idx>, init: Option<ExprId>) -> Self {
        ValueDecl {
            named,
            ty: TypeSlot::with(ty),
            init,
        }
    }

    /// The named layer underneath.
    #[inline]
    pub fn named(&self) -> &NamedDecl {
        &self.named
    }

    #[inline]
    /// Mutable named layer.
    pub fn named_mut(&mut self) -> &mut NamedDecl {
        &mut self.named
    }

    /// Shortcut for `named().name()`.
    #[inline]
    pub fn name(&self) -> Name {
        self.named.name
    }

    /// Whether a type has been set.
    #[inline]
    pub fn has_type(&self) -> bool {
        self.ty.is_set()
    }

    /// The declaration's type.
    ///
    /// # Panics
    /// Panics if no type has been set yet.
    #[track_caller]
    pub fn ty(&self) -> Idx {
        match self.ty.get() {
            Some(ty) => ty,
            None => panic!("declaration has no type set yet"),
        }
    }

    /// The type, or `None` while inference has not reached it.
    #[inline]
    pub fn type_if_set(&self) -> Option<Idx> {
        self.ty.get()
    }

    /// Set the type for the first time.
    ///
    /// # Panics
    /// Panics if the type is already set.
    #[track_caller]
    pub fn set_type(&mut self, ty: Idx) {
        self.ty.set(ty);
    }

    /// Set the type for the first time, reporting a second attempt.
    pub fn try_set_type(&mut self, ty: Idx) -> Result<(), TypeSlotError> {
        self.ty.try_set(ty)
    }

    /// Replace the type, whether or not one was set.
    pub fn overwrite_type(&mut self, ty: Idx) {
        tracing::debug!(
            name = ?self.named.name,
            old = ?self.ty.get(),
            new = ?ty,
            "overwriting declaration type"
        );
        self.ty.overwrite(ty);
    }

    /// Initializer expression, owned by the expression arena.
    #[inline]
    pub fn init(&self) -> Option<ExprId> {
        self.init
    }

    pub(crate) fn set_init(&mut self, init: Option<ExprId>) {
        self.init = init;
    }
}

/// One `(identifier, position)` step of an import path.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AccessPathElement {
    pub name: Name,
    pub span: Span,
}

impl AccessPathElement {
    /// One path step spelled `name` at `span`.
    pub const fn new(name: Name, span: Span) -> Self {
        AccessPathElement { name, span }
    }
}

/// `import swift` / `import swift.int`.
///
/// The header only records where its access path lives in the arena's flat
/// path buffer; see [`DeclArena::access_path`](crate::DeclArena::access_path).
#[derive(Debug)]
pub struct ImportDecl {
    import_loc: Span,
    pub(crate) path: SliceRange,
}

impl ImportDecl {
    pub(crate) fn new(import_loc: Span, path: SliceRange) -> Self {
        ImportDecl { import_loc, path }
    }

    /// Location of the `import` keyword.
    #[inline]
    pub fn import_loc(&self) -> Span {
        self.import_loc
    }

    /// Number of elements in the access path.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Bytes an import with `path_len` elements occupies: the header plus
    /// exactly one path element per step.
    pub const fn allocation_size(path_len: usize) -> usize {
        std::mem::size_of::<ImportDecl>() + path_len * std::mem::size_of::<AccessPathElement>()
    }
}

/// `typealias foo : int`.
#[derive(Debug)]
pub struct TypeAliasDecl {
    named: NamedDecl,
    alias_loc: Span,
    underlying: TypeSlot,
    /// Sugared alias type, built on first request.
    alias_ty: Cell<Option<Idx>>,
}

impl TypeAliasDecl {
    pub(crate) fn new(named: NamedDecl, alias_loc: Span, underlying: Option<Idx>) -> Self {
        TypeAliasDecl {
            named,
            alias_loc,
            underlying: TypeSlot::with(underlying),
            alias_ty: Cell::new(None),
        }
    }

    /// The named layer underneath.
    #[inline]
    pub fn named(&self) -> &NamedDecl {
        &self.named
    }

    #[inline]
    /// Mutable named layer.
    pub fn named_mut(&mut self) -> &mut NamedDecl {
        &mut self.named
    }

    /// Location of the `typealias` keyword.
    #[inline]
    pub fn alias_loc(&self) -> Span {
        self.alias_loc
    }

    /// Move the keyword location, for synthesized aliases.
    pub fn set_alias_loc(&mut self, loc: Span) {
        self.alias_loc = loc;
    }

    /// Whether name binding has resolved the aliased type.
    #[inline]
    pub fn has_underlying_type(&self) -> bool {
        self.underlying.is_set()
    }

    /// # Panics
    /// Panics if the underlying type has not been resolved yet.
    #[track_caller]
    pub fn underlying_type(&self) -> Idx {
        match self.underlying.get() {
            Some(ty) => ty,
            None => panic!("getting unresolved underlying type of a type alias"),
        }
    }

    /// The aliased type, or `None` while unresolved.
    #[inline]
    pub fn underlying_type_if_set(&self) -> Option<Idx> {
        self.underlying.get()
    }

    /// Resolve the aliased type during name binding.
    ///
    /// # Panics
    /// Panics if the underlying type is already set.
    #[track_caller]
    pub fn set_underlying_type(&mut self, ty: Idx) {
        self.underlying.set(ty);
    }

    /// Set the aliased type for the first time, reporting a second attempt.
    pub fn try_set_underlying_type(&mut self, ty: Idx) -> Result<(), TypeSlotError> {
        self.underlying.try_set(ty)
    }

    /// Replace the aliased type, typically with `Idx::ERROR`.
    ///
    /// Drops the cached alias type so the next `alias_type` call rebuilds it.
    pub fn overwrite_underlying_type(&mut self, ty: Idx) {
        tracing::debug!(
            name = ?self.named.name,
            new = ?ty,
            "overwriting underlying type, dropping cached alias type"
        );
        self.underlying.overwrite(ty);
        self.alias_ty.set(None);
    }

    /// The sugared type naming this alias.
    ///
    /// # Panics
    /// Panics if the underlying type has not been resolved yet.
    #[track_caller]
    pub fn alias_type(&self, pool: &mut Pool) -> Idx {
        if let Some(ty) = self.alias_ty.get() {
            return ty;
        }
        let ty = pool.alias(self.named.name, self.underlying_type());
        self.alias_ty.set(Some(ty));
        ty
    }
}

/// `var x = ...` or `var (a, b) = ...`.
///
/// A simple var carries its name in the named layer. A destructured var has
/// an empty name and a pattern instead; the two are mutually exclusive.
#[derive(Debug)]
pub struct VarDecl {
    value: ValueDecl,
    var_loc: Span,
    pattern: Option<PatternId>,
    /// Consecutive element references formed from `pattern`, by raw id.
    pub(crate) bound_refs: Option<SliceRange>,
}

impl VarDecl {
    pub(crate) fn new(value: ValueDecl, var_loc: Span, pattern: Option<PatternId>) -> Self {
        debug_assert!(pattern.is_none() || value.name().is_empty());
        VarDecl {
            value,
            var_loc,
            pattern,
            bound_refs: None,
        }
    }

    /// The value layer underneath.
    #[inline]
    pub fn value(&self) -> &ValueDecl {
        &self.value
    }

    #[inline]
    /// Mutable value layer, for setting the type.
    pub fn value_mut(&mut self) -> &mut ValueDecl {
        &mut self.value
    }

    /// Location of the `var` keyword.
    #[inline]
    pub fn var_loc(&self) -> Span {
        self.var_loc
    }

    /// The destructuring pattern, if this var has one.
    #[inline]
    pub fn pattern(&self) -> Option<PatternId> {
        self.pattern
    }

    /// Whether this var binds names through a pattern.
    #[inline]
    pub fn is_destructured(&self) -> bool {
        self.pattern.is_some()
    }

    /// Attach or replace the destructuring pattern.
    ///
    /// # Panics
    /// Panics if the var was declared with a simple name.
    #[track_caller]
    pub fn set_pattern(&mut self, pattern: PatternId) {
        assert!(
            self.value.name().is_empty(),
            "a var with a simple name cannot also have a pattern"
        );
        self.pattern = Some(pattern);
        self.bound_refs = None;
    }
}

/// `func f(...)`.
#[derive(Debug)]
pub struct FuncDecl {
    value: ValueDecl,
    func_loc: Span,
}

impl FuncDecl {
    pub(crate) fn new(value: ValueDecl, func_loc: Span) -> Self {
        FuncDecl { value, func_loc }
    }

    /// The value layer underneath.
    #[inline]
    pub fn value(&self) -> &ValueDecl {
        &self.value
    }

    #[inline]
    /// Mutable value layer, for setting the type.
    pub fn value_mut(&mut self) -> &mut ValueDecl {
        &mut self.value
    }

    /// Location of the `func` keyword.
    #[inline]
    pub fn func_loc(&self) -> Span {
        self.func_loc
    }
}

/// One case of a `oneof`, e.g. `X` and `Z` in `oneof d { X : int, Z }`.
///
/// Its type is the oneof type itself; the payload type is what the case
/// carries (`int` for `X`, nothing for `Z`).
#[derive(Debug)]
pub struct OneOfElementDecl {
    value: ValueDecl,
    ident_loc: Span,
    payload: Option<Idx>,
}

impl OneOfElementDecl {
    pub(crate) fn new(value: ValueDecl, ident_loc: Span, payload: Option<Idx>) -> Self {
        OneOfElementDecl {
            value,
            ident_loc,
            payload,
        }
    }

    /// The value layer underneath.
    #[inline]
    pub fn value(&self) -> &ValueDecl {
        &self.value
    }

    #[inline]
    /// Mutable value layer, for setting the type.
    pub fn value_mut(&mut self) -> &mut ValueDecl {
        &mut self.value
    }

    /// Location of the case identifier.
    #[inline]
    pub fn ident_loc(&self) -> Span {
        self.ident_loc
    }

    /// Associated payload type; `None` for a case without one.
    #[inline]
    pub fn payload_type(&self) -> Option<Idx> {
        self.payload
    }
}

/// A named parameter of a `func`, e.g. `a` in `func x(a : int)`.
#[derive(Debug)]
pub struct ParamDecl {
    value: ValueDecl,
    func_loc: Span,
}

impl ParamDecl {
    pub(crate) fn new(value: ValueDecl, func_loc: Span) -> Self {
        ParamDecl { value, func_loc }
    }

    /// The value layer underneath.
    #[inline]
    pub fn value(&self) -> &ValueDecl {
        &self.value
    }

    #[inline]
    /// Mutable value layer, for setting the type.
    pub fn value_mut(&mut self) -> &mut ValueDecl {
        &mut self.value
    }

    /// Location of the enclosing `func` keyword.
    #[inline]
    pub fn func_loc(&self) -> Span {
        self.func_loc
    }
}

/// A name bound to one element of a destructured var.
///
/// In `var (a, b) = f()` there is one nameless [`VarDecl`] and two element
/// references, `a` with path `[0]` and `b` with path `[1]`.
#[derive(Debug)]
pub struct ElementRefDecl {
    value: ValueDecl,
    var: DeclId,
    name_loc: Span,
    pub(crate) path: SliceRange,
}

impl ElementRefDecl {
    pub(crate) fn new(value: ValueDecl, var: DeclId, name_loc: Span, path: SliceRange) -> Self {
        ElementRefDecl {
            value,
            var,
            name_loc,
            path,
        }
    }

    /// The value layer underneath.
    #[inline]
    pub fn value(&self) -> &ValueDecl {
        &self.value
    }

    #[inline]
    /// Mutable value layer, for setting the type.
    pub fn value_mut(&mut self) -> &mut ValueDecl {
        &mut self.value
    }

    /// The destructured var this name refers into.
    #[inline]
    pub fn var(&self) -> DeclId {
        self.var
    }

    /// Location of the bound identifier inside the pattern.
    #[inline]
    pub fn name_loc(&self) -> Span {
        self.name_loc
    }
}

/// Whether a reference to a declaration denotes storage or a plain value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    LValue,
    RValue,
}

/// The type and value category a normal reference to a declaration has.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeJudgement {
    pub ty: Idx,
    pub kind: ValueKind,
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{AccessPathElement, ImportDecl, NamedDecl, ValueDecl};
    tern_ir::static_assert_size!(AccessPathElement, 12);
    tern_ir::static_assert_size!(ImportDecl, 16);
    tern_ir::static_assert_size!(NamedDecl, 16);
    tern_ir::static_assert_size!(ValueDecl, 32);
}
