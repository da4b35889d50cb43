//! Arena storage for declarations and destructuring patterns.
//!
//! # Layout
//!
//! - Root tier: `kinds`, `contexts` and `slots` are parallel arrays indexed
//!   by [`DeclId`]; `slots[id]` is the position of the node in the table for
//!   its kind
//! - One table per concrete kind
//! - Variable-length data (import paths, element-ref index paths, tuple
//!   pattern elements) lives in flat side buffers and is referred to by a
//!   [`SliceRange`] fixed at allocation
//!
//! Nothing is ever removed. Dropping the arena frees every node at once.

use tern_ir::{ExprId, Name, Span};
use tern_types::Idx;

use crate::decl::{
    AccessPathElement, ElementRefDecl, FuncDecl, ImportDecl, NamedDecl, OneOfElementDecl,
    ParamDecl, TypeAliasDecl, TypeJudgement, ValueDecl, ValueKind, VarDecl,
};
use crate::{DeclAttributes, DeclContextId, DeclId, DeclKind, PatternId, SliceRange, VarPattern};

/// Convert a length to `u32`, panicking with context on overflow.
pub(crate) fn to_u32(n: usize, what: &str) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| panic!("too many {what}: {n} exceeds u32::MAX"))
}

/// Borrowed view of one declaration, for dispatch by `match`.
#[derive(Copy, Clone, Debug)]
pub enum DeclRef<'a> {
    Import(&'a ImportDecl),
    TypeAlias(&'a TypeAliasDecl),
    Var(&'a VarDecl),
    Func(&'a FuncDecl),
    OneOfElement(&'a OneOfElementDecl),
    Param(&'a ParamDecl),
    ElementRef(&'a ElementRefDecl),
}

/// Owner of every declaration and pattern of one compilation unit.
#[derive(Debug, Default)]
pub struct DeclArena {
    kinds: Vec<DeclKind>,
    contexts: Vec<DeclContextId>,
    slots: Vec<u32>,

    imports: Vec<ImportDecl>,
    type_aliases: Vec<TypeAliasDecl>,
    vars: Vec<VarDecl>,
    funcs: Vec<FuncDecl>,
    oneof_elements: Vec<OneOfElementDecl>,
    params: Vec<ParamDecl>,
    element_refs: Vec<ElementRefDecl>,

    /// Import access paths, back to back.
    access_paths: Vec<AccessPathElement>,
    /// Element-ref index paths, back to back.
    element_paths: Vec<u32>,
    patterns: Vec<VarPattern>,
    /// Tuple pattern elements, back to back.
    pattern_lists: Vec<PatternId>,
}

impl DeclArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 declaration per 64 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 64;
        DeclArena {
            kinds: Vec::with_capacity(estimated),
            contexts: Vec::with_capacity(estimated),
            slots: Vec::with_capacity(estimated),
            imports: Vec::with_capacity(estimated / 16),
            type_aliases: Vec::with_capacity(estimated / 16),
            vars: Vec::with_capacity(estimated / 2),
            funcs: Vec::with_capacity(estimated / 4),
            oneof_elements: Vec::with_capacity(estimated / 16),
            params: Vec::with_capacity(estimated / 2),
            element_refs: Vec::with_capacity(estimated / 16),
            access_paths: Vec::with_capacity(estimated / 8),
            element_paths: Vec::with_capacity(estimated / 16),
            patterns: Vec::with_capacity(estimated / 16),
            pattern_lists: Vec::with_capacity(estimated / 16),
        }
    }

    /// Number of declarations.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Every declaration handle, in allocation order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = DeclId> + '_ {
        (0..self.kinds.len()).map(|i| DeclId::new(to_u32(i, "declarations")))
    }

    fn push_root(&mut self, kind: DeclKind, context: DeclContextId, slot: usize) -> DeclId {
        let id = DeclId::new(to_u32(self.kinds.len(), "declarations"));
        self.kinds.push(kind);
        self.contexts.push(context);
        self.slots.push(to_u32(slot, "declarations of one kind"));
        tracing::trace!(?id, %kind, "allocated declaration");
        id
    }

    // ===== Declaration allocation =====

    /// Allocate `import a.b.c`, copying `path` into the arena.
    pub fn alloc_import(
        &mut self,
        context: DeclContextId,
        import_loc: Span,
        path: &[AccessPathElement],
    ) -> DeclId {
        let start = to_u32(self.access_paths.len(), "access path elements");
        self.access_paths.extend_from_slice(path);
        let range = SliceRange {
            start,
            len: to_u32(path.len(), "access path elements"),
        };
        let slot = self.imports.len();
        self.imports.push(ImportDecl::new(import_loc, range));
        self.push_root(DeclKind::Import, context, slot)
    }

    /// Allocate `typealias name : underlying`.
    ///
    /// `underlying` is `None` when the parser could not resolve it yet.
    pub fn alloc_type_alias(
        &mut self,
        context: DeclContextId,
        alias_loc: Span,
        name: Name,
        underlying: Option<Idx>,
        attrs: DeclAttributes,
    ) -> DeclId {
        let slot = self.type_aliases.len();
        self.type_aliases.push(TypeAliasDecl::new(
            NamedDecl::new(name, attrs),
            alias_loc,
            underlying,
        ));
        self.push_root(DeclKind::TypeAlias, context, slot)
    }

    /// Allocate a var with a simple name.
    pub fn alloc_var(
        &mut self,
        context: DeclContextId,
        var_loc: Span,
        name: Name,
        ty: Option<Idx>,
        init: Option<ExprId>,
        attrs: DeclAttributes,
    ) -> DeclId {
        let value = ValueDecl::new(NamedDecl::new(name, attrs), ty, init);
        let slot = self.vars.len();
        self.vars.push(VarDecl::new(value, var_loc, None));
        self.push_root(DeclKind::Var, context, slot)
    }

    /// Allocate a nameless var bound through a destructuring pattern.
    pub fn alloc_destructured_var(
        &mut self,
        context: DeclContextId,
        var_loc: Span,
        pattern: PatternId,
        ty: Option<Idx>,
        init: Option<ExprId>,
        attrs: DeclAttributes,
    ) -> DeclId {
        let value = ValueDecl::new(NamedDecl::new(Name::EMPTY, attrs), ty, init);
        let slot = self.vars.len();
        self.vars.push(VarDecl::new(value, var_loc, Some(pattern)));
        self.push_root(DeclKind::Var, context, slot)
    }

    /// Allocate `func name ...`.
    pub fn alloc_func(
        &mut self,
        context: DeclContextId,
        func_loc: Span,
        name: Name,
        ty: Option<Idx>,
        init: Option<ExprId>,
        attrs: DeclAttributes,
    ) -> DeclId {
        let value = ValueDecl::new(NamedDecl::new(name, attrs), ty, init);
        let slot = self.funcs.len();
        self.funcs.push(FuncDecl::new(value, func_loc));
        self.push_root(DeclKind::Func, context, slot)
    }

    /// Allocate one case of a `oneof`. `ty` is the oneof type itself.
    pub fn alloc_oneof_element(
        &mut self,
        context: DeclContextId,
        ident_loc: Span,
        name: Name,
        ty: Option<Idx>,
        payload: Option<Idx>,
    ) -> DeclId {
        let value = ValueDecl::new(NamedDecl::new(name, DeclAttributes::default()), ty, None);
        let slot = self.oneof_elements.len();
        self.oneof_elements
            .push(OneOfElementDecl::new(value, ident_loc, payload));
        self.push_root(DeclKind::OneOfElement, context, slot)
    }

    /// Allocate a function parameter. Parameters never have an initializer.
    pub fn alloc_param(
        &mut self,
        context: DeclContextId,
        func_loc: Span,
        name: Name,
        ty: Option<Idx>,
    ) -> DeclId {
        let value = ValueDecl::new(NamedDecl::new(name, DeclAttributes::default()), ty, None);
        let slot = self.params.len();
        self.params.push(ParamDecl::new(value, func_loc));
        self.push_root(DeclKind::Param, context, slot)
    }

    /// Allocate a name bound to element `path` of the destructured `var`.
    ///
    /// # Panics
    /// Panics if `var` is not a var declaration.
    #[track_caller]
    pub fn alloc_element_ref(
        &mut self,
        context: DeclContextId,
        var: DeclId,
        name_loc: Span,
        name: Name,
        path: &[u32],
    ) -> DeclId {
        assert_eq!(
            self.kind(var),
            DeclKind::Var,
            "element reference must point into a var"
        );
        let start = to_u32(self.element_paths.len(), "element path indices");
        self.element_paths.extend_from_slice(path);
        let range = SliceRange {
            start,
            len: to_u32(path.len(), "element path indices"),
        };
        let value = ValueDecl::new(NamedDecl::new(name, DeclAttributes::default()), None, None);
        let slot = self.element_refs.len();
        self.element_refs
            .push(ElementRefDecl::new(value, var, name_loc, range));
        self.push_root(DeclKind::ElementRef, context, slot)
    }

    // ===== Pattern allocation =====

    /// Allocate a single-identifier pattern.
    pub fn alloc_simple_pattern(&mut self, name: Name, span: Span) -> PatternId {
        self.push_pattern(VarPattern::Simple { name, span })
    }

    /// Allocate a parenthesized pattern over already-allocated elements.
    pub fn alloc_tuple_pattern(
        &mut self,
        lparen: Span,
        elements: &[PatternId],
        rparen: Span,
    ) -> PatternId {
        let start = to_u32(self.pattern_lists.len(), "pattern elements");
        self.pattern_lists.extend_from_slice(elements);
        let elements = SliceRange {
            start,
            len: to_u32(elements.len(), "pattern elements"),
        };
        self.push_pattern(VarPattern::Tuple {
            lparen,
            elements,
            rparen,
        })
    }

    fn push_pattern(&mut self, pattern: VarPattern) -> PatternId {
        let id = PatternId::new(to_u32(self.patterns.len(), "patterns"));
        tracing::trace!(?id, simple = pattern.is_simple(), "allocated pattern");
        self.patterns.push(pattern);
        id
    }

    // ===== Root tier =====

    /// Kind of a declaration.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn kind(&self, id: DeclId) -> DeclKind {
        self.kinds[id.index()]
    }

    /// Scope the declaration belongs to.
    #[inline]
    #[track_caller]
    pub fn context(&self, id: DeclId) -> DeclContextId {
        self.contexts[id.index()]
    }

    /// Move a declaration into another scope.
    #[track_caller]
    pub fn set_context(&mut self, id: DeclId, context: DeclContextId) {
        self.contexts[id.index()] = context;
    }

    /// Borrow a declaration for dispatch on its kind.
    #[track_caller]
    pub fn get(&self, id: DeclId) -> DeclRef<'_> {
        let slot = self.slots[id.index()] as usize;
        match self.kind(id) {
            DeclKind::Import => DeclRef::Import(&self.imports[slot]),
            DeclKind::TypeAlias => DeclRef::TypeAlias(&self.type_aliases[slot]),
            DeclKind::Var => DeclRef::Var(&self.vars[slot]),
            DeclKind::Func => DeclRef::Func(&self.funcs[slot]),
            DeclKind::OneOfElement => DeclRef::OneOfElement(&self.oneof_elements[slot]),
            DeclKind::Param => DeclRef::Param(&self.params[slot]),
            DeclKind::ElementRef => DeclRef::ElementRef(&self.element_refs[slot]),
        }
    }

    /// First source position of a declaration.
    #[track_caller]
    pub fn start_loc(&self, id: DeclId) -> Span {
        match self.get(id) {
            DeclRef::Import(d) => d.import_loc(),
            DeclRef::TypeAlias(d) => d.alias_loc(),
            DeclRef::Var(d) => d.var_loc(),
            DeclRef::Func(d) => d.func_loc(),
            DeclRef::OneOfElement(d) => d.ident_loc(),
            DeclRef::Param(d) => d.func_loc(),
            DeclRef::ElementRef(d) => d.name_loc(),
        }
    }

    // ===== Named and value tiers =====

    /// The named layer of a declaration, or `None` for imports.
    #[track_caller]
    pub fn as_named(&self, id: DeclId) -> Option<&NamedDecl> {
        match self.get(id) {
            DeclRef::Import(_) => None,
            DeclRef::TypeAlias(d) => Some(d.named()),
            _ => self.as_value(id).map(ValueDecl::named),
        }
    }

    /// The named layer of a declaration.
    ///
    /// # Panics
    /// Panics if the declaration has no name.
    #[track_caller]
    pub fn named(&self, id: DeclId) -> &NamedDecl {
        match self.as_named(id) {
            Some(named) => named,
            None => panic!("{} declaration {id:?} has no name", self.kind(id)),
        }
    }

    /// # Panics
    /// Panics if the declaration has no name.
    #[track_caller]
    pub fn named_mut(&mut self, id: DeclId) -> &mut NamedDecl {
        match self.kind(id) {
            DeclKind::Import => panic!("import declaration {id:?} has no name"),
            DeclKind::TypeAlias => {
                let slot = self.slots[id.index()] as usize;
                self.type_aliases[slot].named_mut()
            }
            _ => self.value_mut(id).named_mut(),
        }
    }

    /// The value layer of a declaration, or `None` for imports and aliases.
    #[track_caller]
    pub fn as_value(&self, id: DeclId) -> Option<&ValueDecl> {
        match self.get(id) {
            DeclRef::Import(_) | DeclRef::TypeAlias(_) => None,
            DeclRef::Var(d) => Some(d.value()),
            DeclRef::Func(d) => Some(d.value()),
            DeclRef::OneOfElement(d) => Some(d.value()),
            DeclRef::Param(d) => Some(d.value()),
            DeclRef::ElementRef(d) => Some(d.value()),
        }
    }

    /// The value layer of a declaration.
    ///
    /// # Panics
    /// Panics if the declaration is not a value.
    #[track_caller]
    pub fn value(&self, id: DeclId) -> &ValueDecl {
        match self.as_value(id) {
            Some(value) => value,
            None => panic!("{} declaration {id:?} is not a value", self.kind(id)),
        }
    }

    /// # Panics
    /// Panics if the declaration is not a value.
    #[track_caller]
    pub fn value_mut(&mut self, id: DeclId) -> &mut ValueDecl {
        let slot = self.slots[id.index()] as usize;
        match self.kind(id) {
            DeclKind::Var => self.vars[slot].value_mut(),
            DeclKind::Func => self.funcs[slot].value_mut(),
            DeclKind::OneOfElement => self.oneof_elements[slot].value_mut(),
            DeclKind::Param => self.params[slot].value_mut(),
            DeclKind::ElementRef => self.element_refs[slot].value_mut(),
            kind @ (DeclKind::Import | DeclKind::TypeAlias) => {
                panic!("{kind} declaration {id:?} is not a value")
            }
        }
    }

    /// Attach or replace the initializer of a var or func.
    ///
    /// # Panics
    /// Panics for kinds that never carry an initializer.
    #[track_caller]
    pub fn set_init(&mut self, id: DeclId, init: Option<ExprId>) {
        let kind = self.kind(id);
        assert!(
            kind.allows_initializer(),
            "{kind} declaration {id:?} cannot have an initializer"
        );
        self.value_mut(id).set_init(init);
    }

    /// Type and value category of a normal reference to `id`.
    ///
    /// # Panics
    /// Panics if the declaration is not a value or its type is unset.
    #[track_caller]
    pub fn type_judgement(&self, id: DeclId) -> TypeJudgement {
        let kind = match self.kind(id) {
            DeclKind::Var | DeclKind::ElementRef => ValueKind::LValue,
            _ => ValueKind::RValue,
        };
        TypeJudgement {
            ty: self.value(id).ty(),
            kind,
        }
    }

    // ===== Typed leaf access =====

    #[track_caller]
    fn slot_of(&self, id: DeclId, expected: DeclKind) -> usize {
        let kind = self.kind(id);
        assert_eq!(kind, expected, "{id:?} is a {kind} declaration, not a {expected}");
        self.slots[id.index()] as usize
    }

    /// # Panics
    /// Panics if `id` is not an import.
    #[track_caller]
    pub fn import(&self, id: DeclId) -> &ImportDecl {
        &self.imports[self.slot_of(id, DeclKind::Import)]
    }

    /// Type alias by handle; panics if `id` is another kind.
    #[track_caller]
    pub fn type_alias(&self, id: DeclId) -> &TypeAliasDecl {
        &self.type_aliases[self.slot_of(id, DeclKind::TypeAlias)]
    }

    /// Mutable type alias, for name binding to resolve its underlying type.
    #[track_caller]
    pub fn type_alias_mut(&mut self, id: DeclId) -> &mut TypeAliasDecl {
        let slot = self.slot_of(id, DeclKind::TypeAlias);
        &mut self.type_aliases[slot]
    }

    /// Var by handle; panics if `id` is another kind.
    #[track_caller]
    pub fn var(&self, id: DeclId) -> &VarDecl {
        &self.vars[self.slot_of(id, DeclKind::Var)]
    }

    /// Mutable var, for attaching a destructuring pattern.
    #[track_caller]
    pub fn var_mut(&mut self, id: DeclId) -> &mut VarDecl {
        let slot = self.slot_of(id, DeclKind::Var);
        &mut self.vars[slot]
    }

    /// Func by handle; panics if `id` is another kind.
    #[track_caller]
    pub fn func(&self, id: DeclId) -> &FuncDecl {
        &self.funcs[self.slot_of(id, DeclKind::Func)]
    }

    /// `oneof` case by handle; panics if `id` is another kind.
    #[track_caller]
    pub fn oneof_element(&self, id: DeclId) -> &OneOfElementDecl {
        &self.oneof_elements[self.slot_of(id, DeclKind::OneOfElement)]
    }

    /// Parameter by handle; panics if `id` is another kind.
    #[track_caller]
    pub fn param(&self, id: DeclId) -> &ParamDecl {
        &self.params[self.slot_of(id, DeclKind::Param)]
    }

    /// Element reference by handle; panics if `id` is another kind.
    #[track_caller]
    pub fn element_ref(&self, id: DeclId) -> &ElementRefDecl {
        &self.element_refs[self.slot_of(id, DeclKind::ElementRef)]
    }

    // ===== Side buffers =====

    /// The dotted path of an import, exactly as it was allocated.
    ///
    /// # Panics
    /// Panics if `id` is not an import.
    #[track_caller]
    pub fn access_path(&self, id: DeclId) -> &[AccessPathElement] {
        &self.access_paths[self.import(id).path.as_range()]
    }

    /// Bytes an import occupies: header plus one slot per path element.
    #[track_caller]
    pub fn import_allocation_size(&self, id: DeclId) -> usize {
        ImportDecl::allocation_size(self.import(id).path_len())
    }

    /// Index path of an element reference into its var's type.
    ///
    /// # Panics
    /// Panics if `id` is not an element reference.
    #[track_caller]
    pub fn element_path(&self, id: DeclId) -> &[u32] {
        &self.element_paths[self.element_ref(id).path.as_range()]
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn pattern(&self, id: PatternId) -> &VarPattern {
        &self.patterns[id.index()]
    }

    /// Nested patterns of a tuple pattern.
    ///
    /// # Panics
    /// Panics on a simple pattern.
    #[track_caller]
    pub fn pattern_elements(&self, id: PatternId) -> &[PatternId] {
        match self.pattern(id) {
            VarPattern::Tuple { elements, .. } => &self.pattern_lists[elements.as_range()],
            VarPattern::Simple { .. } => panic!("pattern_elements() called on a simple pattern"),
        }
    }
}

#[cfg(test)]
mod tests;
