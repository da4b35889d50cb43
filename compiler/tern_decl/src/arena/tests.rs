use pretty_assertions::assert_eq;
use tern_ir::{ExprId, Name, Span, StringInterner};
use tern_types::Idx;

use super::*;
use crate::{Associativity, DeclTier, Fixity, TypeSlotError};

const CTX: DeclContextId = DeclContextId::TOP_LEVEL;

fn no_attrs() -> DeclAttributes {
    DeclAttributes::default()
}

fn sp(start: u32) -> Span {
    Span::new(start, start + 1)
}

#[test]
fn ids_are_dense_and_kinds_recorded() {
    let interner = StringInterner::new();
    let mut arena = DeclArena::new();
    assert!(arena.is_empty());

    let x = arena.alloc_var(CTX, sp(0), interner.intern("x"), None, None, no_attrs());
    let f = arena.alloc_func(CTX, sp(10), interner.intern("f"), None, None, no_attrs());
    let p = arena.alloc_param(CTX, sp(10), interner.intern("a"), Some(Idx::INT));

    assert_eq!(arena.len(), 3);
    assert_eq!(arena.ids().collect::<Vec<_>>(), vec![x, f, p]);
    assert_eq!(arena.kind(x), DeclKind::Var);
    assert_eq!(arena.kind(f), DeclKind::Func);
    assert_eq!(arena.kind(p), DeclKind::Param);
}

#[test]
fn start_loc_per_kind() {
    let interner = StringInterner::new();
    let name = interner.intern("n");
    let mut arena = DeclArena::with_capacity(4096);

    let import = arena.alloc_import(CTX, sp(1), &[AccessPathElement::new(name, sp(8))]);
    let alias = arena.alloc_type_alias(CTX, sp(2), name, Some(Idx::INT), no_attrs());
    let var = arena.alloc_var(CTX, sp(3), name, None, None, no_attrs());
    let func = arena.alloc_func(CTX, sp(4), name, None, None, no_attrs());
    let elem = arena.alloc_oneof_element(CTX, sp(5), name, None, None);
    let param = arena.alloc_param(CTX, sp(6), name, None);
    let eref = arena.alloc_element_ref(CTX, var, sp(7), name, &[0]);

    let locs: Vec<_> = [import, alias, var, func, elem, param, eref]
        .into_iter()
        .map(|id| arena.start_loc(id))
        .collect();
    assert_eq!(locs, (1..=7).map(sp).collect::<Vec<_>>());
}

#[test]
fn tier_views_follow_kind_ranges() {
    let interner = StringInterner::new();
    let name = interner.intern("t");
    let mut arena = DeclArena::new();

    let import = arena.alloc_import(CTX, sp(0), &[]);
    let alias = arena.alloc_type_alias(CTX, sp(0), name, None, no_attrs());
    let param = arena.alloc_param(CTX, sp(0), name, None);

    for id in [import, alias, param] {
        let kind = arena.kind(id);
        assert_eq!(arena.as_named(id).is_some(), kind.is_in(DeclTier::Named));
        assert_eq!(arena.as_value(id).is_some(), kind.is_in(DeclTier::Value));
    }
    assert_eq!(arena.named(alias).name(), name);
    assert_eq!(arena.named(param).name(), name);
}

#[test]
#[should_panic(expected = "has no name")]
fn import_has_no_named_layer() {
    let mut arena = DeclArena::new();
    let import = arena.alloc_import(CTX, sp(0), &[]);
    let _ = arena.named(import);
}

#[test]
#[should_panic(expected = "not a value")]
fn type_alias_has_no_value_layer() {
    let mut arena = DeclArena::new();
    let alias = arena.alloc_type_alias(CTX, sp(0), Name::EMPTY, None, no_attrs());
    let _ = arena.value_mut(alias);
}

#[test]
#[should_panic(expected = "not a func")]
fn typed_accessor_checks_kind() {
    let mut arena = DeclArena::new();
    let var = arena.alloc_var(CTX, sp(0), Name::EMPTY, None, None, no_attrs());
    let _ = arena.func(var);
}

#[test]
fn get_dispatches_on_kind() {
    let interner = StringInterner::new();
    let mut arena = DeclArena::new();
    let elem = arena.alloc_oneof_element(CTX, sp(3), interner.intern("X"), None, Some(Idx::INT));

    match arena.get(elem) {
        DeclRef::OneOfElement(d) => {
            assert_eq!(d.payload_type(), Some(Idx::INT));
            assert_eq!(d.ident_loc(), sp(3));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn import_access_path_is_stored_contiguously() {
    let interner = StringInterner::new();
    let path = [
        AccessPathElement::new(interner.intern("swift"), sp(7)),
        AccessPathElement::new(interner.intern("int"), sp(13)),
    ];
    let mut arena = DeclArena::new();
    let other = arena.alloc_import(CTX, sp(0), &path[..1]);
    let import = arena.alloc_import(CTX, sp(0), &path);

    assert_eq!(arena.access_path(import), &path);
    assert_eq!(arena.access_path(other), &path[..1]);
    assert_eq!(arena.import(import).path_len(), 2);
    assert_eq!(
        arena.import_allocation_size(import),
        std::mem::size_of::<ImportDecl>() + 2 * std::mem::size_of::<AccessPathElement>()
    );
}

#[test]
fn value_type_slot_set_once_then_overwrite() {
    let mut arena = DeclArena::new();
    let var = arena.alloc_var(CTX, sp(0), Name::EMPTY, None, None, no_attrs());

    assert!(!arena.value(var).has_type());
    assert_eq!(arena.value(var).type_if_set(), None);

    arena.value_mut(var).set_type(Idx::INT);
    assert_eq!(
        arena.value_mut(var).try_set_type(Idx::BOOL),
        Err(TypeSlotError::AlreadySet { existing: Idx::INT })
    );
    assert_eq!(arena.value(var).ty(), Idx::INT);

    arena.value_mut(var).overwrite_type(Idx::ERROR);
    assert_eq!(arena.value(var).ty(), Idx::ERROR);
}

#[test]
fn explicit_type_starts_set() {
    let mut arena = DeclArena::new();
    let param = arena.alloc_param(CTX, sp(0), Name::EMPTY, Some(Idx::STR));
    assert_eq!(arena.value(param).ty(), Idx::STR);
    assert!(arena.value_mut(param).try_set_type(Idx::INT).is_err());
}

#[test]
#[should_panic(expected = "no type set yet")]
fn reading_unset_type_panics() {
    let mut arena = DeclArena::new();
    let func = arena.alloc_func(CTX, sp(0), Name::EMPTY, None, None, no_attrs());
    let _ = arena.value(func).ty();
}

#[test]
fn initializer_on_var_and_func_only() {
    let mut arena = DeclArena::new();
    let var = arena.alloc_var(CTX, sp(0), Name::EMPTY, None, Some(ExprId::new(4)), no_attrs());
    assert_eq!(arena.value(var).init(), Some(ExprId::new(4)));

    arena.set_init(var, Some(ExprId::new(9)));
    assert_eq!(arena.value(var).init(), Some(ExprId::new(9)));
    arena.set_init(var, None);
    assert_eq!(arena.value(var).init(), None);
}

#[test]
#[should_panic(expected = "cannot have an initializer")]
fn param_rejects_initializer() {
    let mut arena = DeclArena::new();
    let param = arena.alloc_param(CTX, sp(0), Name::EMPTY, None);
    arena.set_init(param, Some(ExprId::new(0)));
}

#[test]
fn context_can_be_rebound() {
    let mut arena = DeclArena::new();
    let func = arena.alloc_func(CTX, sp(0), Name::EMPTY, None, None, no_attrs());
    assert_eq!(arena.context(func), DeclContextId::TOP_LEVEL);

    arena.set_context(func, DeclContextId::new(3));
    assert_eq!(arena.context(func), DeclContextId::new(3));
}

#[test]
fn attributes_mutable_in_place() {
    let interner = StringInterner::new();
    let plus = interner.intern("+");
    let mut arena = DeclArena::new();
    let func = arena.alloc_func(CTX, sp(0), plus, None, None, no_attrs());

    assert!(arena.named(func).is_operator());
    assert!(arena.named(func).attrs().is_empty());

    arena.named_mut(func).attrs_mut().infix = Fixity::new(120, Associativity::Left);
    let attrs = arena.named(func).attrs();
    assert!(attrs.is_infix());
    assert_eq!(attrs.infix_data().precedence(), 120);
    assert!(attrs.infix_data().is_left_associative());
}

#[test]
fn type_judgement_value_categories() {
    let mut arena = DeclArena::new();
    let var = arena.alloc_var(CTX, sp(0), Name::EMPTY, Some(Idx::INT), None, no_attrs());
    let func = arena.alloc_func(CTX, sp(0), Name::EMPTY, Some(Idx::UNIT), None, no_attrs());
    let eref = arena.alloc_element_ref(CTX, var, sp(0), Name::EMPTY, &[]);
    arena.value_mut(eref).set_type(Idx::BOOL);

    assert_eq!(
        arena.type_judgement(var),
        TypeJudgement { ty: Idx::INT, kind: ValueKind::LValue }
    );
    assert_eq!(
        arena.type_judgement(func),
        TypeJudgement { ty: Idx::UNIT, kind: ValueKind::RValue }
    );
    assert_eq!(arena.type_judgement(eref).kind, ValueKind::LValue);
}

#[test]
fn simple_pattern_shape() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let mut arena = DeclArena::new();
    let pat = arena.alloc_simple_pattern(a, sp(4));

    let pattern = arena.pattern(pat);
    assert!(pattern.is_simple());
    assert_eq!(pattern.identifier(), a);
    assert_eq!(pattern.location(), sp(4));
    let (l, r) = pattern.bracket_spans();
    assert_eq!(l, r);
}

#[test]
fn nested_tuple_pattern_shape() {
    let interner = StringInterner::new();
    let mut arena = DeclArena::new();
    // ((a, b), c)
    let a = arena.alloc_simple_pattern(interner.intern("a"), Span::new(2, 3));
    let b = arena.alloc_simple_pattern(interner.intern("b"), Span::new(5, 6));
    let inner = arena.alloc_tuple_pattern(Span::new(1, 2), &[a, b], Span::new(6, 7));
    let c = arena.alloc_simple_pattern(interner.intern("c"), Span::new(9, 10));
    let outer = arena.alloc_tuple_pattern(Span::new(0, 1), &[inner, c], Span::new(10, 11));

    let pattern = arena.pattern(outer);
    assert!(!pattern.is_simple());
    assert_eq!(pattern.location(), Span::new(0, 1));
    assert_eq!(pattern.source_range(), Span::new(0, 11));
    let (l, r) = pattern.bracket_spans();
    assert_ne!(l, r);

    assert_eq!(arena.pattern_elements(outer), &[inner, c]);
    assert!(!arena.pattern(inner).is_simple());
    assert_eq!(arena.pattern_elements(inner), &[a, b]);
}

#[test]
#[should_panic(expected = "tuple pattern")]
fn identifier_of_tuple_panics() {
    let mut arena = DeclArena::new();
    let pat = arena.alloc_tuple_pattern(sp(0), &[], sp(1));
    let _ = arena.pattern(pat).identifier();
}

#[test]
#[should_panic(expected = "simple pattern")]
fn elements_of_simple_panics() {
    let mut arena = DeclArena::new();
    let pat = arena.alloc_simple_pattern(Name::EMPTY, sp(0));
    let _ = arena.pattern_elements(pat);
}

#[test]
fn destructured_var_is_nameless() {
    let interner = StringInterner::new();
    let mut arena = DeclArena::new();
    let a = arena.alloc_simple_pattern(interner.intern("a"), sp(5));
    let pat = arena.alloc_tuple_pattern(sp(4), &[a], sp(6));
    let var = arena.alloc_destructured_var(CTX, sp(0), pat, None, None, no_attrs());

    let decl = arena.var(var);
    assert!(decl.is_destructured());
    assert_eq!(decl.pattern(), Some(pat));
    assert!(decl.value().name().is_empty());
}

#[test]
#[should_panic(expected = "simple name")]
fn named_var_rejects_pattern() {
    let interner = StringInterner::new();
    let mut arena = DeclArena::new();
    let var = arena.alloc_var(CTX, sp(0), interner.intern("x"), None, None, no_attrs());
    let pat = arena.alloc_simple_pattern(interner.intern("y"), sp(1));
    arena.var_mut(var).set_pattern(pat);
}

#[test]
#[should_panic(expected = "must point into a var")]
fn element_ref_requires_var() {
    let mut arena = DeclArena::new();
    let func = arena.alloc_func(CTX, sp(0), Name::EMPTY, None, None, no_attrs());
    arena.alloc_element_ref(CTX, func, sp(0), Name::EMPTY, &[0]);
}

#[test]
fn leaf_accessors_and_alias_slot() {
    let interner = StringInterner::new();
    let mut arena = DeclArena::new();
    let d = interner.intern("d");
    let alias = arena.alloc_type_alias(CTX, sp(0), d, None, no_attrs());
    let func = arena.alloc_func(CTX, sp(20), interner.intern("f"), None, None, no_attrs());
    let param = arena.alloc_param(CTX, sp(20), interner.intern("a"), Some(Idx::INT));
    let elem = arena.alloc_oneof_element(CTX, sp(30), interner.intern("Z"), None, None);

    assert_eq!(arena.func(func).func_loc(), sp(20));
    assert_eq!(arena.param(param).func_loc(), sp(20));
    assert_eq!(arena.param(param).value().init(), None);
    assert_eq!(arena.oneof_element(elem).payload_type(), None);

    let decl = arena.type_alias_mut(alias);
    assert!(!decl.has_underlying_type());
    assert_eq!(decl.try_set_underlying_type(Idx::FLOAT), Ok(()));
    assert_eq!(
        decl.try_set_underlying_type(Idx::INT),
        Err(TypeSlotError::AlreadySet { existing: Idx::FLOAT })
    );
    decl.set_alias_loc(sp(2));

    let decl = arena.type_alias(alias);
    assert_eq!(decl.underlying_type(), Idx::FLOAT);
    assert_eq!(decl.underlying_type_if_set(), Some(Idx::FLOAT));
    assert_eq!(arena.start_loc(alias), sp(2));
    assert_eq!(decl.named().name(), d);
}

#[test]
#[should_panic(expected = "unresolved underlying type")]
fn reading_unresolved_alias_panics() {
    let mut arena = DeclArena::new();
    let alias = arena.alloc_type_alias(CTX, sp(0), Name::EMPTY, None, no_attrs());
    let _ = arena.type_alias(alias).underlying_type();
}
