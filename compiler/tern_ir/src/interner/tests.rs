use super::*;

#[test]
fn intern_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("swift");
    let b = interner.intern("swift");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "swift");
}

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert_eq!(interner.len(), 1);
}

#[test]
fn operator_spellings_are_flagged() {
    let interner = StringInterner::new();
    for op in ["+", "<=", "&&", "==", "-", "~>", "..."] {
        assert!(interner.intern(op).is_operator(), "{op} should be an operator");
    }
    for ident in ["swift", "x1", "_tmp", "int"] {
        assert!(!interner.intern(ident).is_operator(), "{ident} is not an operator");
    }
}

#[test]
fn distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let b = interner.intern("b");
    assert_ne!(a, b);
    assert_eq!(interner.len(), 3);
}

#[test]
fn shared_interner_sees_the_same_table() {
    let shared = SharedInterner::new();
    let clone = shared.clone();
    let name = shared.intern("int");
    assert_eq!(clone.lookup(name), "int");
    assert_eq!(clone.intern("int"), name);
}
