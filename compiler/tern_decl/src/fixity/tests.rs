use super::*;
use proptest::prelude::*;

#[test]
fn left_associative_descriptor() {
    let fixity = Fixity::new(120, Associativity::Left);
    assert!(fixity.is_valid());
    assert!(fixity.is_left_associative());
    assert!(!fixity.is_right_associative());
    assert!(!fixity.is_non_associative());
    assert_eq!(fixity.precedence(), 120);
    assert_eq!(fixity, Fixity::new(120, Associativity::Left));
}

#[test]
fn default_is_unset() {
    let fixity = Fixity::default();
    assert!(!fixity.is_valid());
    assert_eq!(fixity, Fixity::UNSET);
    assert_eq!(fixity.get(), None);
}

#[test]
fn precedence_zero_is_still_valid() {
    let fixity = Fixity::new(0, Associativity::None);
    assert!(fixity.is_valid());
    assert_ne!(fixity, Fixity::UNSET);
    assert!(fixity.is_non_associative());
}

#[test]
#[should_panic(expected = "unset fixity")]
fn reading_unset_associativity_panics() {
    let _ = Fixity::UNSET.associativity();
}

#[test]
#[should_panic(expected = "unset fixity")]
fn reading_unset_precedence_panics() {
    let _ = Fixity::UNSET.precedence();
}

#[test]
fn debug_output() {
    assert_eq!(
        format!("{:?}", Fixity::new(90, Associativity::Right)),
        "Fixity(90, Right)"
    );
    assert_eq!(format!("{:?}", Fixity::UNSET), "Fixity(unset)");
}

fn any_associativity() -> impl Strategy<Value = Associativity> {
    prop_oneof![
        Just(Associativity::None),
        Just(Associativity::Left),
        Just(Associativity::Right),
    ]
}

proptest! {
    #[test]
    fn fields_survive_packing(precedence in any::<u8>(), assoc in any_associativity()) {
        let fixity = Fixity::new(precedence, assoc);
        prop_assert!(fixity.is_valid());
        prop_assert_eq!(fixity.get(), Some((precedence, assoc)));
    }

    #[test]
    fn equality_is_fieldwise(
        p1 in any::<u8>(), a1 in any_associativity(),
        p2 in any::<u8>(), a2 in any_associativity(),
    ) {
        let equal = Fixity::new(p1, a1) == Fixity::new(p2, a2);
        prop_assert_eq!(equal, p1 == p2 && a1 == a2);
    }
}
