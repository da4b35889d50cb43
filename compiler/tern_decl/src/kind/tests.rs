use super::*;
use proptest::prelude::*;

/// Independent statement of which tiers each kind belongs to.
fn expected_tiers(kind: DeclKind) -> &'static [DeclTier] {
    match kind {
        DeclKind::Import => &[DeclTier::Decl],
        DeclKind::TypeAlias => &[DeclTier::Decl, DeclTier::Named],
        DeclKind::Var
        | DeclKind::Func
        | DeclKind::OneOfElement
        | DeclKind::Param
        | DeclKind::ElementRef => &[DeclTier::Decl, DeclTier::Named, DeclTier::Value],
    }
}

#[test]
fn all_is_in_discriminant_order() {
    for (i, kind) in DeclKind::ALL.iter().enumerate() {
        assert_eq!(*kind as usize, i, "{kind:?} out of order");
    }
}

#[test]
fn range_test_matches_declared_membership() {
    for kind in DeclKind::ALL {
        for tier in DeclTier::ALL {
            assert_eq!(
                kind.is_in(tier),
                expected_tiers(kind).contains(&tier),
                "{kind:?} in {tier:?}"
            );
        }
    }
}

#[test]
fn tier_ranges_are_contiguous() {
    for tier in DeclTier::ALL {
        let members: Vec<u8> = DeclKind::ALL
            .iter()
            .filter(|k| expected_tiers(**k).contains(&tier))
            .map(|k| *k as u8)
            .collect();
        assert!(!members.is_empty(), "{tier:?} has no kinds");
        for pair in members.windows(2) {
            assert_eq!(pair[0] + 1, pair[1], "{tier:?} has a gap");
        }
        assert_eq!(members[0], tier.first() as u8);
        assert_eq!(members[members.len() - 1], tier.last() as u8);
    }
}

#[test]
fn tiers_nest() {
    for kind in DeclKind::ALL {
        if kind.is_value() {
            assert!(kind.is_named());
        }
        assert!(kind.is_in(DeclTier::Decl));
    }
}

#[test]
fn import_is_not_named() {
    assert!(!DeclKind::Import.is_named());
    assert!(!DeclKind::Import.is_value());
    assert!(DeclKind::TypeAlias.is_named());
    assert!(!DeclKind::TypeAlias.is_value());
}

#[test]
fn only_vars_and_funcs_take_initializers() {
    let allowed: Vec<DeclKind> = DeclKind::ALL
        .into_iter()
        .filter(|k| k.allows_initializer())
        .collect();
    assert_eq!(allowed, vec![DeclKind::Var, DeclKind::Func]);
}

proptest! {
    #[test]
    fn range_test_is_interval_membership(k in 0..DeclKind::ALL.len(), t in 0..DeclTier::ALL.len()) {
        let kind = DeclKind::ALL[k];
        let tier = DeclTier::ALL[t];
        let v = kind as u8;
        prop_assert_eq!(
            kind.is_in(tier),
            (tier.first() as u8..=tier.last() as u8).contains(&v)
        );
    }
}
