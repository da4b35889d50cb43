use super::*;

#[test]
fn point_span_is_empty() {
    let point = Span::point(42);
    assert_eq!(point.start, 42);
    assert_eq!(point.end, 42);
    assert!(point.is_empty());
    assert_eq!(point.len(), 0);
    assert!(!point.is_dummy());
}

#[test]
fn dummy_is_default() {
    assert_eq!(Span::default(), Span::DUMMY);
    assert!(Span::DUMMY.is_dummy());
}

#[test]
fn merge_covers_both_in_either_order() {
    let a = Span::new(20, 30);
    let b = Span::new(10, 25);
    assert_eq!(a.merge(b), Span::new(10, 30));
    assert_eq!(b.merge(a), Span::new(10, 30));
}

#[test]
fn contains_is_end_exclusive() {
    let span = Span::new(10, 20);
    assert!(span.contains(10));
    assert!(span.contains(19));
    assert!(!span.contains(20));
    assert!(!span.contains(9));
}

#[test]
fn try_from_range_rejects_oversized_offsets() {
    let large = u32::MAX as usize + 1;
    assert!(matches!(
        Span::try_from_range(large..large + 1),
        Err(SpanError::StartTooLarge(_))
    ));
    assert!(matches!(
        Span::try_from_range(0..large),
        Err(SpanError::EndTooLarge(_))
    ));
    assert_eq!(Span::try_from_range(5..9), Ok(Span::new(5, 9)));
}

#[test]
fn error_display_names_the_offending_end() {
    let msg = SpanError::StartTooLarge(0x1_0000_0000).to_string();
    assert!(msg.contains("start"));
    assert!(msg.contains("0x100000000"));
}

#[test]
fn debug_and_display_agree() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
    assert_eq!(span.to_range(), 100..200);
}
