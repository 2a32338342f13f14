//! Integration tests for the sequence bridges.

use maybars::Maybe;
use maybars::maybe::{MaybeSequence, SequenceExt};
use rstest::rstest;

// =============================================================================
// Collecting
// =============================================================================

#[rstest]
#[case(vec![], Maybe::Some(vec![]))]
#[case(vec![Maybe::None, Maybe::None], Maybe::None)]
#[case(vec![Maybe::Some(1), Maybe::None, Maybe::Some(3)], Maybe::Some(vec![1, 3]))]
#[case(vec![Maybe::Some(1), Maybe::Some(2)], Maybe::Some(vec![1, 2]))]
fn test_collect_some_drops_empty_slots(
    #[case] input: Vec<Maybe<i32>>,
    #[case] expected: Maybe<Vec<i32>>,
) {
    assert_eq!(input.into_iter().collect_some(), expected);
}

#[rstest]
#[case(vec![], Maybe::Some(vec![]))]
#[case(vec![Maybe::None, Maybe::None], Maybe::None)]
#[case(vec![Maybe::Some(1), Maybe::None, Maybe::Some(3)], Maybe::None)]
#[case(vec![Maybe::Some(1), Maybe::Some(2)], Maybe::Some(vec![1, 2]))]
fn test_collect_all_fails_on_any_empty_slot(
    #[case] input: Vec<Maybe<i32>>,
    #[case] expected: Maybe<Vec<i32>>,
) {
    assert_eq!(input.clone().into_iter().collect_all(), expected);
    assert_eq!(input.into_iter().collect::<Maybe<Vec<i32>>>(), expected);
}

#[rstest]
fn test_first_some_and_values() {
    let slots = vec![Maybe::none(), Maybe::some("b"), Maybe::some("c")];
    assert_eq!(slots.clone().into_iter().first_some(), Maybe::Some("b"));
    assert_eq!(slots.into_iter().values().collect::<Vec<_>>(), vec!["b", "c"]);
    assert_eq!(
        std::iter::repeat_n(Maybe::<i32>::none(), 3).first_some(),
        Maybe::None
    );
}

// =============================================================================
// Element Queries
// =============================================================================

#[rstest]
#[case(vec![], Maybe::None)]
#[case(vec![4], Maybe::Some(4))]
#[case(vec![4, 5], Maybe::None)]
fn test_single_or_none(#[case] input: Vec<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(input.into_iter().single_or_none(), expected);
}

#[rstest]
#[case(vec![1, 2, 3], Maybe::Some(2))]
#[case(vec![1, 2, 4], Maybe::None)]
#[case(vec![1, 3], Maybe::None)]
fn test_single_or_none_by(#[case] input: Vec<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(input.into_iter().single_or_none_by(|x| *x % 2 == 0), expected);
}

#[rstest]
fn test_first_and_last_or_none() {
    let values = [3, 8, 5, 10, 7];
    assert_eq!(values.into_iter().first_or_none(), Maybe::Some(3));
    assert_eq!(values.into_iter().last_or_none(), Maybe::Some(7));
    assert_eq!(values.into_iter().first_or_none_by(|x| *x > 6), Maybe::Some(8));
    assert_eq!(values.into_iter().last_or_none_by(|x| *x % 2 == 0), Maybe::Some(10));
    assert_eq!(values.into_iter().first_or_none_by(|x| *x > 100), Maybe::None);
    assert_eq!(std::iter::empty::<i32>().last_or_none(), Maybe::None);
}

#[rstest]
#[case(0, Maybe::Some('a'))]
#[case(2, Maybe::Some('c'))]
#[case(3, Maybe::None)]
fn test_element_at_or_none(#[case] index: usize, #[case] expected: Maybe<char>) {
    assert_eq!("abc".chars().element_at_or_none(index), expected);
}

// =============================================================================
// Lazy Adapters
// =============================================================================

#[rstest]
fn test_select_any_is_lazy_over_infinite_sources() {
    let halves: Vec<u32> = (0_u32..)
        .select_any(|n| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() })
        .take(4)
        .collect();
    assert_eq!(halves, vec![0, 1, 2, 3]);
}

#[rstest]
fn test_where_any_keeps_only_definite_true() {
    let verdicts = [Maybe::some(true), Maybe::none(), Maybe::some(false)];
    let kept: Vec<usize> = (0..3).where_any(|index| verdicts[*index]).collect();
    assert_eq!(kept, vec![0]);
}

#[rstest]
fn test_zip_any_stops_at_shorter_side() {
    let names = ["ada", "bob", "eve"];
    let ages = [Maybe::some(36), Maybe::none()];
    let pairs: Vec<(&str, i32)> = names
        .into_iter()
        .zip_any(ages, |name, age| age.map(|age| (name, age)))
        .collect();
    assert_eq!(pairs, vec![("ada", 36)]);
}
