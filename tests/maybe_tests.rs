//! Integration tests for the core `Maybe` operations.

use maybars::comparer::StructuralComparer;
use maybars::{Error, Maybe};
use rstest::rstest;

// =============================================================================
// Construction and Extraction
// =============================================================================

#[rstest]
#[case(Some(5), Maybe::Some(5))]
#[case(None, Maybe::None)]
fn test_of_and_some_or_none_agree(#[case] source: Option<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(Maybe::of(source), expected);
    assert_eq!(Maybe::some_or_none(source), expected);
    assert_eq!(Maybe::from(source), expected);
}

#[rstest]
fn test_try_get_value_on_empty_yields_default() {
    assert_eq!(Maybe::<String>::none().try_get_value(), (false, String::new()));
    assert_eq!(Maybe::some("x".to_string()).try_get_value(), (true, "x".to_string()));
}

#[rstest]
fn test_value_access_on_empty_is_an_error() {
    let empty: Maybe<i32> = Maybe::none();
    assert_eq!(empty.value(), Err(Error::NoValue { container: "Maybe" }));
    assert_eq!(empty.into_value(), Err(Error::NoValue { container: "Maybe" }));
    assert_eq!(Maybe::some(3).into_value(), Ok(3));
}

#[rstest]
fn test_value_or_variants() {
    assert_eq!(Maybe::some(1).value_or(9), 1);
    assert_eq!(Maybe::none().value_or(9), 9);
    assert_eq!(Maybe::<i32>::none().value_or_default(), 0);
    assert_eq!(Maybe::<i32>::none().value_or_else(|| 7), 7);
    assert_eq!(Maybe::some(2).value_or_error(|| "missing"), Ok(2));
}

#[rstest]
fn test_switch_invokes_exactly_one_branch() {
    let mut some_calls = 0;
    let mut none_calls = 0;
    Maybe::some(1).switch(|_| some_calls += 1, || none_calls += 1);
    Maybe::<i32>::none().switch(|_| some_calls += 1, || none_calls += 1);
    assert_eq!((some_calls, none_calls), (1, 1));
}

#[rstest]
#[case(Maybe::Some(4), "4 items")]
#[case(Maybe::None, "no items")]
fn test_switch_or_falls_back_to_default(#[case] count: Maybe<usize>, #[case] expected: &str) {
    let label = count.switch_or(|count| format!("{count} items"), "no items".to_string());
    assert_eq!(label, expected);
}

#[rstest]
fn test_hooks_pass_container_through() {
    let mut seen = Vec::new();
    let result = Maybe::some(4)
        .on_some(|x| seen.push(*x))
        .on_none(|| seen.push(-1));
    assert_eq!(result, Maybe::Some(4));
    assert_eq!(seen, vec![4]);
}

// =============================================================================
// Query Operators
// =============================================================================

#[rstest]
#[case(Maybe::some(10), Maybe::Some(10))]
#[case(Maybe::some(3), Maybe::None)]
#[case(Maybe::none(), Maybe::None)]
fn test_filter(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(input.filter(|x| *x > 5), expected);
}

#[rstest]
fn test_select_many_requires_both_values() {
    let both = Maybe::some(2).select_many(|x| Maybe::some(x * 3), |x, y| (x, y));
    assert_eq!(both, Maybe::Some((2, 6)));

    let inner_empty = Maybe::some(2).select_many(|_| Maybe::<i32>::none(), |x, y| (x, y));
    assert_eq!(inner_empty, Maybe::None);
}

#[rstest]
#[case(Maybe::some((1, "ada")), Maybe::some((1, 9)), Maybe::Some(("ada", 9)))]
#[case(Maybe::some((1, "ada")), Maybe::some((2, 9)), Maybe::None)]
#[case(Maybe::none(), Maybe::some((1, 9)), Maybe::None)]
#[case(Maybe::some((1, "ada")), Maybe::none(), Maybe::None)]
fn test_join_tie_break(
    #[case] outer: Maybe<(i32, &'static str)>,
    #[case] inner: Maybe<(i32, i32)>,
    #[case] expected: Maybe<(&'static str, i32)>,
) {
    assert_eq!(outer.join(inner, |o| o.0, |i| i.0, |o, i| (o.1, i.1)), expected);
    assert_eq!(outer.group_join(inner, |o| o.0, |i| i.0, |o, i| (o.1, i.1)), expected);
}

#[rstest]
fn test_join_by_uses_supplied_comparer() {
    let outer = Maybe::some(vec![f64::NAN]);
    let inner = Maybe::some(vec![f64::NAN]);

    let natural = outer
        .clone()
        .join(inner.clone(), Clone::clone, Clone::clone, |_, _| "matched");
    assert_eq!(natural, Maybe::None);

    let structural = outer.join_by(
        inner,
        Clone::clone,
        Clone::clone,
        |_, _| "matched",
        &StructuralComparer,
    );
    assert_eq!(structural, Maybe::Some("matched"));
}

#[rstest]
fn test_zip_and_flatten() {
    assert_eq!(Maybe::some(1).zip(Maybe::some('a')), Maybe::Some((1, 'a')));
    assert_eq!(Maybe::some(1).zip(Maybe::<char>::none()), Maybe::None);
    assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::Some(1));
    assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::None);
}

// =============================================================================
// Ordering and Conversions
// =============================================================================

#[rstest]
fn test_natural_order_places_none_first() {
    let mut values = vec![Maybe::some(3), Maybe::none(), Maybe::some(-1)];
    values.sort();
    assert_eq!(values, vec![Maybe::None, Maybe::Some(-1), Maybe::Some(3)]);
}

#[rstest]
fn test_iteration_yields_zero_or_one_item() {
    assert_eq!(Maybe::some(1).into_iter().count(), 1);
    assert_eq!(Maybe::<i32>::none().iter().count(), 0);

    let mut total = 0;
    for value in &Maybe::some(5) {
        total += value;
    }
    assert_eq!(total, 5);
}

#[rstest]
fn test_option_round_trip() {
    let option: Option<i32> = Maybe::some(8).into();
    assert_eq!(option, Some(8));
    assert_eq!(Maybe::some(8).as_option(), Some(&8));
    assert_eq!(Maybe::some(8).as_ref(), Maybe::Some(&8));
}

// =============================================================================
// Three-valued Logic
// =============================================================================

#[rstest]
fn test_kleene_logic() {
    let unknown = Maybe::<bool>::UNKNOWN;
    assert_eq!(Maybe::<bool>::FALSE & unknown, Maybe::<bool>::FALSE);
    assert_eq!(Maybe::<bool>::TRUE | unknown, Maybe::<bool>::TRUE);
    assert_eq!(Maybe::<bool>::TRUE & unknown, unknown);
    assert_eq!(!unknown, unknown);
    assert!((Maybe::<bool>::TRUE ^ Maybe::<bool>::FALSE).is_true());
}

#[rstest]
#[case(Maybe::<bool>::TRUE, false)]
#[case(Maybe::<bool>::FALSE, false)]
#[case(Maybe::<bool>::UNKNOWN, true)]
#[case(Maybe::<bool>::TRUE ^ Maybe::<bool>::UNKNOWN, true)]
fn test_is_unknown(#[case] value: Maybe<bool>, #[case] unknown: bool) {
    assert_eq!(value.is_unknown(), unknown);
    assert_eq!(value.is_true() || value.is_false(), !unknown);
}
