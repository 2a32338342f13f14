#![cfg(feature = "fallible")]

//! Integration tests for `Fallible`.

use std::hint::black_box;
use std::panic::{self, AssertUnwindSafe};

use maybars::fallible::{BoxError, Fallible, Fault};
use maybars::{Error, Maybe};
use rstest::rstest;

fn divide(numerator: i32, denominator: i32) -> i32 {
    numerator / black_box(denominator)
}

// =============================================================================
// Rethrow Fidelity
// =============================================================================

#[rstest]
#[should_panic(expected = "attempt to divide by zero")]
fn test_rethrow_divide_by_zero_keeps_message() {
    let captured = Fallible::capture(|| divide(10, 0));
    assert!(captured.is_exceptional());
    captured.value_or_rethrow();
}

#[rstest]
fn test_rethrow_resumes_with_the_original_payload() {
    #[derive(Debug, PartialEq)]
    struct Corrupted {
        offset: u64,
    }

    let captured = Fallible::<()>::capture(|| panic::panic_any(Corrupted { offset: 4096 }));
    let payload = panic::catch_unwind(AssertUnwindSafe(|| captured.value_or_rethrow()))
        .expect_err("the fault must be re-signalled");

    assert_eq!(
        payload.downcast_ref::<Corrupted>(),
        Some(&Corrupted { offset: 4096 })
    );
}

#[rstest]
fn test_rethrow_of_error_fault_carries_the_error() {
    let captured = Fallible::<i32>::try_with(|| "NaN".parse::<i32>());
    let payload = panic::catch_unwind(AssertUnwindSafe(|| captured.value_or_rethrow()))
        .expect_err("the fault must be re-signalled");

    let error = payload
        .downcast_ref::<BoxError>()
        .expect("error faults resume as a boxed error");
    assert!(error.downcast_ref::<std::num::ParseIntError>().is_some());
}

#[rstest]
fn test_recapturing_a_rethrown_error_fault_restores_it() {
    let recaptured = Fallible::capture(|| {
        Fallible::<i32>::try_with(|| "x".parse::<i32>()).value_or_rethrow()
    });

    let fault = recaptured.fault().unwrap();
    assert!(!fault.is_panic());
    assert_eq!(fault.message().as_deref(), Some("invalid digit found in string"));
    assert_eq!(fault.to_string(), "invalid digit found in string");
    assert!(fault.downcast_ref::<std::num::ParseIntError>().is_some());
}

// =============================================================================
// Capture Sites
// =============================================================================

#[rstest]
fn test_capture_success_does_not_catch_anything() {
    let result = Fallible::capture(|| divide(10, 2));
    assert_eq!(result.value(), Ok(&5));
}

#[rstest]
fn test_fault_reports_panic_message() {
    let captured = Fallible::capture(|| divide(1, 0));
    let fault = captured.fault().expect("divide by zero is captured");
    assert!(fault.is_panic());
    assert_eq!(fault.message().as_deref(), Some("attempt to divide by zero"));
    assert_eq!(fault.to_string(), "attempt to divide by zero");
}

#[rstest]
fn test_try_with_captures_error_value() {
    let captured = Fallible::try_with(|| "x".parse::<u8>());
    let fault = captured.fault().expect("parse failure is captured");
    assert!(!fault.is_panic());
    assert!(fault.downcast_ref::<std::num::ParseIntError>().is_some());
}

#[rstest]
fn test_threw_and_succeed_factories() {
    let threw = Fallible::<i32>::threw(Fault::from_error(Error::Rejected));
    assert_eq!(threw.value(), Err(Error::NoValue { container: "Fallible" }));
    assert_eq!(Fallible::succeed(3).into_result().ok(), Some(3));
}

// =============================================================================
// Query Operators
// =============================================================================

#[rstest]
fn test_combinators_do_not_catch() {
    let result = panic::catch_unwind(|| Fallible::succeed(1).map(|x| divide(x, 0)));
    assert!(result.is_err());
}

#[rstest]
fn test_fault_identity_survives_chaining() {
    let captured = Fallible::capture(|| divide(1, 0))
        .map(|x| x * 2)
        .bind(|x| Fallible::succeed(x.to_string()))
        .filter(|text| !text.is_empty());

    let fault = captured.into_result().expect_err("the original fault is kept");
    assert_eq!(fault.message().as_deref(), Some("attempt to divide by zero"));
}

#[rstest]
#[case(4, true)]
#[case(5, false)]
fn test_filter(#[case] value: i32, #[case] kept: bool) {
    let filtered = Fallible::succeed(value).filter(|x| x % 2 == 0);
    assert_eq!(filtered.is_success(), kept);
    if !kept {
        let fault = filtered.into_result().expect_err("rejected");
        assert_eq!(fault.downcast_ref::<Error>(), Some(&Error::Rejected));
    }
}

#[rstest]
fn test_select_many_and_join() {
    let projected = Fallible::succeed(2).select_many(|x| Fallible::succeed(x * 10), |x, y| x + y);
    assert_eq!(projected.value(), Ok(&22));

    let matched = Fallible::succeed((1, "ada")).join(
        Fallible::succeed((1, 9)),
        |o| o.0,
        |i| i.0,
        |o, i| (o.1, i.1),
    );
    assert_eq!(matched.value(), Ok(&("ada", 9)));

    let mismatched = Fallible::succeed(1).join(Fallible::succeed(2), |o| *o, |i| *i, |o, i| o + i);
    let fault = mismatched.into_result().expect_err("keys differ");
    assert_eq!(fault.downcast_ref::<Error>(), Some(&Error::Rejected));
}

#[rstest]
fn test_conversions() {
    assert_eq!(Fallible::succeed('x').to_maybe(), Maybe::Some('x'));
    assert_eq!(Fallible::capture(|| divide(1, 0)).to_maybe(), Maybe::None);
    assert_eq!(
        Fallible::capture(|| divide(1, 0)).switch(|_| "value", |_| "fault"),
        "fault"
    );
    assert_eq!(Fallible::capture(|| divide(1, 0)).value_or(-1), -1);
}
