#![cfg(feature = "async")]

//! Integration tests for the asynchronous `Maybe` combinators.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use maybars::Maybe;
use rstest::rstest;

/// Sets a flag when dropped.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

// =============================================================================
// bind_async
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_bind_async_present_awaits_continuation() {
    let result = Maybe::some(20)
        .bind_async(|x| async move {
            tokio::task::yield_now().await;
            Maybe::some(x + 1)
        })
        .await;
    assert_eq!(result, Maybe::Some(21));
}

#[rstest]
#[tokio::test]
async fn test_bind_async_none_never_invokes_continuation() {
    let calls = AtomicUsize::new(0);
    let result = Maybe::<i32>::none()
        .bind_async(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Maybe::some(x) }
        })
        .await;
    assert_eq!(result, Maybe::None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn test_bind_async_forwards_empty_continuation_result() {
    let result = Maybe::some(1)
        .bind_async(|_| async { Maybe::<String>::none() })
        .await;
    assert_eq!(result, Maybe::None);
}

#[rstest]
#[tokio::test]
async fn test_dropping_result_drops_continuation_future() {
    let dropped = Arc::new(AtomicBool::new(false));
    let guard = DropFlag(Arc::clone(&dropped));

    let future = Maybe::some(1).bind_async(move |_| async move {
        let _guard = guard;
        std::future::pending::<Maybe<i32>>().await
    });
    let timed_out = tokio::time::timeout(Duration::from_millis(10), future).await;

    assert!(timed_out.is_err());
    assert!(dropped.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn test_panic_in_continuation_reaches_the_awaiter() {
    let handle = tokio::spawn(Maybe::some(1).bind_async(|_| async {
        if std::hint::black_box(true) {
            panic!("continuation failed");
        }
        Maybe::some(0)
    }));
    let error = handle.await.unwrap_err();
    assert!(error.is_panic());
    let payload = error.into_panic();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"continuation failed"));
}

// =============================================================================
// try_bind_async
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_try_bind_async_forwards_error_unchanged() {
    let result: Result<Maybe<i32>, String> = Maybe::some(1)
        .try_bind_async(|_| async { Err("backend unavailable".to_string()) })
        .await;
    assert_eq!(result, Err("backend unavailable".to_string()));
}

#[rstest]
#[tokio::test]
async fn test_try_bind_async_none_is_ok_none() {
    let result: Result<Maybe<i32>, String> = Maybe::<i32>::none()
        .try_bind_async(|x| async move { Ok(Maybe::some(x)) })
        .await;
    assert_eq!(result, Ok(Maybe::None));
}

// =============================================================================
// map_async / filter_async
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_map_async() {
    let length = Maybe::some("hello")
        .map_async(|text| async move { text.len() })
        .await;
    assert_eq!(length, Maybe::Some(5));

    let nothing = Maybe::<&str>::none()
        .map_async(|text| async move { text.len() })
        .await;
    assert_eq!(nothing, Maybe::None);
}

#[rstest]
#[case(4, Maybe::Some(4))]
#[case(5, Maybe::None)]
#[tokio::test]
async fn test_filter_async(#[case] value: i32, #[case] expected: Maybe<i32>) {
    let result = Maybe::some(value)
        .filter_async(|x| {
            let even = *x % 2 == 0;
            async move { even }
        })
        .await;
    assert_eq!(result, expected);
}

#[rstest]
#[tokio::test]
async fn test_filter_async_runs_predicate_on_first_poll() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let future = Maybe::some(1).filter_async(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        async { true }
    });
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(future.await, Maybe::Some(1));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
