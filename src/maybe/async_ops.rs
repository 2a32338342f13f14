//! Asynchronous composition for `Maybe`.
//!
//! These combinators add no scheduling of their own. On an empty container
//! the returned future is immediately ready with `None` and the continuation
//! is never called. On a present container the continuation's future is
//! awaited and its output forwarded unchanged; a failure carried in that
//! output (see [`Maybe::try_bind_async`]) is returned as is, and dropping the
//! returned future drops the continuation's future with it.
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//!
//! # futures::executor::block_on(async {
//! let length = Maybe::some("hello")
//!     .bind_async(|text| async move { Maybe::some(text.len()) })
//!     .await;
//! assert_eq!(length, Maybe::Some(5));
//! # });
//! ```

use std::future::Future;

use futures::FutureExt;
use futures::future::{Either, Ready, ready};

use super::Maybe;

impl<T> Maybe<T> {
    /// Chains an asynchronous, container-producing continuation.
    ///
    /// The continuation is invoked immediately when `self` is present; the
    /// returned future then resolves to whatever its future resolves to.
    pub fn bind_async<U, F, Fut>(self, binder: F) -> Either<Fut, Ready<Maybe<U>>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Some(value) => Either::Left(binder(value)),
            Self::None => Either::Right(ready(Maybe::None)),
        }
    }

    /// Maps the value through an asynchronous function.
    pub fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => Either::Left(function(value).map(Maybe::Some)),
            Self::None => Either::Right(ready(Maybe::None)),
        }
    }

    /// Keeps the value only if the asynchronous `predicate` resolves to `true`.
    ///
    /// The predicate borrows the value, so it is invoked on the first poll of
    /// the returned future rather than at call time.
    pub async fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value).await {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Chains an asynchronous continuation that can fail.
    ///
    /// The continuation's error is forwarded unchanged; an empty container
    /// resolves to `Ok(None)` without invoking the continuation.
    ///
    /// # Errors
    ///
    /// Returns the error produced by the continuation's future.
    pub fn try_bind_async<U, E, F, Fut>(
        self,
        binder: F,
    ) -> Either<Fut, Ready<Result<Maybe<U>, E>>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<Maybe<U>, E>>,
    {
        match self {
            Self::Some(value) => Either::Left(binder(value)),
            Self::None => Either::Right(ready(Ok(Maybe::None))),
        }
    }
}
