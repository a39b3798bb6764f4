//! Standard optics that are commonly used.
//!
//! This module provides pre-defined optics for tuples, [`Either`] and
//! [`Option`]. Each one returns a concrete `Function*` type so it composes
//! with the rest of the library.

use super::{FunctionIso, FunctionLens, FunctionPrism, SimpleIso};
use crate::Either;

/// Creates an identity Iso that doesn't transform the value.
///
/// The identity Iso satisfies:
/// - `iso.get(x) == x`
/// - `iso.reverse_get(x) == x`
///
/// # Example
///
/// ```
/// use optika::optics::iso_identity;
///
/// let identity_iso = iso_identity::<i32>();
///
/// assert_eq!(identity_iso.get(42), 42);
/// assert_eq!(identity_iso.reverse_get(42), 42);
/// ```
#[must_use]
pub fn iso_identity<X: 'static>() -> SimpleIso<X, X> {
    FunctionIso::new(|value: X| value, |value: X| value)
}

/// Creates an Iso that swaps the elements of a pair.
///
/// # Example
///
/// ```
/// use optika::optics::iso_swap;
///
/// let swap_iso = iso_swap::<i32, String>();
///
/// let pair = (42, "hello".to_string());
/// let swapped = swap_iso.get(pair.clone());
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// assert_eq!(swap_iso.reverse_get(swapped), pair);
/// ```
#[must_use]
pub fn iso_swap<A: 'static, B: 'static>() -> SimpleIso<(A, B), (B, A)> {
    FunctionIso::new(|(a, b): (A, B)| (b, a), |(b, a): (B, A)| (a, b))
}

/// Lens onto the first slot of a pair. Replacing it may change its type.
///
/// # Example
///
/// ```
/// use optika::optics::{Getter, lens_first};
///
/// let first = lens_first::<i32, String, char>();
/// assert_eq!(first.get(&(1, 'a')), 1);
/// assert_eq!(first.set("one".to_string(), (1, 'a')), ("one".to_string(), 'a'));
/// ```
#[must_use]
pub fn lens_first<A, B, X>() -> FunctionLens<(A, X), (B, X), A, B>
where
    A: Clone + 'static,
    B: 'static,
    X: 'static,
{
    FunctionLens::new(
        |(first, _): &(A, X)| first.clone(),
        |value: B, (_, extra): (A, X)| (value, extra),
    )
}

/// Lens onto the second slot of a pair.
#[must_use]
pub fn lens_second<X, A, B>() -> FunctionLens<(X, A), (X, B), A, B>
where
    X: 'static,
    A: Clone + 'static,
    B: 'static,
{
    FunctionLens::new(
        |(_, second): &(X, A)| second.clone(),
        |value: B, (extra, _): (X, A)| (extra, value),
    )
}

/// Prism onto the `Left` case of an [`Either`].
///
/// # Example
///
/// ```
/// use optika::Either;
/// use optika::optics::{Prism, prism_left};
///
/// let left = prism_left::<i32, i32, String>();
/// assert_eq!(left.try_get(Either::Left(1)), Either::Right(1));
/// assert_eq!(
///     left.try_get(Either::Right("r".to_string())),
///     Either::Left(Either::Right("r".to_string()))
/// );
/// ```
#[must_use]
pub fn prism_left<L, M, R>() -> FunctionPrism<Either<L, R>, Either<M, R>, L, M>
where
    L: 'static,
    M: 'static,
    R: 'static,
{
    FunctionPrism::new(
        |source: Either<L, R>| match source {
            Either::Left(value) => Either::Right(value),
            Either::Right(other) => Either::Left(Either::Right(other)),
        },
        Either::Left,
    )
}

/// Prism onto the `Right` case of an [`Either`].
#[must_use]
pub fn prism_right<L, R, N>() -> FunctionPrism<Either<L, R>, Either<L, N>, R, N>
where
    L: 'static,
    R: 'static,
    N: 'static,
{
    FunctionPrism::new(
        |source: Either<L, R>| match source {
            Either::Left(other) => Either::Left(Either::Left(other)),
            Either::Right(value) => Either::Right(value),
        },
        Either::Right,
    )
}

/// Prism onto the contents of an [`Option`].
///
/// # Example
///
/// ```
/// use optika::optics::{Prism, prism_some};
///
/// let some = prism_some::<i32, String>();
/// assert_eq!(some.modify(Some(3), |n| n.to_string()), Some("3".to_string()));
/// assert_eq!(some.modify(None, |n| n.to_string()), None);
/// ```
#[must_use]
pub fn prism_some<A, B>() -> FunctionPrism<Option<A>, Option<B>, A, B>
where
    A: 'static,
    B: 'static,
{
    FunctionPrism::new(
        |source: Option<A>| source.map_or(Either::Left(None), Either::Right),
        Some,
    )
}
