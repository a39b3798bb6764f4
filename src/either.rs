//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is the two-case union the optics in this crate are built on:
//!
//! - [`Prism::try_get`](crate::optics::Prism::try_get) returns `Left` carrying the
//!   reconstructed source when the focus is absent and `Right` carrying the focus
//!   when it matches. A `Left` is ordinary control flow, not an error.
//! - The sum combinators (`left`, `right`, `choice`) operate on `Either` sources.
//!
//! # Examples
//!
//! ```rust
//! use optika::Either;
//!
//! let miss: Either<i32, String> = Either::Left(42);
//! let hit: Either<i32, String> = Either::Right("hello".to_string());
//!
//! let described = hit.fold(
//!     |source| format!("no match, kept {source}"),
//!     |focus| format!("matched {focus}"),
//! );
//! assert_eq!(described, "matched hello");
//! assert!(miss.is_left());
//! ```

use std::fmt;

/// A value that can be one of two types.
///
/// By convention in this crate:
/// - `Left` is the "no match" branch of a prism and carries the reconstructed source
/// - `Right` is the "match" branch and carries the focused value
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optika::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optika::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optika::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optika::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the contents, producing `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optika::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optika::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_right(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optika::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains a computation on the right value, short-circuiting on `Left`.
    ///
    /// This is the operation prism composition is expressed with: a miss on
    /// the outer prism skips the inner prism entirely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optika::Either;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(n) };
    ///
    /// assert_eq!(Either::<i32, i32>::Right(8).flat_map(halve), Either::Right(4));
    /// assert_eq!(Either::<i32, i32>::Right(7).flat_map(halve), Either::Left(7));
    /// assert_eq!(Either::<i32, i32>::Left(1).flat_map(halve), Either::Left(1));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optika::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the `Left` and `Right` variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optika::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Extracts the value when both sides have the same type.
    ///
    /// A prism setter maps its match back to `T` and then collapses the
    /// resulting `Either<T, T>` with this.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optika::Either;
    ///
    /// assert_eq!(Either::<i32, i32>::Left(1).into_inner(), 1);
    /// assert_eq!(Either::<i32, i32>::Right(2).into_inner(), 2);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = Either::Left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn test_either_right_construction() {
        let value: Either<i32, String> = Either::Right("hello".to_string());
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    #[case(Either::Right(10), Either::Right(5))]
    #[case(Either::Right(3), Either::Left(3))]
    #[case(Either::Left(-1), Either::Left(-1))]
    fn test_flat_map_short_circuits(
        #[case] input: Either<i32, i32>,
        #[case] expected: Either<i32, i32>,
    ) {
        let halve = |n: i32| if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(n) };
        assert_eq!(input.flat_map(halve), expected);
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }

    #[rstest]
    fn test_as_ref_borrows_contents() {
        let value: Either<String, i32> = Either::Left("kept".to_string());
        assert_eq!(value.as_ref(), Either::Left(&"kept".to_string()));
        assert!(value.is_left());
    }

    #[rstest]
    #[case(Either::Left("miss"), "miss")]
    #[case(Either::Right("hit"), "hit")]
    fn test_into_inner_collapses_after_map_right(
        #[case] input: Either<&'static str, &'static str>,
        #[case] expected: &str,
    ) {
        assert_eq!(input.map_right(|focus| focus).into_inner(), expected);
    }
}
