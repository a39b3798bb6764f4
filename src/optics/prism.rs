//! Prism optics for focusing on a part that may be absent.
//!
//! A Prism matches one case of a sum type. Matching is by value:
//! [`Prism::try_get`] returns `Right(focus)` when the case matches and
//! `Left(source)` with the (retyped) source when it does not. Going the other
//! way, [`Prism::reverse_get`] always succeeds in building the case.
//!
//! # Laws
//!
//! 1. **Right Identity**: `prism.modify(source, |a| a) == source`, whether or
//!    not the source matches.
//!
//! 2. **Review-Match**: Building a case and matching it yields the value back.
//!    ```text
//!    prism.try_get(prism.reverse_get(value)) == Right(value)
//!    ```
//!
//! # Examples
//!
//! ```
//! use optika::Either;
//! use optika::optics::Prism;
//! use optika::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.try_get(Shape::Circle(5.0)), Either::Right(5.0));
//! assert_eq!(circle.try_get(Shape::Square(3.0)), Either::Left(Shape::Square(3.0)));
//! assert_eq!(circle.reverse_get(1.0), Shape::Circle(1.0));
//!
//! // modify leaves a non-matching source untouched
//! assert_eq!(circle.modify(Shape::Square(3.0), |r| r * 2.0), Shape::Square(3.0));
//! ```

use std::sync::Arc;

use super::{FunctionGetter, FunctionSetter, Setter};
use crate::Either;

/// A Prism: partial read access and total construction.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole sum)
/// - `T`: The modified source type
/// - `A`: The focus type (the payload of the matched case)
/// - `B`: The modified focus type
pub trait Prism<S, T, A, B>: Setter<S, T, A, B> {
    /// Attempts to extract the focus.
    ///
    /// Returns `Right(focus)` on a match, and `Left(source)` carrying the
    /// source retyped as `T` otherwise.
    fn try_get(&self, source: S) -> Either<T, A>;

    /// Builds a source from a focus. Always succeeds.
    fn reverse_get(&self, value: B) -> T;

    /// Extracts the focus if the case matches.
    fn preview(&self, source: S) -> Option<A> {
        self.try_get(source).right()
    }

    /// Converts any Prism implementation into a [`FunctionPrism`].
    fn to_function_prism(self) -> FunctionPrism<S, T, A, B>
    where
        Self: Sized + Send + Sync + 'static,
        S: 'static,
        T: 'static,
        A: 'static,
        B: 'static,
    {
        let prism = Arc::new(self);
        let matcher = Arc::clone(&prism);
        FunctionPrism::new(
            move |source: S| matcher.try_get(source),
            move |value: B| prism.reverse_get(value),
        )
    }
}

/// A prism implemented using a matching function and a building function.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The modified source type
/// - `A`: The focus type
/// - `B`: The modified focus type
pub struct FunctionPrism<S, T, A, B> {
    pub(crate) try_get_function: Arc<dyn Fn(S) -> Either<T, A> + Send + Sync>,
    pub(crate) reverse_get_function: Arc<dyn Fn(B) -> T + Send + Sync>,
}

/// A Prism whose update keeps the source and focus types.
pub type SimplePrism<S, A> = FunctionPrism<S, S, A, A>;

impl<S, T, A, B> FunctionPrism<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Creates a new `FunctionPrism`.
    ///
    /// # Arguments
    ///
    /// * `try_get_function` - Matches the case, returning `Left` with the retyped
    ///   source when it does not match
    /// * `reverse_get_function` - Builds the case from a focus
    #[must_use]
    pub fn new<M, R>(try_get_function: M, reverse_get_function: R) -> Self
    where
        M: Fn(S) -> Either<T, A> + Send + Sync + 'static,
        R: Fn(B) -> T + Send + Sync + 'static,
    {
        Self {
            try_get_function: Arc::new(try_get_function),
            reverse_get_function: Arc::new(reverse_get_function),
        }
    }

    /// Creates a prism from a `Result`-returning matcher.
    ///
    /// `Ok(focus)` is a match, and `Err(source)` hands back the source.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::Either;
    /// use optika::optics::{FunctionPrism, Prism};
    ///
    /// let parsed = FunctionPrism::from_result(
    ///     |text: String| text.parse::<i32>().map_err(|_| text),
    ///     |number: i32| number.to_string(),
    /// );
    ///
    /// assert_eq!(parsed.try_get("42".to_string()), Either::Right(42));
    /// assert_eq!(parsed.try_get("x".to_string()), Either::Left("x".to_string()));
    /// ```
    #[must_use]
    pub fn from_result<M, R>(matcher: M, reverse_get_function: R) -> Self
    where
        M: Fn(S) -> Result<A, T> + Send + Sync + 'static,
        R: Fn(B) -> T + Send + Sync + 'static,
    {
        Self::new(move |source: S| Either::from(matcher(source)), reverse_get_function)
    }

    /// Replaces the focus with `value` if the case matches.
    ///
    /// A non-matching source is returned unchanged (retyped as `T`).
    pub fn set(&self, value: B, source: S) -> T {
        match (self.try_get_function)(source) {
            Either::Left(unmatched) => unmatched,
            Either::Right(_) => (self.reverse_get_function)(value),
        }
    }

    /// Modifies the focus if the case matches.
    pub fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        match (self.try_get_function)(source) {
            Either::Left(unmatched) => unmatched,
            Either::Right(focus) => (self.reverse_get_function)(function(focus)),
        }
    }

    /// Turns the building direction into a [`FunctionGetter`].
    ///
    /// # Example
    ///
    /// ```
    /// use optika::optics::Getter;
    /// use optika::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Token { Word(String), Number(i64) }
    ///
    /// let build_word = prism!(Token, Word).re();
    /// assert_eq!(build_word.get(&"hi".to_string()), Token::Word("hi".to_string()));
    /// ```
    #[must_use]
    pub fn re(self) -> FunctionGetter<B, T>
    where
        B: Clone,
    {
        let reverse_get_function = self.reverse_get_function;
        FunctionGetter::new(move |value: &B| reverse_get_function(value.clone()))
    }

    /// Weakens this prism to a [`FunctionSetter`].
    #[must_use]
    pub fn to_setter(self) -> FunctionSetter<S, T, A, B> {
        let try_get_function = self.try_get_function;
        let reverse_get_function = self.reverse_get_function;
        FunctionSetter::new(move |source: S, function: &dyn Fn(A) -> B| {
            try_get_function(source)
                .map_right(|focus| reverse_get_function(function(focus)))
                .into_inner()
        })
    }

    /// Lifts this prism to act on the first slot of a pair.
    ///
    /// The second slot travels along with both the match and the miss.
    #[must_use]
    pub fn first<X>(self) -> FunctionPrism<(S, X), (T, X), (A, X), (B, X)>
    where
        X: 'static,
    {
        let try_get_function = self.try_get_function;
        let reverse_get_function = self.reverse_get_function;
        FunctionPrism::new(
            move |(source, extra): (S, X)| match try_get_function(source) {
                Either::Left(unmatched) => Either::Left((unmatched, extra)),
                Either::Right(focus) => Either::Right((focus, extra)),
            },
            move |(value, extra): (B, X)| (reverse_get_function(value), extra),
        )
    }

    /// Lifts this prism to act on the second slot of a pair.
    #[must_use]
    pub fn second<X>(self) -> FunctionPrism<(X, S), (X, T), (X, A), (X, B)>
    where
        X: 'static,
    {
        let try_get_function = self.try_get_function;
        let reverse_get_function = self.reverse_get_function;
        FunctionPrism::new(
            move |(extra, source): (X, S)| match try_get_function(source) {
                Either::Left(unmatched) => Either::Left((extra, unmatched)),
                Either::Right(focus) => Either::Right((extra, focus)),
            },
            move |(extra, value): (X, B)| (extra, reverse_get_function(value)),
        )
    }

    /// Lifts this prism to the `Left` case of an [`Either`].
    ///
    /// A `Right` source never matches and is handed back unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::Either;
    /// use optika::optics::Prism;
    /// use optika::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle = prism!(Shape, Circle).left::<u8>();
    ///
    /// assert_eq!(circle.try_get(Either::Left(Shape::Circle(2.0))), Either::Right(2.0));
    /// assert_eq!(circle.try_get(Either::Right(7)), Either::Left(Either::Right(7)));
    /// assert_eq!(circle.reverse_get(1.0), Either::Left(Shape::Circle(1.0)));
    /// ```
    #[must_use]
    pub fn left<X>(self) -> FunctionPrism<Either<S, X>, Either<T, X>, A, B>
    where
        X: 'static,
    {
        let try_get_function = self.try_get_function;
        let reverse_get_function = self.reverse_get_function;
        FunctionPrism::new(
            move |source: Either<S, X>| match source {
                Either::Left(inner) => try_get_function(inner).map_left(Either::Left),
                Either::Right(other) => Either::Left(Either::Right(other)),
            },
            move |value: B| Either::Left(reverse_get_function(value)),
        )
    }

    /// Lifts this prism to the `Right` case of an [`Either`].
    #[must_use]
    pub fn right<X>(self) -> FunctionPrism<Either<X, S>, Either<X, T>, A, B>
    where
        X: 'static,
    {
        let try_get_function = self.try_get_function;
        let reverse_get_function = self.reverse_get_function;
        FunctionPrism::new(
            move |source: Either<X, S>| match source {
                Either::Left(other) => Either::Left(Either::Left(other)),
                Either::Right(inner) => try_get_function(inner).map_left(Either::Right),
            },
            move |value: B| Either::Right(reverse_get_function(value)),
        )
    }
}

impl<S, A, B> FunctionPrism<S, S, A, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    /// Creates a prism from an `Option`-returning matcher over a borrowed source.
    ///
    /// `None` hands the original source back as the miss.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::Either;
    /// use optika::optics::{FunctionPrism, Prism};
    ///
    /// let positive = FunctionPrism::from_option(
    ///     |n: &i32| (*n > 0).then_some(*n as u32),
    ///     |n: u32| n as i32,
    /// );
    ///
    /// assert_eq!(positive.try_get(5), Either::Right(5));
    /// assert_eq!(positive.try_get(-5), Either::Left(-5));
    /// ```
    #[must_use]
    pub fn from_option<M, R>(matcher: M, reverse_get_function: R) -> Self
    where
        M: Fn(&S) -> Option<A> + Send + Sync + 'static,
        R: Fn(B) -> S + Send + Sync + 'static,
    {
        Self::new(
            move |source: S| match matcher(&source) {
                Some(focus) => Either::Right(focus),
                None => Either::Left(source),
            },
            reverse_get_function,
        )
    }
}

impl<S, T, A, B> Setter<S, T, A, B> for FunctionPrism<S, T, A, B> {
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: Fn(A) -> B,
    {
        match (self.try_get_function)(source) {
            Either::Left(unmatched) => unmatched,
            Either::Right(focus) => (self.reverse_get_function)(function(focus)),
        }
    }

    fn set(&self, value: B, source: S) -> T
    where
        B: Clone,
    {
        match (self.try_get_function)(source) {
            Either::Left(unmatched) => unmatched,
            Either::Right(_) => (self.reverse_get_function)(value),
        }
    }
}

impl<S, T, A, B> Prism<S, T, A, B> for FunctionPrism<S, T, A, B> {
    fn try_get(&self, source: S) -> Either<T, A> {
        (self.try_get_function)(source)
    }

    fn reverse_get(&self, value: B) -> T {
        (self.reverse_get_function)(value)
    }

    fn to_function_prism(self) -> Self
    where
        Self: Sized + Send + Sync + 'static,
        S: 'static,
        T: 'static,
        A: 'static,
        B: 'static,
    {
        self
    }
}

impl<S, T, A, B> Clone for FunctionPrism<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            try_get_function: Arc::clone(&self.try_get_function),
            reverse_get_function: Arc::clone(&self.reverse_get_function),
        }
    }
}

impl<S, T, A, B> std::fmt::Debug for FunctionPrism<S, T, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SimplePrism<Option<String>, String>: Send, Sync, Clone);

/// Creates a prism for an enum variant with a single field.
///
/// This macro generates a [`SimplePrism`] that matches the specified variant
/// of the given enum type by value.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// ```
///
/// # Example
///
/// ```
/// use optika::optics::Prism;
/// use optika::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Response { Ok(String), NotFound(u16) }
///
/// let ok = prism!(Response, Ok);
///
/// assert_eq!(ok.preview(Response::Ok("body".to_string())), Some("body".to_string()));
/// assert_eq!(ok.preview(Response::NotFound(404)), None);
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: $enum_type| match source {
                $enum_type::$variant(value) => $crate::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::Either::Left(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => $crate::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::Either::Left(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: $enum_type| match source {
                <$enum_type>::$variant(value) => $crate::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::Either::Left(other),
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}
