//! Setter optics for write-only transformation.
//!
//! A Setter knows how to apply a function to every focus inside a source,
//! producing a (possibly differently typed) result. It exposes no read access.
//! Lenses, Prisms and Isos can all be weakened into Setters, which is what
//! makes mixed compositions such as `Lens >> Prism` possible.
//!
//! # Laws
//!
//! 1. **Identity**: `setter.modify(source, |a| a) == source`
//! 2. **Composition**:
//!    `setter.modify(setter.modify(source, g), f) == setter.modify(source, |a| f(g(a)))`
//!
//! # Examples
//!
//! ```
//! use optika::optics::{FunctionSetter, Setter};
//!
//! // A setter over every element of a vector
//! let each = FunctionSetter::new(|values: Vec<i32>, function: &dyn Fn(i32) -> i32| {
//!     values.into_iter().map(function).collect::<Vec<_>>()
//! });
//!
//! assert_eq!(each.modify(vec![1, 2, 3], |n| n * 10), vec![10, 20, 30]);
//! assert_eq!(each.set(0, vec![1, 2, 3]), vec![0, 0, 0]);
//! ```

use std::sync::Arc;

use crate::Either;

/// Write capability: transform the focus of a source.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The modified source type
/// - `A`: The focus type
/// - `B`: The modified focus type
///
/// # Laws
///
/// 1. **Identity**: `setter.modify(source, |a| a) == source`
/// 2. **Composition**:
///    `setter.modify(setter.modify(source, g), f) == setter.modify(source, |a| f(g(a)))`
pub trait Setter<S, T, A, B> {
    /// Applies `function` to the focus (or foci) of `source`.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `function` - The transformation applied to each focus
    ///
    /// # Returns
    ///
    /// The modified structure
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: Fn(A) -> B;

    /// Replaces the focus with `value`.
    ///
    /// This is `modify` with a constant function.
    fn set(&self, value: B, source: S) -> T
    where
        B: Clone,
    {
        self.modify(source, move |_| value.clone())
    }

    /// Converts any Setter implementation into a [`FunctionSetter`].
    fn to_function_setter(self) -> FunctionSetter<S, T, A, B>
    where
        Self: Sized + Send + Sync + 'static,
        S: 'static,
        T: 'static,
        A: 'static,
        B: 'static,
    {
        FunctionSetter::new(move |source: S, function: &dyn Fn(A) -> B| {
            self.modify(source, function)
        })
    }
}

/// A Setter backed by a single function `(S, &dyn Fn(A) -> B) -> T`.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The modified source type
/// - `A`: The focus type
/// - `B`: The modified focus type
///
/// # Example
///
/// ```
/// use optika::optics::{FunctionSetter, Setter};
///
/// // Polymorphic update: the element type changes from i32 to String
/// let each = FunctionSetter::new(|values: Vec<i32>, function: &dyn Fn(i32) -> String| {
///     values.into_iter().map(function).collect::<Vec<String>>()
/// });
///
/// assert_eq!(each.modify(vec![1, 2], |n| n.to_string()), vec!["1", "2"]);
/// ```
pub struct FunctionSetter<S, T, A, B> {
    pub(crate) modify_function: Arc<dyn Fn(S, &dyn Fn(A) -> B) -> T + Send + Sync>,
}

/// A Setter whose update keeps the source and focus types.
pub type SimpleSetter<S, A> = FunctionSetter<S, S, A, A>;

impl<S, T, A, B> FunctionSetter<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Creates a new `FunctionSetter` from a modify function.
    ///
    /// # Arguments
    ///
    /// * `modify_function` - A function that applies the given transformation to the focus
    #[must_use]
    pub fn new<M>(modify_function: M) -> Self
    where
        M: Fn(S, &dyn Fn(A) -> B) -> T + Send + Sync + 'static,
    {
        Self {
            modify_function: Arc::new(modify_function),
        }
    }

    /// Lifts this setter to act on the first slot of a pair.
    #[must_use]
    pub fn first<X>(self) -> FunctionSetter<(S, X), (T, X), A, B>
    where
        X: 'static,
    {
        let modify_function = self.modify_function;
        FunctionSetter::new(move |(source, extra): (S, X), function: &dyn Fn(A) -> B| {
            (modify_function(source, function), extra)
        })
    }

    /// Lifts this setter to act on the second slot of a pair.
    #[must_use]
    pub fn second<X>(self) -> FunctionSetter<(X, S), (X, T), A, B>
    where
        X: 'static,
    {
        let modify_function = self.modify_function;
        FunctionSetter::new(move |(extra, source): (X, S), function: &dyn Fn(A) -> B| {
            (extra, modify_function(source, function))
        })
    }

    /// Lifts this setter to the `Left` case of an [`Either`]; a `Right`
    /// source passes through unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::Either;
    /// use optika::optics::{FunctionSetter, Setter};
    ///
    /// let each = FunctionSetter::new(|values: Vec<i32>, function: &dyn Fn(i32) -> i32| {
    ///     values.into_iter().map(function).collect::<Vec<_>>()
    /// })
    /// .left::<String>();
    ///
    /// assert_eq!(each.modify(Either::Left(vec![1, 2]), |n| n + 1), Either::Left(vec![2, 3]));
    /// assert_eq!(
    ///     each.modify(Either::Right("skip".to_string()), |n| n + 1),
    ///     Either::Right("skip".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn left<X>(self) -> FunctionSetter<Either<S, X>, Either<T, X>, A, B>
    where
        X: 'static,
    {
        let modify_function = self.modify_function;
        FunctionSetter::new(move |source: Either<S, X>, function: &dyn Fn(A) -> B| {
            source.map_left(|inner| modify_function(inner, function))
        })
    }

    /// Lifts this setter to the `Right` case of an [`Either`]; a `Left`
    /// source passes through unchanged.
    #[must_use]
    pub fn right<X>(self) -> FunctionSetter<Either<X, S>, Either<X, T>, A, B>
    where
        X: 'static,
    {
        let modify_function = self.modify_function;
        FunctionSetter::new(move |source: Either<X, S>, function: &dyn Fn(A) -> B| {
            source.map_right(|inner| modify_function(inner, function))
        })
    }

    /// Combines this setter with `other`, each handling one case of an
    /// [`Either`] source. Both share the same focus transformation.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::Either;
    /// use optika::optics::{FunctionSetter, Setter};
    ///
    /// let in_vec = FunctionSetter::new(|values: Vec<i32>, function: &dyn Fn(i32) -> i32| {
    ///     values.into_iter().map(function).collect::<Vec<_>>()
    /// });
    /// let in_option = FunctionSetter::new(|value: Option<i32>, function: &dyn Fn(i32) -> i32| {
    ///     value.map(function)
    /// });
    /// let either = in_vec.choice(in_option);
    ///
    /// assert_eq!(either.modify(Either::Left(vec![1, 2]), |n| -n), Either::Left(vec![-1, -2]));
    /// assert_eq!(either.modify(Either::Right(Some(3)), |n| -n), Either::Right(Some(-3)));
    /// ```
    #[must_use]
    pub fn choice<S1, T1>(
        self,
        other: FunctionSetter<S1, T1, A, B>,
    ) -> FunctionSetter<Either<S, S1>, Either<T, T1>, A, B>
    where
        S1: 'static,
        T1: 'static,
    {
        let modify_function = self.modify_function;
        let other_function = other.modify_function;
        FunctionSetter::new(move |source: Either<S, S1>, function: &dyn Fn(A) -> B| {
            source.bimap(
                |inner| modify_function(inner, function),
                |inner| other_function(inner, function),
            )
        })
    }
}

impl<S, T, A, B> Setter<S, T, A, B> for FunctionSetter<S, T, A, B> {
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: Fn(A) -> B,
    {
        (self.modify_function)(source, &function)
    }
}

impl<S, T, A, B> Clone for FunctionSetter<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            modify_function: Arc::clone(&self.modify_function),
        }
    }
}

impl<S, T, A, B> std::fmt::Debug for FunctionSetter<S, T, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionSetter")
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SimpleSetter<Vec<i32>, i32>: Send, Sync, Clone);
