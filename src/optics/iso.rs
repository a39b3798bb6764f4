//! Iso optics for lossless conversion between two types.
//!
//! An Iso (Isomorphism) is a pair of inverse functions. It is the strongest
//! optic kind: every Iso can act as a Lens (when the source is cloneable),
//! as a Prism that always matches, and as a Setter.
//!
//! Conversion is by value in both directions, so [`FunctionIso::reverse`] is
//! a plain swap of the two functions.
//!
//! # Laws
//!
//! 1. **GetReverseGet Law**: Converting then reverse-converting yields the original.
//!    ```text
//!    iso.reverse_get(iso.get(source)) == source
//!    ```
//!
//! 2. **ReverseGetGet Law**: Reverse-converting then converting yields the original.
//!    ```text
//!    iso.get(iso.reverse_get(value)) == value
//!    ```
//!
//! # Examples
//!
//! ```
//! use optika::optics::FunctionIso;
//!
//! let celsius_to_fahrenheit = FunctionIso::new(
//!     |celsius: f64| celsius * 9.0 / 5.0 + 32.0,
//!     |fahrenheit: f64| (fahrenheit - 32.0) * 5.0 / 9.0,
//! );
//!
//! assert_eq!(celsius_to_fahrenheit.get(100.0), 212.0);
//! assert_eq!(celsius_to_fahrenheit.reverse_get(32.0), 0.0);
//!
//! let fahrenheit_to_celsius = celsius_to_fahrenheit.reverse();
//! assert_eq!(fahrenheit_to_celsius.get(212.0), 100.0);
//! ```

use std::sync::Arc;

use super::{
    FunctionGetter, FunctionLens, FunctionPrism, FunctionSetter, Getter, Lens, Prism, Setter,
};
use crate::Either;

/// An Iso: total conversion in both directions.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The modified source type
/// - `A`: The target type
/// - `B`: The modified target type
pub trait Iso<S, T, A, B>: Prism<S, T, A, B> {
    /// Converts the source into the target, consuming it.
    fn get_owned(&self, source: S) -> A;

    /// Converts any Iso implementation into a [`FunctionIso`].
    fn to_function_iso(self) -> FunctionIso<S, T, A, B>
    where
        Self: Sized + Send + Sync + 'static,
        S: 'static,
        T: 'static,
        A: 'static,
        B: 'static,
    {
        let iso = Arc::new(self);
        let forward = Arc::clone(&iso);
        FunctionIso::new(
            move |source: S| forward.get_owned(source),
            move |value: B| iso.reverse_get(value),
        )
    }
}

/// An iso implemented using a pair of conversion functions.
///
/// The `iso!` macro generates a `FunctionIso` internally.
pub struct FunctionIso<S, T, A, B> {
    pub(crate) get_function: Arc<dyn Fn(S) -> A + Send + Sync>,
    pub(crate) reverse_get_function: Arc<dyn Fn(B) -> T + Send + Sync>,
}

/// An Iso whose update keeps the source and target types.
pub type SimpleIso<S, A> = FunctionIso<S, S, A, A>;

impl<S, T, A, B> FunctionIso<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Creates a new `FunctionIso` from conversion functions.
    ///
    /// # Arguments
    ///
    /// * `get_function` - Converts from source to target
    /// * `reverse_get_function` - Converts from modified target to modified source
    #[must_use]
    pub fn new<G, R>(get_function: G, reverse_get_function: R) -> Self
    where
        G: Fn(S) -> A + Send + Sync + 'static,
        R: Fn(B) -> T + Send + Sync + 'static,
    {
        Self {
            get_function: Arc::new(get_function),
            reverse_get_function: Arc::new(reverse_get_function),
        }
    }

    /// Converts the source into the target.
    pub fn get(&self, source: S) -> A {
        (self.get_function)(source)
    }

    /// Converts the modified target back into the modified source.
    pub fn reverse_get(&self, value: B) -> T {
        (self.reverse_get_function)(value)
    }

    /// Modifies the source through its converted form.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::optics::FunctionIso;
    ///
    /// let chars = FunctionIso::new(
    ///     |text: String| text.chars().collect::<Vec<_>>(),
    ///     |chars: Vec<char>| chars.into_iter().collect::<String>(),
    /// );
    ///
    /// let reversed = chars.modify("hello".to_string(), |mut c| { c.reverse(); c });
    /// assert_eq!(reversed, "olleh");
    /// ```
    pub fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        (self.reverse_get_function)(function((self.get_function)(source)))
    }

    /// Replaces the whole source. The old source is ignored.
    pub fn set(&self, value: B, _source: S) -> T {
        (self.reverse_get_function)(value)
    }

    /// Swaps the two directions.
    #[must_use]
    pub fn reverse(self) -> FunctionIso<B, A, T, S> {
        FunctionIso {
            get_function: self.reverse_get_function,
            reverse_get_function: self.get_function,
        }
    }

    /// Weakens this iso to a [`FunctionLens`].
    ///
    /// The lens reads by reference, so the source is cloned before converting.
    #[must_use]
    pub fn to_lens(self) -> FunctionLens<S, T, A, B>
    where
        S: Clone,
    {
        let get_function = self.get_function;
        let reverse_get_function = self.reverse_get_function;
        FunctionLens::new(
            move |source: &S| get_function(source.clone()),
            move |value: B, _source: S| reverse_get_function(value),
        )
    }

    /// Weakens this iso to a [`FunctionGetter`].
    #[must_use]
    pub fn to_getter(self) -> FunctionGetter<S, A>
    where
        S: Clone,
    {
        let get_function = self.get_function;
        FunctionGetter::new(move |source: &S| get_function(source.clone()))
    }

    /// Weakens this iso to a [`FunctionPrism`] that always matches.
    #[must_use]
    pub fn to_prism(self) -> FunctionPrism<S, T, A, B> {
        let get_function = self.get_function;
        FunctionPrism {
            try_get_function: Arc::new(move |source: S| Either::Right(get_function(source))),
            reverse_get_function: self.reverse_get_function,
        }
    }

    /// Weakens this iso to a [`FunctionSetter`].
    #[must_use]
    pub fn to_setter(self) -> FunctionSetter<S, T, A, B> {
        let get_function = self.get_function;
        let reverse_get_function = self.reverse_get_function;
        FunctionSetter::new(move |source: S, function: &dyn Fn(A) -> B| {
            reverse_get_function(function(get_function(source)))
        })
    }

    /// Lifts this iso to act on the first slot of a pair.
    #[must_use]
    pub fn first<X>(self) -> FunctionIso<(S, X), (T, X), (A, X), (B, X)>
    where
        X: 'static,
    {
        let get_function = self.get_function;
        let reverse_get_function = self.reverse_get_function;
        FunctionIso::new(
            move |(source, extra): (S, X)| (get_function(source), extra),
            move |(value, extra): (B, X)| (reverse_get_function(value), extra),
        )
    }

    /// Lifts this iso to act on the second slot of a pair.
    #[must_use]
    pub fn second<X>(self) -> FunctionIso<(X, S), (X, T), (X, A), (X, B)>
    where
        X: 'static,
    {
        let get_function = self.get_function;
        let reverse_get_function = self.reverse_get_function;
        FunctionIso::new(
            move |(extra, source): (X, S)| (extra, get_function(source)),
            move |(extra, value): (X, B)| (extra, reverse_get_function(value)),
        )
    }

    /// Lifts this iso to the `Left` case of an [`Either`].
    ///
    /// `Right` values pass through unchanged in both directions.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::Either;
    /// use optika::optics::FunctionIso;
    ///
    /// let negate = FunctionIso::new(|n: i32| -n, |n: i32| -n).left::<char>();
    ///
    /// assert_eq!(negate.get(Either::Left(3)), Either::Left(-3));
    /// assert_eq!(negate.get(Either::Right('x')), Either::Right('x'));
    /// ```
    #[must_use]
    pub fn left<X>(self) -> FunctionIso<Either<S, X>, Either<T, X>, Either<A, X>, Either<B, X>>
    where
        X: 'static,
    {
        let get_function = self.get_function;
        let reverse_get_function = self.reverse_get_function;
        FunctionIso::new(
            move |source: Either<S, X>| source.map_left(|inner| get_function(inner)),
            move |value: Either<B, X>| value.map_left(|inner| reverse_get_function(inner)),
        )
    }

    /// Lifts this iso to the `Right` case of an [`Either`].
    #[must_use]
    pub fn right<X>(self) -> FunctionIso<Either<X, S>, Either<X, T>, Either<X, A>, Either<X, B>>
    where
        X: 'static,
    {
        let get_function = self.get_function;
        let reverse_get_function = self.reverse_get_function;
        FunctionIso::new(
            move |source: Either<X, S>| source.map_right(|inner| get_function(inner)),
            move |value: Either<X, B>| value.map_right(|inner| reverse_get_function(inner)),
        )
    }

    /// Runs this iso and `other` side by side over a pair.
    #[must_use]
    pub fn split<S1, T1, A1, B1>(
        self,
        other: FunctionIso<S1, T1, A1, B1>,
    ) -> FunctionIso<(S, S1), (T, T1), (A, A1), (B, B1)>
    where
        S1: 'static,
        T1: 'static,
        A1: 'static,
        B1: 'static,
    {
        let get_function = self.get_function;
        let reverse_get_function = self.reverse_get_function;
        let other_get = other.get_function;
        let other_reverse_get = other.reverse_get_function;
        FunctionIso::new(
            move |(source, other_source): (S, S1)| (get_function(source), other_get(other_source)),
            move |(value, other_value): (B, B1)| {
                (reverse_get_function(value), other_reverse_get(other_value))
            },
        )
    }
}

impl<S, T, A, B> Setter<S, T, A, B> for FunctionIso<S, T, A, B> {
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: Fn(A) -> B,
    {
        (self.reverse_get_function)(function((self.get_function)(source)))
    }

    fn set(&self, value: B, _source: S) -> T
    where
        B: Clone,
    {
        (self.reverse_get_function)(value)
    }
}

impl<S, T, A, B> Prism<S, T, A, B> for FunctionIso<S, T, A, B> {
    fn try_get(&self, source: S) -> Either<T, A> {
        Either::Right((self.get_function)(source))
    }

    fn reverse_get(&self, value: B) -> T {
        (self.reverse_get_function)(value)
    }
}

impl<S, T, A, B> Iso<S, T, A, B> for FunctionIso<S, T, A, B> {
    fn get_owned(&self, source: S) -> A {
        (self.get_function)(source)
    }

    fn to_function_iso(self) -> Self
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

impl<S: Clone, T, A, B> Getter<S, A> for FunctionIso<S, T, A, B> {
    fn get(&self, source: &S) -> A {
        (self.get_function)(source.clone())
    }
}

impl<S: Clone, T, A, B> Lens<S, T, A, B> for FunctionIso<S, T, A, B> {}

impl<S, T, A, B> Clone for FunctionIso<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            get_function: Arc::clone(&self.get_function),
            reverse_get_function: Arc::clone(&self.reverse_get_function),
        }
    }
}

impl<S, T, A, B> std::fmt::Debug for FunctionIso<S, T, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionIso").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(
    SimpleIso<String, Vec<char>>: Send, Sync, Clone, Lens<String, String, Vec<char>, Vec<char>>
);

/// Creates an iso from a pair of conversion functions.
///
/// # Syntax
///
/// ```text
/// iso!(get_function, reverse_get_function)
/// ```
///
/// # Example
///
/// ```
/// use optika::iso;
///
/// let swap = iso!(|(a, b): (i32, char)| (b, a), |(b, a): (char, i32)| (a, b));
///
/// assert_eq!(swap.get((1, 'x')), ('x', 1));
/// assert_eq!(swap.reverse_get(('y', 2)), (2, 'y'));
/// ```
#[macro_export]
macro_rules! iso {
    ($get:expr, $reverse_get:expr) => {
        $crate::optics::FunctionIso::new($get, $reverse_get)
    };
}
