//! Getter optics for read-only access.
//!
//! A Getter is the weakest reading optic: it only knows how to extract a
//! focus `A` from a source `S`. Every [`Lens`](super::Lens) is a Getter, and
//! so is every [`Iso`](super::Iso) whose source can be cloned.
//!
//! # Examples
//!
//! ```
//! use optika::optics::{FunctionGetter, Getter};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Account { owner: String, balance: i64 }
//!
//! let balance = FunctionGetter::new(|account: &Account| account.balance);
//! let in_cents = FunctionGetter::new(|amount: &i64| amount * 100);
//!
//! let account = Account { owner: "alice".to_string(), balance: 12 };
//! assert_eq!(balance.get(&account), 12);
//!
//! // Composition through the `>>` operator
//! let balance_in_cents = balance >> in_cents;
//! assert_eq!(balance_in_cents.get(&account), 1200);
//! ```

use std::sync::Arc;

use crate::Either;

/// Read-only capability: extract a focus from a source.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focus type
pub trait Getter<S, A> {
    /// Extracts the focus from the source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// The focused value
    fn get(&self, source: &S) -> A;

    /// Converts any Getter implementation into a [`FunctionGetter`].
    ///
    /// This lets user-defined getters take part in composition.
    fn to_function_getter(self) -> FunctionGetter<S, A>
    where
        Self: Sized + Send + Sync + 'static,
        S: 'static,
        A: 'static,
    {
        FunctionGetter::new(move |source: &S| self.get(source))
    }
}

/// A Getter backed by a single function `&S -> A`.
///
/// # Example
///
/// ```
/// use optika::optics::{FunctionGetter, Getter};
///
/// let length = FunctionGetter::new(|text: &String| text.len());
/// assert_eq!(length.get(&"hello".to_string()), 5);
/// ```
pub struct FunctionGetter<S, A> {
    pub(crate) get_function: Arc<dyn Fn(&S) -> A + Send + Sync>,
}

impl<S, A> FunctionGetter<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new `FunctionGetter` from a getter function.
    ///
    /// # Arguments
    ///
    /// * `get_function` - A function that extracts the focus from the source
    #[must_use]
    pub fn new<G>(get_function: G) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
    {
        Self {
            get_function: Arc::new(get_function),
        }
    }

    /// Lifts this getter to act on the first slot of a pair.
    ///
    /// The second slot is cloned through unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::optics::{FunctionGetter, Getter};
    ///
    /// let length = FunctionGetter::new(|text: &String| text.len());
    /// let paired = length.first::<char>();
    /// assert_eq!(paired.get(&("four".to_string(), 'x')), (4, 'x'));
    /// ```
    #[must_use]
    pub fn first<X>(self) -> FunctionGetter<(S, X), (A, X)>
    where
        X: Clone + 'static,
    {
        let get_function = self.get_function;
        FunctionGetter::new(move |(source, extra): &(S, X)| (get_function(source), extra.clone()))
    }

    /// Lifts this getter to act on the second slot of a pair.
    #[must_use]
    pub fn second<X>(self) -> FunctionGetter<(X, S), (X, A)>
    where
        X: Clone + 'static,
    {
        let get_function = self.get_function;
        FunctionGetter::new(move |(extra, source): &(X, S)| (extra.clone(), get_function(source)))
    }

    /// Lifts this getter to the `Left` case of an [`Either`].
    ///
    /// A `Right` source is cloned through unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::Either;
    /// use optika::optics::{FunctionGetter, Getter};
    ///
    /// let doubled = FunctionGetter::new(|n: &i32| n * 2).left::<String>();
    /// assert_eq!(doubled.get(&Either::Left(21)), Either::Left(42));
    /// assert_eq!(
    ///     doubled.get(&Either::Right("kept".to_string())),
    ///     Either::Right("kept".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn left<X>(self) -> FunctionGetter<Either<S, X>, Either<A, X>>
    where
        X: Clone + 'static,
    {
        let get_function = self.get_function;
        FunctionGetter::new(move |source: &Either<S, X>| match source {
            Either::Left(inner) => Either::Left(get_function(inner)),
            Either::Right(other) => Either::Right(other.clone()),
        })
    }

    /// Lifts this getter to the `Right` case of an [`Either`].
    #[must_use]
    pub fn right<X>(self) -> FunctionGetter<Either<X, S>, Either<X, A>>
    where
        X: Clone + 'static,
    {
        let get_function = self.get_function;
        FunctionGetter::new(move |source: &Either<X, S>| match source {
            Either::Left(other) => Either::Left(other.clone()),
            Either::Right(inner) => Either::Right(get_function(inner)),
        })
    }

    /// Runs this getter and `other` side by side over a pair of sources.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::optics::{FunctionGetter, Getter};
    ///
    /// let length = FunctionGetter::new(|text: &String| text.len());
    /// let negate = FunctionGetter::new(|n: &i32| -n);
    /// let both = length.split(negate);
    /// assert_eq!(both.get(&("abc".to_string(), 5)), (3, -5));
    /// ```
    #[must_use]
    pub fn split<S1, A1>(self, other: FunctionGetter<S1, A1>) -> FunctionGetter<(S, S1), (A, A1)>
    where
        S1: 'static,
        A1: 'static,
    {
        let get_function = self.get_function;
        let other_function = other.get_function;
        FunctionGetter::new(move |(source, other_source): &(S, S1)| {
            (get_function(source), other_function(other_source))
        })
    }

    /// Combines this getter with `other`, each handling one case of an
    /// [`Either`] source, converging on the same focus type.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::Either;
    /// use optika::optics::{FunctionGetter, Getter};
    ///
    /// let from_number = FunctionGetter::new(|n: &i32| n.to_string());
    /// let from_flag =
    ///     FunctionGetter::new(|flag: &bool| if *flag { "yes" } else { "no" }.to_string());
    /// let describe = from_number.choice(from_flag);
    ///
    /// assert_eq!(describe.get(&Either::Left(7)), "7");
    /// assert_eq!(describe.get(&Either::Right(true)), "yes");
    /// ```
    #[must_use]
    pub fn choice<S1>(self, other: FunctionGetter<S1, A>) -> FunctionGetter<Either<S, S1>, A>
    where
        S1: 'static,
    {
        let get_function = self.get_function;
        let other_function = other.get_function;
        FunctionGetter::new(move |source: &Either<S, S1>| match source {
            Either::Left(inner) => get_function(inner),
            Either::Right(inner) => other_function(inner),
        })
    }
}

impl<S, A> Getter<S, A> for FunctionGetter<S, A> {
    fn get(&self, source: &S) -> A {
        (self.get_function)(source)
    }
}

impl<S, A> Clone for FunctionGetter<S, A> {
    fn clone(&self) -> Self {
        Self {
            get_function: Arc::clone(&self.get_function),
        }
    }
}

impl<S, A> std::fmt::Debug for FunctionGetter<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionGetter")
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(FunctionGetter<String, usize>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[rstest]
    fn test_function_getter_get() {
        let x_getter = FunctionGetter::new(|point: &Point| point.x);
        assert_eq!(x_getter.get(&Point { x: 3, y: 4 }), 3);
    }

    #[rstest]
    fn test_getter_second_keeps_first_slot() {
        let y_getter = FunctionGetter::new(|point: &Point| point.y).second::<&'static str>();
        assert_eq!(y_getter.get(&("label", Point { x: 1, y: 2 })), ("label", 2));
    }

    #[rstest]
    #[case(Either::Left(Point { x: 5, y: 0 }), Either::Left(5))]
    #[case(Either::Right(9), Either::Right(9))]
    fn test_getter_left(#[case] source: Either<Point, i32>, #[case] expected: Either<i32, i32>) {
        let x_getter = FunctionGetter::new(|point: &Point| point.x).left::<i32>();
        assert_eq!(x_getter.get(&source), expected);
    }

    #[rstest]
    #[case(Either::Left(0), Either::Left(0))]
    #[case(Either::Right(Point { x: 0, y: 8 }), Either::Right(8))]
    fn test_getter_right(#[case] source: Either<i32, Point>, #[case] expected: Either<i32, i32>) {
        let y_getter = FunctionGetter::new(|point: &Point| point.y).right::<i32>();
        assert_eq!(y_getter.get(&source), expected);
    }

    #[rstest]
    fn test_user_getter_converts_to_function_getter() {
        struct Norm;

        impl Getter<Point, i32> for Norm {
            fn get(&self, source: &Point) -> i32 {
                source.x.abs() + source.y.abs()
            }
        }

        let norm = Norm.to_function_getter();
        assert_eq!(norm.get(&Point { x: -3, y: 4 }), 7);
    }
}
