//! Lens optics for focusing on a part that is always present.
//!
//! A Lens pairs a getter with a setter. It is both a [`Getter`] and a
//! [`Setter`], and it composes with other lenses to reach deeply nested
//! fields.
//!
//! # Laws
//!
//! Every Lens must satisfy these laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(lens.get(&source), source) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(value, source)) == value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(v2, lens.set(v1, source)) == lens.set(v2, source)
//!    ```
//!
//! 4. **Identity**: `lens.modify(source, |a| a) == source`
//!
//! # Examples
//!
//! ```
//! use optika::optics::Getter;
//! use optika::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(100, point);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```

use std::sync::Arc;

use super::{FunctionGetter, FunctionSetter, Getter, Setter};

/// A Lens: read and write access to a focus that is always present.
///
/// This is the capability union of [`Getter`] and [`Setter`].
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `T`: The modified source type
/// - `A`: The focus type (the field)
/// - `B`: The modified focus type
pub trait Lens<S, T, A, B>: Getter<S, A> + Setter<S, T, A, B> {
    /// Converts any Lens implementation into a [`FunctionLens`].
    ///
    /// The conversion sets through [`Setter::set`], so the replacement
    /// focus must be cloneable.
    fn to_function_lens(self) -> FunctionLens<S, T, A, B>
    where
        Self: Sized + Send + Sync + 'static,
        S: 'static,
        T: 'static,
        A: 'static,
        B: Clone + 'static,
    {
        let lens = Arc::new(self);
        let reader = Arc::clone(&lens);
        FunctionLens::new(
            move |source: &S| reader.get(source),
            move |value: B, source: S| lens.set(value, source),
        )
    }
}

/// A lens implemented using getter and setter functions.
///
/// This is the most common way to create a lens. The `lens!` macro
/// generates a `FunctionLens` internally.
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
/// use optika::optics::{FunctionLens, Getter};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |x: i32, point: Point| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
/// ```
pub struct FunctionLens<S, T, A, B> {
    pub(crate) get_function: Arc<dyn Fn(&S) -> A + Send + Sync>,
    pub(crate) set_function: Arc<dyn Fn(B, S) -> T + Send + Sync>,
}

/// A Lens whose update keeps the source and focus types.
pub type SimpleLens<S, A> = FunctionLens<S, S, A, A>;

impl<S, T, A, B> FunctionLens<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// # Arguments
    ///
    /// * `get_function` - A function that extracts the focus from the source
    /// * `set_function` - A function that builds the modified source from a new focus
    ///   and the old source
    ///
    /// # Example
    ///
    /// ```
    /// use optika::optics::FunctionLens;
    ///
    /// // A polymorphic lens: replacing the first slot changes its type
    /// let first = FunctionLens::new(
    ///     |pair: &(i32, char)| pair.0,
    ///     |value: String, pair: (i32, char)| (value, pair.1),
    /// );
    ///
    /// assert_eq!(first.set("one".to_string(), (1, 'a')), ("one".to_string(), 'a'));
    /// ```
    #[must_use]
    pub fn new<G, St>(get_function: G, set_function: St) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
        St: Fn(B, S) -> T + Send + Sync + 'static,
    {
        Self {
            get_function: Arc::new(get_function),
            set_function: Arc::new(set_function),
        }
    }

    /// Replaces the focus with `value`.
    ///
    /// Unlike [`Setter::set`] this does not require `B: Clone`.
    pub fn set(&self, value: B, source: S) -> T {
        (self.set_function)(value, source)
    }

    /// Modifies the focus by applying a function.
    ///
    /// This is equivalent to getting the current value, applying the function,
    /// and setting the result.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    pub fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        let focus = (self.get_function)(&source);
        (self.set_function)(function(focus), source)
    }

    /// Weakens this lens to a [`FunctionGetter`].
    #[must_use]
    pub fn to_getter(self) -> FunctionGetter<S, A> {
        FunctionGetter {
            get_function: self.get_function,
        }
    }

    /// Weakens this lens to a [`FunctionSetter`].
    ///
    /// The resulting `modify` is `set(f(get(&s)), s)`.
    #[must_use]
    pub fn to_setter(self) -> FunctionSetter<S, T, A, B> {
        let get_function = self.get_function;
        let set_function = self.set_function;
        FunctionSetter::new(move |source: S, function: &dyn Fn(A) -> B| {
            let focus = get_function(&source);
            set_function(function(focus), source)
        })
    }

    /// Lifts this lens to act on the first slot of a pair.
    ///
    /// Setting `(b, x)` replaces the second slot with `x`.
    ///
    /// # Example
    ///
    /// ```
    /// use optika::optics::Getter;
    /// use optika::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let paired = lens!(Point, x).first::<bool>();
    /// let source = (Point { x: 1, y: 2 }, false);
    ///
    /// assert_eq!(paired.get(&source), (1, false));
    /// assert_eq!(paired.set((9, true), source), (Point { x: 9, y: 2 }, true));
    /// ```
    #[must_use]
    pub fn first<X>(self) -> FunctionLens<(S, X), (T, X), (A, X), (B, X)>
    where
        X: Clone + 'static,
    {
        let get_function = self.get_function;
        let set_function = self.set_function;
        FunctionLens::new(
            move |(source, extra): &(S, X)| (get_function(source), extra.clone()),
            move |(value, extra): (B, X), (source, _): (S, X)| (set_function(value, source), extra),
        )
    }

    /// Lifts this lens to act on the second slot of a pair.
    #[must_use]
    pub fn second<X>(self) -> FunctionLens<(X, S), (X, T), (X, A), (X, B)>
    where
        X: Clone + 'static,
    {
        let get_function = self.get_function;
        let set_function = self.set_function;
        FunctionLens::new(
            move |(extra, source): &(X, S)| (extra.clone(), get_function(source)),
            move |(extra, value): (X, B), (_, source): (X, S)| (extra, set_function(value, source)),
        )
    }

    /// Runs this lens and `other` side by side over a pair of sources.
    #[must_use]
    pub fn split<S1, T1, A1, B1>(
        self,
        other: FunctionLens<S1, T1, A1, B1>,
    ) -> FunctionLens<(S, S1), (T, T1), (A, A1), (B, B1)>
    where
        S1: 'static,
        T1: 'static,
        A1: 'static,
        B1: 'static,
    {
        let get_function = self.get_function;
        let set_function = self.set_function;
        let other_get = other.get_function;
        let other_set = other.set_function;
        FunctionLens::new(
            move |(source, other_source): &(S, S1)| {
                (get_function(source), other_get(other_source))
            },
            move |(value, other_value): (B, B1), (source, other_source): (S, S1)| {
                (set_function(value, source), other_set(other_value, other_source))
            },
        )
    }
}

impl<S, T, A, B> Getter<S, A> for FunctionLens<S, T, A, B> {
    fn get(&self, source: &S) -> A {
        (self.get_function)(source)
    }
}

impl<S, T, A, B> Setter<S, T, A, B> for FunctionLens<S, T, A, B> {
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: Fn(A) -> B,
    {
        let focus = (self.get_function)(&source);
        (self.set_function)(function(focus), source)
    }

    fn set(&self, value: B, source: S) -> T
    where
        B: Clone,
    {
        (self.set_function)(value, source)
    }
}

impl<S, T, A, B> Lens<S, T, A, B> for FunctionLens<S, T, A, B> {
    fn to_function_lens(self) -> Self
    where
        Self: Sized + Send + Sync + 'static,
        S: 'static,
        T: 'static,
        A: 'static,
        B: Clone + 'static,
    {
        self
    }
}

impl<S, T, A, B> Clone for FunctionLens<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            get_function: Arc::clone(&self.get_function),
            set_function: Arc::clone(&self.set_function),
        }
    }
}

impl<S, T, A, B> std::fmt::Debug for FunctionLens<S, T, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SimpleLens<(String, u32), String>: Send, Sync, Clone);

/// Creates a lens for a struct field.
///
/// This macro generates a [`SimpleLens`] that focuses on the specified field
/// of the given struct type. The getter clones the field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optika::optics::Getter;
/// use optika::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let y_lens = lens!(Point, y);
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
/// assert_eq!(y_lens.get(&point), 20);
///
/// let updated = x_lens.set(100, point);
/// assert_eq!(updated, Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |value, mut source: $struct_type| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| ::std::clone::Clone::clone(&source.$field),
            |value, mut source: $struct_type<$($generic),+>| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |value, mut source: $struct_type| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_function_lens_get() {
        let x_lens = FunctionLens::new(
            |point: &Point| point.x,
            |x: i32, point: Point| Point { x, ..point },
        );

        let point = Point { x: 10, y: 20 };
        assert_eq!(x_lens.get(&point), 10);
    }

    #[test]
    fn test_function_lens_set() {
        let x_lens = FunctionLens::new(
            |point: &Point| point.x,
            |x: i32, point: Point| Point { x, ..point },
        );

        let updated = x_lens.set(100, Point { x: 10, y: 20 });
        assert_eq!(updated, Point { x: 100, y: 20 });
    }

    #[test]
    fn test_lens_modify() {
        let x_lens = lens!(Point, x);
        let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
        assert_eq!(doubled.x, 20);
    }

    #[test]
    fn test_lens_to_setter_matches_modify() {
        let y_lens = lens!(Point, y);
        let setter = y_lens.clone().to_setter();

        let point = Point { x: 1, y: 2 };
        assert_eq!(
            setter.modify(point.clone(), |y| y + 40),
            y_lens.modify(point, |y| y + 40)
        );
    }

    #[test]
    fn test_lens_to_getter() {
        let getter = lens!(Point, x).to_getter();
        assert_eq!(getter.get(&Point { x: 7, y: 0 }), 7);
    }

    #[test]
    fn test_lens_second() {
        let paired = lens!(Point, y).second::<u8>();
        let source = (3u8, Point { x: 0, y: 0 });
        assert_eq!(paired.get(&source), (3, 0));
        assert_eq!(paired.set((4, 5), source), (4, Point { x: 0, y: 5 }));
    }

    #[test]
    fn test_lens_split() {
        let both = lens!(Point, x).split(lens!(Point, y));
        let source = (Point { x: 1, y: 2 }, Point { x: 3, y: 4 });
        assert_eq!(both.get(&source), (1, 4));

        let updated = both.set((10, 40), source);
        assert_eq!(updated, (Point { x: 10, y: 2 }, Point { x: 3, y: 40 }));
    }

    #[test]
    fn test_polymorphic_lens_changes_focus_type() {
        let first = FunctionLens::new(
            |pair: &(i32, char)| pair.0,
            |value: String, pair: (i32, char)| (value, pair.1),
        );
        assert_eq!(first.modify((7, 'z'), |n| n.to_string()), ("7".to_string(), 'z'));
    }
}
