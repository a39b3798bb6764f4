//! Composition of optics across kinds.
//!
//! Composing two optics yields the strongest kind both operands can act as.
//! The kinds form a lattice:
//!
//! ```text
//! Iso > Lens > Getter
//! Iso > Lens > Setter
//! Iso > Prism > Setter
//! ```
//!
//! # Composition Rules
//!
//! Rows are the outer (left) optic and columns the inner (right) optic.
//!
//! ```text
//!          | Getter | Setter | Lens   | Prism  | Iso
//! ---------+--------+--------+--------+--------+-------
//! Getter   | Getter |   -    | Getter |   -    | Getter
//! Setter   |   -    | Setter | Setter | Setter | Setter
//! Lens     | Getter | Setter | Lens   | Setter | Lens
//! Prism    |   -    | Setter | Setter | Prism  | Prism
//! Iso      | Getter | Setter | Lens   | Prism  | Iso
//! ```
//!
//! Pairs marked `-` have no common kind and do not implement [`Compose`], so
//! attempting them is a compile error. An Iso on the left of a Getter or Lens
//! needs a cloneable source.
//!
//! The `>>` operator is available on every optic type and forwards to
//! [`Compose::compose`].
//!
//! # Example
//!
//! ```
//! use optika::optics::{Compose, FunctionSetter, Setter};
//! use optika::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Contact { Email(String), Phone(u64) }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, contact: Contact }
//!
//! // Lens then Prism meet at Setter
//! let email: FunctionSetter<User, User, String, String> =
//!     lens!(User, contact).compose(prism!(Contact, Email));
//!
//! let user = User { name: "ada".to_string(), contact: Contact::Email("a@x".to_string()) };
//! let updated = email.modify(user, |address| address.to_uppercase());
//! assert_eq!(updated.contact, Contact::Email("A@X".to_string()));
//! ```

use std::ops::Shr;
use std::sync::Arc;

use super::{FunctionGetter, FunctionIso, FunctionLens, FunctionPrism, FunctionSetter};

/// Composes `self` (the outer optic) with `other` (the inner optic).
pub trait Compose<Rhs> {
    /// The optic kind produced by the composition.
    type Output;

    /// Focuses through `self` and then through `other`.
    fn compose(self, other: Rhs) -> Self::Output;
}

// =============================================================================
// Getter results
// =============================================================================

impl<S, A, C> Compose<FunctionGetter<A, C>> for FunctionGetter<S, A>
where
    S: 'static,
    A: 'static,
    C: 'static,
{
    type Output = FunctionGetter<S, C>;

    fn compose(self, other: FunctionGetter<A, C>) -> Self::Output {
        let outer = self.get_function;
        let inner = other.get_function;
        FunctionGetter::new(move |source: &S| inner(&outer(source)))
    }
}

impl<S, A, U, C, D> Compose<FunctionLens<A, U, C, D>> for FunctionGetter<S, A>
where
    S: 'static,
    A: 'static,
    U: 'static,
    C: 'static,
    D: 'static,
{
    type Output = FunctionGetter<S, C>;

    fn compose(self, other: FunctionLens<A, U, C, D>) -> Self::Output {
        self.compose(other.to_getter())
    }
}

impl<S, A, U, C, D> Compose<FunctionIso<A, U, C, D>> for FunctionGetter<S, A>
where
    S: 'static,
    A: 'static,
    U: 'static,
    C: 'static,
    D: 'static,
{
    type Output = FunctionGetter<S, C>;

    fn compose(self, other: FunctionIso<A, U, C, D>) -> Self::Output {
        let outer = self.get_function;
        let inner = other.get_function;
        FunctionGetter::new(move |source: &S| inner(outer(source)))
    }
}

impl<S, T, A, B, C> Compose<FunctionGetter<A, C>> for FunctionLens<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
{
    type Output = FunctionGetter<S, C>;

    fn compose(self, other: FunctionGetter<A, C>) -> Self::Output {
        self.to_getter().compose(other)
    }
}

impl<S, T, A, B, C> Compose<FunctionGetter<A, C>> for FunctionIso<S, T, A, B>
where
    S: Clone + 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
{
    type Output = FunctionGetter<S, C>;

    fn compose(self, other: FunctionGetter<A, C>) -> Self::Output {
        self.to_getter().compose(other)
    }
}

// =============================================================================
// Setter results
// =============================================================================

impl<S, T, A, B, C, D> Compose<FunctionSetter<A, B, C, D>> for FunctionSetter<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = FunctionSetter<S, T, C, D>;

    fn compose(self, other: FunctionSetter<A, B, C, D>) -> Self::Output {
        let outer = self.modify_function;
        let inner = other.modify_function;
        FunctionSetter::new(move |source: S, function: &dyn Fn(C) -> D| {
            outer(source, &|focus: A| inner(focus, function))
        })
    }
}

/// Implements `Setter >> X` and `X >> Setter` by weakening `X` to a Setter.
macro_rules! impl_compose_through_setter {
    ($($optic:ident),+ $(,)?) => {
        paste::paste! {
            $(
                impl<S, T, A, B, C, D> Compose<[<Function $optic>]<A, B, C, D>>
                    for FunctionSetter<S, T, A, B>
                where
                    S: 'static,
                    T: 'static,
                    A: 'static,
                    B: 'static,
                    C: 'static,
                    D: 'static,
                {
                    type Output = FunctionSetter<S, T, C, D>;

                    fn compose(self, other: [<Function $optic>]<A, B, C, D>) -> Self::Output {
                        self.compose(other.to_setter())
                    }
                }

                impl<S, T, A, B, C, D> Compose<FunctionSetter<A, B, C, D>>
                    for [<Function $optic>]<S, T, A, B>
                where
                    S: 'static,
                    T: 'static,
                    A: 'static,
                    B: 'static,
                    C: 'static,
                    D: 'static,
                {
                    type Output = FunctionSetter<S, T, C, D>;

                    fn compose(self, other: FunctionSetter<A, B, C, D>) -> Self::Output {
                        self.to_setter().compose(other)
                    }
                }
            )+
        }
    };
}

impl_compose_through_setter!(Lens, Prism, Iso);

impl<S, T, A, B, C, D> Compose<FunctionPrism<A, B, C, D>> for FunctionLens<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = FunctionSetter<S, T, C, D>;

    fn compose(self, other: FunctionPrism<A, B, C, D>) -> Self::Output {
        self.to_setter().compose(other.to_setter())
    }
}

impl<S, T, A, B, C, D> Compose<FunctionLens<A, B, C, D>> for FunctionPrism<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = FunctionSetter<S, T, C, D>;

    fn compose(self, other: FunctionLens<A, B, C, D>) -> Self::Output {
        self.to_setter().compose(other.to_setter())
    }
}

// =============================================================================
// Lens results
// =============================================================================

impl<S, T, A, B, C, D> Compose<FunctionLens<A, B, C, D>> for FunctionLens<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = FunctionLens<S, T, C, D>;

    fn compose(self, other: FunctionLens<A, B, C, D>) -> Self::Output {
        let outer_get = self.get_function;
        let outer_set = self.set_function;
        let inner_get = other.get_function;
        let inner_set = other.set_function;
        let getter = Arc::clone(&outer_get);
        FunctionLens::new(
            move |source: &S| inner_get(&getter(source)),
            move |value: D, source: S| {
                let focus = outer_get(&source);
                outer_set(inner_set(value, focus), source)
            },
        )
    }
}

impl<S, T, A, B, C, D> Compose<FunctionIso<A, B, C, D>> for FunctionLens<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = FunctionLens<S, T, C, D>;

    fn compose(self, other: FunctionIso<A, B, C, D>) -> Self::Output {
        let outer_get = self.get_function;
        let outer_set = self.set_function;
        let inner_get = other.get_function;
        let inner_reverse_get = other.reverse_get_function;
        FunctionLens::new(
            move |source: &S| inner_get(outer_get(source)),
            move |value: D, source: S| outer_set(inner_reverse_get(value), source),
        )
    }
}

impl<S, T, A, B, C, D> Compose<FunctionLens<A, B, C, D>> for FunctionIso<S, T, A, B>
where
    S: Clone + 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = FunctionLens<S, T, C, D>;

    fn compose(self, other: FunctionLens<A, B, C, D>) -> Self::Output {
        let outer_get = self.get_function;
        let outer_reverse_get = self.reverse_get_function;
        let inner_get = other.get_function;
        let inner_set = other.set_function;
        let getter = Arc::clone(&outer_get);
        FunctionLens::new(
            move |source: &S| inner_get(&getter(source.clone())),
            move |value: D, source: S| outer_reverse_get(inner_set(value, outer_get(source))),
        )
    }
}

// =============================================================================
// Prism results
// =============================================================================

impl<S, T, A, B, C, D> Compose<FunctionPrism<A, B, C, D>> for FunctionPrism<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = FunctionPrism<S, T, C, D>;

    /// An inner miss is rebuilt through the outer prism, which is what
    /// setting the inner source back into the matched outer case amounts to.
    fn compose(self, other: FunctionPrism<A, B, C, D>) -> Self::Output {
        let outer_try_get = self.try_get_function;
        let outer_reverse_get = self.reverse_get_function;
        let inner_try_get = other.try_get_function;
        let inner_reverse_get = other.reverse_get_function;
        let rebuild = Arc::clone(&outer_reverse_get);
        FunctionPrism::new(
            move |source: S| {
                outer_try_get(source)
                    .flat_map(|focus| inner_try_get(focus).map_left(|unmatched| rebuild(unmatched)))
            },
            move |value: D| outer_reverse_get(inner_reverse_get(value)),
        )
    }
}

impl<S, T, A, B, C, D> Compose<FunctionIso<A, B, C, D>> for FunctionPrism<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = FunctionPrism<S, T, C, D>;

    fn compose(self, other: FunctionIso<A, B, C, D>) -> Self::Output {
        self.compose(other.to_prism())
    }
}

impl<S, T, A, B, C, D> Compose<FunctionPrism<A, B, C, D>> for FunctionIso<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = FunctionPrism<S, T, C, D>;

    fn compose(self, other: FunctionPrism<A, B, C, D>) -> Self::Output {
        self.to_prism().compose(other)
    }
}

// =============================================================================
// Iso results
// =============================================================================

impl<S, T, A, B, C, D> Compose<FunctionIso<A, B, C, D>> for FunctionIso<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = FunctionIso<S, T, C, D>;

    fn compose(self, other: FunctionIso<A, B, C, D>) -> Self::Output {
        let outer_get = self.get_function;
        let outer_reverse_get = self.reverse_get_function;
        let inner_get = other.get_function;
        let inner_reverse_get = other.reverse_get_function;
        FunctionIso::new(
            move |source: S| inner_get(outer_get(source)),
            move |value: D| outer_reverse_get(inner_reverse_get(value)),
        )
    }
}

// =============================================================================
// `>>` operator
// =============================================================================

impl<S, A, Rhs> Shr<Rhs> for FunctionGetter<S, A>
where
    Self: Compose<Rhs>,
{
    type Output = <Self as Compose<Rhs>>::Output;

    fn shr(self, other: Rhs) -> Self::Output {
        self.compose(other)
    }
}

/// Implements `>>` for the four-parameter optic types.
macro_rules! impl_shr_operator {
    ($($optic:ident),+ $(,)?) => {
        paste::paste! {
            $(
                impl<S, T, A, B, Rhs> Shr<Rhs> for [<Function $optic>]<S, T, A, B>
                where
                    Self: Compose<Rhs>,
                {
                    type Output = <Self as Compose<Rhs>>::Output;

                    fn shr(self, other: Rhs) -> Self::Output {
                        self.compose(other)
                    }
                }
            )+
        }
    };
}

impl_shr_operator!(Setter, Lens, Prism, Iso);

static_assertions::assert_not_impl_any!(
    FunctionGetter<i32, i32>: Compose<FunctionSetter<i32, i32, i32, i32>>,
    Compose<FunctionPrism<i32, i32, i32, i32>>
);
static_assertions::assert_not_impl_any!(
    FunctionSetter<i32, i32, i32, i32>: Compose<FunctionGetter<i32, i32>>
);
static_assertions::assert_not_impl_any!(
    FunctionPrism<i32, i32, i32, i32>: Compose<FunctionGetter<i32, i32>>
);
