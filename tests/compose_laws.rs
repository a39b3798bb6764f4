//! Property-based tests for the associativity of composition.
//!
//! For every kind, `(a >> b) >> c` and `a >> (b >> c)` must agree on every
//! operation the result supports.

mod common;

use common::{Invertible, affine, invertible};
use optika::Either;
use optika::optics::{
    FunctionPrism, FunctionSetter, Getter, Prism, Setter, SimpleSetter, lens_first, lens_second,
    prism_some,
};
use proptest::prelude::*;

type Nested = (((i64, bool), char), u8);

fn nested_strategy() -> impl Strategy<Value = Nested> {
    (any::<i64>(), any::<bool>(), any::<char>(), any::<u8>())
        .prop_map(|(number, flag, letter, byte)| (((number, flag), letter), byte))
}

fn quarter_prism(bijection: Invertible) -> FunctionPrism<i64, i64, u64, u64> {
    FunctionPrism::new(
        move |source: i64| {
            if source % 4 == 0 {
                Either::Right(bijection.forward(source))
            } else {
                Either::Left(source)
            }
        },
        move |value: u64| bijection.backward(value),
    )
}

fn each<T: 'static>() -> SimpleSetter<Vec<T>, T> {
    FunctionSetter::new(|values: Vec<T>, function: &dyn Fn(T) -> T| {
        values.into_iter().map(function).collect()
    })
}

proptest! {
    /// Lens composition is associative for get and set
    #[test]
    fn prop_lens_associativity(source in nested_strategy(), value in any::<i64>()) {
        let left = (lens_first::<_, _, u8>() >> lens_first::<_, _, char>())
            >> lens_first::<i64, i64, bool>();
        let right = lens_first::<_, _, u8>()
            >> (lens_first::<_, _, char>() >> lens_first::<i64, i64, bool>());

        prop_assert_eq!(left.get(&source), right.get(&source));
        prop_assert_eq!(left.set(value, source), right.set(value, source));
    }

    /// Lens and Iso composition is associative
    #[test]
    fn prop_lens_iso_associativity(
        bijection in invertible(),
        source in nested_strategy(),
        value in any::<u64>()
    ) {
        let outer = || lens_first::<_, _, u8>() >> lens_first::<_, _, char>();
        let inner = || lens_first::<i64, i64, bool>();
        let left = (outer() >> inner()) >> bijection.to_iso();
        let right = outer() >> (inner() >> bijection.to_iso());

        prop_assert_eq!(left.get(&source), right.get(&source));
        prop_assert_eq!(left.set(value, source), right.set(value, source));
    }

    /// Iso composition is associative in both directions
    #[test]
    fn prop_iso_associativity(
        first in invertible(),
        second in invertible(),
        third in invertible(),
        source in any::<i64>(),
        value in any::<u64>()
    ) {
        let left = (first.to_iso() >> second.to_iso().reverse()) >> third.to_iso();
        let right = first.to_iso() >> (second.to_iso().reverse() >> third.to_iso());

        prop_assert_eq!(left.get(source), right.get(source));
        prop_assert_eq!(left.reverse_get(value), right.reverse_get(value));
    }

    /// Prism composition is associative for try_get and reverse_get
    #[test]
    fn prop_prism_associativity(
        bijection in invertible(),
        source in any::<Option<Option<i64>>>(),
        value in any::<u64>()
    ) {
        let outer = prism_some::<Option<i64>, Option<i64>>;
        let middle = prism_some::<i64, i64>;
        let left = (outer() >> middle()) >> quarter_prism(bijection);
        let right = outer() >> (middle() >> quarter_prism(bijection));

        prop_assert_eq!(left.try_get(source), right.try_get(source));
        prop_assert_eq!(left.reverse_get(value), right.reverse_get(value));
    }

    /// Composed prisms still satisfy right identity
    #[test]
    fn prop_composed_prism_right_identity(
        bijection in invertible(),
        source in any::<Option<Option<i64>>>()
    ) {
        let composed = prism_some::<Option<i64>, Option<i64>>()
            >> prism_some::<i64, i64>()
            >> quarter_prism(bijection);
        prop_assert_eq!(composed.modify(source, |value| value), source);
    }

    /// Setter composition is associative for modify
    #[test]
    fn prop_setter_associativity(
        source in prop::collection::vec(
            prop::collection::vec(prop::collection::vec(any::<i64>(), 0..4), 0..4),
            0..4
        ),
        f in affine()
    ) {
        let left = (each::<Vec<Vec<i64>>>() >> each::<Vec<i64>>()) >> each::<i64>();
        let right = each::<Vec<Vec<i64>>>() >> (each::<Vec<i64>>() >> each::<i64>());

        prop_assert_eq!(
            left.modify(source.clone(), |a| f.apply(a)),
            right.modify(source, |a| f.apply(a))
        );
    }

    /// Mixed chains meeting at Setter are associative
    #[test]
    fn prop_mixed_setter_associativity(
        source in prop::collection::vec(any::<(Option<i64>, bool)>(), 0..8),
        f in affine()
    ) {
        let slot = || lens_first::<Option<i64>, Option<i64>, bool>();
        let left = (each::<(Option<i64>, bool)>() >> slot()) >> prism_some::<i64, i64>();
        let right = each::<(Option<i64>, bool)>() >> (slot() >> prism_some::<i64, i64>());

        prop_assert_eq!(
            left.modify(source.clone(), |a| f.apply(a)),
            right.modify(source, |a| f.apply(a))
        );
    }

    /// A pair lens on the second slot composes with the first slot lens
    #[test]
    fn prop_second_then_first(pair in any::<(bool, (i64, char))>(), value in any::<i64>()) {
        let composed =
            lens_second::<bool, (i64, char), (i64, char)>() >> lens_first::<i64, i64, char>();

        prop_assert_eq!(composed.get(&pair), (pair.1).0);
        prop_assert_eq!(composed.set(value, pair), (pair.0, (value, (pair.1).1)));
    }
}
