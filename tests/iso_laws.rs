//! Property-based tests for Iso laws.
//!
//! This module verifies that Iso implementations satisfy the required laws:
//!
//! - **GetReverseGet Law**: `iso.reverse_get(iso.get(source)) == source`
//! - **ReverseGetGet Law**: `iso.get(iso.reverse_get(value)) == value`
//!
//! along with the identities that follow from them: modifying with the
//! identity function, reversing twice, and composing.
//!
//! The isos are random bijections between `i64` and `u64` drawn from
//! [`common::invertible`].

mod common;

use common::invertible;
use optika::optics::{Compose, iso_identity, iso_swap};
use proptest::prelude::*;

proptest! {
    /// GetReverseGet Law
    #[test]
    fn prop_get_reverse_get_law(bijection in invertible(), source in any::<i64>()) {
        let iso = bijection.to_iso();
        prop_assert_eq!(iso.reverse_get(iso.get(source)), source);
    }

    /// ReverseGetGet Law
    #[test]
    fn prop_reverse_get_get_law(bijection in invertible(), value in any::<u64>()) {
        let iso = bijection.to_iso();
        prop_assert_eq!(iso.get(iso.reverse_get(value)), value);
    }

    /// Modifying with the identity function changes nothing
    #[test]
    fn prop_identity_modify(bijection in invertible(), source in any::<i64>()) {
        prop_assert_eq!(bijection.to_iso().modify(source, |value| value), source);
    }

    /// Reversing twice gives back the same conversions
    #[test]
    fn prop_double_reverse(
        bijection in invertible(),
        multiplier in any::<u64>(),
        offset in any::<u64>(),
        source in any::<i64>(),
        value in any::<u64>(),
    ) {
        let iso = bijection.to_iso();
        let twice = iso.clone().reverse().reverse();
        prop_assert_eq!(twice.get(source), iso.get(source));
        prop_assert_eq!(twice.reverse_get(value), iso.reverse_get(value));
        let step = |focus: u64| focus.wrapping_mul(multiplier).wrapping_add(offset);
        prop_assert_eq!(twice.modify(source, step), iso.modify(source, step));
    }

    /// The reversed iso satisfies the laws in the other direction
    #[test]
    fn prop_reversed_round_trip(bijection in invertible(), value in any::<u64>()) {
        let reversed = bijection.to_iso().reverse();
        prop_assert_eq!(reversed.reverse_get(reversed.get(value)), value);
    }

    /// Composition: get chains forwards and reverse_get chains backwards
    #[test]
    fn prop_composition(
        outer in invertible(),
        inner in invertible(),
        source in any::<i64>(),
        value in any::<i64>()
    ) {
        let first = outer.to_iso();
        let second = inner.to_iso().reverse();
        let composed = first.clone().compose(second.clone());

        prop_assert_eq!(composed.get(source), second.get(first.get(source)));
        prop_assert_eq!(composed.reverse_get(value), first.reverse_get(second.reverse_get(value)));
        prop_assert_eq!(composed.reverse_get(composed.get(source)), source);
    }

    /// The identity iso is a unit for composition
    #[test]
    fn prop_identity_is_unit(bijection in invertible(), source in any::<i64>()) {
        let iso = bijection.to_iso();
        let left = iso_identity::<i64>() >> iso.clone();
        let right = iso.clone() >> iso_identity::<u64>();

        prop_assert_eq!(left.get(source), iso.get(source));
        prop_assert_eq!(right.get(source), iso.get(source));
    }

    /// Swapping twice is the identity
    #[test]
    fn prop_swap_twice(first in any::<i64>(), second in any::<bool>()) {
        let swap_back = iso_swap::<i64, bool>() >> iso_swap::<bool, i64>();
        prop_assert_eq!(swap_back.get((first, second)), (first, second));
    }
}
