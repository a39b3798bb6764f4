//! Shared generators for the law tests.
//!
//! The law tests need functions that are guaranteed to be invertible. An
//! affine map with an odd multiplier is a bijection on `u64` (odd numbers are
//! units modulo 2^64), and a bit rotation is a bijection too, so their
//! composition can be generated freely and inverted exactly.

#![allow(dead_code)]

use optika::optics::FunctionIso;
use proptest::prelude::*;

/// A random bijection between `i64` and `u64`.
#[derive(Clone, Copy, Debug)]
pub struct Invertible {
    multiplier: u64,
    offset: u64,
    rotation: u32,
}

impl Invertible {
    /// Maps `i64` into `u64`.
    pub fn forward(self, value: i64) -> u64 {
        value
            .cast_unsigned()
            .wrapping_mul(self.multiplier)
            .wrapping_add(self.offset)
            .rotate_left(self.rotation)
    }

    /// Maps `u64` back into `i64`; the exact inverse of [`Invertible::forward`].
    pub fn backward(self, value: u64) -> i64 {
        value
            .rotate_right(self.rotation)
            .wrapping_sub(self.offset)
            .wrapping_mul(multiplicative_inverse(self.multiplier))
            .cast_signed()
    }

    /// The bijection as an Iso.
    pub fn to_iso(self) -> FunctionIso<i64, i64, u64, u64> {
        FunctionIso::new(
            move |value: i64| self.forward(value),
            move |value: u64| self.backward(value),
        )
    }
}

/// Inverse of an odd number modulo 2^64.
///
/// `odd * odd == 1 (mod 8)`, so the seed is correct to three bits, and each
/// Newton step doubles the number of correct bits.
fn multiplicative_inverse(odd: u64) -> u64 {
    let mut inverse = odd;
    for _ in 0..5 {
        inverse = inverse.wrapping_mul(2u64.wrapping_sub(odd.wrapping_mul(inverse)));
    }
    inverse
}

/// Strategy producing random bijections.
pub fn invertible() -> impl Strategy<Value = Invertible> {
    (any::<u64>(), any::<u64>(), 0u32..64).prop_map(|(multiplier, offset, rotation)| Invertible {
        multiplier: multiplier | 1,
        offset,
        rotation,
    })
}

/// A random affine endomorphism on `i64`, used as the `f` and `g` of the
/// modify laws.
#[derive(Clone, Copy, Debug)]
pub struct Affine {
    multiplier: i64,
    offset: i64,
}

impl Affine {
    pub fn apply(self, value: i64) -> i64 {
        value.wrapping_mul(self.multiplier).wrapping_add(self.offset)
    }
}

/// Strategy producing random affine maps.
pub fn affine() -> impl Strategy<Value = Affine> {
    (any::<i64>(), any::<i64>()).prop_map(|(multiplier, offset)| Affine { multiplier, offset })
}
