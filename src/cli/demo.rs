//! Demo target exposed by the `fuego` binary

use crate::domain::{Record, Target};

/// A record whose members honour an injectable offset.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MyMath {
    pub offset: f64,
}

impl MyMath {
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b + self.offset
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b - self.offset
    }
}

/// Two's complement addition; wraps on overflow.
pub fn add_int(a: isize, b: isize) -> isize {
    a.wrapping_add(b)
}

pub fn subtract_int(a: isize, b: isize) -> isize {
    a.wrapping_sub(b)
}

const EXP_MASK: u64 = 0x7ff << 52;

/// Split `x` into a fraction in `[0.5, 1)` and a power of two: `x = frac * 2^exp`.
///
/// Zero, infinities and NaN come back unchanged with exponent 0.
pub fn frexp(x: f64) -> (f64, isize) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }
    // subnormals have no implicit leading bit, lift them into the normal range
    let (x, shift) = if x.is_subnormal() {
        (x * 2f64.powi(54), -54)
    } else {
        (x, 0)
    };
    let bits = x.to_bits();
    let biased = ((bits & EXP_MASK) >> 52) as isize;
    let frac = f64::from_bits((bits & !EXP_MASK) | (1022 << 52));
    (frac, biased - 1022 + shift)
}

pub fn my_math(offset: f64) -> Record<MyMath> {
    Record::builder("MyMath", MyMath { offset })
        .field("Offset", |m: &mut MyMath| &mut m.offset)
        .method("Add", MyMath::add)
        .method("Subtract", MyMath::subtract)
        .build()
}

/// `AddInt`, `SubtractInt`, `Frexp` and a `MyMath` record, in that order.
pub fn demo_target() -> Target {
    Target::collection([
        Target::callable("AddInt", add_int),
        Target::callable("SubtractInt", subtract_int),
        Target::callable("Frexp", frexp),
        my_math(0.0).into(),
    ])
}
