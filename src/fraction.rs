//! Exact measure arithmetic.
//!
//! Note durations and start offsets are fractions of one measure. Keeping
//! them as reduced rationals means the timeline has no accumulated float
//! drift; conversion to `f64` happens once, at the synthesis boundary.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// A non-negative rational, always stored in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    num: u64,
    den: u64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { num: 0, den: 1 };

    /// Build a fraction reduced to lowest terms. `den` must be non-zero;
    /// callers validate divisors before reaching this point.
    pub fn new(num: u64, den: u64) -> Self {
        debug_assert!(den != 0, "fraction denominator must be non-zero");
        let g = gcd(num, den);
        Fraction {
            num: num / g,
            den: den / g,
        }
    }

    pub fn numer(&self) -> u64 {
        self.num
    }

    pub fn denom(&self) -> u64 {
        self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        // Common denominator via lcm keeps intermediates small.
        let g = gcd(self.den, rhs.den);
        let lcm = self.den / g * rhs.den;
        Fraction::new(self.num * (lcm / self.den) + rhs.num * (lcm / rhs.den), lcm)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Fraction) -> Ordering {
        // Cross-multiply in u128 so large denominators cannot overflow.
        let lhs = self.num as u128 * other.den as u128;
        let rhs = other.num as u128 * self.den as u128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a.max(1)
}
