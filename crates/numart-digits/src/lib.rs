//! Decimal expansions of π, φ and e.
//!
//! Each constant is evaluated as a big integer scaled by `10^(n - 1 + 10)`,
//! ten guard digits absorbing the truncation of every series term:
//! - π: Machin's formula `16·atan(1/5) − 4·atan(1/239)`.
//! - e: `Σ 1/k!`.
//! - φ: `1 + 3·Σ (−1)^k (2k)!(4k+7) / (k!(k+2)!·16^(k+1))`.
//!
//! Digits include the leading integer digit (`3, 1, 4, 1, …`) and are
//! truncated, not rounded. Cost is quadratic in the number of digits.

use core::fmt;
use core::str::FromStr;

use log::debug;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use numart_core::{DigitGrid, Error, Grid};

const GUARD_DIGITS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    Phi,
    E,
}

impl Constant {
    pub fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::Phi => "phi",
            Self::E => "e",
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownConstant(pub String);

impl fmt::Display for UnknownConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown constant '{}', expected pi, phi or e", self.0)
    }
}

impl std::error::Error for UnknownConstant {}

impl FromStr for Constant {
    type Err = UnknownConstant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pi" => Ok(Self::Pi),
            "phi" => Ok(Self::Phi),
            "e" => Ok(Self::E),
            _ => Err(UnknownConstant(s.to_string())),
        }
    }
}

/// First `n` decimal digits of `constant`, integer digit first.
pub fn constant_digits(constant: Constant, n: usize) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    debug!("computing {n} digits of {constant}");
    let one = num_traits::pow(BigUint::from(10u32), n - 1 + GUARD_DIGITS);
    let value = match constant {
        Constant::Pi => pi(&one),
        Constant::Phi => phi(&one),
        Constant::E => e(&one),
    };
    // Every constant here has a single integer digit, so the scaled value
    // prints as exactly `n + GUARD_DIGITS` digits.
    value.to_string().bytes().take(n).map(|b| b - b'0').collect()
}

/// The first `rows * cols` digits of `constant` laid out row-major.
pub fn digit_grid(constant: Constant, rows: usize, cols: usize) -> Result<DigitGrid, Error> {
    if rows == 0 || cols == 0 {
        return Err(Error::EmptyGrid);
    }

    let n = rows.checked_mul(cols).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual: 0,
    })?;
    Grid::from_vec(rows, cols, constant_digits(constant, n))
}

fn atan_inv(x: u64, one: &BigUint) -> BigInt {
    let x2 = x * x;
    let mut term = one.clone() / x;
    let mut sum = BigInt::zero();
    let mut k = 0u64;
    while !term.is_zero() {
        let t = BigInt::from(term.clone() / (2 * k + 1));
        if k % 2 == 0 {
            sum += t;
        } else {
            sum -= t;
        }
        term /= x2;
        k += 1;
    }
    sum
}

fn pi(one: &BigUint) -> BigInt {
    atan_inv(5, one) * 16u32 - atan_inv(239, one) * 4u32
}

fn e(one: &BigUint) -> BigInt {
    let mut sum = one.clone();
    let mut term = one.clone();
    let mut k = 1u64;
    loop {
        term /= k;
        if term.is_zero() {
            break;
        }
        sum += &term;
        k += 1;
    }
    BigInt::from(sum)
}

fn phi(one: &BigUint) -> BigInt {
    // a_k = (2k)! / (k!(k+2)! 16^(k+1)),  a_{k+1} = a_k (2k+1) / (8(k+3))
    let mut a = one.clone() / 32u64;
    let mut sum = BigInt::zero();
    let mut k = 0u64;
    while !a.is_zero() {
        let t = BigInt::from(a.clone() * (4 * k + 7));
        if k % 2 == 0 {
            sum += t;
        } else {
            sum -= t;
        }
        a *= 2 * k + 1;
        a /= 8 * (k + 3);
        k += 1;
    }
    sum * 3u32 + BigInt::from(one.clone())
}
