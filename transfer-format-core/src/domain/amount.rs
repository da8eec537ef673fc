//! Exact token amounts
//!
//! The formatter is generic over [`Amount`]. Two implementations ship with the
//! crate: [`Wad`], an 18-decimal fixed-point number matching ERC-20 token
//! precision, and `rust_decimal::Decimal`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::result::{Error, Result};

/// Arithmetic the transfer formatter needs from an amount type.
///
/// Implementations must be exact: summing in any order yields the same value.
pub trait Amount: Clone + PartialEq + fmt::Display {
    fn zero() -> Self;

    /// `self + other`, or `None` if the result is not representable
    fn checked_add(&self, other: &Self) -> Option<Self>;

    /// `-self`, or `None` if the result is not representable
    fn checked_neg(&self) -> Option<Self>;

    fn is_negative(&self) -> bool;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Number of fractional digits carried by a [`Wad`]
pub const WAD_DECIMALS: u32 = 18;

const WAD_ONE: i128 = 1_000_000_000_000_000_000;

/// Fixed-point amount with 18 decimals, stored as raw integer units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Wad(i128);

impl Wad {
    pub const ZERO: Wad = Wad(0);

    /// Wrap a raw amount expressed in 10^-18 units
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    /// Amount of `whole` tokens
    pub fn from_whole(whole: i64) -> Self {
        Self(i128::from(whole) * WAD_ONE)
    }

    pub const fn raw(&self) -> i128 {
        self.0
    }

    /// Parse a decimal string such as `"12.5"` or `"-0.001"`.
    ///
    /// More than 18 fractional digits is an error; the value is never rounded.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let decimal = Decimal::from_str_exact(s)
            .map_err(|e| Error::invalid_amount(format!("{}: {}", s, e)))?;
        Self::try_from(decimal)
    }

    /// Convert to a `Decimal`, failing when the value exceeds its precision
    pub fn to_decimal(&self) -> Result<Decimal> {
        Decimal::try_from_i128_with_scale(self.0, WAD_DECIMALS)
            .map(|d| d.normalize())
            .map_err(|e| Error::invalid_amount(format!("{}: {}", self, e)))
    }
}

impl TryFrom<Decimal> for Wad {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        let scale = value.scale();
        if scale > WAD_DECIMALS {
            return Err(Error::invalid_amount(format!(
                "{} has more than {} decimal places",
                value, WAD_DECIMALS
            )));
        }

        10i128
            .checked_pow(WAD_DECIMALS - scale)
            .and_then(|factor| value.mantissa().checked_mul(factor))
            .map(Wad)
            .ok_or_else(|| Error::invalid_amount(format!("{} is out of range", value)))
    }
}

impl Amount for Wad {
    fn zero() -> Self {
        Wad::ZERO
    }

    fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Wad)
    }

    fn checked_neg(&self) -> Option<Self> {
        self.0.checked_neg().map(Wad)
    }

    fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Wad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let one = WAD_ONE.unsigned_abs();
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            magnitude / one,
            magnitude % one,
            width = WAD_DECIMALS as usize
        )
    }
}

impl FromStr for Wad {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Wad {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Wad {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Amount for Decimal {
    fn zero() -> Self {
        Decimal::ZERO
    }

    fn checked_add(&self, other: &Self) -> Option<Self> {
        Decimal::checked_add(*self, *other)
    }

    fn checked_neg(&self) -> Option<Self> {
        Some(-*self)
    }

    fn is_negative(&self) -> bool {
        self.is_sign_negative() && !Decimal::is_zero(self)
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}
