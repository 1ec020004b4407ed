//! Precision-safe decimal types for price math.
//!
//! Uses `rust_decimal` for exact decimal arithmetic so that averages and
//! percentages computed from exchange strings are not subject to binary
//! floating-point rounding.

use crate::error::{CoreError, CoreResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Number of fraction digits used when rendering values in alerts.
pub const DISPLAY_DP: u32 = 2;

/// Parse an exchange decimal string.
///
/// Thousands separators are stripped first ("1,234.56" -> 1234.56).
/// Falls back to scientific notation ("1e-3") when plain parsing fails.
pub fn parse_decimal(raw: &str) -> CoreResult<Decimal> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();

    Decimal::from_str(&cleaned)
        .or_else(|plain_err| Decimal::from_scientific(&cleaned).map_err(|_| plain_err))
        .map_err(|source| CoreError::DecimalParse {
            value: raw.to_string(),
            source,
        })
}

/// Render a decimal with exactly two fraction digits.
///
/// Rounding is done on the nearest `f64` (parsed from the exact decimal
/// text), the way float-based price feeds print, so "2.675" renders as
/// "2.67" because the double is 2.67499... `5` renders as "5.00".
pub fn format_two_dp(value: Decimal) -> String {
    match value.to_string().parse::<f64>() {
        Ok(v) if v.is_finite() => format!("{v:.2}"),
        _ => {
            let mut rounded =
                value.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointNearestEven);
            rounded.rescale(DISPLAY_DP);
            rounded.to_string()
        }
    }
}

/// Price with exact decimal precision.
///
/// Wraps `Decimal` to keep prices apart from percentages in calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Two-fraction-digit rendering used in alert payloads.
    pub fn to_display_string(&self) -> String {
        format_two_dp(self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s).map(Self)
    }
}

impl From<Decimal> for Price {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Signed percentage (e.g. `1` means 1%).
///
/// Used both for the computed deviation and for the alert threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub Decimal);

impl Percent {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const ONE: Self = Self(Decimal::ONE);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    /// Two-fraction-digit rendering used in alert payloads.
    pub fn to_display_string(&self) -> String {
        format_two_dp(self.0)
    }
}

impl Default for Percent {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Percent {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s).map(Self)
    }
}

impl From<Decimal> for Percent {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}
