//! Deviation of the close price from the trailing average.
//!
//! `sdev` is a signed relative offset, not a statistical standard deviation:
//!
//! ```text
//! average = sum(changes) / count(changes)
//! change  = average - close
//! sdev    = change / average * 100
//! ```
//!
//! A close below the average gives a positive `sdev`.

use crate::error::{DetectorResult, DeviationError};
use rust_decimal::Decimal;
use tickwatch_core::{Percent, Price, TickerSnapshot};

/// Result of one deviation calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deviation {
    /// Latest close.
    pub close: Price,
    /// Mean of the change samples.
    pub average: Price,
    /// `average - close`.
    pub change: Price,
    /// `change / average * 100`, sign preserved.
    pub sdev: Percent,
}

impl Deviation {
    /// Compute the deviation for a snapshot.
    ///
    /// Fails on an empty sample list or a zero average instead of
    /// returning a meaningless value.
    pub fn from_snapshot(snapshot: &TickerSnapshot) -> DetectorResult<Self> {
        Self::compute(snapshot.close, &snapshot.changes)
    }

    pub fn compute(close: Price, changes: &[Price]) -> DetectorResult<Self> {
        if changes.is_empty() {
            return Err(DeviationError::EmptyChanges);
        }

        let sum = changes
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.inner()))
            .ok_or(DeviationError::Overflow("sum"))?;

        let average = sum
            .checked_div(Decimal::from(changes.len()))
            .ok_or(DeviationError::Overflow("average"))?;

        if average.is_zero() {
            return Err(DeviationError::ZeroAverage);
        }

        let change = average
            .checked_sub(close.inner())
            .ok_or(DeviationError::Overflow("change"))?;

        let sdev = change
            .checked_div(average)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or(DeviationError::Overflow("sdev"))?;

        Ok(Self {
            close,
            average: Price::new(average),
            change: Price::new(change),
            sdev: Percent::new(sdev),
        })
    }
}
