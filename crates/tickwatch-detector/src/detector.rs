//! Threshold check over a ticker snapshot.

use crate::alert::DeviationAlert;
use crate::deviation::Deviation;
use crate::error::DetectorResult;
use chrono::{DateTime, Utc};
use tickwatch_core::{Percent, TickerSnapshot, TradingPair};
use tracing::{debug, info};

/// Deviation detector.
///
/// Alerts when `sdev > threshold`. The comparison is strict and signed, so
/// with a positive threshold a close above the average never alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviationDetector {
    threshold: Percent,
}

impl DeviationDetector {
    pub fn new(threshold: Percent) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Percent {
        self.threshold
    }

    /// Whether `sdev` is past the threshold.
    #[inline]
    pub fn exceeds(&self, sdev: Percent) -> bool {
        sdev > self.threshold
    }

    /// Check a snapshot, stamping any alert with the current time.
    pub fn check(
        &self,
        pair: &TradingPair,
        snapshot: &TickerSnapshot,
    ) -> DetectorResult<Option<DeviationAlert>> {
        self.check_at(pair, snapshot, Utc::now())
    }

    /// Check a snapshot, stamping any alert with `at`.
    pub fn check_at(
        &self,
        pair: &TradingPair,
        snapshot: &TickerSnapshot,
        at: DateTime<Utc>,
    ) -> DetectorResult<Option<DeviationAlert>> {
        let deviation = Deviation::from_snapshot(snapshot)?;

        debug!(
            %pair,
            close = %deviation.close,
            average = %deviation.average,
            change = %deviation.change,
            sdev = %deviation.sdev,
            threshold = %self.threshold,
            "Deviation computed"
        );

        if !self.exceeds(deviation.sdev) {
            return Ok(None);
        }

        info!(
            %pair,
            sdev = %deviation.sdev,
            threshold = %self.threshold,
            "Deviation above threshold"
        );

        Ok(Some(DeviationAlert::new(pair, &deviation, at)))
    }
}

impl Default for DeviationDetector {
    fn default() -> Self {
        Self::new(Percent::default())
    }
}
