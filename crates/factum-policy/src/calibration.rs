//! Threshold calibration against labeled held-out examples.
//!
//! Every candidate threshold runs the full pipeline over every example.
//! An example is predicted supported when all of its claims are supported,
//! so text that decomposes into no claims is predicted supported. The
//! chosen threshold has the highest F1 among candidates meeting the
//! precision floor; on equal F1 the earlier grid point is kept.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use factum_core::config::defaults::{
    CALIBRATION_GRID_END, CALIBRATION_GRID_START, CALIBRATION_GRID_STEP,
};
use factum_core::config::validate_unit_interval;
use factum_core::errors::FactumResult;
use factum_core::models::HeldoutExample;
use factum_observability::calibration_span;

use crate::policy::VerifierPolicy;

/// The default candidate thresholds: 0.05, 0.07, ..., 0.89.
pub fn default_grid() -> Vec<f64> {
    (CALIBRATION_GRID_START..CALIBRATION_GRID_END)
        .step_by(CALIBRATION_GRID_STEP)
        .map(|hundredths| f64::from(hundredths) / 100.0)
        .collect()
}

/// Confusion counts and derived metrics at one candidate threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub threshold: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
    /// False positive rate, `fp / (fp + tn)`.
    pub fpr: f64,
    /// False negative rate, `fn / (fn + tp)`.
    pub fnr: f64,
    pub tp: usize,
    pub fp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
    pub tn: usize,
}

impl GridPoint {
    fn from_counts(threshold: f64, tp: usize, fp: usize, fn_: usize, tn: usize) -> Self {
        let ratio = |num: usize, den: usize| {
            if den == 0 {
                0.0
            } else {
                num as f64 / den as f64
            }
        };
        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            threshold,
            precision,
            recall,
            f1,
            accuracy: ratio(tp + tn, tp + fp + fn_ + tn),
            fpr: ratio(fp, fp + tn),
            fnr: ratio(fn_, fn_ + tp),
            tp,
            fp,
            fn_,
            tn,
        }
    }
}

/// Every evaluated grid point plus the selection outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationReport {
    pub min_precision: f64,
    /// Threshold in force before calibration.
    pub previous_threshold: f64,
    pub points: Vec<GridPoint>,
    /// `None` when no point met the precision floor.
    pub chosen: Option<GridPoint>,
}

impl CalibrationReport {
    /// The threshold calibration settles on.
    pub fn threshold(&self) -> f64 {
        self.chosen
            .map_or(self.previous_threshold, |point| point.threshold)
    }
}

impl VerifierPolicy {
    /// Evaluate every grid point without changing the policy.
    pub fn calibration_report(
        &self,
        heldout: &[HeldoutExample],
        min_precision: f64,
        grid: Option<&[f64]>,
    ) -> FactumResult<CalibrationReport> {
        validate_unit_interval("min_precision", min_precision)?;
        let default;
        let grid = match grid {
            Some(grid) => grid,
            None => {
                default = default_grid();
                &default
            }
        };
        for &candidate in grid {
            validate_unit_interval("calibration grid", candidate)?;
        }
        let _span = calibration_span!(heldout.len(), grid.len()).entered();

        let mut points = Vec::with_capacity(grid.len());
        let mut chosen: Option<GridPoint> = None;
        for &threshold in grid {
            let (mut tp, mut fp, mut fn_, mut tn) = (0, 0, 0, 0);
            for example in heldout {
                let predicted = self.verify(&example.text, Some(threshold))?.all_supported();
                match (predicted, example.supported) {
                    (true, true) => tp += 1,
                    (true, false) => fp += 1,
                    (false, true) => fn_ += 1,
                    (false, false) => tn += 1,
                }
            }
            let point = GridPoint::from_counts(threshold, tp, fp, fn_, tn);
            debug!(
                threshold,
                precision = point.precision,
                recall = point.recall,
                f1 = point.f1,
                "calibration grid point"
            );
            let eligible = !heldout.is_empty() && point.precision >= min_precision;
            if eligible && chosen.map_or(true, |best| point.f1 > best.f1) {
                chosen = Some(point);
            }
            points.push(point);
        }

        Ok(CalibrationReport {
            min_precision,
            previous_threshold: self.config.threshold,
            points,
            chosen,
        })
    }

    /// Pick the best threshold on `heldout` and adopt it. Leaves the
    /// threshold unchanged when no candidate meets `min_precision`.
    /// Returns the threshold now in force.
    pub fn calibrate_threshold(
        &mut self,
        heldout: &[HeldoutExample],
        min_precision: f64,
        grid: Option<&[f64]>,
    ) -> FactumResult<f64> {
        let report = self.calibration_report(heldout, min_precision, grid)?;
        match report.chosen {
            Some(point) => {
                info!(
                    previous = report.previous_threshold,
                    threshold = point.threshold,
                    precision = point.precision,
                    recall = point.recall,
                    f1 = point.f1,
                    "threshold calibrated"
                );
                self.config.threshold = point.threshold;
            }
            None => {
                info!(
                    threshold = report.previous_threshold,
                    min_precision,
                    "no candidate met the precision floor, threshold unchanged"
                );
            }
        }
        Ok(self.config.threshold)
    }
}
