//! ROC point aggregation and AUC
//!
//! Each submission contributes a single (FPR, TPR) point; the sorted points
//! form a piecewise curve.

use std::cmp::Ordering;

/// One submission's operating point
#[derive(Debug, Clone, PartialEq)]
pub struct RocPoint {
    /// Submission file name the point was computed from
    pub file_name: String,
    /// False positive rate
    pub fpr: f64,
    /// True positive rate
    pub tpr: f64,
}

/// A piecewise ROC curve built from per-submission points
#[derive(Debug, Clone, Default)]
pub struct RocCurve {
    points: Vec<RocPoint>,
}

impl RocCurve {
    /// Build a curve from raw points.
    ///
    /// Points with FPR strictly above the threshold are dropped entirely:
    /// they contribute neither to the AUC nor to any output artifact. The
    /// rest are sorted ascending by FPR; ties keep their incoming order.
    pub fn from_points(points: Vec<RocPoint>, fpr_threshold: f64) -> Self {
        let mut kept: Vec<RocPoint> = points
            .into_iter()
            .filter(|p| p.fpr <= fpr_threshold)
            .collect();
        kept.sort_by(|a, b| a.fpr.partial_cmp(&b.fpr).unwrap_or(Ordering::Equal));
        Self { points: kept }
    }

    /// The filtered, FPR-sorted points
    pub fn points(&self) -> &[RocPoint] {
        &self.points
    }

    /// Number of surviving points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point survived filtering
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Area under the curve by the trapezoidal rule.
    ///
    /// Fewer than two points span no interval, so the area is 0.
    pub fn auc(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].fpr - w[0].fpr) * (w[1].tpr + w[0].tpr) / 2.0)
            .sum()
    }
}
