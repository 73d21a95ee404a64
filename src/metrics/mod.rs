//! Classification metrics for masked binary volumes
//!
//! Comparison is restricted to voxels inside the region-of-interest mask.

use ndarray::ArrayD;

use crate::error::{Error, Result};

/// Confusion matrix for a binary prediction against ground truth
#[derive(Debug, Clone, Default)]
pub struct ConfusionMatrix {
    /// True positives
    pub tp: usize,
    /// True negatives
    pub tn: usize,
    /// False positives
    pub fp: usize,
    /// False negatives
    pub fn_: usize,
}

impl ConfusionMatrix {
    /// Count confusion matrix components over the masked region.
    ///
    /// Only voxels where the mask equals 1 participate. Ground truth and
    /// prediction values are expected to contain 0 or 1 only; counting
    /// thresholds at 0.5. All three volumes must share one shape.
    pub fn from_masked(
        gt: &ArrayD<f64>,
        pred: &ArrayD<f64>,
        mask: &ArrayD<f64>,
    ) -> Result<Self> {
        if pred.shape() != gt.shape() {
            return Err(Error::ShapeMismatch {
                name: "prediction",
                expected: gt.shape().to_vec(),
                found: pred.shape().to_vec(),
            });
        }
        if mask.shape() != gt.shape() {
            return Err(Error::ShapeMismatch {
                name: "mask",
                expected: gt.shape().to_vec(),
                found: mask.shape().to_vec(),
            });
        }

        let mut cm = Self::default();
        for ((&g, &p), &m) in gt.iter().zip(pred.iter()).zip(mask.iter()) {
            if m < 0.5 {
                continue;
            }
            match (g >= 0.5, p >= 0.5) {
                (true, true) => cm.tp += 1,
                (false, false) => cm.tn += 1,
                (false, true) => cm.fp += 1,
                (true, false) => cm.fn_ += 1,
            }
        }

        Ok(cm)
    }

    /// Voxels counted inside the mask
    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }

    /// True positive rate: TP / (TP + FN), 0 when there are no positives
    pub fn tpr(&self) -> f64 {
        let denom = self.tp + self.fn_;
        if denom == 0 {
            return 0.0;
        }
        self.tp as f64 / denom as f64
    }

    /// False positive rate: FP / (FP + TN), 0 when there are no negatives
    pub fn fpr(&self) -> f64 {
        let denom = self.fp + self.tn;
        if denom == 0 {
            return 0.0;
        }
        self.fp as f64 / denom as f64
    }
}
