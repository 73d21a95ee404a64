//! Evaluation stats artifact
//!
//! The trailing AUC line is the exact format the leaderboard tool scrapes;
//! changing it breaks score extraction.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::roc::RocCurve;

/// Format the stats report for a finished evaluation run.
///
/// Lists each surviving submission's point in FPR order, then the AUC.
pub fn format_stats(curve: &RocCurve) -> String {
    let mut out = String::from("Submission Results (TPR, FPR):\n");
    for point in curve.points() {
        out.push_str(&format!(
            "{}: TPR={:.4}, FPR={:.4}\n",
            point.file_name, point.tpr, point.fpr
        ));
    }
    out.push_str(&format!("\nArea Under Curve (AUC): {:.4}\n", curve.auc()));
    out
}

/// Write the stats report to a file.
pub fn write_stats<P: AsRef<Path>>(path: P, curve: &RocCurve) -> Result<()> {
    fs::write(path.as_ref(), format_stats(curve))?;
    Ok(())
}
