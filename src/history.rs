//! Historical ROC curves
//!
//! Past submissions live in a CSV with `dataset`, `fpr`, `tpr` columns; each
//! dataset becomes one overlay line on the plot.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// One row of the historical CSV
#[derive(Debug, Deserialize)]
pub struct HistoryRecord {
    /// Submission the point belongs to
    pub dataset: String,
    /// False positive rate
    pub fpr: f64,
    /// True positive rate
    pub tpr: f64,
}

/// All points of one historical submission
#[derive(Debug, Clone)]
pub struct HistoryCurve {
    /// Submission name, used as the legend label
    pub dataset: String,
    /// (FPR, TPR) points in file order
    pub points: Vec<(f64, f64)>,
}

/// Load historical curves, grouped by dataset.
///
/// Groups appear in order of first appearance in the file.
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<Vec<HistoryCurve>> {
    let file = File::open(path.as_ref())?;
    let mut reader = csv::Reader::from_reader(file);

    let mut curves: Vec<HistoryCurve> = Vec::new();
    for result in reader.deserialize() {
        let record: HistoryRecord = result?;
        match curves.iter_mut().find(|c| c.dataset == record.dataset) {
            Some(curve) => curve.points.push((record.fpr, record.tpr)),
            None => curves.push(HistoryCurve {
                dataset: record.dataset,
                points: vec![(record.fpr, record.tpr)],
            }),
        }
    }

    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_history_groups_by_dataset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "dataset,fpr,tpr").unwrap();
        writeln!(file, "team_b,0.1,0.4").unwrap();
        writeln!(file, "team_a,0.0,0.0").unwrap();
        writeln!(file, "team_b,0.2,0.7").unwrap();
        writeln!(file, "team_a,0.3,0.9").unwrap();
        drop(file);

        let curves = load_history(&path).unwrap();

        assert_eq!(curves.len(), 2);
        // First appearance wins the group order
        assert_eq!(curves[0].dataset, "team_b");
        assert_eq!(curves[0].points, vec![(0.1, 0.4), (0.2, 0.7)]);
        assert_eq!(curves[1].dataset, "team_a");
        assert_eq!(curves[1].points, vec![(0.0, 0.0), (0.3, 0.9)]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_history(dir.path().join("absent.csv")).is_err());
    }
}
