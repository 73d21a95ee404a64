//! Evaluate submission NIfTI files (binary 0/1) against ground truth.
//!
//! One (FPR, TPR) point per submission, restricted to the mask region;
//! points above the FPR threshold are dropped before the curve is formed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use challenge_eval::history::load_history;
use challenge_eval::metrics::ConfusionMatrix;
use challenge_eval::plot::render_roc_plot;
use challenge_eval::report::write_stats;
use challenge_eval::roc::{RocCurve, RocPoint};
use challenge_eval::volume::{list_submissions, load_volume};

#[derive(Parser, Debug)]
#[command(name = "evaluate")]
#[command(about = "Evaluate submission NIfTI files (binary 0/1) vs. ground truth")]
struct EvalArgs {
    /// Path to the NIfTI mask file.
    #[arg(long)]
    mask_file: PathBuf,

    /// Path to the NIfTI ground-truth file (binary 0/1).
    #[arg(long)]
    gt_file: PathBuf,

    /// Folder containing participant NIfTI predictions.
    #[arg(long)]
    submission_folder: PathBuf,

    /// Filename for the saved ROC curve plot.
    #[arg(long, default_value = "roc_curve.png")]
    output_plot: PathBuf,

    /// Filename to save the computed AUC and points.
    #[arg(long, default_value = "results.txt")]
    output_stats: PathBuf,

    /// Submissions with FPR above this threshold are excluded.
    #[arg(long, default_value_t = 0.3)]
    threshold: f64,

    /// Historical curves CSV to overlay on the plot.
    #[arg(long, default_value = "data/2021.csv")]
    history_csv: PathBuf,
}

fn main() -> Result<()> {
    FmtSubscriber::builder().with_max_level(Level::INFO).init();

    let args = EvalArgs::parse();

    let mask = load_volume(&args.mask_file)
        .with_context(|| format!("failed to load mask {}", args.mask_file.display()))?;
    let gt = load_volume(&args.gt_file)
        .with_context(|| format!("failed to load ground truth {}", args.gt_file.display()))?;

    let submissions = list_submissions(&args.submission_folder).with_context(|| {
        format!(
            "failed to list submissions in {}",
            args.submission_folder.display()
        )
    })?;
    info!("Scoring {} submissions", submissions.len());

    let mut points = Vec::new();
    for path in &submissions {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        let pred = load_volume(path)
            .with_context(|| format!("failed to load submission {}", path.display()))?;
        let cm = ConfusionMatrix::from_masked(&gt, &pred, &mask)
            .with_context(|| format!("failed to score submission {}", path.display()))?;

        let (tpr, fpr) = (cm.tpr(), cm.fpr());
        info!("File: {} => TPR={:.3}, FPR={:.3}", file_name, tpr, fpr);
        points.push(RocPoint {
            file_name,
            fpr,
            tpr,
        });
    }

    let total = points.len();
    let curve = RocCurve::from_points(points, args.threshold);
    if curve.len() < total {
        info!(
            "Dropped {} submissions with FPR above {}",
            total - curve.len(),
            args.threshold
        );
    }

    let roc_auc = curve.auc();

    let history = if args.history_csv.exists() {
        load_history(&args.history_csv).with_context(|| {
            format!("failed to load history {}", args.history_csv.display())
        })?
    } else {
        warn!(
            "history file {} not found, plotting the new submission only",
            args.history_csv.display()
        );
        Vec::new()
    };

    render_roc_plot(&args.output_plot, &history, &curve)
        .with_context(|| format!("failed to render plot {}", args.output_plot.display()))?;
    write_stats(&args.output_stats, &curve)
        .with_context(|| format!("failed to write stats {}", args.output_stats.display()))?;

    println!("\nDone! AUC = {:.4}", roc_auc);
    println!("ROC curve saved to {}", args.output_plot.display());
    println!("Results saved to {}", args.output_stats.display());

    Ok(())
}
