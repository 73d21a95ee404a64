//! # Segmentation Challenge Evaluation
//!
//! This library scores binary voxel-mask submissions against a shared
//! ground-truth/mask pair and maintains the challenge leaderboard.
//!
//! ## Modules
//!
//! - `volume` - NIfTI volume loading and submission discovery
//! - `metrics` - Masked confusion matrix, TPR/FPR
//! - `roc` - ROC point aggregation and trapezoidal AUC
//! - `history` - Historical ROC curves from CSV
//! - `plot` - ROC overlay plot rendering
//! - `report` - Evaluation stats artifact
//! - `leaderboard` - README leaderboard updater

pub mod error;
pub mod history;
pub mod leaderboard;
pub mod metrics;
pub mod plot;
pub mod report;
pub mod roc;
pub mod volume;

pub use error::{Error, Result};
pub use history::{load_history, HistoryCurve};
pub use leaderboard::{LeaderboardEntry, ScoreParser};
pub use metrics::ConfusionMatrix;
pub use roc::{RocCurve, RocPoint};
