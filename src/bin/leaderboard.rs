//! Rebuild the README leaderboard from collected result files.
//!
//! Fixed paths, no flags: reads `results/*.txt` and rewrites the section of
//! `README.md` between the leaderboard markers.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use challenge_eval::leaderboard::{update_readme, README_FILE, RESULTS_DIR};

fn main() -> Result<()> {
    FmtSubscriber::builder().with_max_level(Level::INFO).init();

    update_readme(RESULTS_DIR, README_FILE).with_context(|| {
        format!("failed to update {} from {}/", README_FILE, RESULTS_DIR)
    })?;

    Ok(())
}
