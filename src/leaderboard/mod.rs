//! README leaderboard updater
//!
//! Scrapes AUC scores out of result text files and rewrites the
//! marker-delimited leaderboard section of the challenge README.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{error, info, warn};

use crate::error::Result;

/// Directory the evaluation results are collected in
pub const RESULTS_DIR: &str = "results";
/// Document carrying the leaderboard section
pub const README_FILE: &str = "README.md";
/// Line opening the leaderboard section
pub const START_MARKER: &str = "<!-- START_LEADERBOARD -->";
/// Line closing the leaderboard section
pub const END_MARKER: &str = "<!-- END_LEADERBOARD -->";

/// One ranked participant
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// Participant name, derived from the result file name
    pub username: String,
    /// AUC score scraped from the result file
    pub score: f64,
}

/// Extracts AUC scores from result file text
pub struct ScoreParser {
    pattern: Regex,
}

impl ScoreParser {
    /// Compile the fixed extraction pattern.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"Area Under Curve \(AUC\):\s*([\d.]+)")
                .expect("score pattern is valid"),
        }
    }

    /// Extract the score from the last non-empty line of a result file.
    ///
    /// Returns `None` when the line does not match the expected format or
    /// the captured number fails to parse.
    pub fn parse_score(&self, contents: &str) -> Option<f64> {
        let last_line = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .last()?;
        let captures = self.pattern.captures(last_line)?;
        captures.get(1)?.as_str().parse().ok()
    }
}

impl Default for ScoreParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect one entry per parseable `.txt` file in the results directory.
///
/// The username is the file name without its extension. Unreadable files and
/// files without a matching score line are skipped.
pub fn collect_scores<P: AsRef<Path>>(results_dir: P) -> Result<Vec<LeaderboardEntry>> {
    let parser = ScoreParser::new();

    let mut paths: Vec<_> = fs::read_dir(results_dir.as_ref())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    paths.sort();

    let mut entries = Vec::new();
    for path in paths {
        if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            continue;
        }
        let username = match path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!("skipping unreadable result file {}: {}", path.display(), err);
                continue;
            }
        };
        match parser.parse_score(&contents) {
            Some(score) => entries.push(LeaderboardEntry { username, score }),
            None => warn!("no AUC line in {}, skipping", path.display()),
        }
    }

    Ok(entries)
}

/// Render the ranked markdown table, best score first.
///
/// Ties rank alphabetically by username so reruns are deterministic.
pub fn generate_table(entries: &[LeaderboardEntry]) -> String {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.username.cmp(&b.username))
    });

    let mut table = String::from("| Rank | Username | AUC Score |\n");
    table.push_str("|------|----------|-----------|\n");
    for (rank, entry) in sorted.iter().enumerate() {
        table.push_str(&format!(
            "| {} | {} | {:.4} |\n",
            rank + 1,
            entry.username,
            entry.score
        ));
    }
    table
}

/// Splice the table between the marker lines of a document.
///
/// Returns `None` when the start marker, or an end marker after it, is
/// missing. The markers themselves and everything outside them are kept.
pub fn update_document(document: &str, table: &str) -> Option<String> {
    let lines: Vec<&str> = document.lines().collect();
    let start = lines.iter().position(|line| line.contains(START_MARKER))?;
    let end = start
        + 1
        + lines[start + 1..]
            .iter()
            .position(|line| line.contains(END_MARKER))?;

    let mut updated = String::new();
    for line in &lines[..=start] {
        updated.push_str(line);
        updated.push('\n');
    }
    updated.push('\n');
    updated.push_str(table);
    updated.push('\n');
    for line in &lines[end..] {
        updated.push_str(line);
        updated.push('\n');
    }
    if !document.ends_with('\n') {
        updated.pop();
    }

    Some(updated)
}

/// Rebuild the leaderboard section of the README from the results directory.
///
/// A document without both markers is logged and left untouched.
pub fn update_readme<P: AsRef<Path>, Q: AsRef<Path>>(results_dir: P, readme: Q) -> Result<()> {
    let readme = readme.as_ref();

    let entries = collect_scores(results_dir)?;
    let table = generate_table(&entries);

    let document = fs::read_to_string(readme)?;
    match update_document(&document, &table) {
        Some(updated) => {
            fs::write(readme, updated)?;
            info!(
                "updated {} with {} leaderboard entries",
                readme.display(),
                entries.len()
            );
        }
        None => {
            error!(
                "leaderboard markers not found in {}; document left unmodified",
                readme.display()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(username: &str, score: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            username: username.to_string(),
            score,
        }
    }

    #[test]
    fn test_parse_score_from_stats_text() {
        let parser = ScoreParser::new();
        let contents = "Submission Results (TPR, FPR):\n\
                        alice.nii: TPR=0.6000, FPR=0.2000\n\
                        \n\
                        Area Under Curve (AUC): 0.1350\n";

        assert_eq!(parser.parse_score(contents), Some(0.135));
    }

    #[test]
    fn test_parse_score_ignores_trailing_blank_lines() {
        let parser = ScoreParser::new();
        assert_eq!(
            parser.parse_score("Area Under Curve (AUC): 0.9000\n\n\n"),
            Some(0.9)
        );
    }

    #[test]
    fn test_parse_score_rejects_missing_or_garbled_lines() {
        let parser = ScoreParser::new();
        assert_eq!(parser.parse_score(""), None);
        assert_eq!(parser.parse_score("no scores here\n"), None);
        // Pattern only matches on the last non-empty line
        assert_eq!(
            parser.parse_score("Area Under Curve (AUC): 0.9\nsomething else\n"),
            None
        );
        // Captured text that is not a number is a skip, not a crash
        assert_eq!(parser.parse_score("Area Under Curve (AUC): 0.9.1\n"), None);
    }

    #[test]
    fn test_table_ranks_best_score_first() {
        let table = generate_table(&[entry("bob", 0.5), entry("alice", 0.9)]);

        assert_eq!(
            table,
            "| Rank | Username | AUC Score |\n\
             |------|----------|-----------|\n\
             | 1 | alice | 0.9000 |\n\
             | 2 | bob | 0.5000 |\n"
        );
    }

    #[test]
    fn test_table_breaks_ties_alphabetically() {
        let table = generate_table(&[entry("zoe", 0.7), entry("ann", 0.7), entry("max", 0.8)]);
        let rows: Vec<_> = table.lines().skip(2).collect();

        assert_eq!(rows, vec![
            "| 1 | max | 0.8000 |",
            "| 2 | ann | 0.7000 |",
            "| 3 | zoe | 0.7000 |",
        ]);
    }

    #[test]
    fn test_update_document_replaces_section() {
        let document = "# Challenge\n\
                        intro\n\
                        <!-- START_LEADERBOARD -->\n\
                        old table\n\
                        <!-- END_LEADERBOARD -->\n\
                        outro\n";
        let table = generate_table(&[entry("alice", 0.9)]);

        let updated = update_document(document, &table).unwrap();

        assert!(updated.starts_with("# Challenge\nintro\n<!-- START_LEADERBOARD -->\n"));
        assert!(updated.ends_with("<!-- END_LEADERBOARD -->\noutro\n"));
        assert!(updated.contains("| 1 | alice | 0.9000 |"));
        assert!(!updated.contains("old table"));
    }

    #[test]
    fn test_update_document_is_idempotent() {
        let document = "before\n\
                        <!-- START_LEADERBOARD -->\n\
                        <!-- END_LEADERBOARD -->\n\
                        after\n";
        let table = generate_table(&[entry("alice", 0.9), entry("bob", 0.5)]);

        let once = update_document(document, &table).unwrap();
        let twice = update_document(&once, &table).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_document_requires_both_markers() {
        let table = generate_table(&[entry("alice", 0.9)]);

        assert!(update_document("no markers at all\n", &table).is_none());
        assert!(update_document("<!-- START_LEADERBOARD -->\n", &table).is_none());
        assert!(update_document("<!-- END_LEADERBOARD -->\n", &table).is_none());
        // End marker before the start marker does not count
        assert!(update_document(
            "<!-- END_LEADERBOARD -->\n<!-- START_LEADERBOARD -->\n",
            &table
        )
        .is_none());
    }
}
