use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::Score;

pub const DEFAULT_SESSION: &str = "sophie-session.json";

/// Rubric-based grading: import a roster and a rubric, score students 0-3 per
/// question, and export grades out of 20 with competency levels.
#[derive(Parser, Debug)]
#[command(name = "sophie", version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `info` or `sophie=trace`
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Session snapshot file
    #[arg(long, global = true, env = "SOPHIE_SESSION", default_value = DEFAULT_SESSION)]
    pub session: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new session from a roster (header row, student in first column)
    Init {
        /// Roster file (`-` reads stdin)
        #[arg(long)]
        roster: PathBuf,

        /// Overwrite an existing session file
        #[arg(long)]
        force: bool,
    },

    /// Replace the roster of an existing session
    Roster {
        #[arg(long)]
        roster: PathBuf,
    },

    /// Show the questions, coefficients and descriptors of a rubric
    Rubric {
        #[arg(long, env = "SOPHIE_RUBRIC")]
        rubric: PathBuf,
    },

    /// Record one score and print the recomputed grade
    Score {
        #[arg(long, env = "SOPHIE_RUBRIC")]
        rubric: PathBuf,

        #[arg(long)]
        student: String,

        #[arg(long)]
        question: String,

        /// Points awarded (0-3)
        #[arg(long, value_parser = parse_score)]
        score: Score,
    },

    /// Clear every score, the grade and the competence of one student
    Reset {
        #[arg(long)]
        student: String,
    },

    /// Grades and competences of every student
    Status,

    /// Grades in roster order, one per line
    Grades {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Competences in roster order, one per line
    Tiers {
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Per-question evaluation report (`;`-separated)
    Export {
        #[arg(long, env = "SOPHIE_RUBRIC")]
        rubric: PathBuf,

        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub fn parse_score(raw: &str) -> Result<Score, String> {
    let value: u8 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid score {raw:?} (expected 0-3)"))?;
    Score::new(value).map_err(|e| e.to_string())
}
