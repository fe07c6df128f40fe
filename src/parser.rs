use crate::config::{FIRST_SURAH, LAST_SURAH, PROGRESS_INTERVAL};
use crate::models::TransliterationSet;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// `INSERT INTO quran_id (...) VALUES (id, suraId, verseID, "ayahText", "indoText", "readText");`
///
/// Only suraId, verseID and readText are captured. The Arabic and translation
/// columns are matched but discarded.
static INSERT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"INSERT INTO quran_id\s*\([^)]+\)\s*VALUES\s*\(\s*\d+\s*,\s*(\d+)\s*,\s*(\d+)\s*,\s*"[^"]*"\s*,\s*"[^"]*"\s*,\s*"([^"]+)"\s*\);"#,
    )
    .unwrap()
});

/// A non-fatal problem with a single line of the dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIssue {
    InvalidSurah { line: u64, surah: u32 },
    InvalidAyah { line: u64, ayah: u32 },
    EmptyText { line: u64, surah: u32, ayah: u32 },
    Unparseable { line: u64, reason: String },
    PatternMismatch { line: u64 },
}

impl ParseIssue {
    pub fn line(&self) -> u64 {
        match self {
            ParseIssue::InvalidSurah { line, .. }
            | ParseIssue::InvalidAyah { line, .. }
            | ParseIssue::EmptyText { line, .. }
            | ParseIssue::Unparseable { line, .. }
            | ParseIssue::PatternMismatch { line } => *line,
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIssue::InvalidSurah { line, surah } => {
                write!(f, "Line {}: Invalid suraId {}", line, surah)
            }
            ParseIssue::InvalidAyah { line, ayah } => {
                write!(f, "Line {}: Invalid verseID {}", line, ayah)
            }
            ParseIssue::EmptyText { line, surah, ayah } => write!(
                f,
                "Line {}: Empty readText for suraId {}, verseID {}",
                line, surah, ayah
            ),
            ParseIssue::Unparseable { line, reason } => {
                write!(f, "Line {}: Error parsing - {}", line, reason)
            }
            ParseIssue::PatternMismatch { line } => {
                write!(f, "Line {}: INSERT statement didn't match pattern", line)
            }
        }
    }
}

/// Everything the parser learned from one dump
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub data: TransliterationSet,
    /// Successful inserts, overwrites included
    pub total_inserted: u64,
    /// In file order
    pub errors: Vec<ParseIssue>,
    pub lines_read: u64,
    /// Blank, comment and schema lines
    pub lines_skipped: u64,
    /// Inserts that replaced an earlier entry for the same (surah, ayah)
    pub duplicates: u64,
}

enum LineResult {
    Skipped,
    Ignored,
    Record { surah: u32, ayah: u32, text: String },
    Issue(ParseIssue),
}

pub fn parse_sql_file(path: &Path) -> Result<ParseOutcome> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open SQL dump: {}", path.display()))?;
    let outcome = parse_sql_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read SQL dump: {}", path.display()))?;

    info!(
        records = outcome.total_inserted,
        surahs = outcome.data.surah_count(),
        issues = outcome.errors.len(),
        duplicates = outcome.duplicates,
        "SQL dump parsed"
    );
    Ok(outcome)
}

/// Streams the dump line by line. Only I/O and encoding errors are fatal;
/// every record-level problem lands in [`ParseOutcome::errors`].
pub fn parse_sql_reader<R: BufRead>(reader: R) -> Result<ParseOutcome> {
    let mut outcome = ParseOutcome::default();
    let pb = ProgressBar::new_spinner();

    for (idx, line) in reader.lines().enumerate() {
        let line_num = idx as u64 + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_num))?;
        outcome.lines_read += 1;

        match classify_line(line_num, &line) {
            LineResult::Skipped => outcome.lines_skipped += 1,
            LineResult::Ignored => {}
            LineResult::Record { surah, ayah, text } => {
                if outcome.data.insert(surah, ayah, text).is_some() {
                    debug!(line = line_num, surah, ayah, "Duplicate ayah overwritten");
                    outcome.duplicates += 1;
                }
                outcome.total_inserted += 1;
            }
            LineResult::Issue(issue) => outcome.errors.push(issue),
        }

        if line_num % PROGRESS_INTERVAL == 0 {
            pb.tick();
        }
    }

    pb.finish_and_clear();
    Ok(outcome)
}

fn classify_line(line_num: u64, raw: &str) -> LineResult {
    let line = raw.trim();
    if line.is_empty() || line.starts_with("CREATE") || line.starts_with("--") {
        return LineResult::Skipped;
    }

    let Some(caps) = INSERT_REGEX.captures(line) else {
        if line.starts_with("INSERT") {
            return LineResult::Issue(ParseIssue::PatternMismatch { line: line_num });
        }
        return LineResult::Ignored;
    };

    let surah = match caps[1].parse::<u32>() {
        Ok(n) => n,
        Err(e) => {
            return LineResult::Issue(ParseIssue::Unparseable {
                line: line_num,
                reason: format!("suraId {:?}: {}", &caps[1], e),
            })
        }
    };
    let ayah = match caps[2].parse::<u32>() {
        Ok(n) => n,
        Err(e) => {
            return LineResult::Issue(ParseIssue::Unparseable {
                line: line_num,
                reason: format!("verseID {:?}: {}", &caps[2], e),
            })
        }
    };

    if !(FIRST_SURAH..=LAST_SURAH).contains(&surah) {
        return LineResult::Issue(ParseIssue::InvalidSurah {
            line: line_num,
            surah,
        });
    }
    if ayah < 1 {
        return LineResult::Issue(ParseIssue::InvalidAyah {
            line: line_num,
            ayah,
        });
    }

    let text = caps[3].trim();
    if text.is_empty() {
        return LineResult::Issue(ParseIssue::EmptyText {
            line: line_num,
            surah,
            ayah,
        });
    }

    LineResult::Record {
        surah,
        ayah,
        text: text.to_string(),
    }
}
