use crate::config::{
    CANONICAL_AYAT_TOTAL, DEFAULT_METADATA_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_SQL_PATH,
    ERROR_FILE_NAME, LOG_FILE_NAME, PARSE_ERROR_PREVIEW, VALIDATION_ERROR_PREVIEW,
    VALIDATION_WARNING_PREVIEW,
};
use crate::metadata::load_surah_metadata;
use crate::parser::parse_sql_file;
use crate::runlog::RunLog;
use crate::stats::ConversionStats;
use crate::validate::validate;
use crate::writer::write_surah_files;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Input and output locations for one run
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    pub sql_path: PathBuf,
    pub metadata_path: PathBuf,
    pub output_dir: PathBuf,
}

impl ConversionConfig {
    /// The fixed asset layout under a project root
    pub fn from_root(root: &Path) -> Self {
        Self {
            sql_path: root.join(DEFAULT_SQL_PATH),
            metadata_path: root.join(DEFAULT_METADATA_PATH),
            output_dir: root.join(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.output_dir.join(LOG_FILE_NAME)
    }

    pub fn error_path(&self) -> PathBuf {
        self.output_dir.join(ERROR_FILE_NAME)
    }
}

const RULE_WIDTH: usize = 60;

/// Runs metadata loading, parsing, validation and generation in order, then
/// saves the run log into the output directory.
///
/// Only unreadable or malformed inputs (and write failures) are returned as
/// errors. Record-level problems are reported in the log and generation
/// proceeds with whatever parsed cleanly.
pub fn run_conversion(config: &ConversionConfig, log: &mut RunLog) -> Result<ConversionStats> {
    let start = Instant::now();
    let mut stats = ConversionStats::new();

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    log.line("Converting SQL to transliteration JSON files...");
    log.line(format!("Input: {}", config.sql_path.display()));
    log.line(format!("Output: {}", config.output_dir.display()));
    log.blank();

    log.line("Loading surah metadata...");
    let metadata = load_surah_metadata(&config.metadata_path)?;
    stats.metadata_surahs = metadata.len() as u64;
    log.line(format!("Loaded metadata for {} surahs", metadata.len()));
    log.blank();

    log.line("Parsing SQL file...");
    let outcome = parse_sql_file(&config.sql_path)?;
    stats.record_parse(&outcome);

    if !outcome.errors.is_empty() {
        warn!(count = outcome.errors.len(), "Lines rejected while parsing");
        log.line(format!("Parse warnings/errors: {}", outcome.errors.len()));
        log.preview(&outcome.errors, PARSE_ERROR_PREVIEW);
        log.blank();
    }

    log.line(format!(
        "Parsed {} ayat from {} surahs",
        outcome.total_inserted,
        outcome.data.surah_count()
    ));
    if outcome.duplicates > 0 {
        log.line(format!(
            "Overwrote {} duplicate ayat (last occurrence kept)",
            outcome.duplicates
        ));
    }
    log.blank();

    log.line("Validating data...");
    let report = validate(&outcome.data, &metadata);
    stats.record_validation(&report);

    if !report.warnings.is_empty() {
        log.line(format!("Validation warnings: {}", report.warnings.len()));
        log.preview(&report.warnings, VALIDATION_WARNING_PREVIEW);
        log.blank();
    }

    if report.is_clean() {
        log.line("Validation passed!");
        log.blank();
    } else {
        warn!(
            errors = report.errors.len(),
            "Validation failed, generating anyway"
        );
        log.line(format!("Validation errors: {}", report.errors.len()));
        log.preview(&report.errors, VALIDATION_ERROR_PREVIEW);
        log.blank();
        log.line("Proceeding with generation despite errors...");
        log.blank();
    }

    log.line("Generating JSON files...");
    let summary = write_surah_files(&outcome.data, &metadata, &config.output_dir, log)?;
    stats.record_write(summary);
    log.blank();

    log.line("=".repeat(RULE_WIDTH));
    log.line("Conversion complete!");
    log.line(format!("   - {} surah files generated", stats.surahs_written));
    log.line(format!(
        "   - {} total ayat transliterations",
        stats.ayat_written
    ));
    log.line(format!("   - Expected total ayat: {}", CANONICAL_AYAT_TOTAL));
    log.line(format!(
        "   - Output directory: {}",
        config.output_dir.display()
    ));
    log.blank();

    if stats.checksum_matches() {
        log.line(format!(
            "All {} ayat successfully converted!",
            CANONICAL_AYAT_TOTAL
        ));
    } else {
        log.line(format!(
            "Expected {} ayat, but got {} ({} difference)",
            CANONICAL_AYAT_TOTAL,
            stats.ayat_written,
            stats.ayat_difference()
        ));
    }
    log.line("=".repeat(RULE_WIDTH));

    info!(
        duration_secs = start.elapsed().as_secs_f64(),
        surahs = stats.surahs_written,
        ayat = stats.ayat_written,
        "Conversion complete"
    );

    log.save(&config.log_path())?;
    Ok(stats)
}
