use crate::config::CANONICAL_AYAT_TOTAL;
use crate::parser::ParseOutcome;
use crate::validate::ValidationReport;
use crate::writer::WriteSummary;

/// Counters collected across one conversion run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionStats {
    pub metadata_surahs: u64,
    pub lines_read: u64,
    pub lines_skipped: u64,
    pub records_parsed: u64,
    pub parse_issues: u64,
    pub duplicates: u64,
    pub surahs_parsed: u64,
    pub validation_errors: u64,
    pub validation_warnings: u64,
    pub surahs_written: u64,
    pub ayat_written: u64,
}

impl ConversionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_parse(&mut self, outcome: &ParseOutcome) {
        self.lines_read = outcome.lines_read;
        self.lines_skipped = outcome.lines_skipped;
        self.records_parsed = outcome.total_inserted;
        self.parse_issues = outcome.errors.len() as u64;
        self.duplicates = outcome.duplicates;
        self.surahs_parsed = outcome.data.surah_count() as u64;
    }

    pub fn record_validation(&mut self, report: &ValidationReport) {
        self.validation_errors = report.errors.len() as u64;
        self.validation_warnings = report.warnings.len() as u64;
    }

    pub fn record_write(&mut self, summary: WriteSummary) {
        self.surahs_written = summary.surahs_written;
        self.ayat_written = summary.ayat_written;
    }

    /// True when the written ayat add up to the complete canonical corpus
    pub fn checksum_matches(&self) -> bool {
        self.ayat_written == CANONICAL_AYAT_TOTAL
    }

    /// Canonical total minus ayat written; negative when more were written
    pub fn ayat_difference(&self) -> i64 {
        CANONICAL_AYAT_TOTAL as i64 - self.ayat_written as i64
    }
}
