use crate::config::{OUTPUT_SUFFIX, SOURCE_DATASET, SOURCE_VERSION, WRITE_BUFFER_SIZE};
use crate::models::{
    AyahTransliteration, SourceInfo, SurahMetadata, SurahTransliteration, TransliterationSet,
};
use crate::runlog::RunLog;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const UNKNOWN_SURAH_NAME: &str = "Unknown";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub surahs_written: u64,
    pub ayat_written: u64,
}

pub fn surah_file_name(surah: u32) -> String {
    format!("surah_{:03}{}", surah, OUTPUT_SUFFIX)
}

pub fn surah_file_path(output_dir: &Path, surah: u32) -> PathBuf {
    output_dir.join(surah_file_name(surah))
}

/// Builds the output record for one surah with ayat in ascending order.
pub fn build_surah_record(
    surah: u32,
    data: &TransliterationSet,
    metadata: &SurahMetadata,
) -> SurahTransliteration {
    let ayat: Vec<AyahTransliteration> = data
        .sorted_ayat(surah)
        .into_iter()
        .map(|(number, text)| AyahTransliteration {
            number,
            transliteration: text.to_string(),
        })
        .collect();

    let name = metadata
        .get(&surah)
        .map(|info| info.name.clone())
        .unwrap_or_else(|| UNKNOWN_SURAH_NAME.to_string());

    SurahTransliteration {
        number: surah,
        name,
        ayat_count: ayat.len(),
        ayat,
        source: SourceInfo {
            dataset: SOURCE_DATASET.to_string(),
            version: SOURCE_VERSION.to_string(),
        },
    }
}

/// Pretty-printed, two-space indented UTF-8 JSON. Non-ASCII is written as-is.
fn write_record(path: &Path, record: &SurahTransliteration) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);
    serde_json::to_writer_pretty(&mut writer, record)
        .with_context(|| format!("Failed to serialize surah {}", record.number))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {}", path.display()))?;
    Ok(())
}

/// Writes one file per surah present in `data`, in ascending surah order.
pub fn write_surah_files(
    data: &TransliterationSet,
    metadata: &SurahMetadata,
    output_dir: &Path,
    log: &mut RunLog,
) -> Result<WriteSummary> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let mut summary = WriteSummary::default();

    for surah in data.sorted_surahs() {
        let record = build_surah_record(surah, data, metadata);
        let path = surah_file_path(output_dir, surah);
        write_record(&path, &record)?;

        summary.surahs_written += 1;
        summary.ayat_written += record.ayat_count as u64;
        debug!(surah, ayat = record.ayat_count, path = %path.display(), "Surah written");

        if summary.ayat_written % 100 == 0 || surah <= 5 || surah >= 110 {
            log.line(format!(
                "Generated: {} ({} ayat)",
                surah_file_name(surah),
                record.ayat_count
            ));
        }
    }

    Ok(summary)
}
