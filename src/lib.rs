//! quran-translit: Quran transliteration SQL dump to per-surah JSON converter
//!
//! A single-pass batch pipeline that turns a dump of `INSERT INTO quran_id ...`
//! statements into one JSON file per surah:
//!
//! 1. **Metadata** -- Load surah names and expected ayah counts from a JSON array
//! 2. **Parsing** -- Stream the SQL dump line by line, extract (surah, ayah,
//!    transliteration) from each insert, and collect per-line problems as data
//! 3. **Validation** -- Cross-check parsed ayat against the metadata: all 114
//!    surahs present, every expected ayah number present, counts match
//! 4. **Generation** -- Write `surah_NNN.trans.json` for every parsed surah with
//!    ayat sorted ascending
//!
//! Record-level problems (malformed lines, out-of-range ids, missing ayat) never
//! abort a run; they are surfaced in the run log and generation proceeds with
//! what parsed cleanly. Unreadable or malformed inputs are fatal.
//!
//! # Key Modules
//!
//! - [`convert`] -- Pipeline orchestration and run summary
//! - [`metadata`] -- Surah metadata loading with name fallbacks
//! - [`parser`] -- Regex-based SQL insert extraction
//! - [`validate`] -- Completeness and count checks
//! - [`writer`] -- Per-surah JSON output
//! - [`models`] -- Core data types (TransliterationSet, SurahTransliteration)
//! - [`runlog`] -- Status line capture and fatal error dump
//! - [`stats`] -- Run counters and the total-ayat checksum
//! - [`config`] -- Constants and default paths
//!
//! # Example Usage
//!
//! ```bash
//! # Convert using the asset layout under the current directory
//! quran-translit
//!
//! # Explicit inputs
//! quran-translit --sql dump.sql --metadata surah_meta.json -o out/ -v
//! ```

pub mod config;
pub mod convert;
pub mod metadata;
pub mod models;
pub mod parser;
pub mod runlog;
pub mod stats;
pub mod validate;
pub mod writer;
