/// Lowest valid surah number
pub const FIRST_SURAH: u32 = 1;

/// Highest valid surah number
pub const LAST_SURAH: u32 = 114;

/// Ayat in the complete canonical corpus, used for the final checksum
pub const CANONICAL_AYAT_TOTAL: u64 = 6236;

/// Provenance tag written into every output file
pub const SOURCE_DATASET: &str = "quran-indonesia-sql";
pub const SOURCE_VERSION: &str = "1.0";

/// Suffix of per-surah output files (`surah_001.trans.json`)
pub const OUTPUT_SUFFIX: &str = ".trans.json";

pub const LOG_FILE_NAME: &str = "conversion_log.txt";
pub const ERROR_FILE_NAME: &str = "conversion_error.txt";

/// Default input/output locations, relative to the project root
pub const DEFAULT_SQL_PATH: &str = "assets/quran/transliterasi/quran-indonesia.sql";
pub const DEFAULT_METADATA_PATH: &str = "assets/quran/metadata/surah_meta_final.json";
pub const DEFAULT_OUTPUT_DIR: &str = "assets/quran/transliterasi";

/// How many issues of each kind are echoed to the run log before truncating
pub const PARSE_ERROR_PREVIEW: usize = 10;
pub const VALIDATION_WARNING_PREVIEW: usize = 5;
pub const VALIDATION_ERROR_PREVIEW: usize = 10;

/// Progress update interval (tick every N lines)
pub const PROGRESS_INTERVAL: u64 = 1000;

/// Buffer size for output writers
pub const WRITE_BUFFER_SIZE: usize = 64 * 1024;
