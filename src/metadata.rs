use crate::models::{SurahInfo, SurahMetadata};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Raw metadata record. Only the fields the converter needs are declared;
/// everything else in the file is ignored.
#[derive(Deserialize)]
struct RawSurah {
    number: u32,
    #[serde(default)]
    name_id: Option<String>,
    #[serde(default)]
    name_translit: Option<String>,
    #[serde(default)]
    ayat_count: Option<u32>,
}

impl RawSurah {
    fn into_info(self) -> (u32, SurahInfo) {
        let number = self.number;
        let name = [self.name_id, self.name_translit]
            .into_iter()
            .flatten()
            .find(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Surah {}", number));
        let info = SurahInfo {
            name,
            ayat_count: self.ayat_count.unwrap_or(0),
        };
        (number, info)
    }
}

pub fn load_surah_metadata(path: &Path) -> Result<SurahMetadata> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open metadata file: {}", path.display()))?;
    let metadata = read_surah_metadata(BufReader::new(file))
        .with_context(|| format!("Failed to parse metadata file: {}", path.display()))?;

    info!(surahs = metadata.len(), path = %path.display(), "Metadata loaded");
    Ok(metadata)
}

/// Later records with the same number replace earlier ones.
pub fn read_surah_metadata<R: Read>(reader: R) -> Result<SurahMetadata> {
    let records: Vec<RawSurah> =
        serde_json::from_reader(reader).context("Metadata is not a valid surah array")?;

    Ok(records.into_iter().map(RawSurah::into_info).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn read(json: &str) -> SurahMetadata {
        read_surah_metadata(json.as_bytes()).unwrap()
    }

    #[test]
    fn prefers_name_id() {
        let meta = read(
            r#"[{"number": 1, "name_id": "Al-Fatihah", "name_translit": "al-Fātiḥah", "ayat_count": 7}]"#,
        );
        assert_eq!(meta[&1].name, "Al-Fatihah");
        assert_eq!(meta[&1].ayat_count, 7);
    }

    #[test]
    fn falls_back_to_name_translit() {
        let meta = read(r#"[{"number": 2, "name_translit": "al-Baqarah", "ayat_count": 286}]"#);
        assert_eq!(meta[&2].name, "al-Baqarah");
    }

    #[test]
    fn empty_name_counts_as_missing() {
        let meta = read(r#"[{"number": 3, "name_id": "", "name_translit": "Āli ‘Imrān"}]"#);
        assert_eq!(meta[&3].name, "Āli ‘Imrān");
    }

    #[test]
    fn synthesizes_name_when_absent() {
        let meta = read(r#"[{"number": 112, "name_id": null}]"#);
        assert_eq!(meta[&112].name, "Surah 112");
    }

    #[test]
    fn missing_ayat_count_defaults_to_zero() {
        let meta = read(r#"[{"number": 9, "name_id": "At-Taubah"}]"#);
        assert_eq!(meta[&9].ayat_count, 0);
    }

    #[test]
    fn ignores_unknown_fields() {
        let meta = read(
            r#"[{"number": 1, "name_id": "Al-Fatihah", "ayat_count": 7, "revelation": "Makkiyah", "juz": [1]}]"#,
        );
        assert_eq!(meta.len(), 1);
    }

    #[test]
    fn rejects_non_array() {
        assert!(read_surah_metadata(r#"{"number": 1}"#.as_bytes()).is_err());
    }

    #[test]
    fn rejects_record_without_number() {
        assert!(read_surah_metadata(r#"[{"name_id": "Al-Fatihah"}]"#.as_bytes()).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"[{{"number": 1, "name_id": "Al-Fatihah", "ayat_count": 7}}, {{"number": 114, "name_id": "An-Nas", "ayat_count": 6}}]"#
        )
        .unwrap();
        tmp.flush().unwrap();

        let meta = load_surah_metadata(tmp.path()).unwrap();
        assert_eq!(meta.len(), 2);
        assert_eq!(meta[&114].ayat_count, 6);
    }

    #[test]
    fn load_missing_file_fails_with_path() {
        let err = load_surah_metadata(Path::new("/nonexistent/surah_meta.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/surah_meta.json"));
    }
}
