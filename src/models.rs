use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Display name and expected ayah count for one surah
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurahInfo {
    pub name: String,
    pub ayat_count: u32,
}

/// Surah number to metadata, as loaded from the metadata file
pub type SurahMetadata = FxHashMap<u32, SurahInfo>;

/// Transliterations keyed by surah, then by ayah number.
///
/// Iteration order of the inner maps is unspecified; callers that need
/// ordering go through [`TransliterationSet::sorted_surahs`] and
/// [`TransliterationSet::sorted_ayat`].
#[derive(Debug, Default, Clone)]
pub struct TransliterationSet {
    surahs: FxHashMap<u32, FxHashMap<u32, String>>,
}

impl TransliterationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a transliteration and returns the text it replaced, if any.
    pub fn insert(&mut self, surah: u32, ayah: u32, text: String) -> Option<String> {
        self.surahs.entry(surah).or_default().insert(ayah, text)
    }

    pub fn surah(&self, surah: u32) -> Option<&FxHashMap<u32, String>> {
        self.surahs.get(&surah)
    }

    pub fn contains_surah(&self, surah: u32) -> bool {
        self.surahs.contains_key(&surah)
    }

    pub fn get(&self, surah: u32, ayah: u32) -> Option<&str> {
        self.surahs
            .get(&surah)
            .and_then(|ayat| ayat.get(&ayah))
            .map(String::as_str)
    }

    pub fn surah_count(&self) -> usize {
        self.surahs.len()
    }

    /// Total number of distinct (surah, ayah) pairs
    pub fn ayah_count(&self) -> usize {
        self.surahs.values().map(FxHashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.surahs.is_empty()
    }

    pub fn sorted_surahs(&self) -> Vec<u32> {
        let mut numbers: Vec<u32> = self.surahs.keys().copied().collect();
        numbers.sort_unstable();
        numbers
    }

    /// Ayat of one surah in ascending ayah order
    pub fn sorted_ayat(&self, surah: u32) -> Vec<(u32, &str)> {
        let mut ayat: Vec<(u32, &str)> = self
            .surahs
            .get(&surah)
            .map(|ayat| ayat.iter().map(|(n, t)| (*n, t.as_str())).collect())
            .unwrap_or_default();
        ayat.sort_unstable_by_key(|(n, _)| *n);
        ayat
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyahTransliteration {
    pub number: u32,
    pub transliteration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub dataset: String,
    pub version: String,
}

/// One per-surah output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurahTransliteration {
    pub number: u32,
    pub name: String,
    pub ayat_count: usize,
    pub ayat: Vec<AyahTransliteration>,
    pub source: SourceInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_replaced_text() {
        let mut set = TransliterationSet::new();
        assert_eq!(set.insert(1, 1, "bismillāhi".to_string()), None);
        assert_eq!(
            set.insert(1, 1, "bismi".to_string()),
            Some("bismillāhi".to_string())
        );
        assert_eq!(set.get(1, 1), Some("bismi"));
        assert_eq!(set.ayah_count(), 1);
    }

    #[test]
    fn counts_across_surahs() {
        let mut set = TransliterationSet::new();
        set.insert(1, 1, "a".to_string());
        set.insert(1, 2, "b".to_string());
        set.insert(114, 1, "c".to_string());
        assert_eq!(set.surah_count(), 2);
        assert_eq!(set.ayah_count(), 3);
        assert!(set.contains_surah(114));
        assert!(!set.contains_surah(2));
    }

    #[test]
    fn sorted_views_are_ascending() {
        let mut set = TransliterationSet::new();
        set.insert(3, 10, "j".to_string());
        set.insert(3, 2, "b".to_string());
        set.insert(1, 1, "a".to_string());
        set.insert(3, 1, "a".to_string());

        assert_eq!(set.sorted_surahs(), vec![1, 3]);
        let ayat: Vec<u32> = set.sorted_ayat(3).into_iter().map(|(n, _)| n).collect();
        assert_eq!(ayat, vec![1, 2, 10]);
    }

    #[test]
    fn sorted_ayat_of_unknown_surah_is_empty() {
        let set = TransliterationSet::new();
        assert!(set.sorted_ayat(7).is_empty());
        assert!(set.is_empty());
    }
}
