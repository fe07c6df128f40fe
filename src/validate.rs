use crate::config::{FIRST_SURAH, LAST_SURAH};
use crate::models::{SurahMetadata, TransliterationSet};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Every surah with no ayat at all, consolidated into one entry
    MissingSurahs(Vec<u32>),
    MissingAyah { surah: u32, ayah: u32 },
    CountMismatch {
        surah: u32,
        expected: u32,
        actual: usize,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingSurahs(surahs) => {
                let list = surahs
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Missing surahs: [{}]", list)
            }
            ValidationIssue::MissingAyah { surah, ayah } => {
                write!(f, "Surah {}: Missing ayat {}", surah, ayah)
            }
            ValidationIssue::CountMismatch {
                surah,
                expected,
                actual,
            } => write!(
                f,
                "Surah {}: Expected {} ayat, found {}",
                surah, expected, actual
            ),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn missing_surahs(&self) -> &[u32] {
        self.errors
            .iter()
            .find_map(|e| match e {
                ValidationIssue::MissingSurahs(s) => Some(s.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}

/// Cross-checks parsed ayat against the metadata. Never mutates the data and
/// never fails: problems are returned for the caller to report.
///
/// Surahs that are present but absent from the metadata are not checked.
pub fn validate(data: &TransliterationSet, metadata: &SurahMetadata) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut missing_surahs = Vec::new();

    for surah in FIRST_SURAH..=LAST_SURAH {
        let Some(ayat) = data.surah(surah) else {
            missing_surahs.push(surah);
            continue;
        };
        let Some(info) = metadata.get(&surah) else {
            continue;
        };

        let actual = ayat.len();
        if actual != info.ayat_count as usize {
            report.warnings.push(ValidationIssue::CountMismatch {
                surah,
                expected: info.ayat_count,
                actual,
            });
        }

        if actual > 0 {
            for ayah in 1..=info.ayat_count {
                if !ayat.contains_key(&ayah) {
                    report
                        .errors
                        .push(ValidationIssue::MissingAyah { surah, ayah });
                }
            }
        }
    }

    if !missing_surahs.is_empty() {
        report
            .errors
            .push(ValidationIssue::MissingSurahs(missing_surahs));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SurahInfo;

    fn meta(entries: &[(u32, u32)]) -> SurahMetadata {
        entries
            .iter()
            .map(|&(n, count)| {
                (
                    n,
                    SurahInfo {
                        name: format!("Surah {}", n),
                        ayat_count: count,
                    },
                )
            })
            .collect()
    }

    /// Every surah present with a single ayah, except those listed
    fn full_set_except(skip: &[u32]) -> TransliterationSet {
        let mut set = TransliterationSet::new();
        for surah in FIRST_SURAH..=LAST_SURAH {
            if !skip.contains(&surah) {
                set.insert(surah, 1, "x".to_string());
            }
        }
        set
    }

    #[test]
    fn complete_data_is_clean() {
        let set = full_set_except(&[]);
        let report = validate(&set, &meta(&[(1, 1), (114, 1)]));
        assert!(report.is_clean());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn reports_missing_surah_in_consolidated_error() {
        let set = full_set_except(&[42]);
        let report = validate(&set, &SurahMetadata::default());
        assert_eq!(report.errors, vec![ValidationIssue::MissingSurahs(vec![42])]);
        assert_eq!(report.missing_surahs(), &[42]);
        assert_eq!(report.errors[0].to_string(), "Missing surahs: [42]");
    }

    #[test]
    fn consolidates_several_missing_surahs_last() {
        let mut set = full_set_except(&[2, 42, 114]);
        set.insert(1, 1, "a".to_string());
        let report = validate(&set, &meta(&[(1, 2)]));

        assert_eq!(report.errors.len(), 2);
        assert_eq!(
            report.errors[0],
            ValidationIssue::MissingAyah { surah: 1, ayah: 2 }
        );
        assert_eq!(
            report.errors[1].to_string(),
            "Missing surahs: [2, 42, 114]"
        );
    }

    #[test]
    fn empty_set_lists_every_surah() {
        let report = validate(&TransliterationSet::new(), &meta(&[(1, 7)]));
        assert_eq!(report.missing_surahs().len(), 114);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn missing_last_ayah_yields_warning_and_error() {
        let mut set = full_set_except(&[1]);
        for ayah in 1..=6 {
            set.insert(1, ayah, format!("ayah {}", ayah));
        }
        let report = validate(&set, &meta(&[(1, 7)]));

        assert_eq!(
            report.warnings,
            vec![ValidationIssue::CountMismatch {
                surah: 1,
                expected: 7,
                actual: 6
            }]
        );
        assert_eq!(report.warnings[0].to_string(), "Surah 1: Expected 7 ayat, found 6");
        assert_eq!(
            report.errors,
            vec![ValidationIssue::MissingAyah { surah: 1, ayah: 7 }]
        );
        assert_eq!(report.errors[0].to_string(), "Surah 1: Missing ayat 7");
    }

    #[test]
    fn gap_in_middle_is_reported() {
        let mut set = full_set_except(&[]);
        set.insert(2, 3, "c".to_string());
        set.insert(2, 4, "d".to_string());
        let report = validate(&set, &meta(&[(2, 4)]));

        // ayat 1, 3, 4 present: count 3 vs 4, ayah 2 missing
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(
            report.errors,
            vec![ValidationIssue::MissingAyah { surah: 2, ayah: 2 }]
        );
    }

    #[test]
    fn extra_ayat_only_warn() {
        let mut set = full_set_except(&[]);
        set.insert(3, 2, "b".to_string());
        let report = validate(&set, &meta(&[(3, 1)]));
        assert!(report.is_clean());
        assert_eq!(
            report.warnings,
            vec![ValidationIssue::CountMismatch {
                surah: 3,
                expected: 1,
                actual: 2
            }]
        );
    }

    #[test]
    fn surah_without_metadata_is_not_checked() {
        let mut set = full_set_except(&[]);
        set.insert(5, 9, "i".to_string());
        let report = validate(&set, &meta(&[(1, 1)]));
        assert!(report.is_clean());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn does_not_mutate_input() {
        let set = full_set_except(&[10]);
        let before = set.ayah_count();
        let _ = validate(&set, &meta(&[(1, 3)]));
        assert_eq!(set.ayah_count(), before);
    }
}
