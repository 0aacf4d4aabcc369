//! Candidate file validation
//!
//! Files are admitted by extension only; content is never inspected
//! client-side. The byte buffer is the opaque content handle that the
//! wasm layer later turns into multipart parts.

/// Extensions the extraction service accepts
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "csv"];

/// A file offered by the user, prior to or after extension validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }

    /// Whether this file's extension is on the allow-list
    pub fn is_allowed(&self) -> bool {
        has_allowed_extension(&self.name)
    }
}

/// Case-insensitive check of the final `.ext` component against the
/// allow-list. Names without an extension never match.
pub fn has_allowed_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_lowercase();
            ALLOWED_EXTENSIONS.iter().any(|allowed| *allowed == ext)
        }
        _ => false,
    }
}

/// Keep only the admissible candidates, preserving arrival order
pub(crate) fn filter_admissible(candidates: Vec<CandidateFile>) -> Vec<CandidateFile> {
    candidates.into_iter().filter(|c| c.is_allowed()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_extensions() {
        assert!(has_allowed_extension("visita.xlsx"));
        assert!(has_allowed_extension("visita.csv"));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(has_allowed_extension("VISITA.XLSX"));
        assert!(has_allowed_extension("sede.Csv"));
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert!(!has_allowed_extension("visita.pdf"));
        assert!(!has_allowed_extension("visita.xls"));
        // .ods appears in legacy help text but was never accepted
        assert!(!has_allowed_extension("visita.ods"));
    }

    #[test]
    fn test_rejects_names_without_extension() {
        assert!(!has_allowed_extension("visita"));
        assert!(!has_allowed_extension(""));
        assert!(!has_allowed_extension(".csv"));
    }

    #[test]
    fn test_only_final_component_counts() {
        assert!(has_allowed_extension("backup.xlsx.csv"));
        assert!(!has_allowed_extension("data.csv.bak"));
    }

    #[test]
    fn test_candidate_size_matches_bytes() {
        let file = CandidateFile::new("a.csv", vec![0u8; 128]);
        assert_eq!(file.size, 128);
        assert!(file.is_allowed());
    }

    #[test]
    fn test_filter_keeps_arrival_order() {
        let files = vec![
            CandidateFile::new("a.csv", vec![]),
            CandidateFile::new("b.pdf", vec![]),
            CandidateFile::new("c.xlsx", vec![]),
        ];
        let kept = filter_admissible(files);
        let names: Vec<&str> = kept.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.csv", "c.xlsx"]);
    }
}
