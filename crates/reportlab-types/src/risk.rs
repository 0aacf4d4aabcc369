//! Display banding for free-text risk classifications
//!
//! The extraction service returns the classification as free text
//! copied out of the spreadsheet ("RIESGO ALTO", "Bajo", ...). Banding
//! is a case-insensitive substring match, checked in the same order the
//! service buckets its own stats: "alto" wins over "bajo".

use serde::{Deserialize, Serialize};

/// Three-band display classification derived from a risk string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// Band a free-text classification string
    pub fn from_classification(classification: &str) -> Self {
        let lowered = classification.to_lowercase();
        if lowered.contains("alto") {
            RiskBand::High
        } else if lowered.contains("bajo") {
            RiskBand::Low
        } else {
            RiskBand::Moderate
        }
    }

    /// Stats-distribution key for this band ("alto" / "moderado" / "bajo")
    pub fn as_key(&self) -> &'static str {
        match self {
            RiskBand::High => "alto",
            RiskBand::Moderate => "moderado",
            RiskBand::Low => "bajo",
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: banding is total and case-insensitive
        #[test]
        fn banding_ignores_case(s in "[a-zA-Z ]{0,32}") {
            prop_assert_eq!(
                RiskBand::from_classification(&s),
                RiskBand::from_classification(&s.to_uppercase())
            );
        }

        /// Property: any string containing "alto" bands High
        #[test]
        fn alto_substring_bands_high(prefix in "[a-z ]{0,8}", suffix in "[a-z ]{0,8}") {
            let s = format!("{}alto{}", prefix, suffix);
            prop_assert_eq!(RiskBand::from_classification(&s), RiskBand::High);
        }
    }
}
