//! Aggregate statistics response shapes
//!
//! The stats endpoint computes everything server-side; the client only
//! does percentage-of-total arithmetic for the distribution chart.

use serde::{Deserialize, Serialize};

use crate::risk::RiskBand;

/// Counts per risk band as reported by the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RisksDistribution {
    pub alto: u32,
    pub moderado: u32,
    pub bajo: u32,
}

impl RisksDistribution {
    pub fn total(&self) -> u32 {
        self.alto + self.moderado + self.bajo
    }

    pub fn count(&self, band: RiskBand) -> u32 {
        match band {
            RiskBand::High => self.alto,
            RiskBand::Moderate => self.moderado,
            RiskBand::Low => self.bajo,
        }
    }

    /// Share of the total for one band, in percent. Empty totals are 0.
    pub fn percent(&self, band: RiskBand) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            f64::from(self.count(band)) * 100.0 / f64::from(total)
        }
    }
}

/// Visit count for one responsible staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelVisits {
    pub nombre: String,
    pub cantidad: u32,
}

/// Full response of the stats endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_visits: u32,
    pub sedes_count: u32,
    pub risks_detected: u32,
    #[serde(default)]
    pub visits_this_month: u32,
    #[serde(default)]
    pub risks_distribution: RisksDistribution,
    #[serde(default)]
    pub visits_by_personnel: Vec<PersonnelVisits>,
    #[serde(default)]
    pub recent_reports: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserializes_stats_payload() {
        let payload = r#"{
            "total_visits": 42,
            "sedes_count": 5,
            "risks_detected": 26,
            "visits_this_month": 7,
            "risks_distribution": {"alto": 11, "moderado": 15, "bajo": 16},
            "visits_by_personnel": [{"nombre": "Carla Ruiz", "cantidad": 12}],
            "recent_reports": []
        }"#;
        let stats: StatsSummary = serde_json::from_str(payload).unwrap();
        assert_eq!(stats.total_visits, 42);
        assert_eq!(stats.risks_distribution.alto, 11);
        assert_eq!(stats.visits_by_personnel[0].cantidad, 12);
    }

    #[test]
    fn test_empty_stats_payload_uses_defaults() {
        let payload = r#"{"total_visits": 0, "sedes_count": 0, "risks_detected": 0}"#;
        let stats: StatsSummary = serde_json::from_str(payload).unwrap();
        assert_eq!(stats.risks_distribution.total(), 0);
        assert!(stats.visits_by_personnel.is_empty());
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let dist = RisksDistribution {
            alto: 11,
            moderado: 15,
            bajo: 16,
        };
        let sum = dist.percent(RiskBand::High)
            + dist.percent(RiskBand::Moderate)
            + dist.percent(RiskBand::Low);
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_of_empty_distribution_is_zero() {
        let dist = RisksDistribution::default();
        assert_eq!(dist.percent(RiskBand::High), 0.0);
    }
}
