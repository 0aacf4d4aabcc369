//! Shared wire contracts for the Reportlab dashboard
//!
//! These types mirror the extraction service's JSON payloads exactly
//! (Spanish uppercase column keys included) so the upload view and the
//! statistics view deserialize the same shapes. The risk banding
//! function lives here because both views consume it.

pub mod risk;
pub mod stats;
pub mod types;

pub use risk::RiskBand;
pub use stats::{PersonnelVisits, RisksDistribution, StatsSummary};
pub use types::{BatchFileError, BatchOutcome, ExportOutcome, ReportRecord};
