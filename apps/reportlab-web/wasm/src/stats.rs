//! Statistics reads for the dashboard view
//!
//! Aggregation happens server-side; this module fetches the computed
//! summary and exposes the shared banding/percentage helpers the
//! charts render with.

use wasm_bindgen::prelude::*;

use reportlab_types::{RiskBand, RisksDistribution, StatsSummary};

use crate::net;

/// Build the stats URL with optional date-range filters
fn stats_url(api_base: &str, start_date: Option<&str>, end_date: Option<&str>) -> String {
    let mut url = net::endpoint(api_base, "stats");
    let mut sep = '?';
    if let Some(start) = start_date {
        url.push(sep);
        url.push_str("start_date=");
        url.push_str(start);
        sep = '&';
    }
    if let Some(end) = end_date {
        url.push(sep);
        url.push_str("end_date=");
        url.push_str(end);
    }
    url
}

/// Fetch the aggregate stats summary, optionally bounded by
/// `YYYY-MM-DD` start and end dates
#[wasm_bindgen(js_name = fetchStats)]
pub async fn fetch_stats(
    api_base: &str,
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<JsValue, JsValue> {
    let url = stats_url(api_base, start_date.as_deref(), end_date.as_deref());
    let (ok, body) = net::get_text(&url).await?;
    if !ok {
        return Err(JsValue::from_str("Error obteniendo estadísticas"));
    }

    let stats: StatsSummary = serde_json::from_str(&body)
        .map_err(|e| JsValue::from_str(&format!("Respuesta inválida: {}", e)))?;
    serde_wasm_bindgen::to_value(&stats)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Fetch the most recently stored records
#[wasm_bindgen(js_name = fetchRecentReports)]
pub async fn fetch_recent_reports(api_base: &str, limit: u32) -> Result<JsValue, JsValue> {
    let url = format!("{}?limit={}", net::endpoint(api_base, "reports"), limit);
    let (ok, body) = net::get_text(&url).await?;
    if !ok {
        return Err(JsValue::from_str("Error obteniendo reportes"));
    }

    let reports: Vec<serde_json::Value> = serde_json::from_str(&body)
        .map_err(|e| JsValue::from_str(&format!("Respuesta inválida: {}", e)))?;
    serde_wasm_bindgen::to_value(&reports)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Service liveness probe
#[wasm_bindgen(js_name = checkHealth)]
pub async fn check_health(api_base: &str) -> bool {
    matches!(net::get_text(&net::endpoint(api_base, "health")).await, Ok((true, _)))
}

/// Distribution key ("alto" / "moderado" / "bajo") for a free-text
/// risk classification; same banding the results view uses
#[wasm_bindgen(js_name = riskBandKey)]
pub fn risk_band_key(classification: &str) -> String {
    RiskBand::from_classification(classification).as_key().to_string()
}

/// Percentage shares of a risk distribution, as
/// `{ alto, moderado, bajo }` numbers summing to ~100 (all zero for an
/// empty distribution)
#[wasm_bindgen(js_name = distributionPercents)]
pub fn distribution_percents(alto: u32, moderado: u32, bajo: u32) -> Result<JsValue, JsValue> {
    let dist = RisksDistribution {
        alto,
        moderado,
        bajo,
    };
    let percents = serde_json::json!({
        "alto": dist.percent(RiskBand::High),
        "moderado": dist.percent(RiskBand::Moderate),
        "bajo": dist.percent(RiskBand::Low),
    });
    serde_wasm_bindgen::to_value(&percents)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
