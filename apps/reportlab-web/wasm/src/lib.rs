//! WASM bindings for the Reportlab upload dashboard
//!
//! This crate provides a stateful, session-based API for uploading
//! spreadsheet compliance reports to the extraction service. All state
//! is held in Rust; JavaScript handles DOM events and file I/O.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { ReportSession, ProcessingMode } from './pkg/reportlab_wasm.js';
//!
//! await init();
//!
//! // Individual mode
//! const session = new ReportSession(ProcessingMode.Individual);
//! session.admitFile(file.name, bytes);
//! const outcome = await session.process(API_BASE);
//! renderResults(session.results());
//!
//! // Batch mode: switching clears pending files and results
//! session.setMode(ProcessingMode.Batch);
//! session.admitFiles([{ name: "a.csv", data: bytesA }, { name: "b.xlsx", data: bytesB }]);
//! await session.process(API_BASE);
//! await session.exportResults(API_BASE);
//! ```

pub mod auth;
pub mod net;
pub mod session;
pub mod stats;

use wasm_bindgen::prelude::*;

// Re-export main types for JavaScript
pub use auth::{begin_session, end_session, has_active_session};
pub use session::{ProcessingMode, ReportSession};
pub use stats::{check_health, fetch_recent_reports, fetch_stats};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Accept-attribute value for the file picker, derived from the same
/// allow-list the validator enforces
#[wasm_bindgen]
pub fn accept_attribute() -> String {
    reportlab_core::ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

/// Format bytes as human-readable string
#[wasm_bindgen]
pub fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn test_accept_attribute_matches_allow_list() {
        assert_eq!(accept_attribute(), ".xlsx,.csv");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1048576), "1.00 MB");
        assert_eq!(format_bytes(2621440), "2.50 MB");
    }
}
