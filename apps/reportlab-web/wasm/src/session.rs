//! Upload session exposed to the host page
//!
//! All state lives in Rust ([`UploadSession`]); JavaScript only reads
//! file bytes from DOM events and renders the getters. Methods take
//! `&self` over an interior `RefCell` so the async submission can
//! mutate state after its await points; the session's in-flight guard
//! refuses reentrant mutation meanwhile, so borrows stay short and
//! never span an await.

use std::cell::RefCell;

use js_sys::{Object, Reflect, Uint8Array};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;

use reportlab_core::{CandidateFile, SessionError, UploadMode, UploadSession};
use reportlab_types::ExportOutcome;

use crate::net;

/// Processing mode selector, mirrored for JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingMode {
    /// One file per submission, to the single-file endpoint
    Individual,
    /// Many files per submission, to the batch endpoint
    Batch,
}

impl From<ProcessingMode> for UploadMode {
    fn from(mode: ProcessingMode) -> Self {
        match mode {
            ProcessingMode::Individual => UploadMode::Individual,
            ProcessingMode::Batch => UploadMode::Batch,
        }
    }
}

impl From<UploadMode> for ProcessingMode {
    fn from(mode: UploadMode) -> Self {
        match mode {
            UploadMode::Individual => ProcessingMode::Individual,
            UploadMode::Batch => ProcessingMode::Batch,
        }
    }
}

/// Pending file entry for the working-set list in the UI
#[derive(Serialize)]
struct PendingFileInfo {
    name: String,
    size: u64,
}

/// Stateful upload session for the report processor view
#[wasm_bindgen]
pub struct ReportSession {
    inner: RefCell<UploadSession>,
}

#[wasm_bindgen]
impl ReportSession {
    /// Create a session in the given processing mode
    #[wasm_bindgen(constructor)]
    pub fn new(mode: ProcessingMode) -> Self {
        Self {
            inner: RefCell::new(UploadSession::new(mode.into())),
        }
    }

    /// Current processing mode
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> ProcessingMode {
        self.inner.borrow().mode().into()
    }

    /// Switch processing mode. A real switch clears pending files and
    /// results; re-selecting the active mode is a no-op. Returns
    /// whether the mode changed.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&self, mode: ProcessingMode) -> bool {
        self.inner.borrow_mut().set_mode(mode.into())
    }

    /// Admit a single candidate file (file-picker path).
    /// Returns the number of files admitted (0 or 1).
    #[wasm_bindgen(js_name = admitFile)]
    pub fn admit_file(&self, name: &str, bytes: &[u8]) -> usize {
        self.inner
            .borrow_mut()
            .admit(vec![CandidateFile::new(name, bytes.to_vec())])
    }

    /// Admit one drop's worth of candidates as a single intake action
    /// (drag-and-drop path). `entries` is an array of
    /// `{ name: string, data: Uint8Array }` objects. Returns the
    /// number of files admitted; 0 with an error message set when no
    /// candidate qualified.
    #[wasm_bindgen(js_name = admitFiles)]
    pub fn admit_files(&self, entries: js_sys::Array) -> Result<usize, JsValue> {
        let mut candidates = Vec::with_capacity(entries.length() as usize);
        for entry in entries.iter() {
            let name = Reflect::get(&entry, &"name".into())?
                .as_string()
                .ok_or_else(|| JsValue::from_str("File entry is missing a name"))?;
            let data: Uint8Array = Reflect::get(&entry, &"data".into())?.dyn_into()?;
            candidates.push(CandidateFile::new(name, data.to_vec()));
        }
        Ok(self.inner.borrow_mut().admit(candidates))
    }

    /// Remove one pending file by index; out-of-range is a no-op
    #[wasm_bindgen(js_name = removeFile)]
    pub fn remove_file(&self, index: usize) {
        self.inner.borrow_mut().remove(index);
    }

    /// Clear pending files, results and the error in one step
    pub fn clear(&self) {
        self.inner.borrow_mut().clear_state();
    }

    #[wasm_bindgen(js_name = pendingCount)]
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending().len()
    }

    /// Pending files as `[{ name, size }]`
    #[wasm_bindgen(js_name = pendingFiles)]
    pub fn pending_files(&self) -> Result<JsValue, JsValue> {
        let infos: Vec<PendingFileInfo> = self
            .inner
            .borrow()
            .pending()
            .iter()
            .map(|f| PendingFileInfo {
                name: f.name.clone(),
                size: f.size,
            })
            .collect();
        serde_wasm_bindgen::to_value(&infos)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Results of the last submission, in service wire shape
    pub fn results(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.borrow().results())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = resultCount)]
    pub fn result_count(&self) -> usize {
        self.inner.borrow().results().len()
    }

    /// User-facing message for the last error, if any
    #[wasm_bindgen(js_name = errorMessage)]
    pub fn error_message(&self) -> Option<String> {
        self.inner.borrow().last_error().map(ToString::to_string)
    }

    /// True while a submission round trip is outstanding
    #[wasm_bindgen(js_name = isProcessing)]
    pub fn is_processing(&self) -> bool {
        self.inner.borrow().is_in_flight()
    }

    /// Whether the submit trigger should be enabled
    #[wasm_bindgen(js_name = canSubmit)]
    pub fn can_submit(&self) -> bool {
        let session = self.inner.borrow();
        !session.pending().is_empty() && !session.is_in_flight()
    }

    /// Submit the pending files to the extraction service under the
    /// active mode. A no-op when nothing is pending or a submission is
    /// already outstanding. One round trip; no retry.
    pub async fn process(&self, api_base: &str) -> Result<JsValue, JsValue> {
        let started = self.inner.borrow_mut().begin_submission();
        let Some(mode) = started else {
            return self.summary(false);
        };

        let files: Vec<CandidateFile> = self.inner.borrow().pending().to_vec();
        console::log_1(
            &format!("Submitting {} file(s) for extraction", files.len()).into(),
        );

        match mode {
            UploadMode::Individual => {
                let outcome = net::post_single(api_base, &files[0]).await;
                self.inner.borrow_mut().complete_individual(outcome);
            }
            UploadMode::Batch => {
                let outcome = net::post_batch(api_base, &files).await;
                self.inner.borrow_mut().complete_batch(outcome);
            }
        }

        self.summary(true)
    }

    /// Export the last submission's results to persistent storage
    #[wasm_bindgen(js_name = exportResults)]
    pub async fn export_results(&self, api_base: &str) -> Result<JsValue, JsValue> {
        let results = self.inner.borrow().results().to_vec();
        if results.is_empty() {
            return Err(JsValue::from_str("No hay resultados para guardar."));
        }

        let body = serde_json::to_string(&serde_json::json!({ "results": results }))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let (ok, text) =
            net::post_json(&net::endpoint(api_base, "upload-results"), &body).await?;

        // Duplicate-only exports come back as a structured 409 body;
        // surface it like any other outcome
        match serde_json::from_str::<ExportOutcome>(&text) {
            Ok(outcome) => serde_wasm_bindgen::to_value(&outcome)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e))),
            Err(_) if !ok => Err(JsValue::from_str("Error guardando los resultados")),
            Err(e) => Err(JsValue::from_str(&format!("Respuesta inválida: {}", e))),
        }
    }

    /// Build the `{ submitted, resultCount, errorMessage, partial }`
    /// object the host page renders after `process`
    fn summary(&self, submitted: bool) -> Result<JsValue, JsValue> {
        let session = self.inner.borrow();
        let result = Object::new();
        Reflect::set(&result, &"submitted".into(), &submitted.into())?;
        Reflect::set(
            &result,
            &"resultCount".into(),
            &(session.results().len() as u32).into(),
        )?;
        let partial = matches!(
            session.last_error(),
            Some(SessionError::PartialBatch { .. })
        );
        Reflect::set(&result, &"partial".into(), &partial.into())?;
        match session.last_error() {
            Some(err) => {
                Reflect::set(&result, &"errorMessage".into(), &err.to_string().into())?
            }
            None => Reflect::set(&result, &"errorMessage".into(), &JsValue::NULL)?,
        };
        Ok(result.into())
    }
}
