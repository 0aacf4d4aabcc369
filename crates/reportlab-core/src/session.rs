//! Upload session state machine
//!
//! One `UploadSession` backs the upload view for the lifetime of the
//! browsing session. All mutation funnels through the operations here;
//! nothing writes fields ad hoc, which is what keeps mode, pending
//! files and results consistent with each other.
//!
//! Submission is split into a synchronous begin/complete pair so the
//! reconciliation rules are testable without a network: the caller
//! asks `begin_submission` for the mode to submit under, performs the
//! round trip, and hands the outcome back to the matching `complete_*`
//! method.

use reportlab_types::{BatchOutcome, ReportRecord};

use crate::error::{SessionError, SubmitError};
use crate::intake::{filter_admissible, CandidateFile};

/// Exclusive processing mode. Governs admission cardinality and which
/// service endpoint a submission contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadMode {
    /// One file at a time; a new valid selection replaces the pending one
    Individual,
    /// Unbounded working set; valid selections append
    Batch,
}

/// Session state shared by the upload and results views
#[derive(Debug)]
pub struct UploadSession {
    mode: UploadMode,
    pending: Vec<CandidateFile>,
    results: Vec<ReportRecord>,
    error: Option<SessionError>,
    in_flight: bool,
}

impl UploadSession {
    pub fn new(mode: UploadMode) -> Self {
        Self {
            mode,
            pending: Vec::new(),
            results: Vec::new(),
            error: None,
            in_flight: false,
        }
    }

    pub fn mode(&self) -> UploadMode {
        self.mode
    }

    pub fn pending(&self) -> &[CandidateFile] {
        &self.pending
    }

    pub fn results(&self) -> &[ReportRecord] {
        &self.results
    }

    pub fn last_error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// True while a submission round trip is outstanding. Admission,
    /// mode switches and further submissions are refused meanwhile.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Empty pending files, results and the error slot in one step.
    /// Idempotent; the mode is untouched.
    pub fn clear_state(&mut self) {
        self.pending.clear();
        self.results.clear();
        self.error = None;
    }

    /// Switch processing mode. A real switch clears all pending files
    /// and prior results so no cross-mode data survives; setting the
    /// mode it already holds clears nothing. Returns whether the mode
    /// changed.
    pub fn set_mode(&mut self, new_mode: UploadMode) -> bool {
        if self.in_flight || new_mode == self.mode {
            return false;
        }
        self.mode = new_mode;
        self.clear_state();
        true
    }

    /// Validate and admit one intake action's worth of candidates.
    ///
    /// The action fails as a whole only when no candidate qualifies:
    /// the error slot is set and pending files are untouched. A
    /// partially-valid set is admitted with its invalid members
    /// dropped, without per-file feedback (observed product behavior,
    /// kept deliberately). Returns the number of files admitted.
    pub fn admit(&mut self, candidates: Vec<CandidateFile>) -> usize {
        if self.in_flight {
            return 0;
        }

        let accepted = filter_admissible(candidates);
        if accepted.is_empty() {
            self.error = Some(SessionError::NoValidFiles);
            return 0;
        }

        self.error = None;
        match self.mode {
            UploadMode::Individual => match accepted.into_iter().next() {
                // Last selection wins, truncated to the first valid file
                Some(first) => {
                    self.pending = vec![first];
                    1
                }
                None => 0,
            },
            UploadMode::Batch => {
                let count = accepted.len();
                self.pending.extend(accepted);
                count
            }
        }
    }

    /// Remove one pending file by position. Out-of-range is a no-op.
    pub fn remove(&mut self, index: usize) {
        if self.in_flight || index >= self.pending.len() {
            return;
        }
        self.pending.remove(index);
    }

    /// Start a submission. Returns the mode to submit under, or `None`
    /// when there is nothing to submit or one is already outstanding.
    /// Clears the error slot and prior results up front so stale data
    /// is never shown alongside an in-flight request. Pending files are
    /// read, not drained: they stay available for a user retry.
    pub fn begin_submission(&mut self) -> Option<UploadMode> {
        if self.in_flight || self.pending.is_empty() {
            return None;
        }
        self.error = None;
        self.results.clear();
        self.in_flight = true;
        Some(self.mode)
    }

    /// Reconcile a single-file round trip
    pub fn complete_individual(&mut self, outcome: Result<ReportRecord, SubmitError>) {
        self.in_flight = false;
        match outcome {
            Ok(record) => {
                self.results = vec![record];
            }
            Err(SubmitError::Service { detail }) => {
                self.error = Some(SessionError::Service { detail });
            }
            Err(SubmitError::Transport) => {
                self.error = Some(SessionError::Transport);
            }
        }
    }

    /// Reconcile a batch round trip. Per-file failures inside a
    /// successful call are non-fatal: the successful results are kept
    /// and a summary goes into the error slot.
    pub fn complete_batch(&mut self, outcome: Result<BatchOutcome, SubmitError>) {
        self.in_flight = false;
        match outcome {
            Ok(batch) => {
                if batch.is_partial() {
                    self.error = Some(SessionError::PartialBatch {
                        processed_count: batch.processed_count,
                        failed_count: batch.errors.len() as u32,
                    });
                }
                self.results = batch.results;
            }
            Err(_) => {
                self.error = Some(SessionError::BatchTransport);
            }
        }
    }
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new(UploadMode::Individual)
    }
}
