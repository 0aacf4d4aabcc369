//! Upload session and batch orchestration logic
//!
//! This crate holds the state machine behind the report upload view:
//! which processing mode is active, which files are pending, what the
//! last submission produced, and what error (if any) to show. It has
//! no network or browser dependency; the wasm app wires it to fetch
//! and DOM events.
//!
//! The invariant everything here protects: pending files and results
//! always belong to the active mode. Switching mode clears both.

pub mod error;
pub mod intake;
pub mod session;

pub use error::{SessionError, SubmitError};
pub use intake::{CandidateFile, ALLOWED_EXTENSIONS};
pub use session::{UploadMode, UploadSession};
