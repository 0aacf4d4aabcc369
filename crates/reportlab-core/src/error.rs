use thiserror::Error;

/// Last-raised session error. A single slot: set by the most recent
/// failed action, cleared on successful admission and at the start of
/// every submission. Display strings are the user-facing Spanish copy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No candidate in an intake action had an allowed extension
    #[error("Por favor sube un archivo .xlsx o .csv válido.")]
    NoValidFiles,

    /// The extraction service answered a single-file submission with a
    /// structured failure detail; surfaced verbatim
    #[error("{detail}")]
    Service { detail: String },

    /// Single-file submission could not complete (network failure or a
    /// non-success response without a readable detail)
    #[error("Error al procesar el archivo")]
    Transport,

    /// Batch submission could not complete at all
    #[error("Error al procesar el lote de archivos")]
    BatchTransport,

    /// Batch call succeeded but some files failed. Non-fatal: the
    /// successful results are still shown alongside this summary.
    #[error("Se procesaron {processed_count} archivos; {failed_count} con errores")]
    PartialBatch {
        processed_count: u32,
        failed_count: u32,
    },
}

/// Failure of one submission round trip, as seen by the transport layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Service responded with a machine-readable `detail`
    Service { detail: String },
    /// Request never completed or the response carried no detail
    Transport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_detail_surfaced_verbatim() {
        let err = SessionError::Service {
            detail: "Error extracting data: bad sheet".to_string(),
        };
        assert_eq!(err.to_string(), "Error extracting data: bad sheet");
    }

    #[test]
    fn test_partial_batch_summary_names_both_counts() {
        let err = SessionError::PartialBatch {
            processed_count: 2,
            failed_count: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains('2'));
        assert!(msg.contains('1'));
    }
}
