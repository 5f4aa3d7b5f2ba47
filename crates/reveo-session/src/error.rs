//! Session error types.

use thiserror::Error;

use reveo_media::IngestError;

/// Reasons a submission is turned away before any state transition.
///
/// These are reported straight back to the submission surface; the session
/// state is untouched when either is returned. Analysis failures are not
/// submit errors; they land the session in its `Error` state instead.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Upload rejected: {0}")]
    Validation(#[from] IngestError),

    #[error("An analysis is already in flight")]
    AnalysisInFlight,
}
