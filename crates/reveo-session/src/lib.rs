//! Analysis session state machine.
//!
//! This crate orchestrates the pipeline: it runs the upload validator, drives
//! one schema-constrained analysis request per accepted submission, and maps
//! the request lifecycle onto the closed `IDLE → ANALYZING → {COMPLETE,
//! ERROR}` state set a presentation layer renders against. It also provides
//! the process-level telemetry bootstrap for the embedding application.

pub mod error;
pub mod session;
pub mod telemetry;

pub use error::SubmitError;
pub use session::{Session, SessionState, Submission, ERROR_NOTICE};
