//! Upload validation and media ingestion.
//!
//! This crate is the single entry point for user files: both inbound paths
//! (drag-and-drop and manual selection) converge on [`validate_upload`], and
//! disk-backed handles go through [`ingest_file`]. Only validated files ever
//! become a [`reveo_models::MediaPayload`].

pub mod error;
pub mod ingest;

pub use error::{IngestError, IngestResult};
pub use ingest::{ingest_file, preview_data_url, validate_upload, RawUpload, MAX_UPLOAD_BYTES};
