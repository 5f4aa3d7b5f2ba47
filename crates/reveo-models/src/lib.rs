//! Shared data models for the Reveo backend.
//!
//! This crate provides Serde-serializable types for:
//! - Normalized media payloads produced by ingestion
//! - The structured Veo prompt returned by analysis
//! - Session lifecycle status and submission identifiers

pub mod media;
pub mod prompt;
pub mod submission;

// Re-export common types
pub use media::{MediaKind, MediaPayload, PreviewHandle};
pub use prompt::VeoPrompt;
pub use submission::{AnalysisStatus, SubmissionId};
