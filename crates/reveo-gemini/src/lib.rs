//! Schema-constrained Gemini client for media analysis.
//!
//! This crate owns the one true external dependency of the pipeline: a single
//! multimodal `generateContent` request per analysis, with the response
//! contracted to a fixed JSON schema. The boundary is expressed as the
//! [`MediaAnalyzer`] trait so the session can swap the live client for a
//! deterministic stub in tests.

pub mod client;
pub mod error;
pub mod prompts;
mod schema;

pub use client::{GeminiClient, GeminiConfig, MediaAnalyzer, DEFAULT_MODEL};
pub use error::{AnalysisError, AnalysisResult};
