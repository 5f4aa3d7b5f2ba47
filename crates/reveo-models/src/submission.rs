//! Submission identifiers and session lifecycle status.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an accepted submission.
///
/// Minted once per submission that passes validation and threaded through
/// log lines so one analysis cycle can be correlated end to end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    /// Generate a new random submission ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of the analysis session.
///
/// This is the presentation-facing discriminant: the UI keys its three
/// branches (upload surface, scanning state, result/error panel) on exactly
/// these values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    /// No file submitted; waiting for input
    #[default]
    Idle,
    /// A submission was accepted and the inference request is in flight
    Analyzing,
    /// Analysis completed successfully; a result is available
    Complete,
    /// Analysis failed; awaiting reset
    Error,
}

impl AnalysisStatus {
    /// Returns the status as a string for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Analyzing => "analyzing",
            Self::Complete => "complete",
            Self::Error => "error",
        }
    }

    /// Returns true if the status is terminal (complete or error).
    ///
    /// Terminal states re-arm: a fresh submission is accepted from either.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Error)
    }

    /// Returns true if an analysis is still in flight.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::Analyzing)
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
