//! Normalized media payload models.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of media accepted for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Derive the kind from a declared content-type string.
    ///
    /// Only the primary type is consulted: `image/*` maps to [`MediaKind::Image`],
    /// `video/*` to [`MediaKind::Video`]. Anything else is not analyzable media.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        if content_type.starts_with("image/") {
            Some(Self::Image)
        } else if content_type.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque reference a presentation layer can use to render the original file.
///
/// Here this is a `data:` URL carrying the file inline, so the preview stays
/// valid without re-reading the file from disk or network. Analysis never
/// consults it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    /// Wrap an already-rendered preview reference.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Get the inner URL string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The normalized result of a validated upload.
///
/// Only the ingestion validator constructs this; a payload never exists for a
/// file that failed validation, and `kind` is always consistent with the
/// primary type of `content_type`.
#[derive(Clone)]
pub struct MediaPayload {
    /// Binary content of the file, owned.
    pub bytes: Vec<u8>,

    /// Declared content type (e.g. `image/png`, `video/mp4`).
    pub content_type: String,

    /// Media kind derived from `content_type`.
    pub kind: MediaKind,

    /// Render reference for the presentation layer.
    pub preview: PreviewHandle,

    /// Original file name, kept for diagnostics only.
    pub file_name: Option<String>,
}

impl MediaPayload {
    /// Byte length of the media content.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// The buffer can be megabytes; log the length, not the content.
impl fmt::Debug for MediaPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaPayload")
            .field("content_type", &self.content_type)
            .field("kind", &self.kind)
            .field("bytes", &self.bytes.len())
            .field("file_name", &self.file_name)
            .finish()
    }
}
