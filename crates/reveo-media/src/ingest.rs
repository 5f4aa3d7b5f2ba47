//! Upload validation and payload construction.

use std::path::Path;

use base64::Engine;
use tracing::debug;

use reveo_models::{MediaKind, MediaPayload, PreviewHandle};

use crate::error::{IngestError, IngestResult};

/// Upload size ceiling: 9 MiB.
///
/// Inline transport base64-encodes the payload (~33% inflation), and the
/// inference API caps the total request size, so oversized files are rejected
/// before any content is read.
pub const MAX_UPLOAD_BYTES: u64 = 9 * 1024 * 1024;

/// A raw file handle as produced by the submission surface.
///
/// Both inbound paths (drag-and-drop and manual selection) produce this
/// shape; the declared content type comes with the handle, it is not sniffed
/// from the content.
#[derive(Debug, Clone)]
pub struct RawUpload {
    /// Original file name, if the surface knows it.
    pub file_name: Option<String>,

    /// Declared content type (e.g. `image/png`, `video/mp4`).
    pub content_type: String,

    /// File content.
    pub bytes: Vec<u8>,
}

impl RawUpload {
    /// Create an upload from in-memory content.
    pub fn new(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: None,
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Attach the original file name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

/// Build the `data:` URL preview reference for a validated file.
pub fn preview_data_url(content_type: &str, bytes: &[u8]) -> PreviewHandle {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    PreviewHandle::new(format!("data:{};base64,{}", content_type, encoded))
}

/// Validate an upload and produce the normalized media payload.
///
/// Constraints are checked in order, short-circuiting on the first failure:
/// the content type must be `image/*` or `video/*`, and the byte length must
/// not exceed [`MAX_UPLOAD_BYTES`]. On success the bytes move into the
/// payload, the media kind is derived from the content type, and a preview
/// reference is built for the presentation layer.
pub fn validate_upload(upload: RawUpload) -> IngestResult<MediaPayload> {
    let kind = MediaKind::from_content_type(&upload.content_type)
        .ok_or_else(|| IngestError::unsupported_type(&upload.content_type))?;

    let size = upload.bytes.len() as u64;
    if size > MAX_UPLOAD_BYTES {
        return Err(IngestError::file_too_large(size, MAX_UPLOAD_BYTES));
    }

    let preview = preview_data_url(&upload.content_type, &upload.bytes);

    debug!(
        content_type = %upload.content_type,
        kind = %kind,
        size_bytes = size,
        "Upload accepted"
    );

    Ok(MediaPayload {
        bytes: upload.bytes,
        content_type: upload.content_type,
        kind,
        preview,
        file_name: upload.file_name,
    })
}

/// Ingest a file from disk with a declared content type.
///
/// Runs the same checks as [`validate_upload`], but takes the size from file
/// metadata first so an oversized file is never read into memory. The file
/// name is carried over from the path; the handle itself is not retained.
pub async fn ingest_file(path: &Path, content_type: &str) -> IngestResult<MediaPayload> {
    let kind = MediaKind::from_content_type(content_type)
        .ok_or_else(|| IngestError::unsupported_type(content_type))?;

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_UPLOAD_BYTES {
        return Err(IngestError::file_too_large(metadata.len(), MAX_UPLOAD_BYTES));
    }

    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());

    debug!(path = %path.display(), kind = %kind, size_bytes = bytes.len(), "File ingested");

    let mut upload = RawUpload::new(content_type, bytes);
    upload.file_name = file_name;
    validate_upload(upload)
}
