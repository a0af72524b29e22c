use thiserror::Error;

/// Errors the top-level parse operation can fail with.
///
/// These are the only two hard failures in the core. Field-level extraction is
/// total: a low-quality document degrades to empty fields, never to an error.
/// The caller owns user-facing messaging and cleanup of the rejected upload.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unsupported file format: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("Failed to extract text from the document")]
    ExtractionFailed,
}
