//! # Media Attachments
//!
//! The file-reader collaborator: turns a local file into a data-URL
//! preview for inline display. One attachment at a time, 10 MiB cap
//! checked from metadata before any content is read.

mod data_url;
mod reader;

pub use data_url::{encode_data_url, mime_for_path};
pub use reader::{FsMediaReader, MediaReader};

use std::fmt;

/// Maximum attachment payload accepted for preview encoding.
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// A decoded media preview. The original file is not kept, only the
/// encoded payload plus enough metadata to describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: u64,
    /// `data:{mime};base64,...` payload for inline preview.
    pub data_url: String,
}

/// Errors that can occur while attaching media.
#[derive(Debug)]
pub enum MediaError {
    /// File exceeds `MAX_ATTACHMENT_BYTES`. Raised from metadata alone.
    TooLarge { size: u64 },
    /// The file could not be read.
    Io(String),
}

impl MediaError {
    /// Message surfaced to the user; detail stays in the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            MediaError::TooLarge { .. } => "File size must be less than 10MB",
            MediaError::Io(_) => "Failed to read file",
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::TooLarge { size } => {
                write!(f, "file is {size} bytes, limit is {MAX_ATTACHMENT_BYTES}")
            }
            MediaError::Io(msg) => write!(f, "read error: {msg}"),
        }
    }
}

impl std::error::Error for MediaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            MediaError::TooLarge { size: 10_485_761 }.user_message(),
            "File size must be less than 10MB"
        );
        assert_eq!(
            MediaError::Io("permission denied".to_string()).user_message(),
            "Failed to read file"
        );
    }

    #[test]
    fn test_limit_is_ten_mebibytes() {
        assert_eq!(MAX_ATTACHMENT_BYTES, 10_485_760);
    }
}
