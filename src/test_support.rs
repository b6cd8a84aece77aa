//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::Platform;
use crate::core::state::Composer;
use crate::media::Attachment;

/// Creates a Composer targeting the default platform.
pub fn test_composer() -> Composer {
    Composer::new(Platform::General)
}

/// A small, already-decoded attachment fixture.
pub fn test_attachment() -> Attachment {
    Attachment {
        file_name: "photo.png".to_string(),
        mime: "image/png".to_string(),
        bytes: 4,
        data_url: "data:image/png;base64,AAAA".to_string(),
    }
}
