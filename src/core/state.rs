//! # Composer State
//!
//! Core business state for Quill. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! Composer
//! ├── draft: String                 // in-progress post text
//! ├── attachment: Option<Attachment> // single media preview
//! ├── error: Option<String>         // last error, next success clears it
//! ├── status_message: String        // status bar text
//! ├── is_generating: bool           // AI request in flight
//! ├── picker_open: bool             // emoji picker visibility
//! ├── dictation: Dictation          // Idle | Listening
//! ├── platform: Platform            // prompt target
//! └── decode_seq: u64               // attach-request generation counter
//! ```
//!
//! State changes only happen through `update(composer, action)` in
//! action.rs. This keeps things predictable, so no surprise mutations.

use crate::Platform;
use crate::media::Attachment;

/// Dictation session state. The transcript itself accumulates inside the
/// speech collaborator; the core only tracks whether capture is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dictation {
    #[default]
    Idle,
    Listening,
}

pub struct Composer {
    pub draft: String,
    pub attachment: Option<Attachment>,
    pub error: Option<String>,
    pub status_message: String,
    pub is_generating: bool,
    pub picker_open: bool,
    pub dictation: Dictation,
    pub platform: Platform,
    /// Bumped on every attach request and every clear. A decode that
    /// finishes carrying an older value is stale and gets dropped.
    pub decode_seq: u64,
}

impl Composer {
    pub fn new(platform: Platform) -> Self {
        Self {
            draft: String::new(),
            attachment: None,
            error: None,
            status_message: String::from("Ready to post"),
            is_generating: false,
            picker_open: false,
            dictation: Dictation::Idle,
            platform,
            decode_seq: 0,
        }
    }

    /// A post can be submitted with text, with an attachment, or both.
    /// Whitespace-only text with no attachment is not a post.
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty() || self.attachment.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_attachment, test_composer};

    #[test]
    fn test_composer_new_defaults() {
        let composer = test_composer();
        assert_eq!(composer.status_message, "Ready to post");
        assert!(!composer.is_generating);
        assert!(!composer.picker_open);
        assert_eq!(composer.dictation, Dictation::Idle);
        assert!(composer.draft.is_empty());
        assert!(composer.attachment.is_none());
        assert!(composer.error.is_none());
    }

    #[test]
    fn test_can_submit_requires_text_or_attachment() {
        let mut composer = test_composer();
        assert!(!composer.can_submit());

        composer.draft = "   \n ".to_string();
        assert!(!composer.can_submit());

        composer.draft = "hello".to_string();
        assert!(composer.can_submit());

        composer.draft.clear();
        composer.attachment = Some(test_attachment());
        assert!(composer.can_submit());
    }
}
