//! # Actions
//!
//! Everything that can happen in Quill becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The AI call settles? That's `Action::GenerationComplete(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the adapter must
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: run an action, assert on the state and
//! the returned effect.

use std::path::PathBuf;

use log::{debug, warn};

use crate::core::state::{Composer, Dictation};
use crate::genai::GenerateError;
use crate::media::{Attachment, MediaError};

/// Prompt used when AI assist is requested with an empty draft.
pub const DEFAULT_ASSIST_PROMPT: &str = "Generate an engaging social media post";

#[derive(Debug)]
pub enum Action {
    Quit,
    /// Verbatim replacement of the draft with user-typed content.
    EditDraft(String),
    TogglePicker,
    /// Emoji chosen from the picker; the payload is its native text.
    SelectEmoji(String),
    AttachRequested(PathBuf),
    DecodeFinished {
        seq: u64,
        result: Result<Attachment, MediaError>,
    },
    ClearAttachment,
    StartDictation,
    StopDictation,
    /// Final transcript handed over after capture stops.
    TranscriptCommitted(String),
    RequestAssist,
    GenerationComplete(Result<String, GenerateError>),
    Submit,
}

/// I/O the adapter must perform after an `update()` call.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// The core changed the draft; the compose box buffer must be refreshed.
    SyncDraft,
    /// A post was committed. The draft and attachment have been reset.
    Post {
        text: String,
        attachment: Option<Attachment>,
    },
    SpawnGenerate {
        prompt: String,
    },
    SpawnDecode {
        path: PathBuf,
        seq: u64,
    },
    StartCapture,
    StopCapture,
}

pub fn update(composer: &mut Composer, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::EditDraft(text) => {
            composer.draft = text;
            Effect::None
        }

        Action::TogglePicker => {
            composer.picker_open = !composer.picker_open;
            Effect::None
        }

        Action::SelectEmoji(native) => {
            composer.draft.push_str(&native);
            composer.picker_open = false;
            Effect::SyncDraft
        }

        Action::AttachRequested(path) => {
            composer.decode_seq += 1;
            composer.status_message = String::from("Attaching media...");
            Effect::SpawnDecode {
                path,
                seq: composer.decode_seq,
            }
        }

        Action::DecodeFinished { seq, result } => {
            if seq != composer.decode_seq {
                debug!("Discarding stale decode (seq {seq}, current {})", composer.decode_seq);
                return Effect::None;
            }
            match result {
                Ok(attachment) => {
                    composer.status_message = format!("Attached {}", attachment.file_name);
                    composer.attachment = Some(attachment);
                    composer.error = None;
                }
                Err(e) => {
                    warn!("Attachment failed: {e}");
                    composer.error = Some(e.user_message().to_string());
                    composer.status_message = String::from("Attachment failed");
                }
            }
            Effect::None
        }

        Action::ClearAttachment => {
            composer.attachment = None;
            // Also invalidates any decode still in flight.
            composer.decode_seq += 1;
            composer.status_message = String::from("Attachment removed");
            Effect::None
        }

        Action::StartDictation => {
            if composer.dictation == Dictation::Listening {
                return Effect::None;
            }
            composer.dictation = Dictation::Listening;
            composer.status_message = String::from("Listening...");
            Effect::StartCapture
        }

        Action::StopDictation => {
            if composer.dictation == Dictation::Idle {
                return Effect::None;
            }
            composer.dictation = Dictation::Idle;
            Effect::StopCapture
        }

        Action::TranscriptCommitted(transcript) => {
            // The transcript replaces the draft, it does not append.
            composer.draft = transcript;
            composer.status_message = String::from("Dictation captured");
            Effect::SyncDraft
        }

        Action::RequestAssist => {
            if composer.is_generating {
                debug!("AI assist already in flight, ignoring request");
                return Effect::None;
            }
            composer.is_generating = true;
            composer.error = None;
            composer.status_message = String::from("Generating...");
            let prompt = if composer.draft.is_empty() {
                DEFAULT_ASSIST_PROMPT.to_string()
            } else {
                composer.draft.clone()
            };
            Effect::SpawnGenerate { prompt }
        }

        Action::GenerationComplete(result) => {
            composer.is_generating = false;
            match result {
                Ok(text) => {
                    composer.draft = text;
                    composer.error = None;
                    composer.status_message = String::from("Draft generated");
                    Effect::SyncDraft
                }
                Err(e) => {
                    warn!("AI generation failed: {e}");
                    composer.error = Some(e.user_message().to_string());
                    composer.status_message = String::from("Generation failed");
                    Effect::None
                }
            }
        }

        Action::Submit => {
            if !composer.can_submit() {
                return Effect::None;
            }
            let text = std::mem::take(&mut composer.draft);
            let attachment = composer.attachment.take();
            composer.error = None;
            composer.status_message = String::from("Posted");
            Effect::Post { text, attachment }
        }
    }
}
