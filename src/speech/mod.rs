//! # Speech Capture
//!
//! The dictation collaborator. The composer only consumes this surface:
//! it never touches microphones or recognizer processes directly, so a
//! scripted capture can stand in during tests.

mod command;

pub use command::CommandCapture;

/// Continuous speech-to-text capture. A running session accumulates a
/// transcript until stopped; the composer commits it on stop.
pub trait SpeechCapture: Send + Sync {
    /// Begins capture. `continuous` keeps the session open across pauses;
    /// a non-continuous session ends after the first recognized phrase.
    fn start_listening(&self, continuous: bool);

    /// Halts capture. The transcript keeps its accumulated content.
    fn stop_listening(&self);

    fn listening(&self) -> bool;

    /// Transcript accumulated since the last reset.
    fn transcript(&self) -> String;

    fn reset_transcript(&self);
}
