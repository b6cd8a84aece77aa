//! Transcriber-command capture.
//!
//! Runs a configured shell command (a whisper CLI in streaming mode, a
//! recognizer wrapper, anything that prints phrases) and folds its stdout
//! lines into the transcript, one phrase per line.

use std::process::Stdio;
use std::sync::Arc;

use log::{debug, info, warn};
use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};

use super::SpeechCapture;

#[derive(Default)]
struct CaptureState {
    listening: bool,
    transcript: String,
    child: Option<Child>,
    reader: Option<tokio::task::AbortHandle>,
}

/// Speech capture backed by an external transcriber process.
pub struct CommandCapture {
    command: String,
    state: Arc<Mutex<CaptureState>>,
}

impl CommandCapture {
    pub fn new(command: String) -> Self {
        Self {
            command,
            state: Arc::new(Mutex::new(CaptureState::default())),
        }
    }
}

impl SpeechCapture for CommandCapture {
    fn start_listening(&self, continuous: bool) {
        let mut state = self.state.lock();
        if state.listening {
            debug!("Speech capture already running");
            return;
        }

        let mut cmd = Command::new("sh");
        cmd.arg("-c")
            .arg(&self.command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!("Failed to start transcriber {:?}: {e}", self.command);
                return;
            }
        };

        let stdout = child.stdout.take();
        state.child = Some(child);
        state.listening = true;
        info!("Speech capture started: {}", self.command);

        if let Some(stdout) = stdout {
            let shared = Arc::clone(&self.state);
            let handle = tokio::spawn(async move {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    let phrase = line.trim();
                    if phrase.is_empty() {
                        continue;
                    }
                    debug!("Transcript phrase: {phrase}");
                    let mut guard = shared.lock();
                    if !guard.transcript.is_empty() {
                        guard.transcript.push(' ');
                    }
                    guard.transcript.push_str(phrase);
                    if !continuous {
                        break;
                    }
                }
                // Recognizer exited (or one-shot phrase landed).
                shared.lock().listening = false;
            });
            state.reader = Some(handle.abort_handle());
        }
    }

    fn stop_listening(&self) {
        let mut state = self.state.lock();
        if let Some(handle) = state.reader.take() {
            handle.abort();
        }
        if let Some(mut child) = state.child.take() {
            if let Err(e) = child.start_kill() {
                debug!("Transcriber already exited: {e}");
            }
        }
        if state.listening {
            info!("Speech capture stopped");
        }
        state.listening = false;
    }

    fn listening(&self) -> bool {
        self.state.lock().listening
    }

    fn transcript(&self) -> String {
        self.state.lock().transcript.clone()
    }

    fn reset_transcript(&self) {
        self.state.lock().transcript.clear();
    }
}
