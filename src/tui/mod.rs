//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web,
//! headless, etc.) in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (AI request in flight, dictation running): draws every
//!   ~80ms so the spinner and the live transcript stay fresh.
//! - **Idle**: sleeps up to 500ms, only redraws on events.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor
//! because ratatui's `set_cursor_position` resets the terminal's blink
//! timer on every `draw()` call.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{Composer, Dictation};
use crate::genai::{ContentGenerator, GeminiClient};
use crate::media::{FsMediaReader, MediaReader};
use crate::speech::{CommandCapture, SpeechCapture};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ComposeBox, ComposeEvent, EmojiPickerState, PathPromptEvent, PathPromptState, PickerEvent,
    Post,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub compose: ComposeBox,
    pub feed: Vec<Post>,
    pub emoji_picker: EmojiPickerState,
    /// Attach-path overlay (None = hidden). Unlike the emoji picker, the
    /// prompt is a pure UI affordance, so its visibility lives here.
    pub path_prompt: Option<PathPromptState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            compose: ComposeBox::new(),
            feed: Vec::new(),
            emoji_picker: EmojiPickerState::new(),
            path_prompt: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// The collaborators the event loop drives on the core's behalf.
struct Runtime {
    generator: Arc<dyn ContentGenerator>,
    reader: Arc<dyn MediaReader>,
    capture: Option<Arc<dyn SpeechCapture>>,
    tx: mpsc::Sender<Action>,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock  // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Build the content generator from resolved config. A missing key still
/// yields a client; every generate call then fails fast with the
/// not-configured error the UI surfaces.
pub fn build_generator(config: &ResolvedConfig) -> Arc<dyn ContentGenerator> {
    Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
    ))
}

/// Build the speech capture, if a transcriber command is configured.
pub fn build_capture(config: &ResolvedConfig) -> Option<Arc<dyn SpeechCapture>> {
    config
        .speech_command
        .as_ref()
        .map(|command| Arc::new(CommandCapture::new(command.clone())) as Arc<dyn SpeechCapture>)
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = Composer::new(config.platform);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let rt = Runtime {
        generator: build_generator(&config),
        reader: Arc::new(FsMediaReader),
        capture: build_capture(&config),
        tx,
    };

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_generating || app.dictation == Dictation::Listening;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            let transcript_preview = match (&rt.capture, app.dictation) {
                (Some(capture), Dictation::Listening) => capture.transcript(),
                _ => String::new(),
            };
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame, &transcript_preview))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit |= apply_action(&mut app, &mut tui, &rt, Action::Quit);
                continue;
            }

            // Ctrl+E toggles the picker from anywhere except the path prompt
            if matches!(event, TuiEvent::ToggleEmoji) && tui.path_prompt.is_none() {
                should_quit |= apply_action(&mut app, &mut tui, &rt, Action::TogglePicker);
                continue;
            }

            // Attach-path prompt swallows events while open
            if tui.path_prompt.is_some() {
                let prompt_event = tui
                    .path_prompt
                    .as_mut()
                    .and_then(|prompt| prompt.handle_event(&event));
                match prompt_event {
                    Some(PathPromptEvent::Confirm(path)) => {
                        tui.path_prompt = None;
                        should_quit |=
                            apply_action(&mut app, &mut tui, &rt, Action::AttachRequested(path));
                    }
                    Some(PathPromptEvent::Dismiss) => {
                        tui.path_prompt = None;
                    }
                    None => {}
                }
                continue;
            }

            // Emoji picker overlay: visibility is core state, selection is ours
            if app.picker_open {
                match tui.emoji_picker.handle_event(&event) {
                    Some(PickerEvent::Pick(native)) => {
                        should_quit |=
                            apply_action(&mut app, &mut tui, &rt, Action::SelectEmoji(native));
                    }
                    Some(PickerEvent::Dismiss) => {
                        should_quit |= apply_action(&mut app, &mut tui, &rt, Action::TogglePicker);
                    }
                    None => {}
                }
                continue;
            }

            match event {
                TuiEvent::AttachPrompt => {
                    tui.path_prompt = Some(PathPromptState::new());
                }
                TuiEvent::ClearAttachment => {
                    should_quit |= apply_action(&mut app, &mut tui, &rt, Action::ClearAttachment);
                }
                TuiEvent::ToggleDictation => {
                    if rt.capture.is_none() {
                        warn!("Dictation requested without a configured transcriber");
                        app.error = Some("Speech capture is not configured".to_string());
                    } else if app.dictation == Dictation::Listening {
                        should_quit |= apply_action(&mut app, &mut tui, &rt, Action::StopDictation);
                    } else {
                        should_quit |=
                            apply_action(&mut app, &mut tui, &rt, Action::StartDictation);
                    }
                }
                TuiEvent::RequestAssist => {
                    should_quit |= apply_action(&mut app, &mut tui, &rt, Action::RequestAssist);
                }
                // Esc with no overlay open: nothing to dismiss
                TuiEvent::Escape => {}
                other => {
                    if let Some(compose_event) = tui.compose.handle_event(&other) {
                        match compose_event {
                            ComposeEvent::SubmitRequested => {
                                should_quit |= apply_action(&mut app, &mut tui, &rt, Action::Submit);
                            }
                            ComposeEvent::Changed => {
                                let draft = tui.compose.buffer.clone();
                                should_quit |=
                                    apply_action(&mut app, &mut tui, &rt, Action::EditDraft(draft));
                            }
                        }
                    }
                }
            }
        }

        // Handle background task actions (decode + generation results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= apply_action(&mut app, &mut tui, &rt, action);
        }

        if should_quit {
            break;
        }
    }

    // Make sure a dictation process doesn't outlive the UI.
    if let Some(capture) = &rt.capture {
        capture.stop_listening();
    }

    ratatui::restore();
    Ok(())
}

/// Runs an action through the reducer and executes the returned effect.
/// Effects can chain (stopping capture commits the transcript), so this
/// loops until the effect settles. Returns true when the app should quit.
fn apply_action(app: &mut Composer, tui: &mut TuiState, rt: &Runtime, action: Action) -> bool {
    let mut effect = update(app, action);
    loop {
        match effect {
            Effect::None => return false,
            Effect::Quit => return true,
            Effect::SyncDraft => {
                tui.compose.set_text(app.draft.clone());
                return false;
            }
            Effect::Post { text, attachment } => {
                info!("Post committed ({} chars)", text.len());
                tui.feed.push(Post::new(text, attachment));
                tui.compose.set_text(String::new());
                return false;
            }
            Effect::SpawnGenerate { prompt } => {
                spawn_generate(rt.generator.clone(), prompt, app.platform, rt.tx.clone());
                return false;
            }
            Effect::SpawnDecode { path, seq } => {
                spawn_decode(rt.reader.clone(), path, seq, rt.tx.clone());
                return false;
            }
            Effect::StartCapture => {
                if let Some(capture) = &rt.capture {
                    capture.reset_transcript();
                    capture.start_listening(true);
                }
                return false;
            }
            Effect::StopCapture => {
                let Some(capture) = &rt.capture else {
                    return false;
                };
                capture.stop_listening();
                // The final transcript replaces the draft.
                effect = update(app, Action::TranscriptCommitted(capture.transcript()));
            }
        }
    }
}

fn spawn_generate(
    generator: Arc<dyn ContentGenerator>,
    prompt: String,
    platform: crate::Platform,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning AI generation request");
    tokio::spawn(async move {
        let result = generator.generate(&prompt, platform).await;
        if tx.send(Action::GenerationComplete(result)).is_err() {
            warn!("Failed to send generation result: receiver dropped");
        }
    });
}

fn spawn_decode(
    reader: Arc<dyn MediaReader>,
    path: std::path::PathBuf,
    seq: u64,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning media decode: {} (seq {seq})", path.display());
    tokio::spawn(async move {
        let result = reader.read(&path).await;
        if tx.send(Action::DecodeFinished { seq, result }).is_err() {
            warn!("Failed to send decode result: receiver dropped");
        }
    });
}
