//! # PathPrompt Component
//!
//! Small overlay asking for a file path to attach. A terminal has no
//! native file dialog; typing (or pasting) a path is the equivalent of
//! the original upload control.

use std::path::PathBuf;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::centered_rect;
use crate::tui::event::TuiEvent;

/// Events emitted by the path prompt.
#[derive(Debug, PartialEq)]
pub enum PathPromptEvent {
    Confirm(PathBuf),
    Dismiss,
}

/// Persistent state for the attach-path overlay.
pub struct PathPromptState {
    pub buffer: String,
}

impl PathPromptState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Handle a key event, returning an event when the prompt resolves.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<PathPromptEvent> {
        match event {
            TuiEvent::Escape => Some(PathPromptEvent::Dismiss),
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                self.buffer.push_str(text);
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::Submit => {
                let trimmed = self.buffer.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(PathPromptEvent::Confirm(expand_home(trimmed)))
                }
            }
            _ => None,
        }
    }
}

impl Default for PathPromptState {
    fn default() -> Self {
        Self::new()
    }
}

/// `~/` expands against the home directory; everything else is verbatim.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Transient render wrapper for the path prompt overlay.
pub struct PathPrompt<'a> {
    state: &'a PathPromptState,
}

impl<'a> PathPrompt<'a> {
    pub fn new(state: &'a PathPromptState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let centered = centered_rect(70, 30, area);
        let overlay = Rect {
            height: 3.min(centered.height),
            ..centered
        };

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Attach media (image/video path) ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Attach  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));

        frame.render_widget(
            Paragraph::new(self.state.buffer.as_str()).block(block),
            overlay,
        );

        let col = (self.state.buffer.width() as u16 + 2).min(overlay.width.saturating_sub(2));
        frame.set_cursor_position((overlay.x + col, overlay.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_path_confirms_on_enter() {
        let mut state = PathPromptState::new();
        for c in "/tmp/cat.png".chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
        let event = state.handle_event(&TuiEvent::Submit);
        assert_eq!(
            event,
            Some(PathPromptEvent::Confirm(PathBuf::from("/tmp/cat.png")))
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let mut state = PathPromptState::new();
        state.handle_event(&TuiEvent::Paste("  /tmp/cat.png ".to_string()));
        let event = state.handle_event(&TuiEvent::Submit);
        assert_eq!(
            event,
            Some(PathPromptEvent::Confirm(PathBuf::from("/tmp/cat.png")))
        );
    }

    #[test]
    fn test_empty_submit_keeps_prompt_open() {
        let mut state = PathPromptState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        state.handle_event(&TuiEvent::Paste("   ".to_string()));
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = PathPromptState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(PathPromptEvent::Dismiss)
        );
    }

    #[test]
    fn test_expand_home_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/pics/cat.png"), home.join("pics/cat.png"));
        }
        assert_eq!(expand_home("/abs/path.png"), PathBuf::from("/abs/path.png"));
    }
}
