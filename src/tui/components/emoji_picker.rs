//! # Emoji Picker Component
//!
//! Centered overlay with a navigable emoji grid. Visibility is core state
//! (`Composer::picker_open`); this component only owns the selection.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EmojiPickerState` lives in `TuiState`
//! - `EmojiPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use super::centered_rect;
use crate::tui::event::TuiEvent;

/// Built-in catalog: native character plus a short name for the footer.
pub const EMOJI_CATALOG: &[(&str, &str)] = &[
    ("😀", "grinning"),
    ("😄", "smile"),
    ("😂", "joy"),
    ("🥲", "tearful smile"),
    ("😉", "wink"),
    ("😍", "heart eyes"),
    ("🤩", "star struck"),
    ("😎", "cool"),
    ("🤔", "thinking"),
    ("😅", "sweat smile"),
    ("😭", "sob"),
    ("😴", "sleepy"),
    ("🤯", "mind blown"),
    ("🥳", "party"),
    ("😤", "determined"),
    ("🙃", "upside down"),
    ("👍", "thumbs up"),
    ("👎", "thumbs down"),
    ("👏", "clap"),
    ("🙌", "raised hands"),
    ("🙏", "pray"),
    ("💪", "flex"),
    ("🤝", "handshake"),
    ("👀", "eyes"),
    ("❤️", "heart"),
    ("🔥", "fire"),
    ("✨", "sparkles"),
    ("⭐", "star"),
    ("🎉", "tada"),
    ("🚀", "rocket"),
    ("💯", "hundred"),
    ("💡", "bulb"),
    ("☕", "coffee"),
    ("🍕", "pizza"),
    ("🌮", "taco"),
    ("🎂", "cake"),
    ("🌈", "rainbow"),
    ("🌞", "sun"),
    ("🌊", "wave"),
    ("🐶", "dog"),
];

const GRID_COLS: usize = 8;

/// Events emitted by the emoji picker.
#[derive(Debug, PartialEq)]
pub enum PickerEvent {
    /// An emoji was chosen; the payload is its native text.
    Pick(String),
    Dismiss,
}

/// Persistent state for the emoji picker overlay.
pub struct EmojiPickerState {
    pub selected: usize,
}

impl EmojiPickerState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Handle a key event, returning a PickerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::Escape => Some(PickerEvent::Dismiss),
            TuiEvent::CursorLeft => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                self.selected = (self.selected + 1).min(EMOJI_CATALOG.len() - 1);
                None
            }
            TuiEvent::CursorUp => {
                if self.selected >= GRID_COLS {
                    self.selected -= GRID_COLS;
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.selected + GRID_COLS < EMOJI_CATALOG.len() {
                    self.selected += GRID_COLS;
                }
                None
            }
            TuiEvent::Submit => EMOJI_CATALOG
                .get(self.selected)
                .map(|(native, _)| PickerEvent::Pick((*native).to_string())),
            _ => None,
        }
    }
}

impl Default for EmojiPickerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the emoji picker overlay.
pub struct EmojiPicker<'a> {
    state: &'a EmojiPickerState,
}

impl<'a> EmojiPicker<'a> {
    pub fn new(state: &'a EmojiPickerState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 60, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Emoji ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Arrows Move  Enter Insert  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let mut lines: Vec<Line> = EMOJI_CATALOG
            .chunks(GRID_COLS)
            .enumerate()
            .map(|(row, chunk)| {
                let spans: Vec<Span> = chunk
                    .iter()
                    .enumerate()
                    .map(|(col, (native, _))| {
                        let style = if row * GRID_COLS + col == self.state.selected {
                            Style::default().add_modifier(Modifier::REVERSED)
                        } else {
                            Style::default()
                        };
                        Span::styled(format!(" {native} "), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        // Footer: name of the highlighted emoji.
        let name = EMOJI_CATALOG
            .get(self.state.selected)
            .map(|(_, name)| *name)
            .unwrap_or("");
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(":{name}:"),
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}
