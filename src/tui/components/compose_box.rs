//! # ComposeBox Component
//!
//! The draft editor.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, Ctrl+J newline)
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit a submit request on Enter (the core decides whether the draft
//!   is actually postable)
//!
//! ## State Management
//!
//! The buffer is internal state, kept in sync with the core draft: every
//! edit emits `Changed` so the adapter can copy the buffer into the core,
//! and core-driven draft changes (emoji, dictation, AI assist) come back
//! through `set_text`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const MAX_VISIBLE_LINES: u16 = 6;
const VERTICAL_OVERHEAD: u16 = 2; // top + bottom border

const PLACEHOLDER: &str = "What's on your mind?";

/// High-level events emitted by the ComposeBox
#[derive(Debug, Clone, PartialEq)]
pub enum ComposeEvent {
    /// Enter pressed. Whether the draft posts is the core's call.
    SubmitRequested,
    /// Buffer or cursor changed.
    Changed,
}

/// Greedy character wrap of a buffer into display rows, plus the visual
/// position of every cursor slot. Rendering and cursor movement share
/// this walk so they can never disagree.
struct TextLayout {
    rows: Vec<String>,
    /// (row, col, byte) for each char boundary, including the end slot.
    slots: Vec<(u16, u16, usize)>,
}

impl TextLayout {
    fn compute(text: &str, width: u16) -> Self {
        let width = width.max(1) as usize;
        let mut rows: Vec<String> = vec![String::new()];
        let mut slots = Vec::with_capacity(text.len() + 1);
        let mut col = 0usize;

        for (idx, ch) in text.char_indices() {
            let row = (rows.len() - 1) as u16;
            if ch == '\n' {
                slots.push((row, col as u16, idx));
                rows.push(String::new());
                col = 0;
                continue;
            }
            let w = ch.width().unwrap_or(1);
            if col + w > width {
                rows.push(String::new());
                col = 0;
            }
            slots.push(((rows.len() - 1) as u16, col as u16, idx));
            if let Some(row) = rows.last_mut() {
                row.push(ch);
            }
            col += w;
        }
        slots.push(((rows.len() - 1) as u16, col as u16, text.len()));

        Self { rows, slots }
    }

    /// Visual position of a cursor byte offset.
    fn pos_of(&self, byte: usize) -> (u16, u16) {
        self.slots
            .iter()
            .find(|(_, _, b)| *b == byte)
            .map(|(row, col, _)| (*row, *col))
            .unwrap_or((0, 0))
    }

    /// Cursor byte offset closest to (row, col): the rightmost slot on the
    /// row not past `col`, the row start if `col` precedes it, or the end
    /// of the buffer if the row doesn't exist.
    fn byte_at(&self, target_row: u16, target_col: u16) -> usize {
        let mut best: Option<(u16, usize)> = None;
        let mut row_start: Option<usize> = None;
        for &(row, col, byte) in &self.slots {
            if row != target_row {
                continue;
            }
            if row_start.is_none() {
                row_start = Some(byte);
            }
            if col <= target_col && best.is_none_or(|(c, _)| col >= c) {
                best = Some((col, byte));
            }
        }
        best.map(|(_, b)| b)
            .or(row_start)
            .unwrap_or_else(|| self.slots.last().map(|s| s.2).unwrap_or(0))
    }
}

/// Draft editor with wrapping and cursor tracking.
pub struct ComposeBox {
    /// Text buffer, mirrored into the core draft via `Changed` events.
    pub buffer: String,
    /// Prop: dims the box while an AI request is in flight.
    pub generating: bool,
    cursor: usize,
    scroll_offset: u16,
    last_width: u16,
}

impl ComposeBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            generating: false,
            cursor: 0,
            scroll_offset: 0,
            last_width: 0,
        }
    }

    /// Replaces the buffer (core-driven draft change), cursor to the end.
    pub fn set_text(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.buffer.len();
        self.scroll_offset = 0;
    }

    /// Required height for the current buffer, clamped to the viewport
    /// limit. Range: [1 + overhead, MAX_VISIBLE_LINES + overhead].
    pub fn calculate_height(&self, area_width: u16) -> u16 {
        let layout = TextLayout::compute(&self.buffer, inner_width(area_width));
        let lines = (layout.rows.len() as u16).min(MAX_VISIBLE_LINES);
        lines + VERTICAL_OVERHEAD
    }

    fn move_vertical(&mut self, delta: i32) -> bool {
        let layout = TextLayout::compute(&self.buffer, inner_width(self.last_width));
        let (row, col) = layout.pos_of(self.cursor);
        let target = if delta < 0 {
            match row.checked_sub(1) {
                Some(r) => r,
                None => return false,
            }
        } else {
            row + 1
        };
        if target as usize >= layout.rows.len() {
            return false;
        }
        let next = layout.byte_at(target, col);
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }
}

impl Default for ComposeBox {
    fn default() -> Self {
        Self::new()
    }
}

fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(2)
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl Component for ComposeBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.last_width = area.width;

        let layout = TextLayout::compute(&self.buffer, inner_width(area.width));
        let (cursor_row, cursor_col) = layout.pos_of(self.cursor);

        // Keep the cursor row inside the visible window.
        let visible = area
            .height
            .saturating_sub(VERTICAL_OVERHEAD)
            .min(MAX_VISIBLE_LINES)
            .max(1);
        if cursor_row < self.scroll_offset {
            self.scroll_offset = cursor_row;
        }
        if cursor_row >= self.scroll_offset + visible {
            self.scroll_offset = cursor_row + 1 - visible;
        }

        let start = self.scroll_offset as usize;
        let end = (start + visible as usize).min(layout.rows.len());
        let visible_text = layout.rows[start..end.max(start)].join("\n");

        let style = if self.generating {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title(" Compose ");

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .block(block)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(visible_text).block(block).style(style)
        };
        frame.render_widget(paragraph, area);

        let x = area.x + 1 + cursor_col.min(area.width.saturating_sub(2));
        let y = area.y + 1 + (cursor_row - self.scroll_offset);
        frame.set_cursor_position((x, y));
    }
}

impl EventHandler for ComposeBox {
    type Event = ComposeEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(ComposeEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor, text);
                self.cursor += text.len();
                Some(ComposeEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(ComposeEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(ComposeEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(ComposeEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(ComposeEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor != line_start).then(|| {
                    self.cursor = line_start;
                    ComposeEvent::Changed
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor != line_end).then(|| {
                    self.cursor = line_end;
                    ComposeEvent::Changed
                })
            }
            TuiEvent::CursorUp => self.move_vertical(-1).then_some(ComposeEvent::Changed),
            TuiEvent::CursorDown => self.move_vertical(1).then_some(ComposeEvent::Changed),
            TuiEvent::Submit => Some(ComposeEvent::SubmitRequested),
            _ => None,
        }
    }
}
