//! # TUI Components
//!
//! Two patterns, both borrowed from the component model the rest of the
//! app follows:
//!
//! - **Stateful, event-driven**: `ComposeBox`, `EmojiPickerState`,
//!   `PathPromptState` manage local state and emit high-level events.
//! - **Stateless, props-based**: `StatusBar`, `AttachmentBar`, `Feed`
//!   are transient wrappers built each frame from borrowed data.
//!
//! Each component file co-locates its state, events, rendering and tests.

pub mod attachment_bar;
pub mod compose_box;
pub mod emoji_picker;
pub mod feed;
pub mod path_prompt;
pub mod status_bar;

pub use attachment_bar::AttachmentBar;
pub use compose_box::{ComposeBox, ComposeEvent};
pub use emoji_picker::{EmojiPicker, EmojiPickerState, PickerEvent};
pub use feed::{Feed, Post};
pub use path_prompt::{PathPrompt, PathPromptEvent, PathPromptState};
pub use status_bar::StatusBar;

use ratatui::layout::{Constraint, Layout, Rect};

/// Compute a centered rect using percentage of the outer rect.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// Human-readable byte count: "312 B", "4.2 KB", "9.8 MB".
pub(crate) fn human_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size_units() {
        assert_eq!(human_size(312), "312 B");
        assert_eq!(human_size(4300), "4.2 KB");
        assert_eq!(human_size(10_485_760), "10.0 MB");
    }

    #[test]
    fn test_centered_rect_fits_inside_outer() {
        let outer = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 50, outer);
        assert!(rect.width <= 60);
        assert!(rect.height <= 20);
        assert!(rect.x >= 20);
        assert!(rect.y >= 10);
    }
}
