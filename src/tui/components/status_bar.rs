//! # StatusBar Component
//!
//! Top line showing the target platform, the latest status message, a
//! spinner while an AI request is in flight, and a recording indicator
//! with a live transcript tail during dictation.
//!
//! Purely presentational: all data arrives as props from core state, so
//! the bar never has to know where a status message came from.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const TRANSCRIPT_PREVIEW_MAX: usize = 48;

/// Transient render wrapper; build one per frame from borrowed state.
pub struct StatusBar<'a> {
    pub platform: &'a str,
    pub status: &'a str,
    pub generating: bool,
    pub spinner_frame: usize,
    pub listening: bool,
    pub transcript_preview: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                format!("Quill (platform: {})", self.platform),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" | {}", self.status),
                Style::default().fg(Color::Gray),
            ),
        ];

        if self.generating {
            let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            spans.push(Span::styled(
                format!(" | {glyph} generating"),
                Style::default().fg(Color::Yellow),
            ));
        }

        if self.listening {
            spans.push(Span::styled(
                " | ● REC",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
            if !self.transcript_preview.is_empty() {
                spans.push(Span::styled(
                    format!(" {}", preview_tail(self.transcript_preview)),
                    Style::default().fg(Color::Gray),
                ));
            }
        }

        frame.render_widget(Line::from(spans), area);
    }
}

/// Last `TRANSCRIPT_PREVIEW_MAX` chars of the live transcript. Dictation
/// grows at the end, so the tail is the interesting part.
fn preview_tail(transcript: &str) -> String {
    let count = transcript.chars().count();
    if count <= TRANSCRIPT_PREVIEW_MAX {
        return transcript.to_string();
    }
    let tail: String = transcript
        .chars()
        .skip(count - TRANSCRIPT_PREVIEW_MAX)
        .collect();
    format!("...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(bar: StatusBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut text = String::new();
        terminal
            .draw(|f| {
                bar.render(f, f.area());
            })
            .unwrap();
        for cell in terminal.backend().buffer().content() {
            text.push_str(cell.symbol());
        }
        text
    }

    #[test]
    fn test_shows_platform_and_status() {
        let text = render_to_text(StatusBar {
            platform: "twitter",
            status: "Ready to post",
            generating: false,
            spinner_frame: 0,
            listening: false,
            transcript_preview: "",
        });
        assert!(text.contains("Quill (platform: twitter)"));
        assert!(text.contains("Ready to post"));
        assert!(!text.contains("REC"));
    }

    #[test]
    fn test_shows_rec_indicator_while_listening() {
        let text = render_to_text(StatusBar {
            platform: "general",
            status: "Listening...",
            generating: false,
            spinner_frame: 0,
            listening: true,
            transcript_preview: "hi there",
        });
        assert!(text.contains("● REC"));
        assert!(text.contains("hi there"));
    }

    #[test]
    fn test_preview_tail_truncates_long_transcripts() {
        let long = "word ".repeat(30);
        let tail = preview_tail(&long);
        assert!(tail.starts_with("..."));
        assert_eq!(tail.chars().count(), TRANSCRIPT_PREVIEW_MAX + 3);
    }

    #[test]
    fn test_preview_tail_passes_short_transcripts_through() {
        assert_eq!(preview_tail("short"), "short");
    }
}
