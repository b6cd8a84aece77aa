//! # AttachmentBar Component
//!
//! Stateless summary of the current media attachment. A terminal can't
//! show the picture, so the bar surfaces what the data URL carries:
//! file name, MIME type, size, and the encoded payload length.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::human_size;
use crate::media::Attachment;

/// Transient render wrapper; build one per frame from borrowed state.
pub struct AttachmentBar<'a> {
    pub attachment: &'a Attachment,
}

impl<'a> AttachmentBar<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let summary = Line::from(vec![
            Span::styled(
                self.attachment.file_name.as_str(),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(
                "  {}  {}  preview {} chars",
                self.attachment.mime,
                human_size(self.attachment.bytes),
                self.attachment.data_url.len()
            )),
            Span::styled("  Ctrl+X remove", Style::default().fg(Color::DarkGray)),
        ]);

        let paragraph = Paragraph::new(summary).block(Block::bordered().title(" Attachment "));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_attachment;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_shows_name_and_mime() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let attachment = test_attachment();

        terminal
            .draw(|f| {
                AttachmentBar {
                    attachment: &attachment,
                }
                .render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("photo.png"));
        assert!(text.contains("image/png"));
    }
}
