//! # Feed Component
//!
//! Session-local list of submitted posts, newest at the bottom. Posts
//! live only for the lifetime of the process; nothing is persisted.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};

use super::human_size;
use crate::media::Attachment;

/// A post committed from the composer.
pub struct Post {
    pub text: String,
    pub attachment: Option<Attachment>,
    pub posted_at: DateTime<Local>,
}

impl Post {
    pub fn new(text: String, attachment: Option<Attachment>) -> Self {
        Self {
            text,
            attachment,
            posted_at: Local::now(),
        }
    }
}

/// Transient render wrapper; build one per frame from borrowed state.
pub struct Feed<'a> {
    pub posts: &'a [Post],
}

impl<'a> Feed<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.posts.is_empty() {
            let empty = Paragraph::new("Nothing posted yet. Enter posts the current draft.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        // Fill bottom-up so the newest post sits just above the composer.
        // Older posts that no longer fit are simply not drawn.
        let mut bottom = area.y + area.height;
        for post in self.posts.iter().rev() {
            let body = post_body(post);
            let paragraph = Paragraph::new(body)
                .block(
                    Block::bordered()
                        .title(format!(" {} ", post.posted_at.format("%H:%M")))
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .wrap(Wrap { trim: false });

            let inner_width = area.width.saturating_sub(2);
            let height = paragraph.line_count(inner_width) as u16 + 2;
            if bottom.saturating_sub(area.y) < height {
                break;
            }
            bottom -= height;
            let rect = Rect::new(area.x, bottom, area.width, height);
            frame.render_widget(paragraph, rect);
        }
    }
}

fn post_body(post: &Post) -> Text<'_> {
    let mut body = if post.text.is_empty() {
        Text::default()
    } else {
        Text::from(post.text.as_str())
    };
    if let Some(attachment) = &post.attachment {
        body.lines.push(Line::from(Span::styled(
            format!(
                "attached: {} ({}, {})",
                attachment.file_name,
                attachment.mime,
                human_size(attachment.bytes)
            ),
            Style::default().fg(Color::Cyan),
        )));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_attachment;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(posts: &[Post]) -> String {
        let backend = TestBackend::new(50, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                Feed { posts }.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_empty_feed_shows_hint() {
        let text = render_to_text(&[]);
        assert!(text.contains("Nothing posted yet"));
    }

    #[test]
    fn test_posts_render_text_and_attachment_summary() {
        let posts = vec![
            Post::new("first post".to_string(), None),
            Post::new("with media".to_string(), Some(test_attachment())),
        ];
        let text = render_to_text(&posts);
        assert!(text.contains("first post"));
        assert!(text.contains("with media"));
        assert!(text.contains("attached: photo.png"));
    }

    #[test]
    fn test_attachment_only_post_renders() {
        let posts = vec![Post::new(String::new(), Some(test_attachment()))];
        let text = render_to_text(&posts);
        assert!(text.contains("attached: photo.png"));
    }
}
