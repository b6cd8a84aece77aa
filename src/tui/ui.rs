//! Frame layout: status bar on top, feed in the middle, then error
//! banner, attachment bar and compose box as needed, key help at the
//! bottom. Overlays (emoji picker, path prompt) paint last.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::{Composer, Dictation};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{AttachmentBar, EmojiPicker, Feed, PathPrompt, StatusBar};

pub fn draw_ui(
    frame: &mut Frame,
    app: &Composer,
    tui: &mut TuiState,
    spinner_frame: usize,
    transcript_preview: &str,
) {
    let area = frame.area();
    let compose_height = tui.compose.calculate_height(area.width);

    let mut constraints = vec![Constraint::Length(1), Constraint::Min(0)];
    if app.error.is_some() {
        constraints.push(Constraint::Length(1));
    }
    if app.attachment.is_some() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(compose_height));
    constraints.push(Constraint::Length(1));
    let areas = Layout::vertical(constraints).split(area);

    let status_area = areas[0];
    let feed_area = areas[1];
    let mut next = 2;

    StatusBar {
        platform: app.platform.as_str(),
        status: &app.status_message,
        generating: app.is_generating,
        spinner_frame,
        listening: app.dictation == Dictation::Listening,
        transcript_preview,
    }
    .render(frame, status_area);

    Feed { posts: &tui.feed }.render(frame, feed_area);

    if let Some(error) = &app.error {
        draw_error_banner(frame, areas[next], error);
        next += 1;
    }
    if let Some(attachment) = &app.attachment {
        AttachmentBar { attachment }.render(frame, areas[next]);
        next += 1;
    }

    tui.compose.generating = app.is_generating;
    tui.compose.render(frame, areas[next]);
    next += 1;

    draw_help_line(frame, areas[next]);

    // Overlays paint over everything rendered above.
    if app.picker_open {
        EmojiPicker::new(&tui.emoji_picker).render(frame, area);
    }
    if let Some(prompt) = &tui.path_prompt {
        PathPrompt::new(prompt).render(frame, area);
    }
}

fn draw_error_banner(frame: &mut Frame, area: Rect, error: &str) {
    let banner =
        Paragraph::new(format!("✖ {error}")).style(Style::default().fg(Color::Red));
    frame.render_widget(banner, area);
}

fn draw_help_line(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Enter Post  Ctrl+E Emoji  Ctrl+O Attach  Ctrl+X Clear media  \
         Ctrl+R Dictate  Ctrl+G AI assist  Ctrl+J Newline  Ctrl+C Quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
