use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::theme::Theme;

const HINTS: &[(&str, &str)] = &[
    ("Space", "select"),
    ("c", "clear"),
    ("Tab", "switch pane"),
    ("R", "reload"),
    ("?", "help"),
    ("q", "quit"),
];

pub fn render_hint_bar(frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut spans = Vec::with_capacity(HINTS.len() * 2);
    for (key, desc) in HINTS {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!("{} ", desc), theme.dim_style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
