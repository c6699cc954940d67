use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::centered_rect;
use crate::ui::theme::Theme;

/// Blocking alert for a failed library load.
pub fn render_error_modal(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let modal = centered_rect(60, 30, area);

    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error_color))
        .title(" Could not load library ")
        .title_style(Style::default().fg(theme.error_color).add_modifier(Modifier::BOLD));

    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(theme.fg))),
        Line::from(""),
        Line::from(Span::styled("Enter/Esc to dismiss \u{00B7} R to retry", theme.dim_style)),
    ];

    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, inner);
}
