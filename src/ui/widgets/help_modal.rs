use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::centered_rect;
use crate::ui::theme::Theme;

const KEYBINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "Cycle pane focus"),
    ("1 / 2 / 3", "Focus artists / albums / tracks"),
    ("j / k", "Navigate list"),
    ("g / G", "Jump to first / last"),
    ("PgUp / PgDn", "Page up / down"),
    ("", ""),
    ("Space / Enter", "Select or deselect artist / album"),
    ("a", "Select every name in the list"),
    ("c / Esc", "Clear the list's selection"),
    ("", ""),
    ("R", "Reload library"),
    ("?", "Help (this modal)"),
    ("q", "Quit"),
];

pub fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal = centered_rect(50, 60, area);

    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .title(" Keybindings ")
        .title_style(Style::default().fg(theme.border_focused).add_modifier(Modifier::BOLD));

    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let lines: Vec<Line> = KEYBINDINGS
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from("")
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {:18}", key),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*desc, Style::default().fg(theme.fg)),
                ])
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
