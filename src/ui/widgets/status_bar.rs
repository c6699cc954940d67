use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::state::{FocusedPane, LoadStatus};
use crate::app::App;
use crate::ui::theme::Theme;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme, tick: usize) {
    let border_color = match app.status {
        LoadStatus::Loading => theme.loading_color,
        LoadStatus::Failed(_) => theme.error_color,
        LoadStatus::Ready => theme.border_unfocused,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(inner);

    // Left: library size
    let left = Line::from(vec![
        Span::styled(format!(" {}", app.title()), theme.title_style),
        Span::styled(
            format!("  {} shown", app.view.visible_tracks().len()),
            theme.dim_style,
        ),
    ]);
    frame.render_widget(Paragraph::new(left), cols[0]);

    // Center: track under the cursor while browsing tracks, else the source
    let center_text = match app.selected_track() {
        Some(track) if app.focus == FocusedPane::Tracks => track.summary(),
        _ => app.source.to_string(),
    };
    let center = Line::from(Span::styled(center_text, theme.artist_style))
        .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(center), cols[1]);

    // Right: load state
    let right = match &app.status {
        LoadStatus::Loading => Span::styled(
            format!("{} Loading library ", SPINNER[tick % SPINNER.len()]),
            Style::default().fg(theme.loading_color).add_modifier(Modifier::BOLD),
        ),
        LoadStatus::Failed(_) => Span::styled(
            "Load failed ",
            Style::default().fg(theme.error_color).add_modifier(Modifier::BOLD),
        ),
        LoadStatus::Ready => Span::styled("Ready ", theme.marked_style),
    };
    frame.render_widget(Paragraph::new(Line::from(right).alignment(Alignment::Right)), cols[2]);
}
