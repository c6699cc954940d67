use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone)]
pub struct LayoutAreas {
    pub status_bar: Rect,
    pub artists: Rect,
    pub albums: Rect,
    pub tracks: Rect,
    pub hint_bar: Rect,
}

impl LayoutAreas {
    pub fn compute(area: Rect, pane_widths: [u16; 3]) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar (bordered)
                Constraint::Min(5),    // Browser
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(pane_widths[0]),
                Constraint::Percentage(pane_widths[1]),
                Constraint::Percentage(pane_widths[2]),
            ])
            .split(vertical[1]);

        Self {
            status_bar: vertical[0],
            artists: columns[0],
            albums: columns[1],
            tracks: columns[2],
            hint_bar: vertical[2],
        }
    }
}
