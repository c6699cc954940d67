use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{App, AppAction};
use crate::ui::theme::Theme;

pub trait Pane {
    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, app: &App, theme: &Theme);
    fn handle_key(&mut self, key: KeyEvent, app: &App) -> Option<AppAction>;
    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, app: &App) -> Option<AppAction>;
    fn handle_scroll(&mut self, _up: bool, _app: &App) -> Option<AppAction> {
        None
    }
}

/// Row under the mouse, counted from the first visible row inside the border.
pub fn row_at(event: &MouseEvent, area: Rect) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if event.column >= inner.x
        && event.column < inner.x + inner.width
        && event.row >= inner.y
        && event.row < inner.y + inner.height
    {
        Some((event.row - inner.y) as usize)
    } else {
        None
    }
}

/// Scroll offset that keeps `selected` inside a window of `height` rows.
pub fn follow_selection(scroll_offset: usize, selected: usize, height: usize) -> usize {
    if selected < scroll_offset {
        selected
    } else if height > 0 && selected >= scroll_offset + height {
        selected + 1 - height
    } else {
        scroll_offset
    }
}
