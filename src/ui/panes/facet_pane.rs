use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;

use crate::app::{App, AppAction};
use crate::ui::pane::{follow_selection, row_at, Pane};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    Artists,
    Albums,
}

impl FacetKind {
    fn names(self, app: &App) -> &BTreeSet<String> {
        match self {
            FacetKind::Artists => app.view.artist_names(),
            FacetKind::Albums => app.view.album_names(),
        }
    }

    fn chosen(self, app: &App) -> &BTreeSet<String> {
        match self {
            FacetKind::Artists => app.view.selected_artists(),
            FacetKind::Albums => app.view.selected_albums(),
        }
    }

    fn action(self, names: BTreeSet<String>) -> AppAction {
        match self {
            FacetKind::Artists => AppAction::SelectArtists(names),
            FacetKind::Albums => AppAction::SelectAlbums(names),
        }
    }

    fn label(self) -> &'static str {
        match self {
            FacetKind::Artists => "Artists",
            FacetKind::Albums => "Albums",
        }
    }
}

/// Multi-select list over one facet. The chosen names live in the library
/// view; this pane only owns the cursor and scroll position.
pub struct FacetPane {
    pub kind: FacetKind,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub hover_row: Option<usize>,
    visible_rows: usize,
}

impl FacetPane {
    pub fn new(kind: FacetKind) -> Self {
        Self {
            kind,
            cursor: 0,
            scroll_offset: 0,
            hover_row: None,
            visible_rows: 0,
        }
    }

    /// Keep the cursor inside a facet that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
        } else {
            self.cursor = self.cursor.min(len - 1);
            self.scroll_offset = self.scroll_offset.min(len - 1);
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
        self.hover_row = None;
    }

    fn toggle(&self, app: &App, idx: usize) -> Option<AppAction> {
        let name = self.kind.names(app).iter().nth(idx)?;
        let mut chosen = self.kind.chosen(app).clone();
        if !chosen.remove(name) {
            chosen.insert(name.clone());
        }
        Some(self.kind.action(chosen))
    }

    fn title(&self, app: &App) -> String {
        let count = self.kind.names(app).len();
        let chosen = self.kind.chosen(app).len();
        let hidden = match self.kind {
            FacetKind::Albums => app.view.stale_album_selections(),
            FacetKind::Artists => 0,
        };
        let mut title = format!(" {} ({})", self.kind.label(), count);
        if chosen > 0 {
            title.push_str(&format!(" \u{00B7} {} selected", chosen));
        }
        if hidden > 0 {
            title.push_str(&format!(", {} hidden", hidden));
        }
        title.push(' ');
        title
    }
}

impl Pane for FacetPane {
    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, app: &App, theme: &Theme) {
        let names = self.kind.names(app);
        let chosen = self.kind.chosen(app);
        let count = names.len();
        self.clamp(count);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color(focused)))
            .title(self.title(app))
            .title_style(Style::default().fg(if focused {
                theme.border_focused
            } else {
                theme.fg
            }));

        let inner_height = block.inner(area).height as usize;
        self.visible_rows = inner_height;
        self.scroll_offset = follow_selection(self.scroll_offset, self.cursor, inner_height);

        let items: Vec<ListItem> = names
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner_height)
            .map(|(i, name)| {
                let is_marked = chosen.contains(name);
                let marker = if is_marked { "\u{25CF} " } else { "  " };
                let style = if i == self.cursor && focused {
                    theme.selected_style()
                } else if is_marked {
                    theme.marked_style
                } else if self.hover_row == Some(i) {
                    Style::default().fg(theme.fg).bg(theme.hover_bg)
                } else {
                    Style::default().fg(theme.fg)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(name.as_str(), style),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);

        if count > inner_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None);
            let mut state = ScrollbarState::new(count).position(self.scroll_offset);
            frame.render_stateful_widget(
                scrollbar,
                area.inner(Margin { vertical: 1, horizontal: 0 }),
                &mut state,
            );
        }
    }

    fn handle_key(&mut self, key: KeyEvent, app: &App) -> Option<AppAction> {
        let count = self.kind.names(app).len();
        let chosen = self.kind.chosen(app);

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.cursor + 1 < count {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                let step = self.visible_rows.max(1);
                self.cursor = (self.cursor + step).min(count.saturating_sub(1));
                None
            }
            KeyCode::PageUp => {
                self.cursor = self.cursor.saturating_sub(self.visible_rows.max(1));
                None
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.cursor = count.saturating_sub(1);
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle(app, self.cursor),
            KeyCode::Char('a') => {
                let all = self.kind.names(app);
                if count == 0 || all.iter().all(|n| chosen.contains(n)) {
                    return None;
                }
                let mut names = chosen.clone();
                names.extend(all.iter().cloned());
                Some(self.kind.action(names))
            }
            KeyCode::Char('c') | KeyCode::Esc => {
                if chosen.is_empty() {
                    None
                } else {
                    Some(self.kind.action(BTreeSet::new()))
                }
            }
            _ => None,
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, app: &App) -> Option<AppAction> {
        let count = self.kind.names(app).len();

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let clicked = self.scroll_offset + row_at(&event, area)?;
                if clicked < count {
                    self.cursor = clicked;
                    return self.toggle(app, clicked);
                }
                None
            }
            MouseEventKind::Moved => {
                self.hover_row = row_at(&event, area)
                    .map(|r| self.scroll_offset + r)
                    .filter(|&r| r < count);
                None
            }
            MouseEventKind::ScrollDown => self.handle_scroll(false, app),
            MouseEventKind::ScrollUp => self.handle_scroll(true, app),
            _ => None,
        }
    }

    fn handle_scroll(&mut self, up: bool, app: &App) -> Option<AppAction> {
        let count = self.kind.names(app).len();
        if count == 0 {
            return None;
        }
        if up {
            self.cursor = self.cursor.saturating_sub(3);
        } else {
            self.cursor = (self.cursor + 3).min(count - 1);
        }
        None
    }
}
