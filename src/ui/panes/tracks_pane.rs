use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, AppAction};
use crate::ui::pane::{follow_selection, row_at, Pane};
use crate::ui::theme::Theme;

pub struct TracksPane {
    pub scroll_offset: usize,
    pub hover_row: Option<usize>,
    visible_rows: usize,
}

impl TracksPane {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            hover_row: None,
            visible_rows: 0,
        }
    }

    pub fn reset(&mut self) {
        self.scroll_offset = 0;
        self.hover_row = None;
    }
}

/// Color for each audio format extension
fn format_color(ext: &str) -> Color {
    match ext {
        "FLAC" => Color::Green,
        "M4A" | "AAC" | "MP4" | "ALAC" => Color::Cyan,
        "MP3" => Color::Yellow,
        "OGG" => Color::Magenta,
        "WAV" | "WAVE" => Color::Blue,
        _ => Color::White,
    }
}

/// Truncate a string to fit within `max_width` columns, adding "…" if needed.
/// Pads with spaces to exactly fill `max_width`.
fn fit_to_width(s: &str, max_width: usize) -> String {
    let str_width = UnicodeWidthStr::width(s);
    if str_width <= max_width {
        return format!("{}{}", s, " ".repeat(max_width - str_width));
    }
    if max_width == 0 {
        return String::new();
    }

    let mut w = 0;
    let mut result = String::new();
    for ch in s.chars() {
        let ch_w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w + ch_w + 1 > max_width {
            break;
        }
        w += ch_w;
        result.push(ch);
    }
    result.push('\u{2026}');
    w += 1;
    result.push_str(&" ".repeat(max_width.saturating_sub(w)));
    result
}

impl Pane for TracksPane {
    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, app: &App, theme: &Theme) {
        let tracks = app.view.visible_tracks();
        let count = tracks.len();
        let total = app.view.all_tracks().len();

        let title = if count == total {
            format!(" Tracks ({}) ", count)
        } else {
            format!(" Tracks ({} of {}) ", count, total)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color(focused)))
            .title(title)
            .title_style(Style::default().fg(if focused {
                theme.border_focused
            } else {
                theme.fg
            }));

        let inner = block.inner(area);
        let inner_height = inner.height as usize;
        let inner_width = inner.width as usize;
        self.visible_rows = inner_height;

        if count > 0 {
            self.scroll_offset = follow_selection(self.scroll_offset, app.track_selected, inner_height);
        } else {
            self.scroll_offset = 0;
        }

        // Column layout: title(45%) + artist(30%) + album(25%) + ext(4) + gap(1) + dur(5) + trail(1)
        let ext_col_width = 4;
        let dur_col_width = 5;
        let fixed_width = ext_col_width + 1 + dur_col_width + 1;
        let flex_total = inner_width.saturating_sub(fixed_width);
        let title_max = (flex_total * 45 / 100).max(4);
        let artist_max = (flex_total * 30 / 100).max(4);
        let album_max = flex_total.saturating_sub(title_max + artist_max).max(4);

        let items: Vec<ListItem> = tracks
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner_height)
            .map(|(i, track)| {
                let is_selected = i == app.track_selected && focused;
                let is_hovered = self.hover_row == Some(i);
                let bg = if is_hovered { theme.hover_bg } else { Color::Reset };

                let ext = track.format_label();
                let (title_style, artist_style, ext_style, dur_style) = if is_selected {
                    let sel = theme.selected_style();
                    (sel, sel, sel, sel)
                } else {
                    (
                        Style::default().fg(theme.fg).bg(bg),
                        theme.artist_style.bg(bg),
                        Style::default().fg(format_color(&ext)).bg(bg),
                        theme.dim_style.bg(bg),
                    )
                };

                // Right-align ext and duration to their columns
                let ext_padded = format!("{:>width$}", ext, width = ext_col_width);
                let dur_padded = format!("{:>width$}", track.format_duration(), width = dur_col_width);

                ListItem::new(Line::from(vec![
                    Span::styled(fit_to_width(&track.title, title_max), title_style),
                    Span::styled(fit_to_width(track.display_artist(), artist_max), artist_style),
                    Span::styled(fit_to_width(track.display_album(), album_max), artist_style),
                    Span::styled(ext_padded, ext_style),
                    Span::styled(" ", dur_style),
                    Span::styled(dur_padded, dur_style),
                    Span::styled(" ", dur_style),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);

        // Scrollbar (rendered over the right border)
        if count > inner_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None);
            let mut scrollbar_state = ScrollbarState::new(count).position(self.scroll_offset);
            frame.render_stateful_widget(
                scrollbar,
                area.inner(Margin { vertical: 1, horizontal: 0 }),
                &mut scrollbar_state,
            );
        }
    }

    fn handle_key(&mut self, key: KeyEvent, app: &App) -> Option<AppAction> {
        let count = app.view.visible_tracks().len();
        if count == 0 {
            return None;
        }
        let last = count - 1;
        let selected = app.track_selected;

        let next = match key.code {
            KeyCode::Char('j') | KeyCode::Down => (selected + 1).min(last),
            KeyCode::Char('k') | KeyCode::Up => selected.saturating_sub(1),
            KeyCode::PageDown => (selected + self.visible_rows.max(1)).min(last),
            KeyCode::PageUp => selected.saturating_sub(self.visible_rows.max(1)),
            KeyCode::Char('g') | KeyCode::Home => 0,
            KeyCode::Char('G') | KeyCode::End => last,
            _ => return None,
        };
        (next != selected).then_some(AppAction::SetTrackSelection(next))
    }

    fn handle_mouse(&mut self, event: MouseEvent, area: Rect, app: &App) -> Option<AppAction> {
        let count = app.view.visible_tracks().len();

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let clicked = self.scroll_offset + row_at(&event, area)?;
                (clicked < count).then_some(AppAction::SetTrackSelection(clicked))
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
        let count = app.view.visible_tracks().len();
        if count == 0 {
            return None;
        }
        let new_sel = if up {
            app.track_selected.saturating_sub(3)
        } else {
            (app.track_selected + 3).min(count - 1)
        };
        Some(AppAction::SetTrackSelection(new_sel))
    }
}
