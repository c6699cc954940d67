use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::state::FocusedPane;
use crate::app::{App, AppAction};
use crate::ui::layout::LayoutAreas;
use crate::ui::pane::Pane;
use crate::ui::Ui;

pub fn handle_key_event(key: KeyEvent, app: &App, ui: &mut Ui) -> Vec<AppAction> {
    let mut actions = Vec::new();

    // Error modal blocks everything except dismiss, retry and quit
    if app.error_message.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => actions.push(AppAction::DismissError),
            KeyCode::Char('R') => {
                actions.push(AppAction::DismissError);
                actions.push(AppAction::BeginReload);
            }
            KeyCode::Char('q') => actions.push(AppAction::Quit),
            _ => {}
        }
        return actions;
    }

    // Help modal: Esc to close
    if ui.show_help_modal {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
            ui.show_help_modal = false;
        }
        return actions;
    }

    // Global keybindings first
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            actions.push(AppAction::Quit);
            return actions;
        }
        (_, KeyCode::Char('?')) => {
            ui.show_help_modal = true;
            return actions;
        }
        (_, KeyCode::Char('R')) => {
            actions.push(AppAction::BeginReload);
            return actions;
        }
        (_, KeyCode::Tab) => {
            actions.push(AppAction::FocusNext);
            return actions;
        }
        (_, KeyCode::BackTab) => {
            actions.push(AppAction::FocusPrev);
            return actions;
        }
        (_, KeyCode::Char('1')) => {
            actions.push(AppAction::FocusPane(FocusedPane::Artists));
            return actions;
        }
        (_, KeyCode::Char('2')) => {
            actions.push(AppAction::FocusPane(FocusedPane::Albums));
            return actions;
        }
        (_, KeyCode::Char('3')) => {
            actions.push(AppAction::FocusPane(FocusedPane::Tracks));
            return actions;
        }
        _ => {}
    }

    let pane_action = match app.focus {
        FocusedPane::Artists => ui.artists_pane.handle_key(key, app),
        FocusedPane::Albums => ui.albums_pane.handle_key(key, app),
        FocusedPane::Tracks => ui.tracks_pane.handle_key(key, app),
    };
    actions.extend(pane_action);
    actions
}

pub fn handle_mouse_event(mouse: MouseEvent, app: &App, ui: &mut Ui, area: Rect) -> Vec<AppAction> {
    let mut actions = Vec::new();

    if app.error_message.is_some() || ui.show_help_modal {
        return actions;
    }

    let areas = LayoutAreas::compute(area, ui.pane_widths);
    let Some((pane, pane_area)) = pane_at(&areas, mouse.column, mouse.row) else {
        return actions;
    };

    if matches!(mouse.kind, MouseEventKind::Down(_)) && app.focus != pane {
        actions.push(AppAction::FocusPane(pane));
    }

    // Hover is tracked only in the pane under the mouse
    if matches!(mouse.kind, MouseEventKind::Moved) {
        ui.artists_pane.hover_row = None;
        ui.albums_pane.hover_row = None;
        ui.tracks_pane.hover_row = None;
    }

    let pane_action = match pane {
        FocusedPane::Artists => ui.artists_pane.handle_mouse(mouse, pane_area, app),
        FocusedPane::Albums => ui.albums_pane.handle_mouse(mouse, pane_area, app),
        FocusedPane::Tracks => ui.tracks_pane.handle_mouse(mouse, pane_area, app),
    };
    actions.extend(pane_action);
    actions
}

fn pane_at(areas: &LayoutAreas, column: u16, row: u16) -> Option<(FocusedPane, Rect)> {
    let hit = |r: Rect| column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height;
    [
        (FocusedPane::Artists, areas.artists),
        (FocusedPane::Albums, areas.albums),
        (FocusedPane::Tracks, areas.tracks),
    ]
    .into_iter()
    .find(|(_, r)| hit(*r))
}
