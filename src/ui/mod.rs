pub mod layout;
pub mod pane;
pub mod panes;
pub mod theme;
pub mod widgets;

use ratatui::Frame;

use crate::app::state::FocusedPane;
use crate::app::App;
use layout::LayoutAreas;
use pane::Pane;
use panes::facet_pane::{FacetKind, FacetPane};
use panes::tracks_pane::TracksPane;
use theme::Theme;
use widgets::{error_modal, help_modal, hint_bar, status_bar};

pub struct Ui {
    pub theme: Theme,
    pub artists_pane: FacetPane,
    pub albums_pane: FacetPane,
    pub tracks_pane: TracksPane,
    /// Pane width percentages [Artists, Albums, Tracks], sum = 100
    pub pane_widths: [u16; 3],
    /// Help modal visible
    pub show_help_modal: bool,
    /// Advanced by tick events; drives the loading spinner
    pub tick: usize,
}

impl Ui {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            artists_pane: FacetPane::new(FacetKind::Artists),
            albums_pane: FacetPane::new(FacetKind::Albums),
            tracks_pane: TracksPane::new(),
            pane_widths: [22, 28, 50],
            show_help_modal: false,
            tick: 0,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, app: &App) {
        let areas = LayoutAreas::compute(frame.area(), self.pane_widths);

        status_bar::render_status_bar(frame, areas.status_bar, app, &self.theme, self.tick);

        self.artists_pane.render(
            frame,
            areas.artists,
            app.focus == FocusedPane::Artists,
            app,
            &self.theme,
        );
        self.albums_pane.render(
            frame,
            areas.albums,
            app.focus == FocusedPane::Albums,
            app,
            &self.theme,
        );
        self.tracks_pane.render(
            frame,
            areas.tracks,
            app.focus == FocusedPane::Tracks,
            app,
            &self.theme,
        );

        hint_bar::render_hint_bar(frame, areas.hint_bar, &self.theme);

        // Modal overlays (rendered last, on top of everything)
        if self.show_help_modal {
            help_modal::render_help_modal(frame, frame.area(), &self.theme);
        }

        if let Some(message) = &app.error_message {
            error_modal::render_error_modal(frame, frame.area(), message, &self.theme);
        }
    }

    /// Bring pane cursors back inside the current facets and track list.
    pub fn clamp_selections(&mut self, app: &App) {
        self.artists_pane.clamp(app.view.artist_names().len());
        self.albums_pane.clamp(app.view.album_names().len());
        if app.view.visible_tracks().is_empty() {
            self.tracks_pane.reset();
        }
    }

    /// Forget cursors and scroll positions; used after the library is replaced.
    pub fn reset_panes(&mut self) {
        self.artists_pane.reset();
        self.albums_pane.reset();
        self.tracks_pane.reset();
    }
}
