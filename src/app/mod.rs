pub mod handler;
pub mod state;

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::library::track::Track;
use crate::library::view::LibraryView;
use crate::library::LibrarySource;
use state::*;

#[derive(Debug, Clone)]
pub enum AppAction {
    Quit,
    FocusNext,
    FocusPrev,
    FocusPane(FocusedPane),
    BeginReload,
    LibraryLoaded(Vec<Track>),
    LibraryFailed(String),
    DismissError,
    SelectArtists(BTreeSet<String>),
    SelectAlbums(BTreeSet<String>),
    SetTrackSelection(usize),
}

pub struct App {
    pub should_quit: bool,
    pub focus: FocusedPane,
    pub view: LibraryView,
    pub source: LibrarySource,
    pub status: LoadStatus,
    /// Load failure waiting to be acknowledged in the error modal
    pub error_message: Option<String>,
    /// Cursor into `view.visible_tracks()`
    pub track_selected: usize,
    /// Set when a load should be started; the main loop owns the worker thread
    pub reload_requested: bool,
    /// Set whenever the library contents were replaced
    pub library_just_loaded: bool,
}

impl App {
    pub fn new(source: LibrarySource) -> Self {
        Self {
            should_quit: false,
            focus: FocusedPane::Artists,
            view: LibraryView::new(),
            source,
            status: LoadStatus::Loading,
            error_message: None,
            track_selected: 0,
            reload_requested: false,
            library_just_loaded: false,
        }
    }

    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::FocusNext => {
                self.focus = self.focus.next();
            }
            AppAction::FocusPrev => {
                self.focus = self.focus.prev();
            }
            AppAction::FocusPane(pane) => {
                self.focus = pane;
            }
            AppAction::BeginReload => {
                if self.status != LoadStatus::Loading {
                    self.status = LoadStatus::Loading;
                    self.reload_requested = true;
                }
            }
            AppAction::LibraryLoaded(tracks) => {
                info!(tracks = tracks.len(), "library ready");
                self.view.load(tracks);
                self.status = LoadStatus::Ready;
                self.error_message = None;
                self.track_selected = 0;
                self.library_just_loaded = true;
            }
            AppAction::LibraryFailed(message) => {
                // Keep whatever was loaded before; never expose a partial library
                warn!("keeping previous library after failed load");
                self.status = LoadStatus::Failed(message.clone());
                self.error_message = Some(message);
            }
            AppAction::DismissError => {
                self.error_message = None;
            }
            AppAction::SelectArtists(names) => {
                self.view.set_selected_artists(names);
                self.track_selected = 0;
            }
            AppAction::SelectAlbums(names) => {
                self.view.set_selected_albums(names);
                self.track_selected = 0;
            }
            AppAction::SetTrackSelection(idx) => {
                if idx < self.view.visible_tracks().len() {
                    self.track_selected = idx;
                }
            }
        }
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.view.visible_tracks().get(self.track_selected)
    }

    /// Window-title style summary: `"<N> tracks"` over the whole library.
    pub fn title(&self) -> String {
        let n = self.view.all_tracks().len();
        if n == 1 {
            "1 track".to_string()
        } else {
            format!("{} tracks", n)
        }
    }
}
