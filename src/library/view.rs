use std::collections::BTreeSet;

use tracing::debug;

use super::track::{Track, TrackField};
use super::unique_values;

/// Artist/album faceted view over a loaded library.
///
/// `visible_tracks` always holds exactly the tracks of `all_tracks` that pass
/// both the artist and album filters, in display order. `album_names` is
/// derived from the artist filter alone, so narrowing artists narrows the
/// album facet but narrowing albums never touches the artist facet.
#[derive(Debug, Default)]
pub struct LibraryView {
    all_tracks: Vec<Track>,
    visible_tracks: Vec<Track>,
    artist_names: BTreeSet<String>,
    album_names: BTreeSet<String>,
    selected_artists: BTreeSet<String>,
    selected_albums: BTreeSet<String>,
}

impl LibraryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the library contents and reset both selections.
    pub fn load(&mut self, mut tracks: Vec<Track>) {
        tracks.sort_by(Track::display_cmp);
        self.all_tracks = tracks;
        self.selected_artists.clear();
        self.selected_albums.clear();
        self.artist_names = unique_values(&self.all_tracks, TrackField::Artist);
        self.album_names = unique_values(&self.all_tracks, TrackField::Album);
        self.visible_tracks = self.all_tracks.clone();
    }

    /// Filter by artist and rebuild the album facet from the artist subset.
    ///
    /// The album selection is kept even if none of its names remain in the
    /// new facet. Any index into `visible_tracks` held before this call is
    /// invalid afterwards.
    pub fn set_selected_artists(&mut self, names: BTreeSet<String>) {
        debug!(artists = names.len(), "artist selection changed");
        self.selected_artists = names;
        let by_artist: Vec<&Track> = self
            .all_tracks
            .iter()
            .filter(|t| self.matches_artist(t))
            .collect();
        self.album_names = unique_values(by_artist.iter().copied(), TrackField::Album);
        self.refilter();
    }

    pub fn set_selected_albums(&mut self, names: BTreeSet<String>) {
        debug!(albums = names.len(), "album selection changed");
        self.selected_albums = names;
        self.refilter();
    }

    fn refilter(&mut self) {
        // all_tracks is kept sorted, so the filtered subset is too
        self.visible_tracks = self
            .all_tracks
            .iter()
            .filter(|t| self.matches_artist(t))
            .filter(|t| self.matches_album(t))
            .cloned()
            .collect();
    }

    fn matches_artist(&self, track: &Track) -> bool {
        self.selected_artists.is_empty() || self.selected_artists.contains(&track.artist)
    }

    fn matches_album(&self, track: &Track) -> bool {
        self.selected_albums.is_empty() || self.selected_albums.contains(&track.album)
    }

    pub fn all_tracks(&self) -> &[Track] {
        &self.all_tracks
    }

    pub fn visible_tracks(&self) -> &[Track] {
        &self.visible_tracks
    }

    pub fn artist_names(&self) -> &BTreeSet<String> {
        &self.artist_names
    }

    pub fn album_names(&self) -> &BTreeSet<String> {
        &self.album_names
    }

    pub fn selected_artists(&self) -> &BTreeSet<String> {
        &self.selected_artists
    }

    pub fn selected_albums(&self) -> &BTreeSet<String> {
        &self.selected_albums
    }

    /// Selected albums that are no longer offered by the album facet.
    pub fn stale_album_selections(&self) -> usize {
        self.selected_albums
            .iter()
            .filter(|a| !self.album_names.contains(*a))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn titles(view: &LibraryView) -> Vec<&str> {
        view.visible_tracks().iter().map(|t| t.title.as_str()).collect()
    }

    fn scenario_a() -> LibraryView {
        let mut view = LibraryView::new();
        view.load(vec![
            Track::new("Speed of Life", "Bowie", "Low"),
            Track::new("Breaking Glass", "Bowie", "Low"),
            Track::new("Beach", "Eno", "Apollo"),
        ]);
        view
    }

    fn larger_library() -> Vec<Track> {
        vec![
            Track::new("Heroes", "Bowie", "Heroes"),
            Track::new("Sons of the Silent Age", "Bowie", "Heroes"),
            Track::new("Warszawa", "Bowie", "Low"),
            Track::new("An Ending", "Eno", "Apollo"),
            Track::new("1/1", "Eno", "Music for Airports"),
            Track::new("Low", "Eno", "Low"),
            Track::new("Untitled", "", ""),
            Track::new("Neon Lights", "Kraftwerk", "The Man-Machine"),
        ]
    }

    #[test]
    fn scenario_a_initial_load() {
        let view = scenario_a();
        assert_eq!(*view.artist_names(), set(&["Bowie", "Eno"]));
        assert_eq!(*view.album_names(), set(&["Apollo", "Low"]));
        assert_eq!(titles(&view), ["Breaking Glass", "Speed of Life", "Beach"]);
    }

    #[test]
    fn scenario_b_select_one_artist() {
        let mut view = scenario_a();
        view.set_selected_artists(set(&["Eno"]));
        assert_eq!(*view.album_names(), set(&["Apollo"]));
        assert_eq!(titles(&view), ["Beach"]);
    }

    #[test]
    fn scenario_c_clear_artist_selection() {
        let mut view = scenario_a();
        view.set_selected_artists(set(&["Eno"]));
        view.set_selected_artists(BTreeSet::new());
        assert_eq!(*view.album_names(), set(&["Apollo", "Low"]));
        assert!(view.selected_albums().is_empty());
        assert_eq!(titles(&view), ["Breaking Glass", "Speed of Life", "Beach"]);
    }

    #[test]
    fn scenario_d_empty_library() {
        let mut view = LibraryView::new();
        view.load(Vec::new());
        assert!(view.artist_names().is_empty());
        assert!(view.album_names().is_empty());
        assert!(view.visible_tracks().is_empty());
        view.set_selected_artists(set(&["Anyone"]));
        view.set_selected_albums(set(&["Anything"]));
        assert!(view.visible_tracks().is_empty());
    }

    #[test]
    fn facets_cover_every_non_empty_value() {
        let mut view = LibraryView::new();
        let tracks = larger_library();
        view.load(tracks.clone());
        let artists: BTreeSet<String> = tracks
            .iter()
            .filter(|t| !t.artist.is_empty())
            .map(|t| t.artist.clone())
            .collect();
        let albums: BTreeSet<String> = tracks
            .iter()
            .filter(|t| !t.album.is_empty())
            .map(|t| t.album.clone())
            .collect();
        assert_eq!(*view.artist_names(), artists);
        assert_eq!(*view.album_names(), albums);
    }

    #[test]
    fn no_filter_shows_every_track() {
        let mut view = LibraryView::new();
        view.load(larger_library());
        assert_eq!(view.visible_tracks().len(), view.all_tracks().len());
        // Untagged tracks stay visible while unfiltered
        assert!(view.visible_tracks().iter().any(|t| t.title == "Untitled"));
    }

    #[test]
    fn artist_filter_keeps_exactly_matching_tracks() {
        let mut view = LibraryView::new();
        view.load(larger_library());
        let selected = set(&["Bowie", "Kraftwerk"]);
        view.set_selected_artists(selected.clone());
        assert!(view.visible_tracks().iter().all(|t| selected.contains(&t.artist)));
        let expected = view
            .all_tracks()
            .iter()
            .filter(|t| selected.contains(&t.artist))
            .count();
        assert_eq!(view.visible_tracks().len(), expected);
    }

    #[test]
    fn album_facet_follows_artist_selection_not_album_selection() {
        let mut view = LibraryView::new();
        view.load(larger_library());
        view.set_selected_albums(set(&["Low"]));
        view.set_selected_artists(set(&["Eno"]));
        assert_eq!(*view.album_names(), set(&["Apollo", "Low", "Music for Airports"]));
        assert_eq!(titles(&view), ["Low"]);
    }

    #[test]
    fn album_selection_never_narrows_artist_facet() {
        let mut view = LibraryView::new();
        view.load(larger_library());
        let before = view.artist_names().clone();
        view.set_selected_albums(set(&["Heroes"]));
        assert_eq!(*view.artist_names(), before);
        assert_eq!(titles(&view), ["Heroes", "Sons of the Silent Age"]);
    }

    #[test]
    fn both_filters_apply_together() {
        let mut view = LibraryView::new();
        view.load(larger_library());
        view.set_selected_artists(set(&["Bowie", "Eno"]));
        view.set_selected_albums(set(&["Low"]));
        assert_eq!(titles(&view), ["Warszawa", "Low"]);
    }

    #[test]
    fn stale_album_selection_survives_artist_change() {
        let mut view = LibraryView::new();
        view.load(larger_library());
        view.set_selected_albums(set(&["Heroes"]));
        view.set_selected_artists(set(&["Eno"]));
        assert_eq!(*view.selected_albums(), set(&["Heroes"]));
        assert_eq!(view.stale_album_selections(), 1);
        assert!(view.visible_tracks().is_empty());
    }

    #[test]
    fn visible_tracks_stay_sorted() {
        let mut view = LibraryView::new();
        view.load(larger_library());
        let sorted = |v: &LibraryView| {
            v.visible_tracks()
                .windows(2)
                .all(|w| w[0].display_cmp(&w[1]).is_le())
        };
        assert!(sorted(&view));
        view.set_selected_artists(set(&["Eno", "Bowie"]));
        assert!(sorted(&view));
        view.set_selected_albums(set(&["Low", "Apollo"]));
        assert!(sorted(&view));
    }

    #[test]
    fn reselecting_same_artists_is_idempotent() {
        let mut view = LibraryView::new();
        view.load(larger_library());
        view.set_selected_artists(set(&["Bowie"]));
        let tracks = view.visible_tracks().to_vec();
        let albums = view.album_names().clone();
        view.set_selected_artists(set(&["Bowie"]));
        assert_eq!(view.visible_tracks(), tracks.as_slice());
        assert_eq!(*view.album_names(), albums);
    }

    #[test]
    fn selection_matching_nothing_yields_empty_view() {
        let mut view = scenario_a();
        view.set_selected_artists(set(&["Nobody"]));
        assert!(view.visible_tracks().is_empty());
        assert!(view.album_names().is_empty());
    }

    #[test]
    fn reload_resets_selections() {
        let mut view = scenario_a();
        view.set_selected_artists(set(&["Eno"]));
        view.set_selected_albums(set(&["Apollo"]));
        view.load(larger_library());
        assert!(view.selected_artists().is_empty());
        assert!(view.selected_albums().is_empty());
        assert_eq!(view.visible_tracks().len(), 8);
    }
}
