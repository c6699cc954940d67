pub mod catalog;
pub mod error;
pub mod loader;
pub mod scanner;
pub mod track;
pub mod view;

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use tracing::{error, info};

use error::LoadError;
use track::{Track, TrackField};

/// Where the full track list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibrarySource {
    /// A folder of audio files, tags read from each file.
    Directory(PathBuf),
    /// A JSON export of a media database.
    Catalog(PathBuf),
}

impl fmt::Display for LibrarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibrarySource::Directory(p) => write!(f, "{}", p.display()),
            LibrarySource::Catalog(p) => write!(f, "catalog {}", p.display()),
        }
    }
}

/// Load every track from `source`. Blocking; run it off the UI thread.
pub fn fetch_all_tracks(source: &LibrarySource) -> Result<Vec<Track>, LoadError> {
    let started = Instant::now();
    info!(%source, "loading library");

    let result = match source {
        LibrarySource::Directory(path) => scanner::scan_directory(path),
        LibrarySource::Catalog(path) => catalog::read_catalog(path),
    };

    match &result {
        Ok(tracks) => info!(
            tracks = tracks.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "library loaded"
        ),
        Err(e) => error!(%source, "library load failed: {e}"),
    }
    result
}

/// Distinct non-empty values of `field` across `tracks`, sorted ascending.
///
/// Tracks with an empty value contribute nothing to the set.
pub fn unique_values<'a, I>(tracks: I, field: TrackField) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Track>,
{
    let mut set = BTreeSet::new();
    for t in tracks {
        let value = field.get(t);
        if !value.is_empty() && !set.contains(value) {
            set.insert(value.to_string());
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_values_drops_duplicates_and_empties() {
        let tracks = vec![
            Track::new("a", "Bowie", "Low"),
            Track::new("b", "Bowie", "Heroes"),
            Track::new("c", "", "Low"),
            Track::new("d", "Eno", ""),
        ];
        let artists: Vec<String> = unique_values(&tracks, TrackField::Artist).into_iter().collect();
        let albums: Vec<String> = unique_values(&tracks, TrackField::Album).into_iter().collect();
        assert_eq!(artists, ["Bowie", "Eno"]);
        assert_eq!(albums, ["Heroes", "Low"]);
    }

    #[test]
    fn unique_values_of_nothing_is_empty() {
        assert!(unique_values(&Vec::<Track>::new(), TrackField::Album).is_empty());
    }

    #[test]
    fn fetch_reads_a_catalog_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, r#"[{"title": "Beach", "artist": "Eno", "album": "Apollo"}]"#)
            .unwrap();
        let tracks = fetch_all_tracks(&LibrarySource::Catalog(path)).unwrap();
        assert_eq!(tracks, vec![Track::new("Beach", "Eno", "Apollo")]);
    }

    #[test]
    fn fetch_propagates_source_errors() {
        let dir = tempfile::tempdir().unwrap();
        let source = LibrarySource::Directory(dir.path().join("gone"));
        let err = fetch_all_tracks(&source).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn source_display_names_the_kind() {
        let dir = LibrarySource::Directory(PathBuf::from("/music"));
        let cat = LibrarySource::Catalog(PathBuf::from("/lib.json"));
        assert_eq!(dir.to_string(), "/music");
        assert_eq!(cat.to_string(), "catalog /lib.json");
    }
}
