//! JSON export of a media database: an array of track records.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::LoadError;
use super::track::{self, Track};

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    album: String,
    #[serde(default)]
    album_artist: String,
    #[serde(default)]
    genre: String,
    track_number: Option<u32>,
    duration_secs: Option<f64>,
    location: Option<PathBuf>,
}

impl From<CatalogEntry> for Track {
    fn from(entry: CatalogEntry) -> Self {
        let title = match (&entry.location, entry.title.is_empty()) {
            (Some(location), true) => track::title_from_stem(location),
            _ => entry.title,
        };
        Track {
            path: entry.location,
            title,
            artist: entry.artist,
            album: entry.album,
            album_artist: entry.album_artist,
            genre: entry.genre,
            track_number: entry.track_number,
            duration: entry
                .duration_secs
                .filter(|s| s.is_finite() && *s >= 0.0)
                .map(Duration::from_secs_f64),
        }
    }
}

pub fn parse_catalog(json: &str) -> Result<Vec<Track>, serde_json::Error> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    Ok(entries.into_iter().map(Track::from).collect())
}

pub fn read_catalog(path: &Path) -> Result<Vec<Track>, LoadError> {
    let data = fs::read_to_string(path).map_err(|source| LoadError::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&data).map_err(|source| LoadError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_and_ignores_unknown_fields() {
        let json = r#"[
            {"title": "Beach", "artist": "Eno", "album": "Apollo", "rating": 5,
             "track_number": 3, "duration_secs": 221.5},
            {"title": "Speed of Life", "artist": "Bowie", "album": "Low"}
        ]"#;
        let tracks = parse_catalog(json).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].artist, "Eno");
        assert_eq!(tracks[0].track_number, Some(3));
        assert_eq!(tracks[0].duration, Some(Duration::from_millis(221_500)));
        assert_eq!(tracks[1].duration, None);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let tracks = parse_catalog(r#"[{"title": "Loose"}]"#).unwrap();
        assert_eq!(tracks[0].artist, "");
        assert_eq!(tracks[0].album, "");
    }

    #[test]
    fn untitled_entries_take_the_file_stem() {
        let tracks = parse_catalog(r#"[{"location": "/music/07 Outro.mp3"}]"#).unwrap();
        assert_eq!(tracks[0].title, "07 Outro");
    }

    #[test]
    fn negative_durations_are_dropped() {
        let tracks = parse_catalog(r#"[{"title": "x", "duration_secs": -1}]"#).unwrap();
        assert_eq!(tracks[0].duration, None);
    }

    #[test]
    fn unreadable_catalog_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_catalog(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LoadError::ReadCatalog { .. }));
    }

    #[test]
    fn malformed_catalog_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_catalog(&path).unwrap_err();
        assert!(matches!(err, LoadError::ParseCatalog { .. }));
        assert!(err.to_string().starts_with("Library catalog"));
    }

    #[test]
    fn empty_catalog_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(read_catalog(&path).unwrap().is_empty());
    }
}
