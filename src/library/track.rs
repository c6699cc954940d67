use lofty::file::AudioFile;
use lofty::prelude::*;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One media item's metadata. Built once by a loader and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Track {
    pub path: Option<PathBuf>,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_artist: String,
    pub genre: String,
    pub track_number: Option<u32>,
    pub duration: Option<Duration>,
}

/// The two fields a facet can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackField {
    Artist,
    Album,
}

impl TrackField {
    pub fn get(self, track: &Track) -> &str {
        match self {
            TrackField::Artist => &track.artist,
            TrackField::Album => &track.album,
        }
    }
}

impl Track {
    #[cfg(test)]
    pub fn new(title: &str, artist: &str, album: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            ..Self::default()
        }
    }

    /// Read tags from an audio file. Returns `None` when lofty can't parse it.
    pub fn from_path(path: &Path) -> Option<Self> {
        let tagged_file = lofty::read_from_path(path).ok()?;

        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag());

        let duration = tagged_file.properties().duration();

        let (title, artist, album, album_artist, genre, track_number) = if let Some(tag) = tag {
            let title_str: String = tag.title().map(|s| s.to_string()).unwrap_or_default();
            let artist_str: String = tag.artist().map(|s| s.to_string()).unwrap_or_default();
            let album_str: String = tag.album().map(|s| s.to_string()).unwrap_or_default();
            let aa_str: String = tag
                .get_string(&ItemKey::AlbumArtist)
                .map(|s| s.to_string())
                .unwrap_or_default();
            let genre_str: String = tag.genre().map(|s| s.to_string()).unwrap_or_default();
            (title_str, artist_str, album_str, aa_str, genre_str, tag.track())
        } else {
            (String::new(), String::new(), String::new(), String::new(), String::new(), None)
        };

        let title = if title.is_empty() {
            title_from_stem(path)
        } else {
            title
        };

        Some(Self {
            path: Some(path.to_path_buf()),
            title,
            artist,
            album,
            album_artist,
            genre,
            track_number,
            duration: Some(duration),
        })
    }

    /// Display order for track lists: artist, then album, then title.
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        self.artist
            .cmp(&other.artist)
            .then_with(|| self.album.cmp(&other.album))
            .then_with(|| self.title.cmp(&other.title))
    }

    pub fn display_artist(&self) -> &str {
        if self.artist.is_empty() {
            "Unknown Artist"
        } else {
            &self.artist
        }
    }

    pub fn display_album(&self) -> &str {
        if self.album.is_empty() {
            "Unknown Album"
        } else {
            &self.album
        }
    }

    /// Upper-cased file extension, empty for catalog entries without a location.
    pub fn format_label(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(|e| e.to_uppercase())
            .unwrap_or_default()
    }

    /// One-line description with track number, album artist and genre when present.
    pub fn summary(&self) -> String {
        let mut s = match self.track_number {
            Some(n) => format!("{:02}. {}", n, self.title),
            None => self.title.clone(),
        };
        let artist = if self.album_artist.is_empty() || self.album_artist == self.artist {
            self.display_artist().to_string()
        } else {
            format!("{} ({})", self.display_artist(), self.album_artist)
        };
        s.push_str(&format!(" - {} \u{00B7} {}", artist, self.display_album()));
        if !self.genre.is_empty() {
            s.push_str(&format!(" [{}]", self.genre));
        }
        s
    }

    pub fn format_duration(&self) -> String {
        match self.duration {
            Some(d) => {
                let secs = d.as_secs();
                format!("{}:{:02}", secs / 60, secs % 60)
            }
            None => "--:--".to_string(),
        }
    }
}

pub(crate) fn title_from_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}
