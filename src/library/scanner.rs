use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::error::LoadError;
use super::track::Track;

const AUDIO_EXTENSIONS: &[&str] = &["flac", "mp3", "m4a", "mp4", "ogg", "wav"];

fn is_audio_file(path: &Path) -> bool {
    // Skip macOS resource fork files
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if name.starts_with("._") {
            return false;
        }
    }

    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| AUDIO_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Walk `path` and read tags from every audio file below it.
///
/// Files lofty can't parse are skipped; only an unusable root is an error.
pub fn scan_directory(path: &Path) -> Result<Vec<Track>, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingDirectory(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(LoadError::NotADirectory(path.to_path_buf()));
    }

    let mut tracks = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() || !is_audio_file(path) {
            continue;
        }

        match Track::from_path(path) {
            Some(track) => tracks.push(track),
            None => debug!(path = %path.display(), "skipping unreadable audio file"),
        }
    }

    Ok(tracks)
}
