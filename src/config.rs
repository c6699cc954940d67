//! Command-line and environment configuration.
//!
//! Every option can come from a flag or an environment variable; flags win.
//! With neither, the library is read from `$HOME/Music`.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::library::LibrarySource;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "medialib", version, about = "Browse a local media library by artist and album")]
pub struct Cli {
    /// Folder of audio files to load [env: MEDIALIB_DIR]
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// JSON export of a media database to load instead of a folder [env: MEDIALIB_CATALOG]
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `medialib=trace`
    #[arg(long, value_name = "LEVEL", env = "MEDIALIB_LOG")]
    pub log_level: Option<String>,
}

/// Library source taken from the environment. Only consulted when neither
/// `--dir` nor `--catalog` is given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceEnv {
    pub dir: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
}

impl SourceEnv {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            dir: var("MEDIALIB_DIR"),
            catalog: var("MEDIALIB_CATALOG"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a music folder ({}) and a catalog ({}) can't be used together", dir.display(), catalog.display())]
    ConflictingSources { dir: PathBuf, catalog: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: LibrarySource,
    pub log_filter: String,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let cli = Cli::parse();
        Self::resolve(
            cli,
            SourceEnv::from_env(),
            std::env::var_os("HOME").map(PathBuf::from),
        )
    }

    pub fn resolve(cli: Cli, env: SourceEnv, home: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Any source flag shadows both environment variables
        let (dir, catalog) = if cli.dir.is_some() || cli.catalog.is_some() {
            (cli.dir, cli.catalog)
        } else {
            (env.dir, env.catalog)
        };
        let source = match (dir, catalog) {
            (Some(dir), Some(catalog)) => {
                return Err(ConfigError::ConflictingSources { dir, catalog });
            }
            (Some(dir), None) => LibrarySource::Directory(dir),
            (None, Some(catalog)) => LibrarySource::Catalog(catalog),
            (None, None) => LibrarySource::Directory(default_music_dir(home.as_deref())),
        };

        let log_filter = cli
            .log_level
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            source,
            log_filter,
            log_dir: log_dir(std::env::var_os("XDG_STATE_HOME").map(PathBuf::from), home),
        })
    }
}

fn default_music_dir(home: Option<&Path>) -> PathBuf {
    if let Some(home) = home {
        let music = home.join("Music");
        if music.is_dir() {
            return music;
        }
    }
    PathBuf::from(".")
}

fn log_dir(state_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(state) = state_home.filter(|p| p.is_absolute()) {
        return state.join("medialib");
    }
    match home {
        Some(home) => home.join(".local/state/medialib"),
        None => std::env::temp_dir().join("medialib"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_flag_selects_directory_source() {
        let cli = Cli::try_parse_from(["medialib", "--dir", "/srv/music"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/srv/music")));
        let config = Config::resolve(
            Cli {
                catalog: None,
                ..cli
            },
            SourceEnv::default(),
            None,
        )
        .unwrap();
        assert_eq!(config.source, LibrarySource::Directory(PathBuf::from("/srv/music")));
    }

    #[test]
    fn catalog_selects_catalog_source() {
        let cli = Cli {
            catalog: Some(PathBuf::from("/tmp/lib.json")),
            ..Cli::default()
        };
        let config = Config::resolve(cli, SourceEnv::default(), None).unwrap();
        assert_eq!(config.source, LibrarySource::Catalog(PathBuf::from("/tmp/lib.json")));
    }

    #[test]
    fn both_sources_conflict() {
        let cli = Cli {
            dir: Some(PathBuf::from("/a")),
            catalog: Some(PathBuf::from("/b.json")),
            log_level: None,
        };
        let err = Config::resolve(cli, SourceEnv::default(), None).unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingSources { .. }));
    }

    #[test]
    fn catalog_flag_beats_dir_from_environment() {
        let cli = Cli::try_parse_from(["medialib", "--catalog", "/flag/lib.json"]).unwrap();
        let env = SourceEnv {
            dir: Some(PathBuf::from("/env/music")),
            catalog: None,
        };
        let config = Config::resolve(cli, env, None).unwrap();
        assert_eq!(config.source, LibrarySource::Catalog(PathBuf::from("/flag/lib.json")));
    }

    #[test]
    fn dir_flag_beats_catalog_from_environment() {
        let cli = Cli::try_parse_from(["medialib", "--dir", "/flag/music"]).unwrap();
        let env = SourceEnv {
            dir: Some(PathBuf::from("/env/music")),
            catalog: Some(PathBuf::from("/env/lib.json")),
        };
        let config = Config::resolve(cli, env, None).unwrap();
        assert_eq!(config.source, LibrarySource::Directory(PathBuf::from("/flag/music")));
    }

    #[test]
    fn environment_source_used_without_flags() {
        let home = tempfile::tempdir().unwrap();
        std::fs::create_dir(home.path().join("Music")).unwrap();
        let env = SourceEnv {
            dir: None,
            catalog: Some(PathBuf::from("/env/lib.json")),
        };
        let config = Config::resolve(Cli::default(), env, Some(home.path().to_path_buf())).unwrap();
        assert_eq!(config.source, LibrarySource::Catalog(PathBuf::from("/env/lib.json")));
    }

    #[test]
    fn both_sources_in_environment_conflict() {
        let env = SourceEnv {
            dir: Some(PathBuf::from("/env/music")),
            catalog: Some(PathBuf::from("/env/lib.json")),
        };
        let err = Config::resolve(Cli::default(), env, None).unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingSources { .. }));
    }

    #[test]
    fn defaults_to_music_folder_under_home() {
        let home = tempfile::tempdir().unwrap();
        std::fs::create_dir(home.path().join("Music")).unwrap();
        let home_dir = Some(home.path().to_path_buf());
        let config = Config::resolve(Cli::default(), SourceEnv::default(), home_dir).unwrap();
        assert_eq!(config.source, LibrarySource::Directory(home.path().join("Music")));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn falls_back_to_current_dir_without_music_folder() {
        let home = tempfile::tempdir().unwrap();
        assert_eq!(default_music_dir(Some(home.path())), PathBuf::from("."));
        assert_eq!(default_music_dir(None), PathBuf::from("."));
    }

    #[test]
    fn blank_log_level_uses_default() {
        let cli = Cli {
            log_level: Some("  ".into()),
            ..Cli::default()
        };
        assert_eq!(Config::resolve(cli, SourceEnv::default(), None).unwrap().log_filter, "info");
    }

    #[test]
    fn log_dir_prefers_absolute_state_home() {
        assert_eq!(
            log_dir(Some(PathBuf::from("/state")), Some(PathBuf::from("/home/u"))),
            PathBuf::from("/state/medialib")
        );
        assert_eq!(
            log_dir(Some(PathBuf::from("relative")), Some(PathBuf::from("/home/u"))),
            PathBuf::from("/home/u/.local/state/medialib")
        );
    }
}
