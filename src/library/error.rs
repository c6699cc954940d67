use std::path::PathBuf;

/// The library source could not be opened or enumerated.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Music folder {} does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("{} is not a folder", .0.display())]
    NotADirectory(PathBuf),
    #[error("Could not read library catalog {}: {source}", path.display())]
    ReadCatalog {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Library catalog {} is not valid: {source}", path.display())]
    ParseCatalog {
        path: PathBuf,
        source: serde_json::Error,
    },
}
