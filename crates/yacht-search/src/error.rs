use std::path::PathBuf;

/// Errors surfaced by the library's file and route handling.
///
/// Nothing in the search widget itself can fail; these only come from
/// loading config/catalog files and from parsing navigation strings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml in {path}: {source}")]
    TomlDecode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode toml: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("unknown route: {0}")]
    UnknownRoute(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
