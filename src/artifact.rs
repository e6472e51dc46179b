use glob::glob;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid artifact pattern {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        cause: glob::PatternError,
    },
    #[error("cannot read artifact entry")]
    Entry {
        #[source]
        cause: glob::GlobError,
    },
    #[error("cannot read metadata of {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}

/// A locally built package waiting to be published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl Artifact {
    pub fn new(path: impl AsRef<Path>, size: u64) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Artifact { name, path, size }
    }
}

/// Lists the regular files in `dir` ending in `.extension`, in the order glob
/// yields them (sorted by path). A missing directory yields nothing.
pub fn find(dir: &Path, extension: &str) -> Result<Vec<Artifact>, Error> {
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        extension
    );
    log::debug!("looking for artifacts matching {}", pattern);

    let paths = glob(&pattern).map_err(|cause| Error::Pattern {
        pattern: pattern.clone(),
        cause,
    })?;

    let mut artifacts = vec![];
    for entry in paths {
        let path = entry.map_err(|cause| Error::Entry { cause })?;
        let metadata = path.metadata().map_err(|cause| Error::Metadata {
            path: path.to_owned(),
            cause,
        })?;

        if metadata.is_file() {
            artifacts.push(Artifact::new(path, metadata.len()));
        }
    }

    Ok(artifacts)
}
