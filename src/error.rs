use crate::{artifact, github};
use std::{fmt, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    GithubRelease,
    NuGet,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::GithubRelease => f.write_str("GitHub release"),
            Destination::NuGet => f.write_str("NuGet"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("cannot find release {tag} in {repository}")]
    NotFound {
        tag: String,
        repository: String,
        #[source]
        cause: github::Error,
    },
    #[error("cannot find any artifacts to publish in {}", dir.display())]
    NoArtifacts { dir: PathBuf },
    #[error("cannot list artifacts")]
    Discovery(#[from] artifact::Error),
    #[error("failed to upload {name} to {destination}")]
    Upload {
        name: String,
        destination: Destination,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
}
