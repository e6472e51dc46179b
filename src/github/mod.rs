mod client;
mod headers;
mod release;
pub mod repository;
mod response;
pub mod tag;

pub use client::GithubClient;
pub use release::{Release, UploadedAsset};

use crate::{artifact::Artifact, config::Secret};
use async_trait::async_trait;
use repository::Repository;
use std::path::PathBuf;
use tag::Tag;
use thiserror::Error;

/// Where releases live and where their assets are uploaded to.
#[async_trait]
pub trait ReleaseStore: Send + Sync {
    async fn get_release(
        &self,
        repository: &Repository,
        tag: &Tag,
        token: &Secret,
    ) -> Result<Release, Error>;

    async fn upload_asset(
        &self,
        release: &Release,
        artifact: &Artifact,
        token: &Secret,
    ) -> Result<UploadedAsset, Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("{url} responded with {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },
    #[error("Failed to parse response")]
    ParseResponse {
        #[source]
        cause: serde_json::Error,
    },
    #[error("invalid upload url {url}")]
    UploadUrl {
        url: String,
        #[source]
        cause: url::ParseError,
    },
    #[error("cannot read {}", path.display())]
    ReadArtifact {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
    #[error("invalid api url {url}")]
    ApiUrl {
        url: String,
        #[source]
        cause: url::ParseError,
    },
    #[error("api url {url} cannot take path segments")]
    NotABaseUrl { url: String },
}
