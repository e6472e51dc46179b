use super::{
    headers::{Headers, ResponseHandler},
    release::{Release, UploadedAsset},
    repository::Repository,
    response::{AssetResponse, ReleaseResponse},
    tag::Tag,
    Error, ReleaseStore,
};
use crate::{artifact::Artifact, checksum::Checksum, config::Secret};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use url::Url;

/// GitHub REST client for release lookups and asset uploads.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    api_url: Url,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>) -> Result<Self, Error> {
        let api_url = api_url.into();
        let parsed = Url::parse(&api_url).map_err(|cause| Error::ApiUrl {
            url: api_url.to_owned(),
            cause,
        })?;

        if parsed.cannot_be_a_base() {
            return Err(Error::NotABaseUrl { url: api_url });
        }

        Ok(GithubClient {
            client: Client::new(),
            api_url: parsed,
        })
    }

    /// `segments` appended to the api url, each one percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.api_url.to_owned();
        url.path_segments_mut()
            .map_err(|_| Error::NotABaseUrl {
                url: self.api_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

#[async_trait]
impl ReleaseStore for GithubClient {
    async fn get_release(
        &self,
        repository: &Repository,
        tag: &Tag,
        token: &Secret,
    ) -> Result<Release, Error> {
        let uri = self
            .endpoint(&[
                "repos",
                &repository.owner,
                &repository.name,
                "releases",
                "tags",
                tag.value(),
            ])?
            .to_string();
        log::debug!("fetching release from {}", uri);

        let response = self
            .client
            .get(&uri)
            .default_headers(token)
            .send()
            .await
            .handle(&uri)
            .await?;

        let release = serde_json::from_str::<ReleaseResponse>(&response)
            .map_err(|cause| Error::ParseResponse { cause })?;

        Ok(Release::new(
            release.id,
            repository.to_owned(),
            tag.to_owned(),
            release.upload_url,
        ))
    }

    async fn upload_asset(
        &self,
        release: &Release,
        artifact: &Artifact,
        token: &Secret,
    ) -> Result<UploadedAsset, Error> {
        let content = tokio::fs::read(&artifact.path)
            .await
            .map_err(|cause| Error::ReadArtifact {
                path: artifact.path.to_owned(),
                cause,
            })?;
        let checksum = Checksum::of_bytes(&content);

        let uri = release.asset_url(&artifact.name)?.to_string();
        log::debug!("uploading {} bytes to {}", content.len(), uri);

        let response = self
            .client
            .post(&uri)
            .default_headers(token)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(content)
            .send()
            .await
            .handle(&uri)
            .await?;

        let asset = serde_json::from_str::<AssetResponse>(&response)
            .map_err(|cause| Error::ParseResponse { cause })?;

        Ok(UploadedAsset::new(
            asset.name,
            asset.browser_download_url,
            checksum.value(),
        ))
    }
}
