use crate::{
    artifact::{self, Artifact},
    config::{
        Config, Secret, ARTIFACT_EXTENSION, GITHUB_TOKEN_VAR, NUGET_API_KEY_VAR, REPOSITORY_VAR,
    },
    error::{DeployError, Destination},
    github::{repository::Repository, Release, ReleaseStore},
    nuget::Publisher,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No release tag, nothing was deployed.
    Skipped,
    Deployed { artifacts: usize },
}

struct Credentials<'a> {
    github_token: &'a Secret,
    nuget_api_key: &'a Secret,
}

/// Publishes the packages of a tagged build to its GitHub release and to
/// NuGet.
pub struct Deployer<S, P> {
    config: Config,
    store: S,
    publisher: P,
}

impl<S, P> Deployer<S, P>
where
    S: ReleaseStore,
    P: Publisher,
{
    pub fn new(config: Config, store: S, publisher: P) -> Self {
        Deployer {
            config,
            store,
            publisher,
        }
    }

    pub async fn run(&self) -> Result<Outcome, DeployError> {
        let Some(tag) = &self.config.tag else {
            log::info!("No Appveyor tag name supplied. Not deploying.");
            return Ok(Outcome::Skipped);
        };

        let repository = self.repository()?;
        let credentials = self.credentials()?;

        log::info!("Deploying {}", tag);
        log::info!("Looking for GitHub release {}", tag);
        let release = self
            .store
            .get_release(&repository, tag, credentials.github_token)
            .await
            .map_err(|cause| DeployError::NotFound {
                tag: tag.to_string(),
                repository: repository.to_string(),
                cause,
            })?;
        log::debug!(
            "found release {} for {} in {}",
            release.id,
            release.tag,
            release.repository
        );

        let artifacts = artifact::find(&self.config.artifacts_dir, ARTIFACT_EXTENSION)?;
        if artifacts.is_empty() {
            return Err(DeployError::NoArtifacts {
                dir: self.config.artifacts_dir.to_owned(),
            });
        }

        log::info!("Uploading artifacts to GitHub release {}", tag);
        for artifact in &artifacts {
            self.upload(&release, artifact, credentials.github_token)
                .await?;
        }

        log::info!("Pushing nupkgs to {}", self.config.nuget_source);
        for artifact in &artifacts {
            self.push(artifact, credentials.nuget_api_key).await?;
        }

        log::info!("Finished deploying");
        Ok(Outcome::Deployed {
            artifacts: artifacts.len(),
        })
    }

    fn repository(&self) -> Result<Repository, DeployError> {
        let value = self.config.repository.as_deref().ok_or_else(|| {
            DeployError::Configuration(format!("{} is not set", REPOSITORY_VAR))
        })?;

        value
            .parse::<Repository>()
            .map_err(|e| DeployError::Configuration(format!("{}: {}", REPOSITORY_VAR, e)))
    }

    fn credentials(&self) -> Result<Credentials<'_>, DeployError> {
        let missing = |var: &str| DeployError::Configuration(format!("{} is not set", var));

        Ok(Credentials {
            github_token: self
                .config
                .github_token
                .as_ref()
                .ok_or_else(|| missing(GITHUB_TOKEN_VAR))?,
            nuget_api_key: self
                .config
                .nuget_api_key
                .as_ref()
                .ok_or_else(|| missing(NUGET_API_KEY_VAR))?,
        })
    }

    async fn upload(
        &self,
        release: &Release,
        artifact: &Artifact,
        token: &Secret,
    ) -> Result<(), DeployError> {
        log::info!("Uploading {} ({} bytes)", artifact.name, artifact.size);

        let uploaded = self
            .store
            .upload_asset(release, artifact, token)
            .await
            .map_err(|cause| DeployError::Upload {
                name: artifact.name.to_owned(),
                destination: Destination::GithubRelease,
                cause: Box::new(cause),
            })?;

        log::info!(
            "Uploaded {} to {} (sha256 {})",
            uploaded.name,
            uploaded.url,
            uploaded.checksum
        );
        Ok(())
    }

    async fn push(&self, artifact: &Artifact, api_key: &Secret) -> Result<(), DeployError> {
        log::info!("Pushing {}", artifact.name);

        self.publisher
            .publish(artifact, api_key)
            .await
            .map_err(|cause| DeployError::Upload {
                name: artifact.name.to_owned(),
                destination: Destination::NuGet,
                cause: Box::new(cause),
            })?;

        log::info!("Pushed {}", artifact.name);
        Ok(())
    }
}
