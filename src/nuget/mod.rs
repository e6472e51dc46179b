use crate::{artifact::Artifact, config::Secret};
use async_trait::async_trait;
use std::{path::PathBuf, process::Stdio};
use thiserror::Error;
use tokio::process::Command;

/// Pushes packages to a package registry.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, artifact: &Artifact, api_key: &Secret) -> Result<(), Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot find {program}")]
    ToolNotFound {
        program: String,
        #[source]
        cause: which::Error,
    },
    #[error("cannot run {}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        cause: std::io::Error,
    },
    #[error("{} exited with code {code}", program.display())]
    Exit { program: PathBuf, code: i32 },
    #[error("{} was terminated by a signal", program.display())]
    Terminated { program: PathBuf },
}

/// Publishes through the `nuget` command line tool.
#[derive(Debug, Clone)]
pub struct NuGetPublisher {
    program: String,
    source: String,
}

impl NuGetPublisher {
    pub fn new(program: impl Into<String>, source: impl Into<String>) -> Self {
        NuGetPublisher {
            program: program.into(),
            source: source.into(),
        }
    }

    fn locate(&self) -> Result<PathBuf, Error> {
        which::which(&self.program).map_err(|cause| Error::ToolNotFound {
            program: self.program.to_owned(),
            cause,
        })
    }

    fn push_args(&self, artifact: &Artifact, api_key: &Secret) -> Vec<String> {
        vec![
            artifact.path.to_string_lossy().into_owned(),
            "-ApiKey".to_owned(),
            api_key.expose().to_owned(),
            "-Source".to_owned(),
            self.source.to_owned(),
            "-NonInteractive".to_owned(),
            "-ForceEnglishOutput".to_owned(),
        ]
    }
}

#[async_trait]
impl Publisher for NuGetPublisher {
    async fn publish(&self, artifact: &Artifact, api_key: &Secret) -> Result<(), Error> {
        let program = self.locate()?;
        log::debug!(
            "running {} for {} against {}",
            program.display(),
            artifact.name,
            self.source
        );

        let status = Command::new(&program)
            .args(self.push_args(artifact, api_key))
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|cause| Error::Spawn {
                program: program.to_owned(),
                cause,
            })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(Error::Exit { program, code }),
            None => Err(Error::Terminated { program }),
        }
    }
}
