mod artifact;
mod checksum;
mod config;
mod deploy;
mod error;
mod github;
mod logger;
mod nuget;

use anyhow::{Context, Result};
use config::Config;
use deploy::{Deployer, Outcome};
use github::GithubClient;
use nuget::NuGetPublisher;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load();
    logger::init(config.log_level)?;

    let store =
        GithubClient::new(&config.github_api_url).context("Cannot create the GitHub client")?;
    let publisher = NuGetPublisher::new(&config.nuget_exe, &config.nuget_source);

    let outcome = Deployer::new(config, store, publisher)
        .run()
        .await
        .context("Deployment failed")?;

    if let Outcome::Deployed { artifacts } = outcome {
        log::debug!("deployed {} artifacts", artifacts);
    }

    Ok(())
}
