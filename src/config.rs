use crate::github::tag::Tag;
use std::{env, fmt, path::PathBuf, str::FromStr};

const TAG_VAR: &str = "APPVEYOR_REPO_TAG_NAME";
pub(crate) const REPOSITORY_VAR: &str = "APPVEYOR_REPO_NAME";
pub(crate) const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
pub(crate) const NUGET_API_KEY_VAR: &str = "NUGET_API_KEY";
const GITHUB_API_URL_VAR: &str = "GITHUB_API_URL";
const NUGET_EXE_VAR: &str = "NUGET_EXE";
const NUGET_SOURCE_VAR: &str = "NUGET_SOURCE";
const ARTIFACTS_DIR_VAR: &str = "DEPLOY_ARTIFACTS_DIR";
const LOG_LEVEL_VAR: &str = "DEPLOY_LOG_LEVEL";

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_NUGET_EXE: &str = "nuget";
const DEFAULT_NUGET_SOURCE: &str = "https://www.nuget.org/api/v2/package";
const DEFAULT_ARTIFACTS_DIR: &str = "artifacts/output";
pub const ARTIFACT_EXTENSION: &str = "nupkg";

/// Everything the deployer reads from the process environment, captured once
/// at startup.
///
/// Required values are kept optional here: a build without a tag must be able
/// to exit cleanly even when the rest of the release environment is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub tag: Option<Tag>,
    pub repository: Option<String>,
    pub github_token: Option<Secret>,
    pub nuget_api_key: Option<Secret>,
    pub github_api_url: String,
    pub nuget_exe: String,
    pub nuget_source: String,
    pub artifacts_dir: PathBuf,
    pub log_level: log::Level,
}

impl Config {
    pub fn load() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Config {
            tag: value(TAG_VAR).map(Tag::new),
            repository: value(REPOSITORY_VAR),
            github_token: value(GITHUB_TOKEN_VAR).map(Secret::new),
            nuget_api_key: value(NUGET_API_KEY_VAR).map(Secret::new),
            github_api_url: value(GITHUB_API_URL_VAR)
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_owned()),
            nuget_exe: value(NUGET_EXE_VAR).unwrap_or_else(|| DEFAULT_NUGET_EXE.to_owned()),
            nuget_source: value(NUGET_SOURCE_VAR)
                .unwrap_or_else(|| DEFAULT_NUGET_SOURCE.to_owned()),
            artifacts_dir: value(ARTIFACTS_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_DIR)),
            log_level: value(LOG_LEVEL_VAR)
                .and_then(|level| log::Level::from_str(&level).ok())
                .unwrap_or(log::Level::Info),
        }
    }
}

/// A credential that must never show up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Secret(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn should_read_release_environment() {
        let config = config_from(&[
            ("APPVEYOR_REPO_TAG_NAME", "v1.2.3"),
            ("APPVEYOR_REPO_NAME", "foo/bar"),
            ("GITHUB_TOKEN", "gh-token"),
            ("NUGET_API_KEY", "nuget-key"),
        ]);

        assert_eq!(config.tag.as_ref().map(Tag::value), Some("v1.2.3"));
        assert_eq!(config.repository.as_deref(), Some("foo/bar"));
        assert_eq!(config.github_token, Some(Secret::new("gh-token")));
        assert_eq!(config.nuget_api_key, Some(Secret::new("nuget-key")));
    }

    #[test]
    fn should_apply_defaults() {
        let config = config_from(&[]);

        assert!(config.tag.is_none());
        assert_eq!(config.github_api_url, "https://api.github.com");
        assert_eq!(config.nuget_exe, "nuget");
        assert_eq!(config.nuget_source, "https://www.nuget.org/api/v2/package");
        assert_eq!(config.artifacts_dir, PathBuf::from("artifacts/output"));
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn should_treat_blank_values_as_missing() {
        let config = config_from(&[("APPVEYOR_REPO_TAG_NAME", "  "), ("GITHUB_TOKEN", "")]);

        assert!(config.tag.is_none());
        assert!(config.github_token.is_none());
    }

    #[test]
    fn should_override_defaults() {
        let config = config_from(&[
            ("GITHUB_API_URL", "http://localhost:1234"),
            ("NUGET_EXE", "/opt/nuget/nuget.exe"),
            ("DEPLOY_ARTIFACTS_DIR", "out"),
            ("DEPLOY_LOG_LEVEL", "debug"),
        ]);

        assert_eq!(config.github_api_url, "http://localhost:1234");
        assert_eq!(config.nuget_exe, "/opt/nuget/nuget.exe");
        assert_eq!(config.artifacts_dir, PathBuf::from("out"));
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn should_fall_back_to_info_on_unknown_log_level() {
        let config = config_from(&[("DEPLOY_LOG_LEVEL", "loud")]);

        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn should_redact_secrets_in_debug_output() {
        let secret = Secret::new("super-secret");

        assert_eq!(format!("{:?}", secret), "Secret(***)");
        assert_eq!(secret.expose(), "super-secret");
    }
}
