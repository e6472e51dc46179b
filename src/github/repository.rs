use std::{fmt, str::FromStr};
use thiserror::Error;

/// A GitHub repository in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{value}' is not a repository in owner/repo form")]
pub struct ParseRepositoryError {
    pub value: String,
}

impl FromStr for Repository {
    type Err = ParseRepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseRepositoryError {
            value: s.to_owned(),
        };

        let mut parts = s.trim().split('/');
        let owner = parts.next().filter(|p| !p.is_empty()).ok_or_else(invalid)?;
        let name = parts.next().filter(|p| !p.is_empty()).ok_or_else(invalid)?;

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Repository {
            owner: owner.to_owned(),
            name: name.to_owned(),
        })
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_owner_and_name() {
        let repository: Repository = "foo/bar".parse().unwrap();

        assert_eq!(repository.owner, "foo");
        assert_eq!(repository.name, "bar");
        assert_eq!(repository.to_string(), "foo/bar");
    }

    #[test]
    fn should_reject_value_without_separator() {
        let error = "foobar".parse::<Repository>().unwrap_err();

        assert_eq!(error.value, "foobar");
    }

    #[test]
    fn should_reject_empty_parts() {
        assert!("/bar".parse::<Repository>().is_err());
        assert!("foo/".parse::<Repository>().is_err());
        assert!("/".parse::<Repository>().is_err());
        assert!("".parse::<Repository>().is_err());
    }

    #[test]
    fn should_reject_extra_parts() {
        assert!("foo/bar/baz".parse::<Repository>().is_err());
    }
}
