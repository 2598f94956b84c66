use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Target repository in `owner/repo` form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl FromStr for Repository {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(Repository {
                owner: owner.to_owned(),
                name: name.to_owned(),
            }),
            _ => anyhow::bail!("repository must be in 'owner/repo' format, got '{}'", s),
        }
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
    fn parses_owner_and_name() {
        let repository: Repository = "octocat/hello-world".parse().unwrap();

        assert_eq!(repository.owner, "octocat");
        assert_eq!(repository.name, "hello-world");
        assert_eq!(repository.to_string(), "octocat/hello-world");
    }

    #[test]
    fn rejects_missing_separator() {
        assert!("octocat".parse::<Repository>().is_err());
        assert!("/hello-world".parse::<Repository>().is_err());
        assert!("octocat/".parse::<Repository>().is_err());
    }
}
