use crate::{git, github::error::PublishError};
use std::env;

const MAIN_BRANCH_NAME: &str = "main";

const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
const GITHUB_REPO_VAR: &str = "GITHUB_REPO";
const DEFAULT_BRANCH_VAR: &str = "DEFAULT_BRANCH";

/// Process configuration, read once at startup and handed to the publisher.
#[derive(Debug, Default, Clone)]
pub struct Settings {
    pub token: Option<String>,
    pub repo: Option<String>,
    pub default_branch: Option<String>,
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings {
            token: env::var(GITHUB_TOKEN_VAR).ok().filter(|t| !t.is_empty()),
            repo: env::var(GITHUB_REPO_VAR).ok().filter(|r| !r.is_empty()),
            default_branch: env::var(DEFAULT_BRANCH_VAR)
                .ok()
                .filter(|b| !b.is_empty()),
        }
    }

    /// Explicit parameter, else the configured token.
    pub fn resolve_token(&self, explicit: Option<&str>) -> Result<String, PublishError> {
        explicit
            .map(ToOwned::to_owned)
            .or_else(|| self.token.clone())
            .ok_or_else(|| {
                PublishError::Configuration(format!(
                    "github token is required: pass it explicitly or set {}",
                    GITHUB_TOKEN_VAR
                ))
            })
    }

    /// Explicit parameter, else the configured default, else `main`.
    pub fn resolve_base_branch(&self, explicit: Option<&str>) -> String {
        explicit
            .map(ToOwned::to_owned)
            .or_else(|| self.default_branch.clone())
            .unwrap_or_else(|| MAIN_BRANCH_NAME.to_owned())
    }

    /// Explicit parameter, else the configured repository, else the
    /// `owner/repo` parsed from the local git remote.
    pub fn resolve_repo(&self, explicit: Option<&str>) -> Result<String, PublishError> {
        explicit
            .map(ToOwned::to_owned)
            .or_else(|| self.repo.clone())
            .or_else(|| git::remote_url().ok().and_then(|url| git::parse_owner_repo(&url)))
            .ok_or_else(|| {
                PublishError::Configuration(format!(
                    "repository name not found: set {} or run from a git repository",
                    GITHUB_REPO_VAR
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            token: Some("configured_token".to_owned()),
            repo: Some("configured/repo".to_owned()),
            default_branch: Some("develop".to_owned()),
        }
    }

    #[test]
    fn explicit_token_wins() {
        let token = settings().resolve_token(Some("explicit")).unwrap();

        assert_eq!(token, "explicit");
    }

    #[test]
    fn configured_token_is_the_fallback() {
        let token = settings().resolve_token(None).unwrap();

        assert_eq!(token, "configured_token");
    }

    #[test]
    fn missing_token_is_a_configuration_error() {
        let result = Settings::default().resolve_token(None);

        assert!(matches!(result, Err(PublishError::Configuration(_))));
    }

    #[test]
    fn explicit_branch_wins() {
        assert_eq!(settings().resolve_base_branch(Some("release")), "release");
    }

    #[test]
    fn configured_branch_is_the_fallback() {
        assert_eq!(settings().resolve_base_branch(None), "develop");
    }

    #[test]
    fn base_branch_defaults_to_main() {
        assert_eq!(Settings::default().resolve_base_branch(None), "main");
    }

    #[test]
    fn explicit_repo_wins() {
        let repo = settings().resolve_repo(Some("explicit/repo")).unwrap();

        assert_eq!(repo, "explicit/repo");
    }

    #[test]
    fn configured_repo_beats_the_git_remote() {
        let repo = settings().resolve_repo(None).unwrap();

        assert_eq!(repo, "configured/repo");
    }
}
