pub mod error;
mod github_client;
pub mod repository;
mod request;
mod response;

use self::{error::PublishError, github_client::GithubClient, repository::Repository};
use crate::config::Settings;
use chrono::Local;

const AUTO_BRANCH_PREFIX: &str = "feature/auto_generated_";
const BRANCH_SAMPLE_SIZE: usize = 5;

/// Everything needed for one pull request creation attempt.
///
/// `repo`, `base` and `token` are overrides; when `None` they are resolved
/// through the configured [`Settings`] fallback chain.
#[derive(Debug)]
pub struct PullRequestSpec {
    pub code: String,
    pub filename: String,
    pub title: String,
    pub description: String,
    pub branch: String,
    pub commit_message: String,
    pub repo: Option<String>,
    pub base: Option<String>,
    pub token: Option<String>,
}

/// Publishes generated code as a pull request.
///
/// Holds the process configuration explicitly instead of reading mutable
/// globals, so two publishers with different settings can coexist.
pub struct Publisher {
    settings: Settings,
    api_base: Option<String>,
}

impl Publisher {
    pub fn new(settings: Settings) -> Self {
        Publisher {
            settings,
            api_base: None,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Creates a branch off the resolved base branch, commits the file and
    /// opens a pull request. Strictly sequential; a branch created before a
    /// later step fails is left behind.
    pub async fn publish(&self, spec: PullRequestSpec) -> Result<String, PublishError> {
        let token = self.settings.resolve_token(spec.token.as_deref())?;
        let base = self.settings.resolve_base_branch(spec.base.as_deref());
        let repo: Repository = self
            .settings
            .resolve_repo(spec.repo.as_deref())?
            .parse()
            .map_err(|err: anyhow::Error| PublishError::Configuration(err.to_string()))?;

        let mut client = GithubClient::new(token);
        if let Some(api_base) = &self.api_base {
            client = client.with_api_base(api_base);
        }

        let repository = client
            .get_repository(&repo)
            .await
            .map_err(|err| PublishError::RepositoryNotFound {
                repo: repo.to_string(),
                message: err.to_string(),
            })?;
        log::info!(
            "Connected to repository {} (default branch {})",
            repository.full_name,
            repository.default_branch
        );

        let sha = match client.get_commit_sha(&repo, &base).await {
            Ok(sha) => sha,
            Err(err) => {
                let available = client
                    .list_branches(&repo)
                    .await
                    .map(|branches| {
                        branches
                            .into_iter()
                            .take(BRANCH_SAMPLE_SIZE)
                            .map(|branch| branch.name)
                            .collect()
                    })
                    .unwrap_or_default();

                return Err(PublishError::BranchNotFound {
                    branch: base,
                    available,
                    message: err.to_string(),
                });
            }
        };
        log::info!("Found target branch {} at {}", base, sha);

        client
            .create_branch(&repo, &spec.branch, &sha)
            .await
            .map_err(|err| PublishError::BranchCreation {
                branch: spec.branch.clone(),
                message: err.to_string(),
            })?;
        log::info!("Created branch {}", spec.branch);

        // Any read failure takes the create path, not only "not found".
        // Callers rely on the resulting create-vs-update split, so this
        // stays as is even though it can mask transient read errors.
        let file_sha = client
            .get_file_sha(&repo, &spec.filename, &spec.branch)
            .await
            .ok();

        client
            .upsert_file(
                &repo,
                &spec.filename,
                &spec.code,
                &spec.branch,
                &spec.commit_message,
                file_sha,
            )
            .await
            .map_err(|err| PublishError::Publish {
                message: err.to_string(),
            })?;

        let pull_request = client
            .create_pull_request(&repo, &spec.title, &spec.description, &spec.branch, &base)
            .await
            .map_err(|err| PublishError::Publish {
                message: err.to_string(),
            })?;
        log::info!("Opened pull request #{}", pull_request.number);

        Ok(pull_request.html_url)
    }

    /// Publishes with auto-generated branch name, title and commit message,
    /// resolving everything else from the configured fallback chains.
    pub async fn quick_publish(
        &self,
        code: impl Into<String>,
        filename: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<String, PublishError> {
        let filename = filename.into();

        let spec = PullRequestSpec {
            code: code.into(),
            title: format!("Add {}", filename),
            commit_message: format!("Add auto-generated {}", filename),
            description: description.into(),
            branch: auto_branch_name(),
            filename,
            repo: None,
            base: None,
            token: None,
        };

        self.publish(spec).await
    }
}

/// `feature/auto_generated_YYYYMMDD_HHMMSS`, second resolution, local time.
fn auto_branch_name() -> String {
    format!(
        "{}{}",
        AUTO_BRANCH_PREFIX,
        Local::now().format("%Y%m%d_%H%M%S")
    )
}
