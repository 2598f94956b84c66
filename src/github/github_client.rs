use super::{
    repository::Repository,
    request::{BranchRefRequest, PullRequestRequest, SerializeRequest, UpsertFileRequest},
    response::{BranchResponse, FileShaResponse, PullRequestResponse, RepositoryResponse},
};
use crate::http::{Headers, HttpClient, ResponseHandler};
use anyhow::{Context, Result};
use base64::{prelude::BASE64_STANDARD, Engine};

const GITHUB_API_BASE: &str = "https://api.github.com";

/// Thin wrapper over the GitHub REST api, scoped to one token.
pub struct GithubClient {
    http: HttpClient,
    token: String,
    api_base: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Self {
        GithubClient {
            http: HttpClient::new(),
            token: token.into(),
            api_base: GITHUB_API_BASE.to_owned(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub async fn get_repository(&self, repo: &Repository) -> Result<RepositoryResponse> {
        let uri = format!("{}/repos/{}/{}", self.api_base, repo.owner, repo.name);

        let response = self
            .http
            .get(&uri)
            .github_json_headers(&self.token)
            .send()
            .await
            .handle()
            .await?;

        let repository = serde_json::from_str(&response)?;

        Ok(repository)
    }

    /// Sha of the commit a branch (or any commitish) currently points at.
    pub async fn get_commit_sha(&self, repo: &Repository, reference: &str) -> Result<String> {
        let uri = format!(
            "{}/repos/{}/{}/commits/{}",
            self.api_base, repo.owner, repo.name, reference
        );

        let sha = self
            .http
            .get(&uri)
            .github_sha_headers(&self.token)
            .send()
            .await
            .handle()
            .await?;

        Ok(sha)
    }

    pub async fn list_branches(&self, repo: &Repository) -> Result<Vec<BranchResponse>> {
        let uri = format!(
            "{}/repos/{}/{}/branches",
            self.api_base, repo.owner, repo.name
        );

        let response = self
            .http
            .get(&uri)
            .github_json_headers(&self.token)
            .send()
            .await
            .handle()
            .await?;

        let branches = serde_json::from_str(&response)?;

        Ok(branches)
    }

    pub async fn create_branch(&self, repo: &Repository, branch: &str, sha: &str) -> Result<()> {
        let uri = format!(
            "{}/repos/{}/{}/git/refs",
            self.api_base, repo.owner, repo.name
        );

        let body = BranchRefRequest::new(branch, sha).into_request()?;

        self.http
            .post(&uri)
            .github_json_headers(&self.token)
            .body(body)
            .send()
            .await
            .handle()
            .await?;

        Ok(())
    }

    /// Sha of a file's current content on the given ref.
    pub async fn get_file_sha(
        &self,
        repo: &Repository,
        path: &str,
        reference: &str,
    ) -> Result<String> {
        let uri = format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_base, repo.owner, repo.name, path, reference
        );

        let response = self
            .http
            .get(&uri)
            .github_json_headers(&self.token)
            .send()
            .await
            .handle()
            .await?;

        let file = serde_json::from_str::<FileShaResponse>(&response)
            .context("failed to parse the file contents response")?;

        Ok(file.sha)
    }

    /// Writes `content` to `path` on `branch` as a single commit. A `sha`
    /// updates the existing file, `None` creates it.
    pub async fn upsert_file(
        &self,
        repo: &Repository,
        path: &str,
        content: &str,
        branch: &str,
        message: &str,
        sha: Option<String>,
    ) -> Result<()> {
        log::debug!(
            "{} file {} on branch {}",
            if sha.is_some() { "updating" } else { "creating" },
            path,
            branch
        );

        let uri = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, repo.owner, repo.name, path
        );

        let content = BASE64_STANDARD.encode(content.as_bytes());

        let body =
            UpsertFileRequest::new(message, content, Some(branch.to_owned()), sha).into_request()?;

        self.http
            .put(&uri)
            .github_json_headers(&self.token)
            .body(body)
            .send()
            .await
            .handle()
            .await?;

        Ok(())
    }

    pub async fn create_pull_request(
        &self,
        repo: &Repository,
        title: &str,
        body: &str,
        head: &str,
        base: &str,
    ) -> Result<PullRequestResponse> {
        let uri = format!("{}/repos/{}/{}/pulls", self.api_base, repo.owner, repo.name);

        let request = PullRequestRequest::new(title, head, base, body).into_request()?;

        let response = self
            .http
            .post(&uri)
            .github_json_headers(&self.token)
            .body(request)
            .send()
            .await
            .handle()
            .await?;

        let pull_request = serde_json::from_str(&response)?;

        Ok(pull_request)
    }
}
