use thiserror::Error;

/// Failure taxonomy of the pull request publisher.
///
/// Each step of the publish sequence maps to its own variant so callers
/// can branch on the failure kind instead of parsing message text. The
/// wrapped cause is still carried in the message for diagnostics.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Repository '{repo}' not found or access denied. Error: {message}")]
    RepositoryNotFound { repo: String, message: String },
    #[error("Branch '{branch}' not found. Available branches: {}. Error: {message}", available.join(", "))]
    BranchNotFound {
        branch: String,
        available: Vec<String>,
        message: String,
    },
    #[error("Cannot create branch '{branch}': {message}")]
    BranchCreation { branch: String, message: String },
    #[error("Failed to create the pull request: {message}")]
    Publish { message: String },
}
