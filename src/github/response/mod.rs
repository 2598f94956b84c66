mod branch_response;
mod pull_request_response;
mod repository_response;
mod sha_response;

pub use branch_response::BranchResponse;
pub use pull_request_response::PullRequestResponse;
pub use repository_response::RepositoryResponse;
pub use sha_response::FileShaResponse;
