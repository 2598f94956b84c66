use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PullRequestResponse {
    pub number: u64,
    pub html_url: String,
}
