use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RepositoryResponse {
    pub full_name: String,
    pub default_branch: String,
}
