use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BranchResponse {
    pub name: String,
}
