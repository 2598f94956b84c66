use reqwest::Client;
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder,
};
use std::ops::{Deref, DerefMut};
use thiserror::Error;

const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const AGENT: &str = "codeforge";

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

pub trait Headers {
    fn github_json_headers(self, token: &str) -> RequestBuilder;
    fn github_sha_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn github_json_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header(API_VERSION_HEADER, API_VERSION)
            .header(USER_AGENT, AGENT)
    }

    fn github_sha_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github.VERSION.sha")
            .header(API_VERSION_HEADER, API_VERSION)
            .header(USER_AGENT, AGENT)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("status {status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to send request")]
    TransportError {
        #[source]
        cause: reqwest::Error,
    },
}

pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::TransportError { cause })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !(200..300).contains(&status) {
            return Err(Error::GenericResponseError {
                status,
                message: text,
            });
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use mockito::Server;

    #[tokio::test]
    async fn handles_success_body() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_body("payload")
            .create_async()
            .await;

        let response = HttpClient::new()
            .get(server.url())
            .github_sha_headers("token")
            .send()
            .await
            .handle()
            .await?;

        mock.assert_async().await;
        assert_eq!(response, "payload");

        Ok(())
    }

    #[tokio::test]
    async fn surfaces_error_status_with_body() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let result = HttpClient::new()
            .get(server.url())
            .github_json_headers("token")
            .send()
            .await
            .handle()
            .await;

        match result {
            Err(Error::GenericResponseError { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }

        Ok(())
    }
}
