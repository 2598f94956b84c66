use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "codellama:7b";

const CODE_PROMPT_TEMPLATE: &str = "Write Python code for the following request in a microservice format. \
Start with a brief comment explaining what the microservice does, then provide only executable Python code \
structured as a microservice with:\n\n\
- FastAPI or Flask framework\n\
- Proper API endpoints\n\
- Request/response models\n\
- Error handling\n\
- Main function to run the service\n\n\
Request: {user_request}\n\n\
Format your response as complete Python microservice code with comments at the beginning explaining the functionality.";

const FILENAME_PROMPT_TEMPLATE: &str = "Suggest a single snake_case Python filename ending in .py for code \
implementing the following request. Respond with the filename only, no explanation.\n\n\
Request: {user_request}";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for a locally hosted Ollama inference endpoint.
pub struct OllamaClient {
    client: reqwest::Client,
    host: String,
    model: String,
}

impl OllamaClient {
    pub fn new() -> Self {
        OllamaClient {
            client: reqwest::Client::new(),
            host: DEFAULT_HOST.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Generates source code for a free-text request. The model output is
    /// returned verbatim, never parsed or validated.
    pub async fn generate_code(&self, user_request: &str) -> Result<String> {
        let prompt = render(CODE_PROMPT_TEMPLATE, user_request);

        self.complete(prompt).await
    }

    /// Second model round trip asking for a filename for the generated
    /// code. Callers fall back to a fixed default when this fails.
    pub async fn suggest_filename(&self, user_request: &str) -> Result<String> {
        let prompt = render(FILENAME_PROMPT_TEMPLATE, user_request);

        let suggestion = self.complete(prompt).await?;

        Ok(sanitize_filename(&suggestion))
    }

    async fn complete(&self, prompt: String) -> Result<String> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.host))
            .json(&request)
            .send()
            .await
            .context("Failed to send request to the Ollama endpoint")?
            .error_for_status()
            .context("Ollama endpoint returned an error status")?;

        let generated: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse the Ollama response")?;

        Ok(generated.response)
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

fn render(template: &str, user_request: &str) -> String {
    template.replace("{user_request}", user_request)
}

/// Reduces a model answer to one plausible `.py` filename.
fn sanitize_filename(suggestion: &str) -> String {
    let token = suggestion
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '_' && c != '.')
        .to_ascii_lowercase();

    if token.ends_with(".py") {
        token
    } else {
        format!("{}.py", token.trim_end_matches('.'))
    }
}
