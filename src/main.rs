mod config;
mod git;
mod github;
mod http;
mod logger;
mod ollama;

use anyhow::{Context, Result};
use config::Settings;
use github::Publisher;
use ollama::OllamaClient;
use std::io::{self, Write};

const FALLBACK_FILENAME: &str = "generated_service.py";
const DEFAULT_PR_DESCRIPTION: &str = "Auto-generated code";

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    let settings = Settings::from_env();
    let ollama = OllamaClient::new();

    let request = prompt("Describe the code you want: ")?;
    if request.is_empty() {
        println!("Nothing to generate.");
        return Ok(());
    }

    log::info!("Generating code");
    let code = ollama
        .generate_code(&request)
        .await
        .context("Cannot generate code")?;

    println!("\nGenerated code:\n");
    println!("{}", code);

    let answer = prompt("\nOpen a pull request with this code? [y/N] ")?;
    if !matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") {
        return Ok(());
    }

    let repo_override = prompt("Repository (owner/repo, empty for configured/detected): ")?;
    let mut settings = settings;
    if !repo_override.is_empty() {
        settings.repo = Some(repo_override);
    }

    let suggested = ollama
        .suggest_filename(&request)
        .await
        .unwrap_or_else(|_| FALLBACK_FILENAME.to_owned());
    let filename_override = prompt(&format!("Filename [{}]: ", suggested))?;
    let filename = if filename_override.is_empty() {
        suggested
    } else {
        filename_override
    };

    log::info!("Publishing {}", filename);
    let publisher = Publisher::new(settings);
    match publisher
        .quick_publish(code, filename, DEFAULT_PR_DESCRIPTION)
        .await
    {
        Ok(url) => println!("Pull request created: {}", url),
        Err(err) => println!("Failed to create the pull request: {}", err),
    }

    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_owned())
}
