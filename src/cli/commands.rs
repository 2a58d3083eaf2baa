//! CLI command implementations

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::cli::args::{Cli, ConfigCommand};
use crate::config::Settings;
use crate::llm::{build_provider, OllamaClient, Summarizer, SummaryRequest};
use crate::server::{self, SummaryClient};

/// Marker in editor-generated note names that should not be summarized.
const UNTITLED_MARKER: &str = "Untitled";

fn build_summarizer(settings: &Settings) -> Result<Summarizer> {
    let provider = build_provider(settings)?;
    Ok(Summarizer::new(Arc::from(provider), settings.llm.model.clone()))
}

/// Run the HTTP endpoint until interrupted.
pub async fn serve(settings: &Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut server_settings = settings.server.clone();
    if let Some(host) = host {
        server_settings.host = host;
    }
    if let Some(port) = port {
        server_settings.port = port;
    }

    let summarizer = build_summarizer(settings)?;
    tracing::info!(
        endpoint = %settings.llm.endpoint,
        model = %settings.llm.model,
        "using ollama backend"
    );
    server::serve(&server_settings, summarizer).await
}

/// Summarize a keyword directly, without going through HTTP.
pub async fn summarize_keyword(settings: &Settings, keyword: &str, model: &str) -> Result<()> {
    let summarizer = build_summarizer(settings)?;
    let summary = summarizer
        .summarize(SummaryRequest { keyword, model })
        .await?;

    println!("{}", summary);
    Ok(())
}

/// Replace a note's content with a summary of its title.
pub async fn insert_note_summary(settings: &Settings, file: &Path, model: &str) -> Result<()> {
    if !file.is_file() {
        anyhow::bail!("Note not found: {}", file.display());
    }
    if file.extension().and_then(|ext| ext.to_str()) != Some("md") {
        anyhow::bail!("Not a markdown note: {}", file.display());
    }

    let keyword = note_keyword(file)?;
    if keyword.contains(UNTITLED_MARKER) {
        println!("Skipping untitled note: {}", file.display());
        return Ok(());
    }

    let summary = SummaryClient::from_settings(settings)
        .fetch_summary(&keyword, model)
        .await
        .context("failed to insert summary")?;

    std::fs::write(file, format_note_snippet(&summary))
        .with_context(|| format!("Failed to write note: {}", file.display()))?;

    println!("Summary inserted into {}", file.display());
    Ok(())
}

fn note_keyword(file: &Path) -> Result<String> {
    file.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .with_context(|| format!("Note has no usable name: {}", file.display()))
}

fn format_note_snippet(summary: &str) -> String {
    format!("- ==Def== :{} \n ---\n", summary)
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Write the completion script for `shell`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let command_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, command_name, out);
}

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: String,
}

#[derive(Serialize)]
struct DoctorReport {
    endpoint: String,
    model: String,
    checks: Vec<DoctorCheck>,
}

/// Run diagnostic checks against the configured inference backend.
pub async fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("quicknote doctor");
    println!("endpoint: {}", report.endpoint);
    println!("model: {}", report.model);
    println!();

    for check in &report.checks {
        println!("{:<10} {:<8} {}", check.name, check.status, check.detail);
    }

    Ok(())
}

async fn collect_doctor_report(settings: &Settings) -> Result<DoctorReport> {
    let client = OllamaClient::from_settings(settings)?;
    let model = settings.llm.model.clone();

    let checks = match client.list_models().await {
        Ok(models) => {
            let pulled = has_model(&models, &model);
            vec![
                DoctorCheck {
                    name: "backend",
                    status: "ok",
                    detail: format!("{} models available", models.len()),
                },
                DoctorCheck {
                    name: "model",
                    status: if pulled { "ok" } else { "missing" },
                    detail: if pulled {
                        format!("{} is pulled", model)
                    } else {
                        format!("run `ollama pull {}`", model)
                    },
                },
            ]
        }
        Err(e) => vec![
            DoctorCheck {
                name: "backend",
                status: "down",
                detail: format!("{:#}", e),
            },
            DoctorCheck {
                name: "model",
                status: "unknown",
                detail: "backend unreachable".to_string(),
            },
        ],
    };

    Ok(DoctorReport {
        endpoint: client.endpoint().to_string(),
        model,
        checks,
    })
}

/// Ollama reports `name:tag`; a bare name means the `latest` tag.
fn has_model(models: &[String], wanted: &str) -> bool {
    let wanted_tagged = if wanted.contains(':') {
        wanted.to_string()
    } else {
        format!("{}:latest", wanted)
    };
    models.iter().any(|m| m == wanted || *m == wanted_tagged)
}
