//! aipush - CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use aipush::commit::CommitMessageGenerator;
use aipush::config::{self, Config};
use aipush::error::PushError;
use aipush::git::SystemExecutor;
use aipush::llm::GeminiClient;
use aipush::push::{Completion, PushOrchestrator, report};

/// Stage, commit with an AI-generated message, and push.
#[derive(Parser, Debug)]
#[command(name = "aipush")]
#[command(about = "Stage, commit with an AI-generated message, and push")]
#[command(version)]
struct Cli {
    /// Show debug output
    #[arg(short, long)]
    verbose: bool,

    /// Gemini model to use (overrides AIPUSH_GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Only the working directory's .env is read. A missing file is fine; the
    // variables may already be exported.
    let env_file = config::load_env_file(Path::new(config::ENV_FILE));
    init_logging(cli.verbose);
    if let Err(e) = env_file {
        warn!("Ignoring {}: {}", config::ENV_FILE, e);
    }

    // Step 1: Check the API key before touching the repository
    let config = match Config::from_env() {
        Ok(config) => config.with_model(cli.model),
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(completion) => {
            report::print_completion(&completion);
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.downcast_ref::<PushError>() {
                Some(push_error) => report::print_abort(push_error),
                None => report::print_unexpected(&e),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("aipush=debug")
        } else {
            EnvFilter::new("aipush=info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

async fn run(config: Config) -> Result<Completion> {
    // Step 2: Check prerequisites
    if which::which("git").is_err() {
        bail!("git executable not found on PATH");
    }

    // Step 3: Build collaborators
    let client = GeminiClient::new(&config).context("Failed to set up the Gemini client")?;
    let orchestrator =
        PushOrchestrator::new(SystemExecutor::new(), CommitMessageGenerator::new(client));

    // Step 4: Stage, commit, push
    println!("Pushing changes:");
    let completion = orchestrator.run().await?;

    Ok(completion)
}
