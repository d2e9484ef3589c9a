//! Lesson Planner CLI Application
//!
//! Command-line interface for generating structured lesson plans through a
//! schema-constrained generative AI service.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use planner_core::{GeminiClient, Session};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Missing credential is fatal before any network activity
    let client = GeminiClient::from_env_with_model(args.model.as_deref())
        .context("Failed to initialize the generation client")?;

    let renderer = TerminalRenderer::new(!args.no_color);

    info!("Lesson planner started");

    Cli::new(Session::new(client), renderer).generate(&args).await
}
