//! # response-boxes
//!
//! Command-line driver over the response-boxes crates. Reads assistant text
//! or host events from stdin, records boxes, and prints projections.

#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use boxes_core::logging::init_subscriber;
use boxes_extract::extract_segments;
use boxes_hooks::{CaptureOutcome, PluginContext, ResponseBoxesPlugin, session_headers};
use boxes_settings::{BoxesSettings, load_settings_or_default};
use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;

/// Capture response boxes and project prior learnings.
#[derive(Parser, Debug)]
#[command(name = "response-boxes", version, about)]
struct Cli {
    /// Event log to use instead of the configured one.
    #[arg(long, global = true)]
    boxes_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the boxes found in stdin, one JSON object per line.
    Extract,

    /// Record the boxes in stdin as one assistant message.
    Capture {
        /// Session the message belongs to.
        #[arg(long)]
        session: String,
        /// Working directory recorded in the context.
        #[arg(long)]
        directory: Option<String>,
        /// Worktree root recorded in the context.
        #[arg(long)]
        worktree: Option<String>,
    },

    /// Handle one host event (JSON) read from stdin.
    Event {
        /// Working directory recorded in the context.
        #[arg(long)]
        directory: Option<String>,
        /// Worktree root recorded in the context.
        #[arg(long)]
        worktree: Option<String>,
    },

    /// Print the summary that would be injected. Prints nothing when empty.
    Project,

    /// Print the correlation headers for a session.
    Headers {
        /// Session id.
        session: String,
    },

    /// Print the resolved event log path.
    Path,
}

async fn read_stdin() -> Result<String> {
    let mut input = String::new();
    let _ = tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read stdin")?;
    Ok(input)
}

fn build_plugin(
    settings: BoxesSettings,
    directory: Option<String>,
    worktree: Option<String>,
) -> ResponseBoxesPlugin {
    ResponseBoxesPlugin::new(
        settings,
        PluginContext {
            directory,
            worktree,
            ..PluginContext::default()
        },
    )
}

fn report(outcome: &CaptureOutcome) {
    match outcome {
        CaptureOutcome::Captured { count, .. } => println!("{count}"),
        CaptureOutcome::Disabled | CaptureOutcome::Ignored | CaptureOutcome::NoBoxes => {
            println!("0");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings_or_default();
    if let Some(path) = cli.boxes_file {
        settings.boxes_file = Some(path);
    }
    init_subscriber(&settings.log_level);
    tracing::debug!(
        path = %settings.boxes_file_path().display(),
        disabled = settings.disabled,
        "settings loaded"
    );

    match cli.command {
        Command::Extract => {
            let text = read_stdin().await?;
            for segment in extract_segments(&text) {
                println!(
                    "{}",
                    serde_json::to_string(&segment).context("Failed to encode segment")?
                );
            }
        }
        Command::Capture {
            session,
            directory,
            worktree,
        } => {
            let text = read_stdin().await?;
            let mut plugin = build_plugin(settings, directory, worktree);
            let outcome = plugin
                .capture_text(&session, &text)
                .await
                .context("Failed to capture boxes")?;
            report(&outcome);
        }
        Command::Event {
            directory,
            worktree,
        } => {
            let raw = read_stdin().await?;
            let mut plugin = build_plugin(settings, directory, worktree);
            let outcome = plugin
                .on_event_json(&raw)
                .await
                .context("Failed to handle host event")?;
            report(&outcome);
        }
        Command::Project => {
            if settings.disabled {
                return Ok(());
            }
            let plugin = build_plugin(settings, None, None);
            let projection = plugin.projection().await.with_context(|| {
                format!("Failed to read event log {}", plugin.log().path().display())
            })?;
            if let Some(text) = projection {
                println!("{text}");
            }
        }
        Command::Headers { session } => {
            for (name, value) in session_headers(&session) {
                println!("{name}: {value}");
            }
        }
        Command::Path => {
            println!("{}", settings.boxes_file_path().display());
        }
    }

    Ok(())
}
