//! CLI command handling.
//!
//! Provides subcommands for:
//! - Executing a snippet (`run`)
//! - Listing the language registry (`languages`)

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::sandbox::{Language, SandboxManager};

#[derive(Parser, Debug)]
#[command(name = "runcell")]
#[command(about = "Sandboxed code execution for untrusted snippets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute a snippet and print the outcome as JSON
    Run {
        /// Source file to execute; reads stdin when neither this nor
        /// --code is given
        file: Option<PathBuf>,

        /// Inline code to execute
        #[arg(short, long, conflicts_with = "file")]
        code: Option<String>,

        /// Language of the snippet (python, javascript)
        #[arg(short, long, env = "RUNCELL_LANGUAGE")]
        language: String,

        /// Wall-clock budget in seconds
        #[arg(short, long, default_value_t = 10.0)]
        timeout: f64,
    },

    /// List supported languages and their profiles
    Languages,
}

/// Run a CLI command to completion.
pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Run {
            file,
            code,
            language,
            timeout,
        } => run_snippet(file, code, &language, timeout).await,
        Command::Languages => {
            list_languages();
            Ok(())
        }
    }
}

async fn run_snippet(
    file: Option<PathBuf>,
    code: Option<String>,
    language: &str,
    timeout: f64,
) -> anyhow::Result<()> {
    let code = match (file, code) {
        (Some(path), None) => std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?,
        (None, Some(inline)) => inline,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        (Some(_), Some(_)) => unreachable!("clap rejects --code together with a file"),
    };

    let manager = SandboxManager::builder()
        .timeout(Duration::from_secs_f64(timeout))
        .build();
    let outcome = manager.execute(&code, language).await;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn list_languages() {
    for language in Language::ALL {
        let profile = language.profile();
        println!(
            "{:<12} command: {:?}  ext: {}  denied: {:?}",
            language.name(),
            profile.command,
            profile.file_ext,
            profile.denylist
        );
    }
}
