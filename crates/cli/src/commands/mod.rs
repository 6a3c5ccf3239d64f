//! CLI command definitions and execution
//!
//! This module contains all CLI commands and their implementations.
//! Every policy-facing command resolves its capability snapshot the same
//! way: an explicit `--caps-file` wins, then the capabilities document
//! cached for `--profile`, then the built-in default policy.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use dk_core::{CapabilitySnapshot, ProfileManager};

use crate::exit_code::ExitCode;
use crate::output::OutputConfig;

mod caps;
mod check;
mod classify;
mod completions;
mod profile;
mod rename;

/// dk - WebDAV drive client
///
/// Checks, corrects and classifies file names against the naming policy
/// advertised by a WebDAV drive server.
#[derive(Parser, Debug)]
#[command(name = "dk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage storage account profiles
    #[command(subcommand)]
    Profile(profile::ProfileCommands),

    /// Validate a file name or remote path against the naming policy
    Check(check::CheckArgs),

    /// Rewrite a name or path into a policy-compliant one
    Rename(rename::RenameArgs),

    /// Classify file extensions (class, icon, content type)
    Classify(classify::ClassifyArgs),

    /// Show the effective naming policy
    Caps(caps::CapsArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

/// Source of the capability snapshot, shared by policy-facing commands.
#[derive(Args, Debug, Clone)]
pub struct PolicySource {
    /// Read the server capabilities document from this JSON file
    #[arg(long, value_name = "FILE")]
    pub caps_file: Option<PathBuf>,

    /// Use the capabilities document cached for this profile
    #[arg(long, short = 'p')]
    pub profile: Option<String>,
}

impl PolicySource {
    /// Resolve the capability snapshot for this invocation.
    pub fn load(&self) -> dk_core::Result<Arc<CapabilitySnapshot>> {
        if let Some(path) = &self.caps_file {
            return Ok(Arc::new(load_caps_file(path)?));
        }

        if let Some(name) = &self.profile {
            let profile = ProfileManager::new()?.get(name)?;
            return match profile.capabilities_file {
                Some(path) => Ok(Arc::new(load_caps_file(PathBuf::from(path).as_path())?)),
                None => Ok(Arc::new(CapabilitySnapshot::default())),
            };
        }

        Ok(Arc::new(CapabilitySnapshot::default()))
    }
}

fn load_caps_file(path: &std::path::Path) -> dk_core::Result<CapabilitySnapshot> {
    let json = std::fs::read_to_string(path)?;
    dk_dav::snapshot_from_json(&json)
}

/// Execute the CLI command and return an exit code
pub fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Profile(cmd) => profile::execute(cmd, output_config),
        Commands::Check(args) => check::execute(args, output_config),
        Commands::Rename(args) => rename::execute(args, output_config),
        Commands::Classify(args) => classify::execute(args, output_config),
        Commands::Caps(args) => caps::execute(args, output_config),
        Commands::Completions(args) => completions::execute(args),
    }
}
