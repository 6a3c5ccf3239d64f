//! rename command - Rewrite names into policy-compliant ones
//!
//! Prints the corrected name; with `--check` it also validates the result
//! and reports the one class of violation renaming cannot fix (reserved
//! names).

use clap::Args;
use serde::Serialize;

use dk_core::{AutoRenamer, NamingPolicy};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

use super::PolicySource;

/// Rewrite a name or path into a policy-compliant one
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// File name or path to correct
    pub path: String,

    /// Treat the argument as a folder path (keeps `/` separators)
    #[arg(long)]
    pub folder: bool,

    /// Validate the corrected name and fail if it still violates policy
    #[arg(long)]
    pub check: bool,

    #[command(flatten)]
    pub policy: PolicySource,
}

#[derive(Debug, Serialize)]
struct RenameOutput {
    input: String,
    renamed: String,
    changed: bool,
}

/// Execute the rename command
pub fn execute(args: RenameArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let caps = match args.policy.load() {
        Ok(caps) => caps,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    let renamer = AutoRenamer::new(&caps);
    let renamed = renamer.rename(&args.path, args.folder);

    if args.check {
        let policy = NamingPolicy::new(&caps);
        let compliant = if args.folder {
            policy.check_folder_path(&renamed)
        } else {
            renamed
                .split('/')
                .filter(|s| !s.is_empty())
                .all(|s| policy.check_file_name(s).is_ok())
        };
        if !compliant {
            formatter.error(&format!(
                "'{renamed}' still violates the naming policy (reserved name?)"
            ));
            return ExitCode::PolicyViolation;
        }
    }

    if formatter.is_json() {
        formatter.json(&RenameOutput {
            input: args.path.clone(),
            renamed: renamed.clone(),
            changed: renamed != args.path,
        });
    } else {
        formatter.line(&renamed);
    }
    ExitCode::Success
}
