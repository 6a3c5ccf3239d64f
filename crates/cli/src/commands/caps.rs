//! caps command - Show the effective naming policy
//!
//! Useful for inspecting what a server capabilities document actually
//! declares before running check/rename against it.

use clap::Args;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

use super::PolicySource;

/// Show the effective naming policy
#[derive(Args, Debug)]
pub struct CapsArgs {
    #[command(flatten)]
    pub policy: PolicySource,
}

/// Execute the caps command
pub fn execute(args: CapsArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let caps = match args.policy.load() {
        Ok(caps) => caps,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    if formatter.is_json() {
        formatter.json(caps.as_ref());
        return ExitCode::Success;
    }

    formatter.line(&format!(
        "Enforcement:          {}",
        if caps.enforce_policy { "on" } else { "off" }
    ));
    formatter.line(&format!(
        "Forbidden characters: {}",
        display_list(&caps.forbidden_characters)
    ));
    formatter.line(&format!(
        "Forbidden extensions: {}",
        display_list(&caps.forbidden_extensions)
    ));
    formatter.line(&format!(
        "Reserved names:       {}",
        display_list(&caps.forbidden_names)
    ));
    formatter.line(&format!(
        "Reserved basenames:   {}",
        display_list(&caps.forbidden_basenames)
    ));
    formatter.line(&format!(
        "Rich content types:   {}",
        display_list(&caps.rich_content_types)
    ));

    ExitCode::Success
}

fn display_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items
            .iter()
            .map(|s| format!("{s:?}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
