//! check command - Validate names against the naming policy
//!
//! Accepts a single file name, a folder path (`--folder`), or a remote
//! path in `profile/path` form, for which every segment is validated and
//! the final segment's rejection reason is reported.

use clap::Args;
use serde::Serialize;

use dk_core::{parse_path, NamingPolicy, ParsedPath, RejectionReason};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

use super::PolicySource;

/// Validate a file name or remote path
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File name, folder path, or remote path (profile/path)
    pub name: String,

    /// Treat the argument as a folder path and validate every segment
    #[arg(long)]
    pub folder: bool,

    #[command(flatten)]
    pub policy: PolicySource,
}

#[derive(Debug, Serialize)]
struct CheckOutput {
    name: String,
    compliant: bool,
    #[serde(flatten)]
    rejection: Option<RejectionReason>,
}

/// Execute the check command
pub fn execute(args: CheckArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let caps = match args.policy.load() {
        Ok(caps) => caps,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };
    let policy = NamingPolicy::new(&caps);

    let outcome = if args.folder {
        check_folder(&policy, &args.name)
    } else {
        check_name(&policy, &args.name)
    };

    match outcome {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&CheckOutput {
                    name: args.name.clone(),
                    compliant: true,
                    rejection: None,
                });
            } else {
                formatter.success(&format!("'{}' complies with the naming policy", args.name));
            }
            ExitCode::Success
        }
        Err(reason) => {
            if formatter.is_json() {
                formatter.json(&CheckOutput {
                    name: args.name.clone(),
                    compliant: false,
                    rejection: Some(reason),
                });
            } else {
                formatter.error(&format!("'{}': {reason}", args.name));
            }
            ExitCode::PolicyViolation
        }
    }
}

/// Check a single name. Remote paths (`profile/path`) have their leading
/// folders validated as a path and their final segment as a file name.
fn check_name(policy: &NamingPolicy, name: &str) -> Result<(), RejectionReason> {
    if name.contains('/') {
        if let Ok(ParsedPath::Remote(remote)) = parse_path(name) {
            let parent = remote.parent().map(|p| p.path).unwrap_or_default();
            parent
                .split(['/', '\\'])
                .filter(|s| !s.is_empty())
                .try_for_each(|s| policy.check_file_name(s))?;
            return policy.check_file_name(remote.name());
        }
    }
    policy.check_file_name(name)
}

fn check_folder(policy: &NamingPolicy, path: &str) -> Result<(), RejectionReason> {
    if policy.check_folder_path(path) {
        Ok(())
    } else {
        // Re-derive the first failing segment to report a concrete reason.
        path.split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .try_for_each(|s| policy.check_file_name(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dk_core::CapabilitySnapshot;
    use std::sync::Arc;

    fn policy() -> NamingPolicy {
        NamingPolicy::new(&Arc::new(CapabilitySnapshot::default()))
    }

    #[test]
    fn test_check_plain_name() {
        assert!(check_name(&policy(), "report.pdf").is_ok());
        assert_eq!(
            check_name(&policy(), "CON.txt"),
            Err(RejectionReason::ReservedName("CON.txt".to_string()))
        );
    }

    #[test]
    fn test_check_remote_path_validates_final_segment() {
        assert!(check_name(&policy(), "cloud/docs/report.pdf").is_ok());
        assert_eq!(
            check_name(&policy(), "cloud/docs/CON.txt"),
            Err(RejectionReason::ReservedName("CON.txt".to_string()))
        );
    }

    #[test]
    fn test_check_remote_path_validates_parents() {
        assert!(check_name(&policy(), "cloud/docs/CON/report.pdf").is_err());
    }

    #[test]
    fn test_check_folder_reports_first_failure() {
        let p = policy();
        assert!(check_folder(&p, "a/b/c").is_ok());
        assert_eq!(
            check_folder(&p, "a/CON/c"),
            Err(RejectionReason::ReservedName("CON".to_string()))
        );
    }
}
