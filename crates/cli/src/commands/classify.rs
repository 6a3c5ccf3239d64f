//! classify command - Resolve extensions to their file type
//!
//! Shows class, icon, content type and semantic name for each extension,
//! as a table in human mode or a JSON array in JSON mode.

use clap::Args;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};
use serde::Serialize;

use dk_core::{FileType, TypeResolver};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

use super::PolicySource;

/// Classify file extensions
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Extensions to classify (with or without leading dot)
    #[arg(required = true)]
    pub extensions: Vec<String>,

    /// Classify as a directory instead of a file
    #[arg(long)]
    pub dir: bool,

    #[command(flatten)]
    pub policy: PolicySource,
}

#[derive(Debug, Serialize)]
struct ClassifyOutput {
    types: Vec<FileType>,
}

/// Execute the classify command
pub fn execute(args: ClassifyArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let caps = match args.policy.load() {
        Ok(caps) => caps,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    let resolver = TypeResolver::new(caps);
    let types: Vec<FileType> = args
        .extensions
        .iter()
        .map(|ext| resolver.resolve(ext, args.dir))
        .collect();

    if formatter.is_json() {
        formatter.json(&ClassifyOutput { types });
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(["EXTENSION", "CLASS", "ICON", "CONTENT TYPE", "NAME"]);
        for (ext, t) in args.extensions.iter().zip(&types) {
            table.add_row([
                ext.as_str(),
                t.class.as_str(),
                t.icon.as_str(),
                t.content_type.as_str(),
                t.name.as_str(),
            ]);
        }
        formatter.line(&table.to_string());
    }

    ExitCode::Success
}
