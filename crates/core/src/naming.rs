//! Filename validation against a server naming policy
//!
//! `NamingPolicy` checks file and folder names against the forbidden
//! characters, reserved names and forbidden extensions a server declares in
//! its capabilities. Validation is total and reports a typed
//! [`RejectionReason`] instead of failing; callers decide whether to surface
//! the reason, retry through [`AutoRenamer`](crate::rename::AutoRenamer) or
//! abort.
//!
//! The policy captures its own immutable view of the capability snapshot at
//! construction (character set, uppercased reserved names, lowercased
//! extensions), so checks need no synchronization and can run from any
//! thread.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::capability::{CapabilitySnapshot, SPACE_SENTINEL};

/// Why a name was rejected. Carries the offending token so callers can
/// format a user-facing message without re-deriving it; message templates
/// and localization live outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", content = "value", rename_all = "snake_case")]
pub enum RejectionReason {
    /// Name is empty or whitespace-only.
    #[error("name must not be empty")]
    EmptyName,

    /// Name starts or ends with a space.
    #[error("name must not start or end with a space")]
    LeadingOrTrailingSpace,

    /// Name (or its basename) matches a reserved name.
    #[error("name \"{0}\" is reserved")]
    ReservedName(String),

    /// Name ends with a forbidden extension.
    #[error("extension \"{0}\" is not allowed")]
    ForbiddenExtension(String),

    /// Name contains a forbidden character.
    #[error("character \"{0}\" is not allowed")]
    InvalidCharacter(char),
}

/// Validates names and path segments against one capability snapshot.
#[derive(Debug, Clone)]
pub struct NamingPolicy {
    enforce: bool,
    forbidden_chars: HashSet<char>,
    /// Uppercased union of reserved full names and basenames.
    reserved_upper: HashSet<String>,
    /// Lowercased forbidden extensions, original order preserved.
    forbidden_exts: Vec<String>,
}

impl NamingPolicy {
    /// Build a policy from a capability snapshot.
    pub fn new(capabilities: &Arc<CapabilitySnapshot>) -> Self {
        let forbidden_chars = capabilities
            .forbidden_characters
            .iter()
            .filter_map(|s| s.chars().next())
            .collect();

        let reserved_upper = capabilities
            .forbidden_names
            .iter()
            .chain(capabilities.forbidden_basenames.iter())
            .map(|n| n.to_uppercase())
            .collect();

        let forbidden_exts = capabilities
            .forbidden_extensions
            .iter()
            .map(|e| e.to_lowercase())
            .collect();

        Self {
            enforce: capabilities.enforce_policy,
            forbidden_chars,
            reserved_upper,
            forbidden_exts,
        }
    }

    /// Check a single file or folder name. Returns `Ok(())` when the name
    /// complies, or the first failing rule's [`RejectionReason`].
    pub fn check_file_name(&self, name: &str) -> Result<(), RejectionReason> {
        if !self.enforce {
            return Ok(());
        }

        if name.trim().is_empty() {
            return Err(RejectionReason::EmptyName);
        }

        for c in name.chars() {
            if self.forbidden_chars.contains(&c) {
                return Err(RejectionReason::InvalidCharacter(c));
            }
        }

        let upper = name.to_uppercase();
        let stem_upper = stem(name).to_uppercase();
        if self.reserved_upper.contains(&upper) || self.reserved_upper.contains(&stem_upper) {
            return Err(RejectionReason::ReservedName(name.to_string()));
        }

        let lower = name.to_lowercase();
        for ext in &self.forbidden_exts {
            if ext == SPACE_SENTINEL {
                if lower.starts_with(' ') || lower.ends_with(' ') {
                    return Err(RejectionReason::LeadingOrTrailingSpace);
                }
            } else if lower.ends_with(ext.as_str()) {
                return Err(RejectionReason::ForbiddenExtension(ext.clone()));
            }
        }

        Ok(())
    }

    /// Check every segment of a folder path. Splits on both `/` and `\`;
    /// empty segments (leading, trailing or doubled separators) are
    /// skipped. Returns whether the whole path complies; per-segment
    /// reasons are not reported at this level.
    pub fn check_folder_path(&self, path: &str) -> bool {
        path.split(['/', '\\'])
            .filter(|segment| !segment.is_empty())
            .all(|segment| self.check_file_name(segment).is_ok())
    }
}

/// Whether a name denotes a hidden file (leading dot). Independent of any
/// server policy.
pub fn is_file_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Name without its trailing extension; the whole name when there is no
/// dot or the only dot is leading.
fn stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    }
}
