//! Automatic correction of non-compliant names
//!
//! `AutoRenamer` deterministically rewrites a file or folder path into one
//! that passes [`NamingPolicy`](crate::naming::NamingPolicy) validation
//! under the same capability snapshot. It is a correction pipeline, not a
//! diagnostic one: it never fails and never reports what it changed. The
//! one violation it cannot correct is a reserved-name match on an otherwise
//! clean segment, which callers must surface through validation instead.
//!
//! Renaming is idempotent: re-applying it to its own output yields the
//! same string.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::capability::{CapabilitySnapshot, SPACE_SENTINEL};

/// Marker substituted for forbidden characters and extensions.
const REPLACEMENT: char = '_';

/// A forbidden-extension entry that is a real trailing extension: a dot
/// followed by alphanumerics, nothing else.
static FULL_EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.[a-zA-Z0-9]+$").expect("static pattern"));

/// Rewrites paths into policy-compliant ones. Captures its immutable view
/// of the capability snapshot at construction; no synchronization needed.
#[derive(Debug, Clone)]
pub struct AutoRenamer {
    enforce: bool,
    /// Lowercased forbidden characters.
    forbidden_chars: Vec<char>,
    /// Lowercased forbidden extensions, original order, sentinel excluded.
    forbidden_exts: Vec<String>,
    /// Trim leading/trailing whitespace per segment. Set when the policy
    /// forbids the space character or carries the whitespace sentinel.
    trim_edges: bool,
}

impl AutoRenamer {
    /// Build a renamer from a capability snapshot.
    pub fn new(capabilities: &Arc<CapabilitySnapshot>) -> Self {
        let forbidden_chars: Vec<char> = capabilities
            .forbidden_characters
            .iter()
            .filter_map(|s| s.chars().next())
            .flat_map(|c| c.to_lowercase())
            .collect();

        let trim_edges = forbidden_chars.contains(&' ')
            || capabilities
                .forbidden_extensions
                .iter()
                .any(|e| e == SPACE_SENTINEL);

        let forbidden_exts = capabilities
            .forbidden_extensions
            .iter()
            .filter(|e| e.as_str() != SPACE_SENTINEL)
            .map(|e| e.to_lowercase())
            .collect();

        Self {
            enforce: capabilities.enforce_policy,
            forbidden_chars,
            forbidden_exts,
            trim_edges,
        }
    }

    /// Rewrite `path` into a compliant path. Total: with enforcement off
    /// the input is returned unchanged, otherwise a best-effort sanitized
    /// string is produced.
    ///
    /// `is_folder_path` relaxes the `/` rule: folder paths are already
    /// `/`-delimited, so the separator is not treated as a forbidden
    /// character inside this call.
    pub fn rename(&self, path: &str, is_folder_path: bool) -> String {
        if !self.enforce {
            return path.to_string();
        }

        // Empty segments are preserved so leading/trailing slashes survive.
        let renamed: Vec<String> = path
            .split('/')
            .map(|segment| self.rename_segment(segment, is_folder_path))
            .collect();

        let joined = renamed.join("/");

        // Stray control or format scalars have no place in a stored name,
        // whatever the declared policy says.
        joined.chars().filter(|c| !is_stripped_scalar(*c)).collect()
    }

    fn rename_segment(&self, segment: &str, is_folder_path: bool) -> String {
        // Drop control/format scalars before any other rule so they cannot
        // mask a leading dot or a forbidden suffix from the checks below.
        let mut seg: String = segment.chars().filter(|c| !is_stripped_scalar(*c)).collect();

        if self.trim_edges {
            seg = seg.trim().to_string();
        }

        // Forbidden characters, matched case-insensitively.
        seg = seg
            .chars()
            .map(|c| {
                let forbidden = c
                    .to_lowercase()
                    .any(|lc| self.forbidden_chars.contains(&lc))
                    && !(is_folder_path && c == '/');
                if forbidden { REPLACEMENT } else { c }
            })
            .collect();

        // Forbidden entries that form the segment's real trailing
        // extension: defuse by replacing the dot, ".part" -> "_part".
        for ext in &self.forbidden_exts {
            if FULL_EXTENSION_RE.is_match(ext) {
                if let Some(tail) = case_insensitive_suffix(&seg, ext) {
                    seg.replace_range(tail..tail + 1, "_");
                }
            }
        }

        // Split off the (already sanitized) trailing extension, then catch
        // forbidden entries hiding at either end of the stem.
        let (mut base, ext) = split_extension(&seg);
        for forbidden in &self.forbidden_exts {
            if let Some(rest) = case_insensitive_prefix(&base, forbidden) {
                base = format!("{REPLACEMENT}{}", &base[rest..]);
            }
            if let Some(pos) = case_insensitive_suffix(&base, forbidden) {
                base.truncate(pos);
                base.push(REPLACEMENT);
            }
        }

        let mut result = base;
        if !ext.is_empty() {
            result.push('.');
            result.push_str(&ext.to_lowercase());
        }

        // Never fabricate a hidden file.
        if let Some(rest) = result.strip_prefix('.') {
            result = format!("{REPLACEMENT}{rest}");
        }

        result
    }
}

/// Split at the last interior dot: (`base`, `ext`). A leading dot does not
/// start an extension.
fn split_extension(segment: &str) -> (String, String) {
    match segment.rfind('.') {
        Some(pos) if pos > 0 => (segment[..pos].to_string(), segment[pos + 1..].to_string()),
        _ => (segment.to_string(), String::new()),
    }
}

/// Byte offset where `needle` starts if `haystack` ends with it
/// (ASCII-case-insensitively), else None.
fn case_insensitive_suffix(haystack: &str, needle: &str) -> Option<usize> {
    let pos = haystack.len().checked_sub(needle.len())?;
    if haystack.is_char_boundary(pos) && haystack[pos..].eq_ignore_ascii_case(needle) {
        Some(pos)
    } else {
        None
    }
}

/// Length of `needle` if `haystack` starts with it
/// (ASCII-case-insensitively), else None.
fn case_insensitive_prefix(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    if haystack.is_char_boundary(needle.len())
        && haystack[..needle.len()].eq_ignore_ascii_case(needle)
    {
        Some(needle.len())
    } else {
        None
    }
}

/// Control and Unicode format scalars that are dropped from final output.
fn is_stripped_scalar(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{00AD}'
                | '\u{061C}'
                | '\u{180E}'
                | '\u{200B}'..='\u{200F}'
                | '\u{202A}'..='\u{202E}'
                | '\u{2060}'..='\u{2064}'
                | '\u{2066}'..='\u{206F}'
                | '\u{FEFF}'
                | '\u{FFF9}'..='\u{FFFB}'
        )
}
