//! Server-declared naming policy
//!
//! A `CapabilitySnapshot` is an immutable value holding the naming policy a
//! server advertises for an account session: forbidden characters, forbidden
//! extensions, reserved names, and the set of collaborative-editor content
//! types. It is constructed once per session by the capabilities layer and
//! injected into [`NamingPolicy`](crate::naming::NamingPolicy),
//! [`AutoRenamer`](crate::rename::AutoRenamer) and
//! [`TypeResolver`](crate::filetype::TypeResolver) at construction time.
//! Components never reach for shared global state.
//!
//! The snapshot is treated as untrusted configuration: no assumptions are
//! made about list lengths or entry contents beyond "sequence of strings".

use serde::{Deserialize, Serialize};

/// Sentinel entry in `forbidden_extensions` meaning "no leading or trailing
/// whitespace" rather than an actual extension.
pub const SPACE_SENTINEL: &str = " ";

/// Immutable naming policy in effect for one account session.
///
/// Lives for the lifetime of the resolver/validator instances built from it;
/// when the server refreshes its capabilities, callers drop those instances
/// and construct new ones from a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySnapshot {
    /// Characters that must not appear in file or folder names.
    /// Each entry is a single-character string as sent by the server.
    #[serde(default)]
    pub forbidden_characters: Vec<String>,

    /// Extensions that must not terminate a file name (case-insensitive,
    /// ordered; a literal single-space entry is the whitespace sentinel).
    #[serde(default)]
    pub forbidden_extensions: Vec<String>,

    /// Full names that are reserved (case-insensitive).
    #[serde(default)]
    pub forbidden_names: Vec<String>,

    /// Names that are reserved regardless of extension (case-insensitive,
    /// e.g. legacy device names).
    #[serde(default)]
    pub forbidden_basenames: Vec<String>,

    /// Master switch: when false, validation always accepts and renaming
    /// is the identity function.
    #[serde(default)]
    pub enforce_policy: bool,

    /// Server-declared collaborative-editor content types; members classify
    /// as documents even when no static rule matches.
    #[serde(default)]
    pub rich_content_types: Vec<String>,
}

impl CapabilitySnapshot {
    /// Snapshot with enforcement disabled and no policy data.
    ///
    /// Matches the behavior of talking to a server that advertises no
    /// filename policy at all.
    pub fn permissive() -> Self {
        Self {
            forbidden_characters: Vec::new(),
            forbidden_extensions: Vec::new(),
            forbidden_names: Vec::new(),
            forbidden_basenames: Vec::new(),
            enforce_policy: false,
            rich_content_types: Vec::new(),
        }
    }
}

impl Default for CapabilitySnapshot {
    /// The policy most drive servers ship out of the box: path separators
    /// and Windows-reserved characters forbidden, legacy device names
    /// reserved, upload-partial extensions rejected.
    fn default() -> Self {
        Self {
            forbidden_characters: ["\\", "/", ":", "*", "?", "\"", "<", ">", "|"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            forbidden_extensions: [SPACE_SENTINEL, ".filepart", ".part"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            forbidden_names: Vec::new(),
            forbidden_basenames: [
                "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6",
                "COM7", "COM8", "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7",
                "LPT8", "LPT9",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            enforce_policy: true,
            rich_content_types: Vec::new(),
        }
    }
}
