//! dk-core: Core library for the dk WebDAV client
//!
//! This crate provides the core functionality for davkit, including:
//! - File type classification with per-extension memoization
//! - Filename and path validation against a server naming policy
//! - Automatic correction of non-compliant names
//! - Display sanitizing against bidirectional-control spoofing
//! - Configuration, profile and path handling
//!
//! The classification and naming engine performs no network or disk I/O;
//! policy inputs arrive as an immutable [`CapabilitySnapshot`] constructed
//! by the caller (typically from a server capabilities document via the
//! dk-dav crate) and injected at construction time.

pub mod bidi;
pub mod cache;
pub mod capability;
pub mod config;
pub mod error;
pub mod filetype;
pub mod naming;
pub mod path;
pub mod profile;
pub mod rename;

pub use bidi::sanitize_for_bidi_characters;
pub use cache::TypeCache;
pub use capability::CapabilitySnapshot;
pub use config::{Config, ConfigManager};
pub use error::{Error, Result};
pub use filetype::{FileClass, FileIcon, FileType, TypeResolver};
pub use naming::{is_file_hidden, NamingPolicy, RejectionReason};
pub use path::{parse_path, ParsedPath, RemotePath};
pub use profile::{Profile, ProfileManager};
pub use rename::AutoRenamer;
