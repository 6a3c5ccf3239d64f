//! Path parsing and resolution
//!
//! Handles parsing of remote paths in the format: profile/path[/subpath]
//! Local paths are passed through as-is.

use crate::error::{Error, Result};

/// A parsed remote path pointing to a location on a WebDAV server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePath {
    /// Profile name
    pub profile: String,
    /// Server-side path, relative to the account root (empty for the root)
    pub path: String,
    /// Whether the path ends with a slash (directory semantics)
    pub is_dir: bool,
}

impl RemotePath {
    /// Create a new RemotePath
    pub fn new(profile: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        let is_dir = path.ends_with('/') || path.is_empty();
        Self {
            profile: profile.into(),
            path,
            is_dir,
        }
    }

    /// Get the full path as a string (profile/path)
    pub fn to_full_path(&self) -> String {
        if self.path.is_empty() {
            self.profile.clone()
        } else {
            format!("{}/{}", self.profile, self.path)
        }
    }

    /// The final path segment (the file or folder name), empty at the root
    pub fn name(&self) -> &str {
        self.path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
    }

    /// Get the parent path (one level up)
    pub fn parent(&self) -> Option<Self> {
        if self.path.is_empty() {
            None
        } else {
            let path = self.path.trim_end_matches('/');
            match path.rfind('/') {
                Some(pos) => Some(Self {
                    profile: self.profile.clone(),
                    path: format!("{}/", &path[..pos]),
                    is_dir: true,
                }),
                None => Some(Self {
                    profile: self.profile.clone(),
                    path: String::new(),
                    is_dir: true,
                }),
            }
        }
    }

    /// Join a child path component
    pub fn join(&self, child: &str) -> Self {
        let base = self.path.trim_end_matches('/');
        let path = if base.is_empty() {
            child.to_string()
        } else {
            format!("{base}/{child}")
        };
        let is_dir = child.ends_with('/');
        Self {
            profile: self.profile.clone(),
            path,
            is_dir,
        }
    }
}

impl std::fmt::Display for RemotePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_full_path())
    }
}

/// Parsed path that can be either local or remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedPath {
    /// Local filesystem path
    Local(std::path::PathBuf),
    /// Remote WebDAV path
    Remote(RemotePath),
}

impl ParsedPath {
    /// Check if this is a remote path
    pub fn is_remote(&self) -> bool {
        matches!(self, ParsedPath::Remote(_))
    }

    /// Check if this is a local path
    pub fn is_local(&self) -> bool {
        matches!(self, ParsedPath::Local(_))
    }

    /// Get the remote path if this is a remote path
    pub fn as_remote(&self) -> Option<&RemotePath> {
        match self {
            ParsedPath::Remote(p) => Some(p),
            ParsedPath::Local(_) => None,
        }
    }

    /// Get the local path if this is a local path
    pub fn as_local(&self) -> Option<&std::path::PathBuf> {
        match self {
            ParsedPath::Local(p) => Some(p),
            ParsedPath::Remote(_) => None,
        }
    }
}

/// Parse a path string into a ParsedPath
///
/// Remote paths have the format: profile/path[/subpath]
/// Local paths are anything that:
/// - Starts with / (absolute path)
/// - Starts with ./ or ../ (relative path)
/// - Or doesn't match the profile/path pattern
pub fn parse_path(path: &str) -> Result<ParsedPath> {
    // Empty path is invalid
    if path.is_empty() {
        return Err(Error::InvalidPath("Path cannot be empty".into()));
    }

    // Absolute paths are local
    if path.starts_with('/') {
        return Ok(ParsedPath::Local(std::path::PathBuf::from(path)));
    }

    // Explicit relative paths are local
    if path.starts_with("./") || path.starts_with("../") {
        return Ok(ParsedPath::Local(std::path::PathBuf::from(path)));
    }

    // Windows absolute paths
    #[cfg(windows)]
    if path.len() >= 2 && path.chars().nth(1) == Some(':') {
        return Ok(ParsedPath::Local(std::path::PathBuf::from(path)));
    }

    // Try to parse as remote path
    match path.split_once('/') {
        None => {
            // A bare name containing a dot or backslash reads as a local
            // file in the current directory; a bare profile name is
            // incomplete for every operation.
            if path.contains('.') || path.contains('\\') {
                Ok(ParsedPath::Local(std::path::PathBuf::from(path)))
            } else {
                Err(Error::InvalidPath(format!(
                    "Path '{path}' is incomplete. Use format: profile/path"
                )))
            }
        }
        Some((profile, rest)) => {
            if !is_valid_profile_name(profile) {
                return Ok(ParsedPath::Local(std::path::PathBuf::from(path)));
            }

            if rest.is_empty() {
                return Err(Error::InvalidPath("Remote path cannot be empty".into()));
            }

            Ok(ParsedPath::Remote(RemotePath::new(profile, rest)))
        }
    }
}

/// Check if a string is a valid profile name
fn is_valid_profile_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remote_path() {
        let path = parse_path("cloud/docs/file.txt").unwrap();
        assert!(path.is_remote());

        let remote = path.as_remote().unwrap();
        assert_eq!(remote.profile, "cloud");
        assert_eq!(remote.path, "docs/file.txt");
        assert!(!remote.is_dir);
        assert_eq!(remote.name(), "file.txt");
    }

    #[test]
    fn test_parse_remote_path_dir() {
        let path = parse_path("cloud/docs/").unwrap();
        let remote = path.as_remote().unwrap();
        assert_eq!(remote.path, "docs/");
        assert!(remote.is_dir);
        assert_eq!(remote.name(), "docs");
    }

    #[test]
    fn test_parse_local_absolute_path() {
        let path = parse_path("/home/user/file.txt").unwrap();
        assert!(path.is_local());
        assert_eq!(
            path.as_local().unwrap().to_str().unwrap(),
            "/home/user/file.txt"
        );
    }

    #[test]
    fn test_parse_local_relative_path() {
        let path = parse_path("./file.txt").unwrap();
        assert!(path.is_local());

        let path = parse_path("../file.txt").unwrap();
        assert!(path.is_local());
    }

    #[test]
    fn test_parse_empty_path() {
        assert!(parse_path("").is_err());
    }

    #[test]
    fn test_parse_profile_only() {
        assert!(parse_path("cloud").is_err());
        assert!(parse_path("cloud/").is_err());
    }

    #[test]
    fn test_remote_path_parent() {
        let path = RemotePath::new("cloud", "a/b/c.txt");
        let parent = path.parent().unwrap();
        assert_eq!(parent.path, "a/b/");

        let parent = parent.parent().unwrap();
        assert_eq!(parent.path, "a/");

        let parent = parent.parent().unwrap();
        assert_eq!(parent.path, "");

        assert!(parent.parent().is_none());
    }

    #[test]
    fn test_remote_path_join() {
        let path = RemotePath::new("cloud", "");
        let child = path.join("dir/");
        assert_eq!(child.path, "dir/");
        assert!(child.is_dir);

        let file = child.join("file.txt");
        assert_eq!(file.path, "dir/file.txt");
        assert!(!file.is_dir);
    }

    #[test]
    fn test_remote_path_display() {
        let path = RemotePath::new("cloud", "docs/file.txt");
        assert_eq!(path.to_string(), "cloud/docs/file.txt");
    }

    #[test]
    fn test_local_path_with_dots() {
        // Files like "file.txt" in the current directory should be local
        let path = parse_path("some.file.txt");
        assert!(path.is_ok());
        assert!(path.unwrap().is_local());
    }
}
