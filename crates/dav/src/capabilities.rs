//! Capabilities document decoding
//!
//! Drive servers advertise their naming policy inside the OCS capabilities
//! response:
//!
//! ```json
//! {
//!   "ocs": {
//!     "data": {
//!       "capabilities": {
//!         "files": {
//!           "forbidden_filename_characters": ["\\", "/"],
//!           "forbidden_filename_extensions": [".part", " "],
//!           "forbidden_filenames": [".htaccess"],
//!           "forbidden_filename_basenames": ["con", "prn"]
//!         },
//!         "richdocuments": { "mimetypes": ["application/vnd.oasis.opendocument.text"] }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! The document is untrusted configuration: every section is optional and
//! absent fields decode to empty lists. Enforcement is on exactly when the
//! server advertises any of the forbidden-filename fields.

use serde::Deserialize;
use tracing::debug;

use dk_core::{CapabilitySnapshot, Error, Result};

/// OCS envelope of a capabilities response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapabilitiesDocument {
    #[serde(default)]
    pub ocs: Ocs,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ocs {
    #[serde(default)]
    pub data: OcsData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OcsData {
    #[serde(default)]
    pub capabilities: Capabilities,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub files: Option<FilesCapability>,
    #[serde(default)]
    pub richdocuments: Option<RichDocumentsCapability>,
}

/// The `files` capability section carrying the filename policy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilesCapability {
    #[serde(default)]
    pub forbidden_filename_characters: Option<Vec<String>>,
    #[serde(default)]
    pub forbidden_filename_extensions: Option<Vec<String>>,
    #[serde(default)]
    pub forbidden_filenames: Option<Vec<String>>,
    #[serde(default)]
    pub forbidden_filename_basenames: Option<Vec<String>>,
}

impl FilesCapability {
    /// Whether the server declared any filename policy at all.
    fn declares_policy(&self) -> bool {
        self.forbidden_filename_characters.is_some()
            || self.forbidden_filename_extensions.is_some()
            || self.forbidden_filenames.is_some()
            || self.forbidden_filename_basenames.is_some()
    }
}

/// The collaborative-editor capability section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichDocumentsCapability {
    #[serde(default)]
    pub mimetypes: Vec<String>,
}

/// Build a snapshot from an already-parsed capabilities document.
pub fn snapshot_from_document(doc: &CapabilitiesDocument) -> CapabilitySnapshot {
    let caps = &doc.ocs.data.capabilities;

    let files = caps.files.clone().unwrap_or_default();
    let enforce = files.declares_policy();

    let rich_content_types = caps
        .richdocuments
        .clone()
        .map(|r| r.mimetypes)
        .unwrap_or_default();

    debug!(
        enforce,
        rich_types = rich_content_types.len(),
        "decoded server capabilities"
    );

    CapabilitySnapshot {
        forbidden_characters: files.forbidden_filename_characters.unwrap_or_default(),
        forbidden_extensions: files.forbidden_filename_extensions.unwrap_or_default(),
        forbidden_names: files.forbidden_filenames.unwrap_or_default(),
        forbidden_basenames: files.forbidden_filename_basenames.unwrap_or_default(),
        enforce_policy: enforce,
        rich_content_types,
    }
}

/// Parse a raw capabilities JSON document into a snapshot.
pub fn snapshot_from_json(json: &str) -> Result<CapabilitySnapshot> {
    let doc: CapabilitiesDocument = serde_json::from_str(json)
        .map_err(|e| Error::Capability(format!("malformed capabilities document: {e}")))?;
    Ok(snapshot_from_document(&doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_DOCUMENT: &str = r#"{
        "ocs": {
            "data": {
                "capabilities": {
                    "files": {
                        "forbidden_filename_characters": ["\\", "/", ":"],
                        "forbidden_filename_extensions": [".part", ".filepart", " "],
                        "forbidden_filenames": [".htaccess"],
                        "forbidden_filename_basenames": ["con", "prn", "aux"]
                    },
                    "richdocuments": {
                        "mimetypes": ["application/vnd.oasis.opendocument.text"]
                    }
                }
            }
        }
    }"#;

    #[test]
    fn test_full_document() {
        let caps = snapshot_from_json(FULL_DOCUMENT).unwrap();
        assert!(caps.enforce_policy);
        assert_eq!(caps.forbidden_characters, vec!["\\", "/", ":"]);
        assert_eq!(caps.forbidden_extensions, vec![".part", ".filepart", " "]);
        assert_eq!(caps.forbidden_names, vec![".htaccess"]);
        assert_eq!(caps.forbidden_basenames, vec!["con", "prn", "aux"]);
        assert_eq!(
            caps.rich_content_types,
            vec!["application/vnd.oasis.opendocument.text"]
        );
    }

    #[test]
    fn test_empty_document_is_permissive() {
        let caps = snapshot_from_json("{}").unwrap();
        assert!(!caps.enforce_policy);
        assert!(caps.forbidden_characters.is_empty());
        assert!(caps.rich_content_types.is_empty());
    }

    #[test]
    fn test_files_section_without_policy_fields() {
        let caps = snapshot_from_json(
            r#"{"ocs":{"data":{"capabilities":{"files":{}}}}}"#,
        )
        .unwrap();
        assert!(!caps.enforce_policy);
    }

    #[test]
    fn test_partial_policy_enables_enforcement() {
        let caps = snapshot_from_json(
            r#"{"ocs":{"data":{"capabilities":{"files":{"forbidden_filename_characters":["%"]}}}}}"#,
        )
        .unwrap();
        assert!(caps.enforce_policy);
        assert_eq!(caps.forbidden_characters, vec!["%"]);
        assert!(caps.forbidden_extensions.is_empty());
    }

    #[test]
    fn test_malformed_document_errors() {
        assert!(snapshot_from_json("not json").is_err());
        assert!(snapshot_from_json(r#"{"ocs": 42}"#).is_err());
    }

    #[test]
    fn test_snapshot_feeds_engine() {
        use std::sync::Arc;

        let caps = Arc::new(snapshot_from_json(FULL_DOCUMENT).unwrap());
        let policy = dk_core::NamingPolicy::new(&caps);
        assert!(policy.check_file_name("con.txt").is_err());
        assert!(policy.check_file_name("report.txt").is_ok());

        let renamer = dk_core::AutoRenamer::new(&caps);
        assert_eq!(renamer.rename("a:b.part", false), "a_b_part");
    }
}
