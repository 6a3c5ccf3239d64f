//! File type classification
//!
//! Maps a file extension to a semantic classification: a coarse class used
//! by upload and preview logic, an icon tag used by UI layers, a content
//! type for transfer headers, and a short semantic name. Resolution is
//! deterministic and total; anything unrecognized lands on
//! `Unknown`/`FileIcon::File` rather than failing.
//!
//! Resolution rules run in strict priority order (directories first, then
//! well-known top-level categories, then an explicit table of legacy
//! productivity formats, then server-declared rich-document types, then a
//! generic document fallback). Results for non-directory lookups are
//! memoized per extension in a [`TypeCache`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::TypeCache;
use crate::capability::CapabilitySnapshot;

/// Content type reported for directories.
pub const DIRECTORY_CONTENT_TYPE: &str = "httpd/unix-directory";

/// Content type reported when nothing else matches.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Coarse classification of a file, used to pick preview and upload behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileClass {
    Image,
    Video,
    Audio,
    Archive,
    Document,
    Directory,
    Url,
    Unknown,
}

impl FileClass {
    /// Stable lowercase tag for display and JSON output.
    pub const fn as_str(self) -> &'static str {
        match self {
            FileClass::Image => "image",
            FileClass::Video => "video",
            FileClass::Audio => "audio",
            FileClass::Archive => "archive",
            FileClass::Document => "document",
            FileClass::Directory => "directory",
            FileClass::Url => "url",
            FileClass::Unknown => "unknown",
        }
    }
}

/// Icon tag consumed by UI layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileIcon {
    Audio,
    Code,
    Compress,
    Directory,
    Document,
    Image,
    Movie,
    Pdf,
    Ppt,
    Txt,
    Xls,
    Url,
    /// Generic file icon, the fallback.
    File,
}

impl FileIcon {
    /// Stable lowercase tag for display and JSON output.
    pub const fn as_str(self) -> &'static str {
        match self {
            FileIcon::Audio => "audio",
            FileIcon::Code => "code",
            FileIcon::Compress => "compress",
            FileIcon::Directory => "directory",
            FileIcon::Document => "document",
            FileIcon::Image => "image",
            FileIcon::Movie => "movie",
            FileIcon::Pdf => "pdf",
            FileIcon::Ppt => "ppt",
            FileIcon::Txt => "txt",
            FileIcon::Xls => "xls",
            FileIcon::Url => "url",
            FileIcon::File => "file",
        }
    }
}

/// Resolved type information for one extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileType {
    /// Lowercase extension this entry was resolved from (empty for
    /// directories).
    pub extension: String,
    /// Content type for transfer headers and preview selection.
    pub content_type: String,
    /// Coarse classification.
    pub class: FileClass,
    /// Icon tag.
    pub icon: FileIcon,
    /// Short semantic name, e.g. "image", "markdown", "keynote".
    pub name: String,
}

impl FileType {
    fn directory() -> Self {
        Self {
            extension: String::new(),
            content_type: DIRECTORY_CONTENT_TYPE.to_string(),
            class: FileClass::Directory,
            icon: FileIcon::Directory,
            name: "directory".to_string(),
        }
    }

    fn unknown(ext: &str) -> Self {
        Self {
            extension: ext.to_string(),
            content_type: FALLBACK_CONTENT_TYPE.to_string(),
            class: FileClass::Unknown,
            icon: FileIcon::File,
            name: "file".to_string(),
        }
    }
}

/// Explicit table of legacy productivity formats keyed by exact content
/// type. These do not share a common top-level MIME category, so they are
/// matched after the category checks and before any fallback.
const LEGACY_DOCUMENT_TYPES: &[(&str, FileClass, FileIcon, &str)] = &[
    (
        "application/msword",
        FileClass::Document,
        FileIcon::Document,
        "document",
    ),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        FileClass::Document,
        FileIcon::Document,
        "document",
    ),
    (
        "application/vnd.oasis.opendocument.text",
        FileClass::Document,
        FileIcon::Document,
        "document",
    ),
    (
        "application/vnd.ms-powerpoint",
        FileClass::Document,
        FileIcon::Ppt,
        "presentation",
    ),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        FileClass::Document,
        FileIcon::Ppt,
        "presentation",
    ),
    (
        "application/vnd.oasis.opendocument.presentation",
        FileClass::Document,
        FileIcon::Ppt,
        "presentation",
    ),
    (
        "application/vnd.ms-excel",
        FileClass::Document,
        FileIcon::Xls,
        "spreadsheet",
    ),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        FileClass::Document,
        FileIcon::Xls,
        "spreadsheet",
    ),
    (
        "application/vnd.oasis.opendocument.spreadsheet",
        FileClass::Document,
        FileIcon::Xls,
        "spreadsheet",
    ),
    (
        "application/x-iwork-keynote-sffkey",
        FileClass::Document,
        FileIcon::Ppt,
        "keynote",
    ),
    (
        "application/x-iwork-numbers-sffnumbers",
        FileClass::Document,
        FileIcon::Xls,
        "numbers",
    ),
    (
        "application/x-iwork-pages-sffpages",
        FileClass::Document,
        FileIcon::Document,
        "pages",
    ),
];

/// Archive subtypes recognized by the top-level category check.
const ARCHIVE_SUBTYPES: &[&str] = &[
    "zip",
    "gzip",
    "x-tar",
    "x-7z-compressed",
    "x-rar-compressed",
    "x-bzip2",
    "x-xz",
];

/// Markup/code subtypes rendered with the code icon.
const CODE_SUBTYPES: &[&str] = &[
    "html",
    "xhtml+xml",
    "xml",
    "javascript",
    "json",
    "css",
];

/// Internet-shortcut extensions; these have no reliable MIME mapping and
/// are matched by extension directly.
const SHORTCUT_EXTENSIONS: &[&str] = &["url", "webloc"];

/// Resolves extensions to [`FileType`] values against one capability
/// snapshot.
///
/// Holds the only shared mutable state in the engine (the memoization
/// cache) and is safe to share across threads. One resolver per capability
/// snapshot: when the server refreshes capabilities, drop the resolver and
/// build a new one.
#[derive(Debug)]
pub struct TypeResolver {
    capabilities: Arc<CapabilitySnapshot>,
    cache: TypeCache,
}

impl TypeResolver {
    /// Create a resolver over the given snapshot.
    pub fn new(capabilities: Arc<CapabilitySnapshot>) -> Self {
        Self {
            capabilities,
            cache: TypeCache::new(),
        }
    }

    /// Resolve an extension (with or without its leading dot) to a file
    /// type. Total: always returns a value.
    ///
    /// Directories short-circuit every other rule and are never cached
    /// (they carry no extension). Non-directory results are memoized per
    /// lowercase extension; repeat lookups never re-run classification.
    pub fn resolve(&self, extension: &str, is_directory: bool) -> FileType {
        if is_directory {
            return FileType::directory();
        }

        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        if let Some(hit) = self.cache.get(&ext) {
            return hit;
        }

        // Compute outside the lock, then publish. A concurrent first
        // lookup may compute the same value redundantly; both results are
        // identical.
        let resolved = self.classify(&ext);
        debug!(extension = %ext, class = resolved.class.as_str(), "classified extension");
        self.cache.put(ext, resolved.clone());
        resolved
    }

    /// Number of memoized extensions.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    fn classify(&self, ext: &str) -> FileType {
        if SHORTCUT_EXTENSIONS.contains(&ext) {
            return FileType {
                extension: ext.to_string(),
                content_type: "application/internet-shortcut".to_string(),
                class: FileClass::Url,
                icon: FileIcon::Url,
                name: "url".to_string(),
            };
        }

        let Some(mime) = mime_guess::from_ext(ext).first() else {
            return FileType::unknown(ext);
        };
        let content_type = mime.essence_str().to_string();
        let (top, sub) = (mime.type_().as_str(), mime.subtype().as_str());

        let make = |class, icon, name: &str| FileType {
            extension: ext.to_string(),
            content_type: content_type.clone(),
            class,
            icon,
            name: name.to_string(),
        };

        // Ordered top-level category checks; first match wins.
        if top == "image" {
            return make(FileClass::Image, FileIcon::Image, "image");
        }
        if top == "video" {
            return make(FileClass::Video, FileIcon::Movie, "movie");
        }
        if top == "audio" {
            return make(FileClass::Audio, FileIcon::Audio, "audio");
        }
        if ARCHIVE_SUBTYPES.contains(&sub) {
            return make(FileClass::Archive, FileIcon::Compress, "archive");
        }
        if CODE_SUBTYPES.contains(&sub) {
            return make(FileClass::Document, FileIcon::Code, "markup");
        }
        if content_type == "application/pdf" {
            return make(FileClass::Document, FileIcon::Pdf, "pdf");
        }
        if sub == "rtf" {
            return make(FileClass::Document, FileIcon::Document, "richtext");
        }
        if sub == "markdown" {
            return make(FileClass::Document, FileIcon::Txt, "markdown");
        }
        if top == "text" {
            return make(FileClass::Document, FileIcon::Txt, "text");
        }

        // Legacy productivity formats, by exact content type.
        for (id, class, icon, name) in LEGACY_DOCUMENT_TYPES {
            if content_type == *id {
                return make(*class, *icon, name);
            }
        }

        // Server-declared rich-document types.
        if self
            .capabilities
            .rich_content_types
            .iter()
            .any(|t| t == &content_type)
        {
            return make(FileClass::Document, FileIcon::Document, "document");
        }

        // Generic content fallback: any resolvable type except the opaque
        // byte-stream still reads as a document.
        if content_type != FALLBACK_CONTENT_TYPE {
            return make(FileClass::Document, FileIcon::Document, "document");
        }

        FileType::unknown(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> TypeResolver {
        TypeResolver::new(Arc::new(CapabilitySnapshot::default()))
    }

    #[test]
    fn test_directory_short_circuits() {
        let r = resolver();
        let t = r.resolve("jpg", true);
        assert_eq!(t.class, FileClass::Directory);
        assert_eq!(t.icon, FileIcon::Directory);
        assert_eq!(t.content_type, DIRECTORY_CONTENT_TYPE);
        assert!(t.extension.is_empty());
        // Directory results are not cached.
        assert_eq!(r.cached_len(), 0);
    }

    #[test]
    fn test_image_extension() {
        let r = resolver();
        let t = r.resolve("jpg", false);
        assert_eq!(t.class, FileClass::Image);
        assert_eq!(t.icon, FileIcon::Image);
        assert_eq!(t.content_type, "image/jpeg");
        assert_eq!(t.name, "image");
    }

    #[test]
    fn test_leading_dot_and_case_are_normalized() {
        let r = resolver();
        let a = r.resolve(".JPG", false);
        let b = r.resolve("jpg", false);
        assert_eq!(a, b);
        assert_eq!(r.cached_len(), 1);
    }

    #[test]
    fn test_video_audio_archive() {
        let r = resolver();
        assert_eq!(r.resolve("mp4", false).class, FileClass::Video);
        assert_eq!(r.resolve("mp4", false).icon, FileIcon::Movie);
        assert_eq!(r.resolve("mp3", false).class, FileClass::Audio);
        assert_eq!(r.resolve("zip", false).class, FileClass::Archive);
        assert_eq!(r.resolve("zip", false).icon, FileIcon::Compress);
    }

    #[test]
    fn test_pdf_and_text() {
        let r = resolver();
        let pdf = r.resolve("pdf", false);
        assert_eq!(pdf.class, FileClass::Document);
        assert_eq!(pdf.icon, FileIcon::Pdf);

        let md = r.resolve("md", false);
        assert_eq!(md.class, FileClass::Document);
        assert_eq!(md.name, "markdown");

        let txt = r.resolve("txt", false);
        assert_eq!(txt.icon, FileIcon::Txt);
    }

    #[test]
    fn test_html_is_markup() {
        let r = resolver();
        let t = r.resolve("html", false);
        assert_eq!(t.class, FileClass::Document);
        assert_eq!(t.icon, FileIcon::Code);
    }

    #[test]
    fn test_legacy_productivity_formats() {
        let r = resolver();
        let docx = r.resolve("docx", false);
        assert_eq!(docx.class, FileClass::Document);
        assert_eq!(docx.icon, FileIcon::Document);

        let pptx = r.resolve("pptx", false);
        assert_eq!(pptx.icon, FileIcon::Ppt);
        assert_eq!(pptx.name, "presentation");

        let xlsx = r.resolve("xlsx", false);
        assert_eq!(xlsx.icon, FileIcon::Xls);
        assert_eq!(xlsx.name, "spreadsheet");
    }

    #[test]
    fn test_internet_shortcut() {
        let r = resolver();
        let t = r.resolve("url", false);
        assert_eq!(t.class, FileClass::Url);
        assert_eq!(t.icon, FileIcon::Url);
    }

    #[test]
    fn test_rich_content_type_from_capabilities() {
        let caps = CapabilitySnapshot {
            rich_content_types: vec!["application/vnd.visio".to_string()],
            ..CapabilitySnapshot::default()
        };
        let r = TypeResolver::new(Arc::new(caps));
        let t = r.resolve("vsd", false);
        assert_eq!(t.class, FileClass::Document);
        assert_eq!(t.icon, FileIcon::Document);
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        let r = resolver();
        let t = r.resolve("zzz999unknown", false);
        assert_eq!(t.class, FileClass::Unknown);
        assert_eq!(t.icon, FileIcon::File);
        assert_eq!(t.content_type, FALLBACK_CONTENT_TYPE);
        assert_eq!(t.name, "file");
    }

    #[test]
    fn test_resolution_is_stable_and_cached() {
        let r = resolver();
        let first = r.resolve("jpg", false);
        for _ in 0..10 {
            assert_eq!(r.resolve("jpg", false), first);
        }
        assert_eq!(r.cached_len(), 1);
    }

    #[test]
    fn test_concurrent_resolution_single_entry() {
        let r = resolver();
        let results: Vec<FileType> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(|| r.resolve("jpg", false))).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for t in &results {
            assert_eq!(t.class, FileClass::Image);
        }
        assert_eq!(r.cached_len(), 1);
    }
}
