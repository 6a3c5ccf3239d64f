//! dk-dav: server capability decoding for davkit
//!
//! This crate sits at the boundary between the networking layer and the
//! dk-core naming engine: it decodes the JSON capabilities document a
//! WebDAV drive server advertises (OCS envelope) into the immutable
//! [`CapabilitySnapshot`](dk_core::CapabilitySnapshot) the engine consumes.
//! Fetching the document over HTTP is the caller's concern.

pub mod capabilities;

pub use capabilities::{snapshot_from_document, snapshot_from_json, CapabilitiesDocument};
