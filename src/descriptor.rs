//! File descriptors supplied by the display layer

use serde::{Deserialize, Serialize};

/// Immutable description of a file to preview.
///
/// The display layer supplies one of these per attachment; only `name` is
/// required. `mime_type` and `source_url` are passed through verbatim when
/// present and never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            source_url: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }

    /// Returns the lower-cased extension: the substring after the last `.` in
    /// the name, or the empty string when the name has no dot.
    pub fn extension(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => String::new(),
        }
    }

    /// Two descriptors share an identity when both name and source URL match.
    /// Preview state carries over only between same-identity descriptors.
    pub fn same_identity(&self, other: &FileDescriptor) -> bool {
        self.name == other.name && self.source_url == other.source_url
    }
}

/// Lookup key handed to the external icon table alongside icon decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconKey {
    pub extension: String,
    pub mime_type: Option<String>,
}

impl IconKey {
    pub fn for_descriptor(descriptor: &FileDescriptor) -> Self {
        Self {
            extension: descriptor.extension(),
            mime_type: descriptor.mime_type.clone(),
        }
    }
}
