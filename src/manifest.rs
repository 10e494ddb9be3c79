//! Descriptor manifests: JSON input for batch classification

use crate::descriptor::FileDescriptor;
use crate::error::{PrevuError, Result};
use std::fs;
use std::path::Path;

/// Loads a manifest: a JSON array of file descriptors.
///
/// Only `name` is required per entry; `mime_type` and `source_url` default to
/// absent when omitted.
pub fn load_manifest(path: &Path) -> Result<Vec<FileDescriptor>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| PrevuError::Manifest(format!("Failed to read manifest file: {}", e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| PrevuError::Manifest(format!("Failed to parse manifest: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_manifest_full_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attachments.json");
        fs::write(
            &path,
            r#"[
                {"name": "photo.jpg", "mime_type": "image/jpeg", "source_url": "http://x/photo.jpg"},
                {"name": "doc.pdf", "source_url": "http://x/doc.pdf"},
                {"name": "README"}
            ]"#,
        )
        .unwrap();

        let descriptors = load_manifest(&path).unwrap();

        assert_eq!(descriptors.len(), 3);
        assert_eq!(descriptors[0].name, "photo.jpg");
        assert_eq!(descriptors[0].mime_type.as_deref(), Some("image/jpeg"));
        assert!(descriptors[1].mime_type.is_none());
        assert!(descriptors[2].source_url.is_none());
    }

    #[test]
    fn test_load_manifest_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "[]").unwrap();

        let descriptors = load_manifest(&path).unwrap();
        assert!(descriptors.is_empty());
    }

    #[test]
    fn test_load_manifest_missing_file() {
        let result = load_manifest(Path::new("/nonexistent/attachments.json"));
        assert!(matches!(result, Err(PrevuError::Manifest(_))));
    }

    #[test]
    fn test_load_manifest_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not a manifest").unwrap();

        let result = load_manifest(&path);
        assert!(matches!(result, Err(PrevuError::Manifest(_))));
    }

    #[test]
    fn test_load_manifest_entry_without_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("noname.json");
        fs::write(&path, r#"[{"mime_type": "image/png"}]"#).unwrap();

        let result = load_manifest(&path);
        assert!(matches!(result, Err(PrevuError::Manifest(_))));
    }
}
