// CLI module for argument parsing and validation

use crate::descriptor::FileDescriptor;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Prevu - resolves the preview representation for file attachments
///
/// Feed it a manifest of file descriptors (or a single one via flags) and it
/// prints the preview decision a display layer should render for each.
#[derive(Parser, Debug, Clone)]
#[command(name = "prevu")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON manifest: an array of {name, mime_type?, source_url?}
    pub manifest: Option<PathBuf>,

    /// File name for a one-off descriptor (alternative to a manifest)
    #[arg(long = "name")]
    pub name: Option<String>,

    /// MIME type for the one-off descriptor
    #[arg(long = "mime", requires = "name")]
    pub mime: Option<String>,

    /// Source URL for the one-off descriptor
    #[arg(long = "url", requires = "name")]
    pub url: Option<String>,

    /// Classify as if the image load had already failed
    ///
    /// Shows the demoted decision a display layer would fall back to.
    #[arg(long = "assume-failed", action = ArgAction::SetTrue)]
    pub assume_failed: bool,

    /// Output format (defaults to the user config when omitted)
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One human-readable line per descriptor
    #[default]
    Plain,
    /// One JSON object per descriptor
    Json,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the arguments and return any errors
    pub fn validate(&self) -> Result<(), String> {
        if self.manifest.is_none() && self.name.is_none() {
            return Err("Provide a manifest path or --name for a single descriptor".to_string());
        }

        if self.manifest.is_some() && self.name.is_some() {
            return Err("A manifest and --name are mutually exclusive".to_string());
        }

        if let Some(ref manifest) = self.manifest {
            if !manifest.exists() {
                return Err(format!("Manifest does not exist: {}", manifest.display()));
            }

            if !manifest.is_file() {
                return Err(format!("Manifest is not a file: {}", manifest.display()));
            }
        }

        Ok(())
    }

    /// Build the one-off descriptor from --name/--mime/--url, if given
    pub fn inline_descriptor(&self) -> Option<FileDescriptor> {
        self.name.as_ref().map(|name| FileDescriptor {
            name: name.clone(),
            mime_type: self.mime.clone(),
            source_url: self.url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            manifest: None,
            name: None,
            mime: None,
            url: None,
            assume_failed: false,
            format: None,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_requires_some_input() {
        let args = base_args();
        let result = args.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("manifest path or --name"));
    }

    #[test]
    fn test_validate_rejects_manifest_and_name() {
        let args = Args {
            manifest: Some(PathBuf::from(".")),
            name: Some("a.png".to_string()),
            ..base_args()
        };
        let result = args.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("mutually exclusive"));
    }

    #[test]
    fn test_validate_nonexistent_manifest() {
        let args = Args {
            manifest: Some(PathBuf::from("/nonexistent/manifest.json")),
            ..base_args()
        };
        let result = args.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("does not exist"));
    }

    #[test]
    fn test_validate_inline_descriptor_ok() {
        let args = Args {
            name: Some("photo.jpg".to_string()),
            mime: Some("image/jpeg".to_string()),
            url: Some("http://x/photo.jpg".to_string()),
            ..base_args()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_inline_descriptor_fields() {
        let args = Args {
            name: Some("photo.jpg".to_string()),
            mime: Some("image/jpeg".to_string()),
            url: Some("http://x/photo.jpg".to_string()),
            ..base_args()
        };

        let desc = args.inline_descriptor().unwrap();
        assert_eq!(desc.name, "photo.jpg");
        assert_eq!(desc.mime_type.as_deref(), Some("image/jpeg"));
        assert_eq!(desc.source_url.as_deref(), Some("http://x/photo.jpg"));
    }

    #[test]
    fn test_inline_descriptor_absent_without_name() {
        assert!(base_args().inline_descriptor().is_none());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }
}
