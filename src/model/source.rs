//! Providers of model descriptors.

use crate::error::VizError;
use crate::model::{Manifest, ModelDescriptor};
use log::debug;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Anything that can hand over the host's resolved model list
pub trait ModelSource {
    fn models(&self) -> Result<Vec<ModelDescriptor>, VizError>;
}

impl ModelSource for Vec<ModelDescriptor> {
    fn models(&self) -> Result<Vec<ModelDescriptor>, VizError> {
        Ok(self.clone())
    }
}

impl ModelSource for [ModelDescriptor] {
    fn models(&self) -> Result<Vec<ModelDescriptor>, VizError> {
        Ok(self.to_vec())
    }
}

/// Serialization of a manifest document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for ManifestFormat {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ManifestFormat::Json),
            "yaml" | "yml" => Ok(ManifestFormat::Yaml),
            _ => Err(VizError::UnknownFormat {
                what: "manifest format",
                value: s.to_string(),
                valid: "json, yaml",
            }),
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestFormat::Json => write!(f, "json"),
            ManifestFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl ManifestFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ManifestFormat::Json),
            "yml" | "yaml" => Some(ManifestFormat::Yaml),
            _ => None,
        }
    }

    fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(ManifestFormat::from_extension)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
enum ManifestInput {
    File(PathBuf),
    Stdin,
    Text(String),
}

/// A manifest exported by the host, read from a file, stdin or memory
#[derive(Debug, Clone)]
pub struct ManifestSource {
    input: ManifestInput,
    format: ManifestFormat,
}

impl ManifestSource {
    /// Read from `path`; `-` means stdin. The format is inferred from the
    /// extension unless overridden with [`ManifestSource::with_format`].
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str() == "-" {
            return Self {
                input: ManifestInput::Stdin,
                format: ManifestFormat::Json,
            };
        }
        let format = ManifestFormat::from_path(&path);
        Self {
            input: ManifestInput::File(path),
            format,
        }
    }

    pub fn from_text(text: impl Into<String>, format: ManifestFormat) -> Self {
        Self {
            input: ManifestInput::Text(text.into()),
            format,
        }
    }

    pub fn with_format(mut self, format: ManifestFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> ManifestFormat {
        self.format
    }

    fn read_text(&self) -> Result<String, VizError> {
        match &self.input {
            ManifestInput::File(path) => fs::read_to_string(path).map_err(|source| VizError::Io {
                path: path.clone(),
                source,
            }),
            ManifestInput::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|source| VizError::Io {
                        path: PathBuf::from("-"),
                        source,
                    })?;
                Ok(buf)
            }
            ManifestInput::Text(text) => Ok(text.clone()),
        }
    }

    pub fn load(&self) -> Result<Manifest, VizError> {
        let text = self.read_text()?;
        debug!("Parsing {} model manifest", self.format);
        let manifest = match self.format {
            ManifestFormat::Json => serde_json::from_str(&text)?,
            ManifestFormat::Yaml => serde_yaml_ng::from_str(&text)?,
        };
        Ok(manifest)
    }
}

impl ModelSource for ManifestSource {
    fn models(&self) -> Result<Vec<ModelDescriptor>, VizError> {
        Ok(self.load()?.models)
    }
}
