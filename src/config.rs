//! Configuration for the graph command.
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! command-line flags.

use crate::graph::{ModelFilter, Mode, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// YAML configuration file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VizYamlConfig {
    /// `relations` or `columns`; anything else means relations
    pub mode: Option<String>,
    /// Output format: mermaid, html, json
    pub format: Option<String>,
    /// Page title for HTML output
    pub title: Option<String>,
    /// Only include models matching these globs
    pub only: Vec<String>,
    /// Exclude models matching these globs
    pub exclude: Vec<String>,
}

impl VizYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: VizYamlConfig = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }
}

/// Command-line overrides; `None`/empty means "not given"
#[derive(Debug, Clone, Default)]
pub struct GraphOverrides {
    pub mode: Option<String>,
    pub format: Option<String>,
    pub title: Option<String>,
    pub only: Vec<String>,
    pub exclude: Vec<String>,
    pub json: bool,
}

/// Resolved runtime configuration for one graph invocation
#[derive(Debug)]
pub struct GraphConfig {
    pub mode: Mode,
    pub format: OutputFormat,
    pub title: String,
    pub filter: ModelFilter,
}

pub const DEFAULT_TITLE: &str = "Model Relationships";

impl GraphConfig {
    /// Merge the YAML file (if any) with command-line overrides.
    ///
    /// Format precedence: `--json`, `--format`, config file, output
    /// extension, then Mermaid.
    pub fn resolve(
        file: Option<&VizYamlConfig>,
        cli: GraphOverrides,
        output: Option<&PathBuf>,
    ) -> anyhow::Result<Self> {
        let file = file.cloned().unwrap_or_default();

        let mode = cli
            .mode
            .or(file.mode)
            .map(|m| Mode::parse_lenient(&m))
            .unwrap_or_default();

        let format = if cli.json {
            OutputFormat::Json
        } else if let Some(f) = cli.format.or(file.format) {
            f.parse::<OutputFormat>()?
        } else {
            output
                .and_then(|p| p.extension())
                .and_then(|e| e.to_str())
                .and_then(OutputFormat::from_extension)
                .unwrap_or_default()
        };

        let title = cli
            .title
            .or(file.title)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let only = if cli.only.is_empty() { file.only } else { cli.only };
        let exclude = if cli.exclude.is_empty() {
            file.exclude
        } else {
            cli.exclude
        };
        let filter = ModelFilter::new(&only, &exclude)?;

        Ok(Self {
            mode,
            format,
            title,
            filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GraphConfig::resolve(None, GraphOverrides::default(), None).unwrap();
        assert_eq!(config.mode, Mode::Relations);
        assert_eq!(config.format, OutputFormat::Mermaid);
        assert_eq!(config.title, DEFAULT_TITLE);
        assert!(config.filter.is_empty());
    }

    #[test]
    fn test_yaml_then_cli_precedence() {
        let yaml: VizYamlConfig = serde_yaml_ng::from_str(
            "mode: columns\nformat: html\ntitle: Shop\nexclude: ['Legacy::*']\n",
        )
        .unwrap();

        let config = GraphConfig::resolve(Some(&yaml), GraphOverrides::default(), None).unwrap();
        assert_eq!(config.mode, Mode::Columns);
        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.title, "Shop");
        assert!(!config.filter.matches("Legacy::User"));

        let cli = GraphOverrides {
            mode: Some("relations".to_string()),
            format: Some("json".to_string()),
            ..GraphOverrides::default()
        };
        let config = GraphConfig::resolve(Some(&yaml), cli, None).unwrap();
        assert_eq!(config.mode, Mode::Relations);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_mode_is_relations() {
        let cli = GraphOverrides {
            mode: Some("everything".to_string()),
            ..GraphOverrides::default()
        };
        let config = GraphConfig::resolve(None, cli, None).unwrap();
        assert_eq!(config.mode, Mode::Relations);
    }

    #[test]
    fn test_unknown_format_is_error() {
        let cli = GraphOverrides {
            format: Some("dot".to_string()),
            ..GraphOverrides::default()
        };
        assert!(GraphConfig::resolve(None, cli, None).is_err());
    }

    #[test]
    fn test_format_from_output_extension() {
        let out = PathBuf::from("erd.html");
        let config =
            GraphConfig::resolve(None, GraphOverrides::default(), Some(&out)).unwrap();
        assert_eq!(config.format, OutputFormat::Html);
    }
}
