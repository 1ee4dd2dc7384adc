//! Graph command implementation for ERD generation.

use crate::config::{GraphConfig, GraphOverrides, VizYamlConfig};
use crate::graph::{collect, split_globs, to_html, to_json, to_mermaid, OutputFormat};
use crate::model::{ManifestFormat, ManifestSource, ModelSource};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

/// Run the graph command
#[allow(clippy::too_many_arguments)]
pub fn run(
    manifest: PathBuf,
    output: Option<PathBuf>,
    format: Option<String>,
    mode: Option<String>,
    input_format: Option<String>,
    only: Option<String>,
    exclude: Option<String>,
    title: Option<String>,
    config: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let yaml = config
        .as_ref()
        .map(|path| {
            VizYamlConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))
        })
        .transpose()?;

    let overrides = GraphOverrides {
        mode,
        format,
        title,
        only: only.as_deref().map(split_globs).unwrap_or_default(),
        exclude: exclude.as_deref().map(split_globs).unwrap_or_default(),
        json,
    };
    let config = GraphConfig::resolve(yaml.as_ref(), overrides, output.as_ref())?;
    debug!("Resolved graph config: {:?}", config);

    if manifest.as_os_str() != "-" && !manifest.exists() {
        bail!("manifest file does not exist: {}", manifest.display());
    }

    let mut source = ManifestSource::from_path(manifest.clone());
    if let Some(f) = input_format {
        source = source.with_format(f.parse::<ManifestFormat>()?);
    }
    info!(
        "Reading {} manifest from {}",
        source.format(),
        manifest.display()
    );

    let models = config.filter.apply(source.models()?);
    let graph = collect(&models, config.mode)?;

    let output_content = match config.format {
        OutputFormat::Mermaid => to_mermaid(&graph),
        OutputFormat::Html => to_html(&graph, &config.title),
        OutputFormat::Json => to_json(&graph),
    };

    // Written only after rendering succeeded, so a failure never leaves a partial file
    if let Some(ref out_path) = output {
        fs::write(out_path, output_content.as_bytes())
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        eprintln!("ERD written to: {}", out_path.display());
    } else if output_content.ends_with('\n') {
        print!("{}", output_content);
    } else {
        println!("{}", output_content);
    }

    if !(config.format == OutputFormat::Json && output.is_none()) {
        eprintln!(
            "ERD: {} models, {} columns, {} relationships",
            graph.node_count(),
            graph.column_count(),
            graph.edge_count()
        );
    }

    Ok(())
}
