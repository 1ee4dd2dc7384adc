//! Schema command: JSON Schema of the manifest format for host exporters.

use crate::model::Manifest;
use anyhow::Result;

pub fn run() -> Result<()> {
    let schema = schemars::schema_for!(Manifest);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
