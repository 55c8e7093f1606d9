//! Config-file loading.
//!
//! Two shapes are accepted:
//!
//! ```text
//! { "simulation": { "houses": 42, … }, "run": { "seed": 7, … } }
//! { "houses": 42, "agentsPerHouse": 9, … }          // population only
//! ```
//!
//! A document with a `simulation` or `run` key is read as the first shape,
//! anything else as the second.  Missing fields take their defaults; unknown
//! fields are errors.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;

use epi_core::{RunConfig, SimConfig};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct VillageFile {
    simulation: SimConfig,
    run:        RunConfig,
}

/// Parse a config document into population and run settings.
pub fn parse(text: &str) -> Result<(SimConfig, RunConfig)> {
    let value: Value = serde_json::from_str(text)?;
    let Some(object) = value.as_object() else {
        bail!("config must be a JSON object");
    };
    if object.contains_key("simulation") || object.contains_key("run") {
        let file: VillageFile = serde_json::from_value(value)?;
        Ok((file.simulation, file.run))
    } else {
        Ok((serde_json::from_value(value)?, RunConfig::default()))
    }
}

pub fn load(path: &Path) -> Result<(SimConfig, RunConfig)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing config {}", path.display()))
}
