use std::io::Write;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::enums::SearchMethod;

/// Convert a text element table (one element per line, whitespace separated 1-based
/// node indices) to an element matrix stored as `.npy`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ElementMatrixJob {
    pub input_path: String,
    pub output_path: String,
}

/// Convert an element matrix stored as `.npy` back to a text element table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ElementTableJob {
    pub input_path: String,
    pub output_path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ElementSearchJob {
    /// Node coordinates, `.npy` matrix with x in the first and y in the second column
    pub nodes_path: String,

    /// Element matrix, `.npy` matrix of 1-based node indices padded with 0
    pub elements_path: String,

    /// Points to locate, same layout as `nodes_path`
    pub points_path: String,

    /// Output `.npy` vector with the 1-based element of each point, NaN if not found
    pub output_path: String,

    #[serde(default)]
    pub method: SearchMethod,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FractileJob {
    /// `.npy` vector of values
    pub input_path: String,

    /// Fractiles to compute, each in [0, 1]
    pub fractiles: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum JobConfig {
    ElementMatrix(ElementMatrixJob),
    ElementTable(ElementTableJob),
    ElementSearch(ElementSearchJob),
    Fractile(FractileJob),
}

pub fn load_job_config(file_path: &str) -> Result<JobConfig> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read job config {}", file_path))?;
    let config = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse job config {}", file_path))?;
    Ok(config)
}

pub fn write_job_config(config: &JobConfig, file_path: &str) -> Result<()> {
    let yaml = serde_yaml::to_string(config)?;
    let mut file = std::fs::File::create(file_path)?;
    file.write_all(yaml.as_bytes())?;
    Ok(())
}
