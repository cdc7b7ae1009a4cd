//! Demo configuration with TOML persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{LabResult, DEFAULT_IOU_THRESHOLD};

/// Complete configuration for every exercise. Missing keys take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Complex-vector exercise.
    pub complex: ComplexConfig,

    /// Histogram exercise.
    pub histogram: HistogramConfig,

    /// Huffman exercise.
    pub huffman: HuffmanConfig,

    /// Graph exercise.
    pub graph: GraphConfig,

    /// NMS benchmark.
    pub nms: NmsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexConfig {
    /// Length of the vector used for the list-operation demo
    pub sample_size: usize,

    /// Length of the vector timed by the sort comparison
    pub benchmark_size: usize,

    /// Length of the sorted vector used for range search
    pub range_sample_size: usize,

    /// Inclusive lower modulus bound for range search
    pub range_low: f64,

    /// Exclusive upper modulus bound for range search
    pub range_high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    /// Number of random histograms
    pub cases: usize,

    /// Maximum bar count
    pub max_len: usize,

    /// Exclusive upper bound on bar height
    pub max_height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuffmanConfig {
    /// Speech text file; the built-in excerpt is used when unset or unreadable
    pub text_path: Option<PathBuf>,

    /// Words to encode
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Start vertex for traversals, shortest paths and the spanning tree
    pub start: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NmsConfig {
    /// Box counts to benchmark
    pub sizes: Vec<usize>,

    /// Timed runs per measurement
    pub repetitions: usize,

    /// Suppress when IoU is strictly above this
    pub iou_threshold: f32,

    /// Skip insertion sort above this many boxes
    pub insertion_limit: usize,

    /// Skip the clustered layout above this many boxes
    pub clustered_limit: usize,

    /// Cluster centres for the clustered layout
    pub clusters: usize,
}

impl Default for ComplexConfig {
    fn default() -> Self {
        Self {
            sample_size: 15,
            benchmark_size: 500,
            range_sample_size: 20,
            range_low: 3.0,
            range_high: 7.0,
        }
    }
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            cases: 10,
            max_len: 105,
            max_height: 105,
        }
    }
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self {
            text_path: None,
            words: crate::huffman::DEMO_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { start: 'A' }
    }
}

impl Default for NmsConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 500, 1000, 2000, 5000],
            repetitions: 3,
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            insertion_limit: 1000,
            clustered_limit: 2000,
            clusters: 10,
        }
    }
}

impl LabConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> LabResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> LabResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::types::LabError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> LabResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
