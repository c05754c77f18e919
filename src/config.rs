use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Tunable parameters of the styling pipeline.
///
/// Every field has a default, so a config file only needs to name the
/// values it overrides. The base block size is intentionally larger than
/// the maximum: it seeds the first (unclamped) block and anchors the
/// random-walk deviation for the rest.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StylerConfig {
    /// Lower bound of the target reading-ease band.
    pub band_lower: f64,
    /// Upper bound of the target reading-ease band.
    pub band_upper: f64,
    /// Seed size of the first emphasis block, unclamped.
    pub base_block_size: usize,
    /// Smallest allowed size for walk-derived blocks.
    pub min_block_size: usize,
    /// Largest allowed size for walk-derived blocks.
    pub max_block_size: usize,
    /// Gaussian spread for positions before the block center.
    pub sigma_left: f64,
    /// Gaussian spread for positions at or after the block center.
    pub sigma_right: f64,
}

impl Default for StylerConfig {
    fn default() -> Self {
        StylerConfig {
            band_lower: 74.0,
            band_upper: 82.0,
            base_block_size: 21,
            min_block_size: 4,
            max_block_size: 12,
            sigma_left: 2.41,
            sigma_right: 3.74,
        }
    }
}

impl StylerConfig {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if !Path::new(config_path).exists() {
            return Err(format!("Config file not found at: {}", config_path).into());
        }

        let mut file = File::open(config_path)
            .map_err(|e| format!("Failed to open config file {}: {}", config_path, e))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| format!("Failed to read config file {}: {}", config_path, e))?;

        let config: StylerConfig = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to deserialize JSON from {}: {}", config_path, e))?;

        Ok(config)
    }
}
