//! Configuration for slab callers
//!
//! Holds the resolution used when a caller supplies no code and the ceiling
//! applied by [`bounded_slab_range`](crate::slab::bounded_slab_range).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::slab::Resolution;

/// Default ceiling on the number of slabs a bounded range may produce
pub const DEFAULT_MAX_RANGE_SLABS: usize = 100_000;

/// Configuration options for slab computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SlabConfig {
    /// Resolution used when no code is given
    #[serde(with = "resolution_name")]
    pub default_resolution: Resolution,
    /// Maximum slabs a bounded range may produce, `None` for no limit
    pub max_range_slabs: Option<usize>,
}

impl Default for SlabConfig {
    fn default() -> Self {
        Self {
            default_resolution: Resolution::Hour,
            max_range_slabs: Some(DEFAULT_MAX_RANGE_SLABS),
        }
    }
}

impl SlabConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default resolution
    pub fn with_default_resolution(mut self, resolution: Resolution) -> Self {
        self.default_resolution = resolution;
        self
    }

    /// Set the maximum number of slabs a bounded range may produce
    pub fn with_max_range_slabs(mut self, limit: Option<usize>) -> Self {
        self.max_range_slabs = limit;
        self
    }

    /// Resolve an optional short code, falling back to the default resolution.
    ///
    /// A code that is present but unknown still resolves to HOUR.
    pub fn resolve(&self, code: Option<&str>) -> Resolution {
        code.map_or(self.default_resolution, Resolution::from_code_str)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Resolution::Unrecognized(code) = self.default_resolution {
            return Err(Error::config(format!(
                "Default resolution must be a known resolution, got code {}",
                code
            )));
        }

        if self.max_range_slabs == Some(0) {
            return Err(Error::config("Maximum range slabs must be at least 1"));
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    #[cfg(feature = "toml")]
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        use std::fs::read_to_string;

        let content = read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    #[cfg(feature = "toml")]
    pub fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        use std::fs::write;

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize to TOML: {}", e)))?;

        write(path, content)?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;

        config.validate()?;
        Ok(config)
    }
}

/// Config files name resolutions by code or name rather than integer code
mod resolution_name {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::slab::Resolution;

    pub fn serialize<S: Serializer>(
        resolution: &Resolution,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(resolution.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Resolution, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}
