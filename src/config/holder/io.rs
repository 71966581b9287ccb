// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, ShiftError};

use super::VersionedConfig;

impl VersionedConfig {
    /// Load a versioned configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShiftError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        debug!(path = %path.display(), version = config.version, "Loaded configuration");
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Save to a specific path, fully overwriting it.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists.
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json_string()?)?;
        debug!(path = %path.display(), version = self.version, "Saved configuration");
        Ok(())
    }

    /// Pretty-printed JSON form.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
