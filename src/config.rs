//! Emission configuration, optionally loaded from `julia-wasm.toml`.
//!
//! ```toml
//! [emit]
//! target = "wasm"
//! indent_width = 2
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File name searched for by [`EmitConfig::find`].
pub const CONFIG_FILE: &str = "julia-wasm.toml";

/// Options controlling text emission.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitConfig {
    /// Backend name (see `lower::available_targets`).
    pub target: String,
    /// Spaces per indentation level in the rendered module.
    pub indent_width: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            target: "wasm".to_string(),
            indent_width: 2,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    emit: EmitConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    #[error("{}: {}", .0.display(), .1.message())]
    Parse(PathBuf, #[source] toml::de::Error),
}

impl EmitConfig {
    pub fn with_target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Parse the `[emit]` table of a config file.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        Ok(file.emit)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse(&content, path)
    }

    /// Search `dir` and its ancestors for `julia-wasm.toml`.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .map(|d| d.join(CONFIG_FILE))
            .find(|p| p.is_file())
    }
}
