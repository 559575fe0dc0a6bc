//! Centralized session options with TOML preset support.
//!
//! Animation timing, hinge geometry, session policy and key bindings are
//! consolidated here. Options serialize to/from TOML so a deployment can
//! ship presets next to its assets.

mod animation;
mod doors;
mod keybindings;
mod session;

use std::path::Path;

pub use animation::AnimationOptions;
pub use doors::DoorOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use session::{LostTargetPolicy, SessionOptions};

use crate::error::PorticoError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Door cycle timing and easing.
    pub animation: AnimationOptions,
    /// Hinge-pair geometry.
    pub doors: DoorOptions,
    /// Session policy and frame rate.
    pub session: SessionOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, PorticoError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| PorticoError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PorticoError> {
        let content =
            std::fs::read_to_string(path).map_err(PorticoError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PorticoError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PorticoError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PorticoError::Io)?;
        }
        std::fs::write(path, content).map_err(PorticoError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
