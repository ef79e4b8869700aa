//! Named camera viewpoints with TOML preset support.
//!
//! A [`PresetRegistry`] maps viewpoint names to [`CameraPreset`] records.
//! Registries serialize to/from TOML so sites can ship custom view presets;
//! lookup is infallible and falls back to the documented default preset
//! ([`DEFAULT_PRESET`]) for unknown names.

mod preset;

use std::path::Path;

pub use preset::CameraPreset;
use rustc_hash::FxHashMap;

use crate::error::RigError;
use crate::util::easing::EasingKind;

/// Name of the fallback preset returned for unknown lookups.
pub const DEFAULT_PRESET: &str = "front";

/// Read-only table of named camera viewpoints.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: FxHashMap<String, CameraPreset>,
    /// Fallback returned by [`get`](Self::get); kept outside the map so a
    /// reference is always available even after a TOML load replaces the
    /// table.
    fallback: CameraPreset,
}

impl Default for PresetRegistry {
    /// Registry holding the built-in viewpoints.
    fn default() -> Self {
        let mut presets = FxHashMap::default();
        let _ = presets.insert(DEFAULT_PRESET.to_owned(), CameraPreset::default());
        let _ = presets.insert(
            "top".to_owned(),
            CameraPreset {
                position: [0.0, 10.0, 0.0],
                target: [0.0, 0.0, 0.0],
                fov: 60.0,
                transition_secs: 2.0,
                curve: EasingKind::EaseInOut,
                ..CameraPreset::default()
            },
        );
        let _ = presets.insert(
            "overview".to_owned(),
            CameraPreset {
                position: [8.0, 6.0, 10.0],
                target: [0.0, 0.0, 0.0],
                fov: 50.0,
                transition_secs: 2.5,
                curve: EasingKind::EaseInOut,
                ..CameraPreset::default()
            },
        );
        let _ = presets.insert(
            "ground".to_owned(),
            CameraPreset {
                position: [2.0, 0.5, 4.0],
                target: [0.0, 1.0, 0.0],
                fov: 55.0,
                transition_secs: 1.2,
                curve: EasingKind::EaseOut,
                ..CameraPreset::default()
            },
        );
        let _ = presets.insert(
            "follow".to_owned(),
            CameraPreset {
                position: [0.0, 2.5, 6.0],
                target: [0.0, 1.0, 0.0],
                fov: 55.0,
                transition_secs: 1.0,
                tracking: true,
                follow_distance: Some(6.0),
                curve: EasingKind::EaseOut,
                ..CameraPreset::default()
            },
        );
        Self {
            presets,
            fallback: CameraPreset::default(),
        }
    }
}

impl PresetRegistry {
    /// Look up a preset by name.
    ///
    /// Unknown names resolve to the [`DEFAULT_PRESET`] fallback; this never
    /// fails.
    #[must_use]
    pub fn get(&self, name: &str) -> &CameraPreset {
        self.presets.get(name).unwrap_or_else(|| {
            log::warn!("unknown camera preset '{name}', using '{DEFAULT_PRESET}'");
            &self.fallback
        })
    }

    /// Whether a preset with this exact name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Register or replace a preset. Intended for host setup code before the
    /// registry goes live; the rig itself never mutates the table.
    pub fn insert(&mut self, name: impl Into<String>, preset: CameraPreset) {
        let _ = self.presets.insert(name.into(), preset);
    }

    /// Sorted list of registered preset names.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.presets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the registry holds no presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Load a registry from a TOML file, layered over the built-ins.
    ///
    /// Each top-level table is one preset; missing fields use preset
    /// defaults, and file entries shadow same-named built-ins.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        let loaded: FxHashMap<String, CameraPreset> = toml::from_str(&content)
            .map_err(|e| RigError::PresetParse(e.to_string()))?;

        let mut registry = Self::default();
        for (name, preset) in loaded {
            registry.insert(name, preset);
        }
        log::info!("loaded camera presets from {}", path.display());
        Ok(registry)
    }

    /// Save all presets to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(&self.presets)
            .map_err(|e| RigError::PresetParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)?;
        log::info!("saved camera presets to {}", path.display());
        Ok(())
    }

    /// List available preset-file names (TOML file stems) in a directory.
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

    /// Generate a JSON Schema describing the preset record, for UI tooling.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(CameraPreset)
    }
}
