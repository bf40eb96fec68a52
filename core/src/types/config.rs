use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineSettings {
    /// Logs longer than this are rejected before replay. Default: 4096.
    #[serde(default = "default_max_actions")]
    pub max_actions: usize,
    /// Boundary matching tolerance for grid inference. Default: 1e-4.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Icon reference used for profiles missing from the lookup. Default: "unknown".
    #[serde(default = "default_icon")]
    pub default_icon: String,
    /// The terminal's own LocalState folder. It is never deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_folder: Option<PathBuf>,
    /// Where duplicated folders go when a command names no base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_base: Option<PathBuf>,
}

fn default_max_actions() -> usize {
    4096
}

fn default_tolerance() -> f64 {
    1e-4
}

fn default_icon() -> String {
    "unknown".into()
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            max_actions: default_max_actions(),
            tolerance: default_tolerance(),
            default_icon: default_icon(),
            default_folder: None,
            custom_base: None,
        }
    }
}

impl EngineSettings {
    /// Parse settings from YAML. Missing keys take their defaults.
    pub fn from_yaml(input: &str) -> Result<EngineSettings, LayoutError> {
        if input.trim().is_empty() {
            return Ok(EngineSettings::default());
        }
        Ok(serde_yaml::from_str(input)?)
    }

    /// Load settings from a YAML file. A missing file yields defaults.
    pub fn from_file(path: &Path) -> Result<EngineSettings, LayoutError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(EngineSettings::default()),
            Err(source) => Err(LayoutError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let settings = EngineSettings::from_yaml("max_actions: 10\n").unwrap();
        assert_eq!(settings.max_actions, 10);
        assert_eq!(settings.tolerance, 1e-4);
        assert_eq!(settings.default_icon, "unknown");
    }

    #[test]
    fn folder_paths_from_yaml() {
        let settings = EngineSettings::from_yaml(
            "default_folder: /data/LocalState\ncustom_base: /data/copies\n",
        )
        .unwrap();
        assert_eq!(settings.default_folder, Some(PathBuf::from("/data/LocalState")));
        assert_eq!(settings.custom_base, Some(PathBuf::from("/data/copies")));
        assert_eq!(settings.max_actions, 4096);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(EngineSettings::from_yaml("").unwrap(), EngineSettings::default());
    }

    #[test]
    fn bad_yaml_is_error() {
        assert!(matches!(
            EngineSettings::from_yaml("max_actions: [1, 2"),
            Err(LayoutError::Settings(_))
        ));
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = EngineSettings::from_file(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(settings, EngineSettings::default());
    }
}
