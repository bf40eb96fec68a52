//! settings.json reader: list the terminal's visible profiles.
//!
//! Only the declared `icon` string is carried over; no icon resolution is
//! attempted here.

use std::path::Path;

use serde::Deserialize;

use crate::data::jsonc::strip_comments_and_trailing_commas;
use crate::error::LayoutError;
use crate::types::profile::ProfileInfo;


#[derive(Debug, Default, Deserialize)]
struct SettingsDocument {
    #[serde(default)]
    profiles: Option<ProfilesSection>,
}

/// `profiles` is either `{ "list": [...] }` or a bare array in older files.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProfilesSection {
    Object {
        #[serde(default)]
        list: Option<Vec<ProfileEntry>>,
    },
    List(Vec<ProfileEntry>),
}

#[derive(Debug, Deserialize)]
struct ProfileEntry {
    #[serde(default)]
    guid: Option<String>,
    #[serde(default)]
    hidden: Option<bool>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    icon: Option<String>,
}


/// Parse settings.json text into the visible, named profiles.
pub fn read_profiles(input: &str) -> Result<Vec<ProfileInfo>, LayoutError> {
    let doc: SettingsDocument = serde_json::from_str(&strip_comments_and_trailing_commas(input))?;

    let entries = match doc.profiles {
        Some(ProfilesSection::Object { list }) => list.unwrap_or_default(),
        Some(ProfilesSection::List(list)) => list,
        None => Vec::new(),
    };

    Ok(entries
        .into_iter()
        .filter(|p| p.hidden != Some(true))
        .filter_map(|p| {
            let name = p.name.filter(|n| !n.trim().is_empty())?;
            Some(ProfileInfo {
                name,
                icon: p.icon.filter(|i| !i.trim().is_empty()),
                source: p.source,
                guid: p.guid,
            })
        })
        .collect())
}


/// Read profiles from a `settings.json` file. Other file names and missing
/// files yield an empty list.
pub fn read_profiles_file(path: &Path) -> Result<Vec<ProfileInfo>, LayoutError> {
    if path.file_name().and_then(|n| n.to_str()) != Some("settings.json") {
        return Ok(Vec::new());
    }
    match std::fs::read_to_string(path) {
        Ok(content) => read_profiles(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(LayoutError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = r#"{
        // comment written by the terminal
        "defaultProfile": "{61c54bbd}",
        "profiles": {
            "defaults": {},
            "list": [
                { "guid": "{61c54bbd}", "name": "Windows PowerShell", "hidden": false },
                { "guid": "{0caa0dad}", "name": "Command Prompt", "icon": "C:\\icons\\cmd.png" },
                { "guid": "{b453ae62}", "name": "Azure Cloud Shell", "hidden": true },
                { "guid": "{deadbeef}", "name": "  " },
                { "guid": "{2c4de342}", "name": "Ubuntu", "source": "Windows.Terminal.Wsl", },
            ]
        }
    }"#;

    #[test]
    fn hidden_and_unnamed_profiles_skipped() {
        let profiles = read_profiles(SETTINGS).unwrap();
        let names: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Windows PowerShell", "Command Prompt", "Ubuntu"]);
    }

    #[test]
    fn declared_icon_and_source_carried() {
        let profiles = read_profiles(SETTINGS).unwrap();
        assert_eq!(profiles[1].icon.as_deref(), Some("C:\\icons\\cmd.png"));
        assert_eq!(profiles[2].source.as_deref(), Some("Windows.Terminal.Wsl"));
        assert!(profiles[0].icon.is_none());
    }

    #[test]
    fn bare_profile_array_accepted() {
        let profiles = read_profiles(r#"{"profiles": [{"name": "cmd"}]}"#).unwrap();
        assert_eq!(profiles.len(), 1);
    }

    #[test]
    fn missing_profiles_is_empty() {
        assert!(read_profiles("{}").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_error() {
        assert!(matches!(read_profiles("{ not json"), Err(LayoutError::Parse(_))));
    }

    #[test]
    fn other_file_names_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, SETTINGS).unwrap();
        assert!(read_profiles_file(&path).unwrap().is_empty());

        let path = dir.path().join("settings.json");
        std::fs::write(&path, SETTINGS).unwrap();
        assert_eq!(read_profiles_file(&path).unwrap().len(), 3);
    }
}
