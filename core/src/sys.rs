use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::command::Command;
use crate::data::{folder, settings, state};
use crate::layout::geometry::Tab;
use crate::response::Response;
use crate::types::config::EngineSettings;
use crate::types::profile::ProfileIcons;


/// Central runtime for WTLayout. Dispatches state and folder commands.
pub struct Sys {
    settings: EngineSettings,
}


/// Output format requested by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Text,
}

impl Format {
    fn parse(format: Option<&str>) -> Result<Format, String> {
        match format {
            None | Some("json") => Ok(Format::Json),
            Some("text") => Ok(Format::Text),
            Some(other) => Err(format!("Unknown format: '{}' (expected json or text)", other)),
        }
    }
}


impl Sys {
    pub fn new(settings: EngineSettings) -> Sys {
        Sys { settings }
    }

    /// Return a reference to the current settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// The single dispatch method.
    pub fn execute(&mut self, cmd: Command) -> Response {
        match cmd {
            Command::StateInspect { path, format } => self.cmd_state_inspect(path, format),
            Command::StateParse { input, format } => self.cmd_state_parse(input, format),
            Command::FolderSummary { path } => self.cmd_folder_summary(path),
            Command::FolderList { path } => self.cmd_folder_list(path),
            Command::FolderDuplicate { path, base, name } => {
                self.cmd_folder_duplicate(path, base, name)
            }
            Command::FolderDelete { path } => self.cmd_folder_delete(path),
            Command::Help { topic } => self.cmd_help(topic),
        }
    }

    // -----------------------------------------------------------------------
    // State commands
    // -----------------------------------------------------------------------

    fn cmd_state_inspect(&self, path: String, format: Option<String>) -> Response {
        let format = match Format::parse(format.as_deref()) {
            Ok(f) => f,
            Err(message) => return Response::error(message),
        };
        let path = Path::new(&path);
        let icons = self.sibling_icons(path);
        match state::load_state_file(path, &icons, &self.settings) {
            Ok(tabs) => render(tabs.as_deref(), format),
            Err(e) => Response::error(e.to_string()),
        }
    }

    fn cmd_state_parse(&self, input: String, format: Option<String>) -> Response {
        let format = match Format::parse(format.as_deref()) {
            Ok(f) => f,
            Err(message) => return Response::error(message),
        };
        let icons = ProfileIcons::new(self.settings.default_icon.clone());
        match state::parse_state(&input, &icons, &self.settings) {
            Ok(tabs) => render(tabs.as_deref(), format),
            Err(e) => Response::error(e.to_string()),
        }
    }

    /// Icon lookup built from the `settings.json` next to a state file.
    fn sibling_icons(&self, state_path: &Path) -> ProfileIcons {
        let default_icon = self.settings.default_icon.clone();
        let Some(dir) = state_path.parent() else {
            return ProfileIcons::new(default_icon);
        };
        match settings::read_profiles_file(&dir.join(folder::SETTINGS_FILE)) {
            Ok(profiles) => ProfileIcons::from_profiles(default_icon, &profiles),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable settings.json");
                ProfileIcons::new(default_icon)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Folder commands
    // -----------------------------------------------------------------------

    fn cmd_folder_summary(&self, path: String) -> Response {
        match folder::summarize_folder(Path::new(&path), &self.settings) {
            Ok(summary) => to_json(&summary),
            Err(e) => Response::error(e.to_string()),
        }
    }

    fn cmd_folder_list(&self, path: String) -> Response {
        match folder::list_folders(Path::new(&path)) {
            Ok(dirs) => {
                let names: Vec<serde_json::Value> = dirs
                    .iter()
                    .map(|d| {
                        serde_json::json!({
                            "name": d.file_name().map(|n| n.to_string_lossy().into_owned()),
                            "path": d.display().to_string(),
                        })
                    })
                    .collect();
                Response::ok(serde_json::Value::Array(names).to_string())
            }
            Err(e) => Response::error(e.to_string()),
        }
    }

    /// Base directory: the command's, then `custom_base`, then the source's parent.
    fn cmd_folder_duplicate(
        &self,
        path: String,
        base: Option<String>,
        name: Option<String>,
    ) -> Response {
        let src = Path::new(&path);
        let base = match base.map(PathBuf::from).or_else(|| self.settings.custom_base.clone()) {
            Some(b) => b,
            None => match src.parent() {
                Some(parent) => parent.to_path_buf(),
                None => return Response::error(format!("'{}' has no parent folder", path)),
            },
        };
        let dest = match folder::duplicate_folder(src, &base, name.as_deref()) {
            Ok(d) => d,
            Err(e) => return Response::error(e.to_string()),
        };
        match folder::summarize_folder(&dest, &self.settings) {
            Ok(summary) => to_json(&summary),
            Err(e) => Response::error(e.to_string()),
        }
    }

    fn cmd_folder_delete(&self, path: String) -> Response {
        let target = Path::new(&path);
        let is_default = folder::is_default_folder(target, self.settings.default_folder.as_deref());
        match folder::delete_folder(target, is_default) {
            Ok(()) => Response::ok(format!("Deleted {}", path)),
            Err(e) => Response::error(e.to_string()),
        }
    }

    // -----------------------------------------------------------------------
    // Help
    // -----------------------------------------------------------------------

    fn cmd_help(&self, topic: Option<String>) -> Response {
        Response::ok(crate::help::help_text(topic.as_deref()))
    }
}


fn to_json<T: serde::Serialize>(value: &T) -> Response {
    match serde_json::to_string_pretty(value) {
        Ok(json) => Response::ok(json),
        Err(e) => Response::error(format!("Failed to serialize output: {}", e)),
    }
}


fn render(tabs: Option<&[Tab]>, format: Format) -> Response {
    match format {
        Format::Json => to_json(&tabs),
        Format::Text => match tabs {
            Some(tabs) => Response::ok(render_text(tabs)),
            None => Response::ok("No tab layout found."),
        },
    }
}


/// One block per tab, one line per pane.
fn render_text(tabs: &[Tab]) -> String {
    let mut out = String::new();
    for (i, tab) in tabs.iter().enumerate() {
        let title = tab.title.as_deref().map(|t| format!(" \"{}\"", t)).unwrap_or_default();
        let _ = writeln!(
            out,
            "Tab {}{}: {} row(s) x {} column(s)",
            i, title, tab.grid_rows, tab.grid_columns
        );
        for (j, pane) in tab.panes.iter().enumerate() {
            let profile = if pane.profile_name.is_empty() {
                "(default)"
            } else {
                pane.profile_name.as_str()
            };
            let p = pane.placement;
            let _ = writeln!(
                out,
                "  pane {:<2} {:<24} row {} col {}  span {}x{}",
                j, profile, p.row, p.column, p.row_span, p.column_span
            );
        }
    }
    out.trim_end().to_string()
}


#[cfg(test)]
mod tests {
    use super::*;

    const STATE: &str = r#"{"persistedWindowLayouts": [{"tabLayout": [
        {"action": "newTab", "profile": "cmd", "tabTitle": "main"},
        {"action": "splitPane", "split": "right", "profile": "pwsh"}
    ]}]}"#;

    fn sys() -> Sys {
        Sys::new(EngineSettings::default())
    }

    #[test]
    fn state_parse_returns_json_tabs() {
        let resp = sys().execute(Command::StateParse {
            input: STATE.into(),
            format: None,
        });
        match resp {
            Response::Ok { output } => {
                let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
                let tabs = parsed.as_array().unwrap();
                assert_eq!(tabs.len(), 1);
                assert_eq!(tabs[0]["gridColumns"], 2);
                assert_eq!(tabs[0]["panes"][1]["gridColumn"], 1);
                assert_eq!(tabs[0]["panes"][1]["splitDirection"], "right");
            }
            Response::Error { message } => panic!("Unexpected error: {}", message),
        }
    }

    #[test]
    fn state_parse_text_format() {
        let resp = sys().execute(Command::StateParse {
            input: STATE.into(),
            format: Some("text".into()),
        });
        match resp {
            Response::Ok { output } => {
                assert!(output.contains("Tab 0 \"main\": 1 row(s) x 2 column(s)"));
                assert!(output.contains("pwsh"));
            }
            Response::Error { message } => panic!("Unexpected error: {}", message),
        }
    }

    #[test]
    fn state_parse_without_layout_is_null() {
        let resp = sys().execute(Command::StateParse {
            input: "{}".into(),
            format: None,
        });
        assert_eq!(resp, Response::ok("null"));
    }

    #[test]
    fn state_parse_garbage_is_error() {
        let resp = sys().execute(Command::StateParse {
            input: "garbage".into(),
            format: None,
        });
        assert!(!resp.is_ok());
    }

    #[test]
    fn unknown_format_is_error() {
        let resp = sys().execute(Command::StateParse {
            input: STATE.into(),
            format: Some("xml".into()),
        });
        match resp {
            Response::Error { message } => assert!(message.contains("xml")),
            Response::Ok { output } => panic!("Unexpected output: {}", output),
        }
    }

    #[test]
    fn state_inspect_uses_sibling_settings_icons() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"profiles": {"list": [{"name": "cmd", "icon": "cmd.ico"}]}}"#,
        )
        .unwrap();
        let state_path = dir.path().join("state.json");
        std::fs::write(&state_path, STATE).unwrap();

        let resp = sys().execute(Command::StateInspect {
            path: state_path.display().to_string(),
            format: None,
        });
        match resp {
            Response::Ok { output } => {
                let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
                assert_eq!(parsed[0]["panes"][0]["iconRef"], "cmd.ico");
                assert_eq!(parsed[0]["panes"][1]["iconRef"], "unknown");
            }
            Response::Error { message } => panic!("Unexpected error: {}", message),
        }
    }

    #[test]
    fn folder_list_returns_json_array() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("copy1")).unwrap();
        let resp = sys().execute(Command::FolderList {
            path: dir.path().display().to_string(),
        });
        match resp {
            Response::Ok { output } => {
                let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
                assert_eq!(parsed[0]["name"], "copy1");
            }
            Response::Error { message } => panic!("Unexpected error: {}", message),
        }
    }

    #[test]
    fn folder_duplicate_lands_next_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("LocalState");
        std::fs::create_dir(&src).unwrap();
        std::fs::write(src.join("state.json"), STATE).unwrap();
        std::fs::write(src.join("elevated-state.json"), STATE).unwrap();

        let resp = sys().execute(Command::FolderDuplicate {
            path: src.display().to_string(),
            base: None,
            name: Some("copy".into()),
        });
        match resp {
            Response::Ok { output } => {
                let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
                assert_eq!(parsed["name"], "copy");
                assert_eq!(parsed["isDefault"], false);
                assert_eq!(parsed["files"].as_array().unwrap().len(), 1);
            }
            Response::Error { message } => panic!("Unexpected error: {}", message),
        }
        assert!(dir.path().join("copy").join("state.json").is_file());
    }

    #[test]
    fn folder_duplicate_uses_configured_base() {
        let src = tempfile::tempdir().unwrap();
        let base = tempfile::tempdir().unwrap();
        let mut sys = Sys::new(EngineSettings {
            custom_base: Some(base.path().to_path_buf()),
            ..EngineSettings::default()
        });
        let resp = sys.execute(Command::FolderDuplicate {
            path: src.path().display().to_string(),
            base: None,
            name: Some("saved".into()),
        });
        assert!(resp.is_ok(), "{:?}", resp);
        assert!(base.path().join("saved").is_dir());
    }

    #[test]
    fn folder_delete_refuses_configured_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut sys = Sys::new(EngineSettings {
            default_folder: Some(dir.path().to_path_buf()),
            ..EngineSettings::default()
        });
        let resp = sys.execute(Command::FolderDelete {
            path: dir.path().display().to_string(),
        });
        match resp {
            Response::Error { message } => assert!(message.contains("default")),
            Response::Ok { output } => panic!("Unexpected output: {}", output),
        }
        assert!(dir.path().is_dir());
    }

    #[test]
    fn folder_delete_removes_copy() {
        let dir = tempfile::tempdir().unwrap();
        let copy = dir.path().join("LocalState_20240101_000000");
        std::fs::create_dir(&copy).unwrap();
        let resp = sys().execute(Command::FolderDelete {
            path: copy.display().to_string(),
        });
        assert!(resp.is_ok(), "{:?}", resp);
        assert!(!copy.exists());
    }

    #[test]
    fn help_returns_overview() {
        let resp = sys().execute(Command::Help { topic: None });
        match resp {
            Response::Ok { output } => assert!(output.contains("wtlayout")),
            Response::Error { message } => panic!("Unexpected error: {}", message),
        }
    }
}
