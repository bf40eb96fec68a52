//! LocalState folders: summarize, list, duplicate and delete.
//!
//! A folder holds up to three interesting files: `settings.json`,
//! `state.json` and `elevated-state.json`. The profiles from the folder's own
//! settings supply the icon lookup used when its state files are replayed.
//! Duplicates carry only `settings.json` and `state.json`.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};

use crate::data::{settings, state};
use crate::error::LayoutError;
use crate::layout::geometry::Tab;
use crate::types::config::EngineSettings;
use crate::types::profile::{ProfileIcons, ProfileInfo};

pub const SETTINGS_FILE: &str = "settings.json";
pub const STATE_FILE: &str = "state.json";
pub const ELEVATED_STATE_FILE: &str = "elevated-state.json";

/// Generated duplicate names are this prefix plus a local `yyyyMMdd_HHmmss` stamp.
pub const DUPLICATE_PREFIX: &str = "LocalState_";

const INTERESTING_FILES: [&str; 3] = [SETTINGS_FILE, STATE_FILE, ELEVATED_STATE_FILE];

/// Compared ignoring ASCII case.
const COPIED_FILES: [&str; 2] = [SETTINGS_FILE, STATE_FILE];


#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub file_name: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_ms: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<ProfileInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Vec<Tab>>,
    /// Set when the file exists but could not be parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}


#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderSummary {
    pub name: String,
    pub path: PathBuf,
    /// Modification time of `state.json`, in ms since the epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run_ms: Option<u64>,
    /// True for the terminal's own folder, which cannot be deleted.
    pub is_default: bool,
    pub files: Vec<FileSummary>,
}


/// Summarize one LocalState folder.
///
/// A parse failure in one file is recorded on that file's summary and does
/// not stop the others from being read.
pub fn summarize_folder(path: &Path, engine: &EngineSettings) -> Result<FolderSummary, LayoutError> {
    if !path.is_dir() {
        return Err(not_a_directory(path));
    }

    let profiles = match settings::read_profiles_file(&path.join(SETTINGS_FILE)) {
        Ok(p) => p,
        Err(e) => {
            warn!(folder = %path.display(), error = %e, "unreadable settings.json");
            Vec::new()
        }
    };
    let icons = ProfileIcons::from_profiles(engine.default_icon.clone(), &profiles);

    let mut files = Vec::new();
    let mut last_run_ms = None;
    for name in INTERESTING_FILES {
        let file_path = path.join(name);
        let Ok(meta) = std::fs::metadata(&file_path) else {
            continue;
        };
        let modified_ms = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as u64);

        let mut summary = FileSummary {
            file_name: name.to_string(),
            size: meta.len(),
            modified_ms,
            profiles: Vec::new(),
            tabs: None,
            error: None,
        };

        if name == SETTINGS_FILE {
            summary.profiles = profiles.clone();
        } else {
            match state::load_state_file(&file_path, &icons, engine) {
                Ok(tabs) => summary.tabs = tabs,
                Err(e) => summary.error = Some(e.to_string()),
            }
            if name == STATE_FILE {
                last_run_ms = modified_ms;
            }
        }
        files.push(summary);
    }

    Ok(FolderSummary {
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        path: path.to_path_buf(),
        last_run_ms,
        is_default: is_default_folder(path, engine.default_folder.as_deref()),
        files,
    })
}


/// Immediate subdirectories of `base`, sorted by name. A missing base is empty.
pub fn list_folders(base: &Path) -> Result<Vec<PathBuf>, LayoutError> {
    let entries = match std::fs::read_dir(base) {
        Ok(e) => e,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(io_error(base, source)),
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}


/// Whether `path` is the same directory as `default_folder`.
pub fn is_default_folder(path: &Path, default_folder: Option<&Path>) -> bool {
    let Some(default_folder) = default_folder else {
        return false;
    };
    match (path.canonicalize(), default_folder.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => path == default_folder,
    }
}


/// Copy `src` to `base/<name>`, keeping only settings.json and state.json.
///
/// Subdirectories are copied recursively under the same filter. Without a
/// name the copy is called `LocalState_<yyyyMMdd_HHmmss>`. The destination
/// must not exist yet. Returns the path of the new folder.
pub fn duplicate_folder(src: &Path, base: &Path, name: Option<&str>) -> Result<PathBuf, LayoutError> {
    if !src.is_dir() {
        return Err(not_a_directory(src));
    }
    let name = match name {
        Some(n) => n.trim().to_string(),
        None => format!("{}{}", DUPLICATE_PREFIX, Local::now().format("%Y%m%d_%H%M%S")),
    };
    if !is_plain_name(&name) {
        return Err(LayoutError::InvalidFolderName(name));
    }
    if let (Ok(src_abs), Ok(base_abs)) = (src.canonicalize(), base.canonicalize()) {
        if base_abs.starts_with(&src_abs) {
            return Err(LayoutError::InvalidFolderName(name));
        }
    }

    let dest = base.join(&name);
    if dest.exists() {
        return Err(LayoutError::FolderExists { path: dest });
    }

    if let Err(e) = copy_filtered(src, &dest) {
        warn!(dest = %dest.display(), error = %e, "duplicate failed, removing partial copy");
        let _ = std::fs::remove_dir_all(&dest);
        return Err(e);
    }
    info!(src = %src.display(), dest = %dest.display(), "duplicated folder");
    Ok(dest)
}


/// Delete a folder and everything in it. The default folder is refused.
pub fn delete_folder(path: &Path, is_default: bool) -> Result<(), LayoutError> {
    if is_default {
        return Err(LayoutError::DefaultFolder {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(not_a_directory(path));
    }
    std::fs::remove_dir_all(path).map_err(|source| io_error(path, source))?;
    info!(path = %path.display(), "deleted folder");
    Ok(())
}


fn copy_filtered(src: &Path, dest: &Path) -> Result<(), LayoutError> {
    std::fs::create_dir_all(dest).map_err(|source| io_error(dest, source))?;

    for entry in std::fs::read_dir(src).map_err(|source| io_error(src, source))? {
        let entry = entry.map_err(|source| io_error(src, source))?;
        let path = entry.path();
        let file_name = entry.file_name();

        if path.is_dir() {
            copy_filtered(&path, &dest.join(&file_name))?;
        } else if file_name.to_str().is_some_and(is_copied_file) {
            std::fs::copy(&path, dest.join(&file_name)).map_err(|source| io_error(&path, source))?;
        }
    }
    Ok(())
}

fn is_copied_file(name: &str) -> bool {
    COPIED_FILES.iter().any(|f| f.eq_ignore_ascii_case(name))
}

/// A single path component: no separators, not `.` or `..`.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

fn io_error(path: &Path, source: std::io::Error) -> LayoutError {
    LayoutError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn not_a_directory(path: &Path) -> LayoutError {
    io_error(
        path,
        std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
    )
}
