//! State pipeline: parse state.json, replay the first window layout, infer grids.
//!
//! Wires together the document parser, the action replayer and grid
//! inference. A document that parses but carries no actions is a "no result"
//! (`Ok(None)`); only text that is not a JSON document of the expected shape
//! is an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::jsonc::strip_comments_and_trailing_commas;
use crate::error::LayoutError;
use crate::layout::geometry::Tab;
use crate::layout::{grid, replay};
use crate::types::action::RawAction;
use crate::types::config::EngineSettings;
use crate::types::profile::ProfileIcons;


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDocument {
    #[serde(default)]
    pub persisted_window_layouts: Option<Vec<PersistedWindowLayout>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedWindowLayout {
    #[serde(default)]
    pub tab_layout: Option<Vec<RawAction>>,
}

impl StateDocument {
    pub fn parse(input: &str) -> Result<StateDocument, LayoutError> {
        Ok(serde_json::from_str(&strip_comments_and_trailing_commas(input))?)
    }

    /// Actions of the first persisted window, if it has any.
    pub fn first_tab_layout(&self) -> Option<&[RawAction]> {
        let layout = self.persisted_window_layouts.as_ref()?.first()?;
        let actions = layout.tab_layout.as_deref()?;
        if actions.is_empty() {
            None
        } else {
            Some(actions)
        }
    }
}


/// Replay an action log and infer the grid of every resulting tab.
pub fn reconstruct(
    actions: &[RawAction],
    icons: &ProfileIcons,
    settings: &EngineSettings,
) -> Result<Vec<Tab>, LayoutError> {
    let mut tabs = replay::replay(actions, icons, settings)?;
    grid::infer_grids(&mut tabs, settings.tolerance);
    Ok(tabs)
}


/// Parse state.json text into tabs with grid placement.
pub fn parse_state(
    input: &str,
    icons: &ProfileIcons,
    settings: &EngineSettings,
) -> Result<Option<Vec<Tab>>, LayoutError> {
    let doc = StateDocument::parse(input)?;
    let Some(actions) = doc.first_tab_layout() else {
        debug!("state document has no persisted tab layout");
        return Ok(None);
    };
    reconstruct(actions, icons, settings).map(Some)
}


/// Load and parse a state file (`state.json`, `elevated-state.json`).
///
/// Files whose name does not end in `state.json`, and files that do not
/// exist, yield `Ok(None)`.
pub fn load_state_file(
    path: &Path,
    icons: &ProfileIcons,
    settings: &EngineSettings,
) -> Result<Option<Vec<Tab>>, LayoutError> {
    let is_state_file = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with("state.json"));
    if !is_state_file {
        debug!(path = %path.display(), "not a state file");
        return Ok(None);
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            warn!(path = %path.display(), error = %source, "cannot read state file");
            return Err(LayoutError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    parse_state(&content, icons, settings)
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
