//! Command: the typed interface for all WTLayout operations.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Command {
    // -----------------------------------------------------------------
    // State commands
    // -----------------------------------------------------------------

    /// Reconstruct the layout stored in a state file.
    #[serde(rename = "state.inspect")]
    StateInspect {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },

    /// Reconstruct the layout from state.json text.
    #[serde(rename = "state.parse")]
    StateParse {
        input: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },

    // -----------------------------------------------------------------
    // Folder commands
    // -----------------------------------------------------------------

    #[serde(rename = "folder.summary")]
    FolderSummary {
        path: String,
    },

    #[serde(rename = "folder.list")]
    FolderList {
        path: String,
    },
    /// Copy a folder's settings.json and state.json into a new sibling folder.
    #[serde(rename = "folder.duplicate")]
    FolderDuplicate {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    #[serde(rename = "folder.delete")]
    FolderDelete {
        path: String,
    },

    // -----------------------------------------------------------------
    // Help
    // -----------------------------------------------------------------

    #[serde(rename = "help")]
    Help {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },
}
