//! Action model: the vocabulary of a persisted `tabLayout` log.
//!
//! `RawAction` mirrors one record of the terminal's `state.json` exactly as
//! written on disk. `LayoutAction` is the typed form the replayer dispatches
//! on; records that cannot be converted are reported as a `SkipReason` and
//! dropped without aborting the replay.

use std::fmt;

use serde::{Deserialize, Serialize};


/// One entry of a persisted `tabLayout` array. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<String>,
    /// Pane index for `focusPane`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Tab index for `switchToTab`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    /// Focus direction for `moveFocus`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commandline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default)]
    pub suppress_application_title: bool,
}


/// The recognized action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    NewTab,
    SplitPane,
    FocusPane,
    MoveFocus,
    SwitchToTab,
}

impl ActionKind {
    /// Parse an action name, ignoring ASCII case. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<ActionKind> {
        match name.trim().to_ascii_lowercase().as_str() {
            "newtab" => Some(ActionKind::NewTab),
            "splitpane" => Some(ActionKind::SplitPane),
            "focuspane" => Some(ActionKind::FocusPane),
            "movefocus" => Some(ActionKind::MoveFocus),
            "switchtotab" => Some(ActionKind::SwitchToTab),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::NewTab => "newTab",
            ActionKind::SplitPane => "splitPane",
            ActionKind::FocusPane => "focusPane",
            ActionKind::MoveFocus => "moveFocus",
            ActionKind::SwitchToTab => "switchToTab",
        }
    }
}


/// Which side of the focused pane the new pane is carved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SplitDirection {
    pub fn parse(value: &str) -> Option<SplitDirection> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(SplitDirection::Left),
            "right" => Some(SplitDirection::Right),
            "up" => Some(SplitDirection::Up),
            "down" => Some(SplitDirection::Down),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SplitDirection::Left => "left",
            SplitDirection::Right => "right",
            SplitDirection::Up => "up",
            SplitDirection::Down => "down",
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    PreviousInOrder,
    NextInOrder,
}

impl FocusDirection {
    pub fn parse(value: &str) -> Option<FocusDirection> {
        match value.trim().to_ascii_lowercase().as_str() {
            "previousinorder" => Some(FocusDirection::PreviousInOrder),
            "nextinorder" => Some(FocusDirection::NextInOrder),
            _ => None,
        }
    }
}


/// A typed layout action, ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutAction {
    NewTab {
        profile: Option<String>,
        title: Option<String>,
        commandline: Option<String>,
        starting_directory: Option<String>,
    },
    SplitPane {
        profile: Option<String>,
        direction: SplitDirection,
        commandline: Option<String>,
        starting_directory: Option<String>,
    },
    FocusPane {
        index: i64,
    },
    MoveFocus {
        direction: FocusDirection,
    },
    SwitchToTab {
        index: i64,
    },
}


/// Why a raw record was not turned into a `LayoutAction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingKind,
    UnknownKind(String),
    MissingField {
        kind: ActionKind,
        field: &'static str,
    },
    UnknownSplitDirection(String),
    UnknownFocusDirection(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingKind => write!(f, "record has no action kind"),
            SkipReason::UnknownKind(k) => write!(f, "unknown action kind '{}'", k),
            SkipReason::MissingField { kind, field } => {
                write!(f, "{} is missing '{}'", kind.as_str(), field)
            }
            SkipReason::UnknownSplitDirection(d) => write!(f, "unknown split direction '{}'", d),
            SkipReason::UnknownFocusDirection(d) => write!(f, "unknown focus direction '{}'", d),
        }
    }
}


impl LayoutAction {
    /// Convert a raw record into a typed action.
    pub fn from_raw(raw: &RawAction) -> Result<LayoutAction, SkipReason> {
        let name = raw.action.as_deref().ok_or(SkipReason::MissingKind)?;
        let kind = ActionKind::parse(name).ok_or_else(|| SkipReason::UnknownKind(name.to_string()))?;

        match kind {
            ActionKind::NewTab => Ok(LayoutAction::NewTab {
                profile: raw.profile.clone(),
                title: raw.tab_title.clone(),
                commandline: raw.commandline.clone(),
                starting_directory: raw.starting_directory.clone(),
            }),
            ActionKind::SplitPane => {
                let split = raw
                    .split
                    .as_deref()
                    .ok_or(SkipReason::MissingField { kind, field: "split" })?;
                let direction = SplitDirection::parse(split)
                    .ok_or_else(|| SkipReason::UnknownSplitDirection(split.to_string()))?;
                Ok(LayoutAction::SplitPane {
                    profile: raw.profile.clone(),
                    direction,
                    commandline: raw.commandline.clone(),
                    starting_directory: raw.starting_directory.clone(),
                })
            }
            ActionKind::FocusPane => {
                let index = raw.id.ok_or(SkipReason::MissingField { kind, field: "id" })?;
                Ok(LayoutAction::FocusPane { index })
            }
            ActionKind::MoveFocus => {
                let dir = raw
                    .direction
                    .as_deref()
                    .ok_or(SkipReason::MissingField { kind, field: "direction" })?;
                let direction = FocusDirection::parse(dir)
                    .ok_or_else(|| SkipReason::UnknownFocusDirection(dir.to_string()))?;
                Ok(LayoutAction::MoveFocus { direction })
            }
            ActionKind::SwitchToTab => {
                let index = raw.index.ok_or(SkipReason::MissingField { kind, field: "index" })?;
                Ok(LayoutAction::SwitchToTab { index })
            }
        }
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
