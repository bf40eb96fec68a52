//! WTLayout core: rebuild a terminal's saved window layout from its
//! persisted action log.
//!
//! `data::state` parses a `state.json` document, `layout::replay` interprets
//! the first window's `tabLayout` actions into tabs of normalized pane
//! rectangles, and `layout::grid` reduces each tab to an integer grid. The
//! `Sys` dispatcher exposes these to front ends through `Command`/`Response`.

pub mod command;
pub mod data;
pub mod error;
pub mod help;
pub mod layout;
pub mod response;
pub mod sys;
pub mod types;

pub use data::state::{load_state_file, parse_state, reconstruct};
pub use error::LayoutError;
pub use layout::geometry::{GridPlacement, Pane, Rect, Tab};
pub use types::action::{LayoutAction, RawAction, SplitDirection};
pub use types::config::EngineSettings;
pub use types::profile::ProfileIcons;
