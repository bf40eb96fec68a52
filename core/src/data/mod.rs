//! File-level readers: lenient JSON, settings.json profiles, state.json
//! replay, and LocalState folder summaries.

pub mod folder;
pub mod jsonc;
pub mod settings;
pub mod state;
