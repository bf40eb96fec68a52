//! Layout reconstruction: pane geometry, replay context, the action
//! replayer, and grid inference.
//!
//! The `replay` module interprets a `tabLayout` action log, threading a
//! `ReplayContext` (from `context`) through one handler per action kind and
//! splitting rectangles with the rules in `geometry`. The `grid` module then
//! turns each tab's rectangles into integer rows, columns and spans.

pub mod context;
pub mod geometry;
pub mod grid;
pub mod replay;
