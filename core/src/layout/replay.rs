//! Action replayer: interpret a `tabLayout` log into tabs of pane geometry.
//!
//! The log is consumed once, left to right. Each record is converted to a
//! `LayoutAction` and dispatched to the handler for its kind. Records that
//! do not convert, and actions whose targets do not exist, are dropped and
//! replay continues with the next entry.

use tracing::{debug, trace, warn};

use crate::error::LayoutError;
use crate::layout::context::ReplayContext;
use crate::layout::geometry::{Pane, Rect, Tab};
use crate::types::action::{FocusDirection, LayoutAction, RawAction, SplitDirection};
use crate::types::config::EngineSettings;
use crate::types::profile::ProfileIcons;


/// Replay a raw action log into tabs with continuous pane geometry.
///
/// Grid placement is left at its defaults; see `layout::grid` for that pass.
/// Fails only when the log is longer than `settings.max_actions`.
pub fn replay(
    actions: &[RawAction],
    icons: &ProfileIcons,
    settings: &EngineSettings,
) -> Result<Vec<Tab>, LayoutError> {
    if actions.len() > settings.max_actions {
        warn!(
            count = actions.len(),
            max = settings.max_actions,
            "rejecting oversized action log"
        );
        return Err(LayoutError::TooManyActions {
            count: actions.len(),
            max: settings.max_actions,
        });
    }

    let mut ctx = ReplayContext::new();
    for (position, raw) in actions.iter().enumerate() {
        match LayoutAction::from_raw(raw) {
            Ok(action) => apply(&mut ctx, &action, icons),
            Err(reason) => debug!(position, %reason, "skipping action"),
        }
    }
    Ok(ctx.into_tabs())
}


/// Apply a single typed action to the context.
pub fn apply(ctx: &mut ReplayContext, action: &LayoutAction, icons: &ProfileIcons) {
    trace!(?action, "apply");
    match action {
        LayoutAction::NewTab {
            profile,
            title,
            commandline,
            starting_directory,
        } => {
            let mut pane = new_pane(profile.as_deref(), icons, Rect::FULL);
            pane.commandline = commandline.clone();
            pane.starting_directory = starting_directory.clone();
            handle_new_tab(ctx, title.clone(), pane);
        }
        LayoutAction::SplitPane {
            profile,
            direction,
            commandline,
            starting_directory,
        } => {
            let mut pane = new_pane(profile.as_deref(), icons, Rect::FULL);
            pane.commandline = commandline.clone();
            pane.starting_directory = starting_directory.clone();
            handle_split_pane(ctx, *direction, pane);
        }
        LayoutAction::FocusPane { index } => handle_focus_pane(ctx, *index),
        LayoutAction::MoveFocus { direction } => handle_move_focus(ctx, *direction),
        LayoutAction::SwitchToTab { index } => handle_switch_to_tab(ctx, *index),
    }
}


fn new_pane(profile: Option<&str>, icons: &ProfileIcons, rect: Rect) -> Pane {
    Pane::new(profile.unwrap_or_default(), icons.icon_for(profile), rect)
}


// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn handle_new_tab(ctx: &mut ReplayContext, title: Option<String>, pane: Pane) {
    let mut tab = Tab::new(title);
    tab.panes.push(pane);
    ctx.tabs.push(tab);
    ctx.current_tab = Some(ctx.tabs.len() - 1);
    ctx.focused_pane = Some(0);
}

fn handle_split_pane(ctx: &mut ReplayContext, direction: SplitDirection, mut pane: Pane) {
    let Some(focused) = ctx.focused_pane else {
        debug!("splitPane without a focused pane");
        return;
    };
    let Some(tab) = ctx.current_tab_mut() else {
        debug!("splitPane without a current tab");
        return;
    };
    let Some(target) = tab.panes.get_mut(focused) else {
        debug!(focused, "focused pane is not in the current tab");
        return;
    };

    let (kept, created) = target.rect.split(direction);
    target.rect = kept;
    pane.rect = created;
    pane.split_direction = Some(direction);
    tab.panes.push(pane);
    let created_index = tab.panes.len() - 1;
    ctx.focused_pane = Some(created_index);
}

fn handle_focus_pane(ctx: &mut ReplayContext, index: i64) {
    let Some(count) = ctx.current_tab().map(|t| t.panes.len()) else {
        return;
    };
    match usize::try_from(index) {
        Ok(i) if i < count => ctx.focused_pane = Some(i),
        _ => debug!(index, count, "focusPane index out of range"),
    }
}

fn handle_move_focus(ctx: &mut ReplayContext, direction: FocusDirection) {
    let Some(count) = ctx.current_tab().map(|t| t.panes.len()) else {
        return;
    };
    let Some(current) = ctx.focused_pane else {
        return;
    };
    if count == 0 {
        return;
    }
    let next = match direction {
        FocusDirection::PreviousInOrder => (current + count - 1) % count,
        FocusDirection::NextInOrder => (current + 1) % count,
    };
    ctx.focused_pane = Some(next);
}

fn handle_switch_to_tab(ctx: &mut ReplayContext, index: i64) {
    let count = ctx.tabs.len();
    let i = match usize::try_from(index) {
        Ok(i) if i < count => i,
        _ => {
            debug!(index, count, "switchToTab index out of range");
            return;
        }
    };
    ctx.current_tab = Some(i);
    ctx.focused_pane = if ctx.tabs[i].panes.is_empty() { None } else { Some(0) };
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
