//! End-to-end layouts: state.json text in, tabs with grid placement out.

use wtlayout_core::{parse_state, EngineSettings, GridPlacement, ProfileIcons, Rect, Tab};

fn layout(actions: &str) -> String {
    format!(r#"{{"persistedWindowLayouts": [{{"tabLayout": [{}]}}]}}"#, actions)
}

fn tabs(actions: &str) -> Vec<Tab> {
    let icons = ProfileIcons::from_pairs("unknown", [("cmd", "cmd.png"), ("pwsh", "pwsh.png")]);
    parse_state(&layout(actions), &icons, &EngineSettings::default())
        .expect("valid document")
        .expect("non-empty layout")
}

fn placement(row: usize, column: usize, row_span: usize, column_span: usize) -> GridPlacement {
    GridPlacement {
        row,
        column,
        row_span,
        column_span,
    }
}

#[test]
fn one_new_tab_is_a_single_cell() {
    let tabs = tabs(r#"{"action": "newTab", "profile": "cmd"}"#);
    assert_eq!(tabs.len(), 1);
    let tab = &tabs[0];
    assert_eq!(tab.panes.len(), 1);
    assert_eq!(tab.panes[0].rect, Rect::FULL);
    assert_eq!((tab.grid_rows, tab.grid_columns), (1, 1));
    assert_eq!(tab.panes[0].placement, placement(0, 0, 1, 1));
    assert_eq!(tab.panes[0].icon, "cmd.png");
}

#[test]
fn right_split_gives_two_columns() {
    let tabs = tabs(
        r#"{"action": "newTab", "profile": "cmd"},
           {"action": "splitPane", "split": "right", "profile": "pwsh"}"#,
    );
    let tab = &tabs[0];
    assert_eq!(tab.panes[0].rect, Rect::new(0.0, 0.0, 0.5, 1.0));
    assert_eq!(tab.panes[1].rect, Rect::new(0.5, 0.0, 0.5, 1.0));
    assert_eq!((tab.grid_rows, tab.grid_columns), (1, 2));
    assert_eq!(tab.panes[0].placement, placement(0, 0, 1, 1));
    assert_eq!(tab.panes[1].placement, placement(0, 1, 1, 1));
    assert_eq!(tab.panes[1].icon, "pwsh.png");
}

#[test]
fn focus_then_split_down_makes_tall_right_pane() {
    let tabs = tabs(
        r#"{"action": "newTab", "profile": "cmd"},
           {"action": "splitPane", "split": "right", "profile": "pwsh"},
           {"action": "focusPane", "id": 0},
           {"action": "splitPane", "split": "down", "profile": "cmd"}"#,
    );
    let tab = &tabs[0];
    assert_eq!(tab.panes.len(), 3);
    assert_eq!(tab.panes[2].rect, Rect::new(0.0, 0.5, 0.5, 0.5));
    assert_eq!((tab.grid_rows, tab.grid_columns), (2, 2));
    assert_eq!(tab.panes[0].placement, placement(0, 0, 1, 1));
    assert_eq!(tab.panes[1].placement, placement(0, 1, 2, 1));
    assert_eq!(tab.panes[2].placement, placement(1, 0, 1, 1));
}

#[test]
fn switch_to_missing_tab_changes_nothing() {
    // If the switch were applied, the split would land in tab 0.
    let tabs = tabs(
        r#"{"action": "newTab", "profile": "cmd"},
           {"action": "newTab", "profile": "pwsh"},
           {"action": "switchToTab", "index": 5},
           {"action": "splitPane", "split": "down"}"#,
    );
    assert_eq!(tabs[0].panes.len(), 1);
    assert_eq!(tabs[1].panes.len(), 2);
    assert_eq!((tabs[1].grid_rows, tabs[1].grid_columns), (2, 1));
}

#[test]
fn empty_action_list_is_no_result() {
    let result = parse_state(&layout(""), &ProfileIcons::default(), &EngineSettings::default());
    assert!(result.unwrap().is_none());
}

#[test]
fn mixed_case_and_unknown_entries() {
    let tabs = tabs(
        r#"{"action": "NEWTAB", "profile": "cmd", "tabTitle": "logs"},
           {"action": "openSettings"},
           {"action": "splitPane", "split": "auto"},
           {"action": "SplitPane", "split": "Left"},
           {"action": "moveFocus", "direction": "nextInOrder"},
           {"action": "splitPane", "split": "up"}"#,
    );
    let tab = &tabs[0];
    assert_eq!(tab.title.as_deref(), Some("logs"));
    // newTab, left split, then the original pane (focus wrapped to 0) split up.
    assert_eq!(tab.panes.len(), 3);
    assert_eq!(tab.panes[0].rect, Rect::new(0.5, 0.5, 0.5, 0.5));
    assert_eq!(tab.panes[1].rect, Rect::new(0.0, 0.0, 0.5, 1.0));
    assert_eq!(tab.panes[2].rect, Rect::new(0.5, 0.0, 0.5, 0.5));
    assert_eq!(tab.panes[1].placement, placement(0, 0, 2, 1));
}

#[test]
fn several_tabs_each_get_their_own_grid() {
    let tabs = tabs(
        r#"{"action": "newTab", "profile": "cmd"},
           {"action": "splitPane", "split": "right"},
           {"action": "splitPane", "split": "right"},
           {"action": "newTab", "profile": "pwsh"},
           {"action": "splitPane", "split": "down"}"#,
    );
    assert_eq!(tabs.len(), 2);
    assert_eq!((tabs[0].grid_rows, tabs[0].grid_columns), (1, 3));
    // Lines at 0, 0.5, 0.75 and 1: the half-width pane is one cell wide.
    assert_eq!(tabs[0].panes[0].placement, placement(0, 0, 1, 1));
    assert_eq!(tabs[0].panes[1].placement, placement(0, 1, 1, 1));
    assert_eq!(tabs[0].panes[2].placement, placement(0, 2, 1, 1));
    assert_eq!((tabs[1].grid_rows, tabs[1].grid_columns), (2, 1));
}

#[test]
fn deeply_nested_splits_keep_one_column_per_pane() {
    let mut actions = vec![r#"{"action": "newTab", "profile": "cmd"}"#.to_string()];
    actions.extend((0..15).map(|_| r#"{"action": "splitPane", "split": "right"}"#.to_string()));
    let tabs = tabs(&actions.join(","));
    let tab = &tabs[0];
    assert_eq!(tab.panes.len(), 16);
    assert_eq!((tab.grid_rows, tab.grid_columns), (1, 16));
    assert!(tab.panes.iter().all(|p| p.placement.column_span == 1));
    let mut columns: Vec<usize> = tab.panes.iter().map(|p| p.placement.column).collect();
    columns.sort();
    assert_eq!(columns, (0..16).collect::<Vec<_>>());
}

#[test]
fn output_serializes_for_renderers() {
    let tabs = tabs(
        r#"{"action": "newTab", "profile": "cmd", "tabTitle": "t"},
           {"action": "splitPane", "split": "down", "profile": "pwsh"}"#,
    );
    let json = serde_json::to_value(&tabs).unwrap();
    assert_eq!(json[0]["title"], "t");
    assert_eq!(json[0]["gridRows"], 2);
    assert_eq!(json[0]["gridColumns"], 1);
    let pane = &json[0]["panes"][1];
    assert_eq!(pane["profileName"], "pwsh");
    assert_eq!(pane["iconRef"], "pwsh.png");
    assert_eq!(pane["gridRow"], 1);
    assert_eq!(pane["gridColumnSpan"], 1);
    assert_eq!(pane["splitDirection"], "down");
}
