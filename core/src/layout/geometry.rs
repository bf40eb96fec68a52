//! Pane geometry: normalized rectangles and the halving rules of a split.
//!
//! Every tab starts with a single pane covering `(0, 0, 1, 1)`. A split
//! halves the focused pane along one axis and hands one half to a new pane,
//! so all edges in a tab land on dyadic fractions and total area stays 1.

use serde::{Deserialize, Serialize};

use crate::types::action::SplitDirection;


/// A rectangle in normalized `[0, 1]` tab space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const FULL: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Split this rectangle. Returns `(kept, created)`: the remainder that
    /// stays with the split pane and the half given to the new pane.
    pub fn split(self, direction: SplitDirection) -> (Rect, Rect) {
        let Rect { x, y, width: w, height: h } = self;
        match direction {
            SplitDirection::Left => {
                let half = w / 2.0;
                (Rect::new(x + half, y, half, h), Rect::new(x, y, half, h))
            }
            SplitDirection::Right => {
                let half = w / 2.0;
                (Rect::new(x, y, half, h), Rect::new(x + half, y, half, h))
            }
            SplitDirection::Up => {
                let half = h / 2.0;
                (Rect::new(x, y + half, w, half), Rect::new(x, y, w, half))
            }
            SplitDirection::Down => {
                let half = h / 2.0;
                (Rect::new(x, y, w, half), Rect::new(x, y + half, w, half))
            }
        }
    }
}


/// Integer placement of a pane in its tab's inferred grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPlacement {
    #[serde(rename = "gridRow")]
    pub row: usize,
    #[serde(rename = "gridColumn")]
    pub column: usize,
    #[serde(rename = "gridRowSpan")]
    pub row_span: usize,
    #[serde(rename = "gridColumnSpan")]
    pub column_span: usize,
}

impl Default for GridPlacement {
    fn default() -> Self {
        GridPlacement {
            row: 0,
            column: 0,
            row_span: 1,
            column_span: 1,
        }
    }
}


/// A leaf surface within a tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pane {
    pub profile_name: String,
    #[serde(rename = "iconRef")]
    pub icon: String,
    #[serde(flatten)]
    pub rect: Rect,
    /// Direction of the split that created this pane; `None` for a tab's first pane.
    pub split_direction: Option<SplitDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commandline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_directory: Option<String>,
    #[serde(flatten)]
    pub placement: GridPlacement,
}

impl Pane {
    pub fn new(profile_name: impl Into<String>, icon: impl Into<String>, rect: Rect) -> Pane {
        Pane {
            profile_name: profile_name.into(),
            icon: icon.into(),
            rect,
            split_direction: None,
            commandline: None,
            starting_directory: None,
            placement: GridPlacement::default(),
        }
    }
}


/// One tab: its panes in creation order plus the inferred grid size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub grid_rows: usize,
    pub grid_columns: usize,
    pub panes: Vec<Pane>,
}

impl Tab {
    pub fn new(title: Option<String>) -> Tab {
        Tab {
            title,
            grid_rows: 1,
            grid_columns: 1,
            panes: Vec::new(),
        }
    }

    /// Sum of pane areas. Exactly 1.0 (up to rounding) for any split history.
    pub fn total_area(&self) -> f64 {
        self.panes.iter().map(|p| p.rect.area()).sum()
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
