//! Grid inference: reduce a tab's pane rectangles to an integer grid.
//!
//! Pane edges come from repeated halving, so they all sit on a shared set of
//! boundaries. Collecting the distinct left/right edges gives the column
//! lines and the distinct top/bottom edges give the row lines; each pane's
//! start and span are the positions of its edges among those lines.

use tracing::debug;

use crate::layout::geometry::{GridPlacement, Tab};


/// Sorted, tolerance-deduplicated grid lines along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundaries {
    lines: Vec<f64>,
    tolerance: f64,
}

impl Boundaries {
    /// Sort `values` ascending and merge neighbours closer than `tolerance`.
    pub fn collect(values: impl IntoIterator<Item = f64>, tolerance: f64) -> Boundaries {
        let mut sorted: Vec<f64> = values.into_iter().collect();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mut lines: Vec<f64> = Vec::with_capacity(sorted.len());
        for v in sorted {
            match lines.last() {
                Some(&last) if (v - last).abs() < tolerance => {}
                _ => lines.push(v),
            }
        }
        Boundaries { lines, tolerance }
    }

    /// Index of the first line within tolerance of `value`.
    pub fn position(&self, value: f64) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| (line - value).abs() < self.tolerance)
    }

    /// Number of cells between the lines.
    pub fn cells(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    pub fn lines(&self) -> &[f64] {
        &self.lines
    }
}


/// Start and span of `[start, end]` on an axis, or `(0, 1)` if either edge
/// is not a known line.
fn locate(bounds: &Boundaries, start: f64, end: f64) -> Option<(usize, usize)> {
    let first = bounds.position(start)?;
    let last = bounds.position(end)?;
    Some((first, last.saturating_sub(first)))
}


/// Clamp `tolerance` below half the smallest positive extent on an axis.
///
/// Halving puts every edge on a multiple of the narrowest pane's extent, so
/// distinct edges are never closer than that extent.
fn axis_tolerance(tolerance: f64, extents: impl IntoIterator<Item = f64>) -> f64 {
    let smallest = extents
        .into_iter()
        .filter(|e| e.is_finite() && *e > 0.0)
        .fold(f64::INFINITY, f64::min);
    tolerance.min(smallest / 2.0)
}


/// Fill `grid_rows`, `grid_columns` and every pane's placement.
pub fn infer_grid(tab: &mut Tab, tolerance: f64) {
    let column_tolerance = axis_tolerance(tolerance, tab.panes.iter().map(|p| p.rect.width));
    let row_tolerance = axis_tolerance(tolerance, tab.panes.iter().map(|p| p.rect.height));
    let columns = Boundaries::collect(
        tab.panes.iter().flat_map(|p| [p.rect.x, p.rect.right()]),
        column_tolerance,
    );
    let rows = Boundaries::collect(
        tab.panes.iter().flat_map(|p| [p.rect.y, p.rect.bottom()]),
        row_tolerance,
    );

    tab.grid_columns = columns.cells();
    tab.grid_rows = rows.cells();

    for (index, pane) in tab.panes.iter_mut().enumerate() {
        let mut placement = GridPlacement::default();

        match locate(&columns, pane.rect.x, pane.rect.right()) {
            Some((column, span)) => {
                placement.column = column;
                placement.column_span = span;
            }
            None => debug!(index, rect = ?pane.rect, "no column boundary match, using 0/1"),
        }
        match locate(&rows, pane.rect.y, pane.rect.bottom()) {
            Some((row, span)) => {
                placement.row = row;
                placement.row_span = span;
            }
            None => debug!(index, rect = ?pane.rect, "no row boundary match, using 0/1"),
        }

        pane.placement = placement;
    }
}


/// Run grid inference on every tab.
pub fn infer_grids(tabs: &mut [Tab], tolerance: f64) {
    for tab in tabs.iter_mut() {
        infer_grid(tab, tolerance);
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
