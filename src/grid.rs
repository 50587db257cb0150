//! Text grid sizing for an ASCII animation surface.

use crate::metrics::{available, Bounds, CharFootprint, CharMetrics, LayoutSource};

/// Number of character columns and rows that fit a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub cols: u32,
    pub rows: u32,
}

impl GridDimensions {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// Total number of character cells in the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Returns `true` when either axis has no room for a single character.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cols == 0 || self.rows == 0
    }
}

/// Computes how many glyphs fit a container.
///
/// Stateless: every call re-reads layout, so call it again on resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridSizer {
    pub metrics: CharMetrics,
}

impl GridSizer {
    /// Create a sizer with the default glyph fallbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sizer using the given glyph metrics.
    pub fn with_metrics(metrics: CharMetrics) -> Self {
        Self { metrics }
    }

    /// Measure `ch` and `container` through `layout` and compute the grid.
    ///
    /// A container axis with no usable size falls back to the viewport's
    /// inner size on that axis.
    pub fn recalculate<L: LayoutSource + ?Sized>(
        &self,
        layout: &L,
        container: &L::Element,
        ch: &L::Element,
    ) -> GridDimensions {
        let footprint = self.metrics.measure(layout, ch);
        let bounds = layout.bounds_of(container);

        // Only consult the viewport when the container is missing an axis
        let viewport = if available(bounds.width).is_some() && available(bounds.height).is_some() {
            Bounds::default()
        } else {
            layout.viewport()
        };

        self.grid_for(bounds, viewport, footprint)
    }

    /// Pure grid arithmetic: `floor(container / footprint)` per axis.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use ascii_canvas_core::{Bounds, CharFootprint, GridDimensions, GridSizer};
    ///
    /// let grid = GridSizer::new().grid_for(
    ///     Bounds::new(100.0, 50.0),
    ///     Bounds::default(),
    ///     CharFootprint { width: 10.0, height: 10.0 },
    /// );
    /// assert_eq!(grid, GridDimensions::new(10, 5));
    /// ```
    pub fn grid_for(&self, container: Bounds, viewport: Bounds, footprint: CharFootprint) -> GridDimensions {
        let width = available(container.width).unwrap_or(viewport.width);
        let height = available(container.height).unwrap_or(viewport.height);

        let grid = GridDimensions {
            cols: fit(width, footprint.width),
            rows: fit(height, footprint.height),
        };
        tracing::debug!(target: "grid", cols = grid.cols, rows = grid.rows, width, height, "grid_recalculated");
        grid
    }
}

/// Size the grid for `container` with the default glyph fallbacks.
pub fn recalculate_dimensions<L: LayoutSource + ?Sized>(
    layout: &L,
    container: &L::Element,
    ch: &L::Element,
) -> GridDimensions {
    GridSizer::default().recalculate(layout, container, ch)
}

/// Whole cells of size `cell` in `length`; zero for unusable lengths.
#[inline]
fn fit(length: f64, cell: f64) -> u32 {
    match (available(length), available(cell)) {
        // Float-to-int casts saturate, so huge ratios clamp to u32::MAX
        (Some(length), Some(cell)) => (length / cell).floor() as u32,
        _ => 0,
    }
}
