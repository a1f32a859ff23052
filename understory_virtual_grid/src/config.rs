// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid geometry and loading configuration.

/// Width of one cell.
pub const DEFAULT_COLUMN_WIDTH: f64 = 320.0;

/// Height of one cell.
pub const DEFAULT_ROW_HEIGHT: f64 = 365.0;

/// Height taken from the viewport by the directory header and search bar.
pub const DEFAULT_CHROME_HEIGHT: f64 = 120.0;

/// Rows rendered beyond each edge of the visible window.
pub const DEFAULT_OVERSCAN_ROWS: usize = 1;

/// Items past the visible range that still trigger a load.
pub const DEFAULT_LOAD_THRESHOLD: usize = 15;

/// Smallest trailing range a load request is widened to.
pub const DEFAULT_MINIMUM_BATCH_SIZE: usize = 10;

/// Configuration for a [`GridWindow`](crate::GridWindow) and its
/// [`InfiniteLoader`](crate::InfiniteLoader).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Cell width.
    pub column_width: f64,
    /// Cell height.
    pub row_height: f64,
    /// Subtracted from the viewport height to get the grid height.
    pub chrome_height: f64,
    /// Overscan, in rows.
    pub overscan_rows: usize,
    /// Load threshold, in items.
    pub load_threshold: usize,
    /// Minimum batch size for trailing load requests.
    pub minimum_batch_size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
            chrome_height: DEFAULT_CHROME_HEIGHT,
            overscan_rows: DEFAULT_OVERSCAN_ROWS,
            load_threshold: DEFAULT_LOAD_THRESHOLD,
            minimum_batch_size: DEFAULT_MINIMUM_BATCH_SIZE,
        }
    }
}

impl GridConfig {
    /// Override the cell size.
    ///
    /// Non-finite or non-positive dimensions keep the current value.
    #[must_use]
    pub fn with_cell_size(mut self, column_width: f64, row_height: f64) -> Self {
        if column_width.is_finite() && column_width > 0.0 {
            self.column_width = column_width;
        }
        if row_height.is_finite() && row_height > 0.0 {
            self.row_height = row_height;
        }
        self
    }

    /// Override the chrome height.
    #[must_use]
    pub fn with_chrome_height(mut self, chrome_height: f64) -> Self {
        self.chrome_height = chrome_height.max(0.0);
        self
    }

    /// Override the overscan.
    #[must_use]
    pub fn with_overscan_rows(mut self, rows: usize) -> Self {
        self.overscan_rows = rows;
        self
    }

    /// Override the load threshold.
    #[must_use]
    pub fn with_load_threshold(mut self, threshold: usize) -> Self {
        self.load_threshold = threshold;
        self
    }

    /// Override the minimum batch size. Zero is treated as one.
    #[must_use]
    pub fn with_minimum_batch_size(mut self, size: usize) -> Self {
        self.minimum_batch_size = size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_directory_layout() {
        let config = GridConfig::default();
        assert_eq!(config.column_width, 320.0);
        assert_eq!(config.row_height, 365.0);
        assert_eq!(config.chrome_height, 120.0);
        assert_eq!(config.overscan_rows, 1);
        assert_eq!(config.load_threshold, 15);
    }

    #[test]
    fn invalid_cell_sizes_are_ignored() {
        let config = GridConfig::default().with_cell_size(0.0, f64::NAN);
        assert_eq!(config.column_width, DEFAULT_COLUMN_WIDTH);
        assert_eq!(config.row_height, DEFAULT_ROW_HEIGHT);
        let config = GridConfig::default()
            .with_cell_size(200.0, 100.0)
            .with_minimum_batch_size(0);
        assert_eq!((config.column_width, config.row_height), (200.0, 100.0));
        assert_eq!(config.minimum_batch_size, 1);
    }
}
