//! Extraction tuning knobs.

/// Numeric knobs for layout-aware extraction and descriptor scanning.
///
/// Defaults mirror the values the shipment PDFs were calibrated against;
/// pattern tables live in [`crate::patterns`] so each attribute stays
/// independently testable.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Vertical distance within which positioned fragments belong to the
    /// same line.
    pub y_tolerance: f64,
    /// Margin subtracted from a header fragment's x when deriving column
    /// ranges.
    pub column_margin: f64,
    /// Extra width granted to the quantity column so long numbers are not
    /// truncated at the next column boundary.
    pub quantity_column_slack: f64,
    /// How many subsequent lines the descriptor scan may look ahead.
    pub descriptor_window: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            y_tolerance: 2.5,
            column_margin: 2.0,
            quantity_column_slack: 260.0,
            descriptor_window: 10,
        }
    }
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_y_tolerance(mut self, tolerance: f64) -> Self {
        self.y_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_descriptor_window(mut self, window: usize) -> Self {
        self.descriptor_window = window;
        self
    }
}
