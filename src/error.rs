//! Error types and result utilities for alignment plotting.

use thiserror::Error;

/// Convenience type alias for results that may contain PlotError
pub type PlotResult<T> = Result<T, PlotError>;

/// Error types that can occur when building or rendering alignment plots.
#[derive(Error, Debug)]
pub enum PlotError {
    /// The alignment result violates a structural invariant.
    ///
    /// Raised at construction time: mismatched index lengths, a decreasing
    /// index sequence, or indices out of bounds for an attached series.
    #[error("Invalid alignment: {0}")]
    InvalidAlignment(String),

    /// A renderer needed the original query/reference series and none were
    /// available, neither as explicit arguments nor retained on the alignment.
    #[error("Original timeseries are required")]
    MissingSeries,

    /// The density renderer needed the cumulative cost matrix and the
    /// alignment does not carry one.
    #[error("Cumulative cost matrix is required for density plots")]
    MissingCostMatrix,

    /// An explicit match-guide index does not address a warping path position.
    #[error("Match guide index {index} is out of range for a warping path of length {path_len}")]
    GuideIndexOutOfRange {
        /// The offending path position.
        index: usize,
        /// Length of the warping path the index was checked against.
        path_len: usize,
    },

    /// A plot mode string did not name one of the four renderers.
    #[error(
        "Unknown plot mode {0:?}: expected \"alignment\", \"twoway\", \"threeway\" or \"density\""
    )]
    UnknownMode(String),

    /// A composer was asked to render with no plot elements.
    #[error("No plot elements to render")]
    EmptyPlot,

    /// A stacked layout was asked for more panels than plotly axis slots.
    #[error("Vertical stack layout supports at most 8 panels, got {0}")]
    TooManyPanels(usize),

    /// An I/O failure while writing plot output to disk.
    #[error("Failed to write plot output: {0}")]
    Io(#[from] std::io::Error),

    /// Static image export failed.
    #[cfg(feature = "static-plots")]
    #[error("Static export failed: {0}")]
    Export(String),
}
