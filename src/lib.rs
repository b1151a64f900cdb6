// Correctness and logic
#![warn(clippy::unit_cmp)]
#![warn(clippy::match_same_arms)]
// Performance-focused
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::map_clone)]
#![warn(clippy::unnecessary_to_owned)]
#![warn(clippy::needless_collect)]
// Style and idiomatic Rust
#![warn(clippy::redundant_clone)]
#![warn(clippy::needless_return)]
#![warn(clippy::manual_map)]
#![warn(clippy::unwrap_used)]
// Maintainability
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(missing_docs)]

//! # dtw_plot
//!
//! Visualization of dynamic time warping (DTW) alignment results.
//!
//! This crate is a presentation layer over an already-computed alignment:
//! the warping path index pairs, optionally the original input series, and
//! optionally the cumulative cost matrix. It performs no alignment, distance
//! or step-pattern computation; the DTW engine is an external collaborator
//! that hands its result to [`DtwAlignment`].
//!
//! Four rendering modes are available through [`AlignmentPlotter`]:
//!
//! - [`PlotMode::Alignment`]: the warping path as a 2D curve, query index
//!   against reference index;
//! - [`PlotMode::TwoWay`]: both series overlaid on a shared index axis,
//!   with an optional vertical offset (dual-scale rendering) and visual
//!   match guides connecting aligned sample pairs;
//! - [`PlotMode::ThreeWay`]: the two-way overlay and the warping curve
//!   combined in one figure;
//! - [`PlotMode::Density`]: the cumulative cost surface as a heatmap with
//!   the warping path superimposed.
//!
//! Figures render to interactive HTML, to static images behind the
//! `static-plots` feature, or straight to a browser window.
//!
//! ## Example
//!
//! ```rust
//! use dtw_plot::{AlignmentPlotter, DtwAlignment, MatchGuideSpec, TwoWayConfig};
//!
//! # fn main() -> dtw_plot::PlotResult<()> {
//! let alignment = DtwAlignment::new(vec![0, 1, 2, 3], vec![0, 1, 1, 2])?
//!     .with_series(vec![0.0, 1.0, 0.5, -0.5], vec![0.1, 0.9, -0.4])?;
//!
//! let config = TwoWayConfig {
//!     offset: 2.0,
//!     match_indices: Some(MatchGuideSpec::Count(3)),
//!     ..Default::default()
//! };
//! let figure = AlignmentPlotter::new(&alignment).two_way(None, None, &config)?;
//! // figure.show()? opens the figure in the default browser.
//! assert_eq!(figure.guide_positions().len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod alignment;
pub mod error;
pub mod plotting;

pub use alignment::DtwAlignment;
pub use error::{PlotError, PlotResult};
pub use plotting::{
    AlignmentPlotter, AxisHandle, ColorPalette, CostDensity, DEFAULT_GUIDE_COUNT, DensityConfig,
    DensityFigure, LayoutConfig, LineStyle, LineStyleType, MatchGuideSpec, MatchGuides,
    OverlayGroup, PathFigure, PathPlotConfig, PlotBounds, PlotComposer, PlotElement, PlotFigure,
    PlotMetadata, PlotMode, PlotOptions, PlotTheme, PlotTrace, SecondaryAxisSpec, SeriesTrace,
    ThreeWayConfig, ThreeWayFigure, TwoWayConfig, TwoWayFigure, VerticalAxis, WarpingCurve,
};
