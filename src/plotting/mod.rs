//! Composable plotting system for DTW alignment visualization.
//!
//! This module is organized around plot elements that can be combined into
//! figures and rendered through the plotly crate:
//!
//! - **PlotElement trait**: core abstraction for all plot components
//! - **Plot elements**: warping curves, series traces, match guides, cost
//!   density surfaces
//! - **PlotComposer**: composition, theming and rendering
//! - **Renderers**: the four alignment figure builders and their dispatcher
//!
//! # Quick start
//!
//! ```rust
//! use dtw_plot::{AlignmentPlotter, DtwAlignment, PathPlotConfig};
//!
//! # fn example() -> dtw_plot::PlotResult<()> {
//! // Index pairs from an externally computed alignment.
//! let alignment = DtwAlignment::new(vec![0, 1, 2, 2, 3], vec![0, 0, 1, 2, 3])?;
//!
//! let figure = AlignmentPlotter::new(&alignment).alignment_path(&PathPlotConfig::default());
//! figure.write_html("warping_path.html")?;
//! # Ok(())
//! # }
//! ```

pub mod composer;
pub mod core;
pub mod elements;
pub mod renderers;

pub use self::composer::*;
pub use self::core::*;
pub use self::elements::*;
pub use self::renderers::*;
