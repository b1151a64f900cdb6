//! The four alignment renderers and their dispatcher.
//!
//! [`AlignmentPlotter`] turns a [`DtwAlignment`] into figures: the warping
//! path curve, a two-way comparison with match guides, a three-way joint
//! view, and the cost density surface. Each renderer is a stateless
//! transformation from the alignment data to a composed figure; display is
//! an explicit call on the returned figure handle.

use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use super::composer::{PlotComposer, SecondaryAxisSpec};
use super::core::*;
use super::elements::*;
use crate::DtwAlignment;
use crate::error::{PlotError, PlotResult};

/// The four rendering modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotMode {
    /// Warping path as a curve, query index against reference index.
    Alignment,
    /// Query and reference overlaid on a shared index axis with match guides.
    TwoWay,
    /// Two-way overlay and warping curve combined in one figure.
    ThreeWay,
    /// Cumulative cost surface with the warping path on top.
    Density,
}

impl FromStr for PlotMode {
    type Err = PlotError;

    // Mode names are matched exactly, no abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alignment" => Ok(PlotMode::Alignment),
            "twoway" => Ok(PlotMode::TwoWay),
            "threeway" => Ok(PlotMode::ThreeWay),
            "density" => Ok(PlotMode::Density),
            other => Err(PlotError::UnknownMode(other.to_string())),
        }
    }
}

/// Options for the warping path renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPlotConfig {
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// Line style of the curve.
    pub style: LineStyle,
}

impl Default for PathPlotConfig {
    fn default() -> Self {
        Self {
            x_label: "Query index".to_string(),
            y_label: "Reference index".to_string(),
            style: LineStyle::default(),
        }
    }
}

/// Options for the two-way comparison renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoWayConfig {
    /// Horizontal axis label.
    pub x_label: String,
    /// Primary vertical axis label.
    pub y_label: String,
    /// Vertical displacement summed to the reference; non-zero values move
    /// the reference onto a secondary right-hand scale.
    pub offset: f64,
    /// Which path positions get a match guide; `None` for the default
    /// evenly spaced set.
    pub match_indices: Option<MatchGuideSpec>,
    /// Style of the match guide segments.
    pub match_style: LineStyle,
    /// Style of the query curve.
    pub query_style: LineStyle,
    /// Style of the reference curve.
    pub reference_style: LineStyle,
}

impl Default for TwoWayConfig {
    fn default() -> Self {
        Self {
            x_label: "Index".to_string(),
            y_label: "Query value".to_string(),
            offset: 0.0,
            match_indices: None,
            match_style: LineStyle::match_guide(),
            query_style: LineStyle::solid("black"),
            reference_style: LineStyle::default(),
        }
    }
}

/// Options for the three-way joint renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreeWayConfig {
    /// Horizontal axis label of the series panel.
    pub x_label: String,
    /// Vertical axis label of the series panel.
    pub y_label: String,
    /// Which path positions get a match guide; `None` for the default
    /// evenly spaced set.
    pub match_indices: Option<MatchGuideSpec>,
    /// Style of the match guide segments.
    pub match_style: LineStyle,
    /// Style of the query curve.
    pub query_style: LineStyle,
    /// Style of the reference curve.
    pub reference_style: LineStyle,
    /// Style of the warping curve in the path panel.
    pub path_style: LineStyle,
}

impl Default for ThreeWayConfig {
    fn default() -> Self {
        Self {
            x_label: "Index".to_string(),
            y_label: "Query value".to_string(),
            match_indices: None,
            match_style: LineStyle::match_guide(),
            query_style: LineStyle::solid("black"),
            reference_style: LineStyle::default(),
            path_style: LineStyle::default(),
        }
    }
}

/// Options for the cost density renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityConfig {
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// Color scale of the cost surface.
    pub colormap: ColorPalette,
    /// Style of the superimposed warping path.
    pub path_style: LineStyle,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            x_label: "Query index".to_string(),
            y_label: "Reference index".to_string(),
            colormap: ColorPalette::Viridis,
            path_style: LineStyle::solid("red"),
        }
    }
}

/// Aggregated options for the [`AlignmentPlotter::plot`] dispatcher.
///
/// The per-mode configs are forwarded to the matching renderer; `query` and
/// `reference` take precedence over series retained on the alignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotOptions {
    /// Explicit query series for the two-way and three-way modes.
    pub query: Option<Vec<f64>>,
    /// Explicit reference series for the two-way and three-way modes.
    pub reference: Option<Vec<f64>>,
    /// Options for [`PlotMode::Alignment`].
    pub path: PathPlotConfig,
    /// Options for [`PlotMode::TwoWay`].
    pub two_way: TwoWayConfig,
    /// Options for [`PlotMode::ThreeWay`].
    pub three_way: ThreeWayConfig,
    /// Options for [`PlotMode::Density`].
    pub density: DensityConfig,
}

/// Handle to one vertical scale of a figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisHandle {
    /// Which plotly axis this handle names.
    pub axis: VerticalAxis,
    /// The visible range of the axis.
    pub range: (f64, f64),
}

/// A rendered warping path figure.
pub struct PathFigure {
    composer: PlotComposer,
}

/// A rendered two-way comparison figure.
pub struct TwoWayFigure {
    composer: PlotComposer,
    primary: AxisHandle,
    secondary: AxisHandle,
    guide_positions: Vec<usize>,
}

/// A rendered three-way joint figure.
pub struct ThreeWayFigure {
    composer: PlotComposer,
    guide_positions: Vec<usize>,
}

/// A rendered cost density figure.
pub struct DensityFigure {
    composer: PlotComposer,
}

macro_rules! figure_surface {
    ($figure:ty) => {
        impl $figure {
            /// The underlying composer, for further customization.
            #[must_use]
            pub fn composer(&self) -> &PlotComposer {
                &self.composer
            }

            /// Take ownership of the underlying composer.
            #[must_use]
            pub fn into_composer(self) -> PlotComposer {
                self.composer
            }

            /// Display the figure in the default browser, synchronously.
            ///
            /// # Errors
            /// Propagates composition errors.
            pub fn show(&self) -> PlotResult<()> {
                self.composer.show()
            }

            /// Write the figure to an HTML file.
            ///
            /// # Errors
            /// Propagates composition and I/O errors.
            pub fn write_html<P: AsRef<Path>>(&self, path: P) -> PlotResult<()> {
                self.composer.write_html(path)
            }
        }
    };
}

figure_surface!(PathFigure);
figure_surface!(TwoWayFigure);
figure_surface!(ThreeWayFigure);
figure_surface!(DensityFigure);

impl TwoWayFigure {
    /// Handle to the primary (left-hand) vertical scale.
    #[must_use]
    pub const fn primary_axis(&self) -> AxisHandle {
        self.primary
    }

    /// Handle to the secondary vertical scale.
    ///
    /// With a zero offset there is no separate scale and this is the same
    /// handle as [`Self::primary_axis`].
    #[must_use]
    pub const fn secondary_axis(&self) -> AxisHandle {
        self.secondary
    }

    /// The warping path positions that received a match guide.
    #[must_use]
    pub fn guide_positions(&self) -> &[usize] {
        &self.guide_positions
    }
}

impl ThreeWayFigure {
    /// The warping path positions that received a match guide.
    #[must_use]
    pub fn guide_positions(&self) -> &[usize] {
        &self.guide_positions
    }
}

/// A figure produced by the mode dispatcher.
pub enum PlotFigure {
    /// Result of [`PlotMode::Alignment`].
    Path(PathFigure),
    /// Result of [`PlotMode::TwoWay`].
    TwoWay(TwoWayFigure),
    /// Result of [`PlotMode::ThreeWay`].
    ThreeWay(ThreeWayFigure),
    /// Result of [`PlotMode::Density`].
    Density(DensityFigure),
}

impl PlotFigure {
    /// The underlying composer, whichever renderer produced the figure.
    #[must_use]
    pub fn composer(&self) -> &PlotComposer {
        match self {
            PlotFigure::Path(f) => f.composer(),
            PlotFigure::TwoWay(f) => f.composer(),
            PlotFigure::ThreeWay(f) => f.composer(),
            PlotFigure::Density(f) => f.composer(),
        }
    }

    /// Display the figure in the default browser, synchronously.
    ///
    /// # Errors
    /// Propagates composition errors.
    pub fn show(&self) -> PlotResult<()> {
        self.composer().show()
    }

    /// Write the figure to an HTML file.
    ///
    /// # Errors
    /// Propagates composition and I/O errors.
    pub fn write_html<P: AsRef<Path>>(&self, path: P) -> PlotResult<()> {
        self.composer().write_html(path)
    }
}

/// Renders figures from one alignment result.
pub struct AlignmentPlotter<'a> {
    alignment: &'a DtwAlignment,
}

impl<'a> AlignmentPlotter<'a> {
    /// Create a plotter over an externally computed alignment.
    #[must_use]
    pub const fn new(alignment: &'a DtwAlignment) -> Self {
        Self { alignment }
    }

    /// Dispatch to the renderer matching `mode`, forwarding its options.
    ///
    /// # Errors
    /// Propagates the chosen renderer's input errors.
    pub fn plot(&self, mode: PlotMode, options: &PlotOptions) -> PlotResult<PlotFigure> {
        debug!(?mode, "dispatching alignment plot");
        match mode {
            PlotMode::Alignment => Ok(PlotFigure::Path(self.alignment_path(&options.path))),
            PlotMode::TwoWay => self
                .two_way(
                    options.query.as_deref(),
                    options.reference.as_deref(),
                    &options.two_way,
                )
                .map(PlotFigure::TwoWay),
            PlotMode::ThreeWay => self
                .three_way(
                    options.query.as_deref(),
                    options.reference.as_deref(),
                    &options.three_way,
                )
                .map(PlotFigure::ThreeWay),
            PlotMode::Density => self.density(&options.density).map(PlotFigure::Density),
        }
    }

    /// Draw the warping path as a curve, query index against reference index.
    #[must_use]
    pub fn alignment_path(&self, config: &PathPlotConfig) -> PathFigure {
        let metadata = PlotMetadata {
            x_label: Some(config.x_label.clone()),
            y_label: Some(config.y_label.clone()),
            ..Default::default()
        };
        let curve = WarpingCurve::from_alignment(self.alignment, config.style.clone(), metadata);

        let composer = PlotComposer::new()
            .add_element(curve)
            .with_axis_labels(&config.x_label, &config.y_label);

        PathFigure { composer }
    }

    /// Overlay query and reference on a shared index axis with match guides.
    ///
    /// Series are taken from the arguments first, then from the alignment.
    ///
    /// # Errors
    /// Returns [`PlotError::MissingSeries`] when either series cannot be
    /// resolved, and guide resolution errors for bad explicit indices.
    pub fn two_way(
        &self,
        query: Option<&[f64]>,
        reference: Option<&[f64]>,
        config: &TwoWayConfig,
    ) -> PlotResult<TwoWayFigure> {
        let (query, reference) = self.resolve_series(query, reference)?;
        let offset = config.offset;
        let dual_axis = offset != 0.0;

        let query_trace = SeriesTrace::new(
            query,
            config.query_style.clone(),
            VerticalAxis::Primary,
            PlotMetadata {
                x_label: Some(config.x_label.clone()),
                y_label: Some(config.y_label.clone()),
                legend_label: Some("Query".to_string()),
                ..Default::default()
            },
        );
        let reference_axis = if dual_axis {
            VerticalAxis::Secondary
        } else {
            VerticalAxis::Primary
        };
        let reference_trace = SeriesTrace::new(
            reference,
            config.reference_style.clone(),
            reference_axis,
            PlotMetadata {
                legend_label: Some("Reference".to_string()),
                ..Default::default()
            },
        );

        // Shift the visible windows so the curves separate by `offset` while
        // each keeps its own true scale: the side the reference moves toward
        // gets widened on the query axis, and vice versa.
        let (ql, qh) = data_limits(query);
        let (rl, rh) = data_limits(reference);
        let (primary_range, secondary_range) = if offset > 0.0 {
            ((ql - offset, qh), (rl, rh + offset))
        } else if offset < 0.0 {
            ((ql, qh - offset), (rl + offset, rh))
        } else {
            // Both curves share the primary axis, so the window has to cover
            // the union of their limits.
            let shared = (ql.min(rl), qh.max(rh));
            (shared, shared)
        };

        let guide_positions =
            MatchGuideSpec::resolve(config.match_indices.as_ref(), self.alignment.path_len())?;
        let guides = MatchGuides::new(
            self.alignment,
            query,
            reference,
            &guide_positions,
            offset,
            config.match_style.clone(),
        );

        let mut composer = PlotComposer::new()
            .add_element(query_trace)
            .add_element(reference_trace)
            .add_element(guides)
            .with_axis_labels(&config.x_label, &config.y_label)
            .with_y_range(primary_range);

        if dual_axis {
            composer = composer.with_secondary_axis(SecondaryAxisSpec {
                label: Some("Reference value".to_string()),
                range: secondary_range,
                tick_color: "#1f77b4".to_string(),
            });
        }

        let primary = AxisHandle {
            axis: VerticalAxis::Primary,
            range: primary_range,
        };
        let secondary = if dual_axis {
            AxisHandle {
                axis: VerticalAxis::Secondary,
                range: secondary_range,
            }
        } else {
            primary
        };

        Ok(TwoWayFigure {
            composer,
            primary,
            secondary,
            guide_positions,
        })
    }

    /// Joint view: the two-way overlay stacked above the warping curve.
    ///
    /// # Errors
    /// Same input contract as [`Self::two_way`].
    pub fn three_way(
        &self,
        query: Option<&[f64]>,
        reference: Option<&[f64]>,
        config: &ThreeWayConfig,
    ) -> PlotResult<ThreeWayFigure> {
        let (query, reference) = self.resolve_series(query, reference)?;

        let guide_positions =
            MatchGuideSpec::resolve(config.match_indices.as_ref(), self.alignment.path_len())?;

        let overlay = OverlayGroup::new(PlotMetadata {
            x_label: Some(config.x_label.clone()),
            y_label: Some(config.y_label.clone()),
            ..Default::default()
        })
        .add_element(SeriesTrace::new(
            query,
            config.query_style.clone(),
            VerticalAxis::Primary,
            PlotMetadata {
                legend_label: Some("Query".to_string()),
                ..Default::default()
            },
        ))
        .add_element(SeriesTrace::new(
            reference,
            config.reference_style.clone(),
            VerticalAxis::Primary,
            PlotMetadata {
                legend_label: Some("Reference".to_string()),
                ..Default::default()
            },
        ))
        .add_element(MatchGuides::new(
            self.alignment,
            query,
            reference,
            &guide_positions,
            0.0,
            config.match_style.clone(),
        ));

        let curve = WarpingCurve::from_alignment(
            self.alignment,
            config.path_style.clone(),
            PlotMetadata {
                x_label: Some("Query index".to_string()),
                y_label: Some("Reference index".to_string()),
                ..Default::default()
            },
        );

        let composer = PlotComposer::new()
            .add_element(overlay)
            .add_element(curve)
            .with_layout(LayoutConfig::VerticalStack);

        Ok(ThreeWayFigure {
            composer,
            guide_positions,
        })
    }

    /// Render the cumulative cost surface with the warping path on top.
    ///
    /// # Errors
    /// Returns [`PlotError::MissingCostMatrix`] when the alignment did not
    /// retain the cost matrix.
    pub fn density(&self, config: &DensityConfig) -> PlotResult<DensityFigure> {
        let cost_matrix = self
            .alignment
            .cost_matrix()
            .ok_or(PlotError::MissingCostMatrix)?;

        let surface = CostDensity::new(
            cost_matrix,
            config.colormap,
            PlotMetadata {
                x_label: Some(config.x_label.clone()),
                y_label: Some(config.y_label.clone()),
                ..Default::default()
            },
        );
        let path = WarpingCurve::from_alignment(
            self.alignment,
            config.path_style.clone(),
            PlotMetadata {
                z_order: 10,
                ..Default::default()
            },
        );

        let composer = PlotComposer::new()
            .add_element(surface)
            .add_element(path)
            .with_axis_labels(&config.x_label, &config.y_label);

        Ok(DensityFigure { composer })
    }

    /// Resolve the input series: explicit arguments win, then series
    /// retained on the alignment; both must cover the warping path.
    fn resolve_series<'s>(
        &'s self,
        query: Option<&'s [f64]>,
        reference: Option<&'s [f64]>,
    ) -> PlotResult<(&'s [f64], &'s [f64])> {
        let query = query
            .or_else(|| self.alignment.query())
            .ok_or(PlotError::MissingSeries)?;
        let reference = reference
            .or_else(|| self.alignment.reference())
            .ok_or(PlotError::MissingSeries)?;

        // Explicit arguments bypass the alignment constructor, so bounds
        // have to be re-checked before the guides index into them.
        let max1 = *self.alignment.index1().last().unwrap_or(&0);
        let max2 = *self.alignment.index2().last().unwrap_or(&0);
        if max1 >= query.len() {
            return Err(PlotError::InvalidAlignment(format!(
                "path index {max1} is out of bounds for query of length {}",
                query.len()
            )));
        }
        if max2 >= reference.len() {
            return Err(PlotError::InvalidAlignment(format!(
                "path index {max2} is out of bounds for reference of length {}",
                reference.len()
            )));
        }

        Ok((query, reference))
    }
}

fn data_limits(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;
    use ndarray::Array2;

    fn alignment_with_series() -> DtwAlignment {
        DtwAlignment::new(vec![0, 1, 2, 3, 4], vec![0, 1, 1, 2, 3])
            .unwrap()
            .with_series(
                vec![0.0, 1.0, 0.5, -0.5, -1.0],
                vec![0.2, 0.8, -0.2, -0.8],
            )
            .unwrap()
    }

    fn bare_alignment() -> DtwAlignment {
        DtwAlignment::new(vec![0, 1, 2, 3, 4], vec![0, 1, 1, 2, 3]).unwrap()
    }

    #[test]
    fn mode_strings_parse_exactly() {
        assert_eq!("alignment".parse::<PlotMode>().unwrap(), PlotMode::Alignment);
        assert_eq!("twoway".parse::<PlotMode>().unwrap(), PlotMode::TwoWay);
        assert_eq!("threeway".parse::<PlotMode>().unwrap(), PlotMode::ThreeWay);
        assert_eq!("density".parse::<PlotMode>().unwrap(), PlotMode::Density);

        // Case-sensitive, no abbreviations.
        assert!(matches!(
            "Alignment".parse::<PlotMode>(),
            Err(PlotError::UnknownMode(_))
        ));
        assert!(matches!(
            "two".parse::<PlotMode>(),
            Err(PlotError::UnknownMode(_))
        ));
        assert!(matches!(
            "bogus".parse::<PlotMode>(),
            Err(PlotError::UnknownMode(_))
        ));
    }

    #[test]
    fn dispatch_alignment_builds_a_path_figure() {
        let d = bare_alignment();
        let plotter = AlignmentPlotter::new(&d);
        let figure = plotter
            .plot(PlotMode::Alignment, &PlotOptions::default())
            .unwrap();
        assert!(matches!(figure, PlotFigure::Path(_)));
        assert_eq!(figure.composer().element_count(), 1);
    }

    #[test]
    fn two_way_without_series_is_an_input_error() {
        let d = bare_alignment();
        let plotter = AlignmentPlotter::new(&d);
        assert!(matches!(
            plotter.two_way(None, None, &TwoWayConfig::default()),
            Err(PlotError::MissingSeries)
        ));
        assert!(matches!(
            plotter.three_way(None, None, &ThreeWayConfig::default()),
            Err(PlotError::MissingSeries)
        ));
    }

    #[test]
    fn two_way_explicit_series_win_over_missing_alignment_series() {
        let d = bare_alignment();
        let plotter = AlignmentPlotter::new(&d);
        let query = [0.0, 1.0, 0.5, -0.5, -1.0];
        let reference = [0.2, 0.8, -0.2, -0.8];
        let figure = plotter
            .two_way(Some(&query), Some(&reference), &TwoWayConfig::default())
            .unwrap();
        assert_eq!(figure.composer().element_count(), 3);
    }

    #[test]
    fn two_way_rejects_series_shorter_than_the_path() {
        let d = bare_alignment();
        let plotter = AlignmentPlotter::new(&d);
        let query = [0.0, 1.0];
        let reference = [0.2, 0.8, -0.2, -0.8];
        assert!(matches!(
            plotter.two_way(Some(&query), Some(&reference), &TwoWayConfig::default()),
            Err(PlotError::InvalidAlignment(_))
        ));
    }

    #[test]
    fn zero_offset_shares_one_vertical_scale() {
        let d = alignment_with_series();
        let plotter = AlignmentPlotter::new(&d);
        let figure = plotter.two_way(None, None, &TwoWayConfig::default()).unwrap();

        assert_eq!(figure.primary_axis(), figure.secondary_axis());
        assert_eq!(figure.primary_axis().axis, VerticalAxis::Primary);
    }

    #[test]
    fn zero_offset_window_covers_both_series() {
        // Reference spans well past the query on both sides; the shared
        // window must not clip it to the query's limits.
        let d = bare_alignment();
        let plotter = AlignmentPlotter::new(&d);
        let query = [0.0, 1.0, 0.5, 0.25, 0.75];
        let reference = [-5.0, 2.0, 5.0, -1.0];
        let figure = plotter
            .two_way(Some(&query), Some(&reference), &TwoWayConfig::default())
            .unwrap();

        assert_approx_eq!(figure.primary_axis().range.0, -5.0, 1e-12);
        assert_approx_eq!(figure.primary_axis().range.1, 5.0, 1e-12);
        assert_eq!(figure.primary_axis(), figure.secondary_axis());
    }

    #[test]
    fn positive_offset_shifts_the_windows_asymmetrically() {
        let d = alignment_with_series();
        let plotter = AlignmentPlotter::new(&d);

        // Query data limits are (-1, 1); reference limits are (-0.8, 0.8).
        let config = TwoWayConfig {
            offset: 2.0,
            ..Default::default()
        };
        let figure = plotter.two_way(None, None, &config).unwrap();

        let primary = figure.primary_axis();
        let secondary = figure.secondary_axis();
        assert_eq!(primary.axis, VerticalAxis::Primary);
        assert_eq!(secondary.axis, VerticalAxis::Secondary);

        // Primary keeps its top, drops its bottom by the offset.
        assert_approx_eq!(primary.range.0, -3.0, 1e-12);
        assert_approx_eq!(primary.range.1, 1.0, 1e-12);
        // Secondary keeps its bottom, raises its top by the offset.
        assert_approx_eq!(secondary.range.0, -0.8, 1e-12);
        assert_approx_eq!(secondary.range.1, 2.8, 1e-12);
    }

    #[test]
    fn negative_offset_mirrors_the_shift() {
        let d = alignment_with_series();
        let plotter = AlignmentPlotter::new(&d);
        let config = TwoWayConfig {
            offset: -1.0,
            ..Default::default()
        };
        let figure = plotter.two_way(None, None, &config).unwrap();

        assert_approx_eq!(figure.primary_axis().range.0, -1.0, 1e-12);
        assert_approx_eq!(figure.primary_axis().range.1, 2.0, 1e-12);
        assert_approx_eq!(figure.secondary_axis().range.0, -1.8, 1e-12);
        assert_approx_eq!(figure.secondary_axis().range.1, 0.8, 1e-12);
    }

    #[test]
    fn explicit_guide_indices_draw_exactly_those_guides() {
        let d = alignment_with_series();
        let plotter = AlignmentPlotter::new(&d);
        let config = TwoWayConfig {
            match_indices: Some(MatchGuideSpec::Indices(vec![0, 2, 4])),
            ..Default::default()
        };
        let figure = plotter.two_way(None, None, &config).unwrap();
        assert_eq!(figure.guide_positions(), &[0, 2, 4]);
    }

    #[test]
    fn guide_count_spreads_over_the_path() {
        let d = alignment_with_series();
        let plotter = AlignmentPlotter::new(&d);
        let config = TwoWayConfig {
            match_indices: Some(MatchGuideSpec::Count(3)),
            ..Default::default()
        };
        let figure = plotter.two_way(None, None, &config).unwrap();
        assert_eq!(figure.guide_positions(), &[0, 2, 4]);
    }

    #[test]
    fn three_way_stacks_overlay_and_curve() {
        let d = alignment_with_series();
        let plotter = AlignmentPlotter::new(&d);
        let figure = plotter
            .three_way(None, None, &ThreeWayConfig::default())
            .unwrap();
        assert_eq!(figure.composer().element_count(), 2);
        assert_eq!(figure.guide_positions().len(), DEFAULT_GUIDE_COUNT);
    }

    #[test]
    fn density_needs_the_cost_matrix() {
        let d = alignment_with_series();
        let plotter = AlignmentPlotter::new(&d);
        assert!(matches!(
            plotter.density(&DensityConfig::default()),
            Err(PlotError::MissingCostMatrix)
        ));

        let d = bare_alignment().with_cost_matrix(Array2::zeros((5, 4))).unwrap();
        let plotter = AlignmentPlotter::new(&d);
        let figure = plotter.density(&DensityConfig::default()).unwrap();
        assert_eq!(figure.composer().element_count(), 2);
    }
}
