//! Individual plot element implementations.
//!
//! Concrete implementations of the [`PlotElement`] trait for the pieces a
//! DTW figure is assembled from: the warping curve, the input series, the
//! match guide segments and the cost density surface.

use ndarray::Array2;
use plotly::common::Mode;
use plotly::{HeatMap, Scatter};

use super::core::*;
use crate::DtwAlignment;
use crate::error::{PlotError, PlotResult};

/// Default number of match guides when no specification is given.
///
/// The classic implementations draw 50 evenly spaced guides when the caller
/// does not ask for a particular set.
pub const DEFAULT_GUIDE_COUNT: usize = 50;

/// Which warping path positions get a visual match guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchGuideSpec {
    /// Explicit path positions (indices into `index1`/`index2`).
    Indices(Vec<usize>),
    /// This many positions, evenly spaced over the whole path.
    Count(usize),
}

impl MatchGuideSpec {
    /// Resolve a guide specification into concrete path positions.
    ///
    /// `None` resolves to [`DEFAULT_GUIDE_COUNT`] evenly spaced positions.
    ///
    /// # Errors
    /// Returns [`PlotError::GuideIndexOutOfRange`] when an explicit index
    /// does not address a path position.
    pub fn resolve(spec: Option<&Self>, path_len: usize) -> PlotResult<Vec<usize>> {
        if path_len == 0 {
            return Ok(Vec::new());
        }
        match spec {
            None => Ok(evenly_spaced(DEFAULT_GUIDE_COUNT, path_len)),
            Some(MatchGuideSpec::Count(count)) => Ok(evenly_spaced(*count, path_len)),
            Some(MatchGuideSpec::Indices(indices)) => {
                for &index in indices {
                    if index >= path_len {
                        return Err(PlotError::GuideIndexOutOfRange { index, path_len });
                    }
                }
                Ok(indices.clone())
            }
        }
    }
}

/// `count` positions linearly spaced over `0..=path_len-1`, endpoints
/// included. Interior positions truncate toward zero.
fn evenly_spaced(count: usize, path_len: usize) -> Vec<usize> {
    let last = (path_len - 1) as f64;
    match count {
        0 => Vec::new(),
        1 => vec![0],
        _ => (0..count)
            .map(|k| (last * k as f64 / (count - 1) as f64) as usize)
            .collect(),
    }
}

/// The warping path drawn as a connected curve, query index against
/// reference index.
#[derive(Clone)]
pub struct WarpingCurve {
    points: Vec<(f64, f64)>,
    style: LineStyle,
    bounds: PlotBounds,
    metadata: PlotMetadata,
}

impl WarpingCurve {
    /// Build the curve from an alignment's index pair sequences.
    #[must_use]
    pub fn from_alignment(
        alignment: &DtwAlignment,
        style: LineStyle,
        metadata: PlotMetadata,
    ) -> Self {
        let points: Vec<(f64, f64)> = alignment
            .index1()
            .iter()
            .zip(alignment.index2())
            .map(|(&i, &j)| (i as f64, j as f64))
            .collect();
        let bounds = PlotBounds::from_points(&points);

        Self {
            points,
            style,
            bounds,
            metadata,
        }
    }

    /// The (query index, reference index) points of the curve, in path order.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Include this curve in the legend under `label`.
    #[must_use]
    pub fn with_legend_label(mut self, label: &str) -> Self {
        self.metadata.legend_label = Some(label.to_string());
        self
    }
}

impl PlotElement for WarpingCurve {
    fn data_bounds(&self) -> PlotBounds {
        self.bounds
    }

    fn metadata(&self) -> &PlotMetadata {
        &self.metadata
    }

    fn to_plotly_traces(&self) -> Vec<PlotTrace> {
        let x_data: Vec<f64> = self.points.iter().map(|(x, _)| *x).collect();
        let y_data: Vec<f64> = self.points.iter().map(|(_, y)| *y).collect();

        let mut trace = Scatter::new(x_data, y_data)
            .mode(Mode::Lines)
            .line(self.style.to_plotly_line());

        if let Some(ref name) = self.metadata.legend_label {
            trace = trace.name(name);
        } else {
            trace = trace.show_legend(false);
        }

        vec![PlotTrace::Scatter(*trace)]
    }
}

/// One input series plotted against the shared index axis.
#[derive(Clone)]
pub struct SeriesTrace {
    indices: Vec<f64>,
    values: Vec<f64>,
    style: LineStyle,
    axis: VerticalAxis,
    bounds: PlotBounds,
    metadata: PlotMetadata,
}

impl SeriesTrace {
    /// Plot `values` against `0..values.len()` on the given vertical scale.
    #[must_use]
    pub fn new(values: &[f64], style: LineStyle, axis: VerticalAxis, metadata: PlotMetadata) -> Self {
        let indices: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
        let y_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let y_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bounds = PlotBounds::new(
            0.0,
            values.len().saturating_sub(1) as f64,
            y_min,
            y_max,
        );

        Self {
            indices,
            values: values.to_vec(),
            style,
            axis,
            bounds,
            metadata,
        }
    }

    /// The vertical axis this series is drawn against.
    #[must_use]
    pub const fn axis(&self) -> VerticalAxis {
        self.axis
    }

    /// Number of samples in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PlotElement for SeriesTrace {
    fn data_bounds(&self) -> PlotBounds {
        self.bounds
    }

    fn metadata(&self) -> &PlotMetadata {
        &self.metadata
    }

    fn to_plotly_traces(&self) -> Vec<PlotTrace> {
        let mut trace = Scatter::new(self.indices.clone(), self.values.clone())
            .mode(Mode::Lines)
            .line(self.style.to_plotly_line());

        if self.axis == VerticalAxis::Secondary {
            trace = trace.y_axis(VerticalAxis::Secondary.plotly_id());
        }

        if let Some(ref name) = self.metadata.legend_label {
            trace = trace.name(name);
        } else {
            trace = trace.show_legend(false);
        }

        vec![PlotTrace::Scatter(*trace)]
    }
}

/// Visual guide segments connecting aligned query and reference samples.
///
/// Each segment runs from `(index1[i], query[index1[i]])` to
/// `(index2[i], reference[index2[i]] - offset)`, the offset-adjusted frame of
/// the primary axis.
#[derive(Clone)]
pub struct MatchGuides {
    segments: Vec<[(f64, f64); 2]>,
    style: LineStyle,
    bounds: PlotBounds,
    metadata: PlotMetadata,
}

impl MatchGuides {
    /// Build guide segments for the selected warping path positions.
    ///
    /// Path indices must already be validated against the two series; the
    /// alignment constructor guarantees that.
    #[must_use]
    pub fn new(
        alignment: &DtwAlignment,
        query: &[f64],
        reference: &[f64],
        positions: &[usize],
        offset: f64,
        style: LineStyle,
    ) -> Self {
        let segments: Vec<[(f64, f64); 2]> = positions
            .iter()
            .map(|&i| {
                let qi = alignment.index1()[i];
                let ri = alignment.index2()[i];
                [
                    (qi as f64, query[qi]),
                    (ri as f64, reference[ri] - offset),
                ]
            })
            .collect();

        let mut bounds = PlotBounds::new(0.0, 0.0, 0.0, 0.0);
        if let Some(first) = segments.first() {
            bounds = PlotBounds::from_points(first);
            for segment in &segments[1..] {
                bounds.expand_to_include(&PlotBounds::from_points(segment));
            }
        }

        let metadata = PlotMetadata {
            z_order: 10,
            ..Default::default()
        };

        Self {
            segments,
            style,
            bounds,
            metadata,
        }
    }

    /// The guide segments, one per selected path position.
    #[must_use]
    pub fn segments(&self) -> &[[(f64, f64); 2]] {
        &self.segments
    }
}

impl PlotElement for MatchGuides {
    fn data_bounds(&self) -> PlotBounds {
        self.bounds
    }

    fn metadata(&self) -> &PlotMetadata {
        &self.metadata
    }

    fn to_plotly_traces(&self) -> Vec<PlotTrace> {
        self.segments
            .iter()
            .map(|&[(x0, y0), (x1, y1)]| {
                let trace = Scatter::new(vec![x0, x1], vec![y0, y1])
                    .mode(Mode::Lines)
                    .line(self.style.to_plotly_line())
                    .show_legend(false);
                PlotTrace::Scatter(*trace)
            })
            .collect()
    }
}

/// Several elements fused into one panel.
///
/// Stacked layouts give each element its own panel; wrapping elements in a
/// group overlays them inside a single panel of the stack. Traces come out
/// layered by z-order.
pub struct OverlayGroup {
    elements: Vec<Box<dyn PlotElement>>,
    bounds: PlotBounds,
    metadata: PlotMetadata,
}

impl OverlayGroup {
    /// Create an empty group carrying the panel's axis labels.
    #[must_use]
    pub fn new(metadata: PlotMetadata) -> Self {
        Self {
            elements: Vec::new(),
            bounds: PlotBounds::new(0.0, 0.0, 0.0, 0.0),
            metadata,
        }
    }

    /// Add an element to the group.
    #[must_use]
    pub fn add_element(mut self, element: impl PlotElement + 'static) -> Self {
        let element_bounds = element.data_bounds();
        if self.elements.is_empty() {
            self.bounds = element_bounds;
        } else {
            self.bounds.expand_to_include(&element_bounds);
        }
        self.elements.push(Box::new(element));
        self
    }
}

impl PlotElement for OverlayGroup {
    fn data_bounds(&self) -> PlotBounds {
        self.bounds
    }

    fn metadata(&self) -> &PlotMetadata {
        &self.metadata
    }

    fn to_plotly_traces(&self) -> Vec<PlotTrace> {
        let mut ordered: Vec<&Box<dyn PlotElement>> = self.elements.iter().collect();
        ordered.sort_by_key(|element| element.z_order());
        ordered
            .into_iter()
            .flat_map(|element| element.to_plotly_traces())
            .collect()
    }
}

/// The cumulative cost surface rendered as a heatmap.
#[derive(Clone)]
pub struct CostDensity {
    query_axis: Vec<f64>,
    reference_axis: Vec<f64>,
    // Row per reference index, column per query index, plotly's heatmap order.
    z: Vec<Vec<f64>>,
    colormap: ColorPalette,
    bounds: PlotBounds,
    metadata: PlotMetadata,
}

impl CostDensity {
    /// Build the surface from a (query positions x reference positions)
    /// cost matrix.
    #[must_use]
    pub fn new(cost_matrix: &Array2<f64>, colormap: ColorPalette, metadata: PlotMetadata) -> Self {
        let (n_query, n_reference) = cost_matrix.dim();
        let query_axis: Vec<f64> = (0..n_query).map(|i| i as f64).collect();
        let reference_axis: Vec<f64> = (0..n_reference).map(|j| j as f64).collect();
        let z: Vec<Vec<f64>> = (0..n_reference)
            .map(|j| (0..n_query).map(|i| cost_matrix[[i, j]]).collect())
            .collect();

        let bounds = PlotBounds::new(
            0.0,
            n_query.saturating_sub(1) as f64,
            0.0,
            n_reference.saturating_sub(1) as f64,
        );

        Self {
            query_axis,
            reference_axis,
            z,
            colormap,
            bounds,
            metadata,
        }
    }
}

impl PlotElement for CostDensity {
    fn data_bounds(&self) -> PlotBounds {
        self.bounds
    }

    fn metadata(&self) -> &PlotMetadata {
        &self.metadata
    }

    fn to_plotly_traces(&self) -> Vec<PlotTrace> {
        let mut heatmap = HeatMap::new(
            self.query_axis.clone(),
            self.reference_axis.clone(),
            self.z.clone(),
        )
        .color_scale(self.colormap.to_plotly_colorscale());

        if let Some(ref title) = self.metadata.title {
            heatmap = heatmap.name(title);
        }

        vec![PlotTrace::HeatMap(*heatmap)]
    }
}
