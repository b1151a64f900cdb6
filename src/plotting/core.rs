//! Core types and traits for the composable plotting system.
//!
//! This module defines the foundational pieces the renderers build on:
//! plot elements, their traces, bounds, styling and themes. Powered by
//! Plotly.rs.

use plotly::common::{ColorScale, ColorScalePalette, DashType, Font, Line, Title};
use plotly::layout::{Axis, Layout};
use plotly::{HeatMap, Plot, Scatter};

/// Bounds for plot data in 2D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    /// Smallest x value covered by the data.
    pub x_min: f64,
    /// Largest x value covered by the data.
    pub x_max: f64,
    /// Smallest y value covered by the data.
    pub y_min: f64,
    /// Largest y value covered by the data.
    pub y_max: f64,
}

impl PlotBounds {
    /// Create bounds from explicit limits.
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Bounds covering a set of (x, y) points.
    #[must_use]
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let x_min = points.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
        let x_max = points
            .iter()
            .map(|(x, _)| *x)
            .fold(f64::NEG_INFINITY, f64::max);
        let y_min = points.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
        let y_max = points
            .iter()
            .map(|(_, y)| *y)
            .fold(f64::NEG_INFINITY, f64::max);
        Self::new(x_min, x_max, y_min, y_max)
    }

    /// Grow these bounds so they also cover `other`.
    pub fn expand_to_include(&mut self, other: &PlotBounds) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// Bounds widened by `margin_percent` of the span on each side.
    #[must_use]
    pub fn with_margin(&self, margin_percent: f64) -> Self {
        let x_margin = (self.x_max - self.x_min) * margin_percent;
        let y_margin = (self.y_max - self.y_min) * margin_percent;
        Self {
            x_min: self.x_min - x_margin,
            x_max: self.x_max + x_margin,
            y_min: self.y_min - y_margin,
            y_max: self.y_max + y_margin,
        }
    }
}

/// Metadata about a plot element
#[derive(Debug, Clone, Default)]
pub struct PlotMetadata {
    /// Optional element title.
    pub title: Option<String>,
    /// Horizontal axis label contributed by this element.
    pub x_label: Option<String>,
    /// Vertical axis label contributed by this element.
    pub y_label: Option<String>,
    /// Legend entry; elements without one stay out of the legend.
    pub legend_label: Option<String>,
    /// Layering order, higher values drawn on top.
    pub z_order: i32,
}

/// Which vertical scale a trace is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAxis {
    /// The default left-hand y axis.
    Primary,
    /// The overlaying right-hand y axis (`y2`).
    Secondary,
}

impl VerticalAxis {
    /// Plotly axis id this variant maps to.
    #[must_use]
    pub const fn plotly_id(self) -> &'static str {
        match self {
            VerticalAxis::Primary => "y",
            VerticalAxis::Secondary => "y2",
        }
    }
}

/// Enum for the plotly trace kinds the elements produce
pub enum PlotTrace {
    /// A line/marker trace.
    Scatter(Scatter<f64, f64>),
    /// A 2D scalar field trace.
    HeatMap(HeatMap<f64, f64, Vec<f64>>),
}

impl PlotTrace {
    /// Add this trace to a plotly Plot
    pub fn add_to_plot(self, plot: &mut Plot) {
        match self {
            PlotTrace::Scatter(trace) => plot.add_trace(Box::new(trace)),
            PlotTrace::HeatMap(trace) => plot.add_trace(Box::new(trace)),
        }
    }

    /// Reassign this trace to numbered subplot axes.
    ///
    /// Heatmaps always render on the default axes; only scatter traces move.
    #[must_use]
    pub fn on_axes(self, x_axis: &str, y_axis: &str) -> Self {
        match self {
            PlotTrace::Scatter(trace) => {
                PlotTrace::Scatter(*Box::new(trace).x_axis(x_axis).y_axis(y_axis))
            }
            PlotTrace::HeatMap(trace) => PlotTrace::HeatMap(trace),
        }
    }
}

/// Core trait for all plot elements
pub trait PlotElement: Send + Sync {
    /// Get the data bounds of this element
    fn data_bounds(&self) -> PlotBounds;

    /// Get metadata about this element
    fn metadata(&self) -> &PlotMetadata;

    /// Generate plotly traces for this element
    fn to_plotly_traces(&self) -> Vec<PlotTrace>;

    /// Check if this element should be included in legend
    fn has_legend(&self) -> bool {
        self.metadata().legend_label.is_some()
    }

    /// Get the z-order for layering (higher values drawn on top)
    fn z_order(&self) -> i32 {
        self.metadata().z_order
    }
}

/// Layout configuration for composing multiple plot elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutConfig {
    /// Single panel with all elements overlaid
    Single,
    /// Stack elements vertically, one subplot per element
    VerticalStack,
}

/// Color palettes for heatmap surfaces, mapped onto plotly's built-in scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPalette {
    /// Perceptually uniform default.
    Viridis,
    /// Colorblind-safe alternative.
    Cividis,
    /// Classic rainbow scale.
    Jet,
    /// Black-red-yellow heat scale.
    Hot,
    /// Grayscale.
    Greys,
}

impl ColorPalette {
    /// The plotly color scale backing this palette.
    #[must_use]
    pub const fn to_plotly_colorscale(self) -> ColorScale {
        ColorScale::Palette(match self {
            ColorPalette::Viridis => ColorScalePalette::Viridis,
            ColorPalette::Cividis => ColorScalePalette::Cividis,
            ColorPalette::Jet => ColorScalePalette::Jet,
            ColorPalette::Hot => ColorScalePalette::Hot,
            ColorPalette::Greys => ColorScalePalette::Greys,
        })
    }
}

/// Style configuration for line elements
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Hex color or CSS color name.
    pub color: String,
    /// Line width in pixels.
    pub width: f64,
    /// Dash pattern.
    pub style: LineStyleType,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "#1f77b4".to_string(),
            width: 2.0,
            style: LineStyleType::Solid,
        }
    }
}

impl LineStyle {
    /// A solid line in the given color at default width.
    #[must_use]
    pub fn solid(color: &str) -> Self {
        Self {
            color: color.to_string(),
            ..Self::default()
        }
    }

    /// The neutral thin gray used for match guides.
    #[must_use]
    pub fn match_guide() -> Self {
        Self {
            color: "gray".to_string(),
            width: 0.5,
            style: LineStyleType::Solid,
        }
    }

    /// Convert to a plotly line spec.
    #[must_use]
    pub fn to_plotly_line(&self) -> Line {
        Line::new()
            .color(self.color.clone())
            .width(self.width)
            .dash(match self.style {
                LineStyleType::Solid => DashType::Solid,
                LineStyleType::Dashed => DashType::Dash,
                LineStyleType::Dotted => DashType::Dot,
                LineStyleType::DashDot => DashType::DashDot,
            })
    }
}

/// Line style types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyleType {
    /// Continuous line.
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Alternating dash-dot line.
    DashDot,
}

/// Theme configuration for plots
#[derive(Debug, Clone)]
pub struct PlotTheme {
    /// Figure and panel background color.
    pub background_color: String,
    /// Grid line color.
    pub grid_color: String,
    /// Text color for titles, labels and ticks.
    pub text_color: String,
    /// Font family for all text.
    pub font_family: String,
    /// Base font size.
    pub font_size: f64,
    /// Title font size.
    pub title_font_size: f64,
    /// Axis label font size.
    pub label_font_size: f64,
    /// Tick label font size.
    pub tick_font_size: f64,
    /// Grid line width.
    pub grid_line_width: f64,
}

impl Default for PlotTheme {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            grid_color: "#ebebeb".to_string(),
            text_color: "#000000".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            font_size: 14.0,
            title_font_size: 18.0,
            label_font_size: 16.0,
            tick_font_size: 12.0,
            grid_line_width: 1.0,
        }
    }
}

impl PlotTheme {
    /// Dark theme for presentations.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background_color: "#191919".to_string(),
            grid_color: "#3c3c3c".to_string(),
            text_color: "#f0f0f0".to_string(),
            ..Self::default()
        }
    }

    /// Build the base plotly layout for this theme.
    #[must_use]
    pub fn to_plotly_layout(&self, title: Option<&str>) -> Layout {
        let mut layout = Layout::new()
            .font(
                Font::new()
                    .family(&self.font_family)
                    .size(self.font_size as usize)
                    .color(self.text_color.clone()),
            )
            .paper_background_color(self.background_color.clone())
            .plot_background_color(self.background_color.clone());

        if let Some(title_text) = title {
            layout = layout.title(
                Title::with_text(title_text).font(
                    Font::new()
                        .family(&self.font_family)
                        .size(self.title_font_size as usize)
                        .color(self.text_color.clone()),
                ),
            );
        }

        layout
    }

    /// Build a themed axis with the given title.
    #[must_use]
    pub fn create_axis(&self, title: &str) -> Axis {
        Axis::new()
            .title(
                Title::with_text(title).font(
                    Font::new()
                        .family(&self.font_family)
                        .size(self.label_font_size as usize)
                        .color(self.text_color.clone()),
                ),
            )
            .tick_font(
                Font::new()
                    .family(&self.font_family)
                    .size(self.tick_font_size as usize)
                    .color(self.text_color.clone()),
            )
            .grid_color(self.grid_color.clone())
            .grid_width(self.grid_line_width as usize)
            .show_grid(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_from_points_cover_extremes() {
        let b = PlotBounds::from_points(&[(0.0, -1.0), (3.0, 2.0), (1.0, 0.5)]);
        assert_eq!(b, PlotBounds::new(0.0, 3.0, -1.0, 2.0));
    }

    #[test]
    fn bounds_margin_widens_symmetrically() {
        let b = PlotBounds::new(0.0, 10.0, 0.0, 1.0).with_margin(0.1);
        assert_eq!(b.x_min, -1.0);
        assert_eq!(b.x_max, 11.0);
    }

    #[test]
    fn vertical_axis_ids() {
        assert_eq!(VerticalAxis::Primary.plotly_id(), "y");
        assert_eq!(VerticalAxis::Secondary.plotly_id(), "y2");
    }
}
