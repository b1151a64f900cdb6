//! Plot composition and rendering system.
//!
//! The [`PlotComposer`] combines plot elements into a single figure or a
//! vertical stack of panels, applies the theme, and renders the result to
//! HTML, a static image (behind the `static-plots` feature), or a browser
//! window.

use std::path::Path;

use plotly::Plot;
use plotly::common::AxisSide;
use tracing::debug;

use super::core::*;
use crate::error::{PlotError, PlotResult};

#[cfg(feature = "static-plots")]
use plotly_static::{ImageFormat, StaticExporterBuilder};

/// Secondary vertical axis configuration for dual-scale figures.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryAxisSpec {
    /// Axis title, shown on the right-hand side.
    pub label: Option<String>,
    /// Exact visible range of the axis.
    pub range: (f64, f64),
    /// Tick label color, distinguishing the scale from the primary one.
    pub tick_color: String,
}

/// Main compositor for combining and rendering plot elements
pub struct PlotComposer {
    elements: Vec<Box<dyn PlotElement>>,
    layout: LayoutConfig,
    theme: PlotTheme,
    title: Option<String>,
    size: (u32, u32),
    x_label: Option<String>,
    y_label: Option<String>,
    y_range: Option<(f64, f64)>,
    secondary_axis: Option<SecondaryAxisSpec>,
}

impl PlotComposer {
    /// Create a new plot composer
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            layout: LayoutConfig::Single,
            theme: PlotTheme::default(),
            title: None,
            size: (900, 700),
            x_label: None,
            y_label: None,
            y_range: None,
            secondary_axis: None,
        }
    }

    /// Add a plot element to the composition
    #[must_use]
    pub fn add_element(mut self, element: impl PlotElement + 'static) -> Self {
        self.elements.push(Box::new(element));
        self
    }

    /// Set the layout configuration
    #[must_use]
    pub const fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Set the theme
    #[must_use]
    pub fn with_theme(mut self, theme: PlotTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the overall title
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the output size
    #[must_use]
    pub const fn with_size(mut self, size: (u32, u32)) -> Self {
        self.size = size;
        self
    }

    /// Override the axis labels for the whole figure.
    #[must_use]
    pub fn with_axis_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = Some(x_label.to_string());
        self.y_label = Some(y_label.to_string());
        self
    }

    /// Pin the primary vertical axis to an exact range instead of the
    /// data bounds.
    #[must_use]
    pub const fn with_y_range(mut self, range: (f64, f64)) -> Self {
        self.y_range = Some(range);
        self
    }

    /// Add an overlaying right-hand vertical axis.
    #[must_use]
    pub fn with_secondary_axis(mut self, spec: SecondaryAxisSpec) -> Self {
        self.secondary_axis = Some(spec);
        self
    }

    /// Number of elements in the composition.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Assemble the plotly figure from the composed elements.
    ///
    /// # Errors
    /// Returns [`PlotError::EmptyPlot`] with no elements, or
    /// [`PlotError::TooManyPanels`] when a stack exceeds plotly's axis slots.
    pub fn to_plot(&self) -> PlotResult<Plot> {
        if self.elements.is_empty() {
            return Err(PlotError::EmptyPlot);
        }

        debug!(
            elements = self.elements.len(),
            layout = ?self.layout,
            "composing figure"
        );

        let mut plot = Plot::new();
        let mut layout = self
            .theme
            .to_plotly_layout(self.title.as_deref())
            .width(self.size.0 as usize)
            .height(self.size.1 as usize);

        match self.layout {
            LayoutConfig::Single => self.compose_single_panel(&mut plot, &mut layout),
            LayoutConfig::VerticalStack => self.compose_vertical_stack(&mut plot, &mut layout)?,
        }

        plot.set_layout(layout);
        Ok(plot)
    }

    /// Combined data bounds over all elements.
    fn global_bounds(&self) -> PlotBounds {
        let mut bounds = self.elements[0].data_bounds();
        for element in &self.elements[1..] {
            bounds.expand_to_include(&element.data_bounds());
        }
        bounds
    }

    /// Axis labels for a panel: composer overrides win, then element
    /// metadata, then neutral defaults.
    fn axis_labels(&self, element: &dyn PlotElement) -> (String, String) {
        let metadata = element.metadata();
        let x_label = self
            .x_label
            .clone()
            .or_else(|| metadata.x_label.clone())
            .unwrap_or_else(|| "Index".to_string());
        let y_label = self
            .y_label
            .clone()
            .or_else(|| metadata.y_label.clone())
            .unwrap_or_else(|| "Value".to_string());
        (x_label, y_label)
    }

    /// All elements overlaid in one panel, layered by z-order.
    fn compose_single_panel(&self, plot: &mut Plot, layout: &mut plotly::layout::Layout) {
        let mut indexed: Vec<&Box<dyn PlotElement>> = self.elements.iter().collect();
        indexed.sort_by_key(|element| element.z_order());

        for element in indexed {
            for trace in element.to_plotly_traces() {
                trace.add_to_plot(plot);
            }
        }

        let bounds = self.global_bounds().with_margin(0.05);
        let (x_label, y_label) = self.axis_labels(self.elements[0].as_ref());

        let x_axis = self
            .theme
            .create_axis(&x_label)
            .range(vec![bounds.x_min, bounds.x_max]);
        // An explicit y range (the offset-shifted window) is used verbatim;
        // otherwise fall back to the padded data bounds.
        let y_range = self.y_range.unwrap_or((bounds.y_min, bounds.y_max));
        let y_axis = self
            .theme
            .create_axis(&y_label)
            .range(vec![y_range.0, y_range.1]);

        *layout = layout.clone().x_axis(x_axis).y_axis(y_axis);

        if let Some(ref secondary) = self.secondary_axis {
            let mut axis = self
                .theme
                .create_axis(secondary.label.as_deref().unwrap_or(""))
                .range(vec![secondary.range.0, secondary.range.1])
                .overlaying("y")
                .side(AxisSide::Right)
                .show_grid(false);
            axis = axis.tick_font(
                plotly::common::Font::new()
                    .size(self.theme.tick_font_size as usize)
                    .color(secondary.tick_color.clone()),
            );
            *layout = layout.clone().y_axis2(axis);
        }
    }

    /// One subplot per element, stacked top to bottom in addition order.
    fn compose_vertical_stack(
        &self,
        plot: &mut Plot,
        layout: &mut plotly::layout::Layout,
    ) -> PlotResult<()> {
        let num_panels = self.elements.len();
        if num_panels > 8 {
            return Err(PlotError::TooManyPanels(num_panels));
        }

        let gap = 0.08;
        let available_height = 1.0 - gap * (num_panels - 1) as f64;
        let panel_height = available_height / num_panels as f64;

        for (panel_idx, element) in self.elements.iter().enumerate() {
            let y_start = (num_panels - 1 - panel_idx) as f64 * (panel_height + gap);
            let y_end = y_start + panel_height;

            for trace in element.to_plotly_traces() {
                if panel_idx == 0 {
                    trace.add_to_plot(plot);
                } else {
                    let x_axis_name = format!("x{}", panel_idx + 1);
                    let y_axis_name = format!("y{}", panel_idx + 1);
                    trace.on_axes(&x_axis_name, &y_axis_name).add_to_plot(plot);
                }
            }

            let bounds = element.data_bounds().with_margin(0.05);
            let (x_label, y_label) = self.axis_labels(element.as_ref());

            let x_axis = self
                .theme
                .create_axis(&x_label)
                .domain(&[0.0, 1.0])
                .range(vec![bounds.x_min, bounds.x_max]);
            let y_axis = self
                .theme
                .create_axis(&y_label)
                .domain(&[y_start, y_end])
                .range(vec![bounds.y_min, bounds.y_max]);

            *layout = match panel_idx + 1 {
                1 => layout.clone().x_axis(x_axis).y_axis(y_axis),
                2 => layout.clone().x_axis2(x_axis).y_axis2(y_axis),
                3 => layout.clone().x_axis3(x_axis).y_axis3(y_axis),
                4 => layout.clone().x_axis4(x_axis).y_axis4(y_axis),
                5 => layout.clone().x_axis5(x_axis).y_axis5(y_axis),
                6 => layout.clone().x_axis6(x_axis).y_axis6(y_axis),
                7 => layout.clone().x_axis7(x_axis).y_axis7(y_axis),
                _ => layout.clone().x_axis8(x_axis).y_axis8(y_axis),
            };
        }

        Ok(())
    }

    /// Render to an HTML file (interactive), creating parent directories.
    ///
    /// # Errors
    /// Propagates composition errors and directory creation failures.
    pub fn write_html<P: AsRef<Path>>(&self, path: P) -> PlotResult<()> {
        let plot = self.to_plot()?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.as_ref().display(), "writing html figure");
        plot.write_html(path);
        Ok(())
    }

    #[cfg(feature = "static-plots")]
    /// Render to a PNG file (static image).
    ///
    /// # Errors
    /// Returns [`PlotError::Export`] when the static exporter fails.
    pub fn write_png<P: AsRef<Path>>(&self, path: P, width: u32, height: u32) -> PlotResult<()> {
        self.export_static(path.as_ref(), ImageFormat::PNG, width, height)
    }

    #[cfg(feature = "static-plots")]
    /// Render to an SVG file (vector graphics).
    ///
    /// # Errors
    /// Returns [`PlotError::Export`] when the static exporter fails.
    pub fn write_svg<P: AsRef<Path>>(&self, path: P, width: u32, height: u32) -> PlotResult<()> {
        self.export_static(path.as_ref(), ImageFormat::SVG, width, height)
    }

    #[cfg(feature = "static-plots")]
    fn export_static(
        &self,
        path: &Path,
        format: ImageFormat,
        width: u32,
        height: u32,
    ) -> PlotResult<()> {
        let plot = self.to_plot()?;
        let plot_json = serde_json::to_value(&plot)
            .map_err(|e| PlotError::Export(format!("failed to serialize plot: {e}")))?;

        let mut exporter = StaticExporterBuilder::default()
            .build()
            .map_err(|e| PlotError::Export(format!("failed to create exporter: {e}")))?;

        exporter
            .write_fig(
                path,
                &plot_json,
                format,
                width as usize,
                height as usize,
                1.0,
            )
            .map_err(|e| PlotError::Export(format!("failed to export image: {e}")))?;

        Ok(())
    }

    /// Render to a file, dispatching on the extension.
    ///
    /// `html` is always available; `png` and `svg` need the `static-plots`
    /// feature. Unknown extensions fall back to HTML output.
    ///
    /// # Errors
    /// Propagates composition and output errors.
    pub fn render_to_file<P: AsRef<Path>>(&self, path: P) -> PlotResult<()> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        #[cfg(feature = "static-plots")]
        {
            match ext {
                "png" => self.write_png(path, self.size.0, self.size.1),
                "svg" => self.write_svg(path, self.size.0, self.size.1),
                "html" => self.write_html(path),
                _ => self.write_html(path.with_extension("html")),
            }
        }
        #[cfg(not(feature = "static-plots"))]
        {
            if ext != "html" {
                tracing::warn!(
                    requested = ext,
                    "static plot rendering not enabled, writing html instead"
                );
                self.write_html(path.with_extension("html"))
            } else {
                self.write_html(path)
            }
        }
    }

    /// Show the figure in the default browser, synchronously.
    ///
    /// # Errors
    /// Propagates composition errors; the display hand-off itself does not
    /// report failure.
    pub fn show(&self) -> PlotResult<()> {
        let plot = self.to_plot()?;
        debug!("displaying figure");
        plot.show();
        Ok(())
    }
}

impl Default for PlotComposer {
    fn default() -> Self {
        Self::new()
    }
}
