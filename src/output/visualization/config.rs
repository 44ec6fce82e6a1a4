//! Plot configuration shared across visualization modules
//!
//! Figures are described the way course material specifies them: a size in
//! inches and a resolution in DPI. Line widths, marker sizes and fonts are
//! given in typographic points and scaled to pixels with the same DPI, so a
//! figure keeps its proportions when the resolution changes.

use plotters::prelude::*;

/// Points per inch
const POINTS_PER_INCH: f64 = 72.0;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width_in`, `height_in`, `dpi`: Figure size and resolution
/// - `title`, `xlabel`, `ylabel`: Text
/// - `reference_label`, `approximation_label`: Legend entries
/// - `font_family`: Font used for every text element
/// - `reference_color`: Colour of the exact (continuous) curve
/// - `approximation_color`: Edge colour of bars and trapezoids, colour of trajectories
/// - `fill_color`, `fill_opacity`: Interior of bars and trapezoids
/// - `line_width`, `marker_size`: In points
/// - `show_grid`, `show_legend`: Toggles
/// - `reference_samples`: Number of points of the continuous curve
///
/// # Example
///
/// ```rust
/// use numplot_rs::output::visualization::PlotConfig;
///
/// let config = PlotConfig::integration("Trapezoids");
/// assert_eq!(config.pixel_size(), (1200, 750));
/// assert_eq!(config.xlabel, "x");
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Figure width in inches (default: 8)
    pub width_in: f64,

    /// Figure height in inches (default: 5)
    pub height_in: f64,

    /// Resolution in dots per inch (default: 150)
    pub dpi: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: set by plot type)
    pub ylabel: String,

    /// Legend entry of the continuous curve
    pub reference_label: String,

    /// Legend entry of the discrete approximation (None: not in legend)
    pub approximation_label: Option<String>,

    /// Font family for title, labels, ticks and legend (default: "sans-serif")
    pub font_family: String,

    /// Continuous curve colour (default: BLUE)
    pub reference_color: RGBColor,

    /// Approximation colour (default: RED)
    pub approximation_color: RGBColor,

    /// Interior of bars and trapezoids (default: RGB 31, 119, 180)
    pub fill_color: RGBColor,

    /// Opacity of `fill_color` in [0, 1] (default: 0.3)
    pub fill_opacity: f64,

    /// Background colour (default: WHITE)
    pub background: RGBColor,

    /// Line width in points (default: 2)
    pub line_width: f64,

    /// Marker diameter in points (default: 8)
    pub marker_size: f64,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Show the legend box (default: true)
    pub show_legend: bool,

    /// Samples of the continuous curve (default: 100)
    pub reference_samples: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width_in: 8.0,
            height_in: 5.0,
            dpi: 150,
            title: "Plot".to_string(),
            xlabel: String::new(),  // Set by specific plot type
            ylabel: String::new(),
            reference_label: String::new(),
            approximation_label: None,
            font_family: "sans-serif".to_string(),
            reference_color: BLUE,
            approximation_color: RED,
            fill_color: RGBColor(31, 119, 180),
            fill_opacity: 0.3,
            background: WHITE,
            line_width: 2.0,
            marker_size: 8.0,
            show_grid: true,
            show_legend: true,
            reference_samples: 100,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for quadrature figures with optional custom title
    ///
    /// Sets axis labels to "x" / "y", the curve legend to "f(x)" and the
    /// title to the custom value or "Numerical Integration"
    pub fn integration(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "x".to_string();
        config.ylabel = "y".to_string();
        config.reference_label = "f(x)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Numerical Integration".to_string());
        config
    }

    /// Create config for ODE trajectory figures with optional custom title
    ///
    /// Sets axis labels to "t" / "x", the curve legend to "Exact solution"
    /// and the title to the custom value or "ODE Solution"
    pub fn ode(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "t".to_string();
        config.ylabel = "x".to_string();
        config.reference_label = "Exact solution".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "ODE Solution".to_string());
        config
    }

    /// Image size in pixels, (width_in · dpi, height_in · dpi)
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }

    /// Convert a length in points to whole pixels (at least 1)
    pub fn points_to_pixels(&self, points: f64) -> u32 {
        (points * self.dpi as f64 / POINTS_PER_INCH).round().max(1.0) as u32
    }

    /// Stroke width in pixels
    pub(crate) fn stroke_px(&self) -> u32 {
        self.points_to_pixels(self.line_width)
    }

    /// Marker radius in pixels
    pub(crate) fn marker_radius_px(&self) -> i32 {
        self.points_to_pixels(self.marker_size / 2.0) as i32
    }

    /// Fill style of bars and trapezoids
    pub(crate) fn fill_style(&self) -> ShapeStyle {
        self.fill_color.mix(self.fill_opacity.clamp(0.0, 1.0)).filled()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
