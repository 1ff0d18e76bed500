//! Line chart of the running probability, rendered as SVG.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

#[cfg(feature = "std")]
use crate::error::ChartError;

#[cfg(feature = "std")]
fn ceil(value: f64) -> f64 {
    value.ceil()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn ceil(value: f64) -> f64 {
    libm::ceil(value)
}

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Gridline count the tick steps aim to stay under.
const MAX_TICKS: f64 = 10.0;

/// A line chart of running probability (%) against trial number.
///
/// ```
/// use trips::Chart;
///
/// let svg = Chart::default().render(&[0.0, 50.0, 33.3]);
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Chart title.
    pub title: String,
    /// Label of the horizontal axis.
    pub x_label: String,
    /// Label of the vertical axis.
    pub y_label: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new("Probability of Drawing a Three of a Kind Over Time")
    }
}

impl Chart {
    /// Creates a chart with the given title and default labels and size.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: "Number of Draws".to_string(),
            y_label: "Probability (%)".to_string(),
            width: 1000,
            height: 600,
        }
    }

    /// Sets the horizontal axis label.
    #[must_use]
    pub fn with_x_label(mut self, label: &str) -> Self {
        self.x_label = label.to_string();
        self
    }

    /// Sets the vertical axis label.
    #[must_use]
    pub fn with_y_label(mut self, label: &str) -> Self {
        self.y_label = label.to_string();
        self
    }

    /// Sets the image size in pixels.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns a displayable SVG view of `series`.
    ///
    /// `series[i]` is plotted at x = `i + 1`.
    #[must_use]
    pub const fn svg<'a>(&'a self, series: &'a [f64]) -> Svg<'a> {
        Svg {
            chart: self,
            series,
        }
    }

    /// Renders `series` as an SVG document.
    #[must_use]
    pub fn render(&self, series: &[f64]) -> String {
        self.svg(series).to_string()
    }

    /// Renders `series` and writes the SVG document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Io`] if the file cannot be written.
    #[cfg(feature = "std")]
    pub fn save<P: AsRef<std::path::Path>>(
        &self,
        series: &[f64],
        path: P,
    ) -> Result<(), ChartError> {
        std::fs::write(path.as_ref(), self.render(series))?;
        log::info!("chart written to {}", path.as_ref().display());
        Ok(())
    }
}

/// SVG rendering of a [`Chart`] over a series, produced by [`Chart::svg`].
#[derive(Debug, Clone, Copy)]
pub struct Svg<'a> {
    chart: &'a Chart,
    series: &'a [f64],
}

impl Svg<'_> {
    fn plot_width(&self) -> f64 {
        (f64::from(self.chart.width) - MARGIN_LEFT - MARGIN_RIGHT).max(1.0)
    }

    fn plot_height(&self) -> f64 {
        (f64::from(self.chart.height) - MARGIN_TOP - MARGIN_BOTTOM).max(1.0)
    }

    fn plot_x(&self, x: f64, x_top: f64) -> f64 {
        MARGIN_LEFT + x / x_top * self.plot_width()
    }

    fn plot_y(&self, y: f64, y_top: f64) -> f64 {
        MARGIN_TOP + (1.0 - y / y_top) * self.plot_height()
    }

    /// Largest trial number shown on the x axis.
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for trial counts"
    )]
    fn x_top(&self) -> f64 {
        self.series.len().max(1) as f64
    }

    /// Y axis step and top, rounded up to a whole number of steps.
    ///
    /// Non-finite values are left off the axis. Both results are finite and
    /// positive.
    fn y_axis(&self) -> (f64, f64) {
        let max = self
            .series
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max);
        let step = nice_step(max, 0.01);
        let top = (ceil(max / step) * step).max(step);
        if top.is_finite() {
            (step, top)
        } else {
            // Power-of-two split keeps every tick exact and finite.
            (max / 8.0, max)
        }
    }

    fn write_grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let left = MARGIN_LEFT;
        let right = MARGIN_LEFT + self.plot_width();
        let top = MARGIN_TOP;
        let bottom = MARGIN_TOP + self.plot_height();

        let (y_step, y_top) = self.y_axis();
        let precision = if y_step < 0.1 {
            2
        } else if y_step < 1.0 {
            1
        } else {
            0
        };
        for k in 0..=tick_count(y_top, y_step) {
            #[expect(
                clippy::cast_precision_loss,
                reason = "tick counts are small"
            )]
            let y = k as f64 * y_step;
            let py = self.plot_y(y, y_top);
            writeln!(
                f,
                r##"<line x1="{left:.2}" y1="{py:.2}" x2="{right:.2}" y2="{py:.2}" stroke="#dddddd"/>"##
            )?;
            writeln!(
                f,
                r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="end">{y:.precision$}</text>"#,
                left - 6.0,
                py + 4.0
            )?;
        }

        let x_top = self.x_top();
        let x_step = nice_step(x_top, 1.0);
        for k in 0..=tick_count(x_top, x_step) {
            #[expect(
                clippy::cast_precision_loss,
                reason = "tick counts are small"
            )]
            let x = k as f64 * x_step;
            if x > x_top {
                break;
            }
            let px = self.plot_x(x, x_top);
            writeln!(
                f,
                r##"<line x1="{px:.2}" y1="{top:.2}" x2="{px:.2}" y2="{bottom:.2}" stroke="#dddddd"/>"##
            )?;
            writeln!(
                f,
                r#"<text x="{px:.2}" y="{:.2}" font-size="12" text-anchor="middle">{x:.0}</text>"#,
                bottom + 18.0
            )?;
        }

        writeln!(
            f,
            r#"<rect x="{left:.2}" y="{top:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
            self.plot_width(),
            self.plot_height()
        )
    }

    fn write_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.series.is_empty() {
            return Ok(());
        }

        let x_top = self.x_top();
        let (_, y_top) = self.y_axis();
        // One point per pixel column is enough.
        let stride = self.series.len().div_ceil(self.plot_width() as usize).max(1);
        let last = self.series.len() - 1;

        f.write_str(r##"<polyline fill="none" stroke="#1f77b4" stroke-width="1.5" points=""##)?;
        for (i, &value) in self.series.iter().enumerate() {
            if (i % stride != 0 && i != last) || !value.is_finite() {
                continue;
            }
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for trial counts"
            )]
            let x = (i + 1) as f64;
            write!(
                f,
                "{:.2},{:.2} ",
                self.plot_x(x, x_top),
                self.plot_y(value, y_top)
            )?;
        }
        f.write_str("\"/>\n")
    }
}

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.chart.width;
        let height = self.chart.height;
        let center = MARGIN_LEFT + self.plot_width() / 2.0;
        let middle = MARGIN_TOP + self.plot_height() / 2.0;

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(
            f,
            r#"<rect width="{width}" height="{height}" fill="white"/>"#
        )?;
        writeln!(
            f,
            r#"<text x="{center:.2}" y="{:.2}" font-size="18" text-anchor="middle">{}</text>"#,
            MARGIN_TOP / 2.0 + 6.0,
            Escaped(&self.chart.title)
        )?;
        self.write_grid(f)?;
        self.write_line(f)?;
        writeln!(
            f,
            r#"<text x="{center:.2}" y="{:.2}" font-size="14" text-anchor="middle">{}</text>"#,
            f64::from(height) - 12.0,
            Escaped(&self.chart.x_label)
        )?;
        writeln!(
            f,
            r#"<text x="18" y="{middle:.2}" font-size="14" text-anchor="middle" transform="rotate(-90 18 {middle:.2})">{}</text>"#,
            Escaped(&self.chart.y_label)
        )?;
        writeln!(f, "</svg>")
    }
}

/// Smallest step from the 1-2-5 sequence (starting at `min`) that splits
/// `span` into at most [`MAX_TICKS`] intervals.
fn nice_step(span: f64, min: f64) -> f64 {
    let mut step = min;
    let mut factors = [2.0, 2.5, 2.0].into_iter().cycle();
    while span / step > MAX_TICKS {
        step *= factors.next().unwrap_or(2.0);
    }
    step
}

/// Number of whole steps from zero to `top`, capped so a degenerate axis
/// still draws a bounded grid.
fn tick_count(top: f64, step: f64) -> usize {
    let ticks = (top / step + 1e-9) as usize;
    ticks.min(2 * MAX_TICKS as usize)
}

/// XML text escaping.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
