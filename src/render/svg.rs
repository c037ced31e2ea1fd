//! SVG plotting backend
//!
//! Emits plain SVG markup into a string: circles for point plots,
//! polylines for connected paths, polygons for filled regions. The
//! viewport is derived from the table's bounding box; y grows upward in
//! data space, so coordinates are flipped when mapped onto the SVG grid.

use crate::dump::table::{TidyRecord, TidyTable};
use crate::render::Plotter;
use std::fmt::Write;

/// Default sizes and settings (in pixels)
mod defaults {
    pub const WIDTH: f64 = 400.0;
    pub const HEIGHT: f64 = 400.0;
    pub const MARGIN: f64 = 10.0;
    pub const POINT_RADIUS: f64 = 2.0;
    pub const STROKE_WIDTH: f64 = 1.5;
    pub const STROKE: &str = "black";
    /// Per-shape fill palette, cycled by shape id.
    pub const FILLS: &[&str] = &[
        "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02",
    ];
}

/// Axis-aligned bounding box over a table's coordinates.
#[derive(Debug, Clone, Copy)]
struct BoundingBox {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl BoundingBox {
    fn of(table: &TidyTable) -> Self {
        let mut bounds = BoundingBox {
            min_x: f64::MAX,
            min_y: f64::MAX,
            max_x: f64::MIN,
            max_y: f64::MIN,
        };
        for record in table.records() {
            bounds.expand(record.x, record.y);
        }
        bounds
    }

    fn expand(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Span along x, never zero (degenerate boxes map to a unit span).
    fn span_x(&self) -> f64 {
        if self.max_x > self.min_x {
            self.max_x - self.min_x
        } else {
            1.0
        }
    }

    fn span_y(&self) -> f64 {
        if self.max_y > self.min_y {
            self.max_y - self.min_y
        } else {
            1.0
        }
    }
}

/// Mapping from data coordinates onto the SVG pixel grid.
#[derive(Debug, Clone, Copy)]
struct Projection {
    bounds: BoundingBox,
    width: f64,
    height: f64,
}

impl Projection {
    fn of(table: &TidyTable, width: f64, height: f64) -> Self {
        Projection {
            bounds: BoundingBox::of(table),
            width,
            height,
        }
    }

    /// Map a data point to pixel coordinates, flipping the y axis.
    fn map(&self, x: f64, y: f64) -> (f64, f64) {
        let inner_w = self.width - 2.0 * defaults::MARGIN;
        let inner_h = self.height - 2.0 * defaults::MARGIN;
        let px = defaults::MARGIN + (x - self.bounds.min_x) / self.bounds.span_x() * inner_w;
        let py = defaults::MARGIN + (self.bounds.max_y - y) / self.bounds.span_y() * inner_h;
        (px, py)
    }
}

/// An SVG drawing surface implementing [`Plotter`].
///
/// Accumulates elements as methods are called; [`SvgPlot::finish`] wraps
/// them in the `<svg>` envelope and returns the document.
pub struct SvgPlot {
    width: f64,
    height: f64,
    body: String,
}

impl SvgPlot {
    pub fn new() -> Self {
        Self::with_size(defaults::WIDTH, defaults::HEIGHT)
    }

    pub fn with_size(width: f64, height: f64) -> Self {
        SvgPlot {
            width,
            height,
            body: String::new(),
        }
    }

    /// Fill color for a shape id, cycling through the palette.
    fn fill_for(shape: u32) -> &'static str {
        let index = (shape.max(1) - 1) as usize % defaults::FILLS.len();
        defaults::FILLS[index]
    }

    /// Build the `points` attribute for a shape group, in row order.
    fn points_attribute(projection: &Projection, records: &[TidyRecord]) -> String {
        let mut points = String::new();
        for record in records {
            let (px, py) = projection.map(record.x, record.y);
            if !points.is_empty() {
                points.push(' ');
            }
            write!(points, "{:.2},{:.2}", px, py).unwrap();
        }
        points
    }

    /// Finish the drawing and return the SVG document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.0} {h:.0}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl Default for SvgPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Plotter for SvgPlot {
    fn plot_points(&mut self, table: &TidyTable) {
        if table.is_empty() {
            return;
        }
        let projection = Projection::of(table, self.width, self.height);
        for record in table.records() {
            let (cx, cy) = projection.map(record.x, record.y);
            writeln!(
                self.body,
                r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
                cx,
                cy,
                defaults::POINT_RADIUS,
                defaults::STROKE
            )
            .unwrap();
        }
    }

    fn plot_paths(&mut self, table: &TidyTable) {
        if table.is_empty() {
            return;
        }
        let projection = Projection::of(table, self.width, self.height);
        for (_, records) in table.shapes() {
            let points = Self::points_attribute(&projection, records);
            writeln!(
                self.body,
                r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{:.2}"/>"#,
                points,
                defaults::STROKE,
                defaults::STROKE_WIDTH
            )
            .unwrap();
        }
    }

    fn plot_filled(&mut self, table: &TidyTable) {
        if table.is_empty() {
            return;
        }
        let projection = Projection::of(table, self.width, self.height);
        for (shape, records) in table.shapes() {
            let points = Self::points_attribute(&projection, records);
            writeln!(
                self.body,
                r#"  <polygon points="{}" fill="{}" stroke="none"/>"#,
                points,
                Self::fill_for(shape)
            )
            .unwrap();
            writeln!(
                self.body,
                r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{:.2}"/>"#,
                points,
                defaults::STROKE,
                defaults::STROKE_WIDTH
            )
            .unwrap();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_table() -> TidyTable {
        TidyTable::new(vec![
            TidyRecord::new(1, 0.0, 0.0),
            TidyRecord::new(1, 10.0, 0.0),
            TidyRecord::new(1, 10.0, 10.0),
            TidyRecord::new(1, 0.0, 10.0),
        ])
    }

    #[test]
    fn test_projection_maps_corners_inside_margin() {
        let table = square_table();
        let projection = Projection::of(&table, 400.0, 400.0);
        // Data (0,0) is the bottom-left corner, so it lands at the bottom
        // of the flipped pixel grid
        assert_eq!(projection.map(0.0, 0.0), (10.0, 390.0));
        assert_eq!(projection.map(10.0, 10.0), (390.0, 10.0));
    }

    #[test]
    fn test_projection_degenerate_box_does_not_divide_by_zero() {
        let table = TidyTable::new(vec![TidyRecord::new(1, 5.0, 5.0)]);
        let projection = Projection::of(&table, 400.0, 400.0);
        let (px, py) = projection.map(5.0, 5.0);
        assert!(px.is_finite());
        assert!(py.is_finite());
    }

    #[test]
    fn test_plot_points_one_circle_per_record() {
        let mut plot = SvgPlot::new();
        plot.plot_points(&square_table());
        let svg = plot.finish();
        assert_eq!(svg.matches("<circle").count(), 4);
    }

    #[test]
    fn test_plot_paths_one_polyline_per_shape() {
        let mut plot = SvgPlot::new();
        plot.plot_paths(&square_table());
        let svg = plot.finish();
        assert_eq!(svg.matches("<polyline").count(), 1);
    }

    #[test]
    fn test_plot_filled_overlays_path_on_polygon() {
        let mut plot = SvgPlot::new();
        plot.plot_filled(&square_table());
        let svg = plot.finish();
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert_eq!(svg.matches("<polyline").count(), 1);
    }

    #[test]
    fn test_fill_palette_cycles() {
        assert_eq!(SvgPlot::fill_for(1), defaults::FILLS[0]);
        assert_eq!(SvgPlot::fill_for(2), defaults::FILLS[1]);
        let n = defaults::FILLS.len() as u32;
        assert_eq!(SvgPlot::fill_for(n + 1), defaults::FILLS[0]);
    }

    #[test]
    fn test_empty_table_renders_empty_document() {
        let mut plot = SvgPlot::new();
        plot.plot_paths(&TidyTable::default());
        let svg = plot.finish();
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn test_finish_wraps_svg_envelope() {
        let svg = SvgPlot::with_size(200.0, 100.0).finish();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
