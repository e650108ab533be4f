use serde::Serialize;

/// A coordinate in the caller's 2D drawing space. The engine never assumes a
/// particular rendering surface; consumers map these onto canvas, SVG or any
/// other vector primitive set unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLine {
    pub from: Point,
    pub to: Point,
}

/// Anchor for caller-side text rendering: the short axis caption plus the raw
/// score, placed just beyond the outer ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelAnchor {
    pub point: Point,
    pub label: String,
    pub score: f64,
}

/// Full render-agnostic output of the radar geometry engine. Ring polygons
/// are not closed; the renderer repeats the first point if its primitive
/// requires it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub ring_polygons: Vec<Vec<Point>>,
    pub axis_lines: Vec<AxisLine>,
    pub data_polygon: Vec<Point>,
    pub data_points: Vec<Point>,
    pub label_anchors: Vec<LabelAnchor>,
}
