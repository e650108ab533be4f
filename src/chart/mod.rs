use std::f64::consts::PI;

use thiserror::Error;

use crate::model::criteria::CriterionScore;
use crate::model::geometry::{AxisLine, ChartGeometry, LabelAnchor, Point};

/// A radar chart with fewer than three axes is degenerate.
pub const MIN_AXES: usize = 3;
pub const DEFAULT_RING_LEVELS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];
pub const DEFAULT_LABEL_OFFSET: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartParams {
    pub center: Point,
    pub radius: f64,
    pub ring_levels: Vec<f64>,
    pub label_offset: f64,
}

impl ChartParams {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            ring_levels: DEFAULT_RING_LEVELS.to_vec(),
            label_offset: DEFAULT_LABEL_OFFSET,
        }
    }

    /// Replaces the ring levels with `rings` evenly spaced levels ending at 1.
    pub fn with_ring_count(mut self, rings: usize) -> Self {
        self.ring_levels = (1..=rings).map(|i| i as f64 / rings as f64).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("radar chart needs at least 3 axes, got {0}")]
    TooFewAxes(usize),
    #[error("chart radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("ring levels must be strictly ascending within (0, 1]")]
    InvalidRingLevels,
    #[error("criterion {label}: max score must be positive, got {max_score}")]
    NonPositiveMaxScore { label: String, max_score: f64 },
    #[error("criterion {label}: score {score} is outside [0, {max_score}]")]
    ScoreOutOfRange {
        label: String,
        score: f64,
        max_score: f64,
    },
}

/// Converts scored criteria into radar-chart geometry around `params.center`.
///
/// Axis 0 points straight up and subsequent axes proceed clockwise: axis `i`
/// sits at angle `i * 2π/N − π/2` in screen coordinates (y grows downward).
/// The offset and direction are fixed; callers rely on them for visual parity
/// across renders. Pure function of its inputs.
pub fn compute_radar_geometry(
    criteria: &[CriterionScore],
    params: &ChartParams,
) -> Result<ChartGeometry, GeometryError> {
    validate(criteria, params)?;

    let n = criteria.len();
    let step = 2.0 * PI / n as f64;
    let center = params.center;

    let mut ring_polygons = Vec::with_capacity(params.ring_levels.len());
    for &level in &params.ring_levels {
        let ring_radius = level * params.radius;
        let mut ring = Vec::with_capacity(n);
        for i in 0..n {
            ring.push(point_at(center, ring_radius, axis_angle(i, step)));
        }
        ring_polygons.push(ring);
    }

    let mut axis_lines = Vec::with_capacity(n);
    for i in 0..n {
        axis_lines.push(AxisLine {
            from: center,
            to: point_at(center, params.radius, axis_angle(i, step)),
        });
    }

    let mut data_polygon = Vec::with_capacity(n);
    for (i, criterion) in criteria.iter().enumerate() {
        let data_radius = (criterion.score / criterion.max_score) * params.radius;
        data_polygon.push(point_at(center, data_radius, axis_angle(i, step)));
    }
    let data_points = data_polygon.clone();

    let label_radius = params.radius + params.label_offset;
    let mut label_anchors = Vec::with_capacity(n);
    for (i, criterion) in criteria.iter().enumerate() {
        label_anchors.push(LabelAnchor {
            point: point_at(center, label_radius, axis_angle(i, step)),
            label: criterion.label.clone(),
            score: criterion.score,
        });
    }

    Ok(ChartGeometry {
        ring_polygons,
        axis_lines,
        data_polygon,
        data_points,
        label_anchors,
    })
}

fn validate(criteria: &[CriterionScore], params: &ChartParams) -> Result<(), GeometryError> {
    if criteria.len() < MIN_AXES {
        return Err(GeometryError::TooFewAxes(criteria.len()));
    }
    if !(params.radius > 0.0) {
        return Err(GeometryError::NonPositiveRadius(params.radius));
    }
    for window in params.ring_levels.windows(2) {
        if !(window[0] < window[1]) {
            return Err(GeometryError::InvalidRingLevels);
        }
    }
    for &level in &params.ring_levels {
        if !(level > 0.0 && level <= 1.0) {
            return Err(GeometryError::InvalidRingLevels);
        }
    }
    for criterion in criteria {
        if !(criterion.max_score > 0.0) {
            return Err(GeometryError::NonPositiveMaxScore {
                label: criterion.label.clone(),
                max_score: criterion.max_score,
            });
        }
        if !(criterion.score >= 0.0 && criterion.score <= criterion.max_score) {
            return Err(GeometryError::ScoreOutOfRange {
                label: criterion.label.clone(),
                score: criterion.score,
                max_score: criterion.max_score,
            });
        }
    }
    Ok(())
}

fn axis_angle(index: usize, step: f64) -> f64 {
    index as f64 * step - PI / 2.0
}

fn point_at(center: Point, radius: f64, angle: f64) -> Point {
    Point {
        x: center.x + radius * angle.cos(),
        y: center.y + radius * angle.sin(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/chart/tests.rs"]
mod tests;
