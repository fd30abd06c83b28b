//! Free-hand capture of a field boundary.
//!
//! Points arrive in canvas-local coordinates straight from pointer events.
//! They are kept exactly as given: no deduplication and no bounds checks
//! against the canvas size.

use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::AgrobotError;

/// Fewest points that can bound an area.
pub const MIN_BOUNDARY_POINTS: usize = 3;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
}

impl PathPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for PathPoint {
    fn from(value: (f32, f32)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Accumulates one drawing session worth of points.
#[derive(Debug, Default)]
pub struct PathCapture {
    points: Vec<PathPoint>,
    drawing: bool,
}

impl PathCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new path at `point`, discarding any unconfirmed one.
    pub fn begin(&mut self, point: PathPoint) {
        self.points.clear();
        self.points.push(point);
        self.drawing = true;
    }

    /// Appends `point` while a path is being drawn. Ignored otherwise.
    pub fn extend(&mut self, point: PathPoint) {
        if self.drawing {
            self.points.push(point);
        }
    }

    /// Stops accumulating points. The path stays available for confirm or clear.
    pub fn end(&mut self) {
        if self.drawing {
            debug!("Path drawing ended with {} points", self.points.len());
        }
        self.drawing = false;
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.drawing = false;
    }

    /// Closes the drawn path into a field boundary and resets the capture.
    ///
    /// # Errors
    ///
    /// Returns `PathValidation` when fewer than 3 points were drawn, in which
    /// case the current path is left untouched.
    pub fn confirm(&mut self) -> Result<FieldBoundary, AgrobotError> {
        if self.points.len() < MIN_BOUNDARY_POINTS {
            return Err(AgrobotError::PathValidation {
                points: self.points.len(),
            });
        }

        self.drawing = false;
        let boundary = FieldBoundary {
            vertices: std::mem::take(&mut self.points),
        };
        info!(
            "Field boundary confirmed with {} vertices",
            boundary.vertices.len()
        );
        Ok(boundary)
    }

    /// Current points in insertion order.
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}

/// A closed polygon: the last vertex connects back to the first.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FieldBoundary {
    vertices: Vec<PathPoint>,
}

impl FieldBoundary {
    pub fn vertices(&self) -> &[PathPoint] {
        &self.vertices
    }

    /// Every edge of the polygon, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (PathPoint, PathPoint)> + '_ {
        self.vertices.iter().copied().circular_tuple_windows()
    }

    /// Vertices followed by the first vertex again, ready for stroking.
    pub fn closed_points(&self) -> Vec<PathPoint> {
        let mut points = self.vertices.clone();
        if let Some(first) = self.vertices.first() {
            points.push(*first);
        }
        points
    }

    /// Enclosed area in squared canvas units (shoelace formula).
    pub fn area(&self) -> f64 {
        let twice_area: f64 = self
            .edges()
            .map(|(a, b)| a.x as f64 * b.y as f64 - b.x as f64 * a.y as f64)
            .sum();
        twice_area.abs() / 2.
    }
}
