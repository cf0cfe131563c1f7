//! Coordinate frames
//!
//! Every point that reaches the correction math must be in the canonical
//! frame: inches, +X right, +Y up. Pixel input is converted here, with the
//! scale and y-axis orientation always supplied by the caller.

use derive_more::Deref;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::SecError;
use crate::math::{is_positive, Point2D};

/// Direction the source y-axis grows in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YAxis {
    /// Canvas/pixel convention, rows grow downward
    Down,
    /// Physical convention, already up-positive
    Up,
}

/// Pixels per inch of target face. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deref)]
pub struct PxPerInch(f64);
impl PxPerInch {
    pub fn new(px_per_inch: f64) -> Result<Self, SecError> {
        if !is_positive(px_per_inch) {
            log::debug!("rejecting pixel scale {px_per_inch}");
            return Err(SecError::InvalidScale(px_per_inch));
        }
        Ok(Self(px_per_inch))
    }
}

/// Maps points from a pixel frame to the canonical inch frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateFrame {
    origin_px: Point2D,
    px_per_inch: PxPerInch,
    y_axis: YAxis,
}
impl CoordinateFrame {
    pub fn new(origin_px: Point2D, px_per_inch: f64, y_axis: YAxis) -> Result<Self, SecError> {
        Ok(Self {
            origin_px,
            px_per_inch: PxPerInch::new(px_per_inch)?,
            y_axis,
        })
    }

    pub fn origin_px(&self) -> Point2D {
        self.origin_px
    }

    pub fn px_per_inch(&self) -> PxPerInch {
        self.px_per_inch
    }

    pub fn y_axis(&self) -> YAxis {
        self.y_axis
    }

    pub fn to_inches(&self, point_px: Point2D) -> Point2D {
        let offset = DVec2::from(point_px) - DVec2::from(self.origin_px);
        let offset = match self.y_axis {
            YAxis::Down => DVec2::new(offset.x, -offset.y),
            YAxis::Up => offset,
        };
        Point2D::from(offset / *self.px_per_inch)
    }

    pub fn points_to_inches(&self, points_px: &[Point2D]) -> Vec<Point2D> {
        points_px.iter().map(|p| self.to_inches(*p)).collect()
    }
}

/// Convert a single pixel-space point into canonical inches relative to `origin_px`.
pub fn to_inches(
    point_px: Point2D,
    origin_px: Point2D,
    px_per_inch: f64,
    y_axis: YAxis,
) -> Result<Point2D, SecError> {
    Ok(CoordinateFrame::new(origin_px, px_per_inch, y_axis)?.to_inches(point_px))
}

/// Arithmetic mean of the points, i.e. the POIB of a group.
pub fn centroid(points: &[Point2D]) -> Result<Point2D, SecError> {
    if points.is_empty() {
        return Err(SecError::EmptySample);
    }
    let sum = points
        .iter()
        .fold(DVec2::ZERO, |acc, p| acc + DVec2::from(*p));
    let poib = Point2D::from(sum / points.len() as f64);
    log::trace!("centroid of {} points: {:?}", points.len(), poib);
    Ok(poib)
}

/// Ordered impact points with undo/redo.
///
/// Order does not change the centroid but is kept for editing history.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSet {
    points: Vec<Point2D>,
    #[serde(skip)]
    undone: Vec<Point2D>,
}
impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point2D) {
        self.points.push(point);
        self.undone.clear();
    }

    /// Remove the most recent point, keeping it for [SampleSet::redo].
    pub fn undo(&mut self) -> Option<Point2D> {
        let point = self.points.pop()?;
        self.undone.push(point);
        Some(point)
    }

    pub fn redo(&mut self) -> Option<Point2D> {
        let point = self.undone.pop()?;
        self.points.push(point);
        Some(point)
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.undone.clear();
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn centroid(&self) -> Result<Point2D, SecError> {
        centroid(&self.points)
    }
}
impl From<Vec<Point2D>> for SampleSet {
    fn from(points: Vec<Point2D>) -> Self {
        Self {
            points,
            undone: Vec::new(),
        }
    }
}
impl FromIterator<Point2D> for SampleSet {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
