//! Primitives and traits for scope error correction
//!
//! Provides the [Corrector] trait as well as the [CorrectionInput],
//! [CorrectionResult] and [GroupScore] types shared by correction engines.
//!
//! Sign convention: correction = bull - POIB, in the canonical frame
//! (+X right, +Y up). A positive `dx` dials RIGHT, a positive `dy` dials UP.
//!

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::SecError;
use crate::frame::SampleSet;
use crate::math::{is_positive, Clicks, Inches, Moa, Point2D};

/// Correction engine trait
pub trait Corrector {
    fn correct(&self, input: &CorrectionInput) -> Result<CorrectionResult, SecError>;

    fn score(&self, poib: Point2D, bull: Point2D) -> GroupScore;
}

/// Where the point of impact comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PoibSource {
    /// Already averaged by the caller
    Point(Point2D),
    /// Individual hits, averaged on resolution
    Samples(SampleSet),
}
impl PoibSource {
    pub fn resolve(&self) -> Result<Point2D, SecError> {
        match self {
            PoibSource::Point(p) => Ok(*p),
            PoibSource::Samples(samples) => samples.centroid(),
        }
    }
}
impl From<Point2D> for PoibSource {
    fn from(p: Point2D) -> Self {
        PoibSource::Point(p)
    }
}
impl From<SampleSet> for PoibSource {
    fn from(samples: SampleSet) -> Self {
        PoibSource::Samples(samples)
    }
}
impl From<Vec<Point2D>> for PoibSource {
    fn from(points: Vec<Point2D>) -> Self {
        PoibSource::Samples(SampleSet::from(points))
    }
}

/// Everything needed to compute a scope correction.
///
/// `bull` and the POIB source must already be in the same frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionInput {
    pub bull: Point2D,
    pub poib: PoibSource,
    pub distance_yards: f64,
    pub click_value_moa: f64,
    pub true_moa_inches_at_100: f64,
}
impl CorrectionInput {
    /// Inches subtended by one MOA at 100 yards ("true" MOA)
    pub const TRUE_MOA_INCHES_AT_100: f64 = 1.047;

    pub fn new(
        bull: Point2D,
        poib: impl Into<PoibSource>,
        distance_yards: f64,
        click_value_moa: f64,
    ) -> Result<Self, SecError> {
        let input = Self {
            bull,
            poib: poib.into(),
            distance_yards,
            click_value_moa,
            true_moa_inches_at_100: Self::TRUE_MOA_INCHES_AT_100,
        };
        input.validate()?;
        Ok(input)
    }

    /// Override the MOA size, e.g. 1.0 for shooter's MOA.
    pub fn with_true_moa(self, true_moa_inches_at_100: f64) -> Result<Self, SecError> {
        let input = Self {
            true_moa_inches_at_100,
            ..self
        };
        input.validate()?;
        Ok(input)
    }

    /// Check the positivity constraints.
    pub fn validate(&self) -> Result<(), SecError> {
        if !is_positive(self.distance_yards) {
            return Err(SecError::InvalidDistance(self.distance_yards));
        }
        if !is_positive(self.click_value_moa) {
            return Err(SecError::InvalidClickValue(self.click_value_moa));
        }
        if !is_positive(self.true_moa_inches_at_100) {
            return Err(SecError::InvalidTrueMoa(self.true_moa_inches_at_100));
        }
        Ok(())
    }

    pub fn resolve_poib(&self) -> Result<Point2D, SecError> {
        self.poib.resolve()
    }
}

/// Horizontal dial direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Windage {
    #[display(fmt = "RIGHT")]
    Right,
    #[display(fmt = "LEFT")]
    Left,
}
impl Windage {
    /// Zero still dials RIGHT; there is no neutral label.
    pub fn from_delta(dx: f64) -> Self {
        if dx >= 0.0 {
            Windage::Right
        } else {
            Windage::Left
        }
    }
}

/// Vertical dial direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Elevation {
    #[display(fmt = "UP")]
    Up,
    #[display(fmt = "DOWN")]
    Down,
}
impl Elevation {
    /// Zero still dials UP; there is no neutral label.
    pub fn from_delta(dy: f64) -> Self {
        if dy >= 0.0 {
            Elevation::Up
        } else {
            Elevation::Down
        }
    }
}

/// Signed bull - POIB offset, rounded for display
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct DeltaInches {
    pub dx: Inches,
    pub dy: Inches,
}

/// Correction along one axis. Magnitudes are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisCorrection<D> {
    pub direction: D,
    pub moa: Moa,
    pub clicks: Clicks,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Results of a correction run
pub struct CorrectionResult {
    pub delta_inches: DeltaInches,
    pub windage: AxisCorrection<Windage>,
    pub elevation: AxisCorrection<Elevation>,
}

/// Group quality, derived only from how far the POIB sits from the bull
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupScore {
    pub offset_inches: Inches,
    /// 0..=100
    pub score: u8,
    pub tip: &'static str,
}
