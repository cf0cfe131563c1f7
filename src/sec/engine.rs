//! The SEC engine and the request payload it consumes
//!
//! A [CorrectionRequest] is what the upload/UI layer hands over. It may carry
//! pixel coordinates; those go through [CoordinateFrame] with the bull as
//! origin before any correction math runs.

use serde::{Deserialize, Serialize};

use crate::error::SecError;
use crate::frame::{CoordinateFrame, SampleSet, YAxis};
use crate::math::Point2D;

use super::common::{CorrectionInput, CorrectionResult, Corrector, GroupScore, PoibSource};
use super::correction::{compute_correction, correction_for_poib};
use super::score::ScoringPolicy;

/// Canonical correction engine
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SecEngine {
    policy: ScoringPolicy,
}

impl SecEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Resolve a request, then compute both the correction and the group score.
    pub fn run(&self, request: &CorrectionRequest) -> Result<SessionReport, SecError> {
        let input = request.to_input()?;
        let poib = input.resolve_poib()?;
        let correction = correction_for_poib(&input, poib)?;
        let score = self.score(poib, input.bull);
        log::debug!(
            "windage {} {} clicks, elevation {} {} clicks, score {}",
            correction.windage.direction,
            *correction.windage.clicks,
            correction.elevation.direction,
            *correction.elevation.clicks,
            score.score
        );

        Ok(SessionReport {
            poib,
            correction,
            score,
        })
    }
}

impl Corrector for SecEngine {
    fn correct(&self, input: &CorrectionInput) -> Result<CorrectionResult, SecError> {
        compute_correction(input)
    }

    fn score(&self, poib: Point2D, bull: Point2D) -> GroupScore {
        self.policy.score(poib, bull)
    }
}

fn default_true_moa() -> f64 {
    CorrectionInput::TRUE_MOA_INCHES_AT_100
}

/// Raw inputs as they arrive from the transport layer.
///
/// With `px_per_inch` set, every point is in pixel space and `y_axis` must be
/// given. Without it, points are already canonical inches and `y_axis` must
/// be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionRequest {
    pub bull: Point2D,
    #[serde(default)]
    pub holes: Vec<Point2D>,
    /// Takes precedence over `holes`
    #[serde(default)]
    pub poib: Option<Point2D>,
    pub distance_yards: f64,
    pub click_value_moa: f64,
    #[serde(default = "default_true_moa")]
    pub true_moa_inches_at_100: f64,
    #[serde(default)]
    pub px_per_inch: Option<f64>,
    #[serde(default)]
    pub y_axis: Option<YAxis>,
}

impl CorrectionRequest {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Convert to a canonical-frame [CorrectionInput].
    pub fn to_input(&self) -> Result<CorrectionInput, SecError> {
        let (bull, holes, poib) = match self.px_per_inch {
            Some(px_per_inch) => {
                let y_axis = self.y_axis.ok_or(SecError::MissingAxis)?;
                let frame = CoordinateFrame::new(self.bull, px_per_inch, y_axis)?;
                (
                    frame.to_inches(self.bull),
                    frame.points_to_inches(&self.holes),
                    self.poib.map(|p| frame.to_inches(p)),
                )
            }
            None if self.y_axis.is_some() => return Err(SecError::AxisWithoutScale),
            None => (self.bull, self.holes.clone(), self.poib),
        };

        let source = match poib {
            Some(poib) => PoibSource::Point(poib),
            None => PoibSource::Samples(SampleSet::from(holes)),
        };

        CorrectionInput::new(bull, source, self.distance_yards, self.click_value_moa)?
            .with_true_moa(self.true_moa_inches_at_100)
    }
}

/// Everything the caller displays or stores for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionReport {
    pub poib: Point2D,
    pub correction: CorrectionResult,
    pub score: GroupScore,
}
