//! Group quality score
//!
//! The linear falloff is a pilot policy, so its coefficients live in
//! [ScoringPolicy] and can be loaded from config. The tip thresholds are fixed.

use serde::{Deserialize, Serialize};

use crate::math::{round_display, Inches, Point2D};

use super::common::GroupScore;

/// Scores at or above this get [TIP_TIGHT]
pub const TIGHT_GROUP_SCORE: u8 = 90;
/// Scores at or above this (and below [TIGHT_GROUP_SCORE]) get [TIP_GOOD]
pub const GOOD_GROUP_SCORE: u8 = 75;

pub const TIP_TIGHT: &str = "tight group, confirm with another group";
pub const TIP_GOOD: &str = "good, focus on grip/trigger";
pub const TIP_FUNDAMENTALS: &str = "fundamentals: sight picture + press, run another group";

/// Coefficients of `score = base - offset * points_per_inch`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringPolicy {
    pub base: f64,
    pub points_per_inch: f64,
}
impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            base: 100.0,
            points_per_inch: 10.0,
        }
    }
}
impl ScoringPolicy {
    /// Parse a policy from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn score(&self, poib: Point2D, bull: Point2D) -> GroupScore {
        let offset = poib.distance(bull);
        let raw = self.base - offset * self.points_per_inch;
        let score = raw.clamp(0.0, 100.0).round() as u8;
        log::debug!("offset {offset} in, raw score {raw} -> {score}");

        GroupScore {
            offset_inches: Inches::new(round_display(offset)),
            score,
            tip: tip_for(score),
        }
    }
}

/// Score the group with the default policy.
pub fn compute_group_score(poib: Point2D, bull: Point2D) -> GroupScore {
    ScoringPolicy::default().score(poib, bull)
}

pub fn tip_for(score: u8) -> &'static str {
    if score >= TIGHT_GROUP_SCORE {
        TIP_TIGHT
    } else if score >= GOOD_GROUP_SCORE {
        TIP_GOOD
    } else {
        TIP_FUNDAMENTALS
    }
}
