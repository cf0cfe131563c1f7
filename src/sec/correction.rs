//! Scope correction from a bull and a point of impact

use crate::error::SecError;
use crate::math::{round_display, Clicks, Inches, Moa, Point2D, Yards};

use super::common::{
    AxisCorrection, CorrectionInput, CorrectionResult, DeltaInches, Elevation, Windage,
};

/// Compute the windage/elevation needed to move the POIB onto the bull.
///
/// Pure and idempotent. Fails on an empty sample set or a non-positive
/// distance, click value or MOA size; nothing is computed in that case.
pub fn compute_correction(input: &CorrectionInput) -> Result<CorrectionResult, SecError> {
    let poib = input.resolve_poib()?;
    correction_for_poib(input, poib)
}

/// Same as [compute_correction] with the POIB already resolved.
pub(crate) fn correction_for_poib(
    input: &CorrectionInput,
    poib: Point2D,
) -> Result<CorrectionResult, SecError> {
    input.validate()?;

    let dx = input.bull.x - poib.x;
    let dy = input.bull.y - poib.y;
    log::debug!("poib {:?} -> delta ({dx}, {dy}) in", poib);

    let distance = Yards::new(input.distance_yards);
    let windage_moa = Moa::subtended(dx.abs(), distance, input.true_moa_inches_at_100);
    let elevation_moa = Moa::subtended(dy.abs(), distance, input.true_moa_inches_at_100);

    // Clicks come from the unrounded MOA
    let windage_clicks = Clicks::from_moa(windage_moa, input.click_value_moa);
    let elevation_clicks = Clicks::from_moa(elevation_moa, input.click_value_moa);

    Ok(CorrectionResult {
        delta_inches: DeltaInches {
            dx: Inches::new(round_display(dx)),
            dy: Inches::new(round_display(dy)),
        },
        windage: AxisCorrection {
            direction: Windage::from_delta(dx),
            moa: Moa::new(round_display(*windage_moa)),
            clicks: Clicks::new(round_display(*windage_clicks)),
        },
        elevation: AxisCorrection {
            direction: Elevation::from_delta(dy),
            moa: Moa::new(round_display(*elevation_moa)),
            clicks: Clicks::new(round_display(*elevation_clicks)),
        },
    })
}
