//! Scope Error Correction
//!
//! Turns a bullseye and a group of impacts into windage/elevation dial
//! instructions and a group score.

pub mod common;
pub mod correction;
pub mod engine;
pub mod score;

pub use common::{
    AxisCorrection, CorrectionInput, CorrectionResult, Corrector, DeltaInches, Elevation,
    GroupScore, PoibSource, Windage,
};
pub use correction::compute_correction;
pub use engine::{CorrectionRequest, SecEngine, SessionReport};
pub use score::{compute_group_score, ScoringPolicy};
