//! Scope error correction in rust
//!
//! Takes where shots landed relative to the bullseye and works out the scope
//! adjustment (windage and elevation, in MOA and clicks) that moves the group
//! onto the bull, plus a simple group score.
//!
//! All inputs are normalized to one canonical frame first: inches, +X right,
//! +Y up, origin at the bull. The correction is always `bull - POIB`.

pub mod error;
pub mod frame;
pub mod math;
pub mod sec;

pub use error::SecError;
pub use frame::{centroid, to_inches, CoordinateFrame, SampleSet, YAxis};
pub use math::Point2D;
pub use sec::{
    compute_correction, compute_group_score, CorrectionInput, CorrectionRequest,
    CorrectionResult, Corrector, GroupScore, ScoringPolicy, SecEngine, SessionReport,
};
