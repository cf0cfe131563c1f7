use thiserror::Error;

/// Input-domain violations raised by the correction pipeline.
///
/// None of these are retryable: the same input always fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SecError {
    #[error("Distance must be positive, got {0} yd")]
    InvalidDistance(f64),
    #[error("Click value must be positive, got {0} MOA")]
    InvalidClickValue(f64),
    #[error("Pixel scale must be positive, got {0} px/in")]
    InvalidScale(f64),
    #[error("True MOA size must be positive, got {0} in")]
    InvalidTrueMoa(f64),
    #[error("No impact points to average")]
    EmptySample,
    #[error("Pixel input requires an explicit y-axis orientation")]
    MissingAxis,
    #[error("A y-axis orientation was given without a pixel scale")]
    AxisWithoutScale,
}
