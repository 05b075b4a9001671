//! Span definitions per pipeline stage: retrieval, verification, calibration.

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($query:expr, $top_k:expr) => {
        tracing::info_span!("factum.retrieval", query = %$query, top_k = $top_k)
    };
}

/// Create a verification span covering one `verify` call.
#[macro_export]
macro_rules! verification_span {
    ($threshold:expr) => {
        tracing::info_span!("factum.verification", threshold = $threshold)
    };
}

/// Create a calibration span.
#[macro_export]
macro_rules! calibration_span {
    ($examples:expr, $grid_points:expr) => {
        tracing::info_span!(
            "factum.calibration",
            examples = $examples,
            grid_points = $grid_points
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RETRIEVAL: &str = "factum.retrieval";
    pub const VERIFICATION: &str = "factum.verification";
    pub const CALIBRATION: &str = "factum.calibration";
}
