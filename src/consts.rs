//! Shared numeric constants.

/// Smallest average touch spread (logical units) treated as a usable pinch.
/// Below this a pinch factor would divide by (nearly) zero.
pub const MIN_PINCH_SPREAD: f64 = 1e-6;

/// A matrix is singular when `|det|` is at most this fraction of
/// `(|a| + |b|) · (|c| + |d|)`.
pub const SINGULAR_RELATIVE_EPSILON: f64 = 1e-12;

/// Zoom factors this close to 1 are skipped.
pub const MIN_ZOOM_CHANGE: f64 = 1e-12;
