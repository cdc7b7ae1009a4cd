//! Shared data types for the lab exercises.

pub mod bbox;
pub mod complex;
pub mod error;

pub use bbox::BoundingBox;
pub use complex::Complex;
pub use error::{LabError, LabResult};

/// Tolerance used when comparing complex moduli.
pub const MODULUS_EPSILON: f64 = 1e-9;

/// Default IoU threshold above which NMS suppresses a box.
pub const DEFAULT_IOU_THRESHOLD: f32 = 0.5;
