//! Scan capture wizard backend: the angle-image domain model, the mock
//! assessment generator, and the analyze/results service and router.

pub mod domain;
pub mod generator;
pub mod router;
pub mod service;


pub use domain::{
    AgeBracket, Angle, AngleImages, AssessmentId, AssessmentSnapshot, Confidence, Gender,
    HealthRisk, Prediction, PriceRange, ScanAssessment, Species,
};
pub use generator::{AssessmentGenerator, AssessmentPolicy, CONFIDENCE_MAX, CONFIDENCE_MIN};
pub use router::scan_router;
pub use service::{ScanService, ScanServiceError};
