use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::store::{AssessmentRepository, RepositoryError};

use super::domain::{Angle, AngleImages, AssessmentId, ScanAssessment};
use super::generator::AssessmentGenerator;

/// Service running the scan wizard's capture-then-analyze flow.
pub struct ScanService<R> {
    generator: AssessmentGenerator,
    repository: Arc<R>,
    analysis_delay: Duration,
}

impl<R> ScanService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(generator: AssessmentGenerator, repository: Arc<R>, analysis_delay: Duration) -> Self {
        Self {
            generator,
            repository,
            analysis_delay,
        }
    }

    /// Artificial latency simulating model inference; applied by the router.
    pub fn analysis_delay(&self) -> Duration {
        self.analysis_delay
    }

    /// Validate the capture, fabricate an assessment, and persist it.
    pub fn analyze(&self, images: AngleImages) -> Result<ScanAssessment, ScanServiceError> {
        let missing = images.missing();
        if !missing.is_empty() {
            return Err(ScanServiceError::IncompleteCapture { missing });
        }

        let assessment = self.generator.generate(images);
        let stored = self.repository.insert(assessment)?;
        info!(id = %stored.id.0, species = stored.prediction.species.label(), "scan analyzed");
        Ok(stored)
    }

    pub fn get(&self, id: &AssessmentId) -> Result<ScanAssessment, ScanServiceError> {
        let assessment = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(assessment)
    }

    pub fn latest(&self) -> Result<ScanAssessment, ScanServiceError> {
        let assessment = self.repository.latest()?.ok_or(RepositoryError::NotFound)?;
        Ok(assessment)
    }

    /// The assessment for `id`, falling back to the most recent one when the
    /// identifier no longer resolves (the results page behavior).
    pub fn get_or_latest(&self, id: &AssessmentId) -> Result<ScanAssessment, ScanServiceError> {
        match self.repository.fetch(id)? {
            Some(assessment) => Ok(assessment),
            None => self.latest(),
        }
    }
}

/// Error raised by the scan service.
#[derive(Debug, thiserror::Error)]
pub enum ScanServiceError {
    #[error("capture incomplete: missing {missing:?}")]
    IncompleteCapture { missing: Vec<Angle> },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
