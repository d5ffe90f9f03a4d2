//! In-memory session store: two append-only collections with lookup by
//! identifier. Traits keep the services testable against fakes, mirroring
//! how a database-backed implementation would slot in later.

use std::sync::{Arc, Mutex};

use crate::marketplace::domain::{ListingId, MarketplaceListing};
use crate::scan::domain::{AssessmentId, ScanAssessment};

/// Error enumeration for repository failures. Lookup misses are `Ok(None)`,
/// never an error.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage seam for scan assessments.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, assessment: ScanAssessment) -> Result<ScanAssessment, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<ScanAssessment>, RepositoryError>;
    /// The most recently appended assessment, if any.
    fn latest(&self) -> Result<Option<ScanAssessment>, RepositoryError>;
}

/// Storage seam for marketplace listings.
pub trait ListingRepository: Send + Sync {
    fn insert(&self, listing: MarketplaceListing) -> Result<MarketplaceListing, RepositoryError>;
    fn fetch(&self, id: &ListingId) -> Result<Option<MarketplaceListing>, RepositoryError>;
    /// All listings in insertion order.
    fn all(&self) -> Result<Vec<MarketplaceListing>, RepositoryError>;
}

/// Non-persistent store backing both collections. Append-only, no eviction,
/// linear-scan lookup.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    assessments: Arc<Mutex<Vec<ScanAssessment>>>,
    listings: Arc<Mutex<Vec<MarketplaceListing>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload marketplace listings (used for seed data at startup).
    pub fn with_listings(listings: Vec<MarketplaceListing>) -> Self {
        Self {
            assessments: Arc::new(Mutex::new(Vec::new())),
            listings: Arc::new(Mutex::new(listings)),
        }
    }
}

impl AssessmentRepository for InMemoryStore {
    fn insert(&self, assessment: ScanAssessment) -> Result<ScanAssessment, RepositoryError> {
        let mut guard = self.assessments.lock().expect("assessment mutex poisoned");
        if guard.iter().any(|existing| existing.id == assessment.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(assessment.clone());
        Ok(assessment)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<ScanAssessment>, RepositoryError> {
        let guard = self.assessments.lock().expect("assessment mutex poisoned");
        Ok(guard.iter().find(|a| &a.id == id).cloned())
    }

    fn latest(&self) -> Result<Option<ScanAssessment>, RepositoryError> {
        let guard = self.assessments.lock().expect("assessment mutex poisoned");
        Ok(guard.last().cloned())
    }
}

impl ListingRepository for InMemoryStore {
    fn insert(&self, listing: MarketplaceListing) -> Result<MarketplaceListing, RepositoryError> {
        let mut guard = self.listings.lock().expect("listing mutex poisoned");
        if guard.iter().any(|existing| existing.id == listing.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(listing.clone());
        Ok(listing)
    }

    fn fetch(&self, id: &ListingId) -> Result<Option<MarketplaceListing>, RepositoryError> {
        let guard = self.listings.lock().expect("listing mutex poisoned");
        Ok(guard.iter().find(|l| &l.id == id).cloned())
    }

    fn all(&self) -> Result<Vec<MarketplaceListing>, RepositoryError> {
        let guard = self.listings.lock().expect("listing mutex poisoned");
        Ok(guard.clone())
    }
}
