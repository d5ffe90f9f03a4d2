use std::sync::Arc;

use tracing::info;

use crate::scan::domain::{Angle, AssessmentId, ScanAssessment};
use crate::store::{AssessmentRepository, ListingRepository, RepositoryError};

use super::domain::{ListingDraft, ListingFieldError, ListingId, MarketplaceListing};

/// Service handling listing browsing and creation, including the optional
/// copy of a scan assessment onto a new listing.
pub struct ListingService<L, A> {
    listings: Arc<L>,
    assessments: Arc<A>,
}

impl<L, A> ListingService<L, A>
where
    L: ListingRepository + 'static,
    A: AssessmentRepository + 'static,
{
    pub fn new(listings: Arc<L>, assessments: Arc<A>) -> Self {
        Self {
            listings,
            assessments,
        }
    }

    pub fn list(&self) -> Result<Vec<MarketplaceListing>, ListingServiceError> {
        Ok(self.listings.all()?)
    }

    pub fn get(&self, id: &ListingId) -> Result<MarketplaceListing, ListingServiceError> {
        let listing = self.listings.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(listing)
    }

    /// Create a listing from the submitted form. A resolving `scan_id` marks
    /// the listing AI-verified and copies the assessment verbatim; a missing
    /// or unresolvable scan simply leaves the listing unverified.
    pub fn create(&self, draft: ListingDraft) -> Result<MarketplaceListing, ListingServiceError> {
        let scan = match &draft.scan_id {
            Some(raw) => self.assessments.fetch(&AssessmentId(raw.clone()))?,
            None => None,
        };

        let fallback_image = scan
            .as_ref()
            .and_then(|assessment| assessment.images.get(Angle::Front))
            .map(str::to_string);

        draft
            .validate(fallback_image.is_some())
            .map_err(ListingServiceError::Validation)?;

        let image_url = if draft.image_url.trim().is_empty() {
            fallback_image.unwrap_or_default()
        } else {
            draft.image_url.clone()
        };

        let listing = MarketplaceListing {
            id: ListingId::generate(),
            title: draft.title,
            location: draft.location,
            seller_name: draft.seller_name,
            price_idr: draft.price_idr,
            image_url,
            ai_verified: scan.is_some(),
            assessment: scan.as_ref().map(ScanAssessment::snapshot),
        };

        let stored = self.listings.insert(listing)?;
        info!(id = %stored.id.0, verified = stored.ai_verified, "listing created");
        Ok(stored)
    }
}

/// Error raised by the listing service.
#[derive(Debug, thiserror::Error)]
pub enum ListingServiceError {
    #[error("listing form is invalid")]
    Validation(Vec<ListingFieldError>),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
