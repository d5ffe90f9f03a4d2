//! Marketplace listings: domain model, form validation, seed data, and the
//! list/detail/create service and router.

pub mod domain;
pub mod router;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ListingDraft, ListingFieldError, ListingId, MarketplaceListing};
pub use router::{marketplace_router, MarketplaceState};
pub use seed::seed_listings;
pub use service::{ListingService, ListingServiceError};
