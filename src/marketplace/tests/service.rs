use std::sync::Arc;

use crate::marketplace::domain::{ListingDraft, ListingFieldError, ListingId};
use crate::marketplace::seed::seed_listings;
use crate::marketplace::service::{ListingService, ListingServiceError};
use crate::scan::domain::{Angle, AngleImages};
use crate::scan::generator::{AssessmentGenerator, AssessmentPolicy};
use crate::store::{AssessmentRepository, InMemoryStore, RepositoryError};

fn store_with_seed() -> Arc<InMemoryStore> {
    let generator = AssessmentGenerator::new(AssessmentPolicy::Randomized);
    Arc::new(InMemoryStore::with_listings(seed_listings(&generator)))
}

fn service(store: Arc<InMemoryStore>) -> ListingService<InMemoryStore, InMemoryStore> {
    ListingService::new(store.clone(), store)
}

fn draft() -> ListingDraft {
    ListingDraft {
        title: "Young Bull • Grass Fed".to_string(),
        location: "Yogyakarta, DIY".to_string(),
        seller_name: "Rina Wati".to_string(),
        price_idr: 12_000_000,
        image_url: "https://example.com/images/bull.jpg".to_string(),
        scan_id: None,
    }
}

#[test]
fn listing_from_scan_copies_the_snapshot_verbatim() {
    let store = store_with_seed();
    let generator = AssessmentGenerator::new(AssessmentPolicy::Randomized);
    let scan = AssessmentRepository::insert(
        store.as_ref(),
        generator.generate(AngleImages::uniform("https://example.com/images/bull.jpg")),
    )
    .expect("scan stored");

    let service = service(store);
    let listing = service
        .create(ListingDraft {
            scan_id: Some(scan.id.0.clone()),
            ..draft()
        })
        .expect("listing created");

    assert!(listing.ai_verified);
    let snapshot = listing.assessment.expect("snapshot attached");
    assert_eq!(snapshot.created_at, scan.created_at);
    assert_eq!(snapshot.prediction, scan.prediction);
    assert_eq!(snapshot.confidence, scan.confidence);
}

#[test]
fn listing_without_scan_is_unverified() {
    let service = service(store_with_seed());
    let listing = service.create(draft()).expect("listing created");
    assert!(!listing.ai_verified);
    assert!(listing.assessment.is_none());
}

#[test]
fn unresolvable_scan_id_falls_back_to_unverified() {
    let service = service(store_with_seed());
    let listing = service
        .create(ListingDraft {
            scan_id: Some("scan_never_inserted".to_string()),
            ..draft()
        })
        .expect("listing created despite the miss");
    assert!(!listing.ai_verified);
    assert!(listing.assessment.is_none());
}

#[test]
fn scan_front_image_fills_a_missing_listing_image() {
    let store = store_with_seed();
    let generator = AssessmentGenerator::new(AssessmentPolicy::FixedDemo);
    let mut images = AngleImages::default();
    for angle in Angle::ALL {
        images.insert(angle, format!("https://example.com/{}.jpg", angle.label()));
    }
    let scan = AssessmentRepository::insert(store.as_ref(), generator.generate(images))
        .expect("scan stored");

    let service = service(store);
    let listing = service
        .create(ListingDraft {
            image_url: String::new(),
            scan_id: Some(scan.id.0.clone()),
            ..draft()
        })
        .expect("listing created");

    assert_eq!(listing.image_url, "https://example.com/Front.jpg");
}

#[test]
fn invalid_draft_reports_every_field() {
    let service = service(store_with_seed());
    let err = service
        .create(ListingDraft::default())
        .expect_err("empty form rejected");
    match err {
        ListingServiceError::Validation(errors) => {
            assert_eq!(errors.len(), 5);
            assert!(errors.contains(&ListingFieldError::MissingTitle));
            assert!(errors.contains(&ListingFieldError::InvalidPrice));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn seeded_store_lists_three_and_resolves_by_id() {
    let service = service(store_with_seed());
    let listings = service.list().expect("listings resolve");
    assert_eq!(listings.len(), 3);

    let second = service
        .get(&ListingId("listing_2".to_string()))
        .expect("seed listing resolves");
    assert_eq!(second.seller_name, "Siti Nurhaliza");

    let err = service
        .get(&ListingId("listing_999".to_string()))
        .expect_err("unknown listing misses");
    assert!(matches!(
        err,
        ListingServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn created_listings_append_to_the_marketplace() {
    let service = service(store_with_seed());
    let created = service.create(draft()).expect("listing created");
    let listings = service.list().expect("listings resolve");
    assert_eq!(listings.len(), 4);
    assert_eq!(listings.last().map(|l| l.id.clone()), Some(created.id));
}
