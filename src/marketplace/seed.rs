use crate::scan::domain::AngleImages;
use crate::scan::generator::AssessmentGenerator;

use super::domain::{ListingId, MarketplaceListing};

/// Seed listings for the marketplace: two AI-verified entries backed by
/// generated assessments and one plain entry.
pub fn seed_listings(generator: &AssessmentGenerator) -> Vec<MarketplaceListing> {
    let assessment_1 = generator.generate(AngleImages::uniform(
        "https://example.com/images/cow1.jpg",
    ));
    let assessment_2 = generator.generate(AngleImages::uniform(
        "https://example.com/images/cow2.jpg",
    ));

    vec![
        MarketplaceListing {
            id: ListingId("listing_1".to_string()),
            title: "Bali Cow • Healthy • Ready".to_string(),
            location: "Jakarta Selatan, DKI Jakarta".to_string(),
            seller_name: "Ahmad Hidayat".to_string(),
            price_idr: 15_000_000,
            image_url: "https://example.com/images/cow1.jpg".to_string(),
            ai_verified: true,
            assessment: Some(assessment_1.snapshot()),
        },
        MarketplaceListing {
            id: ListingId("listing_2".to_string()),
            title: "Premium Goat • Verified Quality".to_string(),
            location: "Bandung, Jawa Barat".to_string(),
            seller_name: "Siti Nurhaliza".to_string(),
            price_idr: 3_500_000,
            image_url: "https://example.com/images/goat1.jpg".to_string(),
            ai_verified: true,
            assessment: Some(assessment_2.snapshot()),
        },
        MarketplaceListing {
            id: ListingId("listing_3".to_string()),
            title: "Local Sheep • Good Condition".to_string(),
            location: "Surabaya, Jawa Timur".to_string(),
            seller_name: "Budi Santoso".to_string(),
            price_idr: 2_800_000,
            image_url: "https://example.com/images/sheep1.jpg".to_string(),
            ai_verified: false,
            assessment: None,
        },
    ]
}
