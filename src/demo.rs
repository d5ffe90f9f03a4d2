use std::sync::Arc;
use std::time::Duration;

use clap::Args;

use crate::assistant::AssistantService;
use crate::auth::{AuthService, InMemorySessionStorage, DEMO_PASSWORD, DEMO_USERNAME};
use crate::error::AppError;
use crate::format::{format_confidence, format_idr, format_idr_range, format_timestamp};
use crate::marketplace::{seed_listings, ListingDraft, ListingService, MarketplaceListing};
use crate::scan::{AngleImages, AssessmentGenerator, AssessmentPolicy, ScanAssessment, ScanService};
use crate::store::InMemoryStore;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Randomize predictions instead of using the fixed demo values
    #[arg(long)]
    randomized: bool,
    /// Skip the Stoqy chat exchange at the end of the walkthrough
    #[arg(long)]
    skip_chat: bool,
}

/// End-to-end terminal walkthrough: sign in, scan an animal, publish a
/// verified listing, and browse the marketplace.
pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let policy = if args.randomized {
        AssessmentPolicy::Randomized
    } else {
        AssessmentPolicy::FixedDemo
    };
    let generator = AssessmentGenerator::new(policy);
    let store = Arc::new(InMemoryStore::with_listings(seed_listings(&generator)));

    let auth = AuthService::new(Arc::new(InMemorySessionStorage::default()));
    let scans = ScanService::new(generator, store.clone(), Duration::ZERO);
    let listings = ListingService::new(store.clone(), store);

    println!("Livestoq walkthrough ({policy:?} predictions)\n");

    let session = auth.login(DEMO_USERNAME, DEMO_PASSWORD)?;
    println!("Signed in as {}", session.username);

    let assessment = scans.analyze(AngleImages::uniform("https://example.com/images/demo-cow.jpg"))?;
    println!("\nScan results ({})", assessment.id.0);
    render_assessment(&assessment);

    let listing = listings.create(ListingDraft {
        title: "Demo Cow • AI Verified".to_string(),
        location: "Depok, Jawa Barat".to_string(),
        seller_name: session.username.clone(),
        price_idr: 14_500_000,
        image_url: String::new(),
        scan_id: Some(assessment.id.0.clone()),
    })?;
    println!("\nPublished listing {} ({})", listing.id.0, listing.title);

    println!("\nMarketplace");
    for entry in listings.list()? {
        render_listing(&entry);
    }

    if !args.skip_chat {
        let assistant = AssistantService::new(Duration::ZERO);
        let question = assistant.suggested_questions()[0];
        println!("\nYou ask Stoqy: {question}");
        match assistant.send(question).await {
            Ok(reply) => println!("Stoqy: {}", reply.text),
            Err(err) => println!("Stoqy is unavailable: {err}"),
        }
    }

    auth.logout()?;
    println!("\nSigned out.");
    Ok(())
}

fn render_assessment(assessment: &ScanAssessment) {
    let prediction = &assessment.prediction;
    let confidence = &assessment.confidence;
    println!("- Captured {}", format_timestamp(&assessment.created_at));
    println!(
        "- Species: {} ({})",
        prediction.species.label(),
        format_confidence(confidence.species)
    );
    println!(
        "- Weight: {} kg ({})",
        prediction.weight_kg,
        format_confidence(confidence.weight)
    );
    println!(
        "- Age bracket: {} months ({})",
        prediction.age_bracket.label(),
        format_confidence(confidence.age_bracket)
    );
    println!(
        "- Gender: {} ({})",
        prediction.gender.label(),
        format_confidence(confidence.gender)
    );
    println!(
        "- Health risk: {} ({})",
        prediction.health_risk.label(),
        format_confidence(confidence.health_risk)
    );
    if let Some(note) = &prediction.health_risk_explanation {
        println!("  {note}");
    }
    println!(
        "- Fair price: {} ({})",
        format_idr_range(&prediction.fair_price_idr),
        format_confidence(confidence.fair_price)
    );
}

fn render_listing(listing: &MarketplaceListing) {
    let badge = if listing.ai_verified {
        " [AI Verified]"
    } else {
        ""
    };
    println!(
        "- {}{} | {} | {} | {}",
        listing.title,
        badge,
        listing.location,
        listing.seller_name,
        format_idr(listing.price_idr)
    );
}
