use chrono::Utc;
use rand::Rng;

use crate::config::AssessmentMode;

use super::domain::{
    AgeBracket, AngleImages, AssessmentId, Confidence, Gender, HealthRisk, Prediction, PriceRange,
    ScanAssessment, Species,
};

/// Bounds for every confidence score, inclusive.
pub const CONFIDENCE_MIN: f64 = 0.70;
pub const CONFIDENCE_MAX: f64 = 0.99;

const FIXED_WEIGHT_KG: u32 = 380;
const FIXED_PRICE: PriceRange = PriceRange {
    min_idr: 8_000_000,
    max_idr: 9_500_000,
};
const FIXED_HEALTH_NOTE: &str =
    "Slight variance detected in posture and gait; a veterinary check before sale is advised.";

/// Policy selected once at construction; there is no per-call branching
/// between the two observed behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentPolicy {
    /// Prediction fields randomized within per-species ranges.
    Randomized,
    /// Prediction fields pinned to the demo constants.
    FixedDemo,
}

impl From<AssessmentMode> for AssessmentPolicy {
    fn from(mode: AssessmentMode) -> Self {
        match mode {
            AssessmentMode::Fixed => Self::FixedDemo,
            AssessmentMode::Randomized => Self::Randomized,
        }
    }
}

/// Fabricates a [`ScanAssessment`] from a complete set of angle images.
///
/// Total over any well-formed capture: the generator itself never fails,
/// completeness is the caller's concern.
#[derive(Debug, Clone, Copy)]
pub struct AssessmentGenerator {
    policy: AssessmentPolicy,
}

impl AssessmentGenerator {
    pub fn new(policy: AssessmentPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> AssessmentPolicy {
        self.policy
    }

    pub fn generate(&self, images: AngleImages) -> ScanAssessment {
        let mut rng = rand::thread_rng();
        let prediction = match self.policy {
            AssessmentPolicy::Randomized => randomized_prediction(&mut rng),
            AssessmentPolicy::FixedDemo => fixed_prediction(),
        };

        // Confidence is randomized per call under both policies.
        let confidence = Confidence {
            species: confidence_score(&mut rng),
            age_bracket: confidence_score(&mut rng),
            weight: confidence_score(&mut rng),
            gender: confidence_score(&mut rng),
            health_risk: confidence_score(&mut rng),
            fair_price: confidence_score(&mut rng),
        };

        ScanAssessment {
            id: AssessmentId::generate(),
            created_at: Utc::now(),
            images,
            prediction,
            confidence,
        }
    }
}

fn confidence_score(rng: &mut impl Rng) -> f64 {
    let raw = rng.gen_range(CONFIDENCE_MIN..=CONFIDENCE_MAX);
    (raw * 100.0).round() / 100.0
}

fn randomized_prediction(rng: &mut impl Rng) -> Prediction {
    let species = Species::ALL[rng.gen_range(0..Species::ALL.len())];

    let weight_kg = match species {
        Species::Cow => rng.gen_range(200..=500),
        _ => rng.gen_range(25..=70),
    };

    let fair_price_idr = match species {
        Species::Cow => {
            let min_idr = rng.gen_range(8_000_000..=20_000_000);
            let max_idr = min_idr + rng.gen_range(2_000_000..=10_000_000);
            PriceRange { min_idr, max_idr }
        }
        _ => {
            let min_idr = rng.gen_range(1_200_000..=5_000_000);
            let max_idr = min_idr + rng.gen_range(300_000..=1_000_000);
            PriceRange { min_idr, max_idr }
        }
    };

    Prediction {
        species,
        age_bracket: AgeBracket::ALL[rng.gen_range(0..AgeBracket::ALL.len())],
        weight_kg,
        gender: Gender::ALL[rng.gen_range(0..Gender::ALL.len())],
        health_risk: HealthRisk::ALL[rng.gen_range(0..HealthRisk::ALL.len())],
        health_risk_explanation: None,
        fair_price_idr,
    }
}

fn fixed_prediction() -> Prediction {
    Prediction {
        species: Species::Cow,
        age_bracket: AgeBracket::Eleven,
        weight_kg: FIXED_WEIGHT_KG,
        gender: Gender::Female,
        health_risk: HealthRisk::Medium,
        health_risk_explanation: Some(FIXED_HEALTH_NOTE.to_string()),
        fair_price_idr: FIXED_PRICE,
    }
}
