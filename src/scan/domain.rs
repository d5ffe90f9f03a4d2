use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the fixed camera perspectives captured during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Angle {
    Front,
    Left,
    Back,
    Right,
    Teeth,
}

impl Angle {
    /// The five angles a complete capture must include, in wizard order.
    pub const ALL: [Angle; 5] = [
        Angle::Front,
        Angle::Left,
        Angle::Back,
        Angle::Right,
        Angle::Teeth,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Angle::Front => "Front",
            Angle::Left => "Left Side",
            Angle::Back => "Back",
            Angle::Right => "Right Side",
            Angle::Teeth => "Teeth",
        }
    }
}

/// Mapping from capture angle to image payload (URL or base64 data).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngleImages(pub BTreeMap<Angle, String>);

impl AngleImages {
    pub fn insert(&mut self, angle: Angle, image: impl Into<String>) {
        self.0.insert(angle, image.into());
    }

    pub fn get(&self, angle: Angle) -> Option<&str> {
        self.0.get(&angle).map(String::as_str)
    }

    /// Angles still missing before the capture is complete.
    pub fn missing(&self) -> Vec<Angle> {
        Angle::ALL
            .into_iter()
            .filter(|angle| !self.0.contains_key(angle))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Convenience constructor pointing every angle at the same image.
    pub fn uniform(image: &str) -> Self {
        let mut images = Self::default();
        for angle in Angle::ALL {
            images.insert(angle, image);
        }
        images
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cow,
    Goat,
    Sheep,
    Lamb,
}

impl Species {
    pub const ALL: [Species; 4] = [Species::Cow, Species::Goat, Species::Sheep, Species::Lamb];

    pub const fn label(self) -> &'static str {
        match self {
            Species::Cow => "cow",
            Species::Goat => "goat",
            Species::Sheep => "sheep",
            Species::Lamb => "lamb",
        }
    }
}

/// Age eligibility bracket in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "11")]
    Eleven,
    #[serde(rename = "13")]
    Thirteen,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 3] = [AgeBracket::Nine, AgeBracket::Eleven, AgeBracket::Thirteen];

    pub const fn label(self) -> &'static str {
        match self {
            AgeBracket::Nine => "9",
            AgeBracket::Eleven => "11",
            AgeBracket::Thirteen => "13",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthRisk {
    Low,
    Medium,
    High,
}

impl HealthRisk {
    pub const ALL: [HealthRisk; 3] = [HealthRisk::Low, HealthRisk::Medium, HealthRisk::High];

    pub const fn label(self) -> &'static str {
        match self {
            HealthRisk::Low => "Low",
            HealthRisk::Medium => "Medium",
            HealthRisk::High => "High",
        }
    }
}

/// Fair price estimate in Indonesian Rupiah, `min_idr <= max_idr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min_idr: u64,
    pub max_idr: u64,
}

/// The synthetic AI prediction attached to a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub species: Species,
    pub age_bracket: AgeBracket,
    pub weight_kg: u32,
    pub gender: Gender,
    pub health_risk: HealthRisk,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_risk_explanation: Option<String>,
    pub fair_price_idr: PriceRange,
}

/// One confidence score per predicted field, each in [0.70, 0.99].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub species: f64,
    pub age_bracket: f64,
    pub weight: f64,
    pub gender: f64,
    pub health_risk: f64,
    pub fair_price: f64,
}

impl Confidence {
    /// All six scores, for bound checks and rendering.
    pub fn scores(&self) -> [f64; 6] {
        [
            self.species,
            self.age_bracket,
            self.weight,
            self.gender,
            self.health_risk,
            self.fair_price,
        ]
    }
}

/// Identifier wrapper for scan assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

impl AssessmentId {
    pub fn generate() -> Self {
        Self(format!("scan_{}", Uuid::new_v4().simple()))
    }
}

/// A fully captured and analyzed scan. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanAssessment {
    pub id: AssessmentId,
    pub created_at: DateTime<Utc>,
    pub images: AngleImages,
    pub prediction: Prediction,
    pub confidence: Confidence,
}

impl ScanAssessment {
    /// The slice of an assessment that a verified listing carries.
    pub fn snapshot(&self) -> AssessmentSnapshot {
        AssessmentSnapshot {
            created_at: self.created_at,
            prediction: self.prediction.clone(),
            confidence: self.confidence,
        }
    }
}

/// Verbatim copy of an assessment's outcome, embedded in verified listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    pub created_at: DateTime<Utc>,
    pub prediction: Prediction,
    pub confidence: Confidence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_angles_reported_in_wizard_order() {
        let mut images = AngleImages::default();
        images.insert(Angle::Left, "left.jpg");
        images.insert(Angle::Teeth, "teeth.jpg");

        assert!(!images.is_complete());
        assert_eq!(images.missing(), vec![Angle::Front, Angle::Back, Angle::Right]);
    }

    #[test]
    fn uniform_capture_is_complete() {
        let images = AngleImages::uniform("https://example.com/cow.jpg");
        assert!(images.is_complete());
        assert_eq!(images.get(Angle::Teeth), Some("https://example.com/cow.jpg"));
    }

    #[test]
    fn angle_serializes_lowercase() {
        let json = serde_json::to_string(&Angle::Teeth).expect("serializes");
        assert_eq!(json, "\"teeth\"");
    }

    #[test]
    fn age_bracket_serializes_as_month_label() {
        let json = serde_json::to_string(&AgeBracket::Eleven).expect("serializes");
        assert_eq!(json, "\"11\"");
        let parsed: AgeBracket = serde_json::from_str("\"9\"").expect("parses");
        assert_eq!(parsed, AgeBracket::Nine);
    }

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let a = AssessmentId::generate();
        let b = AssessmentId::generate();
        assert!(a.0.starts_with("scan_"));
        assert_ne!(a, b);
    }
}
