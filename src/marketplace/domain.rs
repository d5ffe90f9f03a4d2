use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scan::domain::AssessmentSnapshot;

/// Identifier wrapper for marketplace listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

impl ListingId {
    pub fn generate() -> Self {
        Self(format!("listing_{}", Uuid::new_v4().simple()))
    }
}

/// A marketplace entry for a livestock animal. Append-only; the assessment
/// is present exactly when `ai_verified` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceListing {
    pub id: ListingId,
    pub title: String,
    pub location: String,
    pub seller_name: String,
    pub price_idr: u64,
    pub image_url: String,
    pub ai_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<AssessmentSnapshot>,
}

/// User-submitted form data for a new listing. `scan_id` opts into AI
/// verification by copying an existing assessment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub seller_name: String,
    #[serde(default)]
    pub price_idr: u64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub scan_id: Option<String>,
}

/// Inline form-validation failures, one per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListingFieldError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Location is required")]
    MissingLocation,
    #[error("Seller name is required")]
    MissingSellerName,
    #[error("Valid price is required")]
    InvalidPrice,
    #[error("Image is required")]
    MissingImage,
}

impl ListingFieldError {
    pub const fn field(self) -> &'static str {
        match self {
            ListingFieldError::MissingTitle => "title",
            ListingFieldError::MissingLocation => "location",
            ListingFieldError::MissingSellerName => "seller_name",
            ListingFieldError::InvalidPrice => "price_idr",
            ListingFieldError::MissingImage => "image_url",
        }
    }
}

impl ListingDraft {
    /// Collect every field failure at once so the form can render them all.
    /// `image_url` may be empty when a resolved scan supplies the image.
    pub fn validate(&self, has_fallback_image: bool) -> Result<(), Vec<ListingFieldError>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(ListingFieldError::MissingTitle);
        }
        if self.location.trim().is_empty() {
            errors.push(ListingFieldError::MissingLocation);
        }
        if self.seller_name.trim().is_empty() {
            errors.push(ListingFieldError::MissingSellerName);
        }
        if self.price_idr == 0 {
            errors.push(ListingFieldError::InvalidPrice);
        }
        if self.image_url.trim().is_empty() && !has_fallback_image {
            errors.push(ListingFieldError::MissingImage);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ListingDraft {
        ListingDraft {
            title: "Bali Cow • Healthy • Ready".to_string(),
            location: "Jakarta Selatan, DKI Jakarta".to_string(),
            seller_name: "Ahmad Hidayat".to_string(),
            price_idr: 15_000_000,
            image_url: "https://example.com/images/cow1.jpg".to_string(),
            scan_id: None,
        }
    }

    #[test]
    fn complete_draft_validates() {
        assert!(complete_draft().validate(false).is_ok());
    }

    #[test]
    fn blank_fields_are_all_reported() {
        let draft = ListingDraft {
            title: "   ".to_string(),
            ..ListingDraft::default()
        };
        let errors = draft.validate(false).expect_err("invalid draft");
        assert_eq!(
            errors,
            vec![
                ListingFieldError::MissingTitle,
                ListingFieldError::MissingLocation,
                ListingFieldError::MissingSellerName,
                ListingFieldError::InvalidPrice,
                ListingFieldError::MissingImage,
            ]
        );
    }

    #[test]
    fn scan_image_satisfies_the_image_requirement() {
        let draft = ListingDraft {
            image_url: String::new(),
            ..complete_draft()
        };
        assert!(draft.validate(true).is_ok());
        let errors = draft.validate(false).expect_err("no image available");
        assert_eq!(errors, vec![ListingFieldError::MissingImage]);
    }

    #[test]
    fn zero_price_is_invalid() {
        let draft = ListingDraft {
            price_idr: 0,
            ..complete_draft()
        };
        let errors = draft.validate(false).expect_err("invalid price");
        assert_eq!(errors, vec![ListingFieldError::InvalidPrice]);
    }
}
