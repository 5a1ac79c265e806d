//! Core types shared by the carousel and the detail view.
//!
//! `Item` is the immutable catalog record shown on a carousel card. The
//! built-in project catalog lives here too so hosts and tests can build a
//! carousel without shipping a catalog file.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};

/// A single catalog entry shown on a carousel card.
///
/// Catalog files written for the page script use `type`, `description` and
/// `logo` as keys; those are accepted as aliases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Project name, shown as the detail heading and the image alt text
    pub title: String,
    /// Optional category line. An empty string in a catalog file means unset.
    #[serde(
        default,
        alias = "type",
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    /// Paragraph shown in the detail view
    #[serde(alias = "description")]
    pub summary: String,
    /// Image path or URL for the card face
    #[serde(alias = "logo")]
    pub image_ref: String,
}

impl Item {
    pub fn new(title: impl Into<String>, summary: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: None,
            summary: summary.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Set the category. Blank strings leave it unset.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() { None } else { Some(category) };
        self
    }

    /// Get the category, if one is set
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Parse a catalog from a JSON array of items.
pub fn parse_catalog(json: &str) -> Result<Vec<Item>, serde_json::Error> {
    serde_json::from_str(json)
}

// ============================================================================
// Built-in Catalog
// ============================================================================

static DEFAULT_CATALOG: Lazy<Vec<Item>> = Lazy::new(|| {
    vec![
        Item::new(
            "VANTARA NIWAS - MACHAAN Launch",
            "Launched the MACHAAN restaurant inside Vantara Niwas, a seven-star hotel owned by Anant Ambani, hosting an exclusive dinner for Mr. Ambani and other special guests.",
            "images/project-images/vantaralogo.jpg",
        ),
        Item::new(
            "Little Food Co.",
            "Enhanced catering and delivery for this premier Mumbai brand, servicing clients like Spotify and Nykaa by elevating dishes, optimizing workflows, and implementing data tracking.",
            "images/project-images/littlefoodlogo.PNG",
        )
        .with_category("Culinary Consultancy"),
        Item::new(
            "META - WhatsApp Privacy Ad Film",
            "Provided comprehensive food styling and kitchen design consultation for the ad film, ensuring authentic culinary scene portrayal.",
            "images/project-images/whatsapplogo.png",
        ),
        Item::new(
            "Moonshine",
            "Developed the brand identity and 'Be Better' tagline, creating a social media strategy focused on sustainability for this unique mead brand.",
            "images/project-images/moonshine.png",
        )
        .with_category("Brand Positioning & Strategy"),
        Item::new(
            "VIRAASAT - Aaverina Hospitality",
            "Collaborated on a 300-seat restaurant in Mysore focusing on Northern Frontier Cuisine, blending traditional flavors with modern techniques.",
            "images/project-images/virasatlogo.png",
        )
        .with_category("Contemporary Indian Restaurant"),
        Item::new(
            "Basque by Breve",
            "Developed a concept café in Bandra inspired by St. Sebastian cheesecake, featuring unique varieties and a gourmet sandwich shop.",
            "images/project-images/basque.png",
        )
        .with_category("Concept Development"),
        Item::new(
            "Phat Fillings",
            "Led the creation of a premium delivery brand for pies with Indian and Australian flavors, featured in Vogue and Upper Crust.",
            "images/project-images/phat logo.png",
        )
        .with_category("Premium Pie Delivery"),
        Item::new(
            "ZEKI",
            "Developed an upscale bistro in Andheri West focused on global cuisine, designing the kitchen, curating crockery, and crafting an international menu.",
            "images/project-images/zekilogo.PNG",
        )
        .with_category("Upscale Casual Bistro"),
        Item::new(
            "Doppler",
            "Conceptualized a café for Boomerang Hospitality in a historic Jaipur haveli, redefining the experience as the city's premier slow bar destination.",
            "images/project-images/doppler.png",
        ),
        Item::new(
            "Sarabi",
            "An upscale 12,000 sqft space offering contemporary progressive Indian food, designed for a discerning clientele.",
            "images/project-images/saarbai.png",
        )
        .with_category("Modern Indian Restaurant"),
        Item::new(
            "Sunny Da Dhaba",
            "Evolved a 30+ year legacy brand into a dual-floor destination with a Mediterranean café and a modern-Indian restaurant with playful tapas.",
            "images/project-images/sunnyy.png",
        ),
    ]
});

/// The project catalog shown on the home page carousel.
pub fn default_catalog() -> Vec<Item> {
    DEFAULT_CATALOG.clone()
}
