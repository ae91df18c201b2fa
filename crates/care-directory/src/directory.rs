//! Directory types and lookups

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;
use url::form_urlencoded;

use crate::{data, DirectoryError};

/// Facility category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Hospital,
    Clinic,
    UrgentCare,
    Pharmacy,
}

impl Category {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hospital => "hospital",
            Category::Clinic => "clinic",
            Category::UrgentCare => "urgent-care",
            Category::Pharmacy => "pharmacy",
        }
    }
}

impl FromStr for Category {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hospital" => Ok(Category::Hospital),
            "clinic" => Ok(Category::Clinic),
            "urgent-care" => Ok(Category::UrgentCare),
            "pharmacy" => Ok(Category::Pharmacy),
            other => Err(DirectoryError::UnknownCategory(other.to_string())),
        }
    }
}

/// Status badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Orange,
    Red,
}

/// Latitude / longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Care facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    /// Display label, e.g. "Emergency Room • 24/7"
    pub type_label: String,
    pub address: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub open_now: bool,
    pub status_label: String,
    pub status_color: StatusColor,
    /// Static estimate, not live
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_mins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closes_label: Option<String>,
}

impl Place {
    /// `tel:` link for the facility
    pub fn phone_uri(&self) -> String {
        phone_uri(&self.phone)
    }

    /// Map directions link for the facility
    pub fn directions_url(&self) -> String {
        directions_url(&self.address)
    }
}

/// Place plus the call and directions links shown on its map card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceListing {
    #[serde(flatten)]
    pub place: Place,
    pub phone_uri: String,
    pub directions_url: String,
}

impl From<&Place> for PlaceListing {
    fn from(place: &Place) -> Self {
        Self {
            phone_uri: place.phone_uri(),
            directions_url: place.directions_url(),
            place: place.clone(),
        }
    }
}

/// Frequently asked question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Emergency or advice phone line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub description: String,
    pub label: String,
    pub href: String,
}

/// `tel:` URI keeping only `+` and digits
pub fn phone_uri(phone: &str) -> String {
    let dialable: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", dialable)
}

/// Google Maps directions link to an address
pub fn directions_url(address: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("destination", address)
        .finish();
    format!("https://www.google.com/maps/dir/?{}", query)
}

/// In-memory directory of places, FAQs and contacts
#[derive(Debug, Clone)]
pub struct Directory {
    places: Vec<Place>,
    faqs: Vec<Faq>,
    contacts: Vec<Contact>,
    center: GeoPoint,
}

impl Directory {
    /// Directory for Quesnel, BC
    pub fn quesnel() -> Self {
        Self {
            places: data::places(),
            faqs: data::faqs(),
            contacts: data::contacts(),
            center: data::CENTER,
        }
    }

    /// All places, optionally filtered by category
    pub fn places(&self, category: Option<Category>) -> Vec<&Place> {
        let places: Vec<&Place> = self
            .places
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect();
        debug!("Directory lookup {:?}: {} places", category, places.len());
        places
    }

    /// Place by id
    pub fn place(&self, id: &str) -> Result<&Place, DirectoryError> {
        self.places
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))
    }

    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Default map centre
    pub fn center(&self) -> GeoPoint {
        self.center
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::quesnel()
    }
}
