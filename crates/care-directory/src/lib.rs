//! Care Directory
//!
//! Read-only demo data consumed by the map, FAQ and contacts views. Wait
//! times and open/closed status are static, not live.

mod data;
mod directory;

pub use directory::{
    directions_url, phone_uri, Category, Contact, Directory, Faq, GeoPoint, Place, PlaceListing,
    StatusColor,
};

use thiserror::Error;

/// Directory lookup errors
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Unknown facility category: {0}")]
    UnknownCategory(String),

    #[error("No facility with id {0}")]
    NotFound(String),
}
