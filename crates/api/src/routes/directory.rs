//! Care Directory Routes

use axum::{
    extract::{Path, Query, State},
    Json,
};
use care_directory::{Category, Contact, Faq, GeoPoint, PlaceListing};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{ApiError, AppState};

/// Query parameters for the places endpoint
#[derive(Debug, Deserialize)]
pub struct PlaceQuery {
    /// Filter by category, e.g. `pharmacy`
    pub category: Option<String>,
}

/// Response for the places endpoint
#[derive(Debug, Serialize)]
pub struct PlacesResponse {
    pub data: Vec<PlaceListing>,
    pub count: usize,
    pub center: GeoPoint,
}

/// Generic list response
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// List care facilities
pub async fn get_places(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlaceQuery>,
) -> Result<Json<PlacesResponse>, ApiError> {
    let category = params
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()?;

    let data: Vec<PlaceListing> = state
        .directory
        .places(category)
        .into_iter()
        .map(PlaceListing::from)
        .collect();

    Ok(Json(PlacesResponse {
        count: data.len(),
        center: state.directory.center(),
        data,
    }))
}

/// Get one facility
pub async fn get_place(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PlaceListing>, ApiError> {
    Ok(Json(state.directory.place(&id)?.into()))
}

/// List frequently asked questions
pub async fn get_faqs(State(state): State<Arc<AppState>>) -> Json<ListResponse<Faq>> {
    Json(state.directory.faqs().to_vec().into())
}

/// List emergency and advice lines
pub async fn get_contacts(State(state): State<Arc<AppState>>) -> Json<ListResponse<Contact>> {
    Json(state.directory.contacts().to_vec().into())
}
