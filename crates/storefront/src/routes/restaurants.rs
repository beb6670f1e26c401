//! Restaurant listing and menu handlers.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Serialize;
use tracing::instrument;

use quickbite_core::RestaurantId;
use quickbite_core::catalog::{MenuCategory, Restaurant, RestaurantQuery};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// A restaurant as listed, with its display labels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantListing {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    /// `$` to `$$$$`
    pub price_range_label: String,
    /// e.g. `30-40 min`
    pub delivery_time_label: String,
}

impl From<&Restaurant> for RestaurantListing {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            price_range_label: restaurant.price_range_label(),
            delivery_time_label: restaurant.delivery_time.label(),
            restaurant: restaurant.clone(),
        }
    }
}

/// A restaurant with its menu.
#[derive(Debug, Clone, Serialize)]
pub struct MenuResponse {
    pub restaurant: RestaurantListing,
    pub categories: Vec<MenuCategory>,
}

/// List restaurants, filtered and sorted by the query string.
#[instrument(skip(state, query))]
pub async fn index(
    State(state): State<AppState>,
    query: std::result::Result<Query<RestaurantQuery>, QueryRejection>,
) -> Result<Json<Vec<RestaurantListing>>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let found: Vec<RestaurantListing> = state
        .catalog()
        .search(&query)
        .into_iter()
        .map(RestaurantListing::from)
        .collect();
    tracing::debug!(?query, results = found.len(), "Restaurant search");
    Ok(Json(found))
}

/// Show one restaurant.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<RestaurantId>,
) -> Result<Json<RestaurantListing>> {
    state
        .catalog()
        .restaurant(&id)
        .map(|restaurant| Json(restaurant.into()))
        .ok_or_else(|| AppError::NotFound(format!("Restaurant {id}")))
}

/// Show a restaurant's menu.
#[instrument(skip(state))]
pub async fn menu(
    State(state): State<AppState>,
    Path(id): Path<RestaurantId>,
) -> Result<Json<MenuResponse>> {
    let catalog = state.catalog();
    let restaurant = catalog
        .restaurant(&id)
        .ok_or_else(|| AppError::NotFound(format!("Restaurant {id}")))?;
    let categories = catalog
        .menu(&id)
        .ok_or_else(|| AppError::NotFound(format!("Menu for restaurant {id}")))?;

    Ok(Json(MenuResponse {
        restaurant: restaurant.into(),
        categories: categories.to_vec(),
    }))
}
