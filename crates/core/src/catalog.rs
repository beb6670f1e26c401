//! Restaurant catalog: restaurants, their menus, and restaurant search.
//!
//! The catalog is the line-item source for checkout. Turning a menu item id
//! into a priced [`LineItem`] goes through [`Catalog::line_item`], so a cart
//! never carries a price the catalog did not quote.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::checkout::LineItem;
use crate::types::{ItemId, RestaurantId};

/// Lowest and highest price tier (`$` to `$$$$`).
pub const PRICE_RANGE_MIN: u8 = 1;
pub const PRICE_RANGE_MAX: u8 = 4;

/// Cuisine filter value that matches every restaurant.
pub const ALL_CUISINES: &str = "All";

/// Estimated delivery window in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryWindow {
    pub min_minutes: u16,
    pub max_minutes: u16,
}

impl DeliveryWindow {
    #[must_use]
    pub const fn new(min_minutes: u16, max_minutes: u16) -> Self {
        Self {
            min_minutes,
            max_minutes,
        }
    }

    /// Display form, e.g. `30-40 min`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{} min", self.min_minutes, self.max_minutes)
    }
}

/// A restaurant listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub cuisines: Vec<String>,
    pub rating: f64,
    pub delivery_time: DeliveryWindow,
    pub delivery_fee: Decimal,
    /// Smallest subtotal the restaurant accepts an order for.
    pub min_order: Decimal,
    pub address: String,
    pub is_veg: bool,
    /// Price tier from 1 (`$`) to 4 (`$$$$`).
    pub price_range: u8,
}

impl Restaurant {
    /// Price tier rendered as dollar signs.
    #[must_use]
    pub fn price_range_label(&self) -> String {
        "$".repeat(usize::from(self.price_range))
    }
}

/// A dish on a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_veg: bool,
    pub is_popular: bool,
    pub is_spicy: bool,
}

/// A named section of a menu ("Pizzas", "Sides").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Sort order for restaurant search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Highest rating first.
    #[default]
    Rating,
    /// Shortest delivery window first (by its lower bound).
    DeliveryTime,
    /// Cheapest price tier first.
    PriceRange,
}

/// Restaurant search filters. Every field is optional; the default matches
/// everything and sorts by rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RestaurantQuery {
    /// Case-insensitive substring of the name or of any cuisine.
    pub search: Option<String>,
    /// Exact cuisine, or `"All"`.
    pub cuisine: Option<String>,
    pub min_price: Option<u8>,
    pub max_price: Option<u8>,
    pub veg_only: bool,
    pub sort: SortBy,
}

impl RestaurantQuery {
    fn matches(&self, restaurant: &Restaurant) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .is_none_or(|needle| {
                let needle = needle.to_lowercase();
                restaurant.name.to_lowercase().contains(&needle)
                    || restaurant
                        .cuisines
                        .iter()
                        .any(|c| c.to_lowercase().contains(&needle))
            });

        let matches_cuisine = self
            .cuisine
            .as_deref()
            .filter(|c| *c != ALL_CUISINES)
            .is_none_or(|cuisine| restaurant.cuisines.iter().any(|c| c == cuisine));

        let low = self.min_price.unwrap_or(PRICE_RANGE_MIN);
        let high = self.max_price.unwrap_or(PRICE_RANGE_MAX);
        let matches_price = (low..=high).contains(&restaurant.price_range);

        let matches_veg = !self.veg_only || restaurant.is_veg;

        matches_search && matches_cuisine && matches_price && matches_veg
    }

    fn compare(&self, a: &Restaurant, b: &Restaurant) -> Ordering {
        match self.sort {
            SortBy::Rating => b.rating.total_cmp(&a.rating),
            SortBy::DeliveryTime => a
                .delivery_time
                .min_minutes
                .cmp(&b.delivery_time.min_minutes),
            SortBy::PriceRange => a.price_range.cmp(&b.price_range),
        }
    }
}

/// In-memory restaurant catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    menus: HashMap<RestaurantId, Vec<MenuCategory>>,
}

impl Catalog {
    #[must_use]
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants,
            menus: HashMap::new(),
        }
    }

    /// Attach a menu to a restaurant, replacing any previous one.
    #[must_use]
    pub fn with_menu(mut self, restaurant_id: RestaurantId, menu: Vec<MenuCategory>) -> Self {
        self.menus.insert(restaurant_id, menu);
        self
    }

    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    #[must_use]
    pub fn restaurant(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| &r.id == id)
    }

    /// A restaurant's menu. `None` when the restaurant has no menu on file.
    #[must_use]
    pub fn menu(&self, id: &RestaurantId) -> Option<&[MenuCategory]> {
        self.menus.get(id).map(Vec::as_slice)
    }

    /// Find a menu item and the restaurant serving it.
    #[must_use]
    pub fn menu_item(&self, item_id: &ItemId) -> Option<(&Restaurant, &MenuItem)> {
        self.menus.iter().find_map(|(restaurant_id, categories)| {
            let item = categories
                .iter()
                .flat_map(|c| c.items.iter())
                .find(|item| &item.id == item_id)?;
            let restaurant = self.restaurant(restaurant_id)?;
            Some((restaurant, item))
        })
    }

    /// Build a priced cart line for a menu item.
    #[must_use]
    pub fn line_item(&self, item_id: &ItemId, quantity: NonZeroU32) -> Option<LineItem> {
        let (restaurant, item) = self.menu_item(item_id)?;
        Some(LineItem {
            id: item.id.clone(),
            restaurant_id: restaurant.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity,
            special_instructions: String::new(),
        })
    }

    /// Filter and sort restaurants. The sort is stable, so ties keep catalog
    /// order.
    #[must_use]
    pub fn search(&self, query: &RestaurantQuery) -> Vec<&Restaurant> {
        let mut found: Vec<&Restaurant> = self
            .restaurants
            .iter()
            .filter(|r| query.matches(r))
            .collect();
        found.sort_by(|a, b| query.compare(a, b));
        found
    }
}
