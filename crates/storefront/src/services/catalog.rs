//! Built-in restaurant catalog and address book.
//!
//! Stand-ins for the catalog and customer services. Only Pizza Palace has a
//! menu on file.

use quickbite_core::catalog::{Catalog, DeliveryWindow, MenuCategory, MenuItem, Restaurant};
use quickbite_core::checkout::{Address, AddressBookError, InMemoryAddressBook};
use quickbite_core::{AddressId, ItemId, RestaurantId};
use rust_decimal::Decimal;

fn dollars(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: &str,
    name: &str,
    cuisines: &[&str],
    rating: f64,
    delivery_time: DeliveryWindow,
    delivery_fee: Decimal,
    min_order: Decimal,
    address: &str,
    is_veg: bool,
    price_range: u8,
) -> Restaurant {
    Restaurant {
        id: RestaurantId::new(id),
        name: name.to_string(),
        cuisines: cuisines.iter().map(ToString::to_string).collect(),
        rating,
        delivery_time,
        delivery_fee,
        min_order,
        address: address.to_string(),
        is_veg,
        price_range,
    }
}

#[derive(Clone, Copy)]
enum Tag {
    Plain,
    Veg,
    Popular,
    VegPopular,
}

fn item(id: &str, name: &str, description: &str, cents: i64, tag: Tag) -> MenuItem {
    MenuItem {
        id: ItemId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: dollars(cents),
        is_veg: matches!(tag, Tag::Veg | Tag::VegPopular),
        is_popular: matches!(tag, Tag::Popular | Tag::VegPopular),
        is_spicy: false,
    }
}

fn category(id: &str, name: &str, items: Vec<MenuItem>) -> MenuCategory {
    MenuCategory {
        id: id.to_string(),
        name: name.to_string(),
        items,
    }
}

fn pizza_palace_menu() -> Vec<MenuCategory> {
    const MARGHERITA: &str = "Classic pizza with tomato sauce, mozzarella, and basil";
    const PEPPERONI: &str = "Pizza topped with pepperoni, mozzarella, and tomato sauce";

    vec![
        category(
            "1",
            "Popular Items",
            vec![
                item("101", "Margherita Pizza", MARGHERITA, 1299, Tag::VegPopular),
                item("102", "Pepperoni Pizza", PEPPERONI, 1499, Tag::Popular),
            ],
        ),
        category(
            "2",
            "Pizzas",
            vec![
                item("201", "Margherita Pizza", MARGHERITA, 1299, Tag::Veg),
                item("202", "Pepperoni Pizza", PEPPERONI, 1499, Tag::Plain),
                item(
                    "203",
                    "Vegetarian Pizza",
                    "Pizza topped with bell peppers, onions, mushrooms, olives, and mozzarella",
                    1399,
                    Tag::Veg,
                ),
                item(
                    "204",
                    "BBQ Chicken Pizza",
                    "Pizza topped with BBQ sauce, chicken, red onions, and mozzarella",
                    1599,
                    Tag::Plain,
                ),
            ],
        ),
        category(
            "3",
            "Pasta",
            vec![
                item(
                    "301",
                    "Spaghetti Bolognese",
                    "Spaghetti with meat sauce, topped with parmesan cheese",
                    1399,
                    Tag::Plain,
                ),
                item(
                    "302",
                    "Fettuccine Alfredo",
                    "Fettuccine pasta in a creamy parmesan sauce",
                    1299,
                    Tag::Veg,
                ),
            ],
        ),
        category(
            "4",
            "Sides",
            vec![
                item(
                    "401",
                    "Garlic Bread",
                    "Toasted bread with garlic butter and herbs",
                    499,
                    Tag::Veg,
                ),
                item(
                    "402",
                    "Caesar Salad",
                    "Romaine lettuce, croutons, parmesan cheese, and Caesar dressing",
                    699,
                    Tag::Veg,
                ),
            ],
        ),
        category(
            "5",
            "Beverages",
            vec![
                item(
                    "501",
                    "Soft Drink",
                    "Coke, Diet Coke, Sprite, or Fanta",
                    249,
                    Tag::Veg,
                ),
                item(
                    "502",
                    "Bottled Water",
                    "Still or sparkling water",
                    199,
                    Tag::Veg,
                ),
            ],
        ),
    ]
}

/// The restaurants and menus served by the API.
#[must_use]
pub fn demo_catalog() -> Catalog {
    let restaurants = vec![
        restaurant(
            "1",
            "Pizza Palace",
            &["Italian", "Pizza", "Pasta"],
            4.5,
            DeliveryWindow::new(30, 40),
            dollars(299),
            dollars(1000),
            "123 Main St, New York",
            false,
            2,
        ),
        restaurant(
            "2",
            "Burger Barn",
            &["American", "Burgers", "Fast Food"],
            4.2,
            DeliveryWindow::new(25, 35),
            dollars(399),
            dollars(1500),
            "456 Oak Ave",
            false,
            2,
        ),
        restaurant(
            "3",
            "Sushi Spot",
            &["Japanese", "Sushi", "Asian"],
            4.7,
            DeliveryWindow::new(40, 50),
            dollars(499),
            dollars(2000),
            "789 Pine St",
            false,
            3,
        ),
        restaurant(
            "4",
            "Taco Town",
            &["Mexican", "Tacos", "Burritos"],
            4.0,
            DeliveryWindow::new(35, 45),
            dollars(349),
            dollars(1200),
            "101 Elm St",
            false,
            1,
        ),
        restaurant(
            "5",
            "Green Garden",
            &["Vegetarian", "Healthy", "Salads"],
            4.6,
            DeliveryWindow::new(25, 35),
            dollars(249),
            dollars(1500),
            "202 Maple Ave",
            true,
            2,
        ),
        restaurant(
            "6",
            "Curry House",
            &["Indian", "Curry", "Spicy"],
            4.4,
            DeliveryWindow::new(40, 50),
            dollars(399),
            dollars(1800),
            "303 Cedar St",
            false,
            2,
        ),
    ];

    Catalog::new(restaurants).with_menu(RestaurantId::new("1"), pizza_palace_menu())
}

/// The demo customer's saved addresses. "Home" is the default.
///
/// # Errors
///
/// Returns `AddressBookError` if the fixture data is inconsistent.
pub fn demo_address_book() -> Result<InMemoryAddressBook, AddressBookError> {
    InMemoryAddressBook::new(vec![
        Address {
            id: AddressId::new("1"),
            label: "Home".to_string(),
            address_line1: "123 Main St".to_string(),
            address_line2: Some("Apt 4B".to_string()),
            city: "New York".to_string(),
            state: "NY".to_string(),
            postal_code: "10001".to_string(),
            is_default: true,
        },
        Address {
            id: AddressId::new("2"),
            label: "Work".to_string(),
            address_line1: "456 Office Ave".to_string(),
            address_line2: Some("Floor 12".to_string()),
            city: "New York".to_string(),
            state: "NY".to_string(),
            postal_code: "10002".to_string(),
            is_default: false,
        },
    ])
}
