//! The fixed catalog loaded into a fresh store.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::NewMenuItem;
use crate::domain::shared::Money;

const STARTERS: &str = "Starters";
const MAIN_COURSES: &str = "Main Courses";
const DESSERTS: &str = "Desserts";

const SEED: &[(&str, &str, Decimal, &str)] = &[
    (
        "Samosas (2 pieces)",
        "Crispy pastries filled with spiced potatoes and peas",
        dec!(6.99),
        STARTERS,
    ),
    (
        "Pakoras",
        "Mixed vegetable fritters with mint chutney",
        dec!(8.99),
        STARTERS,
    ),
    (
        "Aloo Tikki",
        "Pan-fried potato patties with tamarind sauce",
        dec!(7.99),
        STARTERS,
    ),
    (
        "Chana Chaat",
        "Spiced chickpea salad with yogurt and chutneys",
        dec!(9.99),
        STARTERS,
    ),
    (
        "Butter Chicken",
        "Tender chicken in rich tomato and cream sauce",
        dec!(16.99),
        MAIN_COURSES,
    ),
    (
        "Dal Makhani",
        "Slow-cooked black lentils with butter and cream",
        dec!(14.99),
        MAIN_COURSES,
    ),
    (
        "Palak Paneer",
        "Fresh spinach curry with cottage cheese",
        dec!(15.99),
        MAIN_COURSES,
    ),
    (
        "Chicken Biryani",
        "Aromatic basmati rice with spices and chicken",
        dec!(18.99),
        MAIN_COURSES,
    ),
    (
        "Vegetable Biryani",
        "Aromatic basmati rice with spices and vegetables",
        dec!(16.99),
        MAIN_COURSES,
    ),
    (
        "Rajma",
        "Kidney beans in spiced tomato gravy",
        dec!(13.99),
        MAIN_COURSES,
    ),
    (
        "Chole Bhature",
        "Spiced chickpeas with fluffy fried bread",
        dec!(15.99),
        MAIN_COURSES,
    ),
    (
        "Gulab Jamun (2 pieces)",
        "Soft milk dumplings in rose-scented syrup",
        dec!(5.99),
        DESSERTS,
    ),
    (
        "Kheer",
        "Traditional rice pudding with cardamom and nuts",
        dec!(6.99),
        DESSERTS,
    ),
    (
        "Kulfi",
        "Dense, creamy Indian ice cream with pistachios",
        dec!(4.99),
        DESSERTS,
    ),
    (
        "Rasmalai",
        "Soft cheese patties in sweetened milk",
        dec!(7.99),
        DESSERTS,
    ),
];

/// The seed catalog in insertion order.
///
/// Ids are assigned by the store as the entries are inserted, so the first
/// entry becomes menu item 1.
#[must_use]
pub fn seed_catalog() -> Vec<NewMenuItem> {
    SEED.iter()
        .map(|&(name, description, price, category)| NewMenuItem {
            name: name.to_string(),
            description: description.to_string(),
            price: Money::new(price),
            category: category.to_string(),
            available: true,
        })
        .collect()
}
