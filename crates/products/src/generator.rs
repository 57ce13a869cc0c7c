//! Deterministic mock catalog generators.
//!
//! Two sources feed the catalog: a local generator (ids `"1"`, `"2"`, ...) and
//! the remote mock endpoint (ids `"api-1"`, `"api-2"`, ...). Both are pure
//! functions of `count`.

use crate::product::{Category, Product};

/// Size of the locally generated catalog.
pub const DEFAULT_LOCAL_COUNT: usize = 100;

/// Size of the catalog served by the mock endpoint.
pub const DEFAULT_REMOTE_COUNT: usize = 24;

const LOCAL_ADJECTIVES: [&str; 8] = [
    "Premium", "Compact", "Eco", "Classic", "Smart", "Urban", "Pro", "Lite",
];

const REMOTE_ADJECTIVES: [&str; 6] = ["Nova", "Aero", "Fusion", "Prime", "Flex", "Aura"];

fn local_nouns(category: Category) -> [&'static str; 5] {
    match category {
        Category::Electronics => ["Headphones", "Speaker", "Mouse", "Keyboard", "Charger"],
        Category::Books => ["Guide", "Handbook", "Stories", "Cookbook", "Workbook"],
        Category::Clothing => ["Jacket", "T-Shirt", "Hoodie", "Sneakers", "Jeans"],
        Category::Home => ["Lamp", "Mug", "Towel", "Curtains", "Organizer"],
    }
}

fn remote_nouns(category: Category) -> [&'static str; 5] {
    match category {
        Category::Electronics => ["Tablet", "Camera", "Router", "Monitor", "SSD"],
        Category::Books => ["Novel", "Poems", "Essays", "Atlas", "Manual"],
        Category::Clothing => ["Coat", "Shirt", "Cap", "Boots", "Shorts"],
        Category::Home => ["Vase", "Frame", "Chair", "Shelf", "Mirror"],
    }
}

fn local_base_price(category: Category) -> u64 {
    match category {
        Category::Electronics => 80,
        Category::Books => 20,
        Category::Clothing => 40,
        Category::Home => 30,
    }
}

fn remote_base_price(category: Category) -> u64 {
    match category {
        Category::Electronics => 120,
        Category::Books => 35,
        Category::Clothing => 60,
        Category::Home => 45,
    }
}

/// Generate the local catalog segment.
pub fn generate_local(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|i| {
            let category = Category::ALL[(i - 1) % Category::ALL.len()];
            let n = i as u64;
            let price = local_base_price(category) + (n * 7) % 120 + (n % 5) * 3;
            let adjective = LOCAL_ADJECTIVES[i % LOCAL_ADJECTIVES.len()];
            let noun = local_nouns(category)[i % 5];

            Product::new(
                i.to_string(),
                format!("{adjective} {noun} {i}"),
                category,
                price,
                i % 3 != 0,
            )
        })
        .collect()
}

/// Generate the catalog segment served by the mock endpoint.
pub fn generate_remote(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|i| {
            let category = Category::ALL[i % Category::ALL.len()];
            let n = i as u64;
            let price = remote_base_price(category) + (n * 9) % 140;
            let adjective = REMOTE_ADJECTIVES[i % REMOTE_ADJECTIVES.len()];
            let noun = remote_nouns(category)[i % 5];

            Product::new(
                format!("api-{i}"),
                format!("{adjective} {noun} API {i}"),
                category,
                price,
                i % 4 != 0,
            )
        })
        .collect()
}
