//! Proptest strategies shared by the unit test modules.

use proptest::prelude::*;

use crate::filter::{CategoryFilter, FilterRequest, PriceBound};
use crate::product::{Category, Product};

pub fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

pub fn arb_product() -> impl Strategy<Value = Product> {
    (
        "[a-z0-9-]{1,8}",
        "[A-Za-z][A-Za-z0-9 ]{0,24}",
        arb_category(),
        0u64..500,
        any::<bool>(),
    )
        .prop_map(|(id, title, category, price, in_stock)| {
            Product::new(id, title, category, price, in_stock)
        })
}

pub fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arb_product(), 0..40)
}

fn arb_bound() -> impl Strategy<Value = PriceBound> {
    prop_oneof![
        Just(PriceBound::UNBOUNDED),
        (0u64..500).prop_map(PriceBound::from),
        "[a-z]{1,4}".prop_map(|s| PriceBound::parse(&s)),
    ]
}

pub fn arb_request() -> impl Strategy<Value = FilterRequest> {
    (
        "[A-Za-z ]{0,4}",
        prop_oneof![
            Just(CategoryFilter::Any),
            arb_category().prop_map(CategoryFilter::Only),
        ],
        arb_bound(),
        arb_bound(),
        any::<bool>(),
    )
        .prop_map(|(text, category, min_price, max_price, only_in_stock)| FilterRequest {
            text,
            category,
            min_price,
            max_price,
            only_in_stock,
        })
}
