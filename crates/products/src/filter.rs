//! Catalog filter engine.
//!
//! `filter` is a pure function of a catalog and a [`FilterRequest`]: callers
//! rebuild the request whenever a constraint changes and re-run it. Catalogs
//! are small (low hundreds), so there is no caching.

use core::str::FromStr;

use shopfront_core::{DomainError, ValueObject};

use crate::product::{Category, Product};

/// Category constraint: a specific category, or the "any" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    Any,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        CategoryFilter::Only(value)
    }
}

/// `""`, `"all"` and `"any"` (any case) select every category; otherwise the
/// text must name a category.
impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" | "any" => Ok(CategoryFilter::Any),
            _ => s.parse::<Category>().map(CategoryFilter::Only),
        }
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CategoryFilter::Any => f.write_str("All"),
            CategoryFilter::Only(c) => core::fmt::Display::fmt(c, f),
        }
    }
}

/// Optional numeric price bound.
///
/// Parsing is permissive: blank or non-numeric text yields an unbounded bound
/// instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceBound(Option<f64>);

impl PriceBound {
    pub const UNBOUNDED: PriceBound = PriceBound(None);

    /// Bound at `value`; non-finite values are unbounded.
    pub fn at(value: f64) -> Self {
        if value.is_finite() {
            Self(Some(value))
        } else {
            Self::UNBOUNDED
        }
    }

    /// Parse user text (e.g. a price input box).
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(v) => Self::at(v),
            Err(_) => Self::UNBOUNDED,
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn is_unbounded(&self) -> bool {
        self.0.is_none()
    }
}

impl From<u64> for PriceBound {
    fn from(value: u64) -> Self {
        Self::at(value as f64)
    }
}

impl From<Option<u64>> for PriceBound {
    fn from(value: Option<u64>) -> Self {
        value.map(PriceBound::from).unwrap_or_default()
    }
}

impl ValueObject for PriceBound {}

/// User-chosen constraints applied to a catalog.
///
/// The default request applies no constraint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterRequest {
    pub text: String,
    pub category: CategoryFilter,
    pub min_price: PriceBound,
    pub max_price: PriceBound,
    pub only_in_stock: bool,
}

impl ValueObject for FilterRequest {}

impl FilterRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_min_price(mut self, bound: impl Into<PriceBound>) -> Self {
        self.min_price = bound.into();
        self
    }

    pub fn with_max_price(mut self, bound: impl Into<PriceBound>) -> Self {
        self.max_price = bound.into();
        self
    }

    pub fn with_only_in_stock(mut self, only_in_stock: bool) -> Self {
        self.only_in_stock = only_in_stock;
        self
    }

    /// Trimmed, case-folded search text.
    pub fn normalized_text(&self) -> String {
        self.text.trim().to_lowercase()
    }

    /// True when the request applies no constraint at all.
    pub fn is_unconstrained(&self) -> bool {
        self.text.trim().is_empty()
            && self.category == CategoryFilter::Any
            && self.min_price.is_unbounded()
            && self.max_price.is_unbounded()
            && !self.only_in_stock
    }

    /// Whether `product` satisfies every constraint of this request.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_normalized(&self.normalized_text(), product)
    }

    fn matches_normalized(&self, query: &str, product: &Product) -> bool {
        if !query.is_empty() && !product.title.to_lowercase().contains(query) {
            return false;
        }
        if !self.category.admits(product.category) {
            return false;
        }
        let price = product.price as f64;
        if self.min_price.value().is_some_and(|min| price < min) {
            return false;
        }
        if self.max_price.value().is_some_and(|max| price > max) {
            return false;
        }
        if self.only_in_stock && !product.in_stock {
            return false;
        }
        true
    }
}

/// Return the products of `catalog` matching `request`, in catalog order.
pub fn filter(catalog: &[Product], request: &FilterRequest) -> Vec<Product> {
    let query = request.normalized_text();
    catalog
        .iter()
        .filter(|p| request.matches_normalized(&query, p))
        .cloned()
        .collect()
}

/// Result-count caption shown above a filtered list.
pub fn results_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{count} results")
    }
}
