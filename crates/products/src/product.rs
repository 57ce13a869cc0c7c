use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, Entity, ProductId};

/// Currency the catalog prices are expressed in.
pub const CURRENCY: &str = "RON";

/// Closed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Books,
    Clothing,
    Home,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Books,
        Category::Clothing,
        Category::Home,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Books => "Books",
            Category::Clothing => "Clothing",
            Category::Home => "Home",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "electronics" => Ok(Category::Electronics),
            "books" => Ok(Category::Books),
            "clothing" => Ok(Category::Clothing),
            "home" => Ok(Category::Home),
            _ => Err(DomainError::unknown_category(s.trim())),
        }
    }
}

/// A sellable catalog item.
///
/// Products are immutable values: the catalog is rebuilt rather than edited.
/// The serialized form is the wire shape served by the mock endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: Category,
    pub price: u64, // Whole currency units
    pub in_stock: bool,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        category: Category,
        price: u64,
        in_stock: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            price,
            in_stock,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Human-readable availability label.
pub fn stock_label(in_stock: bool) -> &'static str {
    if in_stock { "In stock" } else { "Out of stock" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!("home".parse::<Category>().unwrap(), Category::Home);
        assert_eq!(" BOOKS ".parse::<Category>().unwrap(), Category::Books);
        assert_eq!("Electronics".parse::<Category>().unwrap(), Category::Electronics);
    }

    #[test]
    fn category_parse_rejects_unknown_names() {
        let err = "Toys".parse::<Category>().unwrap_err();
        assert_eq!(err, DomainError::UnknownCategory("Toys".to_string()));
    }

    #[test]
    fn category_display_round_trips_through_parse() {
        for c in Category::ALL {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn product_serializes_to_wire_shape() {
        let p = Product::new("1", "Smart Lamp", Category::Home, 50, true);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "title": "Smart Lamp",
                "category": "Home",
                "price": 50,
                "inStock": true,
            })
        );
    }

    #[test]
    fn product_rejects_negative_price_on_the_wire() {
        let raw = r#"{"id":"x","title":"t","category":"Home","price":-1,"inStock":true}"#;
        assert!(serde_json::from_str::<Product>(raw).is_err());
    }

    #[test]
    fn entity_id_is_product_id() {
        let p = Product::new("api-3", "Fusion Cap API 3", Category::Clothing, 87, true);
        assert_eq!(Entity::id(&p).as_str(), "api-3");
    }

    #[test]
    fn stock_labels() {
        assert_eq!(stock_label(true), "In stock");
        assert_eq!(stock_label(false), "Out of stock");
    }
}
