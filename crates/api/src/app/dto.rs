use serde::{Deserialize, Serialize};

use shopfront_core::DomainError;
use shopfront_products::{CategoryFilter, FilterRequest, PriceBound, Product};

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /api/catalog/search`.
///
/// Every field is raw user text, mirroring the page's filter controls.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub text: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub only_in_stock: Option<String>,
}

impl SearchQuery {
    /// Map the query onto a filter request.
    ///
    /// Only the category can fail; price bounds degrade to unbounded and the
    /// stock flag accepts the usual checkbox spellings.
    pub fn into_request(self) -> Result<FilterRequest, DomainError> {
        let category = match self.category.as_deref() {
            Some(raw) => raw.parse::<CategoryFilter>()?,
            None => CategoryFilter::Any,
        };

        Ok(FilterRequest {
            text: self.text.unwrap_or_default(),
            category,
            min_price: parse_bound(self.min_price.as_deref()),
            max_price: parse_bound(self.max_price.as_deref()),
            only_in_stock: self.only_in_stock.as_deref().is_some_and(is_truthy),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CompareQuery {
    pub a: Option<String>,
    pub b: Option<String>,
}

fn parse_bound(raw: Option<&str>) -> PriceBound {
    raw.map(PriceBound::parse).unwrap_or_default()
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "true" | "1" | "on" | "yes")
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductsResponse<'a> {
    pub products: &'a [Product],
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub label: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_products::Category;

    #[test]
    fn empty_query_is_unconstrained() {
        let request = SearchQuery::default().into_request().unwrap();
        assert!(request.is_unconstrained());
    }

    #[test]
    fn full_query_maps_every_field() {
        let query = SearchQuery {
            text: Some("lamp".into()),
            category: Some("home".into()),
            min_price: Some("0".into()),
            max_price: Some("100".into()),
            only_in_stock: Some("on".into()),
        };
        let request = query.into_request().unwrap();
        assert_eq!(request.text, "lamp");
        assert_eq!(request.category, CategoryFilter::Only(Category::Home));
        assert_eq!(request.min_price.value(), Some(0.0));
        assert_eq!(request.max_price.value(), Some(100.0));
        assert!(request.only_in_stock);
    }

    #[test]
    fn malformed_bounds_and_flags_are_permissive() {
        let query = SearchQuery {
            max_price: Some("abc".into()),
            only_in_stock: Some("maybe".into()),
            ..SearchQuery::default()
        };
        let request = query.into_request().unwrap();
        assert!(request.max_price.is_unbounded());
        assert!(!request.only_in_stock);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let query = SearchQuery {
            category: Some("Garden".into()),
            ..SearchQuery::default()
        };
        assert!(matches!(
            query.into_request(),
            Err(DomainError::UnknownCategory(_))
        ));
    }
}
