//! Two-product comparison.

use shopfront_core::ProductId;

use crate::product::{CURRENCY, Category, Product, stock_label};

/// Shown when fewer than two products are selected.
pub const SELECT_TWO_PROMPT: &str = "Select two products to compare.";

/// Shown when the two selections agree on every compared attribute.
pub const IDENTICAL_MESSAGE: &str = "The products are identical.";

/// One differing attribute between two products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeDiff {
    Title { a: String, b: String },
    Category { a: Category, b: Category },
    Price { a: u64, b: u64 },
    Stock { a: bool, b: bool },
}

impl core::fmt::Display for AttributeDiff {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AttributeDiff::Title { a, b } => write!(f, "Title: \"{a}\" vs \"{b}\""),
            AttributeDiff::Category { a, b } => write!(f, "Category: {a} vs {b}"),
            AttributeDiff::Price { a, b } => {
                write!(f, "Price: {a} {CURRENCY} vs {b} {CURRENCY}")
            }
            AttributeDiff::Stock { a, b } => {
                write!(f, "Stock: {} vs {}", stock_label(*a), stock_label(*b))
            }
        }
    }
}

/// Structured outcome of comparing two selections.
///
/// `Display` renders the summary shown to the user: the prompt, the identical
/// message, or one line per difference (title, category, price, stock order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    Incomplete,
    Identical,
    Differences(Vec<AttributeDiff>),
}

impl Comparison {
    pub fn of(a: Option<&Product>, b: Option<&Product>) -> Self {
        let (Some(a), Some(b)) = (a, b) else {
            return Comparison::Incomplete;
        };

        let mut diffs = Vec::new();
        if a.title != b.title {
            diffs.push(AttributeDiff::Title {
                a: a.title.clone(),
                b: b.title.clone(),
            });
        }
        if a.category != b.category {
            diffs.push(AttributeDiff::Category {
                a: a.category,
                b: b.category,
            });
        }
        if a.price != b.price {
            diffs.push(AttributeDiff::Price {
                a: a.price,
                b: b.price,
            });
        }
        if a.in_stock != b.in_stock {
            diffs.push(AttributeDiff::Stock {
                a: a.in_stock,
                b: b.in_stock,
            });
        }

        if diffs.is_empty() {
            Comparison::Identical
        } else {
            Comparison::Differences(diffs)
        }
    }

    pub fn diffs(&self) -> &[AttributeDiff] {
        match self {
            Comparison::Differences(d) => d,
            _ => &[],
        }
    }
}

impl core::fmt::Display for Comparison {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Comparison::Incomplete => f.write_str(SELECT_TWO_PROMPT),
            Comparison::Identical => f.write_str(IDENTICAL_MESSAGE),
            Comparison::Differences(diffs) => {
                for (i, d) in diffs.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{d}")?;
                }
                Ok(())
            }
        }
    }
}

/// Summarize the differences between two optional selections.
pub fn compare(a: Option<&Product>, b: Option<&Product>) -> String {
    Comparison::of(a, b).to_string()
}

/// Compare two selections given by id.
///
/// Blank or unknown ids count as "nothing selected".
pub fn compare_by_id(catalog: &[Product], a: Option<&str>, b: Option<&str>) -> String {
    compare(lookup(catalog, a), lookup(catalog, b))
}

fn lookup<'a>(catalog: &'a [Product], id: Option<&str>) -> Option<&'a Product> {
    let id: ProductId = id?.parse().ok()?;
    catalog.iter().find(|p| p.id == id)
}
