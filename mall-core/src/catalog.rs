//! Catalog list logic: payload normalization, filtering and sorting.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Placeholder shown when the backend omits a product name.
pub const UNNAMED_ITEM: &str = "未命名商品";

/// Raw product payload as served by `/api/v1/products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalogItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price_cents: i64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub shelf_status: String,
}

/// Canonical catalog entry used by the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub stock: i64,
    pub shelf_status: String,
}

impl From<RawCatalogItem> for CatalogItem {
    fn from(raw: RawCatalogItem) -> Self {
        let name = if raw.name.trim().is_empty() {
            UNNAMED_ITEM.to_string()
        } else {
            raw.name
        };
        Self {
            id: raw.id,
            name,
            description: raw.description,
            category: raw.category,
            price_cents: raw.price_cents,
            stock: raw.stock,
            shelf_status: raw.shelf_status,
        }
    }
}

/// Coerce raw API items into the canonical shape.
#[must_use]
pub fn normalize_catalog_items(raw: Vec<RawCatalogItem>) -> Vec<CatalogItem> {
    raw.into_iter().map(CatalogItem::from).collect()
}

/// Stock availability filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockFilter {
    #[default]
    All,
    InStock,
    OutOfStock,
}

impl StockFilter {
    /// Unknown selector values fall back to `All`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "in" => Self::InStock,
            "out" => Self::OutOfStock,
            _ => Self::All,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::InStock => "in",
            Self::OutOfStock => "out",
        }
    }

    const fn matches(self, stock: i64) -> bool {
        match self {
            Self::All => true,
            Self::InStock => stock > 0,
            Self::OutOfStock => stock <= 0,
        }
    }
}

/// Catalog sort modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSort {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    StockDesc,
}

impl CatalogSort {
    /// Unknown selector values fall back to the default name ordering.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "name_desc" => Self::NameDesc,
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "stock_desc" => Self::StockDesc,
            _ => Self::NameAsc,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::StockDesc => "stock_desc",
        }
    }
}

/// View-local filter state for the product list. `page` lives beside this
/// in the view and must reset to 1 whenever any field here changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    pub keyword: String,
    /// `None` means every category.
    pub category: Option<String>,
    pub stock: StockFilter,
    pub sort: CatalogSort,
}

/// Filter by category, stock and keyword, then sort. The output is always a
/// subset of the input; equal sort keys keep a deterministic order via the
/// id tie-break.
#[must_use]
pub fn apply_catalog_query(items: &[CatalogItem], query: &CatalogQuery) -> Vec<CatalogItem> {
    let keyword = query.keyword.trim().to_lowercase();
    let mut matched: Vec<CatalogItem> = items
        .iter()
        .filter(|item| {
            if let Some(category) = &query.category {
                if item.category != *category {
                    return false;
                }
            }
            if !query.stock.matches(item.stock) {
                return false;
            }
            if !keyword.is_empty() {
                let haystack = format!("{} {}", item.name, item.description).to_lowercase();
                if !haystack.contains(&keyword) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect();
    sort_catalog_items(&mut matched, query.sort);
    matched
}

/// Sort in place. Every mode ties-break on id so equal keys stay stable.
pub fn sort_catalog_items(items: &mut [CatalogItem], sort: CatalogSort) {
    items.sort_by(|a, b| {
        let primary = match sort {
            CatalogSort::NameAsc => compare_names(&a.name, &b.name),
            CatalogSort::NameDesc => compare_names(&b.name, &a.name),
            CatalogSort::PriceAsc => a.price_cents.cmp(&b.price_cents),
            CatalogSort::PriceDesc => b.price_cents.cmp(&a.price_cents),
            CatalogSort::StockDesc => b.stock.cmp(&a.stock),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    });
}

/// Case-insensitive name ordering with an ordinal fallback for equal folds.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::{
        CatalogQuery, CatalogSort, RawCatalogItem, StockFilter, UNNAMED_ITEM, apply_catalog_query,
        normalize_catalog_items,
    };

    fn sample_items() -> Vec<super::CatalogItem> {
        normalize_catalog_items(vec![
            RawCatalogItem {
                id: "P1".to_string(),
                name: "Alpha Phone".to_string(),
                description: "flagship".to_string(),
                category: "electronics".to_string(),
                price_cents: 329_900,
                stock: 8,
                ..RawCatalogItem::default()
            },
            RawCatalogItem {
                id: "P2".to_string(),
                name: "Beta Phone".to_string(),
                description: "entry".to_string(),
                category: "electronics".to_string(),
                price_cents: 129_900,
                stock: 2,
                ..RawCatalogItem::default()
            },
            RawCatalogItem {
                id: "P3".to_string(),
                name: "Cotton Towel".to_string(),
                description: "bath".to_string(),
                category: "home".to_string(),
                price_cents: 9_900,
                stock: 0,
                ..RawCatalogItem::default()
            },
        ])
    }

    fn ids(items: &[super::CatalogItem]) -> String {
        items
            .iter()
            .map(|item| item.id.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    #[test]
    fn normalize_defaults_missing_fields() {
        let items = normalize_catalog_items(vec![RawCatalogItem {
            id: "P9".to_string(),
            ..RawCatalogItem::default()
        }]);
        assert_eq!(items[0].name, UNNAMED_ITEM);
        assert_eq!(items[0].price_cents, 0);
        assert_eq!(items[0].stock, 0);
    }

    #[test]
    fn keyword_and_category_filter_with_price_sort() {
        let filtered = apply_catalog_query(
            &sample_items(),
            &CatalogQuery {
                keyword: "phone".to_string(),
                category: Some("electronics".to_string()),
                stock: StockFilter::All,
                sort: CatalogSort::PriceDesc,
            },
        );
        assert_eq!(ids(&filtered), "P1,P2");
    }

    #[test]
    fn keyword_matches_description_case_insensitively() {
        let filtered = apply_catalog_query(
            &sample_items(),
            &CatalogQuery {
                keyword: "BATH".to_string(),
                ..CatalogQuery::default()
            },
        );
        assert_eq!(ids(&filtered), "P3");
    }

    #[test]
    fn stock_filter_selects_out_of_stock() {
        let filtered = apply_catalog_query(
            &sample_items(),
            &CatalogQuery {
                stock: StockFilter::OutOfStock,
                ..CatalogQuery::default()
            },
        );
        assert_eq!(ids(&filtered), "P3");

        let in_stock = apply_catalog_query(
            &sample_items(),
            &CatalogQuery {
                stock: StockFilter::InStock,
                ..CatalogQuery::default()
            },
        );
        assert_eq!(ids(&in_stock), "P1,P2");
    }

    #[test]
    fn equal_sort_keys_tie_break_on_id() {
        let mut items = normalize_catalog_items(vec![
            RawCatalogItem {
                id: "B".to_string(),
                name: "same".to_string(),
                price_cents: 100,
                ..RawCatalogItem::default()
            },
            RawCatalogItem {
                id: "A".to_string(),
                name: "same".to_string(),
                price_cents: 100,
                ..RawCatalogItem::default()
            },
        ]);
        super::sort_catalog_items(&mut items, CatalogSort::PriceAsc);
        assert_eq!(ids(&items), "A,B");
        super::sort_catalog_items(&mut items, CatalogSort::NameDesc);
        assert_eq!(ids(&items), "A,B");
    }

    #[test]
    fn selector_values_round_trip() {
        assert_eq!(StockFilter::parse("in"), StockFilter::InStock);
        assert_eq!(StockFilter::parse("nonsense"), StockFilter::All);
        assert_eq!(StockFilter::OutOfStock.as_str(), "out");
        assert_eq!(CatalogSort::parse("price_desc"), CatalogSort::PriceDesc);
        assert_eq!(CatalogSort::parse(""), CatalogSort::NameAsc);
        assert_eq!(CatalogSort::StockDesc.as_str(), "stock_desc");
    }
}
