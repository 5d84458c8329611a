//! Product search planning and residual filtering.
//!
//! Pure functions, no store access. The repository decides between an
//! indexed query and a full scan from the [`AccessPlan`] computed here and
//! applies [`filter_by_price`] to whatever the chosen path returns.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::Product;

/// Search predicates for product lookups.
///
/// `area` is accepted for interface compatibility with the trader service
/// but has no effect on product routing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub category: Option<String>,
    pub area: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// The access path chosen for a search.
///
/// Category has a native secondary index, so an exact category predicate
/// narrows the read to matching records. Everything else falls back to a
/// full-table scan. Price bounds are never expressible on either path and
/// stay residual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessPlan {
    /// Query the category index for an exact match.
    CategoryQuery(String),
    /// Read the whole collection.
    FullScan,
}

impl ProductFilter {
    /// Computes the access plan for this filter.
    ///
    /// An empty category string routes to a scan, same as an absent one.
    pub fn access_plan(&self) -> AccessPlan {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => {
                AccessPlan::CategoryQuery(category.to_string())
            }
            _ => AccessPlan::FullScan,
        }
    }
}

/// Applies the residual price filter, inclusive on both bounds.
///
/// Each bound is applied independently; applying them in either order
/// yields the same result set.
pub fn filter_by_price(
    products: Vec<Product>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| min_price.is_none_or(|min| p.base_price >= min))
        .filter(|p| max_price.is_none_or(|max| p.base_price <= max))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn priced(price: Decimal) -> Product {
        Product::new("Test", "Groceries", price, Uuid::new_v4())
    }

    fn prices(products: &[Product]) -> Vec<Decimal> {
        products.iter().map(|p| p.base_price).collect()
    }

    #[test]
    fn test_plan_with_category_is_indexed_query() {
        let filter = ProductFilter {
            category: Some("Beverages".to_string()),
            ..Default::default()
        };

        assert_eq!(
            filter.access_plan(),
            AccessPlan::CategoryQuery("Beverages".to_string())
        );
    }

    #[test]
    fn test_plan_without_category_is_scan() {
        assert_eq!(ProductFilter::default().access_plan(), AccessPlan::FullScan);
    }

    #[test]
    fn test_plan_with_empty_category_is_scan() {
        let filter = ProductFilter {
            category: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(filter.access_plan(), AccessPlan::FullScan);
    }

    #[test]
    fn test_plan_ignores_price_bounds_and_area() {
        let filter = ProductFilter {
            category: None,
            area: Some("Soweto".to_string()),
            min_price: Some(Decimal::new(500, 2)),
            max_price: Some(Decimal::new(1500, 2)),
        };

        assert_eq!(filter.access_plan(), AccessPlan::FullScan);
    }

    #[test]
    fn test_price_filter_inclusive_on_both_bounds() {
        let products = vec![
            priced(Decimal::new(499, 2)),
            priced(Decimal::new(500, 2)),
            priced(Decimal::new(1000, 2)),
            priced(Decimal::new(1500, 2)),
            priced(Decimal::new(1501, 2)),
        ];

        let filtered = filter_by_price(
            products,
            Some(Decimal::new(500, 2)),
            Some(Decimal::new(1500, 2)),
        );

        assert_eq!(
            prices(&filtered),
            vec![
                Decimal::new(500, 2),
                Decimal::new(1000, 2),
                Decimal::new(1500, 2)
            ]
        );
    }

    #[test]
    fn test_price_filter_min_only() {
        let products = vec![priced(Decimal::new(400, 2)), priced(Decimal::new(600, 2))];

        let filtered = filter_by_price(products, Some(Decimal::new(500, 2)), None);

        assert_eq!(prices(&filtered), vec![Decimal::new(600, 2)]);
    }

    #[test]
    fn test_price_filter_max_only() {
        let products = vec![priced(Decimal::new(400, 2)), priced(Decimal::new(600, 2))];

        let filtered = filter_by_price(products, None, Some(Decimal::new(500, 2)));

        assert_eq!(prices(&filtered), vec![Decimal::new(400, 2)]);
    }

    #[test]
    fn test_price_filter_no_bounds_is_identity() {
        let products = vec![priced(Decimal::new(400, 2)), priced(Decimal::new(600, 2))];

        let filtered = filter_by_price(products.clone(), None, None);

        assert_eq!(prices(&filtered), prices(&products));
    }

    #[test]
    fn test_price_filter_order_independent() {
        let products = vec![
            priced(Decimal::new(300, 2)),
            priced(Decimal::new(700, 2)),
            priced(Decimal::new(1200, 2)),
        ];
        let min = Some(Decimal::new(500, 2));
        let max = Some(Decimal::new(1000, 2));

        let min_first = filter_by_price(filter_by_price(products.clone(), min, None), None, max);
        let max_first = filter_by_price(filter_by_price(products, None, max), min, None);

        assert_eq!(prices(&min_first), prices(&max_first));
        assert_eq!(prices(&min_first), vec![Decimal::new(700, 2)]);
    }
}
