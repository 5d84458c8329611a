use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use spazalink_core::product::Product;

/// Request payload for creating a new product.
///
/// Validation of field contents is the caller's responsibility; the
/// repository contract only persists what it is given.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    pub base_price: Decimal,
    #[serde(default)]
    pub unit: String,
    #[serde(default = "default_one")]
    pub units_per_case: u32,
    pub supplier_id: Uuid,
    #[serde(default)]
    pub supplier_name: String,
    #[serde(default)]
    pub stock_level: i32,
    #[serde(default = "default_one")]
    pub minimum_order_quantity: u32,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

fn default_one() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl CreateProduct {
    /// Converts the create request into a Product with a fresh id and
    /// write timestamp.
    pub fn into_product(self) -> Product {
        let mut product = Product::new(self.name, self.category, self.base_price, self.supplier_id)
            .with_description(self.description)
            .with_stock_level(self.stock_level)
            .with_image_urls(self.image_urls);
        product.sub_category = self.sub_category;
        product.unit = self.unit;
        product.units_per_case = self.units_per_case;
        product.supplier_name = self.supplier_name;
        product.minimum_order_quantity = self.minimum_order_quantity;
        product.active = self.active;
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_product_carries_fields() {
        let supplier_id = Uuid::new_v4();
        let request = CreateProduct {
            name: "Milk".to_string(),
            description: "Full cream".to_string(),
            category: "Dairy".to_string(),
            sub_category: "Fresh".to_string(),
            base_price: Decimal::new(1250, 2),
            unit: "litre".to_string(),
            units_per_case: 6,
            supplier_id,
            supplier_name: "Clover".to_string(),
            stock_level: 40,
            minimum_order_quantity: 2,
            active: true,
            image_urls: vec!["https://img.example/milk.jpg".to_string()],
        };

        let product = request.into_product();

        assert_eq!(product.name, "Milk");
        assert_eq!(product.category, "Dairy");
        assert_eq!(product.base_price, Decimal::new(1250, 2));
        assert_eq!(product.units_per_case, 6);
        assert_eq!(product.supplier_id, supplier_id);
        assert_eq!(product.stock_level, 40);
        assert_eq!(product.image_urls.len(), 1);
    }
}
