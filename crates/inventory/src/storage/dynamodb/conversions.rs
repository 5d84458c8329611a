//! DynamoDB attribute conversion functions for products.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! the Product entity. Testable in isolation without DynamoDB access.
//!
//! Every field maps to exactly one named attribute. Numeric fields are
//! stored as base-10 text so the currency field round-trips exactly;
//! image URLs are an unordered string set, written only when non-empty.

use aws_sdk_dynamodb::types::AttributeValue;

use spazalink_core::product::Product;
use spazalink_core::storage::RepositoryError;
use spazalink_dynamodb::attrs::{
    get_bool, get_datetime, get_decimal, get_i32, get_string, get_string_set, get_u32, get_uuid,
    insert_string_set, num, Item,
};

/// Convert a Product to a DynamoDB item.
pub fn product_to_item(product: &Product) -> Item {
    let mut item = Item::new();

    item.insert(
        "productId".to_string(),
        AttributeValue::S(product.id.to_string()),
    );
    item.insert("name".to_string(), AttributeValue::S(product.name.clone()));
    item.insert(
        "description".to_string(),
        AttributeValue::S(product.description.clone()),
    );
    item.insert(
        "category".to_string(),
        AttributeValue::S(product.category.clone()),
    );
    item.insert(
        "subCategory".to_string(),
        AttributeValue::S(product.sub_category.clone()),
    );
    item.insert("basePrice".to_string(), num(product.base_price));
    item.insert("unit".to_string(), AttributeValue::S(product.unit.clone()));
    item.insert("unitsPerCase".to_string(), num(product.units_per_case));
    item.insert(
        "supplierId".to_string(),
        AttributeValue::S(product.supplier_id.to_string()),
    );
    item.insert(
        "supplierName".to_string(),
        AttributeValue::S(product.supplier_name.clone()),
    );
    item.insert("stockLevel".to_string(), num(product.stock_level));
    item.insert(
        "minimumOrderQuantity".to_string(),
        num(product.minimum_order_quantity),
    );
    item.insert(
        "isActive".to_string(),
        AttributeValue::Bool(product.active),
    );
    item.insert(
        "lastUpdated".to_string(),
        AttributeValue::S(product.last_updated.to_rfc3339()),
    );

    insert_string_set(&mut item, "imageUrls", &product.image_urls);

    item
}

/// Convert a DynamoDB item to a Product.
pub fn item_to_product(item: &Item) -> Result<Product, RepositoryError> {
    Ok(Product {
        id: get_uuid(item, "productId")?,
        name: get_string(item, "name")?,
        description: get_string(item, "description")?,
        category: get_string(item, "category")?,
        sub_category: get_string(item, "subCategory")?,
        base_price: get_decimal(item, "basePrice")?,
        unit: get_string(item, "unit")?,
        units_per_case: get_u32(item, "unitsPerCase")?,
        supplier_id: get_uuid(item, "supplierId")?,
        supplier_name: get_string(item, "supplierName")?,
        stock_level: get_i32(item, "stockLevel")?,
        minimum_order_quantity: get_u32(item, "minimumOrderQuantity")?,
        active: get_bool(item, "isActive")?,
        image_urls: get_string_set(item, "imageUrls"),
        last_updated: get_datetime(item, "lastUpdated")?,
    })
}
