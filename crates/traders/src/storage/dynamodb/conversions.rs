//! DynamoDB attribute conversion functions for traders.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! the Trader entity. Testable in isolation without DynamoDB access.
//!
//! Enum fields are stored as their symbolic names and fail loudly on an
//! unknown symbol. Optional contact fields are omitted when empty; the
//! list fields are unordered string sets, written only when non-empty.

use aws_sdk_dynamodb::types::AttributeValue;

use spazalink_core::storage::RepositoryError;
use spazalink_core::trader::{PaymentMethod, Trader, TraderStatus, TraderTier, TraderType};
use spazalink_dynamodb::attrs::{
    get_bool, get_datetime, get_optional_string, get_string, get_string_set, get_uuid,
    insert_optional_string, insert_string_set, Item,
};

/// Convert a Trader to a DynamoDB item.
pub fn trader_to_item(trader: &Trader) -> Item {
    let mut item = Item::new();

    item.insert("ID".to_string(), AttributeValue::S(trader.id.to_string()));
    item.insert(
        "BusinessName".to_string(),
        AttributeValue::S(trader.business_name.clone()),
    );
    item.insert(
        "OwnerName".to_string(),
        AttributeValue::S(trader.owner_name.clone()),
    );
    item.insert(
        "PhoneNumber".to_string(),
        AttributeValue::S(trader.phone_number.clone()),
    );
    item.insert("Area".to_string(), AttributeValue::S(trader.area.clone()));
    item.insert(
        "Street".to_string(),
        AttributeValue::S(trader.street.clone()),
    );
    item.insert(
        "Type".to_string(),
        AttributeValue::S(trader.trader_type.as_str().to_string()),
    );
    item.insert(
        "Status".to_string(),
        AttributeValue::S(trader.status.as_str().to_string()),
    );
    item.insert(
        "Tier".to_string(),
        AttributeValue::S(trader.tier.as_str().to_string()),
    );
    item.insert(
        "IsVerified".to_string(),
        AttributeValue::Bool(trader.verified),
    );
    item.insert(
        "RegistrationDate".to_string(),
        AttributeValue::S(trader.registered_at.to_rfc3339()),
    );

    insert_string_set(&mut item, "ProductCategories", &trader.product_categories);

    let methods: Vec<String> = trader
        .payment_methods
        .iter()
        .map(|m| m.as_str().to_string())
        .collect();
    insert_string_set(&mut item, "PaymentMethods", &methods);

    insert_optional_string(&mut item, "Landmark", trader.landmark.as_deref());
    insert_optional_string(&mut item, "IDNumber", trader.id_number.as_deref());
    insert_optional_string(
        &mut item,
        "WhatsappNumber",
        trader.whatsapp_number.as_deref(),
    );
    insert_optional_string(&mut item, "Email", trader.email.as_deref());

    item
}

/// Convert a DynamoDB item to a Trader.
///
/// Rows written before payment methods were persisted have no
/// `PaymentMethods` attribute; those decode to the cash-only default.
pub fn item_to_trader(item: &Item) -> Result<Trader, RepositoryError> {
    let methods = get_string_set(item, "PaymentMethods");
    let payment_methods = if methods.is_empty() {
        vec![PaymentMethod::Cash]
    } else {
        methods
            .iter()
            .map(|m| PaymentMethod::parse(m))
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(Trader {
        id: get_uuid(item, "ID")?,
        business_name: get_string(item, "BusinessName")?,
        owner_name: get_string(item, "OwnerName")?,
        phone_number: get_string(item, "PhoneNumber")?,
        area: get_string(item, "Area")?,
        street: get_string(item, "Street")?,
        landmark: get_optional_string(item, "Landmark"),
        trader_type: TraderType::parse(&get_string(item, "Type")?)?,
        product_categories: get_string_set(item, "ProductCategories"),
        status: TraderStatus::parse(&get_string(item, "Status")?)?,
        tier: TraderTier::parse(&get_string(item, "Tier")?)?,
        verified: get_bool(item, "IsVerified")?,
        registered_at: get_datetime(item, "RegistrationDate")?,
        id_number: get_optional_string(item, "IDNumber"),
        payment_methods,
        whatsapp_number: get_optional_string(item, "WhatsappNumber"),
        email: get_optional_string(item, "Email"),
    })
}
