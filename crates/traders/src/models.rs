use serde::Deserialize;

use spazalink_core::trader::{Trader, TraderType};

/// Request payload for registering a new trader.
///
/// Deliberately carries no status, tier or verification fields: those are
/// assigned by the creation path and never trusted from the caller.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrader {
    pub business_name: String,
    pub owner_name: String,
    pub phone_number: String,
    pub area: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub landmark: Option<String>,
    #[serde(rename = "type")]
    pub trader_type: TraderType,
    #[serde(default)]
    pub product_categories: Vec<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateTrader {
    /// Converts the registration request into a Trader with a fresh id
    /// and the creation defaults applied.
    pub fn into_trader(self) -> Trader {
        let mut trader = Trader::new(
            self.business_name,
            self.owner_name,
            self.phone_number,
            self.area,
            self.trader_type,
        );
        trader.street = self.street;
        trader.landmark = self.landmark;
        trader.product_categories = self.product_categories;
        trader.whatsapp_number = self.whatsapp_number;
        trader.email = self.email;
        trader
    }
}
