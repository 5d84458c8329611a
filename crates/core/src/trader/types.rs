use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::RepositoryError;

/// What kind of trader this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraderType {
    /// Small convenience store.
    SpazaShop,
    /// Mobile or market stall.
    StreetVendor,
    /// School or office based kiosk.
    TuckShop,
    /// Operating from home.
    HomeBusiness,
    Other,
}

/// Current registration status of a trader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraderStatus {
    /// Just registered, not yet verified.
    PendingVerification,
    Active,
    Suspended,
    Inactive,
    Banned,
}

/// Tier based on monthly turnover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraderTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Payment methods a trader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    /// SnapScan, Zapper, etc.
    #[serde(rename = "QRCode")]
    QrCode,
    MobileMoney,
    Card,
    CashOnDelivery,
    #[serde(rename = "EFT")]
    Eft,
}

impl TraderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraderType::SpazaShop => "SpazaShop",
            TraderType::StreetVendor => "StreetVendor",
            TraderType::TuckShop => "TuckShop",
            TraderType::HomeBusiness => "HomeBusiness",
            TraderType::Other => "Other",
        }
    }

    /// Parses a stored symbol. Unknown symbols are an error, never a
    /// silent default.
    pub fn parse(s: &str) -> Result<Self, RepositoryError> {
        match s {
            "SpazaShop" => Ok(TraderType::SpazaShop),
            "StreetVendor" => Ok(TraderType::StreetVendor),
            "TuckShop" => Ok(TraderType::TuckShop),
            "HomeBusiness" => Ok(TraderType::HomeBusiness),
            "Other" => Ok(TraderType::Other),
            _ => Err(RepositoryError::InvalidData(format!(
                "Unknown trader type: {}",
                s
            ))),
        }
    }
}

impl TraderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraderStatus::PendingVerification => "PendingVerification",
            TraderStatus::Active => "Active",
            TraderStatus::Suspended => "Suspended",
            TraderStatus::Inactive => "Inactive",
            TraderStatus::Banned => "Banned",
        }
    }

    pub fn parse(s: &str) -> Result<Self, RepositoryError> {
        match s {
            "PendingVerification" => Ok(TraderStatus::PendingVerification),
            "Active" => Ok(TraderStatus::Active),
            "Suspended" => Ok(TraderStatus::Suspended),
            "Inactive" => Ok(TraderStatus::Inactive),
            "Banned" => Ok(TraderStatus::Banned),
            _ => Err(RepositoryError::InvalidData(format!(
                "Unknown trader status: {}",
                s
            ))),
        }
    }
}

impl TraderTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraderTier::Bronze => "Bronze",
            TraderTier::Silver => "Silver",
            TraderTier::Gold => "Gold",
            TraderTier::Platinum => "Platinum",
        }
    }

    pub fn parse(s: &str) -> Result<Self, RepositoryError> {
        match s {
            "Bronze" => Ok(TraderTier::Bronze),
            "Silver" => Ok(TraderTier::Silver),
            "Gold" => Ok(TraderTier::Gold),
            "Platinum" => Ok(TraderTier::Platinum),
            _ => Err(RepositoryError::InvalidData(format!(
                "Unknown trader tier: {}",
                s
            ))),
        }
    }
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::QrCode => "QRCode",
            PaymentMethod::MobileMoney => "MobileMoney",
            PaymentMethod::Card => "Card",
            PaymentMethod::CashOnDelivery => "CashOnDelivery",
            PaymentMethod::Eft => "EFT",
        }
    }

    pub fn parse(s: &str) -> Result<Self, RepositoryError> {
        match s {
            "Cash" => Ok(PaymentMethod::Cash),
            "QRCode" => Ok(PaymentMethod::QrCode),
            "MobileMoney" => Ok(PaymentMethod::MobileMoney),
            "Card" => Ok(PaymentMethod::Card),
            "CashOnDelivery" => Ok(PaymentMethod::CashOnDelivery),
            "EFT" => Ok(PaymentMethod::Eft),
            _ => Err(RepositoryError::InvalidData(format!(
                "Unknown payment method: {}",
                s
            ))),
        }
    }
}

/// A registered trader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trader {
    pub id: Uuid,
    pub business_name: String,
    pub owner_name: String,
    pub phone_number: String,
    /// Geographical area the trader operates in. This is the scoping
    /// dimension for listings; no secondary index backs it.
    pub area: String,
    pub street: String,
    pub landmark: Option<String>,
    pub trader_type: TraderType,
    pub product_categories: Vec<String>,
    pub status: TraderStatus,
    pub tier: TraderTier,
    pub verified: bool,
    pub registered_at: DateTime<Utc>,
    /// Simplified KYC identity number.
    pub id_number: Option<String>,
    pub payment_methods: Vec<PaymentMethod>,
    pub whatsapp_number: Option<String>,
    pub email: Option<String>,
}

impl Trader {
    /// Creates a new trader registration with a generated id and the
    /// creation defaults applied.
    pub fn new(
        business_name: impl Into<String>,
        owner_name: impl Into<String>,
        phone_number: impl Into<String>,
        area: impl Into<String>,
        trader_type: TraderType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            business_name: business_name.into(),
            owner_name: owner_name.into(),
            phone_number: phone_number.into(),
            area: area.into(),
            street: String::new(),
            landmark: None,
            trader_type,
            product_categories: Vec::new(),
            status: TraderStatus::PendingVerification,
            tier: TraderTier::Bronze,
            verified: false,
            registered_at: Utc::now(),
            id_number: None,
            payment_methods: vec![PaymentMethod::Cash],
            whatsapp_number: None,
            email: None,
        }
    }

    /// Sets a specific ID for this trader (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Resets status, tier, verification and registration timestamp to
    /// their creation defaults.
    ///
    /// The creation path never trusts caller-supplied values in these
    /// fields; repositories apply this before the first write.
    pub fn registration_defaults(mut self) -> Self {
        self.status = TraderStatus::PendingVerification;
        self.tier = TraderTier::Bronze;
        self.verified = false;
        self.registered_at = Utc::now();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trader_defaults() {
        let trader = Trader::new(
            "Test Spaza",
            "John Doe",
            "+27821234567",
            "Soweto",
            TraderType::SpazaShop,
        );

        assert_eq!(trader.status, TraderStatus::PendingVerification);
        assert_eq!(trader.tier, TraderTier::Bronze);
        assert!(!trader.verified);
        assert_eq!(trader.payment_methods, vec![PaymentMethod::Cash]);
        assert!(trader.landmark.is_none());
        assert!(trader.id_number.is_none());
    }

    #[test]
    fn test_registration_defaults_discards_caller_values() {
        let mut trader = Trader::new(
            "Test Spaza",
            "John Doe",
            "+27821234567",
            "Soweto",
            TraderType::StreetVendor,
        );
        trader.status = TraderStatus::Active;
        trader.tier = TraderTier::Platinum;
        trader.verified = true;

        let trader = trader.registration_defaults();

        assert_eq!(trader.status, TraderStatus::PendingVerification);
        assert_eq!(trader.tier, TraderTier::Bronze);
        assert!(!trader.verified);
        // Identity and business data survive untouched.
        assert_eq!(trader.business_name, "Test Spaza");
        assert_eq!(trader.trader_type, TraderType::StreetVendor);
    }

    #[test]
    fn test_trader_type_symbol_round_trip() {
        for trader_type in [
            TraderType::SpazaShop,
            TraderType::StreetVendor,
            TraderType::TuckShop,
            TraderType::HomeBusiness,
            TraderType::Other,
        ] {
            assert_eq!(TraderType::parse(trader_type.as_str()).unwrap(), trader_type);
        }
    }

    #[test]
    fn test_status_symbol_round_trip() {
        for status in [
            TraderStatus::PendingVerification,
            TraderStatus::Active,
            TraderStatus::Suspended,
            TraderStatus::Inactive,
            TraderStatus::Banned,
        ] {
            assert_eq!(TraderStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_payment_method_symbols() {
        assert_eq!(PaymentMethod::QrCode.as_str(), "QRCode");
        assert_eq!(PaymentMethod::Eft.as_str(), "EFT");
        assert_eq!(
            PaymentMethod::parse("QRCode").unwrap(),
            PaymentMethod::QrCode
        );
    }

    #[test]
    fn test_unknown_symbols_are_errors() {
        assert!(TraderType::parse("Mall").is_err());
        assert!(TraderStatus::parse("pendingverification").is_err());
        assert!(TraderTier::parse("Diamond").is_err());
        assert!(PaymentMethod::parse("Cheque").is_err());
    }
}
