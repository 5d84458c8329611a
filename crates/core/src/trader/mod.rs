mod types;

pub use types::{PaymentMethod, Trader, TraderStatus, TraderTier, TraderType};
