mod search;
mod types;

pub use search::{filter_by_price, AccessPlan, ProductFilter};
pub use types::Product;
