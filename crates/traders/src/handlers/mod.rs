pub mod health;
pub mod traders;
