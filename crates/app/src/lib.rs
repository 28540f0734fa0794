//! Store driver: seeds the inventory, runs the fixed sequence of sales,
//! restocks and repricing, and writes the inventory report.

pub mod config;
pub mod driver;

pub use config::AppConfig;
pub use driver::{run, seed_inventory};
