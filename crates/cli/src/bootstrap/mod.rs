mod config;
mod database;
mod logging;

pub use config::load_config;
pub use database::{init_database, seed_defaults};
pub use logging::init_logging;
