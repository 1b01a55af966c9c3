pub mod health;
pub mod lookup;
pub mod queries;
pub mod records;
pub mod stats;

pub use health::health_check;
pub use lookup::lookup;
pub use queries::get_queries;
pub use records::{create_record, get_records, get_zone};
pub use stats::get_stats;
