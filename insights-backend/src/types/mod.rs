pub mod datetime;
pub mod query;

pub use datetime::ActivityTimestamp;
pub use query::{deserialize_id_from_string_or_number, first_query_value};
