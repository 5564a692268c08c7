pub mod lookup;
pub mod models;
pub mod query;
