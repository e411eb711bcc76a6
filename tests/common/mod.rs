pub mod fixtures;
pub mod postgrest;
