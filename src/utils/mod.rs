pub mod database;
pub mod envelope;
pub mod id;
pub mod validation;
