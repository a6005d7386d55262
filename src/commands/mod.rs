pub mod admin;
pub mod drinks;
pub mod orders;
pub mod settings;
pub mod statistics;
