pub mod batch;
pub mod config;
pub mod errors;
pub mod factories;
pub mod products;
pub mod registry;
pub mod render;
pub mod types;
