pub mod config;
pub mod market;
