pub mod api;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod filter;
pub mod fixtures;
pub mod formatting;
pub mod model;
pub mod pagination;
pub mod roster;
pub mod stars;
pub mod stats;
pub mod table;
pub mod transactions;
pub mod tui;

#[cfg(any(test, feature = "development"))]
pub mod dev;
