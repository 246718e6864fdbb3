pub mod advice_api;
pub mod aggregate;
pub mod args;
pub mod cli;
pub mod config;
pub mod filter;
pub mod model;
pub mod sheet_api;
pub mod terminal;
