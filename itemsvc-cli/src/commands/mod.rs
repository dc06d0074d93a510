//! Command implementations for the itemsvc CLI

pub mod serve;

pub use serve::run_serve;
