//! Core types for quote ingestion

pub mod quote;

pub use quote::Quote;
