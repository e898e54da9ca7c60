//! Query services over the in-memory catalog

pub mod catalog;
pub mod loader;
pub mod queries;
pub mod report;

pub use catalog::Catalog;
