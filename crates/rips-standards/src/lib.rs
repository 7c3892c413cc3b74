#![deny(unsafe_code)]

pub mod catalog;
pub mod csv;
pub mod error;

pub use crate::catalog::{CatalogRegistry, CatalogSource, names};
pub use crate::csv::load_catalog_csv;
pub use crate::error::StandardsError;
