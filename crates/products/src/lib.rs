//! `fulfilment-products` — product catalogue records.

pub mod product;

pub use product::{Product, ProductRepository};
