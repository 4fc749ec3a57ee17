//! Service Module
//!
//! Business operations over the catalog, cache and media host.

mod catalog;

#[cfg(test)]
mod property_tests;
#[cfg(test)]
mod test_support;

pub use catalog::CatalogService;
