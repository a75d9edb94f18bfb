//! Report Builder: filter, aggregate, shape, and persist the report.

pub mod aggregate;
pub mod builder;
pub mod filter;
pub mod writer;
