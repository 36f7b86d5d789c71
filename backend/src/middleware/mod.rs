//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns such
//! as correlation identifiers.

pub mod correlation;

pub use correlation::Correlation;
