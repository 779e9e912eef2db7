//! Quote provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` trait that every upstream source implements
//! - The Yahoo chart provider used in production
//!
//! Providers only fetch and extract. Choosing between spot, extended-hours
//! and futures prices happens in the resolver module.

mod traits;

pub mod yahoo;

// Re-exports
pub use traits::QuoteProvider;
