//! outlay-domain
//!
//! Pure domain models for the expense dashboard (expenses, categories,
//! month keys, filter selections, spending summaries).
//! No I/O, no services. Only data types and core enums.

pub mod category;
pub mod common;
pub mod expense;
pub mod filter;
pub mod summary;

pub use category::*;
pub use common::*;
pub use expense::*;
pub use filter::*;
pub use summary::*;
