//! outlay-core
//!
//! Session state and the derived-view pipeline for the expense dashboard.
//! Depends on outlay-domain. No CLI, no terminal I/O, no storage.

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod expense_service;
pub mod filter_service;
pub mod format;
pub mod id;
pub mod months;
pub mod seed;
pub mod summary_service;
pub mod tracker;

pub use chart::*;
pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use expense_service::*;
pub use filter_service::*;
pub use format::*;
pub use id::*;
pub use months::*;
pub use seed::*;
pub use summary_service::*;
pub use tracker::*;
