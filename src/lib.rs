//! Outlay - command-line personal expense tracker
//!
//! Records expenses with a title, amount, date, and category, totals
//! spending against an optional monthly budget, and renders simple
//! analytics. State is a single JSON file rewritten atomically after
//! every mutation.
//!
//! # Architecture
//!
//! - `config`: settings (including the monthly limit) and path management
//! - `error`: custom error types
//! - `models`: expense records, categories, money, identifiers
//! - `storage`: JSON file storage layer
//! - `services`: mutation/persistence policy and budget comparison
//! - `reports`: read-only aggregation queries
//! - `display`: terminal formatting
//! - `cli`: clap command handlers
//! - `diag`: append-only diagnostic log

pub mod cli;
pub mod config;
pub mod diag;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{OutlayError, OutlayResult};
