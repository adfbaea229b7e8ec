//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking directory:
//! - Error type used by the persistence layer
//! - Configuration object and its resolution
//! - Persisted record types and database initialisation
//! - Date/time display formatting

pub mod config;
pub mod datetime;
pub mod db;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
