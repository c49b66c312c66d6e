/// Core Module for hotelsql
///
/// This module contains the fundamental components of the hotelsql client.
/// It provides shared infrastructure for database access and error handling.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{HotelSqlError, Result};
