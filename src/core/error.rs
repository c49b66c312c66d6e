/// hotelsql Error Module
///
/// This module defines the error types for the hotelsql client and the
/// `Result` alias used throughout the crate.
use thiserror::Error;

/// Error type covering every failure the client can surface.
///
/// The two database variants mirror the two phases of the session:
/// - `Connection` is raised only while establishing the initial connection
///   and is fatal (the process exits before showing the menu).
/// - `Statement` is raised by a single update or query, is reported by the
///   enclosing menu handler, and the session continues.
#[derive(Error, Debug)]
pub enum HotelSqlError {
    /// Failure to establish the database connection at startup
    #[error("Connection error: {0}")]
    Connection(#[source] postgres::Error),

    /// A statement was issued against a handle that has been closed
    #[error("Connection error: connection is closed")]
    ConnectionClosed,

    /// The database rejected a statement (syntax, constraint, type mismatch)
    #[error("Statement error: {0}")]
    Statement(#[source] postgres::Error),

    /// Prompt input could not be read or parsed
    #[error("Input error: {0}")]
    Input(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failures writing to the output stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result to use HotelSqlError as the error type.
pub type Result<T> = std::result::Result<T, HotelSqlError>;
