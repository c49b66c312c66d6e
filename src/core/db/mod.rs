/// Database Module
///
/// This module provides the database access layer for hotelsql, split into
/// two concerns:
/// - **Connection Management** (`connection.rs`): owns the single live
///   connection for the process lifetime
/// - **Statement Execution** (`executor.rs`): the choke point through which
///   all SQL reaches the database and all query results are rendered
///
/// All operations use the standardized `HotelSqlError` type for error
/// propagation.
pub mod connection;
pub mod executor;

pub use connection::*;
pub use executor::*;
