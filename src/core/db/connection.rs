/// Connection Management Module
///
/// This module owns the single live PostgreSQL connection for the process
/// lifetime. The handle is created once at startup and released once at
/// shutdown; `Drop` guarantees release on every exit path, including the
/// error path out of the menu loop.
use crate::core::{HotelSqlError, Result};
use postgres::{Client, Config, NoTls};
use tracing::{debug, info};

/// Handle for the one open database connection.
///
/// The handle is either open or closed, never partially open. It is not
/// safe for concurrent use; the design assumes a single caller at a time.
pub struct ConnectionHandle {
    /// Active client (None once closed)
    client: Option<Client>,
    /// Database name, kept for log messages
    dbname: String,
}

impl ConnectionHandle {
    /// Opens a blocking connection to `dbname` at `host:port`.
    ///
    /// An empty `password` is simply not sent, matching servers configured
    /// for trust authentication.
    ///
    /// # Errors
    ///
    /// Returns `HotelSqlError::Connection` when the server is unreachable or
    /// rejects the credentials. The caller is expected to log the cause and
    /// terminate; there is no retry.
    pub fn connect(
        host: &str,
        port: u16,
        dbname: &str,
        user: &str,
        password: &str,
    ) -> Result<Self> {
        info!("connecting to {} at {}:{} as {}", dbname, host, port, user);

        let mut config = Config::new();
        config.host(host).port(port).dbname(dbname).user(user);
        if !password.is_empty() {
            config.password(password);
        }

        let client = config.connect(NoTls).map_err(HotelSqlError::Connection)?;
        Ok(ConnectionHandle {
            client: Some(client),
            dbname: dbname.to_string(),
        })
    }

    /// Returns the name of the connected database.
    pub fn dbname(&self) -> &str {
        &self.dbname
    }

    /// Checks whether the handle still holds a live connection.
    pub fn is_open(&self) -> bool {
        self.client.is_some()
    }

    /// Releases the underlying connection if it is currently open.
    ///
    /// Idempotent and infallible: by the time close is called the program
    /// is exiting, so a failure while closing is discarded.
    pub fn close(&mut self) {
        if let Some(client) = self.client.take() {
            debug!("closing connection to {}", self.dbname);
            let _ = client.close();
        }
    }

    /// Gives the executor access to the live client.
    pub(crate) fn client_mut(&mut self) -> Result<&mut Client> {
        self.client.as_mut().ok_or(HotelSqlError::ConnectionClosed)
    }
}

impl std::fmt::Debug for ConnectionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionHandle")
            .field("open", &self.client.is_some())
            .field("dbname", &self.dbname)
            .finish()
    }
}

impl Drop for ConnectionHandle {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed_handle() -> ConnectionHandle {
        ConnectionHandle {
            client: None,
            dbname: "hotel".to_string(),
        }
    }

    #[test]
    fn test_connect_failure_is_connection_error() {
        // Port 1 is never a postgres listener; the attempt must fail fast.
        let result = ConnectionHandle::connect("127.0.0.1", 1, "hotel", "postgres", "");
        assert!(result.is_err());
        match result.unwrap_err() {
            HotelSqlError::Connection(_) => {}
            other => panic!("Expected Connection error, got {other:?}"),
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut handle = closed_handle();
        assert!(!handle.is_open());
        handle.close();
        handle.close();
        assert!(!handle.is_open());
    }

    #[test]
    fn test_statement_on_closed_handle_is_rejected() {
        let mut handle = closed_handle();
        match handle.client_mut() {
            Err(HotelSqlError::ConnectionClosed) => {}
            _ => panic!("Expected ConnectionClosed"),
        }
    }

    #[test]
    fn test_dbname_tracking() {
        let handle = closed_handle();
        assert_eq!(handle.dbname(), "hotel");
    }
}
