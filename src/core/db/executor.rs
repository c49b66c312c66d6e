/// Statement Execution Module
///
/// The single choke point through which all SQL text reaches the database
/// and through which all query results are rendered. User-supplied values
/// are always bound as statement parameters (`$1..$n`); no SQL is ever
/// assembled by concatenating raw input.
use crate::core::db::ConnectionHandle;
use crate::core::{HotelSqlError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use fallible_iterator::FallibleIterator;
use postgres::types::ToSql;
use postgres::Row;
use std::io::{self, Write};
use tracing::debug;

/// Executes updates and queries against the open connection.
///
/// Each call is a single request/response cycle; there is no multi-step
/// protocol state beyond the handle being open or closed.
pub struct StatementExecutor<'a> {
    handle: &'a mut ConnectionHandle,
}

impl<'a> StatementExecutor<'a> {
    /// Creates an executor borrowing the session's connection handle.
    pub fn new(handle: &'a mut ConnectionHandle) -> Self {
        StatementExecutor { handle }
    }

    /// Executes a statement for which no result set is expected (inserts,
    /// updates, deletes, schema changes). Produces no output on success.
    ///
    /// # Errors
    ///
    /// Returns `HotelSqlError::Statement` when the database rejects the
    /// statement (constraint violation, syntax error, type mismatch). The
    /// error propagates to the caller and the statement is not retried.
    pub fn execute_update(&mut self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<()> {
        let client = self.handle.client_mut()?;
        let affected = client.execute(sql, params).map_err(HotelSqlError::Statement)?;
        debug!("update affected {} row(s)", affected);
        Ok(())
    }

    /// Executes a query and streams its result set to standard output as a
    /// tab-separated table, returning the number of rows printed.
    ///
    /// Callers for which an empty result is meaningful must check the
    /// returned count themselves; the executor prints nothing for zero rows.
    pub fn execute_query(&mut self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<u64> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute_query_to(&mut out, sql, params)
    }

    /// Executes a query and streams its result set to `out`.
    ///
    /// Output contract:
    /// - the first emitted line is the column names in the result's native
    ///   order, printed once, only when at least one row is returned, and
    ///   immediately before the first data row;
    /// - each row is its values in column order, tab-separated, nulls
    ///   rendered as empty text;
    /// - rows appear exactly in the order the database returns them, written
    ///   incrementally as they are fetched rather than buffered.
    ///
    /// # Errors
    ///
    /// Returns `HotelSqlError::Statement` on execution failure; the row
    /// iterator is dropped, releasing any partially-consumed result, before
    /// the error propagates.
    pub fn execute_query_to<W: Write>(
        &mut self,
        out: &mut W,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<u64> {
        let client = self.handle.client_mut()?;
        let mut rows = client
            .query_raw(sql, params.iter().copied())
            .map_err(HotelSqlError::Statement)?;

        let mut printer = TabularPrinter::new(out);
        while let Some(row) = rows.next().map_err(HotelSqlError::Statement)? {
            let header: Vec<&str> = row.columns().iter().map(|c| c.name()).collect();
            let fields = row_text(&row)?;
            printer.row(&header, &fields)?;
        }
        Ok(printer.row_count())
    }
}

/// Lazily-headed tab-separated table writer.
///
/// Tracks how many data rows have been written and emits the header line
/// exactly once, immediately before the first data row. A printer that
/// never receives a row writes nothing at all.
pub struct TabularPrinter<W: Write> {
    out: W,
    rows: u64,
}

impl<W: Write> TabularPrinter<W> {
    pub fn new(out: W) -> Self {
        TabularPrinter { out, rows: 0 }
    }

    /// Writes one data row, preceded by the header line if this is the
    /// first row. Flushes after each row so output appears as rows stream.
    pub fn row<H: AsRef<str>, F: AsRef<str>>(
        &mut self,
        header: &[H],
        fields: &[F],
    ) -> io::Result<()> {
        if self.rows == 0 {
            write_line(&mut self.out, header)?;
        }
        write_line(&mut self.out, fields)?;
        self.out.flush()?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far (the header is not counted).
    pub fn row_count(&self) -> u64 {
        self.rows
    }
}

fn write_line<W: Write, S: AsRef<str>>(out: &mut W, fields: &[S]) -> io::Result<()> {
    let mut first = true;
    for field in fields {
        if !first {
            out.write_all(b"\t")?;
        }
        out.write_all(field.as_ref().as_bytes())?;
        first = false;
    }
    out.write_all(b"\n")
}

/// Renders every column of a row as display text.
fn row_text(row: &Row) -> Result<Vec<String>> {
    (0..row.len()).map(|idx| cell_text(row, idx)).collect()
}

/// Renders a single column value as display text, with SQL NULL as empty
/// text. Covers the types the hotel schema produces; anything else renders
/// as a bracketed type-name placeholder.
fn cell_text(row: &Row, idx: usize) -> Result<String> {
    let ty = row.columns()[idx].type_();
    let text = match ty.name() {
        "bool" => row
            .try_get::<_, Option<bool>>(idx)
            .map_err(HotelSqlError::Statement)?
            .map(|v| v.to_string()),
        "int2" => row
            .try_get::<_, Option<i16>>(idx)
            .map_err(HotelSqlError::Statement)?
            .map(|v| v.to_string()),
        "int4" => row
            .try_get::<_, Option<i32>>(idx)
            .map_err(HotelSqlError::Statement)?
            .map(|v| v.to_string()),
        "int8" => row
            .try_get::<_, Option<i64>>(idx)
            .map_err(HotelSqlError::Statement)?
            .map(|v| v.to_string()),
        "float4" => row
            .try_get::<_, Option<f32>>(idx)
            .map_err(HotelSqlError::Statement)?
            .map(|v| v.to_string()),
        "float8" => row
            .try_get::<_, Option<f64>>(idx)
            .map_err(HotelSqlError::Statement)?
            .map(|v| v.to_string()),
        "text" | "varchar" | "bpchar" | "name" => row
            .try_get::<_, Option<String>>(idx)
            .map_err(HotelSqlError::Statement)?,
        "date" => row
            .try_get::<_, Option<NaiveDate>>(idx)
            .map_err(HotelSqlError::Statement)?
            .map(|d| d.format("%Y-%m-%d").to_string()),
        "timestamp" => row
            .try_get::<_, Option<NaiveDateTime>>(idx)
            .map_err(HotelSqlError::Statement)?
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()),
        other => return Ok(format!("<{}>", other)),
    };
    Ok(text.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printer_writes_nothing_for_zero_rows() {
        let mut buf = Vec::new();
        let printer = TabularPrinter::new(&mut buf);
        assert_eq!(printer.row_count(), 0);
        drop(printer);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_printer_emits_header_once_before_first_row() {
        let mut buf = Vec::new();
        let mut printer = TabularPrinter::new(&mut buf);
        let header = ["hotelid", "roomno", "price"];
        printer.row(&header, &["1", "42", "150.00"]).unwrap();
        printer.row(&header, &["1", "43", "95.50"]).unwrap();
        assert_eq!(printer.row_count(), 2);
        drop(printer);

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            "hotelid\troomno\tprice\n1\t42\t150.00\n1\t43\t95.50\n"
        );
    }

    #[test]
    fn test_printer_preserves_empty_fields() {
        let mut buf = Vec::new();
        let mut printer = TabularPrinter::new(&mut buf);
        printer.row(&["a", "b", "c"], &["1", "", "3"]).unwrap();
        drop(printer);

        let output = String::from_utf8(buf).unwrap();
        let data_line = output.lines().nth(1).unwrap();
        assert_eq!(data_line.split('\t').count(), 3);
        assert_eq!(data_line, "1\t\t3");
    }

    #[test]
    fn test_printer_single_column() {
        let mut buf = Vec::new();
        let mut printer = TabularPrinter::new(&mut buf);
        printer.row(&["x"], &["1"]).unwrap();
        assert_eq!(printer.row_count(), 1);
        drop(printer);
        assert_eq!(String::from_utf8(buf).unwrap(), "x\n1\n");
    }
}
