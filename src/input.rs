/// Prompted Input Module
///
/// An explicit input-source handle for the interactive session. The
/// prompter owns the line reader and the prompt output stream and is passed
/// to each menu handler, so there is no ambient global reader state.
use crate::core::{HotelSqlError, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

/// Line-oriented prompter: prints a prompt, reads one line, parses it.
///
/// Parsing failures surface as `HotelSqlError::Input` so the enclosing
/// menu handler can report them and the session can continue.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Prompts for and reads a single line, with the line terminator
    /// removed. End of input is an `Input` error.
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        let read = self.input.read_line(&mut buf)?;
        if read == 0 {
            return Err(HotelSqlError::Input("unexpected end of input".to_string()));
        }
        Ok(buf.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
    }

    /// Prompts for a 32-bit integer field (ids, room numbers, counts).
    pub fn int(&mut self, prompt: &str) -> Result<i32> {
        let text = self.line(prompt)?;
        text.trim()
            .parse()
            .map_err(|_| HotelSqlError::Input(format!("not a whole number: {}", text)))
    }

    /// Prompts for a 64-bit integer field (phone numbers).
    pub fn long(&mut self, prompt: &str) -> Result<i64> {
        let text = self.line(prompt)?;
        text.trim()
            .parse()
            .map_err(|_| HotelSqlError::Input(format!("not a whole number: {}", text)))
    }

    /// Prompts for a decimal field (prices).
    pub fn decimal(&mut self, prompt: &str) -> Result<f64> {
        let text = self.line(prompt)?;
        text.trim()
            .parse()
            .map_err(|_| HotelSqlError::Input(format!("not a number: {}", text)))
    }

    /// Prompts for a calendar date. Accepts `YYYY-MM-DD` and `MM/DD/YYYY`.
    pub fn date(&mut self, prompt: &str) -> Result<NaiveDate> {
        let text = self.line(prompt)?;
        let trimmed = text.trim();
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%m/%d/%Y"))
            .map_err(|_| {
                HotelSqlError::Input(format!(
                    "not a date (YYYY-MM-DD or MM/DD/YYYY): {}",
                    trimmed
                ))
            })
    }

    /// Prompts for a menu choice, re-prompting until a number is given.
    /// End of input propagates so a piped session terminates cleanly.
    pub fn choice(&mut self, prompt: &str) -> Result<u32> {
        loop {
            let text = self.line(prompt)?;
            match text.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Your input is invalid!")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_line_strips_terminator() {
        let mut p = prompter("John\r\n");
        assert_eq!(p.line("name: ").unwrap(), "John");
        assert_eq!(String::from_utf8(p.output).unwrap(), "name: ");
    }

    #[test]
    fn test_line_at_end_of_input_errors() {
        let mut p = prompter("");
        match p.line("name: ") {
            Err(HotelSqlError::Input(msg)) => assert!(msg.contains("end of input")),
            other => panic!("Expected Input error, got {other:?}"),
        }
    }

    #[test]
    fn test_int_parsing() {
        let mut p = prompter(" 42 \nabc\n");
        assert_eq!(p.int("id: ").unwrap(), 42);
        assert!(matches!(p.int("id: "), Err(HotelSqlError::Input(_))));
    }

    #[test]
    fn test_decimal_parsing() {
        let mut p = prompter("149.99\n");
        assert_eq!(p.decimal("price: ").unwrap(), 149.99);
    }

    #[test]
    fn test_date_accepts_both_formats() {
        let mut p = prompter("2024-03-15\n03/15/2024\n15-03-2024\n");
        let iso = p.date("date: ").unwrap();
        let us = p.date("date: ").unwrap();
        assert_eq!(iso, us);
        assert!(matches!(p.date("date: "), Err(HotelSqlError::Input(_))));
    }

    #[test]
    fn test_choice_loops_past_junk() {
        let mut p = prompter("abc\n\n7\n");
        assert_eq!(p.choice("choice: ").unwrap(), 7);
        let echoed = String::from_utf8(p.output).unwrap();
        assert_eq!(echoed.matches("Your input is invalid!").count(), 2);
    }

    #[test]
    fn test_choice_propagates_end_of_input() {
        let mut p = prompter("abc\n");
        assert!(matches!(p.choice("choice: "), Err(HotelSqlError::Input(_))));
    }
}
