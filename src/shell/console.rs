//! Prompt/response layer over generic input and output streams.
//!
//! Every prompt returns `Ok(None)` when input reaches EOF so callers can
//! unwind cleanly instead of spinning on a closed stdin.

use std::io::{BufRead, Write};

use crate::error::AppError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Write a line of output.
    pub fn say(&mut self, msg: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", msg)?;
        Ok(())
    }

    /// Prompt and read one line, stripped of its trailing newline.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Prompt until a non-empty (trimmed) value is entered.
    pub fn prompt_non_empty(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
            self.say("Expected a value, please try again.")?;
        }
    }

    /// Prompt until a valid integer is entered.
    pub fn prompt_integer(&mut self, prompt: &str) -> Result<Option<i64>, AppError> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Expected an integer as input, please try again.")?,
            }
        }
    }

    /// Prompt until a non-negative integer is entered.
    pub fn prompt_quantity(&mut self, prompt: &str) -> Result<Option<i64>, AppError> {
        loop {
            let Some(value) = self.prompt_integer(prompt)? else {
                return Ok(None);
            };
            if value >= 0 {
                return Ok(Some(value));
            }
            self.say("Stock level must not be negative, please try again.")?;
        }
    }

    /// Prompt for an optional non-negative integer; blank input means "skip".
    ///
    /// The outer Option is EOF, the inner one is the skip.
    #[allow(clippy::option_option)]
    pub fn prompt_optional_quantity(
        &mut self,
        prompt: &str,
    ) -> Result<Option<Option<i64>>, AppError> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(Some(None));
            }
            match trimmed.parse::<i64>() {
                Ok(value) if value >= 0 => return Ok(Some(Some(value))),
                Ok(_) => self.say("Stock level must not be negative, please try again.")?,
                Err(_) => self.say("Expected an integer as input, please try again.")?,
            }
        }
    }

    /// Yes/no prompt. Only `y`/`Y` counts as yes; EOF counts as no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, AppError> {
        let Some(line) = self.prompt_line(prompt)? else {
            return Ok(false);
        };
        Ok(line.trim().eq_ignore_ascii_case("y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output.clone()).unwrap()
    }

    #[test]
    fn prompt_line_strips_newline() {
        let mut c = console("Dune\n");
        assert_eq!(c.prompt_line("Title: ").unwrap(), Some("Dune".to_string()));
    }

    #[test]
    fn prompt_line_handles_crlf() {
        let mut c = console("Dune\r\n");
        assert_eq!(c.prompt_line("Title: ").unwrap(), Some("Dune".to_string()));
    }

    #[test]
    fn prompt_line_returns_none_on_eof() {
        let mut c = console("");
        assert_eq!(c.prompt_line("Title: ").unwrap(), None);
    }

    #[test]
    fn prompt_non_empty_retries_on_blank() {
        let mut c = console("\n   \nDune\n");
        assert_eq!(
            c.prompt_non_empty("Title: ").unwrap(),
            Some("Dune".to_string())
        );
        assert!(output(&c).contains("Expected a value"));
    }

    #[test]
    fn prompt_integer_retries_on_garbage() {
        let mut c = console("twelve\n12\n");
        assert_eq!(c.prompt_integer("Qty: ").unwrap(), Some(12));
        assert!(output(&c).contains("Expected an integer"));
    }

    #[test]
    fn prompt_quantity_rejects_negative() {
        let mut c = console("-3\n0\n");
        assert_eq!(c.prompt_quantity("Qty: ").unwrap(), Some(0));
        assert!(output(&c).contains("must not be negative"));
    }

    #[test]
    fn prompt_optional_quantity_blank_means_skip() {
        let mut c = console("\n");
        assert_eq!(c.prompt_optional_quantity("Qty: ").unwrap(), Some(None));
    }

    #[test]
    fn prompt_optional_quantity_parses_value() {
        let mut c = console("7\n");
        assert_eq!(c.prompt_optional_quantity("Qty: ").unwrap(), Some(Some(7)));
    }

    #[test]
    fn confirm_accepts_upper_and_lower_y() {
        let mut c = console("Y\n");
        assert!(c.confirm("Sure? ").unwrap());
        let mut c = console("y\n");
        assert!(c.confirm("Sure? ").unwrap());
    }

    #[test]
    fn confirm_defaults_to_no() {
        let mut c = console("nope\n");
        assert!(!c.confirm("Sure? ").unwrap());
        let mut c = console("");
        assert!(!c.confirm("Sure? ").unwrap());
    }
}
