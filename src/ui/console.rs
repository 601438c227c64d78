//! Line-based prompts over any reader/writer pair

use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text as-is and flush it
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Show `prompt` and read one line, without its line ending
    ///
    /// Returns `None` once input is exhausted.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.say(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Show `prompt` and read an integer
    ///
    /// `Some(None)` means a line was read but was not a number.
    pub fn prompt_int(&mut self, prompt: &str) -> io::Result<Option<Option<i64>>> {
        Ok(self.prompt_line(prompt)?.map(|line| parse_int(&line)))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse a whole line as an integer, ignoring surrounding whitespace
pub fn parse_int(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_line_strips_line_ending() {
        let mut console = Console::new(Cursor::new("Azul\r\nVerde\n"), Vec::new());
        assert_eq!(console.prompt_line("> ").unwrap().as_deref(), Some("Azul"));
        assert_eq!(console.prompt_line("> ").unwrap().as_deref(), Some("Verde"));
        assert_eq!(console.prompt_line("> ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "> > > ");
    }

    #[test]
    fn test_prompt_int() {
        let mut console = Console::new(Cursor::new(" 12 \nabc\n"), Vec::new());
        assert_eq!(console.prompt_int("").unwrap(), Some(Some(12)));
        assert_eq!(console.prompt_int("").unwrap(), Some(None));
        assert_eq!(console.prompt_int("").unwrap(), None);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("-4"), Some(-4));
        assert_eq!(parse_int("4x"), None);
        assert_eq!(parse_int(""), None);
    }
}
