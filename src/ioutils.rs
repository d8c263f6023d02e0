use std::io::{BufRead, Write};

use crate::error::Result;

/// A line-oriented input the chooser can read answers from.
pub trait LineSource {
    /// Reads the next line without its terminator.
    ///
    /// Returns `Ok(None)` once the stream is exhausted.
    fn next_line(&mut self) -> std::io::Result<Option<String>>;
}

impl<B: BufRead + ?Sized> LineSource for B {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut buf = String::new();
        if self.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}

/// Writes `text` verbatim and flushes so it shows up before a blocking read.
pub fn write_flush(output: &mut dyn Write, text: &str) -> Result<()> {
    output.write_all(text.as_bytes())?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_next_line_strips_terminators() {
        let mut input = Cursor::new("first\nsecond\r\nlast");
        assert_eq!(input.next_line().unwrap(), Some("first".to_string()));
        assert_eq!(input.next_line().unwrap(), Some("second".to_string()));
        assert_eq!(input.next_line().unwrap(), Some("last".to_string()));
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn test_next_line_keeps_inner_whitespace() {
        let mut input: &[u8] = b"  a b \t\n\n";
        assert_eq!(input.next_line().unwrap(), Some("  a b \t".to_string()));
        assert_eq!(input.next_line().unwrap(), Some(String::new()));
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn test_write_flush_writes_verbatim() {
        let mut output = Vec::new();
        write_flush(&mut output, "Pick [A/b]: ").unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Pick [A/b]: ");
    }
}
