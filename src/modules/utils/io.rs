use std::io::{self, BufRead, Write};

/// Read one line from the given reader, trimmed of surrounding
/// whitespace
///
/// End of input is reported as UnexpectedEof so callers can tell it
/// apart from an empty line.
pub fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(input.trim().to_string())
}

/// Helper function to read a line from stdin
pub fn read_line() -> io::Result<String> {
    read_line_from(&mut io::stdin().lock())
}

/// Helper function to print a prompt and read the reply on one line
pub fn prompt(text: &str) -> io::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    read_line()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_trims_whitespace() {
        let mut input = Cursor::new("  alice  \n");
        assert_eq!(read_line_from(&mut input).unwrap(), "alice");
    }

    #[test]
    fn test_read_line_reports_end_of_input() {
        let mut input = Cursor::new("");
        let err = read_line_from(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_line_from(&mut input).unwrap(), "");
    }
}
