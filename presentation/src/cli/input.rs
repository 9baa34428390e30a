//! Reading the user's entry for one-shot runs

use std::io::Read;
use std::path::Path;

/// Resolve the entry text from the positional argument, a file, or stdin
/// (`-`). Returns `None` when neither source was given.
pub fn read_entry(text: Option<&str>, file: Option<&Path>) -> std::io::Result<Option<String>> {
    if let Some(text) = text {
        return Ok(Some(text.to_string()));
    }
    match file {
        Some(path) if path == Path::new("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(Some(buf))
        }
        Some(path) => std::fs::read_to_string(path).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_argument_wins() {
        let entry = read_entry(Some("deadline tomorrow"), None).unwrap();
        assert_eq!(entry.as_deref(), Some("deadline tomorrow"));
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entry.txt");
        std::fs::write(&path, "I keep worrying about my test results.\n").unwrap();

        let entry = read_entry(None, Some(&path)).unwrap();
        assert_eq!(
            entry.as_deref(),
            Some("I keep worrying about my test results.\n")
        );
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_entry(None, Some(&dir.path().join("nope.txt"))).is_err());
    }

    #[test]
    fn test_no_source() {
        assert!(read_entry(None, None).unwrap().is_none());
    }
}
