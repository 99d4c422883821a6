//! Equation files

use crate::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// A text file holding one equation per line
///
/// Blank lines and lines starting with `#` are skipped; surrounding
/// whitespace is trimmed.
pub struct EquationFile {
    path: PathBuf,
}

impl EquationFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all equations in file order
    pub fn read(&self) -> Result<Vec<String>, InputError> {
        let path = self.path();
        if !path.exists() {
            return Err(InputError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Ok(parse_equations(&content))
    }
}

fn parse_equations(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let content = "# goats\nКОЗА+КОЗА = СТАДО\n\n   \n  SEND+MORE=MONEY  \n";
        assert_eq!(
            parse_equations(content),
            ["КОЗА+КОЗА = СТАДО", "SEND+MORE=MONEY"]
        );
    }

    #[test]
    fn test_read_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("puzzles.txt");
        fs::write(&path, "A + A = B\n# comment\nAB = BA\n").unwrap();

        let file = EquationFile::new(path.clone());
        assert_eq!(file.path(), path.as_path());
        assert_eq!(file.read().unwrap(), ["A + A = B", "AB = BA"]);
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let file = EquationFile::new(temp.path().join("absent.txt"));
        assert!(matches!(file.read(), Err(InputError::NotFound(_))));
    }
}
