//! This module provides the `InputLoader` struct, responsible for reading batches of
//! candidate strings from files and strings.

use crate::types::PdaError;
use std::fs;
use std::path::Path;

/// Marks a comment line in an input file.
const COMMENT_PREFIX: char = '#';

/// `InputLoader` is a utility struct for loading candidate strings.
///
/// Inputs are stored one per line. Surrounding whitespace is trimmed, and blank lines and
/// lines starting with `#` are skipped.
pub struct InputLoader;

impl InputLoader {
    /// Loads every candidate from the file at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` with the candidates in file order.
    /// * `Err(PdaError::FileError)` if the file cannot be read.
    pub fn load_inputs(path: &Path) -> Result<Vec<String>, PdaError> {
        let content = fs::read_to_string(path).map_err(|e| {
            PdaError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Ok(Self::load_inputs_from_string(&content))
    }

    /// Loads every candidate from `content`.
    pub fn load_inputs_from_string(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_inputs_from_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("words.txt");

        let content = "# sample words\nracecar\n\n  hello  \n#abba\nnoon\n";

        let mut file = File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let inputs = InputLoader::load_inputs(&file_path).unwrap();
        assert_eq!(inputs, vec!["racecar", "hello", "noon"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.txt");

        let result = InputLoader::load_inputs(&file_path);
        match result {
            Err(PdaError::FileError(message)) => assert!(message.contains("missing.txt")),
            other => panic!("Expected a file error, but got {:?}", other),
        }
    }

    #[test]
    fn test_load_inputs_from_empty_string() {
        assert!(InputLoader::load_inputs_from_string("").is_empty());
        assert!(InputLoader::load_inputs_from_string("\n  \n# only comments\n").is_empty());
    }
}
