//! This module provides the `MachineLoader` struct, responsible for loading machine
//! descriptions and input strings from files.

use crate::parser::parse;
use crate::types::{Machine, NtmError, MAX_DESCRIPTION_SIZE};
use std::fs;
use std::path::Path;

/// `MachineLoader` is a utility struct for loading machine descriptions.
/// It provides methods to load a description from a file or from string content,
/// and to read the input string a machine should run on.
pub struct MachineLoader;

impl MachineLoader {
    /// Loads a machine description from the specified file path.
    ///
    /// # Arguments
    ///
    /// * `path` - A reference to the `Path` of the description file to load.
    ///
    /// # Returns
    ///
    /// * `Ok(Machine)` if the file is successfully read and parsed into a `Machine`.
    /// * `Err(NtmError::FileError)` if the file cannot be read.
    /// * `Err(NtmError::ParseError)` if the file content is not a valid description.
    pub fn load_machine(path: &Path) -> Result<Machine, NtmError> {
        let content = fs::read_to_string(path).map_err(|e| {
            NtmError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Self::load_machine_from_string(&content)
    }

    /// Loads a machine description from the provided string content.
    ///
    /// This is useful for parsing descriptions that are not stored in files,
    /// e.g., from user input.
    ///
    /// # Arguments
    ///
    /// * `content` - A string slice containing the machine description.
    ///
    /// # Returns
    ///
    /// * `Ok(Machine)` if the content is successfully parsed into a `Machine`.
    /// * `Err(NtmError::ValidationError)` if the content exceeds the size limit.
    /// * `Err(NtmError::ParseError)` if the content is not a valid description.
    pub fn load_machine_from_string(content: &str) -> Result<Machine, NtmError> {
        if content.len() > MAX_DESCRIPTION_SIZE {
            return Err(NtmError::ValidationError(format!(
                "Machine description exceeds the maximum size of {} bytes",
                MAX_DESCRIPTION_SIZE
            )));
        }

        parse(content)
    }

    /// Reads the input string for a machine from the specified file path.
    ///
    /// Surrounding whitespace is trimmed, including the trailing newline most
    /// editors add; the remaining content is used verbatim.
    ///
    /// # Arguments
    ///
    /// * `path` - A reference to the `Path` of the input file to read.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` with the trimmed input string.
    /// * `Err(NtmError::FileError)` if the file cannot be read.
    pub fn load_input(path: &Path) -> Result<String, NtmError> {
        let content = fs::read_to_string(path).map_err(|e| {
            NtmError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_machine() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.csv");

        let content = "Test Machine\nq1,q2,qa,qr\na,b\na,b,_\nq1\nqa\nqr\nq1,a,q2,b,R";

        let mut file = File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let result = MachineLoader::load_machine(&file_path);
        assert!(result.is_ok());

        let machine = result.unwrap();
        assert_eq!(machine.name, "Test Machine");
        assert_eq!(machine.start_state, "q1");
        assert_eq!(machine.transitions.len(), 1);
    }

    #[test]
    fn test_load_invalid_machine() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("invalid.csv");

        let invalid_content = "This is not a valid machine";

        let mut file = File::create(&file_path).unwrap();
        file.write_all(invalid_content.as_bytes()).unwrap();

        let result = MachineLoader::load_machine(&file_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("does-not-exist.csv");

        let result = MachineLoader::load_machine(&file_path);
        assert!(matches!(result, Err(NtmError::FileError(_))));
    }

    #[test]
    fn test_load_oversized_description() {
        let content = "x".repeat(MAX_DESCRIPTION_SIZE + 1);

        let result = MachineLoader::load_machine_from_string(&content);
        assert!(matches!(result, Err(NtmError::ValidationError(_))));
    }

    #[test]
    fn test_load_input_trims_surrounding_whitespace() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("input.txt");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"aab\n").unwrap();

        let input = MachineLoader::load_input(&file_path).unwrap();
        assert_eq!(input, "aab");
    }

    #[test]
    fn test_load_empty_input() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        let input = MachineLoader::load_input(&file_path).unwrap();
        assert_eq!(input, "");
    }

    #[test]
    fn test_load_missing_input_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("does-not-exist.txt");

        let result = MachineLoader::load_input(&file_path);
        assert!(matches!(result, Err(NtmError::FileError(_))));
    }
}
