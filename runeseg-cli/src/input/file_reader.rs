//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads raw input bytes; decoding is left to the processor
pub struct FileReader;

impl FileReader {
    /// Read a file as raw bytes
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        let content =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        log::debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }

    /// Read all of standard input
    pub fn read_stdin() -> Result<Vec<u8>> {
        let mut content = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_read_bytes_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        fs::write(&file_path, b"caf\xC3\xA9").unwrap();

        let result = FileReader::read_bytes(&file_path).unwrap();
        assert_eq!(result, b"caf\xC3\xA9");
    }

    #[test]
    fn test_read_bytes_keeps_ill_formed_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("broken.bin");

        fs::write(&file_path, b"\xFF\xFE\x80").unwrap();

        let result = FileReader::read_bytes(&file_path).unwrap();
        assert_eq!(result, vec![0xFF, 0xFE, 0x80]);
    }

    #[test]
    fn test_read_bytes_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let err_msg = FileReader::read_bytes(path).unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_file_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sized.txt");

        fs::write(&file_path, "a".repeat(1024)).unwrap();

        assert_eq!(FileReader::file_size(&file_path).unwrap(), 1024);
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        assert!(FileReader::read_bytes(&file_path).unwrap().is_empty());
        assert_eq!(FileReader::file_size(&file_path).unwrap(), 0);
    }
}
