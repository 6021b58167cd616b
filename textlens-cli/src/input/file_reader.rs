//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }
}

/// A named input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Path the text was read from
    pub path: PathBuf,
    /// File content
    pub text: String,
}

impl Source {
    /// Display name of the source
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read every path into a [`Source`], keeping their order
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<Source>> {
    paths
        .iter()
        .map(|path| {
            Ok(Source {
                path: path.clone(),
                text: FileReader::read_text(path)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_utf8_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("utf8.txt");

        let content = "¡Qué día tan increíble! 🌍";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let err = FileReader::read_text(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, [0x63, 0x61, 0x66, 0xe9]).unwrap();

        assert!(FileReader::read_text(&file_path).is_err());
    }

    #[test]
    fn test_read_sources_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let b = temp_dir.path().join("b.txt");
        let a = temp_dir.path().join("a.txt");
        fs::write(&b, "segundo").unwrap();
        fs::write(&a, "primero").unwrap();

        let sources = read_sources(&[b.clone(), a]).unwrap();
        assert_eq!(sources[0].text, "segundo");
        assert_eq!(sources[0].name(), b.display().to_string());
        assert_eq!(sources[1].text, "primero");
    }
}
