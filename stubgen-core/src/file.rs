use std::path::{Path, PathBuf};

use eyre::Result;

/// A generated file waiting to be written.
///
/// Generated files are always overwritten; every run recomputes the full
/// output, so there is nothing on disk worth preserving.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, creating parent directories as needed.
    pub fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, &self.content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("client.model.gen.go");

        File::new(&path, "package client\n").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "package client\n");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("client_model.py");

        File::new(&path, "# nested").write().unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# nested");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("client_client.js");
        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "updated");
        assert!(file.exists());
        file.write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }
}
