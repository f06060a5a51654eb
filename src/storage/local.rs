//! Local filesystem exporter.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::storage::Exporter;

/// Writes exported files into a single directory.
#[derive(Debug, Clone)]
pub struct LocalExporter {
    root_dir: PathBuf,
}

impl LocalExporter {
    /// Create a new exporter rooted at the given directory.
    ///
    /// The directory is created on first write.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Get the full path for a file name, rejecting anything but a plain name.
    pub fn path(&self, filename: &str) -> Result<PathBuf> {
        if matches!(filename, "" | "." | "..") || filename.contains(['/', '\\']) {
            return Err(AppError::validation(format!(
                "Invalid export file name: {filename:?}"
            )));
        }
        Ok(self.root_dir.join(filename))
    }

    /// Write bytes atomically (write to temp, then rename).
    fn write_bytes(&self, filename: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(filename)?;
        fs::create_dir_all(&self.root_dir)?;

        let tmp = path.with_extension("tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.flush()?;
        drop(file);

        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl Exporter for LocalExporter {
    fn write(&self, filename: &str, content: &str) -> Result<()> {
        self.write_bytes(filename, content.as_bytes())?;
        log::debug!("Wrote {}", self.root_dir.join(filename).display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let exporter = LocalExporter::new(tmp.path().join("nested/data"));

        exporter.write("faq.txt", "hej").unwrap();

        let content = fs::read_to_string(tmp.path().join("nested/data/faq.txt")).unwrap();
        assert_eq!(content, "hej");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let exporter = LocalExporter::new(tmp.path());

        exporter.write("a.txt", "first, longer content").unwrap();
        exporter.write("a.txt", "second").unwrap();

        assert_eq!(fs::read_to_string(tmp.path().join("a.txt")).unwrap(), "second");
        assert!(!tmp.path().join("a.tmp").exists());
    }

    #[test]
    fn test_write_json() {
        let tmp = TempDir::new().unwrap();
        let exporter = LocalExporter::new(tmp.path());

        exporter.write_json("list.json", &["ett", "två"]).unwrap();

        let loaded: Vec<String> =
            serde_json::from_str(&fs::read_to_string(tmp.path().join("list.json")).unwrap())
                .unwrap();
        assert_eq!(loaded, vec!["ett", "två"]);
    }

    #[test]
    fn test_rejects_path_names() {
        let tmp = TempDir::new().unwrap();
        let exporter = LocalExporter::new(tmp.path());

        assert!(exporter.write("../escape.txt", "x").is_err());
        assert!(exporter.write("", "x").is_err());
    }

    #[test]
    fn test_rejects_dot_names_without_side_effects() {
        let tmp = TempDir::new().unwrap();
        let exporter = LocalExporter::new(tmp.path().join("out"));

        for name in [".", ".."] {
            assert!(matches!(
                exporter.write(name, "x"),
                Err(AppError::Validation(_))
            ));
        }
        assert!(!tmp.path().join("out.tmp").exists());
        assert!(!tmp.path().join("out").exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let tmp = TempDir::new().unwrap();
        let exporter = LocalExporter::new(tmp.path());
        fs::create_dir(tmp.path().join("a.txt")).unwrap();
        fs::write(tmp.path().join("a.txt/keep"), "x").unwrap();

        assert!(matches!(exporter.write("a.txt", "x"), Err(AppError::Io(_))));
        assert!(!tmp.path().join("a.tmp").exists());
    }

    #[test]
    fn test_io_error_surfaces() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "not a dir").unwrap();
        let exporter = LocalExporter::new(&blocker);

        assert!(matches!(exporter.write("a.txt", "x"), Err(AppError::Io(_))));
    }
}
