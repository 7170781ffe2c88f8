use crate::domain::delivery::FileDelivery;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Writes exports into a fixed directory, overwriting any previous file with
/// the same name.
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileDelivery for DirectoryDelivery {
    fn deliver(&self, filename: &str, mime_type: &str, content: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating export directory {}", self.dir.display()))?;
        let path = self.dir.join(filename);
        std::fs::write(&path, content)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), mime_type, bytes = content.len(), "export written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_file_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let delivery = DirectoryDelivery::new(dir.path().join("exports"));

        let path = delivery
            .deliver("query_results.csv", "text/csv", "a,b\n1,2")
            .unwrap();

        assert_eq!(path, dir.path().join("exports").join("query_results.csv"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "a,b\n1,2");
    }

    #[test]
    fn test_unwritable_target_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let delivery = DirectoryDelivery::new(&blocker);
        assert!(delivery.deliver("query_results.csv", "text/csv", "x").is_err());
    }
}
