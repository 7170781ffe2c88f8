use anyhow::Result;
use std::path::PathBuf;

/// Hands a finished export to the user. Returns where the file ended up.
#[cfg_attr(test, mockall::automock)]
pub trait FileDelivery: Send + Sync {
    fn deliver(&self, filename: &str, mime_type: &str, content: &str) -> Result<PathBuf>;
}
