use std::path::Path;

/// Supported backup container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupFormat {
    Json,
    Xml,
    Csv,
    /// One message per line; the fallback for unknown extensions.
    PlainText,
}

impl BackupFormat {
    pub fn from_path(path: &Path) -> BackupFormat {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => BackupFormat::Json,
            Some("xml") => BackupFormat::Xml,
            Some("csv") => BackupFormat::Csv,
            _ => BackupFormat::PlainText,
        }
    }
}
