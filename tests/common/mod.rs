use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Temporary snapshot directory removed on drop.
pub struct TestSnapshots {
    dir: TempDir,
}

impl TestSnapshots {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp snapshot dir"),
        }
    }

    pub fn with(self, file: &str, contents: &str) -> Self {
        fs::write(self.dir.path().join(file), contents).expect("write snapshot");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

pub fn seller_json(phone: &str, name: &str, city: &str, active: bool, created_at: &str) -> String {
    format!(
        r#"{{"phoneNumber":"{phone}","name":"{name}","city":"{city}","isActive":{active},"createdAt":"{created_at}"}}"#
    )
}
