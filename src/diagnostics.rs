//! Read-only runtime introspection for the side panel.

use std::path::Path;

/// Application version baked in at compile time.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Toolchain version captured by the build script.
pub const RUSTC_VERSION: &str = env!("IRISER_RUSTC_VERSION");

/// One entry of the optional working-directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntryView {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntryView {
    /// Short indicator rendered ahead of the name.
    pub fn indicator(&self) -> &'static str {
        if self.is_dir { "[dir]" } else { "[file]" }
    }
}

/// List the entries of `dir`, sorted by name. Unreadable directories and
/// entries collapse to an empty or partial listing rather than an error;
/// the panel is informational only.
pub fn list_dir(dir: &Path) -> Vec<DirEntryView> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut rows: Vec<DirEntryView> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            DirEntryView {
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Listing of the process working directory.
pub fn working_dir_listing() -> Vec<DirEntryView> {
    std::env::current_dir()
        .map(|cwd| list_dir(&cwd))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn listing_is_sorted_and_marks_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("models")).unwrap();
        fs::write(dir.path().join("model.json"), "{}").unwrap();
        fs::write(dir.path().join("app.log"), "").unwrap();

        let rows = list_dir(dir.path());
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["app.log", "model.json", "models"]);
        assert!(rows[2].is_dir);
        assert_eq!(rows[2].indicator(), "[dir]");
        assert_eq!(rows[0].indicator(), "[file]");
    }

    #[test]
    fn unreadable_directory_yields_empty_listing() {
        assert!(list_dir(Path::new("/nonexistent/iriser-test")).is_empty());
    }
}
