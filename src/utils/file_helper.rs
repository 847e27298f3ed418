//! File system utility functions.
//!
//! Provides simple wrappers around std::fs for common file operations.

use std::path::{Path, PathBuf};

/// Check if a file exists at the given path.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Create a directory and all parent directories if they don't exist.
pub fn create_directory(path: impl AsRef<Path>) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}

/// Names (without extension) of the files in `dir` ending in `.{extension}`.
pub fn file_stems_with_extension(dir: impl AsRef<Path>, extension: &str) -> std::io::Result<Vec<String>> {
    let mut stems = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            if let Some(stem) = path.file_stem() {
                stems.push(stem.to_string_lossy().into_owned());
            }
        }
    }
    Ok(stems)
}

/// Get the directory containing the executable.
pub fn exe_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve(base: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base.join(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_stems_with_extension() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.leda"), "").unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "").unwrap();
        std::fs::create_dir(temp_dir.path().join("c.leda")).unwrap();

        let stems = file_stems_with_extension(temp_dir.path(), "leda").unwrap();
        assert_eq!(stems, vec!["a".to_string()]);
    }

    #[test]
    fn test_resolve() {
        let base = Path::new("/opt/app");
        assert_eq!(resolve(base, "saved"), PathBuf::from("/opt/app/saved"));
        assert_eq!(resolve(base, "/data/saved"), PathBuf::from("/data/saved"));
    }
}
