//! Filesystem utilities.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Whether a file already holds exactly these bytes.
///
/// Identical files are left alone to keep their mtime, so build systems don't
/// rebuild dependents.
pub fn is_unchanged(path: &Path, contents: &str) -> bool {
    fs::read(path).is_ok_and(|existing| existing == contents.as_bytes())
}

/// Contents written next to their destination, not yet moved into place.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    temp: NamedTempFile,
}

impl StagedFile {
    /// Rename the staged contents over the destination.
    pub fn commit(self) -> Result<PathBuf> {
        let StagedFile { path, temp } = self;
        temp.persist(&path)
            .with_context(|| format!("failed to write file: {}", path.display()))?;
        Ok(path)
    }
}

/// Write `contents` to a temporary sibling of `path`, creating parent
/// directories if needed. `path` itself is untouched until `commit`.
pub fn stage(path: &Path, contents: &str) -> Result<StagedFile> {
    if path.is_dir() {
        bail!("failed to write file: {}: is a directory", path.display());
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    temp.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write file: {}", path.display()))?;

    Ok(StagedFile {
        path: path.to_path_buf(),
        temp,
    })
}

/// File name component of a path, for includes.
pub fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("path has no file name: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_stage_creates_parents_and_defers_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gen/include/Table.h");

        let staged = stage(&path, "#pragma once\n").unwrap();
        assert!(!path.exists());

        assert_eq!(staged.commit().unwrap(), path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "#pragma once\n");
    }

    #[test]
    fn test_commit_replaces_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.h");
        fs::write(&path, "a").unwrap();

        assert!(is_unchanged(&path, "a"));
        assert!(!is_unchanged(&path, "b"));

        stage(&path, "b").unwrap().commit().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "b");
    }

    #[test]
    fn test_dropped_stage_leaves_no_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.h");

        drop(stage(&path, "a").unwrap());

        assert!(!path.exists());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_stage_under_regular_file_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = stage(&blocker.join("T.c"), "a").unwrap_err();
        assert!(format!("{:#}", err).contains("blocker"));
    }

    #[test]
    fn test_is_unchanged_missing_file() {
        let tmp = TempDir::new().unwrap();
        assert!(!is_unchanged(&tmp.path().join("out.h"), ""));
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let tmp = TempDir::new().unwrap();
        let err = read_to_string(&tmp.path().join("vk.xml")).unwrap_err();
        assert!(format!("{:#}", err).contains("vk.xml"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("gen/Table.h")).unwrap(), "Table.h");
        assert!(file_name(Path::new("/")).is_err());
    }
}
