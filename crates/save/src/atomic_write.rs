//! Atomic file write using the write-rename pattern.
//!
//! Writes data to a temporary sibling (`{path}.tmp`), calls `sync_all()` so
//! the bytes reach persistent storage, then atomically renames the temp
//! file onto the final path. A crash mid-write therefore cannot corrupt an
//! existing slot file.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write `data` to `path`, creating parent directories as
/// needed.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp_path: PathBuf = path.to_path_buf();
    tmp_path.as_mut_os_string().push(".tmp");

    let mut file = File::create(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh temp directory per test.
    fn test_dir(name: &str) -> PathBuf {
        let dir = PathBuf::from(format!("/tmp/microcity_atomic_write_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn creates_file_with_contents() {
        let dir = test_dir("creates");
        let path = dir.join("slot_1.json");

        atomic_write(&path, b"{\"slotNumber\": 1}").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"{\"slotNumber\": 1}");
        assert!(!dir.join("slot_1.json.tmp").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = test_dir("overwrites");
        let path = dir.join("slot_1.json");

        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = test_dir("parents");
        let path = dir.join("nested/deeper/slot_2.json");

        atomic_write(&path, b"data").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"data");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn stale_tmp_file_does_not_block_a_new_write() {
        let dir = test_dir("stale_tmp");
        let path = dir.join("slot_1.json");

        fs::write(&path, b"original").unwrap();
        // Leftover from a simulated crashed write.
        fs::write(dir.join("slot_1.json.tmp"), b"partial garbage").unwrap();

        atomic_write(&path, b"new save").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new save");
        assert!(!dir.join("slot_1.json.tmp").exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
