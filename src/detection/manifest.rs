//! Recursive `package.json` discovery.
//!
//! Matching follows recursive-glob conventions: manifests are found at any
//! depth including the scan root itself, hidden entries (leading `.`) are
//! neither matched nor descended into, and directory symlinks are not
//! followed. Directories that cannot be enumerated (including a missing
//! scan root) contribute no matches rather than failing the scan.

use std::fs;
use std::path::{Path, PathBuf};

const MANIFEST_NAME: &str = "package.json";

/// Collect every `package.json` under `root`, in no particular order.
pub fn find_manifests(root: &Path) -> Vec<PathBuf> {
    let mut manifests = Vec::new();
    walk(root, &mut manifests);
    manifests
}

fn walk(dir: &Path, manifests: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        // file_type() does not follow symlinks, so symlinked
        // directories are treated as leaves.
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        if file_type.is_dir() {
            walk(&entry.path(), manifests);
        } else if file_type.is_file() && name == MANIFEST_NAME {
            manifests.push(entry.path());
        }
    }
}
