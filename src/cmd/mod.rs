//! Command module structure for the placecheck CLI

use std::path::{Path, PathBuf};

pub mod export;
pub mod report;

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_leaves_plain_paths() {
        assert_eq!(expand_path(Path::new("data/places")), PathBuf::from("data/places"));
    }

    #[test]
    fn test_expand_path_tilde() {
        if std::env::var_os("HOME").is_none() {
            return;
        }
        let expanded = expand_path(Path::new("~/places"));
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("places"));
    }
}
