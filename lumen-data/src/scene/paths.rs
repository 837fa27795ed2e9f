//! Frame image path resolution

use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Resolve a frame's `file_path` against the scene directory.
///
/// Returns the joined path when it names an existing file. Paths without an
/// extension (`./train/r_0`) are also matched against files in the same
/// directory sharing that stem whose extension names an image format (so
/// `r_0.json` or `r_0.npy` sidecars are skipped), picking the
/// lexicographically first match.
/// Returns `None` when nothing on disk matches.
pub fn resolve_frame_path(base_dir: &Path, file_path: &str) -> Option<PathBuf> {
    let candidate = base_dir.join(file_path);
    if candidate.is_file() {
        return Some(candidate);
    }
    if candidate.extension().is_some() {
        return None;
    }

    let stem = candidate.file_name()?.to_owned();
    let parent = candidate.parent()?;
    let mut matches: Vec<PathBuf> = std::fs::read_dir(parent)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.file_stem() == Some(stem.as_os_str()))
        .filter(|path| path.is_file() && ImageFormat::from_path(path).is_ok())
        .collect();
    matches.sort();
    matches.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_exact_path_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("r_0.png"), b"png").unwrap();

        let resolved = resolve_frame_path(dir.path(), "r_0.png").unwrap();
        assert_eq!(resolved, dir.path().join("r_0.png"));
    }

    #[test]
    fn test_missing_path_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_frame_path(dir.path(), "train/r_0.png").is_none());
        assert!(resolve_frame_path(dir.path(), "train/r_0").is_none());
    }

    #[test]
    fn test_extensionless_path_matches_stem() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("train")).unwrap();
        fs::write(dir.path().join("train/r_0.png"), b"png").unwrap();
        fs::write(dir.path().join("train/r_0_depth.png"), b"png").unwrap();

        let resolved = resolve_frame_path(dir.path(), "./train/r_0").unwrap();
        assert_eq!(resolved.file_name().unwrap(), "r_0.png");
    }

    #[test]
    fn test_extensionless_path_skips_non_image_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("r_0.json"), b"{}").unwrap();
        fs::write(dir.path().join("r_0.npy"), b"npy").unwrap();
        fs::write(dir.path().join("r_0.png"), b"png").unwrap();

        let resolved = resolve_frame_path(dir.path(), "r_0").unwrap();
        assert_eq!(resolved, dir.path().join("r_0.png"));
    }

    #[test]
    fn test_extensionless_path_without_image_is_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("r_0.json"), b"{}").unwrap();

        assert!(resolve_frame_path(dir.path(), "r_0").is_none());
    }

    #[test]
    fn test_extension_is_not_swapped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("r_0.jpg"), b"jpg").unwrap();

        // An explicit extension must match exactly
        assert!(resolve_frame_path(dir.path(), "r_0.png").is_none());
    }
}
