use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// True for files ending in a lowercase `.png`.
pub fn is_png(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("png")
}

/// PNG files directly inside `dir` (no recursion), sorted by file name.
pub fn list_pngs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::MissingInput {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if is_png(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Names of every entry in `dir`, sorted; used for diagnostics when a folder
/// holds no usable frames.
pub fn list_entry_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Every directory under `root` (including `root` itself) whose basename is
/// exactly `name`, in sorted walk order. The list is collected before the
/// caller creates any output, so folders created during processing are never
/// visited.
pub fn find_named_dirs(root: &Path, name: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::MissingInput {
            path: root.to_path_buf(),
        });
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() && entry.file_name().to_str() == Some(name) {
            debug!("Found {} folder: {:?}", name, entry.path());
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// Sibling directory `output_name` next to `dir` (i.e. inside its parent).
pub fn sibling_dir(dir: &Path, output_name: &str) -> PathBuf {
    match dir.parent() {
        Some(parent) => parent.join(output_name),
        None => PathBuf::from(output_name),
    }
}

/// Basename of the directory containing `dir`. Falls back to the absolute
/// path when the parent is `.` or empty, and to `frames` at the filesystem root.
pub fn parent_name(dir: &Path) -> String {
    let from_path = |p: &Path| p.file_name().map(|n| n.to_string_lossy().into_owned());
    if let Some(name) = dir.parent().and_then(from_path) {
        if name != "." && name != ".." {
            return name;
        }
    }
    std::path::absolute(dir)
        .ok()
        .and_then(|abs| abs.parent().and_then(from_path))
        .unwrap_or_else(|| "frames".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn pngs_are_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.png", "b.PNG", "notes.txt", "b.png"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("sub.png")).unwrap();

        let names: Vec<String> = list_pngs(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn missing_dir_is_reported() {
        let err = list_pngs(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, Error::MissingInput { .. }));
    }

    #[test]
    fn named_dirs_are_found_recursively() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("robot_b/2_frames")).unwrap();
        fs::create_dir_all(root.path().join("robot_a/deep/2_frames")).unwrap();
        fs::create_dir_all(root.path().join("robot_c/2_frames_old")).unwrap();

        let dirs = find_named_dirs(root.path(), "2_frames").unwrap();
        assert_eq!(
            dirs,
            vec![
                root.path().join("robot_a/deep/2_frames"),
                root.path().join("robot_b/2_frames"),
            ]
        );
    }

    #[test]
    fn sibling_and_parent_names() {
        let dir = Path::new("assets/robot/2_frames");
        assert_eq!(
            sibling_dir(dir, "sprite_sheets"),
            PathBuf::from("assets/robot/sprite_sheets")
        );
        assert_eq!(parent_name(dir), "robot");
    }
}
