//! Lexical path helpers.

use std::path::{Component, Path, PathBuf};

/// Normalize a path without touching the filesystem.
///
/// `.` components are dropped and `..` pops the previous normal component.
/// A `..` that would climb above the root is discarded for absolute paths
/// and kept for relative ones.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Join `path` onto `base` unless it is already absolute, then normalize.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dots() {
        assert_eq!(
            normalize(Path::new("/a/./b/../c/d.sv")),
            PathBuf::from("/a/c/d.sv")
        );
        assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(normalize(Path::new("../x/./y")), PathBuf::from("../x/y"));
    }

    #[test]
    fn test_absolutize() {
        let root = Path::new("/proj");
        assert_eq!(
            absolutize(root, Path::new("rtl/../inc/defs.svh")),
            PathBuf::from("/proj/inc/defs.svh")
        );
        assert_eq!(
            absolutize(root, Path::new("/abs/top.sv")),
            PathBuf::from("/abs/top.sv")
        );
    }
}
