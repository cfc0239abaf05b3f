use std::path::{Component, PathBuf};

/// Collapses `.` and `..` segments out of a user-supplied path. Only applied
/// to configuration-level paths (template directories); node names coming
/// from a descriptor are joined verbatim.
pub fn normalize_path(source: &str) -> PathBuf {
    let input = PathBuf::from(source);

    let mut new_path = PathBuf::new();

    for component in input.components() {
        match component {
            // Skip the current-dir marker "."
            Component::CurDir => {}

            // For "..", pop the last component if possible
            Component::ParentDir => {
                new_path.pop();
            }

            // For normal components, push them
            other => new_path.push(other.as_os_str()),
        }
    }

    new_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_current_dir_markers() {
        assert_eq!(
            normalize_path("./templates/./extra"),
            PathBuf::from("templates/extra")
        );
    }

    #[test]
    fn test_collapses_parent_dir_markers() {
        assert_eq!(
            normalize_path("templates/nested/.."),
            PathBuf::from("templates")
        );
    }
}
