use crate::materialize::{create_directory, write_file, MaterializeError};
use std::path::Path;

/// Suffixes of the files generated alongside a conventional api folder.
const API_FILE_SUFFIXES: [&str; 5] = ["api", "constants", "data", "service", "router"];

/// Creates `destination/name` plus the five conventional empty files inside
/// it (`name.api`, `name.constants`, `name.data`, `name.service`,
/// `name.router`).
///
/// # Errors
///
/// Returns a [`MaterializeError`] if the folder or one of the files cannot
/// be created.
pub fn scaffold_api_folder(destination: &Path, name: &str) -> Result<(), MaterializeError> {
    let folder = destination.join(name);

    create_directory(&folder)?;

    for suffix in API_FILE_SUFFIXES {
        write_file(&folder.join(format!("{}.{}", name, suffix)), "")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_creates_folder_with_exactly_five_empty_files() {
        let out = tempfile::tempdir().unwrap();

        scaffold_api_folder(out.path(), "user").unwrap();

        let folder = out.path().join("user");
        for suffix in API_FILE_SUFFIXES {
            let path = folder.join(format!("user.{}", suffix));

            assert_eq!(fs::read_to_string(&path).unwrap(), "");
        }
        assert_eq!(fs::read_dir(&folder).unwrap().count(), 5);
    }

    #[test]
    fn test_creates_missing_destination_directories() {
        let out = tempfile::tempdir().unwrap();
        let destination = out.path().join("not/yet/there");

        scaffold_api_folder(&destination, "order").unwrap();

        assert!(destination.join("order/order.router").is_file());
    }
}
