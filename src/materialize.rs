use crate::errors::{FileOperation, IoError};
use colored::Colorize;
use miette::Diagnostic;
use saadjie::TemplateNode;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error("I/O error within materialize domain")]
    #[diagnostic(code(boompie::materialize::io))]
    Io(#[from] IoError),
}

/// Walks the parsed nodes depth-first and realizes them under `current`.
///
/// Siblings are handled in list order, and a directory's children are fully
/// materialized before the traversal moves on to the directory's later
/// siblings. Directory creation is idempotent; file creation overwrites
/// whatever was at the path before.
///
/// # Errors
///
/// The first I/O failure aborts the remaining traversal. Entries created
/// before the failure stay on disk; partial output is the documented
/// contract of a failed run.
pub fn materialize(nodes: &[TemplateNode], current: &Path) -> Result<(), MaterializeError> {
    for node in nodes {
        match node {
            TemplateNode::Directory { name, children } => {
                let new_path = current.join(name);

                create_directory(&new_path)?;

                materialize(children, &new_path)?;
            }
            TemplateNode::File { name, content } => {
                let new_path = current.join(name);

                write_file(&new_path, content)?;
            }
        }
    }

    Ok(())
}

/// Creates all directories in the specified path if they do not exist.
///
/// # Errors
///
/// Returns a [`MaterializeError`] if directory creation fails due to I/O issues.
pub fn create_directory(path: &Path) -> Result<(), MaterializeError> {
    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    Ok(())
}

/// Writes a file with the provided contents to the specified path, creating
/// or overwriting it, and prints a message to the console indicating that
/// the file has been created.
///
/// # Errors
///
/// Returns a [`MaterializeError`] if writing to the file fails due to I/O issues.
pub fn write_file(path: &Path, contents: &str) -> Result<(), MaterializeError> {
    fs::write(path, contents).map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content: &str) -> TemplateNode {
        TemplateNode::File {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    fn directory(name: &str, children: Vec<TemplateNode>) -> TemplateNode {
        TemplateNode::Directory {
            name: name.to_string(),
            children,
        }
    }

    #[test]
    fn test_materializes_nested_directory_and_file() {
        let out = tempfile::tempdir().unwrap();
        let nodes = vec![directory("src", vec![file("index", "x")])];

        materialize(&nodes, out.path()).unwrap();

        assert!(out.path().join("src").is_dir());
        assert_eq!(fs::read_to_string(out.path().join("src/index")).unwrap(), "x");
    }

    #[test]
    fn test_directory_materialization_is_idempotent() {
        let out = tempfile::tempdir().unwrap();
        let nodes = vec![directory("a", vec![directory("b", vec![])])];

        materialize(&nodes, out.path()).unwrap();
        materialize(&nodes, out.path()).unwrap();

        assert!(out.path().join("a/b").is_dir());
    }

    #[test]
    fn test_file_materialization_overwrites_previous_content() {
        let out = tempfile::tempdir().unwrap();

        materialize(&[file("note", "first")], out.path()).unwrap();
        materialize(&[file("note", "second")], out.path()).unwrap();

        assert_eq!(fs::read_to_string(out.path().join("note")).unwrap(), "second");
    }

    #[test]
    fn test_sibling_directories_with_same_name_merge_their_children() {
        let out = tempfile::tempdir().unwrap();
        let nodes = vec![
            directory("shared", vec![file("one", "")]),
            directory("shared", vec![file("two", "")]),
        ];

        materialize(&nodes, out.path()).unwrap();

        assert!(out.path().join("shared/one").is_file());
        assert!(out.path().join("shared/two").is_file());
    }

    #[test]
    fn test_earlier_siblings_stay_on_disk_when_a_later_one_fails() {
        let out = tempfile::tempdir().unwrap();
        let nodes = vec![
            file("kept", "ok"),
            // Writing a file at a path whose parent does not exist fails.
            file("missing-parent/lost", ""),
        ];

        let result = materialize(&nodes, out.path());

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(out.path().join("kept")).unwrap(), "ok");
    }

    #[test]
    fn test_missing_intermediate_directories_are_created() {
        let out = tempfile::tempdir().unwrap();
        let destination = out.path().join("deeply/nested");

        create_directory(&destination).unwrap();

        assert!(destination.is_dir());
    }
}
