use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use saadjie::{parse_nodes, TemplateNode};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum DescriptorError {
    #[error("I/O error within descriptor domain")]
    #[diagnostic(code(boompie::descriptor::io))]
    Io(#[from] IoError),

    #[error("Unable to parse yaml descriptor at '{path}'")]
    #[diagnostic(code(boompie::descriptor::parse_yaml), help("Review descriptor file"))]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unable to parse toml descriptor at '{path}'")]
    #[diagnostic(code(boompie::descriptor::parse_toml), help("Review descriptor file"))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported descriptor extension on '{path}'")]
    #[diagnostic(
        code(boompie::descriptor::extension),
        help("Descriptors are read from .yaml, .yml or .toml files")
    )]
    UnsupportedExtension { path: PathBuf },
}

/// Reads the descriptor document at `path` and parses it into a node tree.
/// The file extension decides the format; both formats deserialize into the
/// same dynamic value before the tolerant node projection runs, so the
/// materializer never sees format-specific shapes.
///
/// # Errors
///
/// Unreadable files, syntax errors and unknown extensions are fatal for the
/// invocation. Malformed nodes inside a well-formed document are not; they
/// are dropped by the projection.
pub fn load(path: &Path) -> Result<Vec<TemplateNode>, DescriptorError> {
    let content = fs::read_to_string(path)
        .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();

    let value: serde_yaml::Value = match extension {
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|err| DescriptorError::ParseYaml {
                path: path.to_path_buf(),
                source: err,
            })?
        }
        "toml" => toml::from_str(&content).map_err(|err| DescriptorError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        })?,
        _ => {
            return Err(DescriptorError::UnsupportedExtension {
                path: path.to_path_buf(),
            })
        }
    };

    log::debug!("loaded descriptor from: {}", path.display());

    Ok(parse_nodes(&value))
}
