use crate::config::Config;
use crate::errors::{FileOperation, IoError};
use indexmap::IndexMap;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions recognized as descriptor documents. The extension also decides
/// how the file is parsed later on.
const DESCRIPTOR_EXTENSIONS: [&str; 3] = ["yaml", "yml", "toml"];

#[derive(Error, Debug, Diagnostic)]
pub enum CatalogError {
    #[error("I/O error within catalog domain")]
    #[diagnostic(code(boompie::catalog::io))]
    Io(#[from] IoError),

    #[error("Template not found with name: {name}")]
    #[diagnostic(
        code(boompie::catalog::template_not_found),
        help("Run the list command to see the available templates")
    )]
    TemplateNotFound { name: String },

    #[error("No templates found in '{dir}'")]
    #[diagnostic(
        code(boompie::catalog::empty),
        help("Add descriptor files (.yaml, .yml or .toml) to the template directory")
    )]
    Empty { dir: PathBuf },
}

/// The set of named templates available to the interactive commands, one
/// descriptor document per name.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub templates: IndexMap<String, PathBuf>,
}
impl Catalog {
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        Self::from_dir(config.template_dir())
    }

    /// Lists descriptor files directly under `dir` and keys them by file
    /// stem, so `web-api.yaml` is offered as `web-api`.
    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut templates = IndexMap::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(e) => e,
                Err(error) => {
                    let path = error.path().unwrap_or(dir).to_path_buf();

                    Err(IoError::new(FileOperation::List, path, error.into()))?
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            let recognized = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| DESCRIPTOR_EXTENSIONS.contains(&ext))
                .unwrap_or(false);

            if !recognized {
                continue;
            }

            let Some(stem) = path.file_stem() else {
                continue;
            };

            templates.insert(stem.to_string_lossy().to_string(), path.to_path_buf());
        }

        if templates.is_empty() {
            return Err(CatalogError::Empty {
                dir: dir.to_path_buf(),
            });
        }

        Ok(Catalog { templates })
    }

    pub fn resolve(&self, name: &str) -> Result<&Path, CatalogError> {
        self.templates
            .get(name)
            .map(PathBuf::as_path)
            .ok_or_else(|| CatalogError::TemplateNotFound {
                name: name.to_string(),
            })
    }
}
