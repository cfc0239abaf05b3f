use crate::{
    catalog::{self, Catalog},
    config::{self, Config},
    descriptor, materialize,
    preview::preview_as_tree,
    prompt, scaffold,
};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum BoompieError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] catalog::CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Descriptor(#[from] descriptor::DescriptorError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] materialize::MaterializeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),
}

/// Generates a scaffold at `destination` from the descriptor file at
/// `descriptor_path`. Prompts for the destination when none is given;
/// backing out of the prompt ends the invocation without side effects.
///
/// # Errors
///
/// Returns a [`BoompieError`] if:
///
/// - The descriptor cannot be read or parsed.
/// - A directory or file cannot be created or written to.
pub fn generate_from_template(
    descriptor_path: &str,
    destination: Option<&str>,
) -> Result<(), BoompieError> {
    let nodes = descriptor::load(Path::new(descriptor_path))?;

    log::debug!("parsed {} root node(s) from descriptor", nodes.len());

    let Some(destination) = resolve_destination(destination)? else {
        return Ok(());
    };

    materialize::create_directory(&destination)?;
    materialize::materialize(&nodes, &destination)?;

    Ok(())
}

/// Interactively picks a template from the configured catalog, previews the
/// resulting tree and, on confirmation, generates it at the destination.
///
/// All prompting happens strictly before the first side effect; declining
/// or backing out anywhere means nothing is written.
///
/// # Errors
///
/// Returns a [`BoompieError`] if:
///
/// - The catalog directory cannot be listed or holds no descriptors.
/// - The selected descriptor cannot be read or parsed.
/// - A directory or file cannot be created or written to.
/// - A prompt fails for a reason other than the user backing out.
pub fn generate_default_template(
    config: &Config,
    destination: Option<&str>,
) -> Result<(), BoompieError> {
    let catalog = Catalog::from_config(config)?;

    log::debug!(
        "catalog built from: {}",
        config.template_dir().display()
    );

    let Some(template) = prompt::pick_template(&catalog)? else {
        return Ok(());
    };

    let descriptor_path = catalog.resolve(&template)?.to_path_buf();

    let Some(destination) = resolve_destination(destination)? else {
        return Ok(());
    };

    let nodes = descriptor::load(&descriptor_path)?;

    preview_as_tree(&nodes, &destination);

    if !prompt::confirm_apply()? {
        return Ok(());
    }

    materialize::create_directory(&destination)?;
    materialize::materialize(&nodes, &destination)?;

    Ok(())
}

/// Creates the conventional api folder (`name` plus five empty files) at
/// the destination. Both arguments are prompted for when absent.
///
/// # Errors
///
/// Returns a [`BoompieError`] if the folder or one of its files cannot be
/// created, or a prompt fails for a reason other than the user backing out.
pub fn generate_api_folder(
    name: Option<&str>,
    destination: Option<&str>,
) -> Result<(), BoompieError> {
    let name = match name {
        Some(name) => name.to_string(),
        None => match prompt::folder_name()? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    let Some(destination) = resolve_destination(destination)? else {
        return Ok(());
    };

    scaffold::scaffold_api_folder(&destination, &name)?;

    Ok(())
}

/// Prints the names of the templates available in the configured catalog.
///
/// # Errors
///
/// Returns a [`BoompieError`] if the catalog directory cannot be listed or
/// holds no descriptors.
pub fn list_templates(config: &Config) -> Result<(), BoompieError> {
    let catalog = Catalog::from_config(config)?;

    for (name, path) in &catalog.templates {
        println!("{}  ({})", name, path.display());
    }

    Ok(())
}

fn resolve_destination(destination: Option<&str>) -> Result<Option<PathBuf>, BoompieError> {
    let destination = match destination {
        Some(destination) => Some(destination.to_string()),
        None => prompt::destination()?,
    };

    Ok(destination.map(PathBuf::from))
}
