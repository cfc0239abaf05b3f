use crate::catalog::Catalog;
use inquire::{required, Confirm, InquireError, Select, Text};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("Error occurred trying to prompt user")]
    #[diagnostic(
        code(boompie::prompt),
        help("Interactive prompts need a real terminal")
    )]
    Inquire(#[from] InquireError),
}

/// Asks for the output path. `None` means the user backed out, which is a
/// no-op for the invocation, not a failure.
pub fn destination() -> Result<Option<String>, PromptError> {
    let answer = Text::new("Destination:")
        .with_help_message("Directory the scaffold will be generated into")
        .with_validator(required!("destination is required"))
        .prompt();

    absorb_cancel(answer)
}

/// Asks for the base name used by the api folder scaffold.
pub fn folder_name() -> Result<Option<String>, PromptError> {
    let answer = Text::new("Folder name:")
        .with_help_message("Base name for the folder and the files inside it")
        .with_validator(required!("folder name is required"))
        .prompt();

    absorb_cancel(answer)
}

/// Offers the catalog's template names for selection.
pub fn pick_template(catalog: &Catalog) -> Result<Option<String>, PromptError> {
    let choices: Vec<String> = catalog.templates.keys().cloned().collect();

    let answer = Select::new("Select template:", choices).prompt();

    absorb_cancel(answer)
}

/// Final gate after the preview. Canceling counts as declining.
pub fn confirm_apply() -> Result<bool, PromptError> {
    let answer = Confirm::new("Apply these changes?")
        .with_default(true)
        .prompt();

    Ok(absorb_cancel(answer)?.unwrap_or(false))
}

// Esc and ctrl-c end the invocation quietly; every other inquire failure is
// a real error.
fn absorb_cancel<T>(result: Result<T, InquireError>) -> Result<Option<T>, PromptError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(error) => Err(PromptError::Inquire(error)),
    }
}
