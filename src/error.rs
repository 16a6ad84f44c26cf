use miette::Diagnostic;
use thiserror::Error;

// =============================================================================

// Directory Errors

// -----------------------------------------------------------------------------

// Directory Errors - Add

#[derive(Clone, Debug, Diagnostic, Eq, Error, PartialEq)]
pub enum AddError {
    #[diagnostic(
        code(directory::add),
        help("names must be unique among the direct children of a directory")
    )]
    #[error("a node named '{name}' already exists in '{parent}'")]
    DuplicateName { name: String, parent: String },
}

// -----------------------------------------------------------------------------

// Directory Errors - Remove

#[derive(Clone, Debug, Diagnostic, Eq, Error, PartialEq)]
pub enum RemoveError {
    #[diagnostic(code(directory::remove), help("check the contents of the directory"))]
    #[error("no node named '{name}' in '{parent}'")]
    NotFound { name: String, parent: String },
}

// -----------------------------------------------------------------------------

// Directory Errors - Get

#[derive(Clone, Debug, Diagnostic, Eq, Error, PartialEq)]
pub enum GetError {
    #[diagnostic(
        code(directory::get),
        help("only direct child directories can be entered")
    )]
    #[error("no directory named '{name}' in '{parent}'")]
    NotFound { name: String, parent: String },
}
