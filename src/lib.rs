#![deny(
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    unsafe_code
)]
#![deny(
    rust_2018_compatibility,
    rust_2018_idioms
)]
#![deny(
    rust_2021_compatibility,
    rust_2021_incompatible_closure_captures,
    rust_2021_incompatible_or_patterns,
    rust_2021_prefixes_incompatible_syntax,
    rust_2021_prelude_collisions
)]
#![deny(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic
)]
#![warn(unused)]
#![allow( // TODO: document the public API and its error cases
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    missing_docs,
    rustdoc::all
)]

pub mod cli;
mod cursor;
mod directory;
mod error;
mod file;
mod file_system;
mod node;
pub mod output;
pub mod shell;
pub mod testing;
mod traits;

pub use cursor::Cursor;
pub use directory::Directory;
pub use error::{
    AddError,
    GetError,
    RemoveError,
};
pub use file::File;
pub use file_system::{
    FileSystem,
    DEFAULT_ROOT,
};
pub use node::Node;
pub use traits::{
    Measure,
    Named,
    Render,
    INDENT,
};
