//! Error types for catalog loading and project generation

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the template catalog or writing a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Something already occupies the project root path
    #[error("{} already exists{occupant}", .path.display())]
    AlreadyExists { path: PathBuf, occupant: Occupant },

    /// The project root or one of its subdirectories could not be created
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A generated file could not be created or written
    #[error("failed to write file {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A registered template failed to render
    #[error("failed to render template '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// The embedded manifest or a template body is malformed
    #[error("invalid template catalog: {0}")]
    Catalog(String),
}

/// What was found at an occupied project root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Directory,
    Other,
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Directory => Ok(()),
            Occupant::Other => f.write_str(" and is not a directory"),
        }
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
