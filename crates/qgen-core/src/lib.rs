//! qgen core - backend project skeleton generation
//!
//! This library writes a fixed set of boilerplate files into a new project
//! directory. The only input is the project name, substituted into templates
//! that are compiled into the binary.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - The template catalog, bundle selection and
//!   the materializer that writes rendered files
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and [`generate_in`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack progress output (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based progress output
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use qgen_core::{generate_in, ProjectRequest, Variant};
//!
//! let request = ProjectRequest::new("demo", Variant::Cli);
//! let project = generate_in(std::path::Path::new("."), &request)?;
//! assert_eq!(project.files.len(), 15);
//! ```

pub mod error;
pub mod product;
pub mod project;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

use anyhow::{Context, Result};
use std::path::Path;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use project::{GeneratedProject, ProjectRequest, Variant};
pub use templates::{Blueprint, Bundle, BundleKind, Catalog};

#[cfg(feature = "tui")]
pub use tui::{run, run_in};

/// Load the embedded template catalog
pub fn load_catalog() -> Result<Catalog> {
    Catalog::load().context("Failed to load embedded templates")
}

/// Generate a project below `base`.
///
/// The project root is `base/<name>` and must not exist yet.
pub fn generate_in(base: &Path, request: &ProjectRequest) -> Result<GeneratedProject> {
    let catalog = load_catalog()?;
    generate_with(&catalog, base, request)
}

/// Generate a project below `base` from an already loaded catalog
pub fn generate_with(
    catalog: &Catalog,
    base: &Path,
    request: &ProjectRequest,
) -> Result<GeneratedProject> {
    let root = request.root_in(base);
    let bundles = catalog.bundles_for(request.variant);

    let files = templates::materialize(&root, &bundles, catalog.renderer(), request)?;

    Ok(GeneratedProject { root, files })
}
