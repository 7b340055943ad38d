//! Charm-style progress output using cliclack
//!
//! Progress goes to stderr; the next-step tip goes to stdout so it can be
//! copied or piped.

use crate::product::ProductConfig;
use crate::project::{GeneratedProject, ProjectRequest};
use crate::templates::Catalog;
use anyhow::{Context, Result};
use std::path::Path;

/// Generate the requested project below the current directory, reporting
/// progress on the terminal
pub fn run<C: ProductConfig>(config: &C, request: &ProjectRequest) -> Result<GeneratedProject> {
    let base = std::env::current_dir().context("Failed to read current directory")?;
    run_in(config, &base, request)
}

/// Same as [`run`], below an explicit base directory
pub fn run_in<C: ProductConfig>(
    config: &C,
    base: &Path,
    request: &ProjectRequest,
) -> Result<GeneratedProject> {
    // Catalog problems surface before any terminal output
    let catalog = crate::load_catalog()?;

    cliclack::intro(format!("{} create {}", config.display_name(), request.variant))?;

    let project = create_project(&catalog, base, request)?;

    print_next_steps(config, request)?;

    Ok(project)
}

fn create_project(
    catalog: &Catalog,
    base: &Path,
    request: &ProjectRequest,
) -> Result<GeneratedProject> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match crate::generate_with(catalog, base, request) {
        Ok(project) => {
            spinner.stop(format!(
                "Created {} files in {}",
                project.files.len(),
                project.root.display()
            ));
            Ok(project)
        }
        Err(e) => {
            // The caller prints the error itself; only close the session here
            spinner.stop("Failed to create project");
            cliclack::outro_cancel("Project was not created")?;
            Err(e)
        }
    }
}

/// Print the post-generation tip to stdout
pub fn print_next_steps<C: ProductConfig>(config: &C, request: &ProjectRequest) -> Result<()> {
    println!("{}", config.created_message(request));
    for step in config.next_steps(request) {
        println!("{}", step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
