//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait once and passes it by reference into the
//! generation workflow, so identity and user-facing text live in one place.

use crate::project::ProjectRequest;

/// Configuration trait for a generator binary
///
/// Defines:
/// - Product identity (name, display name, version)
/// - Help text
/// - Post-generation instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Binary name as typed on the command line
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Version string reported by `--version`
    fn version(&self) -> &'static str;

    /// Headline printed once a project has been generated
    fn created_message(&self, request: &ProjectRequest) -> String {
        format!(
            "Create project with {}: {}",
            request.variant, request.name
        )
    }

    /// Commands the user runs next, one per line
    fn next_steps(&self, request: &ProjectRequest) -> Vec<String>;
}
