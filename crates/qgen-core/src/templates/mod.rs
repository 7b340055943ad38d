//! Embedded templates, bundle manifest, rendering and materialization
//!
//! This module provides:
//! - Manifest types (RootManifest, Bundle, Blueprint)
//! - The compiled-in template bodies
//! - Handlebars rendering with the project request as context
//! - Writing rendered bundles into a fresh project directory

pub mod embedded;
pub mod manifest;
pub mod materializer;
pub mod renderer;

use crate::error::{Result, ScaffoldError};
use crate::project::Variant;

pub use manifest::{Blueprint, Bundle, BundleKind, RootManifest};
pub use materializer::{create_root, materialize, write_bundles};
pub use renderer::TemplateRenderer;

/// Bundle manifest plus every template body, parsed and ready to render
pub struct Catalog {
    manifest: RootManifest,
    renderer: TemplateRenderer,
}

impl Catalog {
    /// Load the embedded catalog.
    ///
    /// Fails on a malformed manifest, a blueprint without a template body, or
    /// a body that does not parse. None of these depend on user input.
    pub fn load() -> Result<Self> {
        let manifest: RootManifest = serde_yaml::from_str(embedded::ROOT_MANIFEST)
            .map_err(|e| ScaffoldError::Catalog(format!("template.yaml: {}", e)))?;
        manifest.validate().map_err(ScaffoldError::Catalog)?;

        let mut renderer = TemplateRenderer::new();
        for (id, body) in embedded::TEMPLATES {
            renderer.register(id, body)?;
        }

        for bundle in &manifest.bundles {
            for blueprint in &bundle.blueprints {
                if !renderer.has_template(&blueprint.template) {
                    return Err(ScaffoldError::Catalog(format!(
                        "blueprint {} refers to unknown template '{}'",
                        blueprint.relative_path().display(),
                        blueprint.template
                    )));
                }
            }
        }

        Ok(Self { manifest, renderer })
    }

    pub fn manifest(&self) -> &RootManifest {
        &self.manifest
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    /// Bundles to write for `variant`, in write order
    pub fn bundles_for(&self, variant: Variant) -> Vec<&Bundle> {
        variant
            .bundle_kinds()
            .iter()
            .filter_map(|kind| self.manifest.bundle(*kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn paths_for(catalog: &Catalog, variant: Variant) -> Vec<PathBuf> {
        catalog
            .bundles_for(variant)
            .iter()
            .flat_map(|b| b.blueprints.iter().map(Blueprint::relative_path))
            .collect()
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.manifest().bundles.len(), BundleKind::ALL.len());
    }

    #[test]
    fn test_every_embedded_template_is_used() {
        let catalog = Catalog::load().unwrap();
        for (id, _) in embedded::TEMPLATES {
            let used = catalog
                .manifest()
                .bundles
                .iter()
                .flat_map(|b| &b.blueprints)
                .any(|bp| bp.template == *id);
            assert!(used, "template '{}' is not referenced by any blueprint", id);
        }
    }

    #[test]
    fn test_bundles_for_web() {
        let catalog = Catalog::load().unwrap();
        let kinds: Vec<BundleKind> = catalog
            .bundles_for(Variant::Web)
            .iter()
            .map(|b| b.kind)
            .collect();
        assert_eq!(kinds, Variant::Web.bundle_kinds());
        assert_eq!(paths_for(&catalog, Variant::Web).len(), 17);
    }

    #[test]
    fn test_bundles_for_cli_omits_api() {
        let catalog = Catalog::load().unwrap();
        let bundles = catalog.bundles_for(Variant::Cli);
        assert_eq!(bundles.len(), 6);
        assert!(bundles.iter().all(|b| b.kind != BundleKind::Api));
        assert_eq!(paths_for(&catalog, Variant::Cli).len(), 15);
    }

    #[test]
    fn test_config_bundle_has_four_blueprints() {
        let catalog = Catalog::load().unwrap();
        let configs = catalog.manifest().bundle(BundleKind::Configs).unwrap();
        let files: Vec<&str> = configs.blueprints.iter().map(|b| b.file.as_str()).collect();
        assert_eq!(
            files,
            vec!["config.go", "env.go", "database.json", "config.json"]
        );
    }
}
