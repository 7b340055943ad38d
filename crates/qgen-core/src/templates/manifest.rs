//! Template manifest types and parsing

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Deepest directory nesting a blueprint may use below the project root
pub const MAX_PATH_DEPTH: usize = 3;

/// Project layer a bundle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleKind {
    Main,
    Api,
    Cmds,
    Configs,
    Dbs,
    Services,
    Utils,
}

impl BundleKind {
    pub const ALL: [BundleKind; 7] = [
        BundleKind::Main,
        BundleKind::Api,
        BundleKind::Cmds,
        BundleKind::Configs,
        BundleKind::Dbs,
        BundleKind::Services,
        BundleKind::Utils,
    ];
}

/// A single template-to-file mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blueprint {
    /// Identifier of the embedded template body
    pub template: String,

    /// Directory segments below the project root
    #[serde(default)]
    pub path: Vec<String>,

    /// Name of the generated file
    pub file: String,
}

impl Blueprint {
    /// Directory of the generated file, relative to the project root
    pub fn relative_dir(&self) -> PathBuf {
        self.path
            .iter()
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// Path of the generated file, relative to the project root
    pub fn relative_path(&self) -> PathBuf {
        self.relative_dir().join(&self.file)
    }
}

/// Blueprints written together for one project layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    pub kind: BundleKind,

    #[serde(default)]
    pub description: String,

    pub blueprints: Vec<Blueprint>,
}

/// Root template manifest (templates/template.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootManifest {
    pub bundles: Vec<Bundle>,
}

impl RootManifest {
    /// Look up the bundle for a project layer
    pub fn bundle(&self, kind: BundleKind) -> Option<&Bundle> {
        self.bundles.iter().find(|b| b.kind == kind)
    }

    /// Check the structural rules the materializer relies on
    pub fn validate(&self) -> Result<(), String> {
        for kind in BundleKind::ALL {
            let count = self.bundles.iter().filter(|b| b.kind == kind).count();
            if count != 1 {
                return Err(format!(
                    "bundle '{:?}' must appear exactly once, found {}",
                    kind, count
                ));
            }
        }

        for bundle in &self.bundles {
            for blueprint in &bundle.blueprints {
                if blueprint.file.is_empty() {
                    return Err(format!(
                        "blueprint '{}' has an empty file name",
                        blueprint.template
                    ));
                }
                if blueprint.path.len() > MAX_PATH_DEPTH {
                    return Err(format!(
                        "blueprint '{}' is nested {} levels deep (max {})",
                        blueprint.template,
                        blueprint.path.len(),
                        MAX_PATH_DEPTH
                    ));
                }
            }
        }

        Ok(())
    }
}
