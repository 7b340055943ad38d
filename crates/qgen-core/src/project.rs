//! Project request and variant selection

use crate::templates::manifest::BundleKind;
use serde::Serialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Project flavor requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Web,
    Cli,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Web => "web",
            Variant::Cli => "cli",
        }
    }

    /// Bundles generated for this variant, in write order
    pub fn bundle_kinds(&self) -> &'static [BundleKind] {
        match self {
            Variant::Web => &[
                BundleKind::Main,
                BundleKind::Api,
                BundleKind::Cmds,
                BundleKind::Configs,
                BundleKind::Dbs,
                BundleKind::Services,
                BundleKind::Utils,
            ],
            Variant::Cli => &[
                BundleKind::Main,
                BundleKind::Cmds,
                BundleKind::Configs,
                BundleKind::Dbs,
                BundleKind::Services,
                BundleKind::Utils,
            ],
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single generation request; also the render context seen by templates
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRequest {
    pub name: String,
    pub variant: Variant,
}

impl ProjectRequest {
    pub fn new(name: impl Into<String>, variant: Variant) -> Self {
        Self {
            name: name.into(),
            variant,
        }
    }

    /// Project root below `base`.
    ///
    /// Only the normal components of the name are used, so a rooted name or
    /// one with `..` still lands below `base`.
    pub fn root_in(&self, base: &Path) -> PathBuf {
        let mut root = base.to_path_buf();
        for component in Path::new(&self.name).components() {
            if let Component::Normal(part) = component {
                root.push(part);
            }
        }
        root
    }
}

/// Result of a successful generation run
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    pub root: PathBuf,
    /// Paths of the written files, relative to `root`
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_is_cli_plus_api() {
        let web = Variant::Web.bundle_kinds();
        let cli = Variant::Cli.bundle_kinds();

        assert_eq!(web.len(), cli.len() + 1);
        assert!(cli.iter().all(|k| web.contains(k)));

        let extra: Vec<_> = web.iter().filter(|k| !cli.contains(k)).collect();
        assert_eq!(extra, vec![&BundleKind::Api]);
    }

    #[test]
    fn test_bundle_order() {
        assert_eq!(Variant::Web.bundle_kinds()[0], BundleKind::Main);
        assert_eq!(Variant::Web.bundle_kinds()[1], BundleKind::Api);
        assert_eq!(Variant::Cli.bundle_kinds()[1], BundleKind::Cmds);
    }

    #[test]
    fn test_root_in_joins_name() {
        let request = ProjectRequest::new("demo", Variant::Cli);
        assert_eq!(request.root_in(Path::new("/work")), PathBuf::from("/work/demo"));
    }

    #[test]
    fn test_root_in_keeps_rooted_names_below_base() {
        let request = ProjectRequest::new("/srv/app", Variant::Web);
        assert_eq!(
            request.root_in(Path::new("/work")),
            PathBuf::from("/work/srv/app")
        );

        let request = ProjectRequest::new("../up/./app", Variant::Web);
        assert_eq!(
            request.root_in(Path::new("/work")),
            PathBuf::from("/work/up/app")
        );
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Web.to_string(), "web");
        assert_eq!(Variant::Cli.to_string(), "cli");
    }
}
