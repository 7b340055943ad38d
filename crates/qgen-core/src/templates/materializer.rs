//! Writing rendered bundles to disk

use crate::error::{Occupant, Result, ScaffoldError};
use crate::project::ProjectRequest;
use crate::templates::manifest::Bundle;
use crate::templates::renderer::TemplateRenderer;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Create the project root, refusing to touch anything already at `root`
pub fn create_root(root: &Path) -> Result<()> {
    match fs::symlink_metadata(root) {
        Ok(meta) => {
            let occupant = if meta.is_dir() {
                Occupant::Directory
            } else {
                Occupant::Other
            };
            return Err(ScaffoldError::AlreadyExists {
                path: root.to_path_buf(),
                occupant,
            });
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(ScaffoldError::CreateDir {
                path: root.to_path_buf(),
                source: e,
            })
        }
    }

    // Nested project names need their parents; the root itself must be new
    if let Some(parent) = root.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(root).map_err(|e| {
        // Lost a race with another process creating the same root
        if e.kind() == io::ErrorKind::AlreadyExists {
            ScaffoldError::AlreadyExists {
                path: root.to_path_buf(),
                occupant: Occupant::Directory,
            }
        } else {
            ScaffoldError::CreateDir {
                path: root.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Render every blueprint of `bundles` into `root`, in order.
///
/// `root` must already exist. Stops at the first failure; files written
/// before it are left in place.
pub fn write_bundles(
    root: &Path,
    bundles: &[&Bundle],
    renderer: &TemplateRenderer,
    request: &ProjectRequest,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for bundle in bundles {
        for blueprint in &bundle.blueprints {
            let dir = root.join(blueprint.relative_dir());
            fs::create_dir_all(&dir).map_err(|e| ScaffoldError::CreateDir {
                path: dir.clone(),
                source: e,
            })?;

            let content = renderer.render(&blueprint.template, request)?;

            let target = dir.join(&blueprint.file);
            fs::write(&target, content).map_err(|e| ScaffoldError::WriteFile {
                path: target.clone(),
                source: e,
            })?;

            written.push(blueprint.relative_path());
        }
    }

    Ok(written)
}

/// Create `root` and write all bundles into it
pub fn materialize(
    root: &Path,
    bundles: &[&Bundle],
    renderer: &TemplateRenderer,
    request: &ProjectRequest,
) -> Result<Vec<PathBuf>> {
    create_root(root)?;
    write_bundles(root, bundles, renderer, request)
}
