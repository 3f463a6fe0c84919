use std::path::{Path, PathBuf};

use anyhow::Context;
use jnitypemap::{ManifestLoader, TypeGraph};

/// Load every manifest under `paths` into a single validated type graph.
pub fn load_graph(paths: &[PathBuf]) -> anyhow::Result<TypeGraph> {
    let manifests = collect_manifests(paths)?;
    if manifests.is_empty() {
        anyhow::bail!("no manifest files found");
    }

    let mut loader = ManifestLoader::new();
    for manifest in &manifests {
        loader
            .load_file(manifest)
            .with_context(|| format!("failed to load manifest: {}", manifest.display()))?;
    }
    loader.finish().context("invalid type graph")
}

/// Expand directories into the `.json` files they contain; files are kept as given.
///
/// Each directory contributes its files sorted, so load order is stable across runs.
pub fn collect_manifests(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut manifests = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut files = Vec::new();
            collect_manifests_recursive(path, &mut files)?;
            files.sort();
            manifests.extend(files);
        } else {
            manifests.push(path.clone());
        }
    }
    Ok(manifests)
}

fn collect_manifests_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_manifests_recursive(&path, files)?;
        } else if is_manifest_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

/// Returns true if the path has a `.json` extension.
pub fn is_manifest_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("json"))
}
