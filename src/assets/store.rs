use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assets::catalog::VehicleId;
use crate::foundation::error::{WrapError, WrapResult};

/// Relative path of a vehicle's template image: `templates/{id}/template.png`.
pub fn template_rel_path(vehicle: &VehicleId) -> String {
    format!("templates/{}/template.png", vehicle.as_str())
}

/// Relative path of a vehicle's display thumbnail: `templates/{id}/vehicle_image.png`.
///
/// The thumbnail is display-only and never reaches the compositor.
pub fn preview_rel_path(vehicle: &VehicleId) -> String {
    format!("templates/{}/vehicle_image.png", vehicle.as_str())
}

/// Canonical form of an asset path below an asset root.
///
/// Both `/` and `\` separate segments; empty and `.` segments are dropped. Rooted paths, drive
/// prefixes (`C:`), and `..` segments are rejected so a design or vehicle id can never address a
/// file outside the root.
pub fn normalize_rel_path(source: &str) -> WrapResult<String> {
    let reject = |why: &str| WrapError::validation(format!("asset path '{source}' {why}"));

    if source.starts_with(['/', '\\']) {
        return Err(reject("is not relative to the asset root"));
    }
    let segments: Vec<&str> = source
        .split(['/', '\\'])
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect();

    if let Some(bad) = segments.iter().find(|seg| **seg == ".." || seg.contains(':')) {
        return Err(reject(&format!("has a disallowed segment '{bad}'")));
    }
    if segments.is_empty() {
        return Err(reject("does not name a file"));
    }
    Ok(segments.join("/"))
}

/// Retrieval collaborator: supplies encoded bytes for assets addressed by relative path.
///
/// Implementations may block; [`crate::DesignSession`] only sees the decoded results.
pub trait AssetSource {
    /// Read the encoded bytes stored at `rel_path`.
    fn read(&self, rel_path: &str) -> WrapResult<Vec<u8>>;

    /// Encoded template bytes for `vehicle`.
    fn template_bytes(&self, vehicle: &VehicleId) -> WrapResult<Vec<u8>> {
        self.read(&template_rel_path(vehicle))
    }

    /// Encoded thumbnail bytes for `vehicle`.
    fn preview_bytes(&self, vehicle: &VehicleId) -> WrapResult<Vec<u8>> {
        self.read(&preview_rel_path(vehicle))
    }
}

/// [`AssetSource`] rooted at a directory on disk.
#[derive(Clone, Debug)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    /// Serve assets from below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path against the root after normalization.
    pub fn resolve(&self, rel_path: &str) -> WrapResult<PathBuf> {
        let norm = normalize_rel_path(rel_path)?;
        Ok(self.root.join(Path::new(&norm)))
    }
}

impl AssetSource for DirAssetSource {
    fn read(&self, rel_path: &str) -> WrapResult<Vec<u8>> {
        let p = self.resolve(rel_path)?;
        let bytes =
            std::fs::read(&p).with_context(|| format!("read asset '{}'", p.display()))?;
        Ok(bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
