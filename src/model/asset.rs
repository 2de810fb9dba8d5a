//! Model asset references and resolution to fetchable locators.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Asset path not allowed: {0}")]
    PathNotAllowed(PathBuf),

    #[error("Asset not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Opaque, caller-supplied handle identifying a bundled model file.
///
/// Compared by value: observing an equal asset is a no-op for the
/// coordinator, observing a different one restarts the load cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelAsset(String);

impl ModelAsset {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved, fetchable location for a model file.
///
/// Produced fresh on each load attempt; never cached by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator(String);

impl ResourceLocator {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps a model asset reference to a fetchable locator.
///
/// Must be fast and non-blocking; the coordinator calls it synchronously
/// before every load attempt.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, asset: &ModelAsset) -> Result<ResourceLocator, ResolveError>;
}

/// Directories a bundled asset may resolve into.
const ALLOWED_DIRS: &[&str] = &["models", "assets"];

/// Resolves bundled assets to `file://` locators under a base directory.
///
/// Asset references are treated as paths relative to the bundle root and
/// must land inside an allowed subdirectory after canonicalization.
pub struct BundleResolver {
    base_path: PathBuf,
}

impl BundleResolver {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn validate(&self, relative: &str) -> Result<PathBuf, ResolveError> {
        let full_path = self.base_path.join(relative);
        let canonical = full_path
            .canonicalize()
            .map_err(|_| ResolveError::NotFound(full_path.clone()))?;

        let is_allowed = ALLOWED_DIRS.iter().any(|dir| {
            let allowed = self.base_path.join(dir);
            // Canonicalize the allowed root so prefix checks match symlinked bases
            allowed
                .canonicalize()
                .map(|allowed_canonical| canonical.starts_with(&allowed_canonical))
                .unwrap_or(false)
        });

        if !is_allowed {
            return Err(ResolveError::PathNotAllowed(canonical));
        }

        Ok(canonical)
    }
}

impl AssetResolver for BundleResolver {
    fn resolve(&self, asset: &ModelAsset) -> Result<ResourceLocator, ResolveError> {
        let path = self.validate(asset.as_str())?;
        Ok(ResourceLocator::new(format!("file://{}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_equality_is_by_value() {
        let a = ModelAsset::new("models/detector.tflite");
        let b = ModelAsset::new(String::from("models/detector.tflite"));
        assert_eq!(a, b);
        assert_ne!(a, ModelAsset::new("models/other.tflite"));
    }

    #[test]
    fn locator_display_round_trips() {
        let loc = ResourceLocator::new("file:///bundle/models/m.tflite");
        assert_eq!(loc.to_string(), loc.as_str());
    }
}
