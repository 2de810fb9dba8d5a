//! Bundle resolver validation tests.

use std::fs;

use inferlink::model::{AssetResolver, BundleResolver, ModelAsset, ResolveError};

fn bundle_with_model() -> (tempfile::TempDir, BundleResolver) {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("models")).expect("mkdir models");
    fs::write(dir.path().join("models/detector.tflite"), b"model-bytes").expect("write model");
    let resolver = BundleResolver::new(dir.path().to_path_buf());
    (dir, resolver)
}

#[test]
fn resolves_bundled_model_to_file_uri() {
    let (_dir, resolver) = bundle_with_model();

    let locator = resolver
        .resolve(&ModelAsset::new("models/detector.tflite"))
        .expect("should resolve");

    assert!(locator.as_str().starts_with("file://"));
    assert!(locator.as_str().ends_with("detector.tflite"));
}

#[test]
fn missing_asset_is_not_found() {
    let (_dir, resolver) = bundle_with_model();

    let err = resolver
        .resolve(&ModelAsset::new("models/absent.tflite"))
        .unwrap_err();

    assert!(matches!(err, ResolveError::NotFound(_)));
}

#[test]
fn asset_outside_allowed_dirs_is_rejected() {
    let (dir, resolver) = bundle_with_model();
    fs::write(dir.path().join("secrets.txt"), b"nope").expect("write");

    let err = resolver.resolve(&ModelAsset::new("secrets.txt")).unwrap_err();

    assert!(matches!(err, ResolveError::PathNotAllowed(_)));
}

#[test]
fn traversal_out_of_the_bundle_is_rejected() {
    let (dir, resolver) = bundle_with_model();
    // A sibling file reachable only by walking out of models/.
    fs::write(dir.path().join("escape.bin"), b"nope").expect("write");

    let err = resolver
        .resolve(&ModelAsset::new("models/../escape.bin"))
        .unwrap_err();

    assert!(matches!(err, ResolveError::PathNotAllowed(_)));
}

#[test]
fn resolution_is_deterministic() {
    let (_dir, resolver) = bundle_with_model();
    let asset = ModelAsset::new("models/detector.tflite");

    let first = resolver.resolve(&asset).expect("resolve");
    let second = resolver.resolve(&asset).expect("resolve");
    assert_eq!(first, second);
}
