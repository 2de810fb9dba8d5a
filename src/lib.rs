//! inferlink
//!
//! Adapter between a natively-loaded ML inference plugin and an observable
//! load lifecycle. The crate resolves a bundled model asset to a fetchable
//! locator, asks an injected plugin loader for a callable forward pass, and
//! publishes `Loading -> Loaded | Error` to any number of observers,
//! re-running the load whenever the observed asset changes.
//!
//! # Boundaries
//!
//! - The native inference engine is opaque: reached only through the
//!   [`model::PluginLoader`] trait, never linked here.
//! - Asset bundling is opaque: the [`model::AssetResolver`] seam maps an
//!   asset reference to a locator; [`model::BundleResolver`] covers the
//!   common bundled-file case.
//! - No CLI, persisted state, or network protocol is owned by this crate.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use inferlink::model::{BundleResolver, Delegate, LoadCoordinator, ModelAsset};
//! # use inferlink::model::{PluginLoader, InferencePlugin, PluginError, ResourceLocator};
//! # struct HostLoader;
//! # #[async_trait::async_trait]
//! # impl PluginLoader for HostLoader {
//! #     async fn load(&self, _: &ResourceLocator, _: Delegate)
//! #         -> Result<Arc<dyn InferencePlugin>, PluginError> { unimplemented!() }
//! # }
//!
//! # #[tokio::main] async fn main() {
//! let resolver = Arc::new(BundleResolver::new("bundle".into()));
//! let loader = Arc::new(HostLoader);
//! let coordinator = LoadCoordinator::new(resolver, loader);
//!
//! let mut states = coordinator.subscribe();
//! coordinator.observe(ModelAsset::new("models/detector.tflite"), Delegate::CoreMl);
//!
//! while states.changed().await.is_ok() {
//!     let state = states.borrow().clone();
//!     if let Some(plugin) = state.plugin() {
//!         // run frames through `plugin`
//!         break;
//!     }
//! }
//! # }
//! ```

pub mod config;
pub mod model;
pub mod telemetry;

pub use config::CoordinatorConfig;
pub use model::{Delegate, LoadCoordinator, LoadState, ModelAsset};
