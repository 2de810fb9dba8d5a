//! Model-load coordination.
//!
//! Resolves a bundled model asset to a fetchable locator, hands it to the
//! native plugin host, and publishes the load lifecycle to observers.

mod asset;
mod coordinator;
mod plugin;
mod state;

pub use asset::{AssetResolver, BundleResolver, ModelAsset, ResolveError, ResourceLocator};
pub use coordinator::LoadCoordinator;
pub use plugin::{Delegate, Frame, InferencePlugin, OutputTensor, PluginError, PluginLoader};
pub use state::LoadState;
