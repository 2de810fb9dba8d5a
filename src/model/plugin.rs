//! The boundary to the native inference plugin host.
//!
//! Everything behind `PluginLoader` is outside this crate: model format,
//! delegate support, and the forward pass itself.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::asset::ResourceLocator;

/// One inference input. Contents are opaque to the coordinator.
#[derive(Debug, Clone)]
pub struct Frame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self { data, width, height }
    }
}

/// One fixed-width floating-point array per model output tensor.
/// Shape and semantics are model-defined.
pub type OutputTensor = Box<[f32]>;

/// A loaded model's forward pass. Immutable once published; safe to call
/// from any thread without synchronization.
pub trait InferencePlugin: Send + Sync {
    /// Run one forward pass over a frame, returning the model's output
    /// tensors in declaration order.
    fn run(&self, frame: &Frame) -> Vec<OutputTensor>;
}

/// Hardware-acceleration hint for the plugin host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Delegate {
    /// CPU execution (default).
    #[default]
    None,
    /// Metal GPU delegate.
    Metal,
    /// CoreML delegate.
    CoreMl,
}

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Plugin host unavailable: {0}")]
    Unavailable(String),

    #[error("Delegate not supported by host: {0:?}")]
    UnsupportedDelegate(Delegate),

    #[error("Malformed model: {0}")]
    MalformedModel(String),

    #[error("Load timed out")]
    Timeout,

    #[error("Load failed: {0}")]
    Other(String),
}

/// Loads a model from a resolved locator and yields its forward pass.
///
/// The single point of contact with the native inference engine. Injected
/// into the coordinator so it can be faked in tests.
#[async_trait]
pub trait PluginLoader: Send + Sync {
    async fn load(
        &self,
        locator: &ResourceLocator,
        delegate: Delegate,
    ) -> Result<Arc<dyn InferencePlugin>, PluginError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegate_serializes_with_kebab_tags() {
        assert_eq!(serde_json::to_string(&Delegate::None).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&Delegate::Metal).unwrap(), "\"metal\"");
        assert_eq!(serde_json::to_string(&Delegate::CoreMl).unwrap(), "\"core-ml\"");
    }

    #[test]
    fn delegate_deserializes_from_tags() {
        let d: Delegate = serde_json::from_str("\"core-ml\"").unwrap();
        assert_eq!(d, Delegate::CoreMl);
    }
}
