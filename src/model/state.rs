//! Load lifecycle state published to observers.

use std::fmt;
use std::sync::Arc;

use super::plugin::InferencePlugin;

/// Current phase of a model-load attempt.
///
/// Exactly one variant is active at a time; the callable is present iff
/// the variant is `Loaded`. No error detail is carried here — failures of
/// any kind collapse to `Error`, with diagnostics going to the log only.
#[derive(Clone, Default)]
pub enum LoadState {
    /// A load attempt is in flight.
    #[default]
    Loading,
    /// The plugin is ready; holds a shared reference to its forward pass.
    Loaded(Arc<dyn InferencePlugin>),
    /// The most recent attempt failed. No retry happens until the observed
    /// asset changes.
    Error,
}

impl LoadState {
    /// Stable tag for logs and snapshots.
    pub fn status(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Error => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error)
    }

    /// The loaded plugin, if any.
    pub fn plugin(&self) -> Option<&Arc<dyn InferencePlugin>> {
        match self {
            LoadState::Loaded(plugin) => Some(plugin),
            _ => None,
        }
    }
}

impl fmt::Debug for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadState")
            .field("status", &self.status())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::plugin::{Frame, OutputTensor};

    struct NoopPlugin;

    impl InferencePlugin for NoopPlugin {
        fn run(&self, _frame: &Frame) -> Vec<OutputTensor> {
            Vec::new()
        }
    }

    #[test]
    fn callable_present_iff_loaded() {
        assert!(LoadState::Loading.plugin().is_none());
        assert!(LoadState::Error.plugin().is_none());

        let loaded = LoadState::Loaded(Arc::new(NoopPlugin));
        assert!(loaded.plugin().is_some());
    }

    #[test]
    fn status_tags() {
        assert_eq!(LoadState::Loading.status(), "loading");
        assert_eq!(LoadState::Error.status(), "error");
        assert_eq!(LoadState::Loaded(Arc::new(NoopPlugin)).status(), "loaded");
    }

    #[test]
    fn default_is_loading() {
        assert!(LoadState::default().is_loading());
    }
}
