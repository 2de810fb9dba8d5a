//! Load lifecycle coordination for one observed model.
//!
//! Publishes `Loading -> Loaded | Error` over a watch channel and re-runs
//! the load whenever the observed asset changes. A generation counter
//! suppresses completions of superseded attempts so a stale load can never
//! overwrite fresher state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::CoordinatorConfig;
use crate::telemetry;

use super::asset::{AssetResolver, ModelAsset};
use super::plugin::{Delegate, PluginError, PluginLoader};
use super::state::LoadState;

/// Coordinates the asynchronous load lifecycle of one inference plugin.
///
/// One coordinator owns one observed model slot. Observers subscribe to a
/// live view of [`LoadState`]; any number may subscribe.
pub struct LoadCoordinator {
    resolver: Arc<dyn AssetResolver>,
    loader: Arc<dyn PluginLoader>,
    config: CoordinatorConfig,
    state_tx: watch::Sender<LoadState>,
    generation: Arc<AtomicU64>,
    // Guards both the observed-asset slot and state publication so a stale
    // task cannot publish between a generation bump and its Loading publish.
    observed: Arc<Mutex<Option<ModelAsset>>>,
}

impl LoadCoordinator {
    pub fn new(resolver: Arc<dyn AssetResolver>, loader: Arc<dyn PluginLoader>) -> Self {
        Self::with_config(resolver, loader, CoordinatorConfig::default())
    }

    pub fn with_config(
        resolver: Arc<dyn AssetResolver>,
        loader: Arc<dyn PluginLoader>,
        config: CoordinatorConfig,
    ) -> Self {
        let (state_tx, _) = watch::channel(LoadState::Loading);
        Self {
            resolver,
            loader,
            config,
            state_tx,
            generation: Arc::new(AtomicU64::new(0)),
            observed: Arc::new(Mutex::new(None)),
        }
    }

    /// Subscribe to the live load state.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state_tx.subscribe()
    }

    /// Current state snapshot.
    pub fn state(&self) -> LoadState {
        self.state_tx.borrow().clone()
    }

    /// Observe a model asset, starting a load cycle if the asset changed.
    ///
    /// Observing an asset equal to the current one is a no-op, regardless
    /// of the prior attempt's outcome. A changed asset always restarts at
    /// `Loading` and supersedes any attempt still in flight.
    ///
    /// Must be called from within a Tokio runtime; the load itself runs on
    /// a spawned task.
    pub fn observe(&self, asset: ModelAsset, delegate: Delegate) {
        let generation = {
            let mut observed = self.observed.lock().unwrap_or_else(|e| e.into_inner());
            if observed.as_ref() == Some(&asset) {
                debug!(asset = %asset, "asset unchanged, load not re-triggered");
                return;
            }
            *observed = Some(asset.clone());

            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            self.state_tx.send_replace(LoadState::Loading);
            generation
        };

        telemetry::record_load_started();
        info!(asset = %asset, delegate = ?delegate, generation, "model load started");

        // Resolution is synchronous; only the loader call suspends.
        let locator = match self.resolver.resolve(&asset) {
            Ok(locator) => locator,
            Err(e) => {
                warn!(asset = %asset, error = %e, "asset resolution failed");
                self.publish_error(generation);
                return;
            }
        };
        debug!(asset = %asset, locator = %locator, "asset resolved");

        let loader = self.loader.clone();
        let state_tx = self.state_tx.clone();
        let current_generation = self.generation.clone();
        let observed = self.observed.clone();
        let load_timeout = self.config.load_timeout;

        tokio::spawn(async move {
            let load = loader.load(&locator, delegate);
            let result = match load_timeout {
                Some(timeout) => tokio::time::timeout(timeout, load)
                    .await
                    .unwrap_or(Err(PluginError::Timeout)),
                None => load.await,
            };

            let state = match &result {
                Ok(plugin) => LoadState::Loaded(plugin.clone()),
                Err(e) => {
                    warn!(locator = %locator, error = %e, "plugin load failed");
                    LoadState::Error
                }
            };

            let published = {
                let _observed = observed.lock().unwrap_or_else(|e| e.into_inner());
                if current_generation.load(Ordering::SeqCst) == generation {
                    state_tx.send_replace(state);
                    true
                } else {
                    false
                }
            };

            if !published {
                telemetry::record_load_superseded();
                debug!(locator = %locator, generation, "stale load result suppressed");
            } else if result.is_ok() {
                telemetry::record_load_success();
                info!(locator = %locator, generation, "model loaded");
            } else {
                telemetry::record_load_failure();
            }
        });
    }

    fn publish_error(&self, generation: u64) {
        let _observed = self.observed.lock().unwrap_or_else(|e| e.into_inner());
        if self.generation.load(Ordering::SeqCst) == generation {
            self.state_tx.send_replace(LoadState::Error);
            telemetry::record_load_failure();
        } else {
            telemetry::record_load_superseded();
        }
    }
}
