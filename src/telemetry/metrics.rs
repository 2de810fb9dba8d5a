//! Load lifecycle counters via the `metrics` facade.
//!
//! No exporter is installed here; hosts wire up their own recorder.

use metrics::counter;

pub fn record_load_started() {
    counter!("inferlink_loads_started_total").increment(1);
}

pub fn record_load_success() {
    counter!("inferlink_loads_succeeded_total").increment(1);
}

pub fn record_load_failure() {
    counter!("inferlink_loads_failed_total").increment(1);
}

/// A completed attempt whose result was discarded because a newer asset
/// superseded it.
pub fn record_load_superseded() {
    counter!("inferlink_loads_superseded_total").increment(1);
}
