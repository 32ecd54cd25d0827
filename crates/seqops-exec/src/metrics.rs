//! Per-run trace events for the engine.
//!
//! `emit_span` records one event for the run itself, one per lowered step
//! and one for the outcome, as key/value pairs under a `seqops` span. Without the
//! `tracing` feature it compiles to nothing. Installing a subscriber is left
//! to the embedding application.

#[cfg(feature = "tracing")]
pub fn emit_span(event: &str, key_values: &[(&str, String)]) {
    let span = tracing::span!(tracing::Level::TRACE, "seqops", event);
    let _entered = span.enter();
    for (k, v) in key_values {
        tracing::trace!(%event, %k, %v, "metric");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn emit_span(_event: &str, _key_values: &[(&str, String)]) {}
