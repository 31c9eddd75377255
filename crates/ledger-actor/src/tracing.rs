//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: start, shutdown, hook failures
//! - **Commands**: every `Execute` at `debug` with its payload, the outcome at `info`/`warn`
//! - **Client calls**: one span per call (`#[instrument]`)
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # narration + command outcomes
//! RUST_LOG=debug cargo run     # full command payloads
//! RUST_LOG=restaurant=debug cargo run
//! ```
//!
//! The compact format hides module paths (`with_target(false)`); the actor loop records a
//! `ledger_type` field instead, so lines stay short:
//!
//! ```text
//! INFO Command ok ledger_type="InventoryLedger" reply=Consume([])
//! WARN Command rejected ledger_type="OrderTracker" error=order 3 is not in stage Placed
//! ```

/// Initializes the tracing subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
