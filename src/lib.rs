pub mod config;
pub mod structuring; // payload extraction + schema normalization
pub mod checklist; // stable identity + completion state
pub mod engine; // single entry point composing the pipeline
pub mod store; // checklist state persistence

pub use checklist::{assign_ids, reconcile, ChecklistState, IdentifiedEntry};
pub use engine::{run, run_on_response, ExtractionOutcome};
pub use structuring::{
    Schedule, ScheduleEntry, StructuringError, TimeBuckets, TimeOfDay,
};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries and harnesses embedding the engine.
/// `RUST_LOG` wins; otherwise the crate default filter applies.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
