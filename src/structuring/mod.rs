pub mod envelope;
pub mod extract;
pub mod normalize;
pub mod prompt;
pub mod types;

pub use envelope::*;
pub use extract::*;
pub use normalize::*;
pub use prompt::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructuringError {
    /// No brace-delimited region located in the model reply. Recoverable:
    /// the user re-uploads and the caller re-runs the pipeline.
    #[error("no structured payload found in model reply")]
    NoPayloadFound,

    /// A candidate region was located but is not parseable as the schedule
    /// payload. Carries the candidate verbatim for diagnostics.
    #[error("malformed payload: {detail}")]
    MalformedPayload { candidate: String, detail: String },

    /// The inference response body held no usable reply text.
    #[error("inference response contained no reply text")]
    EmptyResponse,
}
