//! Output stage for the Hevy import pipeline.
//!
//! Turns a [`MappedWorkout`](hevy_model::MappedWorkout) into the request
//! body the Hevy routines endpoint expects, and provides the small boundary
//! checks around that request: credential headers and reply validation.
//! Sending the request is left to the caller.

pub mod error;
pub mod headers;
pub mod payload;
pub mod response;

pub use error::{ConfigError, ValidationError};
pub use headers::{API_KEY_HEADER, CONTENT_TYPE_JSON, RequestHeaders};
pub use payload::{
    Payload, PayloadExercise, PayloadSet, SetType, build_payload, build_payload_from_json,
    check_unmapped,
};
pub use response::validate_response;
