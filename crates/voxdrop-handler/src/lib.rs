//! Speech file request handling
//!
//! Validates a request, synthesizes the text, stores the audio in the
//! configured bucket and answers with a presigned download link.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod event;
mod handler;
pub mod lambda;
mod request;
mod response;

pub use error::{HandlerError, ValidationError};
pub use event::ProxyEvent;
pub use handler::Handler;
pub use request::{MAX_OUTPUT_NAME_CHARS, MAX_TEXT_CHARS, SpeechFileRequest};
pub use response::{ProxyResponse, respond};
