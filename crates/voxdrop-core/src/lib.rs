//! Types shared by the voxdrop crates

mod error;

pub use error::HttpError;
