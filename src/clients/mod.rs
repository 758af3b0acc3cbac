pub mod backend;

pub use backend::{BackendError, HttpBackend, MovieBackend};
