//! HTTP Handlers

mod fallback;
mod service;
mod users;

pub use fallback::*;
pub use service::*;
pub use users::*;
