//! Headless client for the notes API: session handling, route guard,
//! query caching with invalidation, debounced search, and the form
//! validation rules the UI applies before touching the network.

pub mod api;
pub mod auth;
pub mod debounce;
pub mod error;
pub mod guard;
pub mod queries;
pub mod session;
pub mod types;
pub mod validate;
pub mod workspace;

pub use api::ApiClient;
pub use error::{Error, Result};
pub use workspace::Dashboard;
