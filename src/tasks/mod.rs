//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a session.
//!
//! # Tasks
//! - Refresh: re-fetches cached locations at a fixed interval (polling mode)

mod refresh;

pub use refresh::{spawn_refresh_task, RefreshHandle};
