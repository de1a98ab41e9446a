#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod codec;
mod config;
mod environment;
mod error;
mod helpers;
mod manager;
mod params;
#[cfg(feature = "web")]
mod web;

// Public API
pub use config::{Config, HistoryMode};
pub use environment::{Environment, HistoryState, HistoryWrite, MemoryEnvironment};
pub use error::HistoryError;
pub use helpers::split_url;
pub use manager::{QueryStringManager, create_query_string_manager};
pub use params::{ParamValue, QueryParams};
#[cfg(feature = "web")]
pub use web::WindowEnvironment;

pub type Result<T> = core::result::Result<T, HistoryError>;
