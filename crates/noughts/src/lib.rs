//! Terminal front end for the noughts engine.
//!
//! The engine knows nothing about input or output; this crate renders the
//! board, reads moves, and calls the automated player after every human
//! move and every reset.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;

pub use config::{AppConfig, ConfigError};
pub use session::{Score, Session};
