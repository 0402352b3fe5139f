//! Settings panel library
//!
//! A curated catalog of popular editor settings, rendered as an interactive
//! panel whose changes are written straight back to the user's settings file.

pub mod config_io;
pub mod services;
pub mod settings;
pub mod view;

#[cfg(feature = "runtime")]
pub mod app;
#[cfg(feature = "runtime")]
pub mod config;
