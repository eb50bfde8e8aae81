//! Configuration core of an SDL menu launcher.
//!
//! An INI file describes the look of the launcher, its gamepad bindings and
//! any number of menus of entries (title, icon, shell command). [`Settings`]
//! holds the result for the renderer to draw from.

pub mod cli;
pub mod config;
pub mod debug;
pub mod error;
pub mod gamepad;
pub mod ini;
pub mod ingest;
pub mod logging;
pub mod menu;
pub mod slideshow;
pub mod style;
pub mod util;

pub use config::Settings;
pub use error::Error;
