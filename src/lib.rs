//! Library exports for reusing doodlepad subsystems.
//!
//! Exposes the editing model (surface, stroke controller, panels) alongside
//! configuration and export so a GUI shell or external tool can share
//! validation and serialization logic with the main binary.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod panel;
pub mod ui;
pub mod util;

pub use config::Config;
