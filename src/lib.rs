//! Linkshelf — a minimal desktop editor for JSON bookmark collections.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod controller;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
