//! quire - console writing editor library
//!
//! Module layout:
//! - core: value types (events, commands, modes, errors, geometry)
//! - services: configuration, settings, key bindings, spelling, help
//! - models: document data (text buffer, properties, session log, file format)
//! - kernel: the observed document model, notifications and controllers
//! - views: render adapters bound to screen regions
//! - tui: the console capability and its terminal implementation
//! - app: the session orchestrator

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
pub mod services;
pub mod tui;
pub mod views;
